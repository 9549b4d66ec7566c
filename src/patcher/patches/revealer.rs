use crate::patcher::{Patch, PatchRule};
use regex::Regex;
use std::sync::LazyLock;

const HOST_OBJECT: &str = "InspectorFrontendHost";

static REVEAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"let reveal\s*=\s*function\(revealable,\s*omitFocus\)\s*\{"#).unwrap()
});

/// Left open; the original body and its closing brace follow.
pub fn reveal_in_editor_head() -> String {
    let location = "revealable.uiSourceCode._url";
    format!(
        "let reveal = function revealInEditor(revealable, omitFocus) {{ \
         if (revealable && revealable.uiSourceCode && {location}) {{ \
         {HOST_OBJECT}.openInEditor({location}, revealable.lineNumber, revealable.columnNumber, omitFocus); \
         }} \
         return Promise.resolve();"
    )
}

pub struct CommonRevealer;

impl Patch for CommonRevealer {
    fn name(&self) -> &str { "common_revealer" }

    fn target(&self) -> &str { "common/Revealer.js" }

    fn rules(&self) -> Vec<PatchRule> {
        vec![PatchRule::new(&REVEAL_RE, reveal_in_editor_head())]
    }
}
