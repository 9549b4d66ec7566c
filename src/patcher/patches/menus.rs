use crate::patcher::{Patch, PatchRule};
use regex::Regex;
use std::sync::LazyLock;

static MORE_TOOLS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"const moreTools\s*=\s*[^;]+;"#).unwrap()
});

pub struct MainView;

impl Patch for MainView {
    fn name(&self) -> &str { "main_view" }

    fn target(&self) -> &str { "main/MainImpl.js" }

    fn rules(&self) -> Vec<PatchRule> {
        vec![PatchRule::new(
            &MORE_TOOLS_RE,
            "const moreTools = { defaultSection: () => ({ appendItem: () => {} }) };",
        )]
    }
}

static BREAKPOINTS_MENU_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"const breakpointsMenu\s*=\s*contextMenu\.debugSection\(\)\.appendSubMenuItem\([^;]*\);"#).unwrap()
});

// stub keeps the later appendCheckboxItem calls harmless
pub struct RemoveBreakOnContextMenu;

impl Patch for RemoveBreakOnContextMenu {
    fn name(&self) -> &str { "remove_break_on_context_menu" }

    fn target(&self) -> &str { "elements/ElementsTreeElement.js" }

    fn rules(&self) -> Vec<PatchRule> {
        vec![PatchRule::new(
            &BREAKPOINTS_MENU_RE,
            "const breakpointsMenu = { defaultSection: () => ({ appendCheckboxItem: () => {} }) };",
        )
        .first_only()]
    }
}
