use crate::patcher::{MatchRetention, Patch, PatchRule};
use regex::Regex;
use std::sync::LazyLock;

static INSTANCE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"static instance\("#).unwrap()
});

pub struct HostThemeSetting;

impl Patch for HostThemeSetting {
    fn name(&self) -> &str { "host_theme_setting" }

    fn target(&self) -> &str { "theme_support/ThemeSupport.js" }

    fn applied_marker(&self) -> Option<&str> { Some("static hostThemeOverride()") }

    fn rules(&self) -> Vec<PatchRule> {
        vec![PatchRule::new(
            &INSTANCE_RE,
            "static hostThemeOverride() { \
             const host = globalThis.InspectorFrontendHost; \
             return (host && host.hostTheme) || null; } ",
        )
        .retain(MatchRetention::Suffix)
        .first_only()]
    }
}
