use crate::patcher::{MatchRetention, Patch, PatchRule};
use regex::Regex;
use std::sync::LazyLock;

static HEADER_CONTENTS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(\.main-tabbed-pane\s*\.tabbed-pane-header-contents\s*\{([^\}]*)?\})"#).unwrap()
});

static RIGHT_TOOLBAR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(\.tabbed-pane-right-toolbar\s*\{([^\}]*)?\})"#).unwrap()
});

static TAB_SLIDER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(\.tabbed-pane-tab-slider\s*\{([^\}]*)?\})"#).unwrap()
});

static TOOLBAR_BUTTON_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\.toolbar-button\s*\{[^\}]*\}"#).unwrap()
});

const RELEASE_BUNDLE: &str = "shell.js";

const EXPORT_HAR_SELECTOR: &str = ".toolbar-button[aria-label='Export HAR...']";

/// release builds inline the CSS into JS string literals
pub fn line_separator(release: bool) -> &'static str {
    if release { "\\n" } else { "\n" }
}

pub fn hidden_block(selector: &str, release: bool) -> String {
    let sep = line_separator(release);
    format!("{selector} {{{sep}    display: none !important;{sep}}}")
}

pub struct InspectorCommonCss {
    release: bool,
}

impl InspectorCommonCss {
    pub fn new(release: bool) -> Self {
        Self { release }
    }
}

impl Patch for InspectorCommonCss {
    fn name(&self) -> &str { "inspector_common_css" }

    fn target(&self) -> &str {
        if self.release { RELEASE_BUNDLE } else { "ui/inspectorCommon.css" }
    }

    fn rules(&self) -> Vec<PatchRule> {
        vec![
            PatchRule::new(
                &HEADER_CONTENTS_RE,
                hidden_block(".main-tabbed-pane .tabbed-pane-header-contents", self.release),
            ),
            PatchRule::new(&RIGHT_TOOLBAR_RE, hidden_block(".tabbed-pane-right-toolbar", self.release)),
            PatchRule::new(&TAB_SLIDER_RE, hidden_block(".tabbed-pane-tab-slider", self.release)),
        ]
    }
}

pub struct NetworkExportHar {
    release: bool,
}

impl NetworkExportHar {
    pub fn new(release: bool) -> Self {
        Self { release }
    }
}

impl Patch for NetworkExportHar {
    fn name(&self) -> &str { "network_export_har" }

    fn target(&self) -> &str {
        if self.release { RELEASE_BUNDLE } else { "ui/toolbar.css" }
    }

    fn applied_marker(&self) -> Option<&str> { Some(EXPORT_HAR_SELECTOR) }

    fn rules(&self) -> Vec<PatchRule> {
        let sep = line_separator(self.release);
        let hidden = hidden_block(EXPORT_HAR_SELECTOR, self.release);
        vec![PatchRule::new(&TOOLBAR_BUTTON_RE, format!("{sep}{hidden}"))
            .retain(MatchRetention::Prefix)
            .first_only()]
    }
}
