use crate::patcher::{MatchRetention, Patch, PatchRule};
use regex::Regex;
use std::sync::LazyLock;

static HANDLE_ACTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"handleAction\(context,\s*actionId\)\s*\{"#).unwrap()
});

static SHOW_DRAWER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"_showDrawer\(focus\)\s*\{"#).unwrap()
});

pub struct InspectorView;

impl Patch for InspectorView {
    fn name(&self) -> &str { "inspector_view" }

    fn target(&self) -> &str { "ui/InspectorView.js" }

    fn rules(&self) -> Vec<PatchRule> {
        vec![
            PatchRule::new(&HANDLE_ACTION_RE, "handleAction(context, actionId) { return false;"),
            PatchRule::new(&SHOW_DRAWER_RE, "_showDrawer(focus) { return false;"),
        ]
    }
}

static MAIN_TAB_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"InspectorFrontendHostInstance\),\s*'panel',\s*true,\s*true,\s*Root\.Runtime\.queryParam\('panel'\)"#).unwrap()
});

pub struct MainTabLocation {
    panel: String,
}

impl MainTabLocation {
    pub fn new(panel: &str) -> Self {
        Self { panel: panel.to_string() }
    }
}

impl Patch for MainTabLocation {
    fn name(&self) -> &str { "main_tab_location" }

    fn target(&self) -> &str { "ui/InspectorView.js" }

    fn rules(&self) -> Vec<PatchRule> {
        vec![PatchRule::new(
            &MAIN_TAB_RE,
            format!("InspectorFrontendHostInstance), 'panel', true, true, '{}'", js_single_quoted(&self.panel)),
        )]
    }
}

static SELECT_TAB_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"selectTab\(id,\s*userGesture,\s*forceFocus\)\s*\{"#).unwrap()
});

pub struct SelectTab {
    allowed: Vec<String>,
}

impl SelectTab {
    pub fn new(allowed: &[String]) -> Self {
        Self { allowed: allowed.to_vec() }
    }

    pub fn condition(&self) -> String {
        if self.allowed.is_empty() {
            return "true".to_string();
        }
        self.allowed
            .iter()
            .map(|id| format!("id !== '{}'", js_single_quoted(id)))
            .collect::<Vec<_>>()
            .join(" && ")
    }
}

impl Patch for SelectTab {
    fn name(&self) -> &str { "select_tab" }

    fn target(&self) -> &str { "ui/TabbedPane.js" }

    fn rules(&self) -> Vec<PatchRule> {
        vec![PatchRule::new(
            &SELECT_TAB_RE,
            format!("selectTab(id, userGesture, forceFocus) {{ if ({}) return false;", self.condition()),
        )]
    }
}

const KEEP_BLOCKED_URLS: &str = " if (id === 'network.blocked-urls') { this._closeable = false; }";

static CLOSEABLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"this\._closeable\s*=\s*closeable;"#).unwrap()
});

pub struct PersistRequestBlockingTab;

impl Patch for PersistRequestBlockingTab {
    fn name(&self) -> &str { "persist_request_blocking_tab" }

    fn target(&self) -> &str { "ui/TabbedPane.js" }

    fn applied_marker(&self) -> Option<&str> { Some(KEEP_BLOCKED_URLS) }

    fn rules(&self) -> Vec<PatchRule> {
        vec![PatchRule::new(&CLOSEABLE_RE, KEEP_BLOCKED_URLS).retain(MatchRetention::Prefix)]
    }
}

static QUICK_OPEN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"handleAction\(context,\s*actionId\)\s*\{\s*switch\s*\(actionId\)"#).unwrap()
});

pub struct QuickOpen;

impl Patch for QuickOpen {
    fn name(&self) -> &str { "quick_open" }

    fn target(&self) -> &str { "quick_open/CommandMenu.js" }

    fn rules(&self) -> Vec<PatchRule> {
        vec![PatchRule::new(
            &QUICK_OPEN_RE,
            "handleAction(context, actionId) { actionId = null; switch (actionId)",
        )]
    }
}

fn js_single_quoted(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('\'', "\\'")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
}
