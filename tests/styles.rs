use devtools_patcher::patcher::patches::styles::*;
use devtools_patcher::patcher::{Patch, PatchResult};

const DEV_CSS: &str = ".main-tabbed-pane .tabbed-pane-header-contents {\n  flex: auto;\n}\n.tabbed-pane-right-toolbar {\n  margin-left: -4px;\n}\n.tabbed-pane-tab-slider {\n  height: 2px;\n}\n";

#[test]
fn test_inspector_common_css_dev() {
    let patch = InspectorCommonCss::new(false);
    assert_eq!(patch.target(), "ui/inspectorCommon.css");
    assert_eq!(
        patch.apply(DEV_CSS).into_option().unwrap(),
        ".main-tabbed-pane .tabbed-pane-header-contents {\n    display: none !important;\n}\n.tabbed-pane-right-toolbar {\n    display: none !important;\n}\n.tabbed-pane-tab-slider {\n    display: none !important;\n}\n"
    );
}

#[test]
fn test_inspector_common_css_release() {
    let patch = InspectorCommonCss::new(true);
    assert_eq!(patch.target(), "shell.js");
    let input = r"Runtime.cachedResources['ui/inspectorCommon.css'] = '.main-tabbed-pane .tabbed-pane-header-contents {\n  flex: auto;\n}\n.tabbed-pane-right-toolbar {\n  margin-left: -4px;\n}\n.tabbed-pane-tab-slider {\n  height: 2px;\n}';";
    let result = patch.apply(input).into_option().unwrap();
    assert!(result.contains(r".tabbed-pane-right-toolbar {\n    display: none !important;\n}"));
    assert!(result.contains(r".tabbed-pane-tab-slider {\n    display: none !important;\n}"));
    assert!(!result.contains('\n'));
}

#[test]
fn test_inspector_common_css_needs_all_selectors() {
    let patch = InspectorCommonCss::new(false);
    let input = ".tabbed-pane-right-toolbar {\n}\n.tabbed-pane-tab-slider {\n}\n";
    assert_eq!(patch.apply(input), PatchResult::NoMatch);
}

#[test]
fn test_hidden_block() {
    assert_eq!(hidden_block(".a", false), ".a {\n    display: none !important;\n}");
    assert_eq!(hidden_block(".a", true), r".a {\n    display: none !important;\n}");
}

#[test]
fn test_network_export_har() {
    let patch = NetworkExportHar::new(false);
    assert_eq!(patch.target(), "ui/toolbar.css");
    let input = ".toolbar-button {\n  white-space: nowrap;\n}\n.toolbar-button:hover {}";
    assert_eq!(
        patch.apply(input).into_option().unwrap(),
        ".toolbar-button {\n  white-space: nowrap;\n}\n.toolbar-button[aria-label='Export HAR...'] {\n    display: none !important;\n}\n.toolbar-button:hover {}"
    );
}

#[test]
fn test_network_export_har_runs_once() {
    let patch = NetworkExportHar::new(false);
    let once = patch
        .apply(".toolbar-button {\n  white-space: nowrap;\n}")
        .into_option()
        .unwrap();
    assert_eq!(patch.apply(&once), PatchResult::NoMatch);
    assert_eq!(once.matches("Export HAR").count(), 1);
}
