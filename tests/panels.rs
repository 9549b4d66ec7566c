use devtools_patcher::config::TabsConfig;
use devtools_patcher::patcher::patches::panels::*;
use devtools_patcher::patcher::{Patch, PatchResult};

#[test]
fn test_inspector_view() {
    let patch = InspectorView;
    let input = "handleAction(context, actionId) {\n  switch (actionId) {}\n}\n_showDrawer(focus) {\n  this._drawer.show();\n}";
    let result = patch.apply(input).into_option().unwrap();
    assert!(result.contains("handleAction(context, actionId) { return false;\n  switch"));
    assert!(result.contains("_showDrawer(focus) { return false;\n  this._drawer.show();"));
}

#[test]
fn test_inspector_view_needs_both_anchors() {
    let patch = InspectorView;
    assert_eq!(patch.apply("handleAction(context, actionId) {}"), PatchResult::NoMatch);
    assert_eq!(patch.apply("_showDrawer(focus) {}"), PatchResult::NoMatch);
}

#[test]
fn test_select_tab() {
    let patch = SelectTab::new(&["elements".to_string(), "Styles".to_string()]);
    let result = patch.apply("selectTab(id, userGesture, forceFocus) {\n  if (!this._tabsById.has(id))");
    assert_eq!(
        result.into_option().unwrap(),
        "selectTab(id, userGesture, forceFocus) { if (id !== 'elements' && id !== 'Styles') return false;\n  if (!this._tabsById.has(id))"
    );
}

#[test]
fn test_select_tab_default_allow_list() {
    let patch = SelectTab::new(&TabsConfig::default().allowed);
    let condition = patch.condition();
    assert!(condition.starts_with("id !== 'elements'"));
    assert!(condition.ends_with("id !== 'Shortcuts'"));
    assert_eq!(condition.matches(" && ").count(), 14);
}

#[test]
fn test_select_tab_empty_allow_list_blocks_everything() {
    let patch = SelectTab::new(&[]);
    assert_eq!(patch.condition(), "true");
}

#[test]
fn test_select_tab_escapes_quotes() {
    let patch = SelectTab::new(&["it's".to_string()]);
    assert_eq!(patch.condition(), r"id !== 'it\'s'");
}

#[test]
fn test_main_tab_location() {
    let patch = MainTabLocation::new("elements");
    let input = "new UI.TabbedPane(InspectorFrontendHostInstance), 'panel', true, true, Root.Runtime.queryParam('panel'));";
    let result = patch.apply(input).into_option().unwrap();
    assert_eq!(result, "new UI.TabbedPane(InspectorFrontendHostInstance), 'panel', true, true, 'elements');");
    assert_eq!(patch.apply(&result), PatchResult::NoMatch);
}

#[test]
fn test_persist_request_blocking_tab() {
    let patch = PersistRequestBlockingTab;
    let result = patch.apply("this._title = title;\n    this._closeable = closeable;");
    assert_eq!(
        result.into_option().unwrap(),
        "this._title = title;\n    this._closeable = closeable; if (id === 'network.blocked-urls') { this._closeable = false; }"
    );
}

#[test]
fn test_quick_open() {
    let patch = QuickOpen;
    let input = "handleAction(context, actionId) {\n    switch (actionId) {";
    let result = patch.apply(input).into_option().unwrap();
    assert_eq!(result, "handleAction(context, actionId) { actionId = null; switch (actionId) {");
    assert_eq!(patch.apply(&result), PatchResult::NoMatch);
}

#[test]
fn test_config_values_with_line_breaks_stay_in_one_literal() {
    let patch = SelectTab::new(&["a\nb\r".to_string()]);
    assert_eq!(patch.condition(), r"id !== 'a\nb\r'");

    let patch = MainTabLocation::new("ele\nments");
    let input = "InspectorFrontendHostInstance), 'panel', true, true, Root.Runtime.queryParam('panel')";
    let result = patch.apply(input).into_option().unwrap();
    assert!(result.ends_with(r"'ele\nments'"));
    assert!(!result.contains('\n'));
}

#[test]
fn test_persist_request_blocking_tab_runs_once() {
    let patch = PersistRequestBlockingTab;
    let once = patch.apply("this._closeable = closeable;").into_option().unwrap();
    assert_eq!(patch.apply(&once), PatchResult::NoMatch);
    assert_eq!(once.matches("network.blocked-urls").count(), 1);
}
