use super::applicator::{apply_all, PatchResult, PatchRule};
use crate::config::PatchConfig;
use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};

pub trait Patch: Send + Sync {
    fn name(&self) -> &str;

    /// `/`-separated, relative to the front-end root
    fn target(&self) -> &str;

    fn rules(&self) -> Vec<PatchRule>;

    /// Text only present once the patch has run; injections whose anchor
    /// survives them set this so a re-run is a no-op.
    fn applied_marker(&self) -> Option<&str> {
        None
    }

    fn apply(&self, content: &str) -> PatchResult {
        if self.applied_marker().is_some_and(|marker| content.contains(marker)) {
            return PatchResult::NoMatch;
        }
        apply_all(content, &self.rules())
    }
}

#[derive(Debug, Clone)]
pub struct PatchOutcome {
    pub content: String,
    pub applied: Vec<String>,
    pub no_match: Vec<String>,
}

#[derive(Debug, Default)]
pub struct PatchReport {
    pub patched_files: u32,
    pub applied: Vec<String>,
    pub no_match: Vec<String>,
    pub missing: Vec<PathBuf>,
}

impl PatchReport {
    pub fn is_clean(&self) -> bool {
        self.no_match.is_empty() && self.missing.is_empty()
    }
}

pub struct PatchPipeline {
    patches: Vec<Box<dyn Patch>>,
    strict: bool,
}

impl PatchPipeline {
    pub fn new(config: &PatchConfig) -> Result<Self> {
        use super::patches;
        let mut pipeline = Self { patches: Vec::new(), strict: config.strict };
        let toggles = &config.patches;

        if toggles.common_revealer {
            pipeline.patches.push(Box::new(patches::revealer::CommonRevealer));
        }
        if toggles.inspector_view {
            pipeline.patches.push(Box::new(patches::panels::InspectorView));
        }
        if toggles.main_tab_location {
            pipeline.patches.push(Box::new(patches::panels::MainTabLocation::new(&config.tabs.default_panel)));
        }
        if toggles.select_tab {
            pipeline.patches.push(Box::new(patches::panels::SelectTab::new(&config.tabs.allowed)));
        }
        if toggles.persist_request_blocking_tab {
            pipeline.patches.push(Box::new(patches::panels::PersistRequestBlockingTab));
        }
        if toggles.quick_open {
            pipeline.patches.push(Box::new(patches::panels::QuickOpen));
        }
        if toggles.main_view {
            pipeline.patches.push(Box::new(patches::menus::MainView));
        }
        if toggles.remove_break_on_context_menu {
            pipeline.patches.push(Box::new(patches::menus::RemoveBreakOnContextMenu));
        }
        if toggles.inspector_common_css {
            pipeline.patches.push(Box::new(patches::styles::InspectorCommonCss::new(config.release)));
        }
        if toggles.network_export_har {
            pipeline.patches.push(Box::new(patches::styles::NetworkExportHar::new(config.release)));
        }
        if toggles.host_theme_setting {
            pipeline.patches.push(Box::new(patches::settings::HostThemeSetting));
        }

        for custom in &config.custom_rules {
            let patch = patches::custom::CustomPatch::from_config(custom)
                .with_context(|| format!("Invalid custom rule {}", custom.name))?;
            pipeline.patches.push(Box::new(patch));
        }

        tracing::info!("Patch pipeline initialized with {} patches", pipeline.patches.len());
        Ok(pipeline)
    }

    pub fn len(&self) -> usize {
        self.patches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patches.is_empty()
    }

    pub fn names(&self) -> Vec<&str> {
        self.patches.iter().map(|p| p.name()).collect()
    }

    pub fn targets(&self) -> Vec<&str> {
        let mut targets: Vec<&str> = Vec::new();
        for patch in &self.patches {
            if !targets.contains(&patch.target()) {
                targets.push(patch.target());
            }
        }
        targets
    }

    pub fn patch_content(&self, target: &str, content: &str) -> PatchOutcome {
        let mut outcome = PatchOutcome {
            content: content.to_string(),
            applied: Vec::new(),
            no_match: Vec::new(),
        };

        for patch in self.patches.iter().filter(|p| p.target() == target) {
            match patch.apply(&outcome.content) {
                PatchResult::Modified(next) => {
                    outcome.content = next;
                    outcome.applied.push(patch.name().to_string());
                }
                PatchResult::NoMatch => {
                    outcome.no_match.push(patch.name().to_string());
                }
            }
        }
        outcome
    }

    pub async fn patch_tree(&self, root: &Path) -> Result<PatchReport> {
        let mut report = PatchReport::default();

        for target in self.targets() {
            let path = root.join(target);
            if !tokio::fs::try_exists(&path).await? {
                tracing::warn!("Target file not found: {:?}", path);
                report.missing.push(path);
                continue;
            }

            let content = tokio::fs::read_to_string(&path)
                .await
                .with_context(|| format!("Failed to read {}", path.display()))?;
            let outcome = self.patch_content(target, &content);

            for name in &outcome.no_match {
                tracing::warn!("Patch {} found no match in {}", name, target);
            }

            if outcome.content != content {
                tokio::fs::write(&path, &outcome.content)
                    .await
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                report.patched_files += 1;
                tracing::debug!("Patched: {} ({})", target, outcome.applied.join(", "));
            }

            report.applied.extend(outcome.applied);
            report.no_match.extend(outcome.no_match);
        }

        tracing::info!(
            "Patched {} files in {:?}: {} applied, {} without match, {} missing",
            report.patched_files,
            root,
            report.applied.len(),
            report.no_match.len(),
            report.missing.len()
        );

        if self.strict && !report.is_clean() {
            bail!(
                "Strict mode: patches without match [{}], missing files [{}]",
                report.no_match.join(", "),
                report
                    .missing
                    .iter()
                    .map(|p| p.display().to_string())
                    .collect::<Vec<_>>()
                    .join(", ")
            );
        }

        Ok(report)
    }
}
