use crate::patcher::{MatchRetention, Occurrence};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub devtools_dir: PathBuf,
    pub manifest_url: String,
    pub download_release: String,
    pub download_platform: String,
    pub patch_config_path: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PatchConfig {
    #[serde(default)]
    pub strict: bool,
    #[serde(default)]
    pub release: bool,
    pub patches: PatchToggles,
    #[serde(default)]
    pub tabs: TabsConfig,
    #[serde(default)]
    pub custom_rules: Vec<CustomRuleConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PatchToggles {
    pub common_revealer: bool,
    pub inspector_view: bool,
    pub main_view: bool,
    pub select_tab: bool,
    pub inspector_common_css: bool,
    #[serde(default)]
    pub quick_open: bool,
    #[serde(default)]
    pub main_tab_location: bool,
    #[serde(default)]
    pub persist_request_blocking_tab: bool,
    #[serde(default)]
    pub remove_break_on_context_menu: bool,
    #[serde(default)]
    pub host_theme_setting: bool,
    #[serde(default)]
    pub network_export_har: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TabsConfig {
    pub default_panel: String,
    pub allowed: Vec<String>,
}

impl Default for TabsConfig {
    fn default() -> Self {
        Self {
            default_panel: "elements".into(),
            allowed: [
                "elements",
                "Styles",
                "Computed",
                "accessibility.view",
                "elements.domProperties",
                "elements.domBreakpoints",
                "elements.eventListeners",
                "preferences",
                "workspace",
                "experiments",
                "blackbox",
                "devices",
                "throttling-conditions",
                "emulation-geolocations",
                "Shortcuts",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CustomRuleConfig {
    pub name: String,
    pub target: String,
    pub pattern: String,
    pub replacement: String,
    #[serde(default)]
    pub retention: MatchRetention,
    #[serde(default)]
    pub occurrence: Occurrence,
}

impl PatchConfig {
    pub fn from_toml(source: &str) -> Result<Self> {
        toml::from_str(source).context("Invalid patch configuration")
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("Could not read {}", path.display()))?;
        Self::from_toml(&source)
    }
}

impl AppConfig {
    pub fn load() -> Self {
        Self {
            devtools_dir: PathBuf::from(std::env::var("DEVTOOLS_DIR").unwrap_or_else(|_| "./out/tools/front_end".into())),
            manifest_url: std::env::var("MANIFEST_URL").unwrap_or_else(|_| "https://thirdpartysource.microsoft.com/downloads".into()),
            download_release: std::env::var("DOWNLOAD_RELEASE").unwrap_or_else(|_| "81.0.416.0".into()),
            download_platform: std::env::var("DOWNLOAD_PLATFORM").unwrap_or_else(|_| "Windows x64".into()),
            patch_config_path: PathBuf::from(std::env::var("PATCH_CONFIG").unwrap_or_else(|_| "patch_config.toml".into())),
        }
    }

    pub fn patch_config(&self) -> Result<PatchConfig> {
        PatchConfig::from_file(&self.patch_config_path)
    }
}
