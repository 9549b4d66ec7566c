use serde::Deserialize;

/// one record of the third-party source downloads manifest; any field may be
/// null or absent in upstream data
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ManifestEntry {
    pub release: Option<String>,
    pub platform: Option<String>,
    pub url: Option<String>,
}

pub type Manifest = Vec<ManifestEntry>;
