pub mod manifest;
pub mod types;

pub use manifest::{find_download_url, ManifestClient};
pub use types::*;
