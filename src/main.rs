use devtools_patcher::*;

use anyhow::Result;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = config::AppConfig::load();

    let args: Vec<String> = std::env::args().collect();
    match args.get(1).map(|s| s.as_str()) {
        None | Some("patch") => run_patch(&config, args.get(2).map(PathBuf::from)).await,
        Some("download-link") => run_download_link(&config).await,
        Some(other) => {
            eprintln!("Unknown command: {}", other);
            eprintln!("Usage:");
            eprintln!("  devtools-patcher [patch] [dir]   Patch the vendored front-end in dir (default: $DEVTOOLS_DIR)");
            eprintln!("  devtools-patcher download-link   Print the download URL for $DOWNLOAD_RELEASE on $DOWNLOAD_PLATFORM");
            std::process::exit(1);
        }
    }
}

async fn run_patch(config: &config::AppConfig, dir: Option<PathBuf>) -> Result<()> {
    let patch_config = config.patch_config()?;
    tracing::info!("Patch configuration loaded from {:?}", config.patch_config_path);

    let root = dir.unwrap_or_else(|| config.devtools_dir.clone());
    tracing::info!("Patching front-end at {:?}", root);

    let pipeline = patcher::PatchPipeline::new(&patch_config)?;
    let report = pipeline.patch_tree(&root).await?;

    if !report.is_clean() {
        tracing::warn!(
            "{} patches found no match and {} target files were missing; the vendored front-end may have changed shape",
            report.no_match.len(),
            report.missing.len()
        );
    }
    Ok(())
}

async fn run_download_link(config: &config::AppConfig) -> Result<()> {
    let client = download_link::ManifestClient::new(&config.manifest_url)?;
    match client
        .fetch_download_url(&config.download_release, &config.download_platform)
        .await?
    {
        Some(url) => println!("{}", url),
        None => tracing::warn!(
            "No download for release {} on {}",
            config.download_release,
            config.download_platform
        ),
    }
    Ok(())
}
