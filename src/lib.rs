pub mod config;
pub mod download_link;
pub mod patcher;
