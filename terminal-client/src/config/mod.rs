mod client_config;

use tile_merge_common::config::{ConfigManager, FileContentConfigProvider};

pub use client_config::ClientConfig;

pub type ClientConfigManager = ConfigManager<FileContentConfigProvider, ClientConfig>;
