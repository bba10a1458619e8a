//! Storage configuration from TOML (`[storage]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where chats are stored
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileStorageConfig {
    /// JSON file holding chats and messages. When unset, chats live in
    /// memory for the lifetime of the process.
    pub path: Option<PathBuf>,
}
