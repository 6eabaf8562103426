//! Chest inventory files
//!
//! A chest file is TOML with one `[[items]]` table per item, in chest order:
//!
//! ```toml
//! [[items]]
//! type = "potion"
//! name = "Potion of courage"
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, instrument};

use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::domain::{Item, TreasureChest};

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct ChestFile {
    items: Vec<Item>,
}

/// Parse chest file content. `path` is only used for error messages.
pub fn parse_chest(content: &str, path: &Path) -> ApplicationResult<TreasureChest> {
    let file: ChestFile = toml::from_str(content).map_err(|e| ApplicationError::ChestFile {
        path: path.to_path_buf(),
        message: e.message().to_string(),
    })?;
    Ok(TreasureChest::new(file.items))
}

/// Read and parse a chest file.
#[instrument(level = "debug")]
pub fn load_chest(path: &Path) -> ApplicationResult<TreasureChest> {
    let content = fs::read_to_string(path).with_path_context("read chest file", path)?;
    let chest = parse_chest(&content, path)?;
    debug!("load_chest: {} items from {}", chest.len(), path.display());
    Ok(chest)
}
