//! Integration tests for Settings loading and chest files.
//!
//! Precedence: defaults → global file → local `.trove.toml` → TROVE_* env vars.
//! These tests use temp directories only and assume no TROVE_* variables are set;
//! the environment layer is covered by `config_env_test.rs`.

use std::fs;

use tempfile::TempDir;

use trove::application::services::TraversalService;
use trove::application::{load_chest, ApplicationError};
use trove::config::{local_config_path, Settings, DEFAULT_BST_VALUES};
use trove::domain::{ItemFilter, ItemType};

// ============================================================
// Settings layering
// ============================================================

#[test]
fn given_no_config_files_when_load_then_returns_defaults() {
    let dir = TempDir::new().unwrap();
    let missing_global = dir.path().join("missing.toml");

    let settings = Settings::load_from(Some(&missing_global), Some(dir.path())).unwrap();

    assert_eq!(settings, Settings::default());
    assert_eq!(settings.bst_values, DEFAULT_BST_VALUES.to_vec());
}

#[test]
fn given_global_and_local_config_when_load_then_local_wins_per_field() {
    let dir = TempDir::new().unwrap();
    let global = dir.path().join("trove.toml");
    fs::write(
        &global,
        r#"
default_filter = "ring"
bst_values = [2, 1, 3]
"#,
    )
    .unwrap();
    fs::write(local_config_path(dir.path()), r#"default_filter = "potion""#).unwrap();

    let settings = Settings::load_from(Some(&global), Some(dir.path())).unwrap();

    assert_eq!(settings.default_filter, ItemFilter::Only(ItemType::Potion));
    assert_eq!(settings.bst_values, vec![2, 1, 3]);
}

#[test]
fn given_invalid_filter_in_config_when_load_then_returns_config_error() {
    let dir = TempDir::new().unwrap();
    fs::write(local_config_path(dir.path()), r#"default_filter = "scroll""#).unwrap();

    let err = Settings::load_from(None, Some(dir.path())).unwrap_err();

    assert!(matches!(err, ApplicationError::Config { .. }), "{:?}", err);
}

#[test]
fn given_relative_chest_file_in_config_when_load_then_resolved_against_config_dir() {
    let dir = TempDir::new().unwrap();
    fs::write(local_config_path(dir.path()), r#"chest_file = "chest.toml""#).unwrap();

    let settings = Settings::load_from(None, Some(dir.path())).unwrap();

    assert_eq!(settings.chest_file, Some(dir.path().join("chest.toml")));
}

#[test]
fn given_relative_chest_file_in_global_config_when_load_then_resolved_against_global_dir() {
    let global_dir = TempDir::new().unwrap();
    let local_dir = TempDir::new().unwrap();
    let global = global_dir.path().join("trove.toml");
    fs::write(&global, r#"chest_file = "inventory/chest.toml""#).unwrap();

    let settings = Settings::load_from(Some(&global), Some(local_dir.path())).unwrap();

    assert_eq!(
        settings.chest_file,
        Some(global_dir.path().join("inventory/chest.toml"))
    );
}

// ============================================================
// Chest files
// ============================================================

#[test]
fn given_chest_file_when_walking_with_filter_then_yields_file_items() {
    let dir = TempDir::new().unwrap();
    let chest_path = dir.path().join("chest.toml");
    fs::write(
        &chest_path,
        r#"
[[items]]
type = "weapon"
name = "Axe of the north"

[[items]]
type = "ring"
name = "Ring of frost"

[[items]]
type = "weapon"
name = "Bow of dusk"
"#,
    )
    .unwrap();

    let settings = Settings {
        chest_file: Some(chest_path),
        ..Settings::default()
    };
    let service = TraversalService::new(settings);
    let walk = service
        .walk_chest(Some(ItemFilter::Only(ItemType::Weapon)), None)
        .unwrap();

    let names: Vec<_> = walk.items.iter().map(|i| i.name()).collect();
    assert_eq!(names, vec!["Axe of the north", "Bow of dusk"]);
}

#[test]
fn given_local_config_naming_chest_when_walking_from_elsewhere_then_reads_that_chest() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("chest.toml"),
        "[[items]]\ntype = \"ring\"\nname = \"Ring of tides\"\n",
    )
    .unwrap();
    fs::write(local_config_path(dir.path()), r#"chest_file = "chest.toml""#).unwrap();

    let settings = Settings::load_from(None, Some(dir.path())).unwrap();
    let walk = TraversalService::new(settings)
        .walk_chest(Some(ItemFilter::Any), None)
        .unwrap();

    let names: Vec<_> = walk.items.iter().map(|i| i.name()).collect();
    assert_eq!(names, vec!["Ring of tides"]);
}

#[test]
fn given_missing_chest_file_when_loading_then_returns_operation_failed() {
    let dir = TempDir::new().unwrap();
    let err = load_chest(&dir.path().join("nope.toml")).unwrap_err();
    assert!(
        matches!(err, ApplicationError::OperationFailed { .. }),
        "{:?}",
        err
    );
}

#[test]
fn given_malformed_chest_file_when_loading_then_returns_chest_file_error() {
    let dir = TempDir::new().unwrap();
    let chest_path = dir.path().join("chest.toml");
    fs::write(&chest_path, "[[items]]\nname = 3\n").unwrap();

    let err = load_chest(&chest_path).unwrap_err();
    assert!(matches!(err, ApplicationError::ChestFile { .. }), "{:?}", err);
}
