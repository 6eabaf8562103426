//! Domain layer: containers and their cursors
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod bst;
pub mod chest;
pub mod cursor;
pub mod error;
pub mod item;
pub mod tree_display;

pub use bst::{BinarySearchTree, BstIterator, TreeNode};
pub use chest::{TreasureChest, TreasureChestItemIterator};
pub use cursor::{collect_remaining, Cursor, Values};
pub use error::{DomainError, DomainResult};
pub use item::{Item, ItemFilter, ItemType};
pub use tree_display::TreeNodeConvert;
