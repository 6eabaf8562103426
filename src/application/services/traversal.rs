//! Traversal service
//!
//! Builds the containers from settings and drives their cursors to exhaustion.

use std::path::Path;

use termtree::Tree;
use tracing::{debug, instrument, warn};

use crate::application::{load_chest, ApplicationResult};
use crate::config::Settings;
use crate::domain::{
    collect_remaining, BinarySearchTree, Item, ItemFilter, TreasureChest, TreeNodeConvert,
};

/// Trees taller than this are walked but not drawn.
pub const MAX_SHAPE_HEIGHT: usize = 64;

/// Output from walking the treasure chest.
#[derive(Debug, Clone)]
pub struct ChestWalk {
    /// Filter the cursor was created with
    pub filter: ItemFilter,
    /// Items in the order the cursor yielded them
    pub items: Vec<Item>,
}

/// Output from walking a binary search tree.
#[derive(Debug, Clone)]
pub struct BstWalk {
    /// Values in the order the cursor yielded them (ascending)
    pub values: Vec<i64>,
    /// Tree height in nodes
    pub height: usize,
    /// Largest auxiliary stack the cursor needed
    pub peak_depth: usize,
    /// Tree shape, when requested and no taller than [`MAX_SHAPE_HEIGHT`]
    pub shape: Option<Tree<String>>,
}

/// Service for the demonstration traversals.
pub struct TraversalService {
    settings: Settings,
}

impl TraversalService {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Resolve the chest: explicit file, then configured file, then built-in.
    pub fn chest(&self, file: Option<&Path>) -> ApplicationResult<TreasureChest> {
        match file.or(self.settings.chest_file.as_deref()) {
            Some(path) => load_chest(path),
            None => Ok(TreasureChest::default()),
        }
    }

    /// Walk the chest with `filter` (or the configured default filter).
    #[instrument(level = "debug", skip(self))]
    pub fn walk_chest(
        &self,
        filter: Option<ItemFilter>,
        file: Option<&Path>,
    ) -> ApplicationResult<ChestWalk> {
        let filter = filter.unwrap_or(self.settings.default_filter);
        let chest = self.chest(file)?;

        let mut cursor = chest.iterator(filter);
        let items = collect_remaining(&mut cursor)?
            .into_iter()
            .cloned()
            .collect::<Vec<_>>();
        debug!("walk_chest: {} of {} items match {}", items.len(), chest.len(), filter);

        Ok(ChestWalk { filter, items })
    }

    /// Insert `values` (or the configured defaults) and walk the tree in order.
    ///
    /// The shape is drawn only if `with_shape` is set and the tree is at most
    /// [`MAX_SHAPE_HEIGHT`] levels tall.
    #[instrument(level = "debug", skip(self, values))]
    pub fn walk_bst(
        &self,
        values: Option<&[i64]>,
        with_shape: bool,
    ) -> ApplicationResult<BstWalk> {
        let values = values.unwrap_or(self.settings.bst_values.as_slice());
        let tree = BinarySearchTree::from_values(values.iter().copied())?;
        let height = tree.height();

        let mut cursor = tree.iterator();
        let walked = collect_remaining(&mut cursor)?
            .into_iter()
            .copied()
            .collect::<Vec<_>>();
        let peak_depth = cursor.peak_depth();
        debug!(
            "walk_bst: {} values, height {}, peak depth {}",
            walked.len(),
            height,
            peak_depth
        );

        let shape = if !with_shape {
            None
        } else if height > MAX_SHAPE_HEIGHT {
            warn!("walk_bst: height {} exceeds {}, not drawing", height, MAX_SHAPE_HEIGHT);
            None
        } else {
            Some(tree.to_tree_string())
        };

        Ok(BstWalk {
            values: walked,
            height,
            peak_depth,
            shape,
        })
    }
}
