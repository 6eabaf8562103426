//! Treasure chest: a fixed item sequence and its category-filtered cursor.

use tracing::instrument;

use crate::domain::cursor::Cursor;
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::item::{Item, ItemFilter, ItemType};

/// Ordered, immutable collection of items.
///
/// Insertion order is the iteration order for every filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreasureChest {
    items: Vec<Item>,
}

impl Default for TreasureChest {
    fn default() -> Self {
        Self::new(vec![
            Item::new(ItemType::Potion, "Potion of courage"),
            Item::new(ItemType::Ring, "Ring of shadows"),
            Item::new(ItemType::Potion, "Potion of wisdom"),
            Item::new(ItemType::Potion, "Potion of blood"),
            Item::new(ItemType::Weapon, "Sword of silver +1"),
            Item::new(ItemType::Potion, "Potion of rust"),
            Item::new(ItemType::Potion, "Potion of healing"),
            Item::new(ItemType::Ring, "Ring of armor"),
            Item::new(ItemType::Weapon, "Steel halberd"),
            Item::new(ItemType::Weapon, "Dagger of poison"),
        ])
    }
}

impl FromIterator<Item> for TreasureChest {
    fn from_iter<I: IntoIterator<Item = Item>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl TreasureChest {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    /// Cursor over the items matching `filter`, in chest order.
    pub fn iterator(&self, filter: ItemFilter) -> TreasureChestItemIterator<'_> {
        TreasureChestItemIterator::new(self, filter)
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Cursor yielding the chest items that match a filter.
///
/// Holds a borrowed view of the items plus the position where the next
/// forward scan starts; the chest cannot change while the cursor lives.
#[derive(Debug, Clone)]
pub struct TreasureChestItemIterator<'a> {
    items: &'a [Item],
    filter: ItemFilter,
    idx: usize,
}

impl<'a> TreasureChestItemIterator<'a> {
    #[instrument(level = "trace", skip(chest))]
    pub fn new(chest: &'a TreasureChest, filter: ItemFilter) -> Self {
        Self {
            items: chest.items(),
            filter,
            idx: 0,
        }
    }

    pub fn filter(&self) -> ItemFilter {
        self.filter
    }

    /// Index of the next matching item at or after the scan position.
    fn find_next_idx(&self) -> Option<usize> {
        self.items[self.idx..]
            .iter()
            .position(|item| self.filter.matches(item))
            .map(|offset| self.idx + offset)
    }
}

impl<'a> Cursor for TreasureChestItemIterator<'a> {
    type Item = &'a Item;

    fn has_next(&self) -> bool {
        self.find_next_idx().is_some()
    }

    #[instrument(level = "trace", skip(self))]
    fn next(&mut self) -> DomainResult<&'a Item> {
        let found = self.find_next_idx().ok_or(DomainError::Exhausted)?;
        let items = self.items;
        self.idx = found + 1;
        Ok(&items[found])
    }
}
