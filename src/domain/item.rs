//! Tagged items stored in the treasure chest.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

/// Closed set of item categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    Weapon,
    Ring,
    Potion,
}

impl ItemType {
    pub const ALL: [ItemType; 3] = [ItemType::Weapon, ItemType::Ring, ItemType::Potion];

    pub fn as_str(&self) -> &'static str {
        match self {
            ItemType::Weapon => "weapon",
            ItemType::Ring => "ring",
            ItemType::Potion => "potion",
        }
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "weapon" => Ok(ItemType::Weapon),
            "ring" => Ok(ItemType::Ring),
            "potion" => Ok(ItemType::Potion),
            _ => Err(DomainError::UnknownCategory(s.to_string())),
        }
    }
}

/// Selection criterion for a chest cursor: a single category or the wildcard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ItemFilter {
    #[default]
    Any,
    Only(ItemType),
}

impl ItemFilter {
    pub fn matches(&self, item: &Item) -> bool {
        match self {
            ItemFilter::Any => true,
            ItemFilter::Only(item_type) => item.item_type == *item_type,
        }
    }
}

impl From<ItemType> for ItemFilter {
    fn from(item_type: ItemType) -> Self {
        ItemFilter::Only(item_type)
    }
}

impl fmt::Display for ItemFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemFilter::Any => f.write_str("any"),
            ItemFilter::Only(item_type) => item_type.fmt(f),
        }
    }
}

impl FromStr for ItemFilter {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("any") {
            return Ok(ItemFilter::Any);
        }
        s.parse::<ItemType>().map(ItemFilter::Only)
    }
}

impl TryFrom<String> for ItemFilter {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ItemFilter> for String {
    fn from(filter: ItemFilter) -> Self {
        filter.to_string()
    }
}

/// Immutable chest entry. Displays as its name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    #[serde(rename = "type")]
    item_type: ItemType,
    name: String,
}

impl Item {
    pub fn new(item_type: ItemType, name: impl Into<String>) -> Self {
        Self {
            item_type,
            name: name.into(),
        }
    }

    pub fn item_type(&self) -> ItemType {
        self.item_type
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
