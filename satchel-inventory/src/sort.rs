use std::fmt;
use std::str::FromStr;

use crate::error::InventoryError;
use crate::item::{ItemCatalog, ItemStack, Rarity};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortType {
    /// Item id, ASCII case-insensitive.
    Name,
    /// Item category, then item id.
    Type,
    /// Rarity rank, most common first, then item id.
    Rarity,
}

impl SortType {
    pub const ALL: [Self; 3] = [Self::Name, Self::Type, Self::Rarity];

    pub fn name(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Type => "type",
            Self::Rarity => "rarity",
        }
    }
}

impl fmt::Display for SortType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SortType {
    type Err = InventoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "name" => Ok(Self::Name),
            "type" => Ok(Self::Type),
            "rarity" => Ok(Self::Rarity),
            _ => Err(InventoryError::UnknownSortType(s.to_string())),
        }
    }
}

// Variant order matters: items the catalog cannot resolve sort last.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum KeyGroup {
    None,
    Category(String),
    Rarity(Rarity),
    Unresolved,
}

/// Ordering key of one stack under a [`SortType`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct SortKey {
    group: KeyGroup,
    name: String,
}

impl SortKey {
    pub fn new(stack: &ItemStack, sort_type: SortType, catalog: &dyn ItemCatalog) -> Self {
        let group = match sort_type {
            SortType::Name => KeyGroup::None,
            SortType::Type => catalog
                .resolve(stack.item_id())
                .map_or(KeyGroup::Unresolved, |item| {
                    KeyGroup::Category(item.category.to_ascii_lowercase())
                }),
            SortType::Rarity => catalog
                .resolve(stack.item_id())
                .map_or(KeyGroup::Unresolved, |item| KeyGroup::Rarity(item.rarity)),
        };
        Self {
            group,
            name: stack.item_id().to_ascii_lowercase(),
        }
    }
}

/// Orders `stacks` by `sort_type`. Stacks with equal keys keep their relative order.
pub fn sort_stacks(stacks: &mut [ItemStack], sort_type: SortType, catalog: &dyn ItemCatalog) {
    stacks.sort_by_cached_key(|stack| SortKey::new(stack, sort_type, catalog));
}
