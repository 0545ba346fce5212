use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Item Rarity
///
/// Declaration order is the rank: more common items compare lower.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    #[default]
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    pub fn rank(self) -> u8 {
        self as u8
    }
}

/// What the item catalog knows about an item id.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ItemDefinition {
    pub id: String,
    pub max_stack_size: u32,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub rarity: Rarity,
}

impl ItemDefinition {
    pub fn new(
        id: impl Into<String>,
        max_stack_size: u32,
        category: impl Into<String>,
        rarity: Rarity,
    ) -> Self {
        Self {
            id: id.into(),
            max_stack_size,
            category: category.into(),
            rarity,
        }
    }

    pub fn stack(&self, quantity: u32) -> ItemStack {
        ItemStack::new(self.id.clone(), quantity, self.max_stack_size)
    }
}

/// Resolves item ids to their definitions.
///
/// Lookups are synchronous and must not mutate anything.
pub trait ItemCatalog: Send + Sync {
    fn resolve(&self, item_id: &str) -> Option<ItemDefinition>;

    fn contains(&self, item_id: &str) -> bool {
        self.resolve(item_id).is_some()
    }
}

/// A plain in-memory catalog.
#[derive(Debug, Default, Clone)]
pub struct ItemRegistry {
    items: HashMap<String, ItemDefinition>,
}

impl ItemRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `definition`, replacing any previous definition with the same id.
    pub fn register(&mut self, definition: ItemDefinition) -> Option<ItemDefinition> {
        self.items.insert(definition.id.clone(), definition)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl FromIterator<ItemDefinition> for ItemRegistry {
    fn from_iter<T: IntoIterator<Item = ItemDefinition>>(iter: T) -> Self {
        let mut registry = Self::new();
        for definition in iter {
            registry.register(definition);
        }
        registry
    }
}

impl ItemCatalog for ItemRegistry {
    fn resolve(&self, item_id: &str) -> Option<ItemDefinition> {
        self.items.get(item_id).cloned()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ItemStack {
    item_id: String,
    pub(crate) quantity: u32,
    max_stack_size: u32,
}

impl ItemStack {
    pub fn new(item_id: impl Into<String>, quantity: u32, max_stack_size: u32) -> Self {
        Self {
            item_id: item_id.into(),
            quantity,
            max_stack_size: max_stack_size.max(1),
        }
    }

    pub fn item_id(&self) -> &str {
        &self.item_id
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn max_stack_size(&self) -> u32 {
        self.max_stack_size
    }

    pub fn is_empty(&self) -> bool {
        self.quantity == 0
    }

    pub fn is_full(&self) -> bool {
        self.quantity >= self.max_stack_size
    }

    /// Units that can still be merged into this stack.
    pub fn room(&self) -> u32 {
        self.max_stack_size.saturating_sub(self.quantity)
    }

    pub fn can_merge_with(&self, other: &ItemStack) -> bool {
        self.item_id == other.item_id
    }

    pub fn copy_with_count(&self, quantity: u32) -> Self {
        Self {
            item_id: self.item_id.clone(),
            quantity,
            max_stack_size: self.max_stack_size,
        }
    }

    /// Takes up to `amount` units off this stack and returns them as a new stack.
    pub fn split(&mut self, amount: u32) -> Self {
        let taken = amount.min(self.quantity);
        self.quantity -= taken;
        self.copy_with_count(taken)
    }

    /// Merges `other` into this stack up to the max stack size.
    ///
    /// Returns what did not fit, or `other` unchanged if the item ids differ.
    pub fn merge_from(&mut self, mut other: ItemStack) -> Option<ItemStack> {
        if !self.can_merge_with(&other) {
            return Some(other);
        }
        let moved = other.quantity.min(self.room());
        self.quantity += moved;
        other.quantity -= moved;
        (!other.is_empty()).then_some(other)
    }
}

#[cfg(test)]
mod test {
    use super::{ItemCatalog, ItemDefinition, ItemRegistry, ItemStack, Rarity};

    #[test]
    fn merge_caps_at_max_stack_size() {
        let mut stack = ItemStack::new("apple", 60, 64);
        let remainder = stack.merge_from(ItemStack::new("apple", 10, 64));

        assert_eq!(stack.quantity, 64);
        assert_eq!(remainder, Some(ItemStack::new("apple", 6, 64)));
    }

    #[test]
    fn merge_without_excess_leaves_no_remainder() {
        let mut stack = ItemStack::new("apple", 3, 64);
        assert_eq!(stack.merge_from(ItemStack::new("apple", 4, 64)), None);
        assert_eq!(stack.quantity, 7);
    }

    #[test]
    fn different_items_never_merge() {
        let mut stack = ItemStack::new("apple", 3, 64);
        let other = ItemStack::new("pear", 4, 64);

        assert_eq!(stack.merge_from(other.clone()), Some(other));
        assert_eq!(stack.quantity, 3);
    }

    #[test]
    fn split_clamps_to_quantity() {
        let mut stack = ItemStack::new("apple", 5, 64);
        let taken = stack.split(8);

        assert_eq!(taken.quantity, 5);
        assert!(stack.is_empty());
    }

    #[test]
    fn oversized_request_keeps_its_quantity_until_placed() {
        let mut request = ItemStack::new("apple", 100, 64);
        assert_eq!(request.quantity(), 100);
        assert!(request.is_full());
        assert_eq!(request.room(), 0);

        let placed = request.split(request.max_stack_size());
        assert_eq!(placed.quantity(), 64);
        assert_eq!(request.quantity(), 36);
    }

    #[test]
    fn zero_max_stack_size_is_raised_to_one() {
        let stack = ItemStack::new("sword", 1, 0);
        assert_eq!(stack.max_stack_size(), 1);
        assert!(stack.is_full());
    }

    #[test]
    fn rarity_rank_follows_declaration_order() {
        assert!(Rarity::Common < Rarity::Uncommon);
        assert!(Rarity::Epic < Rarity::Legendary);
        assert_eq!(Rarity::Common.rank(), 0);
    }

    #[test]
    fn registry_resolves_registered_items() {
        let registry: ItemRegistry = [ItemDefinition::new("apple", 64, "food", Rarity::Common)]
            .into_iter()
            .collect();

        assert!(registry.contains("apple"));
        assert!(registry.resolve("pear").is_none());
        assert_eq!(
            registry.resolve("apple").map(|def| def.stack(3)),
            Some(ItemStack::new("apple", 3, 64))
        );
    }
}
