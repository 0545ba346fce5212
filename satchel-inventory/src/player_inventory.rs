use std::fmt;
use std::str::FromStr;

use satchel_config::InventoryLayout;

use crate::combined::CombinedItemContainer;
use crate::container::ItemContainer;
use crate::error::InventoryError;
use crate::item::{ItemCatalog, ItemStack};
use crate::sort::{sort_stacks, SortType};
use crate::transaction::ItemStackTransaction;

/// One of the six named parts of a player inventory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Hotbar,
    Storage,
    Armor,
    Utility,
    Tools,
    Backpack,
}

impl Section {
    pub const ALL: [Self; 6] = [
        Self::Hotbar,
        Self::Storage,
        Self::Armor,
        Self::Utility,
        Self::Tools,
        Self::Backpack,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Hotbar => "hotbar",
            Self::Storage => "storage",
            Self::Armor => "armor",
            Self::Utility => "utility",
            Self::Tools => "tools",
            Self::Backpack => "backpack",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Section {
    type Err = InventoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|section| section.name() == lower)
            .ok_or_else(|| InventoryError::UnknownSection(s.to_string()))
    }
}

#[derive(Debug, Clone)]
pub struct Inventory {
    hotbar: ItemContainer,
    storage: ItemContainer,
    armor: ItemContainer,
    utility: ItemContainer,
    tools: ItemContainer,
    backpack: ItemContainer,
    active_hotbar_slot: usize,
}

impl Inventory {
    pub fn new(layout: &InventoryLayout) -> Self {
        Self {
            hotbar: ItemContainer::new(layout.hotbar),
            storage: ItemContainer::new(layout.storage),
            armor: ItemContainer::new(layout.armor),
            utility: ItemContainer::new(layout.utility),
            tools: ItemContainer::new(layout.tools),
            backpack: ItemContainer::new(layout.backpack),
            active_hotbar_slot: 0,
        }
    }

    pub fn hotbar(&self) -> &ItemContainer {
        &self.hotbar
    }

    pub fn storage(&self) -> &ItemContainer {
        &self.storage
    }

    pub fn armor(&self) -> &ItemContainer {
        &self.armor
    }

    pub fn section(&self, section: Section) -> &ItemContainer {
        match section {
            Section::Hotbar => &self.hotbar,
            Section::Storage => &self.storage,
            Section::Armor => &self.armor,
            Section::Utility => &self.utility,
            Section::Tools => &self.tools,
            Section::Backpack => &self.backpack,
        }
    }

    pub fn section_mut(&mut self, section: Section) -> &mut ItemContainer {
        match section {
            Section::Hotbar => &mut self.hotbar,
            Section::Storage => &mut self.storage,
            Section::Armor => &mut self.armor,
            Section::Utility => &mut self.utility,
            Section::Tools => &mut self.tools,
            Section::Backpack => &mut self.backpack,
        }
    }

    /// Looks a section up by name, ignoring case.
    ///
    /// `"all"` is not a section; clearing everything is [`Inventory::clear`].
    pub fn section_container(&self, name: &str) -> Result<&ItemContainer, InventoryError> {
        Ok(self.section(name.parse()?))
    }

    pub fn section_container_mut(
        &mut self,
        name: &str,
    ) -> Result<&mut ItemContainer, InventoryError> {
        Ok(self.section_mut(name.parse()?))
    }

    /// The hotbar followed by storage, built fresh for this call.
    pub fn combined_hotbar_first(&mut self) -> CombinedItemContainer<'_> {
        CombinedItemContainer::new(vec![&mut self.hotbar, &mut self.storage])
    }

    /// Resolves `item_id` and adds `quantity` of it, hotbar first.
    ///
    /// Nothing is touched when the quantity is below 1 or the item is unknown.
    pub fn give(
        &mut self,
        catalog: &dyn ItemCatalog,
        item_id: &str,
        quantity: i32,
    ) -> Result<ItemStackTransaction, InventoryError> {
        let Some(quantity) = u32::try_from(quantity).ok().filter(|q| *q >= 1) else {
            return Err(InventoryError::InvalidQuantity(quantity));
        };
        let item = catalog
            .resolve(item_id)
            .ok_or_else(|| InventoryError::UnknownItem(item_id.to_string()))?;

        Ok(self.combined_hotbar_first().add_item_stack(item.stack(quantity)))
    }

    pub fn clear(&mut self) {
        for section in Section::ALL {
            self.section_mut(section).clear();
        }
    }

    /// Reorders the occupied storage slots and moves the empty ones to the end.
    ///
    /// Stacks are only moved, never merged. No other section is touched.
    pub fn sort_storage(&mut self, sort_type: SortType, catalog: &dyn ItemCatalog) {
        let mut stacks = self.storage.drain_stacks();
        sort_stacks(&mut stacks, sort_type, catalog);
        log::debug!("Sorted {} storage stacks by {sort_type}", stacks.len());
        self.storage.refill(stacks);
    }

    pub fn active_hotbar_slot(&self) -> usize {
        self.active_hotbar_slot
    }

    pub fn set_active_hotbar_slot(&mut self, slot: usize) -> Result<(), InventoryError> {
        if slot >= self.hotbar.capacity() {
            return Err(InventoryError::SlotOutOfRange {
                slot,
                capacity: self.hotbar.capacity(),
            });
        }
        self.active_hotbar_slot = slot;
        Ok(())
    }

    /// The stack in the active hotbar slot.
    pub fn item_in_hand(&self) -> Option<&ItemStack> {
        self.hotbar.get(self.active_hotbar_slot).ok().flatten()
    }
}

#[cfg(test)]
mod test {
    use std::num::NonZeroUsize;

    use satchel_config::InventoryLayout;

    use super::{Inventory, Section};
    use crate::error::InventoryError;
    use crate::item::{ItemDefinition, ItemRegistry, ItemStack, Rarity};
    use crate::sort::SortType;

    fn layout(hotbar: usize, storage: usize) -> InventoryLayout {
        InventoryLayout {
            hotbar: NonZeroUsize::new(hotbar).unwrap(),
            storage: NonZeroUsize::new(storage).unwrap(),
            ..Default::default()
        }
    }

    fn catalog() -> ItemRegistry {
        [
            ItemDefinition::new("apple", 64, "food", Rarity::Common),
            ItemDefinition::new("alpha", 64, "block", Rarity::Rare),
            ItemDefinition::new("zeta", 64, "block", Rarity::Common),
            ItemDefinition::new("sword", 1, "weapon", Rarity::Epic),
        ]
        .into_iter()
        .collect()
    }

    fn apples(quantity: u32) -> ItemStack {
        ItemStack::new("apple", quantity, 64)
    }

    fn storage_ids(inventory: &Inventory) -> Vec<Option<String>> {
        (0..inventory.storage().capacity())
            .map(|slot| {
                inventory
                    .storage()
                    .get(slot)
                    .unwrap()
                    .map(|stack| stack.item_id().to_string())
            })
            .collect()
    }

    #[test]
    fn new_uses_layout_capacities() {
        let inventory = Inventory::new(&InventoryLayout::default());
        assert_eq!(inventory.hotbar().capacity(), 9);
        assert_eq!(inventory.storage().capacity(), 36);
        assert_eq!(inventory.section(Section::Tools).capacity(), 23);
        assert_eq!(inventory.active_hotbar_slot(), 0);
    }

    #[test]
    fn section_lookup_is_case_insensitive() {
        let mut inventory = Inventory::new(&layout(2, 3));
        inventory
            .section_container_mut("BackPack")
            .unwrap()
            .add_at(0, apples(1))
            .unwrap();

        assert_eq!(inventory.section(Section::Backpack).occupied_slots(), 1);
        assert_eq!(inventory.section_container("storage").unwrap().capacity(), 3);
    }

    #[test]
    fn section_lookup_rejects_unknown_names() {
        let inventory = Inventory::new(&layout(2, 3));
        assert_eq!(
            inventory.section_container("all").err(),
            Some(InventoryError::UnknownSection("all".to_string()))
        );
        assert!(inventory.section_container("pockets").is_err());
    }

    #[test]
    fn clear_empties_every_section() {
        let mut inventory = Inventory::new(&layout(2, 3));
        for section in Section::ALL {
            inventory.section_mut(section).add_at(0, apples(3)).unwrap();
        }

        inventory.clear();
        for section in Section::ALL {
            assert!(inventory.section(section).is_empty(), "{section} not cleared");
        }
    }

    #[test]
    fn give_goes_to_hotbar_first() {
        let mut inventory = Inventory::new(&layout(1, 2));

        let transaction = inventory.give(&catalog(), "apple", 5).unwrap();

        assert_eq!(transaction.placed(), 5);
        assert!(transaction.is_complete());
        assert_eq!(inventory.hotbar().get(0).unwrap(), Some(&apples(5)));
        assert!(inventory.storage().is_empty());
    }

    #[test]
    fn give_overflows_into_storage() {
        let mut inventory = Inventory::new(&layout(1, 1));
        inventory.give(&catalog(), "apple", 64).unwrap();

        let transaction = inventory.give(&catalog(), "apple", 10).unwrap();

        assert_eq!(transaction.placed(), 10);
        assert_eq!(inventory.hotbar().get(0).unwrap(), Some(&apples(64)));
        assert_eq!(inventory.storage().get(0).unwrap(), Some(&apples(10)));
    }

    #[test]
    fn give_into_full_inventory() {
        let mut inventory = Inventory::new(&layout(1, 1));
        inventory.give(&catalog(), "apple", 128).unwrap();

        let transaction = inventory.give(&catalog(), "apple", 3).unwrap();
        assert_eq!(transaction.placed(), 0);
        assert_eq!(transaction.remainder(), Some(&apples(3)));
    }

    #[test]
    fn give_rejects_before_mutating() {
        let mut inventory = Inventory::new(&layout(1, 1));

        assert_eq!(
            inventory.give(&catalog(), "apple", 0).err(),
            Some(InventoryError::InvalidQuantity(0))
        );
        assert_eq!(
            inventory.give(&catalog(), "apple", -4).err(),
            Some(InventoryError::InvalidQuantity(-4))
        );
        assert_eq!(
            inventory.give(&catalog(), "unobtainium", 1).err(),
            Some(InventoryError::UnknownItem("unobtainium".to_string()))
        );
        assert!(inventory.hotbar().is_empty());
        assert!(inventory.storage().is_empty());
    }

    #[test]
    fn give_uses_catalog_stack_size() {
        let mut inventory = Inventory::new(&layout(2, 2));
        let transaction = inventory.give(&catalog(), "sword", 3).unwrap();

        assert_eq!(transaction.placed(), 3);
        assert_eq!(inventory.hotbar().occupied_slots(), 2);
        assert_eq!(inventory.storage().occupied_slots(), 1);
    }

    #[test]
    fn sort_by_name_compacts_and_keeps_stacks_apart() {
        let mut inventory = Inventory::new(&layout(1, 5));
        let storage = inventory.section_mut(Section::Storage);
        storage.add_at(0, ItemStack::new("zeta", 1, 64)).unwrap();
        storage.add_at(2, ItemStack::new("alpha", 2, 64)).unwrap();
        storage.add_at(4, ItemStack::new("alpha", 3, 64)).unwrap();

        inventory.sort_storage(SortType::Name, &catalog());

        assert_eq!(
            storage_ids(&inventory),
            [
                Some("alpha".to_string()),
                Some("alpha".to_string()),
                Some("zeta".to_string()),
                None,
                None
            ]
        );
        assert_eq!(inventory.storage().total_quantity(), 6);
    }

    #[test]
    fn sort_is_idempotent() {
        for sort_type in SortType::ALL {
            let mut inventory = Inventory::new(&layout(1, 6));
            let storage = inventory.section_mut(Section::Storage);
            storage.add_at(1, ItemStack::new("zeta", 4, 64)).unwrap();
            storage.add_at(2, apples(1)).unwrap();
            storage.add_at(3, ItemStack::new("alpha", 7, 64)).unwrap();
            storage.add_at(5, ItemStack::new("sword", 1, 1)).unwrap();

            inventory.sort_storage(sort_type, &catalog());
            let once = inventory.storage().clone();
            inventory.sort_storage(sort_type, &catalog());

            assert_eq!(inventory.storage(), &once);
        }
    }

    #[test]
    fn sort_leaves_other_sections_alone() {
        let mut inventory = Inventory::new(&layout(3, 3));
        inventory.hotbar.add_at(2, ItemStack::new("zeta", 1, 64)).unwrap();
        inventory.hotbar.add_at(0, ItemStack::new("alpha", 1, 64)).unwrap();
        let hotbar = inventory.hotbar().clone();

        inventory.sort_storage(SortType::Rarity, &catalog());
        assert_eq!(inventory.hotbar(), &hotbar);
    }

    #[test]
    fn active_slot_and_held_item() {
        let mut inventory = Inventory::new(&layout(3, 1));
        inventory.hotbar.add_at(1, apples(2)).unwrap();

        assert_eq!(inventory.item_in_hand(), None);
        inventory.set_active_hotbar_slot(1).unwrap();
        assert_eq!(inventory.item_in_hand(), Some(&apples(2)));

        assert_eq!(
            inventory.set_active_hotbar_slot(3),
            Err(InventoryError::SlotOutOfRange {
                slot: 3,
                capacity: 3
            })
        );
        assert_eq!(inventory.active_hotbar_slot(), 1);
    }
}
