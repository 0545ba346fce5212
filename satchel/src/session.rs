use std::str::FromStr;
use std::sync::Arc;

use satchel_config::InventoryLayout;
use satchel_inventory::{
    Inventory, InventoryError, ItemCatalog, ItemContainer, ItemStack, ItemStackTransaction,
    Section, SortType,
};
use thiserror::Error;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::registry::PlayerRegistry;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("No inventory session for player {0}")]
    UnknownPlayer(Uuid),
    #[error(transparent)]
    Inventory(#[from] InventoryError),
}

/// What a clear request targets: everything, or a single section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearTarget {
    All,
    Section(Section),
}

impl FromStr for ClearTarget {
    type Err = InventoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        s.parse().map(Self::Section)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionSummary {
    pub occupied_slots: usize,
    pub capacity: usize,
    pub total_items: u64,
}

impl From<&ItemContainer> for SectionSummary {
    fn from(container: &ItemContainer) -> Self {
        Self {
            occupied_slots: container.occupied_slots(),
            capacity: container.capacity(),
            total_items: container.total_quantity(),
        }
    }
}

/// A snapshot of the parts of an inventory a player usually asks about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventorySummary {
    pub held_item: Option<ItemStack>,
    pub active_hotbar_slot: usize,
    pub hotbar: SectionSummary,
    pub storage: SectionSummary,
    pub armor: SectionSummary,
}

impl InventorySummary {
    /// Items carried in the hotbar and storage together.
    pub fn total_items(&self) -> u64 {
        self.hotbar.total_items + self.storage.total_items
    }
}

/// Inventories of every connected player.
///
/// Each inventory sits behind its own mutex, so operations on one player run one at
/// a time while different players never wait on each other.
pub struct InventorySessions {
    layout: InventoryLayout,
    catalog: Arc<dyn ItemCatalog>,
    inventories: PlayerRegistry<Mutex<Inventory>>,
}

impl InventorySessions {
    pub fn new(layout: InventoryLayout, catalog: Arc<dyn ItemCatalog>) -> Self {
        Self {
            layout,
            catalog,
            inventories: PlayerRegistry::new(),
        }
    }

    pub fn catalog(&self) -> &dyn ItemCatalog {
        self.catalog.as_ref()
    }

    /// Creates an empty inventory for `player`. Returns `false` if they already have one.
    pub async fn join(&self, player: Uuid) -> bool {
        let created = self
            .inventories
            .insert(player, Mutex::new(Inventory::new(&self.layout)))
            .await;
        if created {
            log::debug!("Created inventory for {player}");
        } else {
            log::warn!("Player {player} joined twice, keeping the existing inventory");
        }
        created
    }

    /// Drops the inventory of `player`. Returns `false` if there was none.
    pub async fn leave(&self, player: &Uuid) -> bool {
        let removed = self.inventories.remove(player).await.is_some();
        if removed {
            log::debug!("Disposed inventory of {player}");
        }
        removed
    }

    pub async fn is_online(&self, player: &Uuid) -> bool {
        self.inventories.contains(player).await
    }

    pub async fn online_count(&self) -> usize {
        self.inventories.len().await
    }

    /// Runs `f` with exclusive access to the inventory of `player`.
    pub async fn with_inventory<R>(
        &self,
        player: &Uuid,
        f: impl FnOnce(&mut Inventory) -> R,
    ) -> Result<R, SessionError> {
        let inventory = self
            .inventories
            .get(player)
            .await
            .ok_or(SessionError::UnknownPlayer(*player))?;
        let mut inventory = inventory.lock().await;
        Ok(f(&mut inventory))
    }

    pub async fn give(
        &self,
        player: &Uuid,
        item_id: &str,
        quantity: i32,
    ) -> Result<ItemStackTransaction, SessionError> {
        let catalog = self.catalog.as_ref();
        let transaction = self
            .with_inventory(player, |inventory| inventory.give(catalog, item_id, quantity))
            .await??;

        if let Some(remainder) = transaction.remainder() {
            log::debug!(
                "Inventory of {player} is full, {} {item_id} could not fit",
                remainder.quantity()
            );
        }
        Ok(transaction)
    }

    /// Clears `target` (`"all"` or a section name) and returns how many items were removed.
    pub async fn clear(&self, player: &Uuid, target: &str) -> Result<u64, SessionError> {
        let target: ClearTarget = target.parse()?;
        self.with_inventory(player, |inventory| match target {
            ClearTarget::All => {
                let removed: u64 = Section::ALL
                    .into_iter()
                    .map(|section| inventory.section(section).total_quantity())
                    .sum();
                inventory.clear();
                removed
            }
            ClearTarget::Section(section) => {
                let container = inventory.section_mut(section);
                let removed = container.total_quantity();
                container.clear();
                removed
            }
        })
        .await
    }

    pub async fn inspect(&self, player: &Uuid) -> Result<InventorySummary, SessionError> {
        self.with_inventory(player, |inventory| InventorySummary {
            held_item: inventory.item_in_hand().cloned(),
            active_hotbar_slot: inventory.active_hotbar_slot(),
            hotbar: inventory.hotbar().into(),
            storage: inventory.storage().into(),
            armor: inventory.armor().into(),
        })
        .await
    }

    /// Sorts the storage of `player`. An unknown sort type is rejected before the
    /// inventory is locked.
    pub async fn sort(&self, player: &Uuid, sort_type: &str) -> Result<SortType, SessionError> {
        let sort_type: SortType = sort_type.parse()?;
        let catalog = self.catalog.as_ref();
        self.with_inventory(player, |inventory| inventory.sort_storage(sort_type, catalog))
            .await?;
        Ok(sort_type)
    }

    pub async fn select_hotbar_slot(&self, player: &Uuid, slot: usize) -> Result<(), SessionError> {
        self.with_inventory(player, |inventory| inventory.set_active_hotbar_slot(slot))
            .await??;
        Ok(())
    }
}
