use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

/// Slot counts of every inventory section.
///
/// Capacities are fixed for the lifetime of an inventory; a layout change only
/// affects inventories created afterwards.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct InventoryLayout {
    pub hotbar: NonZeroUsize,
    pub storage: NonZeroUsize,
    pub armor: NonZeroUsize,
    pub utility: NonZeroUsize,
    pub tools: NonZeroUsize,
    pub backpack: NonZeroUsize,
}

impl InventoryLayout {
    pub const DEFAULT_HOTBAR: NonZeroUsize = unsafe { NonZeroUsize::new_unchecked(9) };
    pub const DEFAULT_STORAGE: NonZeroUsize = unsafe { NonZeroUsize::new_unchecked(36) };
    pub const DEFAULT_ARMOR: NonZeroUsize = unsafe { NonZeroUsize::new_unchecked(4) };
    pub const DEFAULT_UTILITY: NonZeroUsize = unsafe { NonZeroUsize::new_unchecked(4) };
    pub const DEFAULT_TOOLS: NonZeroUsize = unsafe { NonZeroUsize::new_unchecked(23) };
    pub const DEFAULT_BACKPACK: NonZeroUsize = unsafe { NonZeroUsize::new_unchecked(9) };

    /// Total number of slots across all sections.
    pub fn total_slots(&self) -> usize {
        self.hotbar.get()
            + self.storage.get()
            + self.armor.get()
            + self.utility.get()
            + self.tools.get()
            + self.backpack.get()
    }
}

impl Default for InventoryLayout {
    fn default() -> Self {
        Self {
            hotbar: Self::DEFAULT_HOTBAR,
            storage: Self::DEFAULT_STORAGE,
            armor: Self::DEFAULT_ARMOR,
            utility: Self::DEFAULT_UTILITY,
            tools: Self::DEFAULT_TOOLS,
            backpack: Self::DEFAULT_BACKPACK,
        }
    }
}
