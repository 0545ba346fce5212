//! Sectioned player inventories.
//!
//! An [`Inventory`] owns six fixed-size [`ItemContainer`]s. Additions that may span
//! sections go through a [`CombinedItemContainer`], a short-lived view that fills its
//! members in order and reports the unplaced rest in an [`ItemStackTransaction`].
//!
//! Nothing in this crate locks: mutation needs `&mut`, so callers sharing an inventory
//! between tasks must serialize access themselves.

mod combined;
mod container;
mod error;
pub mod item;
mod player_inventory;
pub mod sort;
mod transaction;

pub use combined::CombinedItemContainer;
pub use container::{ItemContainer, SlotIter};
pub use error::InventoryError;
pub use item::{ItemCatalog, ItemDefinition, ItemRegistry, ItemStack, Rarity};
pub use player_inventory::{Inventory, Section};
pub use sort::SortType;
pub use transaction::ItemStackTransaction;
