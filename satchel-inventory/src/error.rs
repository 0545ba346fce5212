use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InventoryError {
    #[error("Slot {slot} is out of range for a container with {capacity} slots")]
    SlotOutOfRange { slot: usize, capacity: usize },
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i32),
    #[error("Unknown section: {0}. Valid sections: hotbar, storage, armor, utility, tools, backpack")]
    UnknownSection(String),
    #[error("Unknown sort type: {0}. Valid types: name, type, rarity")]
    UnknownSortType(String),
    #[error("Unknown item: {0}")]
    UnknownItem(String),
}
