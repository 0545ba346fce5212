use crate::item::ItemStack;

/// Outcome of routing one stack through a combined container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemStackTransaction {
    requested: u32,
    placed: u32,
    remainder: Option<ItemStack>,
}

impl ItemStackTransaction {
    pub(crate) fn new(requested: u32, remainder: Option<ItemStack>) -> Self {
        let left = remainder.as_ref().map_or(0, |stack| stack.quantity);
        debug_assert!(left <= requested);
        Self {
            requested,
            placed: requested - left,
            remainder,
        }
    }

    pub fn requested(&self) -> u32 {
        self.requested
    }

    pub fn placed(&self) -> u32 {
        self.placed
    }

    /// The part that found no room, if any.
    pub fn remainder(&self) -> Option<&ItemStack> {
        self.remainder.as_ref()
    }

    pub fn into_remainder(self) -> Option<ItemStack> {
        self.remainder
    }

    pub fn is_complete(&self) -> bool {
        self.remainder.is_none()
    }

    pub fn is_partial(&self) -> bool {
        self.placed > 0 && self.remainder.is_some()
    }

    pub fn placed_nothing(&self) -> bool {
        self.placed == 0 && self.requested > 0
    }
}
