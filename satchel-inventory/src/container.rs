use std::num::NonZeroUsize;

use crate::error::InventoryError;
use crate::item::ItemStack;

/// A fixed number of slots, each empty or holding one stack.
///
/// Stored stacks are never empty and never exceed their max stack size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemContainer {
    slots: Box<[Option<ItemStack>]>,
}

impl ItemContainer {
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            slots: vec![None; capacity.get()].into_boxed_slice(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    fn check_slot(&self, slot: usize) -> Result<(), InventoryError> {
        if slot >= self.slots.len() {
            return Err(InventoryError::SlotOutOfRange {
                slot,
                capacity: self.slots.len(),
            });
        }
        Ok(())
    }

    pub fn get(&self, slot: usize) -> Result<Option<&ItemStack>, InventoryError> {
        self.check_slot(slot)?;
        Ok(self.slots[slot].as_ref())
    }

    /// Puts `stack` into `slot`, merging with a stack of the same item.
    ///
    /// Returns whatever did not fit. A slot holding a different item accepts nothing.
    pub fn add_at(
        &mut self,
        slot: usize,
        stack: ItemStack,
    ) -> Result<Option<ItemStack>, InventoryError> {
        self.check_slot(slot)?;
        Ok(self.insert_into(slot, stack))
    }

    // Caller guarantees `slot` is in range.
    fn insert_into(&mut self, slot: usize, mut stack: ItemStack) -> Option<ItemStack> {
        if stack.is_empty() {
            return None;
        }
        match self.slots[slot].as_mut() {
            Some(current) => current.merge_from(stack),
            None => {
                let max = stack.max_stack_size();
                self.slots[slot] = Some(stack.split(max));
                (!stack.is_empty()).then_some(stack)
            }
        }
    }

    /// Removes up to `quantity` units from `slot`, returning what was actually taken.
    pub fn remove_at(
        &mut self,
        slot: usize,
        quantity: i32,
    ) -> Result<Option<ItemStack>, InventoryError> {
        self.check_slot(slot)?;
        let Ok(quantity) = u32::try_from(quantity) else {
            return Err(InventoryError::InvalidQuantity(quantity));
        };

        let Some(current) = &mut self.slots[slot] else {
            return Ok(None);
        };
        let removed = current.split(quantity);
        if current.is_empty() {
            self.slots[slot] = None;
        }
        Ok((!removed.is_empty()).then_some(removed))
    }

    /// Empties `slot` and returns its previous content.
    pub fn take_at(&mut self, slot: usize) -> Result<Option<ItemStack>, InventoryError> {
        self.check_slot(slot)?;
        Ok(self.slots[slot].take())
    }

    pub fn clear(&mut self) {
        for slot in self.slots.iter_mut() {
            *slot = None;
        }
    }

    /// Non-empty slots in ascending slot order.
    ///
    /// Every call starts a fresh traversal. The container stays borrowed while the
    /// iterator lives, so it cannot be mutated mid-traversal.
    pub fn iter(&self) -> SlotIter<'_> {
        SlotIter {
            slots: &self.slots,
            index: 0,
        }
    }

    pub fn for_each(&self, mut visitor: impl FnMut(usize, &ItemStack)) {
        for (slot, stack) in self.iter() {
            visitor(slot, stack);
        }
    }

    pub fn occupied_slots(&self) -> usize {
        self.iter().count()
    }

    pub fn total_quantity(&self) -> u64 {
        self.iter().map(|(_, stack)| u64::from(stack.quantity)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    /// How many units of `stack`'s item this container could still take.
    pub fn room_for(&self, stack: &ItemStack) -> u64 {
        self.slots
            .iter()
            .map(|slot| match slot {
                Some(current) if current.can_merge_with(stack) => u64::from(current.room()),
                Some(_) => 0,
                None => u64::from(stack.max_stack_size()),
            })
            .sum()
    }

    /// Tops up existing stacks of the same item, in slot order.
    pub(crate) fn merge_into_existing(&mut self, mut stack: ItemStack) -> Option<ItemStack> {
        for slot in self.slots.iter_mut() {
            let Some(current) = slot else {
                continue;
            };
            if current.can_merge_with(&stack) && !current.is_full() {
                match current.merge_from(stack) {
                    Some(rest) => stack = rest,
                    None => return None,
                }
            }
        }
        Some(stack)
    }

    /// Starts new stacks in empty slots, in slot order.
    pub(crate) fn fill_empty(&mut self, mut stack: ItemStack) -> Option<ItemStack> {
        for slot in 0..self.slots.len() {
            if self.slots[slot].is_some() {
                continue;
            }
            match self.insert_into(slot, stack) {
                Some(rest) => stack = rest,
                None => return None,
            }
        }
        Some(stack)
    }

    /// Removes every stack, leaving all slots empty.
    pub(crate) fn drain_stacks(&mut self) -> Vec<ItemStack> {
        self.slots.iter_mut().filter_map(Option::take).collect()
    }

    /// Writes `stacks` into the leading slots; the rest become empty.
    ///
    /// Callers must not pass more stacks than there are slots.
    pub(crate) fn refill(&mut self, stacks: Vec<ItemStack>) {
        debug_assert!(stacks.len() <= self.slots.len());
        let mut stacks = stacks.into_iter();
        for slot in self.slots.iter_mut() {
            *slot = stacks.next();
        }
    }
}

/// Index based traversal over the occupied slots of an [`ItemContainer`].
pub struct SlotIter<'a> {
    slots: &'a [Option<ItemStack>],
    index: usize,
}

impl<'a> Iterator for SlotIter<'a> {
    type Item = (usize, &'a ItemStack);

    fn next(&mut self) -> Option<Self::Item> {
        while self.index < self.slots.len() {
            let slot = self.index;
            self.index += 1;
            if let Some(stack) = &self.slots[slot] {
                return Some((slot, stack));
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.slots.len() - self.index))
    }
}
