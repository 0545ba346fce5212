use crate::container::ItemContainer;
use crate::item::ItemStack;
use crate::transaction::ItemStackTransaction;

/// Borrowed, ordered view over several containers.
///
/// The first member has the highest priority. The view holds no stacks itself
/// and cannot outlive the containers it borrows.
pub struct CombinedItemContainer<'a> {
    members: Vec<&'a mut ItemContainer>,
}

impl<'a> CombinedItemContainer<'a> {
    pub fn new(members: Vec<&'a mut ItemContainer>) -> Self {
        Self { members }
    }

    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    pub fn capacity(&self) -> usize {
        self.members.iter().map(|member| member.capacity()).sum()
    }

    pub fn room_for(&self, stack: &ItemStack) -> u64 {
        self.members.iter().map(|member| member.room_for(stack)).sum()
    }

    /// Places as much of `stack` as fits, member by member.
    ///
    /// Within a member, existing stacks of the item are topped up before empty
    /// slots are used. The next member is only touched once the current one is full
    /// for this item.
    pub fn add_item_stack(&mut self, stack: ItemStack) -> ItemStackTransaction {
        let requested = stack.quantity;
        let mut pending = (!stack.is_empty()).then_some(stack);

        for member in self.members.iter_mut() {
            let Some(stack) = pending.take() else {
                break;
            };
            pending = member
                .merge_into_existing(stack)
                .and_then(|rest| member.fill_empty(rest));
        }

        if let Some(rest) = &pending {
            log::debug!(
                "{} of {} {} did not fit into {} containers",
                rest.quantity,
                requested,
                rest.item_id(),
                self.members.len()
            );
        }
        ItemStackTransaction::new(requested, pending)
    }
}
