//! Item-transfer capability: the `TransferHandler` trait and the standard
//! slotted implementation.

use wisp_core::ItemStack;

// ── TransferHandler ───────────────────────────────────────────────────────────

/// The item-insertion capability exposed by a container or recipient entity.
///
/// Both methods return the **remainder**: the portion of `stack` that was
/// not accepted.  An empty remainder means full acceptance; a remainder
/// equal to the input means nothing was accepted.
///
/// `simulate_insert` followed by `commit_insert` is not atomic.  In the
/// single-threaded tick loop the pair runs back-to-back within one goal
/// tick, so the only interleaving is *between* agents' turns — a commit can
/// accept less than its simulation promised if another agent inserted in
/// between.  Callers handle that by re-reading the committed remainder
/// rather than trusting the simulated one.
pub trait TransferHandler {
    /// Remainder if `stack` were inserted now.  Never mutates.
    fn simulate_insert(&self, stack: &ItemStack) -> ItemStack;

    /// Insert `stack`, returning the remainder that did not fit.
    fn commit_insert(&mut self, stack: &ItemStack) -> ItemStack;
}

// ── SlotInventory ─────────────────────────────────────────────────────────────

/// A fixed number of slots, each holding up to `slot_capacity` of one item
/// kind.  Insertion is first-fit: existing stacks of the same kind are
/// topped up before empty slots are opened.
#[derive(Clone, Debug)]
pub struct SlotInventory {
    slots:         Vec<ItemStack>,
    slot_capacity: u32,
}

impl SlotInventory {
    pub fn new(slot_count: usize, slot_capacity: u32) -> Self {
        Self {
            slots: vec![ItemStack::EMPTY; slot_count],
            slot_capacity,
        }
    }

    /// An inventory with room for exactly `free` more units of any one
    /// kind.  Test and scenario helper: `free == 0` yields a full inventory.
    pub fn with_free_space(free: u32) -> Self {
        if free == 0 {
            SlotInventory::new(0, 0)
        } else {
            SlotInventory::new(1, free)
        }
    }

    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    pub fn slot(&self, i: usize) -> &ItemStack {
        &self.slots[i]
    }

    /// Total units of `kind` across all slots.
    pub fn total_of(&self, kind: wisp_core::ItemKind) -> u32 {
        self.slots
            .iter()
            .filter(|s| !s.is_empty() && s.kind == kind)
            .map(|s| s.count)
            .sum()
    }

    /// How many units of `stack` this inventory can absorb right now.
    fn acceptable(&self, stack: &ItemStack) -> u32 {
        if stack.is_empty() {
            return 0;
        }
        let mut room = 0;
        for slot in &self.slots {
            if slot.is_empty() {
                room += self.slot_capacity;
            } else if slot.kind == stack.kind {
                room += self.slot_capacity.saturating_sub(slot.count);
            }
            if room >= stack.count {
                return stack.count;
            }
        }
        room.min(stack.count)
    }
}

impl TransferHandler for SlotInventory {
    fn simulate_insert(&self, stack: &ItemStack) -> ItemStack {
        let accepted = self.acceptable(stack);
        stack.with_count(stack.count - accepted)
    }

    fn commit_insert(&mut self, stack: &ItemStack) -> ItemStack {
        if stack.is_empty() {
            return ItemStack::EMPTY;
        }
        let mut remaining = stack.count;

        // First pass: top up existing stacks of the same kind.
        for slot in self.slots.iter_mut() {
            if remaining == 0 {
                break;
            }
            if !slot.is_empty() && slot.kind == stack.kind {
                let take = remaining.min(self.slot_capacity.saturating_sub(slot.count));
                slot.count += take;
                remaining -= take;
            }
        }

        // Second pass: open empty slots.
        for slot in self.slots.iter_mut() {
            if remaining == 0 {
                break;
            }
            if slot.is_empty() {
                let take = remaining.min(self.slot_capacity);
                *slot = ItemStack::new(stack.kind, take);
                remaining -= take;
            }
        }

        stack.with_count(remaining)
    }
}
