//! Item stacks — the unit of everything agents carry and containers hold.

use crate::ids::ItemKind;

/// A quantity of one item kind.
///
/// The empty stack is `count == 0` (the kind of an empty stack is
/// meaningless and ignored by all comparisons).  Partial insertion splits a
/// stack: the accepted portion is absorbed by the container, the remainder
/// comes back as a new stack of the same kind.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemStack {
    pub kind:  ItemKind,
    pub count: u32,
}

impl ItemStack {
    /// The canonical empty stack.
    pub const EMPTY: ItemStack = ItemStack {
        kind:  ItemKind::INVALID,
        count: 0,
    };

    #[inline]
    pub fn new(kind: ItemKind, count: u32) -> Self {
        Self { kind, count }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Same stack with a different count.  `0` yields `EMPTY`.
    #[inline]
    pub fn with_count(&self, count: u32) -> ItemStack {
        if count == 0 {
            ItemStack::EMPTY
        } else {
            ItemStack::new(self.kind, count)
        }
    }

    /// `true` if `other` is the same kind (both non-empty).
    #[inline]
    pub fn same_kind(&self, other: &ItemStack) -> bool {
        !self.is_empty() && !other.is_empty() && self.kind == other.kind
    }
}

impl Default for ItemStack {
    fn default() -> Self {
        ItemStack::EMPTY
    }
}

impl PartialEq for ItemStack {
    /// Empty stacks compare equal regardless of kind.
    fn eq(&self, other: &Self) -> bool {
        if self.is_empty() && other.is_empty() {
            return true;
        }
        self.kind == other.kind && self.count == other.count
    }
}

impl Eq for ItemStack {}

impl std::fmt::Display for ItemStack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            write!(f, "empty")
        } else {
            write!(f, "{}x{}", self.count, self.kind)
        }
    }
}
