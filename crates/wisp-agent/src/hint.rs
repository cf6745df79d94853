//! The deposit target hint.

use uuid::Uuid;
use wisp_core::CellPos;

/// Where an agent has been told to deliver its held item.
///
/// A single tagged value rather than two nullable fields: the container
/// position and the recipient entity are mutually exclusive destinations,
/// and making them one enum removes the "both set" state from the type
/// entirely.  Whoever commands the agent overwrites the hint; the deposit
/// behavior only ever *clears* it, and only when the referenced
/// container/entity has stopped existing or stopped accepting items.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DepositHint {
    /// No destination assigned.
    #[default]
    None,
    /// Deliver into the container at this cell.
    Cell(CellPos),
    /// Deliver to this living entity.
    Entity(Uuid),
}

impl DepositHint {
    #[inline]
    pub fn is_none(self) -> bool {
        matches!(self, DepositHint::None)
    }

    #[inline]
    pub fn is_some(self) -> bool {
        !self.is_none()
    }
}
