use std::fmt::{
    self,
    Display,
};

use serde::{
    Deserialize,
    Serialize,
};

/// A handle to a Mon participating in a battle.
///
/// The battle owns all Mon state. Ability effects only ever address Mons through handles, so no
/// effect holds a reference into battle state across calls.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct MonHandle(pub usize);

impl Display for MonHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<usize> for MonHandle {
    fn from(value: usize) -> Self {
        Self(value)
    }
}

/// The ability slot of a Mon.
///
/// Every Mon has an active ability, and optionally a passive ability that resolves after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AbilitySlot {
    Active,
    Passive,
}

impl AbilitySlot {
    /// Slots in resolution order.
    pub const ALL: [AbilitySlot; 2] = [Self::Active, Self::Passive];

    pub fn is_passive(&self) -> bool {
        matches!(self, Self::Passive)
    }
}
