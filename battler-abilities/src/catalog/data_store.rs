use anyhow::Result;

use crate::{
    abilities::AbilityData,
    common::Id,
};

/// A source of ability configuration.
///
/// This trait can be implemented for different data sources, such as an external database or disk.
pub trait DataStore: Send + Sync {
    /// Gets every ability, keyed by ID.
    fn all_abilities(&self) -> Result<Vec<(Id, AbilityData)>>;
}
