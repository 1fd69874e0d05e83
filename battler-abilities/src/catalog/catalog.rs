use std::sync::Arc;

use anyhow::Result;
use itertools::Itertools;
use once_cell::sync::OnceCell;

use crate::{
    abilities::Ability,
    catalog::{
        DataStore,
        LocalDataStore,
    },
    common::{
        FastHashMap,
        Id,
    },
    error::{
        WrapOptionError,
        WrapResultError,
        general_error,
    },
};

/// The bundled ability configuration table.
const STANDARD_ABILITIES: &str = include_str!("../../data/abilities.json");

static GLOBAL: OnceCell<AbilityCatalog> = OnceCell::new();

/// The table of every known ability, keyed by ID.
///
/// The catalog is built once and shared immutably afterwards. Abilities are reference-counted so
/// that dispatch can hold onto an ability while it mutates the battle.
#[derive(Debug, Default)]
pub struct AbilityCatalog {
    abilities: FastHashMap<Id, Arc<Ability>>,
}

impl AbilityCatalog {
    /// Creates a new catalog from built abilities.
    ///
    /// Fails if two abilities share an ID.
    pub fn new<I>(abilities: I) -> Result<Self>
    where
        I: IntoIterator<Item = Ability>,
    {
        let mut catalog = Self::default();
        for ability in abilities {
            if catalog.abilities.contains_key(&ability.id) {
                return Err(general_error(format!("duplicate ability {}", ability.id)));
            }
            catalog
                .abilities
                .insert(ability.id.clone(), Arc::new(ability));
        }
        log::debug!("built ability catalog with {} abilities", catalog.len());
        Ok(catalog)
    }

    /// Creates a new catalog from configuration data.
    pub fn from_data_store(data: &dyn DataStore) -> Result<Self> {
        let abilities = data
            .all_abilities()
            .wrap_error_with_message("failed to read abilities from data store")?;
        Self::new(
            abilities
                .into_iter()
                .map(|(id, data)| Ability::from_data(id, data)),
        )
    }

    /// Creates a new catalog from the bundled configuration table.
    pub fn standard() -> Result<Self> {
        let data = STANDARD_ABILITIES.parse::<LocalDataStore>()?;
        Self::from_data_store(&data)
    }

    /// Looks up an ability by ID.
    pub fn get(&self, id: &Id) -> Option<&Arc<Ability>> {
        self.abilities.get(id)
    }

    /// Number of abilities in the catalog.
    pub fn len(&self) -> usize {
        self.abilities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.abilities.is_empty()
    }

    /// Iterates over every ability, ordered by ID.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<Ability>> {
        self.abilities
            .values()
            .sorted_by(|a, b| a.id.cmp(&b.id))
    }

    /// Installs the process-wide catalog.
    ///
    /// The catalog can only be installed once.
    pub fn install(catalog: AbilityCatalog) -> Result<&'static AbilityCatalog> {
        GLOBAL
            .set(catalog)
            .map_err(|_| general_error("ability catalog is already installed"))?;
        GLOBAL.get().wrap_expectation("ability catalog missing after install")
    }

    /// The process-wide catalog.
    pub fn global() -> Result<&'static AbilityCatalog> {
        GLOBAL
            .get()
            .wrap_expectation("ability catalog has not been installed")
    }
}
