use std::{
    env,
    fs::File,
    path::{
        Path,
        PathBuf,
    },
    str::FromStr,
};

use anyhow::{
    Context,
    Error,
    Result,
};

use crate::{
    abilities::AbilityData,
    catalog::DataStore,
    common::{
        FastHashMap,
        Id,
    },
    error::general_error,
};

type AbilityTable = FastHashMap<String, AbilityData>;

/// An implementation of [`DataStore`] that reads abilities locally from disk.
///
/// Abilities are read from a single JSON file, or from every JSON file in a directory. Each file
/// is a table of ability data keyed by ID.
#[derive(Debug, Default)]
pub struct LocalDataStore {
    abilities: FastHashMap<Id, AbilityData>,
}

impl LocalDataStore {
    /// Creates a new instance of [`LocalDataStore`] that reads from the given path.
    ///
    /// Fails if the path does not exist, or if any file cannot be read or parsed.
    pub fn new<P>(path: P) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let mut store = Self::default();
        if path.is_dir() {
            for file in Self::json_files(path)? {
                store.extend(Self::read_table(&file)?)?;
            }
        } else if path.is_file() {
            store.extend(Self::read_table(path)?)?;
        } else {
            return Err(general_error(format!(
                "ability data path ({}) does not exist",
                path.display()
            )));
        }
        Ok(store)
    }

    /// Creates a new instance of [`LocalDataStore`] that reads from the path at the given
    /// environment variable.
    pub fn new_from_env(env_var: &str) -> Result<Self> {
        Self::new(env::var(env_var).context(format!("{env_var} not defined"))?)
    }

    /// Number of abilities in the store.
    pub fn len(&self) -> usize {
        self.abilities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.abilities.is_empty()
    }

    fn json_files(dir: &Path) -> Result<Vec<PathBuf>> {
        let mut files = dir
            .read_dir()
            .context(format!("failed to read directory {}", dir.display()))?
            .filter_map(|entry| Some(entry.ok()?.path()))
            .filter(|path| {
                path.is_file() && path.extension().is_some_and(|extension| extension == "json")
            })
            .collect::<Vec<_>>();
        files.sort();
        Ok(files)
    }

    fn read_table(path: &Path) -> Result<AbilityTable> {
        let path_name = path.to_string_lossy().to_string();
        serde_json::from_reader::<File, AbilityTable>(
            File::open(path).context(format!("{path_name} could not be opened"))?,
        )
        .context(format!("failed to read ability data from {path_name}"))
    }

    fn extend(&mut self, table: AbilityTable) -> Result<()> {
        for (key, data) in table {
            let id = Id::from(key);
            if self.abilities.contains_key(&id) {
                return Err(general_error(format!("duplicate ability data for {id}")));
            }
            self.abilities.insert(id, data);
        }
        Ok(())
    }
}

impl FromStr for LocalDataStore {
    type Err = Error;

    /// Reads a single table of ability data from a JSON string.
    fn from_str(json: &str) -> Result<Self> {
        let mut store = Self::default();
        store.extend(serde_json::from_str(json).context("failed to parse ability data")?)?;
        Ok(store)
    }
}

impl DataStore for LocalDataStore {
    fn all_abilities(&self) -> Result<Vec<(Id, AbilityData)>> {
        let mut abilities = self
            .abilities
            .iter()
            .map(|(id, data)| (id.clone(), data.clone()))
            .collect::<Vec<_>>();
        abilities.sort_by(|(a, _), (b, _)| a.cmp(b));
        Ok(abilities)
    }
}
