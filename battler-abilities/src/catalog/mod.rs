mod catalog;
mod data_store;
mod local;

pub use catalog::AbilityCatalog;
pub use data_store::DataStore;
pub use local::LocalDataStore;
