mod catalog;
mod journal;
mod store;

pub use catalog::{default_catalog, find_drink, load_catalog};
pub use journal::{ConsumptionJournal, KEY_LOG, KEY_PREFERENCES};
pub use store::{JsonFileStore, KeyValueStore, MemoryStore};
