use std::io::Write;

use tracing::debug;

use crate::error::Result;
use crate::models::{LogEntry, Preferences};
use crate::state::store::KeyValueStore;

pub const KEY_LOG: &str = "consumption_log";
pub const KEY_PREFERENCES: &str = "preferences";

/// Consumption journal and preferences, layered over any key-value store.
///
/// The engine never sees this type; it receives plain `&[LogEntry]`
/// slices and numbers read out of it.
pub struct ConsumptionJournal<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> ConsumptionJournal<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> Result<Vec<LogEntry>> {
        let entries = match self.store.get(KEY_LOG)? {
            Some(json) => serde_json::from_str(&json)?,
            None => Vec::new(),
        };
        Ok(entries)
    }

    /// Entries consumed at or after `since_ms`, oldest first.
    pub fn entries_since(&self, since_ms: i64) -> Result<Vec<LogEntry>> {
        let mut entries: Vec<LogEntry> = self
            .entries()?
            .into_iter()
            .filter(|e| e.consumed_at >= since_ms)
            .collect();
        entries.sort_by_key(|e| e.consumed_at);
        Ok(entries)
    }

    /// Append one entry and persist.
    pub fn append(&mut self, entry: LogEntry) -> Result<()> {
        let mut entries = self.entries()?;
        debug!(
            drink = entry.drink_id.as_deref().unwrap_or("custom"),
            mg = entry.caffeine_mg,
            "logging consumption"
        );
        entries.push(entry);
        entries.sort_by_key(|e| e.consumed_at);
        self.store.set(KEY_LOG, &serde_json::to_string(&entries)?)
    }

    /// Drop all logged entries.
    pub fn clear(&mut self) -> Result<()> {
        self.store.delete(KEY_LOG)
    }

    /// Load preferences, falling back to defaults when absent.
    pub fn preferences(&self) -> Result<Preferences> {
        let prefs = match self.store.get(KEY_PREFERENCES)? {
            Some(json) => serde_json::from_str(&json)?,
            None => Preferences::default(),
        };
        Ok(prefs)
    }

    pub fn save_preferences(&mut self, prefs: &Preferences) -> Result<()> {
        self.store
            .set(KEY_PREFERENCES, &serde_json::to_string(prefs)?)
    }

    /// Reset preferences back to defaults.
    pub fn reset_preferences(&mut self) -> Result<()> {
        self.store.delete(KEY_PREFERENCES)
    }

    /// Write the full journal as CSV: drink_id, caffeine_mg, consumed_at.
    pub fn export_csv<W: Write>(&self, writer: W) -> Result<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        csv_writer.write_record(["drink_id", "caffeine_mg", "consumed_at"])?;
        for entry in self.entries()? {
            csv_writer.write_record([
                entry.drink_id.clone().unwrap_or_default(),
                format!("{}", entry.caffeine_mg),
                format!("{}", entry.consumed_at),
            ])?;
        }
        csv_writer.flush()?;
        Ok(())
    }
}
