use serde::{Deserialize, Serialize};

/// One logged consumption event.
///
/// The journal snapshots the effective caffeine mg at log time so later
/// catalog edits never rewrite history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    /// Catalog id of the drink, if it came from the catalog.
    #[serde(default)]
    pub drink_id: Option<String>,

    /// Effective caffeine in milligrams at consumption time.
    pub caffeine_mg: f64,

    /// Consumption timestamp, epoch milliseconds.
    pub consumed_at: i64,
}

impl LogEntry {
    pub fn new(drink_id: Option<String>, caffeine_mg: f64, consumed_at: i64) -> Self {
        Self {
            drink_id,
            caffeine_mg,
            consumed_at,
        }
    }

    /// Hours elapsed between this entry and `now_ms`. Negative if the
    /// entry is in the future.
    pub fn hours_before(&self, now_ms: i64) -> f64 {
        (now_ms - self.consumed_at) as f64 / 3_600_000.0
    }
}
