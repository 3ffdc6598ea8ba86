pub mod cli;
pub mod engine;
pub mod error;
pub mod interface;
pub mod models;
pub mod state;

pub use error::{CoachError, Result};
pub use models::{Drink, Guidance, LogEntry, Verdict};
