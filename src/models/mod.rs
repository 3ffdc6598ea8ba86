mod decision;
mod drink;
mod log;
mod preferences;

pub use decision::{Guidance, GuidanceState, Severity, Verdict, VerdictCode};
pub use drink::{Category, Drink};
pub use log::LogEntry;
pub use preferences::Preferences;
