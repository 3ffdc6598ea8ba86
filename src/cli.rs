use clap::{Parser, Subcommand};

use crate::engine::{EnergyLevel, ServingSize, ShotCount, TimeOfDay};

/// CaffeineCoach — will this coffee keep you awake?
#[derive(Parser, Debug)]
#[command(name = "caffeine_coach")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the state JSON file (journal + preferences).
    #[arg(short, long, default_value = "coach_state.json")]
    pub file: String,

    /// Path to a custom drink catalog JSON file.
    #[arg(long)]
    pub catalog: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check whether a drink is compatible with your bedtime.
    Check {
        /// Drink name or catalog id.
        drink: String,

        /// Serving size in ounces.
        #[arg(short, long, value_enum, default_value = "12")]
        size: ServingSize,

        /// Espresso shots.
        #[arg(long, value_enum, default_value = "1")]
        shots: ShotCount,

        /// Hours until bedtime; computed from preferences when omitted.
        #[arg(long)]
        hours: Option<f64>,
    },

    /// Log a drink you just had.
    Log {
        /// Drink name or catalog id.
        drink: String,

        /// Serving size in ounces.
        #[arg(short, long, value_enum, default_value = "12")]
        size: ServingSize,

        /// Espresso shots.
        #[arg(long, value_enum, default_value = "1")]
        shots: ShotCount,
    },

    /// Show your current caffeine status and guidance.
    Status,

    /// Suggest drinks that fit your energy level and bedtime.
    Suggest {
        /// Desired energy level.
        #[arg(short, long, value_enum, default_value = "medium")]
        energy: EnergyLevel,

        /// Time of day; derived from the clock when omitted.
        #[arg(long, value_enum)]
        time_of_day: Option<TimeOfDay>,

        /// Hours until bedtime; computed from preferences when omitted.
        #[arg(long)]
        hours: Option<f64>,

        /// Serving size used for the safety projection.
        #[arg(short, long, value_enum, default_value = "12")]
        size: ServingSize,

        /// Espresso shots used for the safety projection.
        #[arg(long, value_enum, default_value = "1")]
        shots: ShotCount,

        /// Maximum number of suggestions.
        #[arg(short, long, default_value_t = 3)]
        max: usize,
    },

    /// List the drink catalog.
    List,

    /// Export the consumption journal as CSV to stdout.
    Export,

    /// Reset stored state.
    Reset {
        /// Clear the consumption journal.
        #[arg(long)]
        journal: bool,

        /// Restore default preferences.
        #[arg(long)]
        preferences: bool,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Status
    }
}
