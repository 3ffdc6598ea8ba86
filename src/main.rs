use chrono::{Duration, Local, TimeZone, Timelike};
use clap::Parser;
use rand::thread_rng;
use tracing_subscriber::EnvFilter;

use caffeine_coach_rs::cli::{Cli, Command};
use caffeine_coach_rs::engine::{
    active_from_log, adjusted_dose, consumed_since, recommend, sleep_guidance, sleep_verdict,
    EnergyLevel, ServingSize, ShotCount, SuggestOptions, TimeOfDay, ACTIVE_LOOKBACK_HOURS,
};
use caffeine_coach_rs::error::Result;
use caffeine_coach_rs::interface::{
    display_drink_list, display_guidance, display_suggestions, display_verdict, prompt_drink,
    prompt_yes_no,
};
use caffeine_coach_rs::models::{Drink, LogEntry, Preferences};
use caffeine_coach_rs::state::{
    default_catalog, load_catalog, ConsumptionJournal, JsonFileStore,
};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    let catalog = match &cli.catalog {
        Some(path) => load_catalog(path)?,
        None => default_catalog(),
    };

    let store = JsonFileStore::open(&cli.file)?;
    let mut journal = ConsumptionJournal::new(store);

    match command {
        Command::Check {
            drink,
            size,
            shots,
            hours,
        } => cmd_check(&catalog, &journal, &drink, size, shots, hours),
        Command::Log { drink, size, shots } => cmd_log(&catalog, &mut journal, &drink, size, shots),
        Command::Status => cmd_status(&journal),
        Command::Suggest {
            energy,
            time_of_day,
            hours,
            size,
            shots,
            max,
        } => cmd_suggest(&catalog, &journal, energy, time_of_day, hours, size, shots, max),
        Command::List => cmd_list(&catalog),
        Command::Export => cmd_export(&journal),
        Command::Reset {
            journal: clear_journal,
            preferences,
        } => cmd_reset(&mut journal, clear_journal, preferences),
    }
}

/// Current time as epoch milliseconds.
fn now_ms() -> i64 {
    Local::now().timestamp_millis()
}

/// Hours from now until the configured bedtime. Rolls to tomorrow when
/// today's bedtime has already passed.
fn hours_until_bedtime(prefs: &Preferences) -> f64 {
    let now = Local::now();
    let mut bedtime = now
        .with_hour(prefs.bedtime_hour)
        .and_then(|t| t.with_minute(0))
        .and_then(|t| t.with_second(0))
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(now);
    if bedtime <= now {
        bedtime += Duration::days(1);
    }
    (bedtime - now).num_minutes() as f64 / 60.0
}

/// Decide the hours-until-bed input for a suggestion query. Explicit
/// hours always win; an explicit time of day suppresses the bedtime
/// default so its proxy band drives selection; otherwise the configured
/// bedtime applies.
fn resolve_suggest_window(
    hours: Option<f64>,
    time_of_day: Option<TimeOfDay>,
    bedtime_hours: f64,
) -> Option<f64> {
    match (hours, time_of_day) {
        (Some(h), _) => Some(h),
        (None, Some(_)) => None,
        (None, None) => Some(bedtime_hours),
    }
}

/// Epoch milliseconds of local midnight, the daily-intake window start.
fn start_of_day_ms() -> i64 {
    let now = Local::now();
    let midnight = now.date_naive().and_hms_opt(0, 0, 0).unwrap_or_default();
    Local
        .from_local_datetime(&midnight)
        .single()
        .map(|t| t.timestamp_millis())
        .unwrap_or_else(|| now.timestamp_millis())
}

/// Verdict for a prospective drink against bedtime.
fn cmd_check(
    catalog: &[Drink],
    journal: &ConsumptionJournal<JsonFileStore>,
    query: &str,
    size: ServingSize,
    shots: ShotCount,
    hours: Option<f64>,
) -> Result<()> {
    let prefs = journal.preferences()?;
    let drink = prompt_drink(catalog, query)?;
    let hours = hours.unwrap_or_else(|| hours_until_bedtime(&prefs));

    let dose = adjusted_dose(drink, size, shots);
    let verdict = sleep_verdict(dose, hours, prefs.half_life_hours)?;
    display_verdict(drink, &verdict);
    Ok(())
}

/// Append a drink to the journal.
fn cmd_log(
    catalog: &[Drink],
    journal: &mut ConsumptionJournal<JsonFileStore>,
    query: &str,
    size: ServingSize,
    shots: ShotCount,
) -> Result<()> {
    let drink = prompt_drink(catalog, query)?;
    let dose = adjusted_dose(drink, size, shots);

    let confirmed = prompt_yes_no(
        &format!("Log {} ({:.0} mg)?", drink.name, dose),
        true,
    )?;
    if !confirmed {
        println!("Nothing logged.");
        return Ok(());
    }

    journal.append(LogEntry::new(Some(drink.id.clone()), dose, now_ms()))?;
    println!("Logged {} ({:.0} mg).", drink.name, dose);
    Ok(())
}

/// Guidance from the journal and preferences.
///
/// The active level looks back a full day so doses logged before
/// midnight still count; the daily-limit total stays calendar-day.
fn cmd_status(journal: &ConsumptionJournal<JsonFileStore>) -> Result<()> {
    let prefs = journal.preferences()?;
    let now = now_ms();

    let lookback_start = now - (ACTIVE_LOOKBACK_HOURS * 3_600_000.0) as i64;
    let recent = journal.entries_since(lookback_start)?;
    let active = active_from_log(&recent, now, prefs.half_life_hours)?;
    let consumed = consumed_since(&recent, start_of_day_ms());
    let hours = hours_until_bedtime(&prefs);

    let guidance = sleep_guidance(
        active,
        hours,
        consumed,
        prefs.daily_limit_mg,
        prefs.typical_dose_mg,
        prefs.half_life_hours,
    )?;
    display_guidance(&guidance, active, consumed);
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn cmd_suggest(
    catalog: &[Drink],
    journal: &ConsumptionJournal<JsonFileStore>,
    energy: EnergyLevel,
    time_of_day: Option<TimeOfDay>,
    hours: Option<f64>,
    size: ServingSize,
    shots: ShotCount,
    max: usize,
) -> Result<()> {
    let prefs = journal.preferences()?;
    let hours = resolve_suggest_window(hours, time_of_day, hours_until_bedtime(&prefs));
    let time_of_day = time_of_day.unwrap_or_else(|| TimeOfDay::from_hour(Local::now().hour()));

    let options = SuggestOptions {
        time_of_day,
        energy,
        hours_until_bed: hours,
        half_life_hours: prefs.half_life_hours,
        size,
        shots,
        max_results: max,
    };

    let picks = recommend(catalog, &options, &mut thread_rng())?;
    display_suggestions(&picks, size, shots);
    Ok(())
}

fn cmd_list(catalog: &[Drink]) -> Result<()> {
    let drinks: Vec<&Drink> = catalog.iter().collect();
    display_drink_list(&drinks, "Drink Catalog");
    Ok(())
}

fn cmd_export(journal: &ConsumptionJournal<JsonFileStore>) -> Result<()> {
    journal.export_csv(std::io::stdout())
}

fn cmd_reset(
    journal: &mut ConsumptionJournal<JsonFileStore>,
    clear_journal: bool,
    preferences: bool,
) -> Result<()> {
    if !clear_journal && !preferences {
        println!("Please specify at least one reset option:");
        println!("  --journal      Clear the consumption journal");
        println!("  --preferences  Restore default preferences");
        return Ok(());
    }

    if clear_journal {
        journal.clear()?;
        println!("Consumption journal cleared.");
    }

    if preferences {
        journal.reset_preferences()?;
        println!("Preferences restored to defaults.");
    }

    Ok(())
}
