use std::collections::HashSet;
use std::sync::LazyLock;

/// Population-average caffeine half-life in hours.
pub const DEFAULT_HALF_LIFE_HOURS: f64 = 5.0;

/// Remaining mg below which a dose is compatible with normal sleep onset.
pub const SAFE_THRESHOLD_MG: f64 = 50.0;

/// Remaining mg above which sleep disruption is likely.
pub const RISK_THRESHOLD_MG: f64 = 100.0;

/// Relaxed ceiling used when the strict recommendation pool runs thin.
pub const RELAXED_THRESHOLD_MG: f64 = 60.0;

/// Minimum strict-pool size before the relaxed fallback is considered.
pub const MIN_POOL_BEFORE_RELAX: usize = 10;

/// Window of top candidates the variety shuffle draws from.
pub const SHUFFLE_WINDOW: usize = 15;

/// Default number of suggestions returned.
pub const DEFAULT_MAX_RESULTS: usize = 3;

/// Caffeine content of one standard espresso shot.
pub const EXTRA_SHOT_MG: f64 = 75.0;

/// Default daily caffeine cap (FDA guidance for healthy adults).
pub const DEFAULT_DAILY_LIMIT_MG: f64 = 400.0;

/// Typical single-drink dose used in the limit-approaching check.
pub const DEFAULT_TYPICAL_DOSE_MG: f64 = 80.0;

/// Default target bedtime, hour of day.
pub const DEFAULT_BEDTIME_HOUR: u32 = 23;

/// Lookback for the active-level computation. A dose logged late last
/// night is still circulating after midnight, so this window is
/// physiological, not calendar-day like the daily-limit window.
pub const ACTIVE_LOOKBACK_HOURS: f64 = 24.0;

// ─────────────────────────────────────────────────────────────────────────────
// Recommendation bands (nominal mg, keyed by hours until bedtime)
// ─────────────────────────────────────────────────────────────────────────────

/// Hours-until-bed breakpoints for the coarse pool bands.
pub const BAND_RELAXED_HOURS: f64 = 8.0;
pub const BAND_MODERATE_HOURS: f64 = 5.0;
pub const BAND_STRICT_HOURS: f64 = 2.0;

/// Energy-level bands applied when bedtime is 8+ hours away.
pub const HIGH_ENERGY_RANGE_MG: (f64, f64) = (90.0, 220.0);
pub const MEDIUM_ENERGY_RANGE_MG: (f64, f64) = (60.0, 130.0);
pub const LOW_ENERGY_MAX_MG: f64 = 60.0;

/// Nominal ceilings for the tighter time bands.
pub const MODERATE_BAND_MAX_MG: f64 = 50.0;
pub const STRICT_BAND_MAX_MG: f64 = 5.0;
pub const LAST_CALL_BAND_MAX_MG: f64 = 2.0;

pub const TAG_DECAF: &str = "decaf";
pub const TAG_LOW_CAFFEINE: &str = "low_caffeine";

// ─────────────────────────────────────────────────────────────────────────────
// Serving adjustment sets
// ─────────────────────────────────────────────────────────────────────────────

/// Single-shot espresso drinks that accept extra shots.
pub static SHOT_ELIGIBLE_IDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    HashSet::from([
        "espresso",
        "americano",
        "latte",
        "cappuccino",
        "flat_white",
        "macchiato",
        "mocha",
        "cortado",
    ])
});

/// Brewed/milk/tea drinks whose dose scales linearly with serving size.
pub static SIZE_SCALABLE_IDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    HashSet::from([
        "drip_coffee",
        "decaf_coffee",
        "latte",
        "cappuccino",
        "mocha",
        "chai_latte",
        "matcha_latte",
        "black_tea",
        "green_tea",
        "herbal_tea",
    ])
});

/// Scalable drinks conventionally served at a 12 oz base instead of 8 oz.
pub static LARGE_BASE_IDS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| HashSet::from(["latte", "mocha", "chai_latte", "matcha_latte"]));

/// Default serving base in ounces.
pub const BASE_SIZE_OZ: f64 = 8.0;
pub const LARGE_BASE_SIZE_OZ: f64 = 12.0;

/// Whether an extra-shot request applies to this drink.
pub fn is_shot_eligible(drink_id: &str) -> bool {
    SHOT_ELIGIBLE_IDS.contains(drink_id)
}

/// Whether the dose scales with serving size for this drink.
pub fn is_size_scalable(drink_id: &str) -> bool {
    SIZE_SCALABLE_IDS.contains(drink_id)
}

/// Base serving size in ounces for a scalable drink.
pub fn base_size_oz(drink_id: &str) -> f64 {
    if LARGE_BASE_IDS.contains(drink_id) {
        LARGE_BASE_SIZE_OZ
    } else {
        BASE_SIZE_OZ
    }
}
