use clap::ValueEnum;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::engine::constants::*;
use crate::engine::decay::remaining_mg;
use crate::engine::serving::{adjusted_dose, ServingSize, ShotCount};
use crate::error::{CoachError, Result};
use crate::models::Drink;

/// Desired energy level for a suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EnergyLevel {
    Low,
    Medium,
    High,
}

/// Coarse time of day, used as a bedtime proxy when no explicit
/// hours-until-bed is supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl TimeOfDay {
    /// Derive from a 0-23 clock hour.
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            5..=11 => TimeOfDay::Morning,
            12..=16 => TimeOfDay::Afternoon,
            17..=20 => TimeOfDay::Evening,
            _ => TimeOfDay::Night,
        }
    }
}

/// Inputs for a recommendation query.
#[derive(Debug, Clone)]
pub struct SuggestOptions {
    pub time_of_day: TimeOfDay,
    pub energy: EnergyLevel,
    pub hours_until_bed: Option<f64>,
    pub half_life_hours: f64,
    pub size: ServingSize,
    pub shots: ShotCount,
    pub max_results: usize,
}

impl Default for SuggestOptions {
    fn default() -> Self {
        Self {
            time_of_day: TimeOfDay::Morning,
            energy: EnergyLevel::Medium,
            hours_until_bed: None,
            half_life_hours: DEFAULT_HALF_LIFE_HOURS,
            size: ServingSize::default(),
            shots: ShotCount::default(),
            max_results: DEFAULT_MAX_RESULTS,
        }
    }
}

/// Coarse pool bands, from loosest to tightest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Band {
    /// 8+ hours out (or daytime with no bedtime): energy-level ranges.
    Energy,
    /// 5-8 hours out: at most 50 mg nominal.
    Moderate,
    /// 2-5 hours out: at most 5 mg nominal.
    Strict,
    /// Under 2 hours: at most 2 mg nominal.
    LastCall,
}

fn select_band(time_of_day: TimeOfDay, hours_until_bed: Option<f64>) -> Band {
    match hours_until_bed {
        Some(h) if h >= BAND_RELAXED_HOURS => Band::Energy,
        Some(h) if h >= BAND_MODERATE_HOURS => Band::Moderate,
        Some(h) if h >= BAND_STRICT_HOURS => Band::Strict,
        Some(_) => Band::LastCall,
        // No bedtime given: late time of day stands in for it.
        None => match time_of_day {
            TimeOfDay::Evening => Band::Moderate,
            TimeOfDay::Night => Band::Strict,
            TimeOfDay::Morning | TimeOfDay::Afternoon => Band::Energy,
        },
    }
}

fn in_energy_band(drink: &Drink, energy: EnergyLevel) -> bool {
    let mg = drink.caffeine_mg;
    match energy {
        EnergyLevel::High => (HIGH_ENERGY_RANGE_MG.0..=HIGH_ENERGY_RANGE_MG.1).contains(&mg),
        EnergyLevel::Medium => (MEDIUM_ENERGY_RANGE_MG.0..=MEDIUM_ENERGY_RANGE_MG.1).contains(&mg),
        EnergyLevel::Low => mg <= LOW_ENERGY_MAX_MG || drink.has_tag(TAG_LOW_CAFFEINE),
    }
}

fn in_band(drink: &Drink, band: Band, energy: EnergyLevel) -> bool {
    match band {
        Band::Energy => in_energy_band(drink, energy),
        Band::Moderate => drink.caffeine_mg <= MODERATE_BAND_MAX_MG || drink.has_tag(TAG_LOW_CAFFEINE),
        Band::Strict => {
            drink.caffeine_mg <= STRICT_BAND_MAX_MG
                || drink.has_tag(TAG_DECAF)
                || drink.has_tag(TAG_LOW_CAFFEINE)
        }
        Band::LastCall => {
            drink.caffeine_mg <= LAST_CALL_BAND_MAX_MG
                || drink.has_tag(TAG_DECAF)
                || drink.has_tag(TAG_LOW_CAFFEINE)
        }
    }
}

/// Keep only drinks whose serving-adjusted dose decays to `ceiling_mg` or
/// less by bedtime.
fn refine_by_projection<'a>(
    pool: &[&'a Drink],
    hours_until_bed: f64,
    ceiling_mg: f64,
    opts: &SuggestOptions,
) -> Result<Vec<&'a Drink>> {
    let mut refined = Vec::with_capacity(pool.len());
    for drink in pool {
        let dose = adjusted_dose(drink, opts.size, opts.shots);
        let projected = remaining_mg(dose, hours_until_bed, opts.half_life_hours)?;
        if projected <= ceiling_mg {
            refined.push(*drink);
        }
    }
    Ok(refined)
}

/// Suggest up to `max_results` drinks compatible with the query.
///
/// Two-phase filter (coarse time band, then decay-safety refinement with a
/// relaxed fallback when choices are scarce), followed by a
/// sort-then-shuffle-a-window variety selection. An empty result means "no
/// suggestions", not an error.
///
/// The RNG is injected so callers can seed it; the shuffle is a variety
/// mechanism, not a security control.
pub fn recommend<'a, R: Rng + ?Sized>(
    catalog: &'a [Drink],
    opts: &SuggestOptions,
    rng: &mut R,
) -> Result<Vec<&'a Drink>> {
    if let Some(h) = opts.hours_until_bed {
        if h < 0.0 || !h.is_finite() {
            return Err(CoachError::InvalidInput(format!(
                "hours until bed must be non-negative, got {h}"
            )));
        }
    }
    if opts.half_life_hours <= 0.0 {
        return Err(CoachError::InvalidInput(format!(
            "half-life must be positive, got {}",
            opts.half_life_hours
        )));
    }

    // Phase A: coarse pool from the time band.
    let band = select_band(opts.time_of_day, opts.hours_until_bed);
    let mut pool: Vec<&Drink> = catalog
        .iter()
        .filter(|d| in_band(d, band, opts.energy))
        .collect();
    debug!(band = ?band, pool = pool.len(), "coarse pool selected");

    // Phase B: safety refinement against the bedtime projection.
    if let Some(hours) = opts.hours_until_bed {
        let strict = refine_by_projection(&pool, hours, SAFE_THRESHOLD_MG, opts)?;
        pool = if strict.len() < MIN_POOL_BEFORE_RELAX {
            let relaxed = refine_by_projection(&pool, hours, RELAXED_THRESHOLD_MG, opts)?;
            // Trade safety margin for variety only when it actually helps.
            if relaxed.len() > strict.len() {
                debug!(strict = strict.len(), relaxed = relaxed.len(), "relaxed pool preferred");
                relaxed
            } else {
                strict
            }
        } else {
            strict
        };
    }

    if pool.len() <= opts.max_results {
        return Ok(pool);
    }

    // Bias toward appropriate strength, then shuffle a window so repeat
    // queries do not return the identical top-N.
    match opts.energy {
        EnergyLevel::Low => pool.sort_by(|a, b| {
            a.caffeine_mg
                .partial_cmp(&b.caffeine_mg)
                .unwrap_or(std::cmp::Ordering::Equal)
        }),
        EnergyLevel::Medium | EnergyLevel::High => pool.sort_by(|a, b| {
            b.caffeine_mg
                .partial_cmp(&a.caffeine_mg)
                .unwrap_or(std::cmp::Ordering::Equal)
        }),
    }
    pool.truncate(SHUFFLE_WINDOW);
    pool.shuffle(rng);
    pool.truncate(opts.max_results);

    debug!(results = pool.len(), "suggestions selected");
    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn catalog() -> Vec<Drink> {
        vec![
            Drink::new("drip_coffee", "Drip Coffee", Category::Brewed, 95.0),
            Drink::new("espresso", "Espresso", Category::Espresso, 75.0),
            Drink::new("latte", "Latte", Category::Milk, 80.0),
            Drink::new("black_tea", "Black Tea", Category::Tea, 47.0),
            Drink::new("green_tea", "Green Tea", Category::Tea, 28.0).with_tags(&["low_caffeine"]),
            Drink::new("decaf_coffee", "Decaf Coffee", Category::Brewed, 2.0).with_tags(&["decaf"]),
            Drink::new("herbal_tea", "Herbal Tea", Category::Tea, 0.0)
                .with_tags(&["decaf", "low_caffeine"]),
            Drink::new("energy_drink", "Energy Drink", Category::Energy, 160.0),
            Drink::new("cola", "Cola", Category::Soda, 34.0).with_tags(&["low_caffeine"]),
        ]
    }

    fn opts(energy: EnergyLevel, hours: Option<f64>) -> SuggestOptions {
        SuggestOptions {
            time_of_day: TimeOfDay::Morning,
            energy,
            hours_until_bed: hours,
            ..SuggestOptions::default()
        }
    }

    #[test]
    fn test_result_bounded_by_max() {
        let drinks = catalog();
        let mut rng = StdRng::seed_from_u64(7);
        let picks = recommend(&drinks, &opts(EnergyLevel::Low, None), &mut rng).unwrap();
        assert!(picks.len() <= DEFAULT_MAX_RESULTS);
    }

    #[test]
    fn test_empty_pool_is_not_an_error() {
        let drinks = vec![Drink::new("energy_drink", "Energy Drink", Category::Energy, 160.0)];
        let mut rng = StdRng::seed_from_u64(7);
        let picks = recommend(&drinks, &opts(EnergyLevel::Low, Some(1.0)), &mut rng).unwrap();
        assert!(picks.is_empty());
    }

    #[test]
    fn test_high_energy_band_with_long_runway() {
        let drinks = catalog();
        let mut rng = StdRng::seed_from_u64(7);
        let picks = recommend(&drinks, &opts(EnergyLevel::High, Some(10.0)), &mut rng).unwrap();
        for drink in &picks {
            assert!(
                (90.0..=220.0).contains(&drink.caffeine_mg),
                "{} outside high band",
                drink.id
            );
        }
    }

    #[test]
    fn test_safety_refinement_respects_relaxed_ceiling() {
        let drinks = catalog();
        let mut rng = StdRng::seed_from_u64(7);
        let o = opts(EnergyLevel::High, Some(8.0));
        let picks = recommend(&drinks, &o, &mut rng).unwrap();
        for drink in &picks {
            let dose = adjusted_dose(drink, o.size, o.shots);
            let projected = remaining_mg(dose, 8.0, o.half_life_hours).unwrap();
            assert!(
                projected <= RELAXED_THRESHOLD_MG,
                "{} projects to {projected:.1} mg",
                drink.id
            );
        }
    }

    #[test]
    fn test_near_bedtime_only_decaf_or_trace() {
        let drinks = catalog();
        let mut rng = StdRng::seed_from_u64(7);
        let picks = recommend(&drinks, &opts(EnergyLevel::Low, Some(1.0)), &mut rng).unwrap();
        assert!(!picks.is_empty());
        for drink in &picks {
            assert!(
                drink.caffeine_mg <= LAST_CALL_BAND_MAX_MG
                    || drink.has_tag(TAG_DECAF)
                    || drink.has_tag(TAG_LOW_CAFFEINE),
                "{} not a last-call drink",
                drink.id
            );
        }
    }

    #[test]
    fn test_evening_without_bedtime_uses_moderate_band() {
        let drinks = catalog();
        let mut rng = StdRng::seed_from_u64(7);
        let o = SuggestOptions {
            time_of_day: TimeOfDay::Evening,
            energy: EnergyLevel::High,
            hours_until_bed: None,
            ..SuggestOptions::default()
        };
        let picks = recommend(&drinks, &o, &mut rng).unwrap();
        for drink in &picks {
            assert!(
                drink.caffeine_mg <= MODERATE_BAND_MAX_MG || drink.has_tag(TAG_LOW_CAFFEINE),
                "{} too strong for an evening with no bedtime set",
                drink.id
            );
        }
    }

    #[test]
    fn test_seeded_shuffle_is_deterministic() {
        // More candidates than max_results forces the shuffle path.
        let mut drinks = catalog();
        for i in 0..12 {
            drinks.push(
                Drink::new(&format!("tisane_{i}"), &format!("Tisane {i}"), Category::Tea, 0.0)
                    .with_tags(&["decaf"]),
            );
        }
        let o = opts(EnergyLevel::Low, Some(1.0));

        let mut rng_a = StdRng::seed_from_u64(42);
        let mut rng_b = StdRng::seed_from_u64(42);
        let picks_a: Vec<String> = recommend(&drinks, &o, &mut rng_a)
            .unwrap()
            .iter()
            .map(|d| d.id.clone())
            .collect();
        let picks_b: Vec<String> = recommend(&drinks, &o, &mut rng_b)
            .unwrap()
            .iter()
            .map(|d| d.id.clone())
            .collect();
        assert_eq!(picks_a, picks_b);
        assert_eq!(picks_a.len(), DEFAULT_MAX_RESULTS);
    }

    #[test]
    fn test_low_energy_sort_ascends_before_shuffle() {
        // With pool exactly at max_results, order is preserved as-is.
        let drinks = vec![
            Drink::new("herbal_tea", "Herbal Tea", Category::Tea, 0.0).with_tags(&["decaf"]),
            Drink::new("decaf_coffee", "Decaf Coffee", Category::Brewed, 2.0).with_tags(&["decaf"]),
        ];
        let mut rng = StdRng::seed_from_u64(1);
        let picks = recommend(&drinks, &opts(EnergyLevel::Low, Some(0.5)), &mut rng).unwrap();
        let ids: Vec<&str> = picks.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["herbal_tea", "decaf_coffee"]);
    }

    #[test]
    fn test_negative_hours_rejected() {
        let drinks = catalog();
        let mut rng = StdRng::seed_from_u64(7);
        assert!(recommend(&drinks, &opts(EnergyLevel::Low, Some(-1.0)), &mut rng).is_err());
    }
}
