use rand::rngs::StdRng;
use rand::SeedableRng;

use caffeine_coach_rs::engine::{
    adjusted_dose, recommend, remaining_mg, EnergyLevel, SuggestOptions, TimeOfDay,
    RELAXED_THRESHOLD_MG,
};
use caffeine_coach_rs::state::default_catalog;

fn options(energy: EnergyLevel, hours: Option<f64>) -> SuggestOptions {
    SuggestOptions {
        time_of_day: TimeOfDay::Morning,
        energy,
        hours_until_bed: hours,
        ..SuggestOptions::default()
    }
}

#[test]
fn test_suggestions_respect_max_results() {
    let catalog = default_catalog();
    let mut rng = StdRng::seed_from_u64(11);

    for energy in [EnergyLevel::Low, EnergyLevel::Medium, EnergyLevel::High] {
        for hours in [None, Some(1.0), Some(3.0), Some(6.0), Some(10.0)] {
            let picks = recommend(&catalog, &options(energy, hours), &mut rng).unwrap();
            assert!(picks.len() <= 3, "{:?}/{:?} returned {}", energy, hours, picks.len());
        }
    }
}

#[test]
fn test_suggestions_project_under_safety_ceiling() {
    let catalog = default_catalog();
    let mut rng = StdRng::seed_from_u64(11);
    let opts = options(EnergyLevel::High, Some(8.0));

    let picks = recommend(&catalog, &opts, &mut rng).unwrap();
    for drink in &picks {
        let dose = adjusted_dose(drink, opts.size, opts.shots);
        let projected = remaining_mg(dose, 8.0, opts.half_life_hours).unwrap();
        assert!(
            projected <= RELAXED_THRESHOLD_MG,
            "{} projects to {projected:.1} mg at bedtime",
            drink.id
        );
    }
}

#[test]
fn test_late_night_suggestions_are_gentle() {
    let catalog = default_catalog();
    let mut rng = StdRng::seed_from_u64(11);

    let picks = recommend(&catalog, &options(EnergyLevel::Low, Some(1.5)), &mut rng).unwrap();
    assert!(!picks.is_empty(), "default catalog has decaf options");
    for drink in &picks {
        assert!(
            drink.caffeine_mg <= 2.0 || drink.has_tag("decaf") || drink.has_tag("low_caffeine"),
            "{} is too strong this close to bedtime",
            drink.id
        );
    }
}

#[test]
fn test_empty_result_is_valid_output() {
    // A catalog of nothing but strong drinks yields no late-night picks.
    let catalog: Vec<_> = default_catalog()
        .into_iter()
        .filter(|d| d.caffeine_mg >= 150.0)
        .collect();
    assert!(!catalog.is_empty());

    let mut rng = StdRng::seed_from_u64(11);
    let picks = recommend(&catalog, &options(EnergyLevel::High, Some(0.5)), &mut rng).unwrap();
    assert!(picks.is_empty());
}

#[test]
fn test_repeat_queries_vary_but_stay_in_pool() {
    // With a seeded RNG the shuffle is reproducible; across seeds the
    // window keeps every pick inside the qualifying pool.
    let catalog = default_catalog();
    let opts = options(EnergyLevel::Low, Some(2.5));

    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        let picks = recommend(&catalog, &opts, &mut rng).unwrap();
        for drink in &picks {
            assert!(
                drink.caffeine_mg <= 5.0 || drink.has_tag("decaf") || drink.has_tag("low_caffeine"),
                "{} escaped the strict band",
                drink.id
            );
        }
    }
}

#[test]
fn test_morning_high_energy_prefers_strong_drinks() {
    let catalog = default_catalog();
    let mut rng = StdRng::seed_from_u64(11);

    let picks = recommend(&catalog, &options(EnergyLevel::High, Some(12.0)), &mut rng).unwrap();
    assert!(!picks.is_empty());
    for drink in &picks {
        assert!(
            (90.0..=220.0).contains(&drink.caffeine_mg),
            "{} outside the high-energy band",
            drink.id
        );
    }
}
