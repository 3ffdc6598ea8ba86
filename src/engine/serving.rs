use clap::ValueEnum;

use crate::engine::constants::{base_size_oz, is_shot_eligible, is_size_scalable, EXTRA_SHOT_MG};
use crate::models::Drink;

/// Serving size in fluid ounces. The enum restricts callers to the sizes
/// the catalog actually knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ServingSize {
    #[value(name = "8")]
    Oz8,
    #[value(name = "12")]
    Oz12,
    #[value(name = "16")]
    Oz16,
    #[value(name = "20")]
    Oz20,
}

impl ServingSize {
    pub fn ounces(self) -> f64 {
        match self {
            ServingSize::Oz8 => 8.0,
            ServingSize::Oz12 => 12.0,
            ServingSize::Oz16 => 16.0,
            ServingSize::Oz20 => 20.0,
        }
    }
}

impl Default for ServingSize {
    fn default() -> Self {
        ServingSize::Oz12
    }
}

/// Espresso shot count. A triple adds two extra-shot increments, by
/// symmetry with the double.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ShotCount {
    #[value(name = "1")]
    Single,
    #[value(name = "2")]
    Double,
    #[value(name = "3")]
    Triple,
}

impl ShotCount {
    pub fn count(self) -> u32 {
        match self {
            ShotCount::Single => 1,
            ShotCount::Double => 2,
            ShotCount::Triple => 3,
        }
    }
}

impl Default for ShotCount {
    fn default() -> Self {
        ShotCount::Single
    }
}

/// Effective caffeine dose for a drink at the requested size and shots.
///
/// Shot adjustment applies to the nominal mg first; size scaling then
/// applies to the shot-adjusted mg. Drinks in neither set keep their
/// nominal dose and the selectors are cosmetic.
pub fn adjusted_dose(drink: &Drink, size: ServingSize, shots: ShotCount) -> f64 {
    let mut dose = drink.caffeine_mg;

    if is_shot_eligible(&drink.id) {
        dose += (shots.count().saturating_sub(1)) as f64 * EXTRA_SHOT_MG;
    }

    if is_size_scalable(&drink.id) {
        let factor = size.ounces() / base_size_oz(&drink.id);
        dose = (dose * factor).round();
    }

    // No input combination should go negative; floor anyway.
    dose.max(0.0)
}
