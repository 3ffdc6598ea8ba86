pub mod constants;
pub mod decay;
pub mod guidance;
pub mod recommend;
pub mod serving;
pub mod verdict;

pub use constants::*;
pub use decay::{active_from_log, consumed_since, hours_until_below, remaining_mg, round_mg};
pub use guidance::sleep_guidance;
pub use recommend::{recommend, EnergyLevel, SuggestOptions, TimeOfDay};
pub use serving::{adjusted_dose, ServingSize, ShotCount};
pub use verdict::sleep_verdict;
