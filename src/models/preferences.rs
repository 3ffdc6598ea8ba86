use serde::{Deserialize, Serialize};

use crate::engine::constants::{
    DEFAULT_BEDTIME_HOUR, DEFAULT_DAILY_LIMIT_MG, DEFAULT_HALF_LIFE_HOURS, DEFAULT_TYPICAL_DOSE_MG,
};

/// User preferences supplied by the preferences source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Preferences {
    /// Daily caffeine cap in milligrams.
    #[serde(default = "default_daily_limit")]
    pub daily_limit_mg: f64,

    /// Caffeine half-life override in hours.
    #[serde(default = "default_half_life")]
    pub half_life_hours: f64,

    /// Typical single-drink dose used for the limit-approaching check.
    #[serde(default = "default_typical_dose")]
    pub typical_dose_mg: f64,

    /// Target bedtime, hour of day 0-23.
    #[serde(default = "default_bedtime_hour")]
    pub bedtime_hour: u32,
}

fn default_daily_limit() -> f64 {
    DEFAULT_DAILY_LIMIT_MG
}

fn default_half_life() -> f64 {
    DEFAULT_HALF_LIFE_HOURS
}

fn default_typical_dose() -> f64 {
    DEFAULT_TYPICAL_DOSE_MG
}

fn default_bedtime_hour() -> u32 {
    DEFAULT_BEDTIME_HOUR
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            daily_limit_mg: default_daily_limit(),
            half_life_hours: default_half_life(),
            typical_dose_mg: default_typical_dose(),
            bedtime_hour: default_bedtime_hour(),
        }
    }
}

impl Preferences {
    /// Sanity check before use: all rates strictly positive, bedtime a
    /// valid hour.
    pub fn is_valid(&self) -> bool {
        self.daily_limit_mg > 0.0
            && self.half_life_hours > 0.0
            && self.typical_dose_mg > 0.0
            && self.bedtime_hour < 24
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(Preferences::default().is_valid());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let prefs: Preferences = serde_json::from_str(r#"{"daily_limit_mg": 300}"#).unwrap();
        assert_eq!(prefs.daily_limit_mg, 300.0);
        assert_eq!(prefs.half_life_hours, DEFAULT_HALF_LIFE_HOURS);
        assert_eq!(prefs.bedtime_hour, DEFAULT_BEDTIME_HOUR);
    }

    #[test]
    fn test_invalid_half_life_rejected() {
        let mut prefs = Preferences::default();
        prefs.half_life_hours = 0.0;
        assert!(!prefs.is_valid());
    }
}
