use crate::engine::constants::{RISK_THRESHOLD_MG, SAFE_THRESHOLD_MG};
use crate::engine::decay::{remaining_mg, round_mg};
use crate::error::{CoachError, Result};
use crate::models::{Verdict, VerdictCode};

/// Classify a prospective dose against bedtime.
///
/// Projects the dose through the decay model and maps the remainder to
/// three ordered tiers. Tier comparison is on the full-precision value;
/// the display strings carry the rounded one.
pub fn sleep_verdict(dose_mg: f64, hours_until_bed: f64, half_life_hours: f64) -> Result<Verdict> {
    if hours_until_bed < 0.0 {
        return Err(CoachError::InvalidInput(format!(
            "hours until bed must be non-negative (bedtime already passed?), got {hours_until_bed}"
        )));
    }

    let remaining = remaining_mg(dose_mg, hours_until_bed, half_life_hours)?;
    let display_mg = round_mg(remaining);
    let display_hours = (hours_until_bed * 10.0).round() / 10.0;

    let code = if remaining < SAFE_THRESHOLD_MG {
        VerdictCode::Safe
    } else if remaining <= RISK_THRESHOLD_MG {
        VerdictCode::Caution
    } else {
        VerdictCode::Risk
    };

    let (headline, detail, suggestion) = match code {
        VerdictCode::Safe => (
            "Good to go".to_string(),
            format!(
                "About {display_mg:.0} mg would still be active at bedtime ({display_hours} h from now)."
            ),
            "This drink is unlikely to affect your sleep.".to_string(),
        ),
        VerdictCode::Caution => (
            "May delay your sleep".to_string(),
            format!(
                "About {display_mg:.0} mg would still be active at bedtime ({display_hours} h from now)."
            ),
            "Consider a smaller size, fewer shots, or drinking it sooner.".to_string(),
        ),
        VerdictCode::Risk => (
            "Likely to disrupt sleep".to_string(),
            format!(
                "About {display_mg:.0} mg would still be active at bedtime ({display_hours} h from now)."
            ),
            "Pick a decaf or low-caffeine option instead.".to_string(),
        ),
    };

    Ok(Verdict {
        code,
        remaining_mg: remaining,
        headline,
        detail,
        suggestion,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Dose that decays to exactly `target` mg after `hours` at `half_life`.
    fn dose_for_remaining(target: f64, hours: f64, half_life: f64) -> f64 {
        target / 0.5_f64.powf(hours / half_life)
    }

    #[test]
    fn test_tier_boundaries() {
        // Zero elapsed time so the dose is the remainder.
        assert_eq!(sleep_verdict(49.0, 0.0, 5.0).unwrap().code, VerdictCode::Safe);
        assert_eq!(
            sleep_verdict(50.0, 0.0, 5.0).unwrap().code,
            VerdictCode::Caution
        );
        assert_eq!(
            sleep_verdict(100.0, 0.0, 5.0).unwrap().code,
            VerdictCode::Caution
        );
        assert_eq!(
            sleep_verdict(101.0, 0.0, 5.0).unwrap().code,
            VerdictCode::Risk
        );
    }

    #[test]
    fn test_unrounded_comparison_near_boundary() {
        // 49.6 mg remaining must stay Safe, not round up into Caution.
        let dose = dose_for_remaining(49.6, 5.0, 5.0);
        let verdict = sleep_verdict(dose, 5.0, 5.0).unwrap();
        assert_eq!(verdict.code, VerdictCode::Safe);
        assert_eq!(verdict.remaining_mg.round(), 50.0);
    }

    #[test]
    fn test_decay_applied_before_classification() {
        // 200 mg over two half-lives lands at 50: Caution.
        let verdict = sleep_verdict(200.0, 10.0, 5.0).unwrap();
        assert_eq!(verdict.code, VerdictCode::Caution);
    }

    #[test]
    fn test_negative_hours_rejected() {
        assert!(sleep_verdict(80.0, -1.0, 5.0).is_err());
    }

    #[test]
    fn test_detail_carries_rounded_values() {
        let verdict = sleep_verdict(107.0, 6.0, 5.0).unwrap();
        assert!(verdict.detail.contains("47 mg"));
        assert!(verdict.detail.contains("6 h"));
    }

    #[test]
    fn test_end_to_end_latte_scenario() {
        // 16 oz latte (nominal 80, base 12): dose 107, 6 h before bed.
        let dose = (80.0 * 16.0 / 12.0_f64).round();
        assert_eq!(dose, 107.0);
        let verdict = sleep_verdict(dose, 6.0, 5.0).unwrap();
        assert!((verdict.remaining_mg - 46.6).abs() < 0.2);
        assert_eq!(verdict.code, VerdictCode::Safe);
    }
}
