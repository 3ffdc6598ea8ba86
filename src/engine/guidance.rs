use crate::engine::constants::{RISK_THRESHOLD_MG, SAFE_THRESHOLD_MG};
use crate::engine::decay::{hours_until_below, remaining_mg, round_mg};
use crate::error::{CoachError, Result};
use crate::models::{Guidance, GuidanceState, Severity};

/// Format a wait duration as "Xh Ym".
pub fn format_wait(hours: f64) -> String {
    let total_minutes = (hours * 60.0).round() as i64;
    let h = total_minutes / 60;
    let m = total_minutes % 60;
    if h > 0 {
        format!("{h}h {m}m")
    } else {
        format!("{m}m")
    }
}

/// Five-state guidance classifier, evaluated in priority order.
///
/// The raw predicates are not mutually exclusive (a user can be near the
/// daily cap and facing a jitter risk at once); first match wins, ordered
/// by which warning is most actionable.
pub fn sleep_guidance(
    current_active_mg: f64,
    hours_until_bed: f64,
    daily_consumed_mg: f64,
    daily_limit_mg: f64,
    typical_dose_mg: f64,
    half_life_hours: f64,
) -> Result<Guidance> {
    if hours_until_bed < 0.0 {
        return Err(CoachError::InvalidInput(format!(
            "hours until bed must be non-negative, got {hours_until_bed}"
        )));
    }
    if daily_consumed_mg < 0.0 {
        return Err(CoachError::InvalidInput(format!(
            "daily consumed mg must be non-negative, got {daily_consumed_mg}"
        )));
    }
    if daily_limit_mg <= 0.0 {
        return Err(CoachError::InvalidInput(format!(
            "daily limit must be positive, got {daily_limit_mg}"
        )));
    }
    if typical_dose_mg <= 0.0 {
        return Err(CoachError::InvalidInput(format!(
            "typical dose must be positive, got {typical_dose_mg}"
        )));
    }

    let projected = remaining_mg(current_active_mg, hours_until_bed, half_life_hours)?;
    let projected_display = round_mg(projected);

    let sleep_risk = projected > SAFE_THRESHOLD_MG;
    let would_exceed_limit = daily_consumed_mg + typical_dose_mg > daily_limit_mg;

    let (state, severity, wait_hours, message) = if daily_consumed_mg >= daily_limit_mg {
        (
            GuidanceState::DailyLimit,
            Severity::Red,
            None,
            format!(
                "You have reached your daily limit ({daily_consumed_mg:.0} of {daily_limit_mg:.0} mg). Skip further caffeine today."
            ),
        )
    } else if sleep_risk && would_exceed_limit {
        (
            GuidanceState::BothRisks,
            Severity::Red,
            None,
            format!(
                "Another drink would push you past {daily_limit_mg:.0} mg, and about {projected_display:.0} mg would still be active at bedtime."
            ),
        )
    } else if sleep_risk {
        let wait = hours_until_below(current_active_mg, SAFE_THRESHOLD_MG, half_life_hours)?;
        let severity = if projected > RISK_THRESHOLD_MG {
            Severity::Red
        } else {
            Severity::Yellow
        };
        (
            GuidanceState::JitterRisk,
            severity,
            Some(wait),
            format!(
                "About {projected_display:.0} mg would still be active at bedtime. Hold off about {} before your next caffeinated drink.",
                format_wait(wait)
            ),
        )
    } else if would_exceed_limit {
        (
            GuidanceState::LimitApproaching,
            Severity::Yellow,
            None,
            format!(
                "A typical drink ({typical_dose_mg:.0} mg) would put you over your {daily_limit_mg:.0} mg daily limit."
            ),
        )
    } else {
        (
            GuidanceState::Safe,
            Severity::Green,
            None,
            "You are clear for another caffeinated drink.".to_string(),
        )
    };

    Ok(Guidance {
        state,
        severity,
        projected_at_bedtime_mg: projected_display,
        wait_hours,
        wait_label: wait_hours.map(format_wait),
        message,
    })
}
