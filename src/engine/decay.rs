use crate::error::{CoachError, Result};
use crate::models::LogEntry;

/// Active caffeine remaining after first-order exponential decay.
///
/// `remaining = initial * 0.5^(elapsed / half_life)`. Malformed inputs are
/// rejected, not clamped: a silently clamped sleep-safety input could
/// produce a falsely reassuring verdict.
pub fn remaining_mg(initial_mg: f64, elapsed_hours: f64, half_life_hours: f64) -> Result<f64> {
    if initial_mg < 0.0 || !initial_mg.is_finite() {
        return Err(CoachError::InvalidInput(format!(
            "initial dose must be a non-negative number, got {initial_mg}"
        )));
    }
    if elapsed_hours < 0.0 || !elapsed_hours.is_finite() {
        return Err(CoachError::InvalidInput(format!(
            "elapsed hours must be a non-negative number, got {elapsed_hours}"
        )));
    }
    if half_life_hours <= 0.0 || !half_life_hours.is_finite() {
        return Err(CoachError::InvalidInput(format!(
            "half-life must be positive, got {half_life_hours}"
        )));
    }

    Ok(initial_mg * 0.5_f64.powf(elapsed_hours / half_life_hours))
}

/// Round to whole milligrams. Display only; threshold comparisons always
/// use the full-precision value.
#[inline]
pub fn round_mg(mg: f64) -> f64 {
    mg.round()
}

/// Hours until `current_mg` decays to `target_mg`, by inverting the decay
/// formula: `half_life * log2(current / target)`. Zero when already at or
/// below the target.
pub fn hours_until_below(current_mg: f64, target_mg: f64, half_life_hours: f64) -> Result<f64> {
    if current_mg < 0.0 || !current_mg.is_finite() {
        return Err(CoachError::InvalidInput(format!(
            "current level must be a non-negative number, got {current_mg}"
        )));
    }
    if target_mg <= 0.0 || !target_mg.is_finite() {
        return Err(CoachError::InvalidInput(format!(
            "target level must be positive, got {target_mg}"
        )));
    }
    if half_life_hours <= 0.0 || !half_life_hours.is_finite() {
        return Err(CoachError::InvalidInput(format!(
            "half-life must be positive, got {half_life_hours}"
        )));
    }

    if current_mg <= target_mg {
        return Ok(0.0);
    }
    Ok(half_life_hours * (current_mg / target_mg).log2())
}

/// Sum of the decayed remainders of all logged doses at `now_ms`.
///
/// Entries timestamped after `now_ms` are a caller contract violation.
pub fn active_from_log(entries: &[LogEntry], now_ms: i64, half_life_hours: f64) -> Result<f64> {
    let mut total = 0.0;
    for entry in entries {
        let elapsed = entry.hours_before(now_ms);
        if elapsed < 0.0 {
            return Err(CoachError::InvalidInput(format!(
                "log entry at {} is in the future",
                entry.consumed_at
            )));
        }
        total += remaining_mg(entry.caffeine_mg, elapsed, half_life_hours)?;
    }
    Ok(total)
}

/// Raw (undecayed) mg consumed at or after `since_ms`.
pub fn consumed_since(entries: &[LogEntry], since_ms: i64) -> f64 {
    entries
        .iter()
        .filter(|e| e.consumed_at >= since_ms)
        .map(|e| e.caffeine_mg)
        .sum()
}
