use serde::{Deserialize, Serialize};

/// Three-tier sleep-compatibility classification for a single drink choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerdictCode {
    Safe,
    Caution,
    Risk,
}

impl VerdictCode {
    pub fn label(&self) -> &'static str {
        match self {
            VerdictCode::Safe => "safe",
            VerdictCode::Caution => "caution",
            VerdictCode::Risk => "risk",
        }
    }
}

/// Sleep verdict for one prospective drink.
///
/// `remaining_mg` is full precision; the display strings carry the
/// rounded value.
#[derive(Debug, Clone)]
pub struct Verdict {
    pub code: VerdictCode,
    pub remaining_mg: f64,
    pub headline: String,
    pub detail: String,
    pub suggestion: String,
}

/// Five-state guidance classification, evaluated in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GuidanceState {
    DailyLimit,
    BothRisks,
    JitterRisk,
    LimitApproaching,
    Safe,
}

impl GuidanceState {
    pub fn label(&self) -> &'static str {
        match self {
            GuidanceState::DailyLimit => "daily_limit",
            GuidanceState::BothRisks => "both_risks",
            GuidanceState::JitterRisk => "jitter_risk",
            GuidanceState::LimitApproaching => "limit_approaching",
            GuidanceState::Safe => "safe",
        }
    }
}

/// Severity color attached to a guidance state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Green,
    Yellow,
    Red,
}

impl Severity {
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Green => "green",
            Severity::Yellow => "yellow",
            Severity::Red => "red",
        }
    }
}

/// Guidance output. A fresh value object per query, never persisted.
#[derive(Debug, Clone)]
pub struct Guidance {
    pub state: GuidanceState,
    pub severity: Severity,

    /// Projected active mg at bedtime, rounded for display.
    pub projected_at_bedtime_mg: f64,

    /// Hours until the current level decays to the safe threshold.
    /// Present only for the jitter-risk state.
    pub wait_hours: Option<f64>,

    /// Formatted wait duration ("1h 40m"), when `wait_hours` is set.
    pub wait_label: Option<String>,

    pub message: String,
}
