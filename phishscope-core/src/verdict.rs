use serde::{Deserialize, Serialize};
use std::fmt;

pub const SAFE_THRESHOLD: u8 = 70;
pub const SUSPICIOUS_THRESHOLD: u8 = 40;

/// Ordered by severity, so `max` escalates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Safe,
    Suspicious,
    Phishing,
}

impl Verdict {
    /// A missing score is treated as suspicious.
    pub fn from_score(score: Option<u8>) -> Self {
        match score {
            Some(s) if s >= SAFE_THRESHOLD => Verdict::Safe,
            Some(s) if s >= SUSPICIOUS_THRESHOLD => Verdict::Suspicious,
            Some(_) => Verdict::Phishing,
            None => Verdict::Suspicious,
        }
    }

    /// Raw count of set risk indicators.
    pub fn from_feature_count(count: usize) -> Self {
        match count {
            0..=2 => Verdict::Safe,
            3..=4 => Verdict::Suspicious,
            _ => Verdict::Phishing,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Verdict::Safe => "Safe site",
            Verdict::Suspicious => "Suspicious site",
            Verdict::Phishing => "Possible phishing site",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Verdict::Safe => "safe",
            Verdict::Suspicious => "suspicious",
            Verdict::Phishing => "phishing",
        };
        f.write_str(name)
    }
}

/// `round((1 - flagged / total) * 100)`, or `None` when there is nothing
/// to score.
pub fn heuristic_score(flagged: usize, total: usize) -> Option<u8> {
    if total == 0 {
        return None;
    }
    let risk_ratio = flagged as f64 / total as f64;
    Some(to_percent(1.0 - risk_ratio))
}

/// Safety score from a phishing probability.
pub fn probability_score(probability: f64) -> u8 {
    to_percent(1.0 - probability)
}

fn to_percent(safety: f64) -> u8 {
    (safety * 100.0).round().clamp(0.0, 100.0) as u8
}
