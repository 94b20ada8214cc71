//! Common types used across the platform

use serde::{Deserialize, Serialize};

/// Three-step level used for insight severity, expected impact and
/// implementation complexity
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    High,
    Medium,
    Low,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::High => "high",
            Level::Medium => "medium",
            Level::Low => "low",
        }
    }

    /// Sort rank, most urgent first
    pub fn rank(&self) -> u8 {
        match self {
            Level::High => 0,
            Level::Medium => 1,
            Level::Low => 2,
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Level::High => write!(f, "High"),
            Level::Medium => write!(f, "Medium"),
            Level::Low => write!(f, "Low"),
        }
    }
}

/// Round half away from zero to `places` decimals
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_rank_orders_high_first() {
        assert!(Level::High.rank() < Level::Medium.rank());
        assert!(Level::Medium.rank() < Level::Low.rank());
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(0.66666, 3), 0.667);
        assert_eq!(round_to(1.2345, 2), 1.23);
        assert_eq!(round_to(-0.0004, 3), -0.0);
    }
}
