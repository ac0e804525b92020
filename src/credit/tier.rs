//! Fixed four-band credit tier classification
//!
//! Used by presentation concerns (score gauges, messaging). Pricing uses the
//! configurable [`crate::pricing::InterestTierPolicy`] instead.

use super::CreditScore;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Inclusive lower bound of the Fair band
pub const FAIR_THRESHOLD: u16 = 580;
/// Inclusive lower bound of the Good band
pub const GOOD_THRESHOLD: u16 = 670;
/// Inclusive lower bound of the Excellent band
pub const EXCELLENT_THRESHOLD: u16 = 740;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CreditTier {
    Poor,
    Fair,
    Good,
    Excellent,
}

impl CreditTier {
    /// Classify a score. Total: the score is already clamped into [300, 850].
    pub fn from_score(score: CreditScore) -> Self {
        match score.value() {
            s if s >= EXCELLENT_THRESHOLD => CreditTier::Excellent,
            s if s >= GOOD_THRESHOLD => CreditTier::Good,
            s if s >= FAIR_THRESHOLD => CreditTier::Fair,
            _ => CreditTier::Poor,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CreditTier::Poor => "Poor",
            CreditTier::Fair => "Fair",
            CreditTier::Good => "Good",
            CreditTier::Excellent => "Excellent",
        }
    }
}

impl From<CreditScore> for CreditTier {
    fn from(score: CreditScore) -> Self {
        Self::from_score(score)
    }
}

impl fmt::Display for CreditTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tier(raw: i64) -> CreditTier {
        CreditTier::from_score(CreditScore::clamped(raw))
    }

    #[test]
    fn test_band_boundaries() {
        assert_eq!(tier(300), CreditTier::Poor);
        assert_eq!(tier(579), CreditTier::Poor);
        assert_eq!(tier(580), CreditTier::Fair);
        assert_eq!(tier(669), CreditTier::Fair);
        assert_eq!(tier(670), CreditTier::Good);
        assert_eq!(tier(739), CreditTier::Good);
        assert_eq!(tier(740), CreditTier::Excellent);
        assert_eq!(tier(850), CreditTier::Excellent);
    }

    #[test]
    fn test_out_of_range_clamps_to_edge_bands() {
        assert_eq!(tier(10), CreditTier::Poor);
        assert_eq!(tier(999), CreditTier::Excellent);
    }

    #[test]
    fn test_ordering() {
        assert!(CreditTier::Poor < CreditTier::Fair);
        assert!(CreditTier::Good < CreditTier::Excellent);
        assert_eq!(CreditTier::Good.to_string(), "Good");
    }
}
