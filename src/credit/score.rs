//! Credit score value type

use crate::error::{PricingError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lowest score in the standard scoring range
pub const MIN_CREDIT_SCORE: u16 = 300;

/// Highest score in the standard scoring range
pub const MAX_CREDIT_SCORE: u16 = 850;

/// Credit score in [300, 850]
///
/// Deserializing from a raw integer clamps, matching [`CreditScore::clamped`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "u16")]
pub struct CreditScore(u16);

impl CreditScore {
    /// Build a score, clamping out-of-range input to the nearest bound
    pub fn clamped(raw: i64) -> Self {
        let bounded = raw.clamp(MIN_CREDIT_SCORE as i64, MAX_CREDIT_SCORE as i64);
        if bounded != raw {
            log::debug!("Clamped credit score {} to {}", raw, bounded);
        }
        Self(bounded as u16)
    }

    /// Build a score, rejecting anything outside [300, 850]
    pub fn strict(raw: i64) -> Result<Self> {
        if raw < MIN_CREDIT_SCORE as i64 || raw > MAX_CREDIT_SCORE as i64 {
            return Err(PricingError::invalid(
                "credit_score",
                format!("{} outside [{}, {}]", raw, MIN_CREDIT_SCORE, MAX_CREDIT_SCORE),
            ));
        }
        Ok(Self(raw as u16))
    }

    pub fn value(self) -> u16 {
        self.0
    }
}

impl From<i64> for CreditScore {
    fn from(raw: i64) -> Self {
        Self::clamped(raw)
    }
}

impl From<CreditScore> for u16 {
    fn from(score: CreditScore) -> Self {
        score.0
    }
}

impl fmt::Display for CreditScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamping() {
        assert_eq!(CreditScore::clamped(720).value(), 720);
        assert_eq!(CreditScore::clamped(120).value(), 300);
        assert_eq!(CreditScore::clamped(-5).value(), 300);
        assert_eq!(CreditScore::clamped(900).value(), 850);
        assert_eq!(CreditScore::clamped(300).value(), 300);
        assert_eq!(CreditScore::clamped(850).value(), 850);
    }

    #[test]
    fn test_strict_rejects_out_of_range() {
        assert!(CreditScore::strict(299).is_err());
        assert!(CreditScore::strict(851).is_err());
        assert_eq!(CreditScore::strict(580).unwrap().value(), 580);
    }

    #[test]
    fn test_serde_clamps() {
        let score: CreditScore = serde_json::from_str("1200").unwrap();
        assert_eq!(score.value(), 850);
        assert_eq!(serde_json::to_string(&CreditScore::clamped(640)).unwrap(), "640");
    }
}
