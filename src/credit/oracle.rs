//! Seam for the external credit-scoring service
//!
//! The scoring algorithm itself lives outside this crate. Callers plug in a
//! client that satisfies [`ScoreOracle`]; [`StaticScoreOracle`] serves tests
//! and the command line tools.

use super::CreditScore;
use crate::applicant::Applicant;
use crate::error::QuoteError;
use std::collections::HashMap;

/// Anything that can produce a credit score for an applicant
pub trait ScoreOracle {
    fn score(&self, applicant: &Applicant) -> Result<CreditScore, QuoteError>;
}

/// Oracle backed by a fixed SSN -> raw score table
#[derive(Debug, Clone, Default)]
pub struct StaticScoreOracle {
    scores: HashMap<String, i64>,
    default_score: Option<i64>,
}

impl StaticScoreOracle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Oracle that answers every applicant with the same score
    pub fn uniform(raw: i64) -> Self {
        Self {
            scores: HashMap::new(),
            default_score: Some(raw),
        }
    }

    pub fn with_score(mut self, ssn: impl Into<String>, raw: i64) -> Self {
        self.scores.insert(ssn.into(), raw);
        self
    }

    pub fn with_default(mut self, raw: i64) -> Self {
        self.default_score = Some(raw);
        self
    }
}

impl ScoreOracle for StaticScoreOracle {
    fn score(&self, applicant: &Applicant) -> Result<CreditScore, QuoteError> {
        self.scores
            .get(applicant.ssn())
            .copied()
            .or(self.default_score)
            .map(CreditScore::clamped)
            .ok_or_else(|| QuoteError::ScoreUnavailable {
                ssn_last4: applicant.ssn_last4().to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_lookup() {
        let oracle = StaticScoreOracle::new().with_score("111-22-3333", 712);
        let applicant = Applicant::new("Ada", "111-22-3333").unwrap();
        assert_eq!(oracle.score(&applicant).unwrap().value(), 712);
    }

    #[test]
    fn test_unknown_without_default() {
        let oracle = StaticScoreOracle::new();
        let applicant = Applicant::new("Ada", "111-22-3333").unwrap();
        assert_eq!(
            oracle.score(&applicant),
            Err(QuoteError::ScoreUnavailable { ssn_last4: "3333".to_string() })
        );
    }

    #[test]
    fn test_default_and_clamping() {
        let oracle = StaticScoreOracle::uniform(990);
        let applicant = Applicant::new("Ada", "999-00-1234").unwrap();
        assert_eq!(oracle.score(&applicant).unwrap().value(), 850);
    }
}
