//! Quote service: registry lookup, score resolution, pricing

use super::Quote;
use crate::applicant::{Applicant, ApplicantRegistry};
use crate::credit::{CreditScore, ScoreOracle};
use crate::error::QuoteError;
use crate::pricing::RepaymentPlanCalculator;

/// Quotes applicants, asking the oracle at most once per registered identity
pub struct QuoteService<O: ScoreOracle> {
    calculator: RepaymentPlanCalculator,
    oracle: O,
    registry: ApplicantRegistry,
}

impl<O: ScoreOracle> QuoteService<O> {
    pub fn new(calculator: RepaymentPlanCalculator, oracle: O) -> Self {
        Self {
            calculator,
            oracle,
            registry: ApplicantRegistry::new(),
        }
    }

    pub fn registry(&self) -> &ApplicantRegistry {
        &self.registry
    }

    pub fn calculator(&self) -> &RepaymentPlanCalculator {
        &self.calculator
    }

    /// Cached score for a known applicant, otherwise the oracle's answer
    pub fn resolve_score(&mut self, applicant: Applicant) -> Result<(u32, CreditScore), QuoteError> {
        let id = self.registry.register(applicant.clone()).id();
        if let Some(score) = self.registry.cached_score(id) {
            log::debug!("Using cached score {} for applicant {}", score, id);
            return Ok((id, score));
        }

        let score = self.oracle.score(&applicant)?;
        self.registry.record_score(id, score)?;
        log::debug!("Oracle scored applicant {} at {}", id, score);
        Ok((id, score))
    }

    pub fn quote(&mut self, applicant: Applicant, principal: f64) -> Result<Quote, QuoteError> {
        let name = applicant.name().to_string();
        let (id, score) = self.resolve_score(applicant)?;
        let quote = Quote::price(&self.calculator, principal, score)?;
        Ok(quote.with_applicant(id, name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credit::StaticScoreOracle;
    use crate::error::PricingError;
    use std::cell::Cell;

    /// Oracle that counts how often it is asked
    struct CountingOracle {
        calls: Cell<u32>,
        score: i64,
    }

    impl ScoreOracle for CountingOracle {
        fn score(&self, _applicant: &Applicant) -> Result<CreditScore, QuoteError> {
            self.calls.set(self.calls.get() + 1);
            Ok(CreditScore::clamped(self.score))
        }
    }

    fn applicant(name: &str, ssn: &str) -> Applicant {
        Applicant::new(name, ssn).unwrap()
    }

    #[test]
    fn test_quote_scores_once_per_identity() {
        let oracle = CountingOracle { calls: Cell::new(0), score: 800 };
        let mut service = QuoteService::new(RepaymentPlanCalculator::default(), oracle);

        let first = service.quote(applicant("Ada", "111-22-3333"), 1000.0).unwrap();
        let again = service.quote(applicant("Ada", "111-22-3333"), 500.0).unwrap();
        let same_ssn = service.quote(applicant("A. Lovelace", "111-22-3333"), 200.0).unwrap();

        assert_eq!(service.oracle.calls.get(), 1);
        assert_eq!(service.registry().len(), 1);
        assert_eq!(first.applicant_id, Some(1));
        assert_eq!(again.applicant_id, Some(1));
        assert_eq!(same_ssn.score, first.score);
        assert_eq!(first.plans[0].total_repayment, 1050.0);
    }

    #[test]
    fn test_distinct_applicants_scored_separately() {
        let oracle = StaticScoreOracle::new()
            .with_score("111", 600)
            .with_score("222", 760);
        let mut service = QuoteService::new(RepaymentPlanCalculator::default(), oracle);

        let fair = service.quote(applicant("Ada", "111"), 1000.0).unwrap();
        let excellent = service.quote(applicant("Bob", "222"), 1000.0).unwrap();
        assert_eq!(fair.interest_rate, 0.10);
        assert_eq!(excellent.interest_rate, 0.05);
        assert_eq!(excellent.applicant_id, Some(2));
    }

    #[test]
    fn test_oracle_failure_is_reported() {
        let mut service = QuoteService::new(RepaymentPlanCalculator::default(), StaticScoreOracle::new());
        let err = service.quote(applicant("Ada", "111-22-3333"), 1000.0).unwrap_err();
        assert_eq!(err, QuoteError::ScoreUnavailable { ssn_last4: "3333".to_string() });
        // Identity is still registered without a score
        assert_eq!(service.registry().len(), 1);
        assert_eq!(service.registry().cached_score(1), None);
    }

    #[test]
    fn test_invalid_principal_is_pricing_error() {
        let mut service = QuoteService::new(RepaymentPlanCalculator::default(), StaticScoreOracle::uniform(700));
        let err = service.quote(applicant("Ada", "111"), -5.0).unwrap_err();
        assert!(matches!(err, QuoteError::Pricing(PricingError::InvalidArgument { param: "principal", .. })));
    }
}
