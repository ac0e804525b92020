//! Parallel pricing of independent applications

use super::Quote;
use crate::credit::CreditScore;
use crate::error::PricingError;
use crate::pricing::RepaymentPlanCalculator;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// One row of a batch: identity plus an already-known score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Application {
    pub name: String,
    pub principal: f64,
    pub score: CreditScore,
}

/// Price every application in parallel; results keep input order
///
/// Batch quotes carry the applicant name but no registry id.
pub fn quote_batch(
    calculator: &RepaymentPlanCalculator,
    applications: &[Application],
) -> Vec<Result<Quote, PricingError>> {
    applications
        .par_iter()
        .map(|app| {
            Quote::price(calculator, app.principal, app.score).map(|mut quote| {
                quote.name = Some(app.name.clone());
                quote
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app(name: &str, principal: f64, score: i64) -> Application {
        Application { name: name.to_string(), principal, score: CreditScore::clamped(score) }
    }

    #[test]
    fn test_batch_preserves_order() {
        let calc = RepaymentPlanCalculator::default();
        let apps: Vec<Application> = (0..200)
            .map(|i| app(&format!("user{}", i), 100.0 + i as f64, 300 + (i * 3) as i64))
            .collect();

        let results = quote_batch(&calc, &apps);
        assert_eq!(results.len(), apps.len());
        for (app, result) in apps.iter().zip(&results) {
            let quote = result.as_ref().expect("valid application");
            assert_eq!(quote.name.as_deref(), Some(app.name.as_str()));
            assert_eq!(quote.applicant_id, None);
            assert_eq!(quote.principal, app.principal);
            assert_eq!(quote.plans, calc.calculate(app.principal, app.score).unwrap());
        }
    }

    #[test]
    fn test_batch_reports_bad_rows_individually() {
        let calc = RepaymentPlanCalculator::default();
        let apps = vec![app("ok", 100.0, 700), app("bad", -1.0, 700), app("ok2", 0.0, 500)];
        let results = quote_batch(&calc, &apps);
        assert!(results[0].is_ok());
        assert!(matches!(results[1], Err(PricingError::InvalidArgument { .. })));
        assert!(results[2].is_ok());
    }

    #[test]
    fn test_application_from_csv() {
        let data = "name,principal,score\nAda,250.00,912\n";
        let mut rdr = csv::Reader::from_reader(data.as_bytes());
        let rows: Vec<Application> = rdr.deserialize().collect::<Result<_, _>>().unwrap();
        assert_eq!(rows[0].score.value(), 850);
        assert_eq!(rows[0].principal, 250.0);
    }
}
