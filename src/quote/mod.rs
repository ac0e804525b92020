//! Quotes: a priced set of repayment plans for one applicant

mod service;
mod batch;

pub use service::QuoteService;
pub use batch::{Application, quote_batch};

use crate::credit::{CreditScore, CreditTier};
use crate::error::PricingError;
use crate::pricing::{RepaymentPlan, RepaymentPlanCalculator};
use serde::Serialize;
use serde_json::{json, Map, Value};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Quote {
    /// Registry id when the quote went through [`QuoteService`]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applicant_id: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub score: CreditScore,
    pub tier: CreditTier,
    pub interest_rate: f64,
    pub principal: f64,
    pub plans: Vec<RepaymentPlan>,
}

impl Quote {
    /// Price an anonymous quote from a known score
    pub fn price(calculator: &RepaymentPlanCalculator, principal: f64, score: CreditScore) -> Result<Self, PricingError> {
        let plans = calculator.calculate(principal, score)?;
        Ok(Self {
            applicant_id: None,
            name: None,
            score,
            tier: CreditTier::from_score(score),
            interest_rate: calculator.rate_for(score),
            principal,
            plans,
        })
    }

    pub fn with_applicant(mut self, id: u32, name: impl Into<String>) -> Self {
        self.applicant_id = Some(id);
        self.name = Some(name.into());
        self
    }

    /// Response shape consumed by the checkout pages
    ///
    /// `payment_options` is keyed `"<term>_week_plan"`; `first_quarter_payment`
    /// is only present on prorated plans.
    pub fn legacy_json(&self) -> Value {
        let options: Map<String, Value> = self
            .plans
            .iter()
            .map(|plan| {
                let mut option = json!({
                    "total_weeks": plan.term,
                    "weekly_payment": plan.per_period_payment,
                    "total_repayment": plan.total_repayment,
                });
                if let (Some(p), Some(obj)) = (plan.proration, option.as_object_mut()) {
                    obj.insert("first_quarter_payment".to_string(), json!(p.first_payment));
                }
                (format!("{}_week_plan", plan.term), option)
            })
            .collect();

        json!({
            "user": {
                "name": self.name,
                "score": self.score.value(),
            },
            "interest_rate": format_rate(self.interest_rate),
            "payment_options": options,
        })
    }
}

/// 0.05 -> "5%", 0.075 -> "7.5%"
pub fn format_rate(rate: f64) -> String {
    format!("{}%", (rate * 10_000.0).round() / 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::{CalculatorConfig, InterestTierPolicy};

    #[test]
    fn test_format_rate() {
        assert_eq!(format_rate(0.05), "5%");
        assert_eq!(format_rate(0.10), "10%");
        assert_eq!(format_rate(0.075), "7.5%");
        assert_eq!(format_rate(0.0), "0%");
    }

    #[test]
    fn test_price_fields() {
        let calc = RepaymentPlanCalculator::default();
        let quote = Quote::price(&calc, 1000.0, CreditScore::clamped(800)).unwrap();
        assert_eq!(quote.tier, CreditTier::Excellent);
        assert_eq!(quote.interest_rate, 0.05);
        assert_eq!(quote.plans.len(), 3);
        assert_eq!(quote.applicant_id, None);
    }

    #[test]
    fn test_legacy_json_shape() {
        let calc = RepaymentPlanCalculator::default();
        let quote = Quote::price(&calc, 1000.0, CreditScore::clamped(800))
            .unwrap()
            .with_applicant(7, "Ada");
        let value = quote.legacy_json();

        assert_eq!(value["user"]["name"], "Ada");
        assert_eq!(value["user"]["score"], 800);
        assert_eq!(value["interest_rate"], "5%");
        assert_eq!(value["payment_options"]["4_week_plan"]["total_weeks"], 4);
        assert_eq!(value["payment_options"]["4_week_plan"]["weekly_payment"], 262.5);
        assert_eq!(value["payment_options"]["12_week_plan"]["weekly_payment"], 87.5);
        assert!(value["payment_options"]["8_week_plan"].get("first_quarter_payment").is_none());
    }

    #[test]
    fn test_legacy_json_with_proration() {
        let config = CalculatorConfig { prorate_first_payment: true, ..Default::default() };
        let calc = RepaymentPlanCalculator::new(InterestTierPolicy::default(), config).unwrap();
        let value = Quote::price(&calc, 1000.0, CreditScore::clamped(600)).unwrap().legacy_json();
        assert_eq!(value["payment_options"]["8_week_plan"]["first_quarter_payment"], 275.0);
    }
}
