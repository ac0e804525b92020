//! BNPL Pricing - Credit-tiered repayment plan pricing for buy-now-pay-later offers
//!
//! This library provides:
//! - Credit score handling and tier classification
//! - Configurable interest tier policies (in code or loaded from CSV)
//! - Add-on interest repayment plan calculation with optional first-payment proration
//! - Applicant deduplication and score caching in front of an external scoring oracle
//! - Single and batch quoting

pub mod error;
pub mod credit;
pub mod pricing;
pub mod applicant;
pub mod quote;

// Re-export commonly used types
pub use error::{PricingError, LoadError, QuoteError};
pub use credit::{CreditScore, CreditTier, ScoreOracle, StaticScoreOracle};
pub use pricing::{
    InterestTierPolicy, RateTier, RepaymentPlan, RepaymentPlanCalculator, CalculatorConfig,
    Proration, calculate_plans,
};
pub use applicant::{Applicant, ApplicantRegistry, Registration};
pub use quote::{Quote, QuoteService, quote_batch};
