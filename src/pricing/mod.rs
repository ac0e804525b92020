//! Interest tier policies and repayment plan calculation

mod tiers;
mod plan;
mod calculator;
pub mod loader;

pub use tiers::{InterestTierPolicy, RateTier, MAX_TIER_RATE};
pub use plan::{RepaymentPlan, ProratedPayment, round_cents};
pub use calculator::{
    RepaymentPlanCalculator, CalculatorConfig, Proration, calculate_plans, MAX_PRINCIPAL, MAX_TERM,
};
pub use loader::{
    load_tier_policy, load_tier_policy_from_reader, load_default_tier_policy,
    load_calculator_config, load_calculator_config_from_reader,
};

// ============================================================================
// Default Repayment Terms
// ============================================================================
// Weekly installment counts offered when the caller does not configure any.

/// Default term lengths in payment periods (weeks)
pub const DEFAULT_TERMS: [u32; 3] = [4, 8, 12];
