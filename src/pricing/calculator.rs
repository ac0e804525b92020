//! Repayment plan calculator
//!
//! Add-on interest: the tier rate is applied once to the principal and the
//! resulting total is split evenly across the term. No compounding, no
//! amortization.

use super::plan::{div_cents_half_up, from_cents, to_cents, ProratedPayment, RepaymentPlan};
use super::{InterestTierPolicy, DEFAULT_TERMS};
use crate::credit::CreditScore;
use crate::error::{PricingError, Result};
use serde::{Deserialize, Serialize};

/// Whether the first installment collects extra periods up front
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Proration {
    /// Every installment is total / term
    #[default]
    None,
    /// First installment covers ceil(term / 4) periods, the rest split evenly
    FirstQuarter,
}

/// Calculator settings, validated once at startup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorConfig {
    /// Term lengths in payment periods, in offer order
    #[serde(default = "default_terms")]
    pub terms: Vec<u32>,

    /// Collect a larger first installment (see [`Proration::FirstQuarter`])
    #[serde(default)]
    pub prorate_first_payment: bool,
}

fn default_terms() -> Vec<u32> { DEFAULT_TERMS.to_vec() }

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            terms: DEFAULT_TERMS.to_vec(),
            prorate_first_payment: false,
        }
    }
}

impl CalculatorConfig {
    pub fn proration(&self) -> Proration {
        if self.prorate_first_payment {
            Proration::FirstQuarter
        } else {
            Proration::None
        }
    }

    pub fn validate(&self) -> Result<()> {
        validate_terms(&self.terms).map_err(|e| PricingError::config(e.to_string()))
    }
}

/// Largest principal priced; keeps every amount exact in whole cents
pub const MAX_PRINCIPAL: f64 = 1_000_000_000_000.0;

/// Longest term accepted (ten years of weekly payments)
pub const MAX_TERM: u32 = 520;

fn validate_principal(principal: f64) -> Result<()> {
    if !principal.is_finite() {
        return Err(PricingError::invalid("principal", format!("{} is not finite", principal)));
    }
    if principal < 0.0 {
        return Err(PricingError::invalid("principal", format!("{} is negative", principal)));
    }
    if principal > MAX_PRINCIPAL {
        return Err(PricingError::invalid("principal", format!("{} exceeds {}", principal, MAX_PRINCIPAL)));
    }
    Ok(())
}

fn validate_terms(terms: &[u32]) -> Result<()> {
    if terms.is_empty() {
        return Err(PricingError::invalid("terms", "term list is empty"));
    }
    for (idx, term) in terms.iter().enumerate() {
        if *term == 0 {
            return Err(PricingError::invalid("terms", "term must be at least one period"));
        }
        if *term > MAX_TERM {
            return Err(PricingError::invalid("terms", format!("term {} exceeds {} periods", term, MAX_TERM)));
        }
        if terms[..idx].contains(term) {
            return Err(PricingError::invalid("terms", format!("term {} listed twice", term)));
        }
    }
    Ok(())
}

// Splits happen in whole cents so half-cents round up on the decimal amount.
fn build_plan(principal: f64, rate: f64, total_cents: i64, term: u32, proration: Proration) -> RepaymentPlan {
    let periods = term as i64;
    let proration = match proration {
        Proration::None => None,
        Proration::FirstQuarter => {
            let periods_in_first = term.div_ceil(4);
            let first_cents = div_cents_half_up(total_cents * periods_in_first as i64, periods);
            let remaining_cents = if term > 1 {
                div_cents_half_up(total_cents - first_cents, periods - 1)
            } else {
                0
            };
            Some(ProratedPayment {
                first_payment: from_cents(first_cents),
                periods_in_first,
                remaining_payment: from_cents(remaining_cents),
            })
        }
    };

    RepaymentPlan {
        term,
        principal,
        interest_rate: rate,
        total_repayment: from_cents(total_cents),
        per_period_payment: from_cents(div_cents_half_up(total_cents, periods)),
        proration,
    }
}

/// Price a principal for every term, in the order given
///
/// Out-of-range scores are already clamped by [`CreditScore`], so they select
/// the lowest or highest tier.
pub fn calculate_plans(
    principal: f64,
    score: CreditScore,
    terms: &[u32],
    policy: &InterestTierPolicy,
    proration: Proration,
) -> Result<Vec<RepaymentPlan>> {
    validate_principal(principal)?;
    validate_terms(terms)?;

    let rate = policy.rate_for(score);
    let total_cents = to_cents(principal * (1.0 + rate));

    Ok(terms
        .iter()
        .map(|&term| build_plan(principal, rate, total_cents, term, proration))
        .collect())
}

/// Calculator bound to a validated policy and configuration
#[derive(Debug, Clone)]
pub struct RepaymentPlanCalculator {
    policy: InterestTierPolicy,
    config: CalculatorConfig,
}

impl RepaymentPlanCalculator {
    pub fn new(policy: InterestTierPolicy, config: CalculatorConfig) -> Result<Self> {
        config.validate()?;
        log::info!(
            "Calculator ready: {} tiers, terms {:?}, proration {:?}",
            policy.len(),
            config.terms,
            config.proration()
        );
        Ok(Self { policy, config })
    }

    pub fn policy(&self) -> &InterestTierPolicy {
        &self.policy
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    pub fn rate_for(&self, score: CreditScore) -> f64 {
        self.policy.rate_for(score)
    }

    /// Plans for every configured term
    pub fn calculate(&self, principal: f64, score: CreditScore) -> Result<Vec<RepaymentPlan>> {
        calculate_plans(principal, score, &self.config.terms, &self.policy, self.config.proration())
    }

    /// Plans for caller-supplied terms, keeping the configured proration mode
    pub fn calculate_with_terms(&self, principal: f64, score: CreditScore, terms: &[u32]) -> Result<Vec<RepaymentPlan>> {
        calculate_plans(principal, score, terms, &self.policy, self.config.proration())
    }
}

impl Default for RepaymentPlanCalculator {
    fn default() -> Self {
        Self {
            policy: InterestTierPolicy::default(),
            config: CalculatorConfig::default(),
        }
    }
}
