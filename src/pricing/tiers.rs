//! Credit-tiered interest rate policy

use crate::credit::{CreditScore, MAX_CREDIT_SCORE, MIN_CREDIT_SCORE};
use crate::error::{PricingError, Result};
use serde::{Deserialize, Serialize};

/// Highest add-on rate a tier may charge (100%)
pub const MAX_TIER_RATE: f64 = 1.0;

/// A single (threshold, rate) pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateTier {
    /// Inclusive minimum score for this tier
    pub min_score: u16,

    /// Add-on interest rate as a fraction (0.05 = 5%)
    pub rate: f64,

    /// Optional display label ("Excellent", "Fair", ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl RateTier {
    pub fn new(min_score: u16, rate: f64) -> Self {
        Self { min_score, rate, label: None }
    }

    pub fn labeled(min_score: u16, rate: f64, label: impl Into<String>) -> Self {
        Self { min_score, rate, label: Some(label.into()) }
    }

    /// Tier that catches every score below the other thresholds
    pub fn fallback(rate: f64) -> Self {
        Self::new(MIN_CREDIT_SCORE, rate)
    }
}

/// Ordered tier table mapping credit scores to interest rates
///
/// Thresholds are strictly descending and the final tier sits at or below the
/// minimum credit score, so every score maps to exactly one rate. Instances are
/// only built through [`InterestTierPolicy::new`], including when deserialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<RateTier>", into = "Vec<RateTier>")]
pub struct InterestTierPolicy {
    /// Tiers above the fallback, highest threshold first
    tiers: Vec<RateTier>,
    fallback: RateTier,
}

impl InterestTierPolicy {
    /// Validate and build a policy from tiers listed highest threshold first
    pub fn new(mut tiers: Vec<RateTier>) -> Result<Self> {
        let fallback = match tiers.pop() {
            Some(tier) => tier,
            None => return Err(PricingError::config("tier policy has no tiers")),
        };

        for tier in tiers.iter().chain(std::iter::once(&fallback)) {
            if !tier.rate.is_finite() || tier.rate < 0.0 || tier.rate > MAX_TIER_RATE {
                return Err(PricingError::config(format!(
                    "tier at {} has invalid rate {}",
                    tier.min_score, tier.rate
                )));
            }
        }

        if let Some(top) = tiers.first().filter(|t| t.min_score > MAX_CREDIT_SCORE) {
            return Err(PricingError::config(format!(
                "tier at {} is unreachable: scores stop at {}",
                top.min_score, MAX_CREDIT_SCORE
            )));
        }

        let mut previous: Option<u16> = None;
        for tier in tiers.iter().chain(std::iter::once(&fallback)) {
            if let Some(prev) = previous {
                if tier.min_score >= prev {
                    return Err(PricingError::config(format!(
                        "thresholds must be strictly descending: {} follows {}",
                        tier.min_score, prev
                    )));
                }
            }
            previous = Some(tier.min_score);
        }

        if fallback.min_score > MIN_CREDIT_SCORE {
            return Err(PricingError::config(format!(
                "no fallback tier: scores below {} are not covered",
                fallback.min_score
            )));
        }
        if let Some(last) = tiers.last() {
            if last.min_score <= MIN_CREDIT_SCORE {
                return Err(PricingError::config(format!(
                    "fallback tier at {} is unreachable behind tier at {}",
                    fallback.min_score, last.min_score
                )));
            }
        }

        let policy = Self { tiers, fallback };
        if !policy.is_risk_ordered() {
            log::warn!("Tier policy charges a lower rate to a lower score band");
        }
        Ok(policy)
    }

    /// Build a policy from tiers above the fallback plus the fallback rate
    pub fn with_fallback(mut tiers: Vec<RateTier>, fallback_rate: f64) -> Result<Self> {
        tiers.push(RateTier::fallback(fallback_rate));
        Self::new(tiers)
    }

    /// Tier applied to a score: the first threshold the score meets, else the fallback
    pub fn tier_for(&self, score: CreditScore) -> &RateTier {
        let tier = self
            .tiers
            .iter()
            .find(|tier| score.value() >= tier.min_score)
            .unwrap_or(&self.fallback);
        log::debug!("Score {} selected tier at {} ({})", score, tier.min_score, tier.rate);
        tier
    }

    pub fn rate_for(&self, score: CreditScore) -> f64 {
        self.tier_for(score).rate
    }

    /// All tiers including the fallback, highest threshold first
    pub fn iter(&self) -> impl Iterator<Item = &RateTier> {
        self.tiers.iter().chain(std::iter::once(&self.fallback))
    }

    pub fn fallback(&self) -> &RateTier {
        &self.fallback
    }

    pub fn len(&self) -> usize {
        self.tiers.len() + 1
    }

    /// Whether higher scores always get lower-or-equal rates
    pub fn is_risk_ordered(&self) -> bool {
        let rates: Vec<f64> = self.iter().map(|t| t.rate).collect();
        rates.windows(2).all(|w| w[0] <= w[1])
    }
}

impl Default for InterestTierPolicy {
    /// Four bands aligned with the standard credit tiers: 5% / 8% / 10% / 15%
    fn default() -> Self {
        Self {
            tiers: vec![
                RateTier::labeled(740, 0.05, "Excellent"),
                RateTier::labeled(670, 0.08, "Good"),
                RateTier::labeled(580, 0.10, "Fair"),
            ],
            fallback: RateTier::labeled(MIN_CREDIT_SCORE, 0.15, "Poor"),
        }
    }
}

impl TryFrom<Vec<RateTier>> for InterestTierPolicy {
    type Error = PricingError;

    fn try_from(tiers: Vec<RateTier>) -> Result<Self> {
        Self::new(tiers)
    }
}

impl From<InterestTierPolicy> for Vec<RateTier> {
    fn from(policy: InterestTierPolicy) -> Self {
        let mut tiers = policy.tiers;
        tiers.push(policy.fallback);
        tiers
    }
}
