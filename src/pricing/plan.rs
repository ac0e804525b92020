//! Repayment plan output values

use serde::{Deserialize, Serialize};

/// Round a currency amount to cents, half-up on the decimal value
///
/// Amounts such as 1.005 sit a hair below the half cent in binary; the scaled
/// value is nudged by a relative tolerance before rounding so they round up.
pub fn round_cents(amount: f64) -> f64 {
    from_cents(to_cents(amount))
}

pub(crate) fn to_cents(amount: f64) -> i64 {
    let scaled = amount * 100.0;
    let tolerance = scaled.abs().max(1.0) * 1e-12;
    (scaled + tolerance.copysign(scaled)).round() as i64
}

pub(crate) fn from_cents(cents: i64) -> f64 {
    cents as f64 / 100.0
}

/// numer / denom in whole cents, half-up. Both operands are non-negative.
pub(crate) fn div_cents_half_up(numer: i64, denom: i64) -> i64 {
    let (numer, denom) = (numer as i128, denom as i128);
    ((2 * numer + denom) / (2 * denom)) as i64
}

/// Larger first installment collecting several periods up front
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProratedPayment {
    /// Amount collected in the first installment
    pub first_payment: f64,
    /// Number of regular periods the first installment covers (ceil(term / 4))
    pub periods_in_first: u32,
    /// Amount of each of the remaining term - 1 installments
    pub remaining_payment: f64,
}

/// One repayment offer for a single term length
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepaymentPlan {
    /// Number of payment periods (weeks)
    pub term: u32,
    pub principal: f64,
    /// Add-on interest rate applied to the principal
    pub interest_rate: f64,
    /// Principal plus interest, in cents resolution
    pub total_repayment: f64,
    /// total_repayment / term, rounded to cents
    pub per_period_payment: f64,
    /// Present only when proration was requested
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proration: Option<ProratedPayment>,
}

impl RepaymentPlan {
    pub fn interest_cost(&self) -> f64 {
        round_cents(self.total_repayment - self.principal)
    }

    /// Amount due in the first installment
    pub fn first_installment(&self) -> f64 {
        self.proration
            .map(|p| p.first_payment)
            .unwrap_or(self.per_period_payment)
    }

    /// Full installment schedule, one entry per period
    ///
    /// Each installment is the displayed amount except the last, which absorbs
    /// the cumulative rounding drift so the schedule sums to `total_repayment`
    /// to the cent. No installment is ever negative.
    pub fn installments(&self) -> Vec<f64> {
        let term = self.term as usize;
        let mut remaining = to_cents(self.total_repayment);
        let mut schedule = Vec::with_capacity(term);

        for period in 0..term {
            let due = if period + 1 == term {
                remaining
            } else {
                to_cents(self.scheduled_amount(period)).min(remaining)
            };
            remaining -= due;
            schedule.push(from_cents(due));
        }

        schedule
    }

    fn scheduled_amount(&self, period: usize) -> f64 {
        match self.proration {
            Some(p) if period == 0 => p.first_payment,
            Some(p) => p.remaining_payment,
            None => self.per_period_payment,
        }
    }
}
