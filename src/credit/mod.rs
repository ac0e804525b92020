//! Credit scores, tier classification and the scoring oracle seam

mod score;
mod tier;
pub mod oracle;

pub use score::{CreditScore, MIN_CREDIT_SCORE, MAX_CREDIT_SCORE};
pub use tier::{CreditTier, FAIR_THRESHOLD, GOOD_THRESHOLD, EXCELLENT_THRESHOLD};
pub use oracle::{ScoreOracle, StaticScoreOracle};
