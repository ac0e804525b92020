//! Load tier policies from CSV and calculator configuration from JSON
//!
//! Tier CSV layout (header required, label optional):
//!
//! ```text
//! min_score,rate,label
//! 740,0.05,Excellent
//! 670,0.08,Good
//! 300,0.15,Poor
//! ```
//!
//! Rows must already be in descending threshold order; the row at or below
//! 300 is the fallback tier.

use super::{CalculatorConfig, InterestTierPolicy, RateTier};
use crate::error::LoadError;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Tier table shipped with the crate, same rates as `InterestTierPolicy::default()`
pub const DEFAULT_TIERS_CSV: &str = include_str!("../../data/interest_tiers.csv");

/// Load and validate a tier policy from a CSV file
pub fn load_tier_policy<P: AsRef<Path>>(path: P) -> Result<InterestTierPolicy, LoadError> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let policy = load_tier_policy_from_reader(file)?;
    log::info!("Loaded {} interest tiers from {}", policy.len(), path.display());
    Ok(policy)
}

/// Load and validate a tier policy from any CSV source
pub fn load_tier_policy_from_reader<R: Read>(reader: R) -> Result<InterestTierPolicy, LoadError> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut tiers = Vec::new();
    for result in rdr.deserialize() {
        let tier: RateTier = result?;
        tiers.push(tier);
    }

    Ok(InterestTierPolicy::new(tiers)?)
}

/// Tier policy from the bundled CSV table
pub fn load_default_tier_policy() -> Result<InterestTierPolicy, LoadError> {
    load_tier_policy_from_reader(DEFAULT_TIERS_CSV.as_bytes())
}

/// Load and validate calculator configuration from a JSON file
pub fn load_calculator_config<P: AsRef<Path>>(path: P) -> Result<CalculatorConfig, LoadError> {
    let path = path.as_ref();
    let config = load_calculator_config_from_reader(File::open(path)?)?;
    log::info!("Loaded calculator config from {}", path.display());
    Ok(config)
}

pub fn load_calculator_config_from_reader<R: Read>(reader: R) -> Result<CalculatorConfig, LoadError> {
    let config: CalculatorConfig = serde_json::from_reader(reader)?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credit::CreditScore;
    use crate::error::PricingError;

    #[test]
    fn test_bundled_table_matches_default() {
        let loaded = load_default_tier_policy().expect("bundled tiers load");
        assert_eq!(loaded, InterestTierPolicy::default());
    }

    #[test]
    fn test_label_column_optional() {
        let csv = "min_score,rate,label\n700, 0.05,\n300,0.10,\n";
        let policy = load_tier_policy_from_reader(csv.as_bytes()).unwrap();
        assert_eq!(policy.len(), 2);
        assert_eq!(policy.rate_for(CreditScore::clamped(701)), 0.05);
        assert!(policy.iter().all(|t| t.label.is_none()));
    }

    #[test]
    fn test_gapped_table_is_configuration_error() {
        let csv = "min_score,rate,label\n700,0.05,A\n500,0.10,B\n";
        let err = load_tier_policy_from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::Pricing(PricingError::Configuration(_))));
    }

    #[test]
    fn test_malformed_row_is_csv_error() {
        let csv = "min_score,rate,label\nhigh,0.05,A\n";
        let err = load_tier_policy_from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::Csv(_)));
    }

    #[test]
    fn test_config_defaults() {
        let config = load_calculator_config_from_reader("{}".as_bytes()).unwrap();
        assert_eq!(config, CalculatorConfig::default());

        let config = load_calculator_config_from_reader(r#"{"terms": [6], "prorate_first_payment": true}"#.as_bytes()).unwrap();
        assert_eq!(config.terms, vec![6]);
        assert!(config.prorate_first_payment);
    }

    #[test]
    fn test_config_rejects_zero_term() {
        let err = load_calculator_config_from_reader(r#"{"terms": [4, 0]}"#.as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::Pricing(PricingError::Configuration(_))));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(load_tier_policy("/nonexistent/tiers.csv"), Err(LoadError::Io(_))));
    }
}
