//! Applicant identity submission

use crate::error::{PricingError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity submitted by a shopper: name and social security number
///
/// `Debug` masks the SSN but `Serialize` writes it in full, so serialized
/// applicants belong in trusted storage only, never in logs. Deserializing
/// goes through [`Applicant::new`].
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawApplicant")]
pub struct Applicant {
    name: String,
    ssn: String,
}

#[derive(Deserialize)]
struct RawApplicant {
    name: String,
    ssn: String,
}

impl TryFrom<RawApplicant> for Applicant {
    type Error = PricingError;

    fn try_from(raw: RawApplicant) -> Result<Self> {
        Self::new(raw.name, raw.ssn)
    }
}

impl Applicant {
    /// Both fields are required; surrounding whitespace is dropped
    pub fn new(name: impl Into<String>, ssn: impl Into<String>) -> Result<Self> {
        let name = name.into().trim().to_string();
        let ssn = ssn.into().trim().to_string();
        if name.is_empty() {
            return Err(PricingError::invalid("name", "name is required"));
        }
        if ssn.is_empty() {
            return Err(PricingError::invalid("ssn", "social security number is required"));
        }
        Ok(Self { name, ssn })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ssn(&self) -> &str {
        &self.ssn
    }

    /// Last four characters of the SSN, the only part safe to log
    pub fn ssn_last4(&self) -> &str {
        let start = self
            .ssn
            .char_indices()
            .rev()
            .nth(3)
            .map(|(idx, _)| idx)
            .unwrap_or(0);
        &self.ssn[start..]
    }
}

// Debug output masks the SSN
impl fmt::Debug for Applicant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Applicant")
            .field("name", &self.name)
            .field("ssn", &format_args!("***-**-{}", self.ssn_last4()))
            .finish()
    }
}
