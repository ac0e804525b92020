//! In-memory applicant registry
//!
//! A submission matches an existing record when either the name or the SSN is
//! already known. Matching records are returned instead of inserting a
//! duplicate, and a score cached on the record is reused by quoting.

use super::Applicant;
use crate::credit::CreditScore;
use crate::error::QuoteError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Registry entry. Serializes the applicant's full SSN, see [`Applicant`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicantRecord {
    pub id: u32,
    pub applicant: Applicant,
    pub credit_score: Option<CreditScore>,
    pub registered_at: DateTime<Utc>,
}

/// Outcome of a registration attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Registration {
    Existing(u32),
    Created(u32),
}

impl Registration {
    pub fn id(self) -> u32 {
        match self {
            Registration::Existing(id) | Registration::Created(id) => id,
        }
    }

    pub fn is_new(self) -> bool {
        matches!(self, Registration::Created(_))
    }
}

#[derive(Debug, Default)]
pub struct ApplicantRegistry {
    records: Vec<ApplicantRecord>,
}

impl ApplicantRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the matching record id, or insert a new record
    pub fn register(&mut self, applicant: Applicant) -> Registration {
        if let Some(existing) = self.find(&applicant) {
            log::debug!("Applicant ending {} matches record {}", applicant.ssn_last4(), existing.id);
            return Registration::Existing(existing.id);
        }

        let id = self.records.len() as u32 + 1;
        log::info!("Registered applicant {} (ssn ending {})", id, applicant.ssn_last4());
        self.records.push(ApplicantRecord {
            id,
            applicant,
            credit_score: None,
            registered_at: Utc::now(),
        });
        Registration::Created(id)
    }

    /// First record sharing the name or the SSN
    pub fn find(&self, applicant: &Applicant) -> Option<&ApplicantRecord> {
        self.records
            .iter()
            .find(|r| r.applicant.name() == applicant.name() || r.applicant.ssn() == applicant.ssn())
    }

    pub fn get(&self, id: u32) -> Option<&ApplicantRecord> {
        id.checked_sub(1).and_then(|idx| self.records.get(idx as usize))
    }

    pub fn cached_score(&self, id: u32) -> Option<CreditScore> {
        self.get(id).and_then(|r| r.credit_score)
    }

    pub fn record_score(&mut self, id: u32, score: CreditScore) -> Result<(), QuoteError> {
        let record = id
            .checked_sub(1)
            .and_then(|idx| self.records.get_mut(idx as usize))
            .ok_or(QuoteError::UnknownApplicant(id))?;
        record.credit_score = Some(score);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[ApplicantRecord] {
        &self.records
    }
}
