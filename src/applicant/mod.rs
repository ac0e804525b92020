//! Applicant identity and deduplicating registry

mod data;
pub mod registry;

pub use data::Applicant;
pub use registry::{ApplicantRegistry, ApplicantRecord, Registration};
