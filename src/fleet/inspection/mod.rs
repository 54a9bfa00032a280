//! Technical-control scheduling for the fleet.
//!
//! Each vehicle carries at most one [`domain::InspectionRecord`]; the
//! [`InspectionScheduler`] creates it lazily, derives the next mandatory
//! control date from the regulatory age bands in [`InspectionPolicy`], and
//! classifies urgency relative to the injected clock. Deadline math lives in
//! `schedule` as pure functions so callers can choose between the cached
//! date and a fresh computation explicitly.

pub mod domain;
pub mod policy;
pub mod report;
pub mod schedule;
pub mod service;
pub mod store;

#[cfg(test)]
mod tests;

pub use domain::{InspectionRecord, InspectionUrgency};
pub use policy::InspectionPolicy;
pub use report::InspectionStatusReport;
pub use service::{InspectionError, InspectionScheduler};
pub use store::InspectionRecordStore;
