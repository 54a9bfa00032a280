//! Business services for a vehicle-rental fleet.
//!
//! The crate covers the two stateful subsystems of the marketplace's upkeep
//! domain: scheduling the periodic technical control each vehicle must pass
//! (`fleet::inspection`) and recommending mileage-based maintenance work
//! (`fleet::maintenance`). Persistence, the vehicle directory, and odometer
//! history are abstract collaborators injected into each service; any front
//! end (HTTP handler, batch job, CLI) composes these services and translates
//! their results into its own presentation.

pub mod config;
pub mod fleet;
pub mod telemetry;

pub use fleet::inspection::{
    InspectionError, InspectionPolicy, InspectionScheduler, InspectionUrgency,
};
pub use fleet::maintenance::{MaintenanceCatalog, MaintenanceHistory, RecommendationEngine};
