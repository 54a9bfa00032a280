//! Upkeep workflows for the rental fleet.
//!
//! Two subsystems live here: `inspection` tracks the mandatory periodic
//! technical control per vehicle, and `maintenance` keeps the catalog of
//! upkeep categories together with the per-vehicle history that drives
//! mileage-based recommendations. Both reach the wider marketplace only
//! through the collaborator traits in `vehicles` and the store traits of
//! each subsystem.

pub mod clock;
pub mod inspection;
pub mod maintenance;
pub mod store;
pub mod vehicles;

pub use clock::{Clock, SystemClock};
pub use store::StoreError;
pub use vehicles::{MileageHistory, VehicleDirectory, VehicleId, VehicleSummary};
