use serde::{Deserialize, Serialize};

use super::store::StoreError;

/// Identifier wrapper for vehicles owned by the wider marketplace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VehicleId(pub String);

/// Directory projection of a vehicle, sufficient for reporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleSummary {
    pub id: VehicleId,
    pub make: String,
    pub model: String,
}

/// Read-side collaborator resolving vehicles registered on the marketplace.
pub trait VehicleDirectory: Send + Sync {
    fn find(&self, id: &VehicleId) -> Result<Option<VehicleSummary>, StoreError>;
}

/// Odometer readings accumulated over a vehicle's rental history.
pub trait MileageHistory: Send + Sync {
    fn latest_reading_km(&self, id: &VehicleId) -> Result<Option<u32>, StoreError>;
}
