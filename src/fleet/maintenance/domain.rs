use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::fleet::vehicles::VehicleId;

/// Identifier wrapper for catalog maintenance types.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MaintenanceTypeId(pub String);

/// Identifier wrapper for performed-maintenance history entries.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MaintenanceEntryId(pub String);

/// Catalog definition of an upkeep category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaintenanceType {
    pub id: MaintenanceTypeId,
    /// Unique human-readable name; matched case-sensitively.
    pub name: String,
    /// Mileage interval at which the work becomes due. Zero disables the
    /// type for recommendation purposes.
    pub interval_km: u32,
}

/// History entry recording that a maintenance type was carried out on a
/// vehicle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaintenanceEntry {
    pub id: MaintenanceEntryId,
    pub vehicle_id: VehicleId,
    pub maintenance_type_id: MaintenanceTypeId,
    pub performed_on: NaiveDate,
}
