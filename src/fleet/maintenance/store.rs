use crate::fleet::store::StoreError;
use crate::fleet::vehicles::VehicleId;

use super::domain::{MaintenanceEntry, MaintenanceEntryId, MaintenanceType, MaintenanceTypeId};

/// Persistence boundary for the maintenance-type catalog.
///
/// `find_all` returns entries in creation order; recommendation output
/// preserves that traversal order. `save` upserts by id.
pub trait MaintenanceTypeStore: Send + Sync {
    fn find_all(&self) -> Result<Vec<MaintenanceType>, StoreError>;
    fn find(&self, id: &MaintenanceTypeId) -> Result<Option<MaintenanceType>, StoreError>;
    fn save(&self, value: MaintenanceType) -> Result<MaintenanceType, StoreError>;
    fn delete(&self, id: &MaintenanceTypeId) -> Result<(), StoreError>;
}

/// Persistence boundary for performed-maintenance history.
pub trait MaintenanceEntryStore: Send + Sync {
    fn find_all(&self) -> Result<Vec<MaintenanceEntry>, StoreError>;
    fn find(&self, id: &MaintenanceEntryId) -> Result<Option<MaintenanceEntry>, StoreError>;
    fn find_by_vehicle(&self, vehicle: &VehicleId) -> Result<Vec<MaintenanceEntry>, StoreError>;
    fn find_by_vehicle_and_type(
        &self,
        vehicle: &VehicleId,
        maintenance_type: &MaintenanceTypeId,
    ) -> Result<Vec<MaintenanceEntry>, StoreError>;
    fn save(&self, entry: MaintenanceEntry) -> Result<MaintenanceEntry, StoreError>;
    fn delete(&self, id: &MaintenanceEntryId) -> Result<(), StoreError>;
}
