use crate::fleet::store::StoreError;
use crate::fleet::vehicles::VehicleId;

use super::domain::InspectionRecord;

/// Persistence boundary for the per-vehicle inspection ledger.
///
/// `save` upserts by vehicle identity; records are never deleted in normal
/// flow because the maintenance history depends on them existing.
pub trait InspectionRecordStore: Send + Sync {
    fn find_by_vehicle(&self, vehicle: &VehicleId) -> Result<Option<InspectionRecord>, StoreError>;
    fn save(&self, record: InspectionRecord) -> Result<InspectionRecord, StoreError>;
}
