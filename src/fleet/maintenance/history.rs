use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::NaiveDate;

use crate::fleet::store::StoreError;
use crate::fleet::vehicles::{VehicleDirectory, VehicleId};

use super::domain::{MaintenanceEntry, MaintenanceEntryId, MaintenanceTypeId};
use super::store::{MaintenanceEntryStore, MaintenanceTypeStore};

/// Per-vehicle log of carried-out maintenance work.
///
/// Entries are immutable once recorded except through [`reschedule`]; removal
/// is unrestricted because nothing downstream references an entry.
///
/// [`reschedule`]: MaintenanceHistory::reschedule
pub struct MaintenanceHistory<V, T, P> {
    vehicles: Arc<V>,
    types: Arc<T>,
    entries: Arc<P>,
}

static ENTRY_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_entry_id() -> MaintenanceEntryId {
    let id = ENTRY_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    MaintenanceEntryId(format!("pm-{id:06}"))
}

impl<V, T, P> MaintenanceHistory<V, T, P>
where
    V: VehicleDirectory + 'static,
    T: MaintenanceTypeStore + 'static,
    P: MaintenanceEntryStore + 'static,
{
    pub fn new(vehicles: Arc<V>, types: Arc<T>, entries: Arc<P>) -> Self {
        Self {
            vehicles,
            types,
            entries,
        }
    }

    /// Record that a catalog type was carried out on a vehicle.
    pub fn record(
        &self,
        vehicle: &VehicleId,
        maintenance_type: &MaintenanceTypeId,
        performed_on: NaiveDate,
    ) -> Result<MaintenanceEntry, HistoryError> {
        if self.vehicles.find(vehicle)?.is_none() {
            return Err(HistoryError::UnknownVehicle(vehicle.clone()));
        }
        if self.types.find(maintenance_type)?.is_none() {
            return Err(HistoryError::UnknownType(maintenance_type.clone()));
        }

        let entry = self.entries.save(MaintenanceEntry {
            id: next_entry_id(),
            vehicle_id: vehicle.clone(),
            maintenance_type_id: maintenance_type.clone(),
            performed_on,
        })?;
        tracing::info!(
            vehicle = ?vehicle,
            maintenance_type = ?maintenance_type,
            %performed_on,
            "recorded performed maintenance"
        );
        Ok(entry)
    }

    /// Single mutation path: move an entry to a corrected date.
    pub fn reschedule(
        &self,
        entry: &MaintenanceEntryId,
        performed_on: NaiveDate,
    ) -> Result<MaintenanceEntry, HistoryError> {
        let mut existing = self
            .entries
            .find(entry)?
            .ok_or_else(|| HistoryError::NotFound(entry.clone()))?;

        existing.performed_on = performed_on;
        Ok(self.entries.save(existing)?)
    }

    /// Delete an entry; no references block this.
    pub fn remove(&self, entry: &MaintenanceEntryId) -> Result<(), HistoryError> {
        if self.entries.find(entry)?.is_none() {
            return Err(HistoryError::NotFound(entry.clone()));
        }
        self.entries.delete(entry)?;
        Ok(())
    }

    pub fn entries_for(&self, vehicle: &VehicleId) -> Result<Vec<MaintenanceEntry>, HistoryError> {
        if self.vehicles.find(vehicle)?.is_none() {
            return Err(HistoryError::UnknownVehicle(vehicle.clone()));
        }
        Ok(self.entries.find_by_vehicle(vehicle)?)
    }

    /// History narrowed to one catalog type for a vehicle.
    pub fn entries_for_type(
        &self,
        vehicle: &VehicleId,
        maintenance_type: &MaintenanceTypeId,
    ) -> Result<Vec<MaintenanceEntry>, HistoryError> {
        if self.vehicles.find(vehicle)?.is_none() {
            return Err(HistoryError::UnknownVehicle(vehicle.clone()));
        }
        Ok(self
            .entries
            .find_by_vehicle_and_type(vehicle, maintenance_type)?)
    }
}

/// Error raised by history operations.
#[derive(Debug, thiserror::Error)]
pub enum HistoryError {
    #[error("vehicle not found in the directory: {0:?}")]
    UnknownVehicle(VehicleId),
    #[error("maintenance type not found: {0:?}")]
    UnknownType(MaintenanceTypeId),
    #[error("maintenance entry not found: {0:?}")]
    NotFound(MaintenanceEntryId),
    #[error(transparent)]
    Store(#[from] StoreError),
}
