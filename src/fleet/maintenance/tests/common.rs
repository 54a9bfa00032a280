use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::NaiveDate;

use crate::fleet::maintenance::catalog::MaintenanceCatalog;
use crate::fleet::maintenance::domain::{
    MaintenanceEntry, MaintenanceEntryId, MaintenanceType, MaintenanceTypeId,
};
use crate::fleet::maintenance::history::MaintenanceHistory;
use crate::fleet::maintenance::recommend::RecommendationEngine;
use crate::fleet::maintenance::store::{MaintenanceEntryStore, MaintenanceTypeStore};
use crate::fleet::store::StoreError;
use crate::fleet::vehicles::{MileageHistory, VehicleDirectory, VehicleId, VehicleSummary};

pub(super) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

pub(super) fn vehicle_id(raw: &str) -> VehicleId {
    VehicleId(raw.to_string())
}

#[derive(Default, Clone)]
pub(super) struct MemoryVehicles {
    vehicles: Arc<Mutex<HashMap<VehicleId, VehicleSummary>>>,
}

impl MemoryVehicles {
    pub(super) fn insert(&self, summary: VehicleSummary) {
        self.vehicles
            .lock()
            .expect("directory mutex poisoned")
            .insert(summary.id.clone(), summary);
    }
}

impl VehicleDirectory for MemoryVehicles {
    fn find(&self, id: &VehicleId) -> Result<Option<VehicleSummary>, StoreError> {
        let guard = self.vehicles.lock().expect("directory mutex poisoned");
        Ok(guard.get(id).cloned())
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryMileage {
    readings: Arc<Mutex<HashMap<VehicleId, u32>>>,
}

impl MemoryMileage {
    pub(super) fn set(&self, vehicle: &VehicleId, km: u32) {
        self.readings
            .lock()
            .expect("mileage mutex poisoned")
            .insert(vehicle.clone(), km);
    }
}

impl MileageHistory for MemoryMileage {
    fn latest_reading_km(&self, id: &VehicleId) -> Result<Option<u32>, StoreError> {
        let guard = self.readings.lock().expect("mileage mutex poisoned");
        Ok(guard.get(id).copied())
    }
}

/// Vec-backed type store preserving creation order, as the trait requires.
#[derive(Default, Clone)]
pub(super) struct MemoryTypes {
    types: Arc<Mutex<Vec<MaintenanceType>>>,
}

impl MaintenanceTypeStore for MemoryTypes {
    fn find_all(&self) -> Result<Vec<MaintenanceType>, StoreError> {
        Ok(self.types.lock().expect("type mutex poisoned").clone())
    }

    fn find(&self, id: &MaintenanceTypeId) -> Result<Option<MaintenanceType>, StoreError> {
        let guard = self.types.lock().expect("type mutex poisoned");
        Ok(guard.iter().find(|t| t.id == *id).cloned())
    }

    fn save(&self, value: MaintenanceType) -> Result<MaintenanceType, StoreError> {
        let mut guard = self.types.lock().expect("type mutex poisoned");
        match guard.iter_mut().find(|t| t.id == value.id) {
            Some(existing) => *existing = value.clone(),
            None => guard.push(value.clone()),
        }
        Ok(value)
    }

    fn delete(&self, id: &MaintenanceTypeId) -> Result<(), StoreError> {
        let mut guard = self.types.lock().expect("type mutex poisoned");
        guard.retain(|t| t.id != *id);
        Ok(())
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryEntries {
    entries: Arc<Mutex<Vec<MaintenanceEntry>>>,
}

impl MaintenanceEntryStore for MemoryEntries {
    fn find_all(&self) -> Result<Vec<MaintenanceEntry>, StoreError> {
        Ok(self.entries.lock().expect("entry mutex poisoned").clone())
    }

    fn find(&self, id: &MaintenanceEntryId) -> Result<Option<MaintenanceEntry>, StoreError> {
        let guard = self.entries.lock().expect("entry mutex poisoned");
        Ok(guard.iter().find(|e| e.id == *id).cloned())
    }

    fn find_by_vehicle(&self, vehicle: &VehicleId) -> Result<Vec<MaintenanceEntry>, StoreError> {
        let guard = self.entries.lock().expect("entry mutex poisoned");
        Ok(guard
            .iter()
            .filter(|e| e.vehicle_id == *vehicle)
            .cloned()
            .collect())
    }

    fn find_by_vehicle_and_type(
        &self,
        vehicle: &VehicleId,
        maintenance_type: &MaintenanceTypeId,
    ) -> Result<Vec<MaintenanceEntry>, StoreError> {
        let guard = self.entries.lock().expect("entry mutex poisoned");
        Ok(guard
            .iter()
            .filter(|e| e.vehicle_id == *vehicle && e.maintenance_type_id == *maintenance_type)
            .cloned()
            .collect())
    }

    fn save(&self, entry: MaintenanceEntry) -> Result<MaintenanceEntry, StoreError> {
        let mut guard = self.entries.lock().expect("entry mutex poisoned");
        match guard.iter_mut().find(|e| e.id == entry.id) {
            Some(existing) => *existing = entry.clone(),
            None => guard.push(entry.clone()),
        }
        Ok(entry)
    }

    fn delete(&self, id: &MaintenanceEntryId) -> Result<(), StoreError> {
        let mut guard = self.entries.lock().expect("entry mutex poisoned");
        guard.retain(|e| e.id != *id);
        Ok(())
    }
}

pub(super) struct Fixture {
    pub(super) vehicles: Arc<MemoryVehicles>,
    pub(super) mileage: Arc<MemoryMileage>,
    pub(super) types: Arc<MemoryTypes>,
    pub(super) entries: Arc<MemoryEntries>,
}

impl Fixture {
    pub(super) fn catalog(&self) -> MaintenanceCatalog<MemoryTypes, MemoryEntries> {
        MaintenanceCatalog::new(self.types.clone(), self.entries.clone())
    }

    pub(super) fn history(&self) -> MaintenanceHistory<MemoryVehicles, MemoryTypes, MemoryEntries> {
        MaintenanceHistory::new(self.vehicles.clone(), self.types.clone(), self.entries.clone())
    }

    pub(super) fn engine(
        &self,
    ) -> RecommendationEngine<MemoryVehicles, MemoryMileage, MemoryTypes, MemoryEntries> {
        RecommendationEngine::new(
            self.vehicles.clone(),
            self.mileage.clone(),
            self.types.clone(),
            self.entries.clone(),
        )
    }
}

/// Memory-backed fixture with one seeded vehicle, `veh-001`.
pub(super) fn fixture() -> Fixture {
    let vehicles = Arc::new(MemoryVehicles::default());
    vehicles.insert(VehicleSummary {
        id: vehicle_id("veh-001"),
        make: "Renault".to_string(),
        model: "Clio".to_string(),
    });

    Fixture {
        vehicles,
        mileage: Arc::new(MemoryMileage::default()),
        types: Arc::new(MemoryTypes::default()),
        entries: Arc::new(MemoryEntries::default()),
    }
}
