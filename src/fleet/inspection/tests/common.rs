use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::NaiveDate;

use crate::fleet::clock::Clock;
use crate::fleet::inspection::domain::InspectionRecord;
use crate::fleet::inspection::policy::InspectionPolicy;
use crate::fleet::inspection::service::InspectionScheduler;
use crate::fleet::inspection::store::InspectionRecordStore;
use crate::fleet::store::StoreError;
use crate::fleet::vehicles::{VehicleDirectory, VehicleId, VehicleSummary};

pub(super) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

pub(super) fn vehicle_id(raw: &str) -> VehicleId {
    VehicleId(raw.to_string())
}

/// Clock pinned to a fixed day so deadline math is deterministic.
#[derive(Debug, Clone, Copy)]
pub(super) struct FixedClock(pub(super) NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
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
pub(super) struct MemoryInspectionStore {
    records: Arc<Mutex<HashMap<VehicleId, InspectionRecord>>>,
}

impl MemoryInspectionStore {
    pub(super) fn len(&self) -> usize {
        self.records.lock().expect("record mutex poisoned").len()
    }

    pub(super) fn get(&self, vehicle: &VehicleId) -> Option<InspectionRecord> {
        self.records
            .lock()
            .expect("record mutex poisoned")
            .get(vehicle)
            .cloned()
    }

    pub(super) fn put(&self, record: InspectionRecord) {
        self.records
            .lock()
            .expect("record mutex poisoned")
            .insert(record.vehicle_id.clone(), record);
    }
}

impl InspectionRecordStore for MemoryInspectionStore {
    fn find_by_vehicle(&self, vehicle: &VehicleId) -> Result<Option<InspectionRecord>, StoreError> {
        let guard = self.records.lock().expect("record mutex poisoned");
        Ok(guard.get(vehicle).cloned())
    }

    fn save(&self, record: InspectionRecord) -> Result<InspectionRecord, StoreError> {
        let mut guard = self.records.lock().expect("record mutex poisoned");
        guard.insert(record.vehicle_id.clone(), record.clone());
        Ok(record)
    }
}

pub(super) fn record_for(vehicle: &str) -> InspectionRecord {
    InspectionRecord::new(vehicle_id(vehicle))
}

/// Scheduler over memory stores with one seeded vehicle, `veh-001`.
pub(super) fn scheduler(
    today: NaiveDate,
) -> (
    InspectionScheduler<MemoryVehicles, MemoryInspectionStore, FixedClock>,
    Arc<MemoryInspectionStore>,
    Arc<MemoryVehicles>,
) {
    let vehicles = Arc::new(MemoryVehicles::default());
    vehicles.insert(VehicleSummary {
        id: vehicle_id("veh-001"),
        make: "Renault".to_string(),
        model: "Clio".to_string(),
    });

    let records = Arc::new(MemoryInspectionStore::default());
    let service = InspectionScheduler::with_clock(
        vehicles.clone(),
        records.clone(),
        InspectionPolicy::default(),
        FixedClock(today),
    );

    (service, records, vehicles)
}
