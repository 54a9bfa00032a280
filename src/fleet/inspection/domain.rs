use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::fleet::vehicles::VehicleId;

/// Per-vehicle technical-control ledger.
///
/// Absence of a record means the vehicle has never been through the
/// scheduling workflow; the scheduler creates one lazily. `next_deadline` is
/// a derived cache: user-facing classification recomputes it instead of
/// trusting the stored value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InspectionRecord {
    pub vehicle_id: VehicleId,
    /// Date the vehicle first entered service (mise en circulation).
    pub first_registration: Option<NaiveDate>,
    pub last_inspection: Option<NaiveDate>,
    pub current_mileage_km: Option<u32>,
    pub mileage_at_last_inspection_km: Option<u32>,
    pub next_deadline: Option<NaiveDate>,
    pub last_maintenance: Option<NaiveDate>,
    pub last_result: Option<String>,
}

impl InspectionRecord {
    /// Empty ledger bound to a vehicle that has never been inspected.
    pub fn new(vehicle_id: VehicleId) -> Self {
        Self {
            vehicle_id,
            first_registration: None,
            last_inspection: None,
            current_mileage_km: None,
            mileage_at_last_inspection_km: None,
            next_deadline: None,
            last_maintenance: None,
            last_result: None,
        }
    }
}

/// Urgency bucket derived from the days remaining until the control deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InspectionUrgency {
    Unknown,
    Urgent,
    Upcoming,
    Planned,
    Ok,
}

impl InspectionUrgency {
    pub const fn label(self) -> &'static str {
        match self {
            InspectionUrgency::Unknown => "unknown",
            InspectionUrgency::Urgent => "urgent",
            InspectionUrgency::Upcoming => "upcoming",
            InspectionUrgency::Planned => "planned",
            InspectionUrgency::Ok => "ok",
        }
    }
}
