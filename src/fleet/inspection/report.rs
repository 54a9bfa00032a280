use chrono::NaiveDate;
use serde::Serialize;

use crate::fleet::vehicles::VehicleId;

/// Sanitized inspection status projection for dashboards and notifications.
#[derive(Debug, Clone, Serialize)]
pub struct InspectionStatusReport {
    pub vehicle_id: VehicleId,
    pub make: String,
    pub model: String,
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_deadline: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days_remaining: Option<i64>,
}
