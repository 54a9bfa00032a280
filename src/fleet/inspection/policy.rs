use serde::{Deserialize, Serialize};

/// Regulatory dials for the periodic technical control.
///
/// The first control falls four years after first registration; renewals
/// come every two years while the vehicle is under the age band and every
/// year from the band onward. Age is measured in whole years from the
/// registration date to the evaluation day, not from the last inspection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InspectionPolicy {
    pub first_control_after_years: u32,
    pub renewal_under_age_band_years: u32,
    pub renewal_from_age_band_years: u32,
    pub age_band_years: u32,
    pub urgent_within_days: i64,
    pub upcoming_within_days: i64,
    pub planned_within_days: i64,
}

impl Default for InspectionPolicy {
    fn default() -> Self {
        Self {
            first_control_after_years: 4,
            renewal_under_age_band_years: 2,
            renewal_from_age_band_years: 1,
            age_band_years: 10,
            urgent_within_days: 7,
            upcoming_within_days: 30,
            planned_within_days: 90,
        }
    }
}
