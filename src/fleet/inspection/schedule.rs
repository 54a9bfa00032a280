use chrono::{Datelike, Months, NaiveDate};

use super::domain::{InspectionRecord, InspectionUrgency};
use super::policy::InspectionPolicy;

/// Whole calendar years elapsed from `start` to `today`, anniversary-adjusted.
pub fn whole_years_between(start: NaiveDate, today: NaiveDate) -> i32 {
    let mut years = today.year() - start.year();
    if (today.month(), today.day()) < (start.month(), start.day()) {
        years -= 1;
    }
    years
}

/// Date of the next mandatory control, or `None` when it cannot be derived.
///
/// Without a registration date nothing is computable. A vehicle that has
/// never been inspected owes its first control `first_control_after_years`
/// after registration. Otherwise the renewal interval depends on the
/// vehicle's age band as of `today`, counted from registration.
pub fn next_deadline(
    record: &InspectionRecord,
    policy: &InspectionPolicy,
    today: NaiveDate,
) -> Option<NaiveDate> {
    let first_registration = record.first_registration?;

    match record.last_inspection {
        None => add_years(first_registration, policy.first_control_after_years),
        Some(last_inspection) => {
            let age_years = whole_years_between(first_registration, today);
            let renewal_years = if age_years < policy.age_band_years as i32 {
                policy.renewal_under_age_band_years
            } else {
                policy.renewal_from_age_band_years
            };
            add_years(last_inspection, renewal_years)
        }
    }
}

/// Signed day count from `today` to `deadline`; negative means overdue.
pub fn days_until(deadline: NaiveDate, today: NaiveDate) -> i64 {
    deadline.signed_duration_since(today).num_days()
}

/// Bucket a day count against the policy thresholds.
///
/// Boundaries are inclusive on the lower side: exactly `urgent_within_days`
/// remaining is still urgent. Overdue deadlines land in the urgent bucket.
pub fn classify(days_remaining: Option<i64>, policy: &InspectionPolicy) -> InspectionUrgency {
    let days = match days_remaining {
        Some(days) => days,
        None => return InspectionUrgency::Unknown,
    };

    if days <= policy.urgent_within_days {
        InspectionUrgency::Urgent
    } else if days <= policy.upcoming_within_days {
        InspectionUrgency::Upcoming
    } else if days <= policy.planned_within_days {
        InspectionUrgency::Planned
    } else {
        InspectionUrgency::Ok
    }
}

// Month arithmetic clamps to the end of the month, so a Feb 29 anchor renews
// on Feb 28 in non-leap years.
fn add_years(date: NaiveDate, years: u32) -> Option<NaiveDate> {
    date.checked_add_months(Months::new(years * 12))
}
