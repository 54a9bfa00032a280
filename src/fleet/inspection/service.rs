use std::sync::Arc;

use chrono::NaiveDate;

use crate::fleet::clock::{Clock, SystemClock};
use crate::fleet::store::StoreError;
use crate::fleet::vehicles::{VehicleDirectory, VehicleId, VehicleSummary};

use super::domain::{InspectionRecord, InspectionUrgency};
use super::policy::InspectionPolicy;
use super::report::InspectionStatusReport;
use super::schedule;
use super::store::InspectionRecordStore;

/// Service deriving control deadlines and urgency for fleet vehicles.
///
/// Read-compute-write sequences are unsynchronized; the single writer per
/// vehicle is assumed, and the stored deadline is a pure function of the
/// record's dates, so the last writer wins.
pub struct InspectionScheduler<V, S, C = SystemClock> {
    vehicles: Arc<V>,
    records: Arc<S>,
    policy: InspectionPolicy,
    clock: C,
}

impl<V, S> InspectionScheduler<V, S, SystemClock>
where
    V: VehicleDirectory + 'static,
    S: InspectionRecordStore + 'static,
{
    pub fn new(vehicles: Arc<V>, records: Arc<S>, policy: InspectionPolicy) -> Self {
        Self::with_clock(vehicles, records, policy, SystemClock)
    }
}

impl<V, S, C> InspectionScheduler<V, S, C>
where
    V: VehicleDirectory + 'static,
    S: InspectionRecordStore + 'static,
    C: Clock,
{
    pub fn with_clock(vehicles: Arc<V>, records: Arc<S>, policy: InspectionPolicy, clock: C) -> Self {
        Self {
            vehicles,
            records,
            policy,
            clock,
        }
    }

    pub fn policy(&self) -> &InspectionPolicy {
        &self.policy
    }

    /// Return the vehicle's ledger, opening an empty one on first request.
    pub fn get_or_create_record(
        &self,
        vehicle: &VehicleId,
    ) -> Result<InspectionRecord, InspectionError> {
        self.resolve(vehicle)?;

        if let Some(record) = self.records.find_by_vehicle(vehicle)? {
            return Ok(record);
        }

        let record = self.records.save(InspectionRecord::new(vehicle.clone()))?;
        tracing::info!(vehicle = ?vehicle, "opened inspection record");
        Ok(record)
    }

    /// Update path for the mise-en-circulation date.
    ///
    /// Refreshes the stored deadline since computability may have just been
    /// unlocked by learning the registration date.
    pub fn set_first_registration(
        &self,
        vehicle: &VehicleId,
        date: NaiveDate,
    ) -> Result<InspectionRecord, InspectionError> {
        let mut record = self.get_or_create_record(vehicle)?;
        record.first_registration = Some(date);
        record.next_deadline = schedule::next_deadline(&record, &self.policy, self.clock.today());
        let record = self.records.save(record)?;
        tracing::info!(vehicle = ?vehicle, %date, "registered first entry into service");
        Ok(record)
    }

    /// Fresh deadline computation; never persists.
    ///
    /// `Ok(None)` covers both "no ledger yet" and "registration date
    /// unknown": legitimate cannot-compute states, not failures.
    pub fn next_deadline(&self, vehicle: &VehicleId) -> Result<Option<NaiveDate>, InspectionError> {
        self.resolve(vehicle)?;

        let record = match self.records.find_by_vehicle(vehicle)? {
            Some(record) => record,
            None => return Ok(None),
        };

        Ok(schedule::next_deadline(
            &record,
            &self.policy,
            self.clock.today(),
        ))
    }

    /// Compute the deadline and, when derivable, cache it on the record.
    ///
    /// Idempotent absent intervening writes: recomputing from unchanged
    /// dates stores the same value again.
    pub fn refresh_deadline(
        &self,
        vehicle: &VehicleId,
    ) -> Result<Option<NaiveDate>, InspectionError> {
        let mut record = self.get_or_create_record(vehicle)?;
        let deadline = schedule::next_deadline(&record, &self.policy, self.clock.today());

        if let Some(date) = deadline {
            record.next_deadline = Some(date);
            self.records.save(record)?;
            tracing::info!(vehicle = ?vehicle, %date, "stored next control deadline");
        }

        Ok(deadline)
    }

    /// Signed days until the deadline; `None` when nothing is computable.
    ///
    /// Trusts the cached deadline when one is stored and only falls back to
    /// a fresh computation otherwise; callers wanting staleness protection
    /// use [`InspectionScheduler::status`].
    pub fn days_remaining(&self, vehicle: &VehicleId) -> Result<Option<i64>, InspectionError> {
        self.resolve(vehicle)?;

        let record = match self.records.find_by_vehicle(vehicle)? {
            Some(record) => record,
            None => return Ok(None),
        };

        let today = self.clock.today();
        let deadline = match record.next_deadline {
            Some(cached) => Some(cached),
            None => schedule::next_deadline(&record, &self.policy, today),
        };

        Ok(deadline.map(|date| schedule::days_until(date, today)))
    }

    /// Whether the control is overdue or falls within the next `days` days.
    ///
    /// `false` when no deadline can be derived. Always computes fresh.
    pub fn is_due_within(&self, vehicle: &VehicleId, days: i64) -> Result<bool, InspectionError> {
        let today = self.clock.today();
        let due = self
            .next_deadline(vehicle)?
            .map(|date| schedule::days_until(date, today) <= days)
            .unwrap_or(false);
        Ok(due)
    }

    /// Urgency bucket for the vehicle, recomputed fresh.
    ///
    /// The cached deadline is deliberately ignored here: classification is
    /// the user-facing answer and must not reflect a stale cache.
    pub fn status(&self, vehicle: &VehicleId) -> Result<InspectionUrgency, InspectionError> {
        let today = self.clock.today();
        let days = self
            .next_deadline(vehicle)?
            .map(|date| schedule::days_until(date, today));
        Ok(schedule::classify(days, &self.policy))
    }

    /// Record a completed control and advance the inspection cycle.
    ///
    /// This is the only mutation path that moves `last_inspection` forward;
    /// the stored deadline is recomputed from the new state in the same
    /// write. A reading below the previous inspection mileage is tolerated
    /// and logged rather than rejected.
    pub fn record_inspection(
        &self,
        vehicle: &VehicleId,
        performed_on: NaiveDate,
        mileage_km: u32,
        result: &str,
    ) -> Result<InspectionRecord, InspectionError> {
        let mut record = self.get_or_create_record(vehicle)?;

        if let Some(previous) = record.mileage_at_last_inspection_km {
            if mileage_km < previous {
                tracing::warn!(
                    vehicle = ?vehicle,
                    previous,
                    reported = mileage_km,
                    "odometer reading decreased between inspections"
                );
            }
        }

        record.last_inspection = Some(performed_on);
        record.mileage_at_last_inspection_km = Some(mileage_km);
        record.last_result = Some(result.to_string());
        if record
            .current_mileage_km
            .map(|current| mileage_km > current)
            .unwrap_or(true)
        {
            record.current_mileage_km = Some(mileage_km);
        }
        record.next_deadline = schedule::next_deadline(&record, &self.policy, self.clock.today());

        let record = self.records.save(record)?;
        tracing::info!(vehicle = ?vehicle, %performed_on, "recorded completed technical control");
        Ok(record)
    }

    /// Reporting view joining the directory summary with a fresh
    /// classification.
    pub fn status_report(
        &self,
        vehicle: &VehicleId,
    ) -> Result<InspectionStatusReport, InspectionError> {
        let summary = self.resolve(vehicle)?;
        let today = self.clock.today();

        let deadline = match self.records.find_by_vehicle(vehicle)? {
            Some(record) => schedule::next_deadline(&record, &self.policy, today),
            None => None,
        };
        let days = deadline.map(|date| schedule::days_until(date, today));
        let urgency = schedule::classify(days, &self.policy);

        Ok(InspectionStatusReport {
            vehicle_id: summary.id,
            make: summary.make,
            model: summary.model,
            status: urgency.label(),
            next_deadline: deadline,
            days_remaining: days,
        })
    }

    /// Batch reporting; vehicles are independent, so failures surface on the
    /// first offending vehicle.
    pub fn status_reports(
        &self,
        vehicles: &[VehicleId],
    ) -> Result<Vec<InspectionStatusReport>, InspectionError> {
        vehicles
            .iter()
            .map(|vehicle| self.status_report(vehicle))
            .collect()
    }

    fn resolve(&self, vehicle: &VehicleId) -> Result<VehicleSummary, InspectionError> {
        self.vehicles
            .find(vehicle)?
            .ok_or_else(|| InspectionError::UnknownVehicle(vehicle.clone()))
    }
}

/// Error raised by the inspection scheduler.
#[derive(Debug, thiserror::Error)]
pub enum InspectionError {
    #[error("vehicle not found in the directory: {0:?}")]
    UnknownVehicle(VehicleId),
    #[error(transparent)]
    Store(#[from] StoreError),
}
