use std::sync::Arc;

use crate::fleet::store::StoreError;
use crate::fleet::vehicles::{MileageHistory, VehicleDirectory, VehicleId};

use super::store::{MaintenanceEntryStore, MaintenanceTypeStore};

/// Engine surfacing maintenance work that is due by mileage and not yet
/// performed.
pub struct RecommendationEngine<V, M, T, P> {
    vehicles: Arc<V>,
    mileage: Arc<M>,
    types: Arc<T>,
    entries: Arc<P>,
}

impl<V, M, T, P> RecommendationEngine<V, M, T, P>
where
    V: VehicleDirectory + 'static,
    M: MileageHistory + 'static,
    T: MaintenanceTypeStore + 'static,
    P: MaintenanceEntryStore + 'static,
{
    pub fn new(vehicles: Arc<V>, mileage: Arc<M>, types: Arc<T>, entries: Arc<P>) -> Self {
        Self {
            vehicles,
            mileage,
            types,
            entries,
        }
    }

    /// Names of the maintenance types due for this vehicle, in catalog
    /// creation order.
    ///
    /// A type is due once the latest odometer reading reaches its interval
    /// and no history entry exists for the (vehicle, type) pair. A recorded
    /// entry excludes the type from every future recommendation regardless
    /// of further mileage; recurrence requires clearing its history. No
    /// odometer history at all means an empty result, not a failure.
    pub fn recommendations_for(
        &self,
        vehicle: &VehicleId,
    ) -> Result<Vec<String>, RecommendationError> {
        if self.vehicles.find(vehicle)?.is_none() {
            return Err(RecommendationError::UnknownVehicle(vehicle.clone()));
        }

        let latest_km = match self.mileage.latest_reading_km(vehicle)? {
            Some(km) => km,
            None => return Ok(Vec::new()),
        };

        let performed = self.entries.find_by_vehicle(vehicle)?;
        let mut due = Vec::new();

        for maintenance_type in self.types.find_all()? {
            if maintenance_type.interval_km == 0 {
                continue;
            }
            if latest_km < maintenance_type.interval_km {
                continue;
            }
            let already_done = performed
                .iter()
                .any(|entry| entry.maintenance_type_id == maintenance_type.id);
            if !already_done {
                due.push(maintenance_type.name);
            }
        }

        tracing::debug!(
            vehicle = ?vehicle,
            latest_km,
            due = due.len(),
            "computed maintenance recommendations"
        );
        Ok(due)
    }
}

/// Error raised by the recommendation engine.
#[derive(Debug, thiserror::Error)]
pub enum RecommendationError {
    #[error("vehicle not found in the directory: {0:?}")]
    UnknownVehicle(VehicleId),
    #[error(transparent)]
    Store(#[from] StoreError),
}
