use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::fleet::store::StoreError;

use super::domain::{MaintenanceType, MaintenanceTypeId};
use super::store::{MaintenanceEntryStore, MaintenanceTypeStore};

/// Name-unique registry of maintenance-type definitions.
///
/// Deletion consults the history store so a type can never disappear while
/// recorded work still references it.
pub struct MaintenanceCatalog<T, P> {
    types: Arc<T>,
    entries: Arc<P>,
}

static TYPE_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_type_id() -> MaintenanceTypeId {
    let id = TYPE_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    MaintenanceTypeId(format!("mt-{id:06}"))
}

impl<T, P> MaintenanceCatalog<T, P>
where
    T: MaintenanceTypeStore + 'static,
    P: MaintenanceEntryStore + 'static,
{
    pub fn new(types: Arc<T>, entries: Arc<P>) -> Self {
        Self { types, entries }
    }

    /// Register a new maintenance type.
    ///
    /// An interval of zero is stored as-is and simply keeps the type out of
    /// recommendations; negative or missing intervals are unrepresentable.
    pub fn create(&self, name: &str, interval_km: u32) -> Result<MaintenanceType, CatalogError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CatalogError::BlankName);
        }
        if self.types.find_all()?.iter().any(|t| t.name == name) {
            return Err(CatalogError::NameTaken(name.to_string()));
        }

        let created = self.types.save(MaintenanceType {
            id: next_type_id(),
            name: name.to_string(),
            interval_km,
        })?;
        tracing::info!(
            name = created.name.as_str(),
            interval_km,
            "registered maintenance type"
        );
        Ok(created)
    }

    /// Rename and retune an existing type; uniqueness is re-validated
    /// excluding the record's own id.
    pub fn update(
        &self,
        id: &MaintenanceTypeId,
        name: &str,
        interval_km: u32,
    ) -> Result<MaintenanceType, CatalogError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CatalogError::BlankName);
        }

        let mut existing = self
            .types
            .find(id)?
            .ok_or_else(|| CatalogError::NotFound(id.clone()))?;

        if self
            .types
            .find_all()?
            .iter()
            .any(|t| t.name == name && t.id != *id)
        {
            return Err(CatalogError::NameTaken(name.to_string()));
        }

        existing.name = name.to_string();
        existing.interval_km = interval_km;
        Ok(self.types.save(existing)?)
    }

    /// Remove a type; refused while any recorded maintenance references it.
    pub fn delete(&self, id: &MaintenanceTypeId) -> Result<(), CatalogError> {
        if self.types.find(id)?.is_none() {
            return Err(CatalogError::NotFound(id.clone()));
        }

        let referenced = self
            .entries
            .find_all()?
            .iter()
            .any(|entry| entry.maintenance_type_id == *id);
        if referenced {
            return Err(CatalogError::InUse(id.clone()));
        }

        self.types.delete(id)?;
        tracing::info!(id = ?id, "removed maintenance type");
        Ok(())
    }

    pub fn get(&self, id: &MaintenanceTypeId) -> Result<MaintenanceType, CatalogError> {
        self.types
            .find(id)?
            .ok_or_else(|| CatalogError::NotFound(id.clone()))
    }

    pub fn find_all(&self) -> Result<Vec<MaintenanceType>, CatalogError> {
        Ok(self.types.find_all()?)
    }
}

/// Error raised by catalog operations.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("maintenance type name cannot be blank")]
    BlankName,
    #[error("maintenance type name already in use: {0}")]
    NameTaken(String),
    #[error("maintenance type not found: {0:?}")]
    NotFound(MaintenanceTypeId),
    #[error("maintenance type is referenced by recorded maintenance: {0:?}")]
    InUse(MaintenanceTypeId),
    #[error(transparent)]
    Store(#[from] StoreError),
}
