//! Maintenance catalog, history, and mileage-based recommendations.
//!
//! [`MaintenanceCatalog`] is the name-unique registry of upkeep categories;
//! [`MaintenanceHistory`] records which categories were carried out on which
//! vehicle; [`RecommendationEngine`] crosses the catalog's mileage intervals
//! with the latest odometer reading to surface work that is due and not yet
//! performed. Reference data can be seeded from a spreadsheet export via
//! [`CatalogCsvImporter`].

pub mod catalog;
pub mod domain;
pub mod history;
pub mod import;
pub mod recommend;
pub mod store;


pub use catalog::{CatalogError, MaintenanceCatalog};
pub use domain::{MaintenanceEntry, MaintenanceEntryId, MaintenanceType, MaintenanceTypeId};
pub use history::{HistoryError, MaintenanceHistory};
pub use import::{CatalogCsvImporter, CatalogImportError, ImportSummary};
pub use recommend::{RecommendationEngine, RecommendationError};
pub use store::{MaintenanceEntryStore, MaintenanceTypeStore};
