use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Deserializer};

use super::catalog::{CatalogError, MaintenanceCatalog};
use super::store::{MaintenanceEntryStore, MaintenanceTypeStore};

/// Seed the maintenance catalog from a `Name,Interval Km` spreadsheet
/// export.
///
/// Rows whose name is already registered (or repeated within the file) are
/// counted as skipped rather than failing the whole import; a blank interval
/// column registers the type disabled.
pub struct CatalogCsvImporter;

impl CatalogCsvImporter {
    pub fn from_path<T, P, Q>(
        path: Q,
        catalog: &MaintenanceCatalog<T, P>,
    ) -> Result<ImportSummary, CatalogImportError>
    where
        T: MaintenanceTypeStore + 'static,
        P: MaintenanceEntryStore + 'static,
        Q: AsRef<Path>,
    {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file, catalog)
    }

    pub fn from_reader<T, P, R>(
        reader: R,
        catalog: &MaintenanceCatalog<T, P>,
    ) -> Result<ImportSummary, CatalogImportError>
    where
        T: MaintenanceTypeStore + 'static,
        P: MaintenanceEntryStore + 'static,
        R: Read,
    {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut seen: HashSet<String> = catalog
            .find_all()?
            .into_iter()
            .map(|maintenance_type| maintenance_type.name)
            .collect();
        let mut summary = ImportSummary::default();

        for row in csv_reader.deserialize::<CatalogRow>() {
            let row = row?;
            let name = row.name.trim();
            if name.is_empty() || seen.contains(name) {
                summary.skipped += 1;
                continue;
            }

            let created = catalog.create(name, row.interval_km.unwrap_or(0))?;
            seen.insert(created.name);
            summary.created += 1;
        }

        tracing::info!(
            created = summary.created,
            skipped = summary.skipped,
            "imported maintenance catalog export"
        );
        Ok(summary)
    }
}

/// Outcome counters for a catalog import.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ImportSummary {
    pub created: usize,
    pub skipped: usize,
}

/// Error raised while importing a catalog export.
#[derive(Debug, thiserror::Error)]
pub enum CatalogImportError {
    #[error("failed to read catalog export: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid catalog CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("could not register maintenance type: {0}")]
    Catalog(#[from] CatalogError),
}

#[derive(Debug, Deserialize)]
struct CatalogRow {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Interval Km", default, deserialize_with = "blank_as_none")]
    interval_km: Option<u32>,
}

fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    match opt.as_deref().map(str::trim).filter(|value| !value.is_empty()) {
        Some(value) => value
            .parse::<u32>()
            .map(Some)
            .map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}
