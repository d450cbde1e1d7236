use chrono::NaiveDate;
use rural_triage::config::StorageConfig;
use rural_triage::triage::{JsonFileStorage, TriageService, VisitStore};
use std::sync::Arc;
use tracing::debug;

pub(crate) fn open_service(config: &StorageConfig) -> TriageService<JsonFileStorage> {
    debug!(path = %config.data_file.display(), "opening visit document");
    let storage = Arc::new(JsonFileStorage::new(config.data_file.clone()));
    TriageService::new(Arc::new(VisitStore::new(storage)))
}

#[cfg(test)]
pub(crate) fn in_memory_service() -> TriageService<rural_triage::triage::InMemoryStorage> {
    let storage = Arc::new(rural_triage::triage::InMemoryStorage::default());
    TriageService::new(Arc::new(VisitStore::new(storage)))
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}
