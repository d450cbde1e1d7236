use std::collections::BTreeSet;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::Serialize;
use tracing::{info, warn};

use super::assessment::RiskLevel;
use super::domain::{NewVisit, VisitId, VisitRecord};
use super::repository::{StorageError, VisitStorage};

/// Append-only, insertion-ordered collection of visits over a durable backend.
///
/// The collection is loaded on first access and written back in full after
/// every append. Appends are serialized by the store's lock, so two callers
/// sharing one store can never be handed the same id.
pub struct VisitStore<S> {
    storage: Arc<S>,
    records: Mutex<Option<Vec<VisitRecord>>>,
}

impl<S> VisitStore<S>
where
    S: VisitStorage,
{
    pub fn new(storage: Arc<S>) -> Self {
        Self {
            storage,
            records: Mutex::new(None),
        }
    }

    pub fn storage(&self) -> &Arc<S> {
        &self.storage
    }

    /// Assign the next id, persist the whole collection, and return the stored
    /// record. On a write failure nothing is kept in memory either. A medium
    /// that cannot be read is never written.
    pub fn append(&self, visit: NewVisit) -> Result<VisitRecord, StorageError> {
        let mut guard = self.loaded()?;
        let records = guard.get_or_insert_with(Vec::new);

        let id = VisitId(records.len() as u64 + 1);
        let record = VisitRecord::from_new(id, visit);

        records.push(record.clone());
        if let Err(err) = self.storage.save(records) {
            records.pop();
            warn!(%id, error = %err, "failed to persist visit, append rolled back");
            return Err(err);
        }

        info!(
            %id,
            village = %record.village,
            level = %record.level(),
            score = record.score(),
            "visit recorded"
        );
        Ok(record)
    }

    /// Every visit in insertion order.
    pub fn all(&self) -> Vec<VisitRecord> {
        self.read(<[VisitRecord]>::to_vec)
    }

    pub fn len(&self) -> usize {
        self.read(<[VisitRecord]>::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Visits whose level is in `levels` and whose village is in `villages`.
    /// An empty set matches nothing.
    pub fn filter(
        &self,
        levels: &BTreeSet<RiskLevel>,
        villages: &BTreeSet<String>,
    ) -> Vec<VisitRecord> {
        let filter = VisitFilter {
            levels: levels.clone(),
            villages: villages.clone(),
        };
        filter.apply(self.all())
    }

    /// Filtered visits, highest score first.
    pub fn query(&self, filter: &VisitFilter) -> Vec<VisitRecord> {
        sort_by_score_descending(filter.apply(self.all()))
    }

    /// Distinct villages in the order they were first recorded.
    pub fn villages(&self) -> Vec<String> {
        distinct_villages(&self.all())
    }

    pub fn summary(&self) -> VisitSummary {
        VisitSummary::from_records(&self.all())
    }

    /// Reads see an empty collection while the medium is unavailable. Nothing
    /// is cached in that case, so the next access retries the load.
    fn read<T>(&self, view: impl FnOnce(&[VisitRecord]) -> T) -> T {
        match self.loaded() {
            Ok(guard) => view(guard.as_deref().unwrap_or_default()),
            Err(err) => {
                warn!(error = %err, "visit document unavailable");
                view(&[])
            }
        }
    }

    /// Only a document that fails to parse degrades to an empty collection;
    /// a missing one already loads as empty. Every other failure is returned
    /// and leaves the store unloaded.
    fn loaded(&self) -> Result<MutexGuard<'_, Option<Vec<VisitRecord>>>, StorageError> {
        let mut guard = self.records.lock().unwrap_or_else(PoisonError::into_inner);
        if guard.is_none() {
            let records = match self.storage.load() {
                Ok(records) => records,
                Err(StorageError::Serialization(err)) => {
                    warn!(error = %err, "visit document is corrupt, starting with an empty store");
                    Vec::new()
                }
                Err(err) => return Err(err),
            };
            *guard = Some(records);
        }
        Ok(guard)
    }
}

/// Stable sort, highest score first. Equal scores keep their relative order.
pub fn sort_by_score_descending(mut records: Vec<VisitRecord>) -> Vec<VisitRecord> {
    records.sort_by(|a, b| b.score().cmp(&a.score()));
    records
}

pub(crate) fn distinct_villages(records: &[VisitRecord]) -> Vec<String> {
    let mut seen = BTreeSet::new();
    records
        .iter()
        .filter(|record| seen.insert(record.village.as_str()))
        .map(|record| record.village.clone())
        .collect()
}

/// Dashboard selection. Both sets must be populated for anything to match;
/// use [`VisitFilter::select_all`] for the unfiltered view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisitFilter {
    pub levels: BTreeSet<RiskLevel>,
    pub villages: BTreeSet<String>,
}

impl VisitFilter {
    /// Every level and every village present in `records`.
    pub fn select_all(records: &[VisitRecord]) -> Self {
        Self {
            levels: RiskLevel::ALL.into_iter().collect(),
            villages: distinct_villages(records).into_iter().collect(),
        }
    }

    pub fn matches(&self, record: &VisitRecord) -> bool {
        self.levels.contains(&record.level()) && self.villages.contains(&record.village)
    }

    pub fn apply(&self, records: Vec<VisitRecord>) -> Vec<VisitRecord> {
        records
            .into_iter()
            .filter(|record| self.matches(record))
            .collect()
    }
}

/// Headline counts for the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct VisitSummary {
    pub total: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl VisitSummary {
    pub fn from_records(records: &[VisitRecord]) -> Self {
        records
            .iter()
            .fold(Self::default(), |mut summary, record| {
                summary.total += 1;
                match record.level() {
                    RiskLevel::High => summary.high += 1,
                    RiskLevel::Medium => summary.medium += 1,
                    RiskLevel::Low => summary.low += 1,
                }
                summary
            })
    }

    pub fn count_for(&self, level: RiskLevel) -> usize {
        match level {
            RiskLevel::High => self.high,
            RiskLevel::Medium => self.medium,
            RiskLevel::Low => self.low,
        }
    }
}
