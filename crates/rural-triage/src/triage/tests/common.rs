use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use crate::triage::assessment::{
    AssessmentResult, Condition, Symptom, VitalSigns, VitalsReading,
};
use crate::triage::domain::{Gender, NewVisit, VisitRecord, VisitSubmission};
use crate::triage::repository::{InMemoryStorage, StorageError, VisitStorage};
use crate::triage::service::TriageService;
use crate::triage::store::VisitStore;

pub(super) fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 12, 9, 30, 0)
        .single()
        .expect("valid timestamp")
}

pub(super) fn visit_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 1, 12).expect("valid date")
}

pub(super) fn submission() -> VisitSubmission {
    VisitSubmission {
        patient_name: "Sunita Devi".to_string(),
        age: 67,
        gender: Gender::Female,
        village: "Rampur".to_string(),
        health_worker: Some("Asha Patil".to_string()),
        visit_date: Some(visit_date()),
        symptoms: vec![Symptom::Breathlessness, Symptom::Cough],
        other_symptoms: None,
        conditions: vec![Condition::Hypertension],
        vitals: VitalsReading {
            bp_systolic: Some(150),
            spo2: Some(92),
            ..VitalsReading::default()
        },
    }
}

pub(super) fn new_visit(village: &str, score: u8) -> NewVisit {
    NewVisit {
        patient_name: format!("Patient scoring {score}"),
        age: 40,
        gender: Gender::Male,
        village: village.to_string(),
        health_worker: "Ravi Kumar".to_string(),
        visit_date: visit_date(),
        symptoms: vec![Symptom::Fever],
        conditions: vec![Condition::None],
        vitals: VitalSigns::BASELINE,
        assessment: AssessmentResult::from_score(score),
        timestamp: fixed_now(),
    }
}

pub(super) fn memory_store() -> (Arc<VisitStore<InMemoryStorage>>, Arc<InMemoryStorage>) {
    let storage = Arc::new(InMemoryStorage::default());
    let store = Arc::new(VisitStore::new(storage.clone()));
    (store, storage)
}

pub(super) fn seeded_store(
    visits: &[(&str, u8)],
) -> (Arc<VisitStore<InMemoryStorage>>, Vec<VisitRecord>) {
    let (store, _) = memory_store();
    let records = visits
        .iter()
        .map(|(village, score)| {
            store
                .append(new_visit(village, *score))
                .expect("append succeeds")
        })
        .collect();
    (store, records)
}

pub(super) fn build_service() -> (
    TriageService<InMemoryStorage>,
    Arc<VisitStore<InMemoryStorage>>,
    Arc<InMemoryStorage>,
) {
    let (store, storage) = memory_store();
    let service = TriageService::new(store.clone());
    (service, store, storage)
}

/// Backend whose reads and writes can be switched off to simulate an I/O
/// fault or a full disk.
#[derive(Default)]
pub(super) struct FlakyStorage {
    inner: InMemoryStorage,
    failing: AtomicBool,
    unreadable: AtomicBool,
}

impl FlakyStorage {
    pub(super) fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub(super) fn set_unreadable(&self, unreadable: bool) {
        self.unreadable.store(unreadable, Ordering::SeqCst);
    }

    pub(super) fn document(&self) -> Option<String> {
        self.inner.document()
    }
}

impl VisitStorage for FlakyStorage {
    fn load(&self) -> Result<Vec<VisitRecord>, StorageError> {
        if self.unreadable.load(Ordering::SeqCst) {
            return Err(StorageError::Unavailable("EIO".to_string()));
        }
        self.inner.load()
    }

    fn save(&self, records: &[VisitRecord]) -> Result<(), StorageError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(StorageError::Unavailable("disk full".to_string()));
        }
        self.inner.save(records)
    }
}
