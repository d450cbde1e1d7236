//! Patient risk triage: scoring, intake validation, and the visit record store.

pub mod assessment;
pub mod domain;
pub mod export;
pub mod intake;
pub mod repository;
pub mod service;
pub mod store;

#[cfg(test)]
mod tests;

pub use assessment::{
    assess, level_of, recommendation_of, score_breakdown, AssessmentResult, Condition,
    PatientInput, RiskLevel, ScoreComponent, ScoreFactor, Symptom, VitalSigns, VitalsReading,
};
pub use domain::{Gender, NewVisit, VisitId, VisitRecord, VisitSubmission};
pub use export::write_visits_csv;
pub use intake::{IntakeError, IntakeGuard, IntakePolicy, ValidatedVisit, VisitContext};
pub use repository::{InMemoryStorage, JsonFileStorage, StorageError, VisitStorage};
pub use service::{Dashboard, ExplainedAssessment, TriageService, TriageServiceError};
pub use store::{sort_by_score_descending, VisitFilter, VisitStore, VisitSummary};
