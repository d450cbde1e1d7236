use std::sync::Arc;

use chrono::{DateTime, Local, Utc};
use serde::Serialize;

use super::assessment::{assess, score_breakdown, AssessmentResult, PatientInput, ScoreComponent};
use super::domain::{NewVisit, VisitRecord, VisitSubmission};
use super::intake::{IntakeError, IntakeGuard};
use super::repository::{StorageError, VisitStorage};
use super::store::{
    distinct_villages, sort_by_score_descending, VisitFilter, VisitStore, VisitSummary,
};

/// Service composing the intake guard, scoring engine, and visit store.
pub struct TriageService<S> {
    guard: IntakeGuard,
    store: Arc<VisitStore<S>>,
}

/// Assessment together with the components that produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExplainedAssessment {
    #[serde(flatten)]
    pub result: AssessmentResult,
    pub components: Vec<ScoreComponent>,
}

/// Everything the dashboard renders in one read.
#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub summary: VisitSummary,
    pub villages: Vec<String>,
    pub visits: Vec<VisitRecord>,
}

impl<S> TriageService<S>
where
    S: VisitStorage + 'static,
{
    pub fn new(store: Arc<VisitStore<S>>) -> Self {
        Self::with_guard(IntakeGuard::default(), store)
    }

    pub fn with_guard(guard: IntakeGuard, store: Arc<VisitStore<S>>) -> Self {
        Self { guard, store }
    }

    pub fn store(&self) -> &Arc<VisitStore<S>> {
        &self.store
    }

    /// Score a patient without recording anything.
    pub fn assess(&self, input: &PatientInput) -> ExplainedAssessment {
        ExplainedAssessment {
            result: assess(input),
            components: score_breakdown(input),
        }
    }

    /// Validate, score, and persist a visit.
    pub fn record(&self, submission: VisitSubmission) -> Result<VisitRecord, TriageServiceError> {
        self.record_at(submission, Utc::now())
    }

    /// As [`TriageService::record`], stamping the visit with `now`. A missing
    /// visit date falls back to the local date of `now`.
    pub fn record_at(
        &self,
        submission: VisitSubmission,
        now: DateTime<Utc>,
    ) -> Result<VisitRecord, TriageServiceError> {
        let visit = self.guard.validate(submission)?;
        let assessment = assess(&visit.input);

        let context = visit.context;
        let visit_date = context
            .visit_date
            .unwrap_or_else(|| now.with_timezone(&Local).date_naive());

        let new_visit = NewVisit {
            patient_name: context.patient_name,
            age: visit.input.age,
            gender: context.gender,
            village: context.village,
            health_worker: context.health_worker,
            visit_date,
            symptoms: visit.symptoms,
            conditions: visit.conditions,
            vitals: visit.input.vitals.resolve(),
            assessment,
            timestamp: now,
        };

        Ok(self.store.append(new_visit)?)
    }

    /// Summary plus the filtered visits, highest score first. `None` selects
    /// every level and village.
    pub fn dashboard(&self, filter: Option<VisitFilter>) -> Dashboard {
        let records = self.store.all();
        let filter = filter.unwrap_or_else(|| VisitFilter::select_all(&records));
        Dashboard {
            summary: VisitSummary::from_records(&records),
            villages: distinct_villages(&records),
            visits: sort_by_score_descending(filter.apply(records)),
        }
    }
}

/// Error raised by the triage service.
#[derive(Debug, thiserror::Error)]
pub enum TriageServiceError {
    #[error(transparent)]
    Intake(#[from] IntakeError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}
