use std::io::Write;

use serde::Serialize;

use super::domain::VisitRecord;

/// Write visits as CSV with a header row, one line per visit in the given
/// order. The header is written even when there are no visits. Symptom and
/// condition lists are joined with `"; "`.
pub fn write_visits_csv<W: Write>(records: &[VisitRecord], writer: W) -> Result<(), csv::Error> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    csv_writer.write_record(HEADERS)?;
    for record in records {
        csv_writer.serialize(VisitRow::from(record))?;
    }

    csv_writer.flush()?;
    Ok(())
}

const HEADERS: [&str; 12] = [
    "Visit ID",
    "Patient",
    "Age",
    "Gender",
    "Village",
    "Health Worker",
    "Visit Date",
    "Risk Score",
    "Risk Level",
    "Recommendation",
    "Symptoms",
    "Conditions",
];

/// One CSV line, fields in [`HEADERS`] order.
#[derive(Debug, Serialize)]
struct VisitRow<'a> {
    id: u64,
    patient_name: &'a str,
    age: u8,
    gender: &'static str,
    village: &'a str,
    health_worker: &'a str,
    visit_date: String,
    risk_score: u8,
    risk_level: &'static str,
    recommendation: &'a str,
    symptoms: String,
    conditions: String,
}

impl<'a> From<&'a VisitRecord> for VisitRow<'a> {
    fn from(record: &'a VisitRecord) -> Self {
        Self {
            id: record.id.0,
            patient_name: &record.patient_name,
            age: record.age,
            gender: record.gender.label(),
            village: &record.village,
            health_worker: &record.health_worker,
            visit_date: record.visit_date.format("%Y-%m-%d").to_string(),
            risk_score: record.score(),
            risk_level: record.level().label(),
            recommendation: &record.assessment.recommendation,
            symptoms: join_tags(record.symptoms.iter().map(|symptom| symptom.as_str())),
            conditions: join_tags(record.conditions.iter().map(|condition| condition.as_str())),
        }
    }
}

fn join_tags<'a>(tags: impl Iterator<Item = &'a str>) -> String {
    tags.collect::<Vec<_>>().join("; ")
}
