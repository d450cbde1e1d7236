use rural_triage::triage::{Dashboard, ExplainedAssessment, VisitRecord};

const SYMPTOM_PREVIEW: usize = 5;

pub(crate) fn print_assessment(explained: &ExplainedAssessment, explain: bool) {
    let result = &explained.result;
    println!("Risk assessment");
    println!("  Risk score: {}/100", result.score);
    println!("  Risk level: {}", result.level);
    println!("  Recommendation: {}", result.recommendation);

    if explain {
        if explained.components.is_empty() {
            println!("  Score components: none");
        } else {
            println!("  Score components:");
            for component in &explained.components {
                println!(
                    "    - {:?}: +{} ({})",
                    component.factor, component.points, component.notes
                );
            }
        }
    }
}

pub(crate) fn print_recorded_visit(record: &VisitRecord) {
    println!("Visit recorded");
    println!("  Visit ID: {}", record.id);
    println!(
        "  Patient: {} ({}, {})",
        record.patient_name, record.age, record.gender
    );
    println!("  Risk score: {}/100", record.score());
    println!("  Risk level: {}", record.level());
    println!("  Recommendation: {}", record.assessment.recommendation);
}

pub(crate) fn print_dashboard(dashboard: &Dashboard) {
    let summary = &dashboard.summary;
    println!("Patient dashboard");
    println!(
        "  Total visits: {} | High: {} | Medium: {} | Low: {}",
        summary.total, summary.high, summary.medium, summary.low
    );

    if summary.total == 0 {
        println!("\nNo patient visits recorded yet.");
        return;
    }

    println!("  Villages: {}", dashboard.villages.join(", "));

    if dashboard.visits.is_empty() {
        println!("\nNo visits match the selected filters.");
        return;
    }

    println!("\nVisits ({} shown, highest risk first)", dashboard.visits.len());
    for visit in &dashboard.visits {
        println!(
            "{} | Risk: {} ({}) | {} | {}",
            visit.patient_name,
            visit.level(),
            visit.score(),
            visit.village,
            visit.visit_date
        );
        println!(
            "  Age {} | {} | Health worker: {}",
            visit.age,
            visit.gender,
            if visit.health_worker.is_empty() {
                "-"
            } else {
                visit.health_worker.as_str()
            }
        );
        println!("  Symptoms: {}", symptom_preview(visit));
        println!("  Recommendation: {}", visit.assessment.recommendation);
    }
}

fn symptom_preview(visit: &VisitRecord) -> String {
    if visit.symptoms.is_empty() {
        return "none".to_string();
    }

    let shown: Vec<&str> = visit
        .symptoms
        .iter()
        .take(SYMPTOM_PREVIEW)
        .map(|symptom| symptom.as_str())
        .collect();
    let mut preview = shown.join(", ");
    if visit.symptoms.len() > SYMPTOM_PREVIEW {
        preview.push_str("...");
    }
    preview
}
