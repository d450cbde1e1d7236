use super::common::*;
use crate::triage::assessment::{Condition, Symptom, VitalsReading};
use crate::triage::intake::{IntakeError, IntakeGuard, IntakePolicy};

#[test]
fn guard_requires_patient_name() {
    let mut submission = submission();
    submission.patient_name = "   ".to_string();

    match IntakeGuard::default().validate(submission) {
        Err(IntakeError::MissingField { field }) => assert_eq!(field, "patient_name"),
        other => panic!("expected missing patient name, got {other:?}"),
    }
}

#[test]
fn guard_requires_village() {
    let mut submission = submission();
    submission.village = String::new();

    match IntakeGuard::default().validate(submission) {
        Err(IntakeError::MissingField { field }) => assert_eq!(field, "village"),
        other => panic!("expected missing village, got {other:?}"),
    }
}

#[test]
fn guard_rejects_age_above_range() {
    let mut submission = submission();
    submission.age = 121;

    match IntakeGuard::default().validate(submission) {
        Err(IntakeError::AgeOutOfRange { found, max, .. }) => {
            assert_eq!(found, 121);
            assert_eq!(max, 120);
        }
        other => panic!("expected age out of range, got {other:?}"),
    }
}

#[test]
fn guard_rejects_implausible_vitals() {
    let mut submission = submission();
    submission.vitals = VitalsReading {
        spo2: Some(55),
        ..VitalsReading::default()
    };

    match IntakeGuard::default().validate(submission) {
        Err(IntakeError::VitalOutOfRange { vital, found, min, .. }) => {
            assert_eq!(vital, "spo2");
            assert_eq!(found, 55.0);
            assert_eq!(min, 70.0);
        }
        other => panic!("expected vital out of range, got {other:?}"),
    }
}

#[test]
fn guard_rejects_non_finite_temperature() {
    let mut submission = submission();
    submission.vitals.temperature = Some(f64::NAN);

    assert!(matches!(
        IntakeGuard::default().validate(submission),
        Err(IntakeError::VitalOutOfRange {
            vital: "temperature",
            ..
        })
    ));
}

#[test]
fn guard_honours_custom_policy() {
    let policy = IntakePolicy {
        heart_rate: 40..=180,
        ..IntakePolicy::default()
    };
    let guard = IntakeGuard::with_policy(policy);
    let mut submission = submission();
    submission.vitals.heart_rate = Some(190);

    assert!(matches!(
        guard.validate(submission),
        Err(IntakeError::VitalOutOfRange {
            vital: "heart_rate",
            ..
        })
    ));
}

#[test]
fn guard_appends_free_text_symptoms_as_one_tag() {
    let mut submission = submission();
    submission.other_symptoms = Some("  swollen ankles, night sweats ".to_string());

    let visit = IntakeGuard::default()
        .validate(submission)
        .expect("submission is valid");

    assert_eq!(
        visit.symptoms,
        vec![
            Symptom::Breathlessness,
            Symptom::Cough,
            Symptom::Other("swollen ankles, night sweats".to_string()),
        ]
    );
    assert!(visit
        .input
        .symptoms
        .contains(&Symptom::Other("swollen ankles, night sweats".to_string())));
}

#[test]
fn guard_ignores_blank_free_text() {
    let mut submission = submission();
    submission.other_symptoms = Some("  ".to_string());

    let visit = IntakeGuard::default()
        .validate(submission)
        .expect("submission is valid");

    assert_eq!(visit.symptoms.len(), 2);
}

#[test]
fn guard_trims_identity_fields_and_defaults_worker() {
    let mut submission = submission();
    submission.patient_name = " Sunita Devi ".to_string();
    submission.village = "Rampur\n".to_string();
    submission.health_worker = None;

    let visit = IntakeGuard::default()
        .validate(submission)
        .expect("submission is valid");

    assert_eq!(visit.context.patient_name, "Sunita Devi");
    assert_eq!(visit.context.village, "Rampur");
    assert_eq!(visit.context.health_worker, "");
    assert_eq!(visit.input.age, 67);
}

#[test]
fn guard_maps_free_text_naming_a_known_tag_onto_that_tag() {
    let mut submission = submission();
    submission.symptoms = vec![Symptom::Other("cough".to_string())];
    submission.other_symptoms = Some(" chest_pain ".to_string());
    submission.conditions = vec![Condition::Other("copd".to_string())];

    let visit = IntakeGuard::default()
        .validate(submission)
        .expect("submission is valid");

    assert_eq!(visit.symptoms, vec![Symptom::Cough, Symptom::ChestPain]);
    assert_eq!(visit.conditions, vec![Condition::Copd]);
    assert!(visit.input.symptoms.contains(&Symptom::ChestPain));
}
