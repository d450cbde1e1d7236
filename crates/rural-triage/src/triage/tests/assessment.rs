use crate::triage::assessment::{
    assess, level_of, recommendation_of, score_breakdown, AssessmentResult, Condition,
    PatientInput, RiskLevel, ScoreFactor, Symptom, VitalSigns, VitalsReading,
    FOLLOW_UP_WITHIN_48_HOURS, HOME_CARE, URGENT_REFERRAL,
};

fn score_with_vitals(vitals: VitalsReading) -> u8 {
    assess(&PatientInput::new(30).with_vitals(vitals)).score
}

#[test]
fn infant_with_no_findings_scores_age_points_only() {
    let result = assess(&PatientInput::new(3));

    assert_eq!(result.score, 15);
    assert_eq!(result.level, RiskLevel::Low);
    assert_eq!(result.recommendation, HOME_CARE);
}

#[test]
fn elderly_cardiac_patient_is_capped_and_referred() {
    let input = PatientInput::new(70)
        .with_symptoms(["chest_pain", "breathlessness"])
        .with_conditions(["heart_disease"])
        .with_vitals(VitalsReading {
            spo2: Some(90),
            ..VitalsReading::default()
        });

    let breakdown = score_breakdown(&input);
    let raw: u32 = breakdown.iter().map(|c| u32::from(c.points)).sum();
    assert_eq!(raw, 105);

    let result = assess(&input);
    assert_eq!(result.score, 100);
    assert_eq!(result.level, RiskLevel::High);
    assert_eq!(result.recommendation, URGENT_REFERRAL);
}

#[test]
fn healthy_adult_with_no_conditions_scores_zero() {
    let input = PatientInput::new(30).with_conditions([Condition::None]);

    let result = assess(&input);

    assert_eq!(result.score, 0);
    assert_eq!(result.level, RiskLevel::Low);
    assert!(score_breakdown(&input).is_empty());
}

#[test]
fn age_bands_are_exclusive() {
    assert_eq!(assess(&PatientInput::new(0)).score, 15);
    assert_eq!(assess(&PatientInput::new(4)).score, 15);
    assert_eq!(assess(&PatientInput::new(5)).score, 0);
    assert_eq!(assess(&PatientInput::new(60)).score, 0);
    assert_eq!(assess(&PatientInput::new(61)).score, 20);
    assert_eq!(assess(&PatientInput::new(120)).score, 20);
}

#[test]
fn critical_symptoms_compound() {
    let input = PatientInput::new(30).with_symptoms([
        Symptom::ChestPain,
        Symptom::Confusion,
        Symptom::SevereBleeding,
    ]);

    let result = assess(&input);

    assert_eq!(result.score, 75);
    assert_eq!(result.level, RiskLevel::High);
}

#[test]
fn symptom_weights_follow_severity_bands() {
    let moderate = PatientInput::new(30).with_symptoms(["high_fever", "severe_pain"]);
    assert_eq!(assess(&moderate).score, 20);

    let minor = PatientInput::new(30).with_symptoms(["fever", "headache", "dizziness"]);
    assert_eq!(assess(&minor).score, 15);
}

#[test]
fn unknown_tags_degrade_to_minimum_weight() {
    let input = PatientInput::new(30)
        .with_symptoms(["rash on left forearm"])
        .with_conditions(["arthritis"]);

    let result = assess(&input);

    assert_eq!(result.score, 5);
    let breakdown = score_breakdown(&input);
    assert_eq!(breakdown.len(), 1);
    assert_eq!(breakdown[0].factor, ScoreFactor::Symptom);
    assert!(breakdown[0].notes.contains("rash on left forearm"));
}

#[test]
fn repeated_tags_are_scored_once() {
    let input = PatientInput::new(30)
        .with_symptoms(["chest_pain", "chest_pain"])
        .with_conditions(["copd", "copd"]);

    assert_eq!(assess(&input).score, 40);
}

#[test]
fn condition_weights_follow_risk_bands() {
    let high = PatientInput::new(30).with_conditions([Condition::HeartDisease, Condition::Copd]);
    assert_eq!(assess(&high).score, 30);

    let moderate = PatientInput::new(30).with_conditions([
        Condition::Diabetes,
        Condition::Hypertension,
        Condition::Pregnancy,
    ]);
    assert_eq!(assess(&moderate).score, 30);

    let negligible = PatientInput::new(30).with_conditions([
        Condition::Asthma,
        Condition::Tb,
        Condition::KidneyDisease,
        Condition::None,
    ]);
    assert_eq!(assess(&negligible).score, 0);
}

#[test]
fn baseline_vitals_trip_no_threshold() {
    assert_eq!(score_with_vitals(VitalsReading::default()), 0);
    assert_eq!(
        score_with_vitals(VitalsReading::from(VitalSigns::BASELINE)),
        0
    );
}

#[test]
fn vital_thresholds_are_strict() {
    let systolic = |value| VitalsReading {
        bp_systolic: Some(value),
        ..VitalsReading::default()
    };
    assert_eq!(score_with_vitals(systolic(141)), 15);
    assert_eq!(score_with_vitals(systolic(140)), 0);
    assert_eq!(score_with_vitals(systolic(90)), 0);
    assert_eq!(score_with_vitals(systolic(89)), 15);

    let diastolic = |value| VitalsReading {
        bp_diastolic: Some(value),
        ..VitalsReading::default()
    };
    assert_eq!(score_with_vitals(diastolic(91)), 10);
    assert_eq!(score_with_vitals(diastolic(90)), 0);
    assert_eq!(score_with_vitals(diastolic(60)), 0);
    assert_eq!(score_with_vitals(diastolic(59)), 10);

    let heart_rate = |value| VitalsReading {
        heart_rate: Some(value),
        ..VitalsReading::default()
    };
    assert_eq!(score_with_vitals(heart_rate(101)), 15);
    assert_eq!(score_with_vitals(heart_rate(100)), 0);
    assert_eq!(score_with_vitals(heart_rate(50)), 0);
    assert_eq!(score_with_vitals(heart_rate(49)), 15);

    let temperature = |value| VitalsReading {
        temperature: Some(value),
        ..VitalsReading::default()
    };
    assert_eq!(score_with_vitals(temperature(101.1)), 10);
    assert_eq!(score_with_vitals(temperature(101.0)), 0);

    let spo2 = |value| VitalsReading {
        spo2: Some(value),
        ..VitalsReading::default()
    };
    assert_eq!(score_with_vitals(spo2(93)), 20);
    assert_eq!(score_with_vitals(spo2(94)), 0);
}

#[test]
fn vital_checks_are_additive() {
    let vitals = VitalsReading {
        bp_systolic: Some(180),
        bp_diastolic: Some(110),
        heart_rate: Some(120),
        temperature: Some(103.0),
        spo2: Some(85),
    };

    assert_eq!(score_with_vitals(vitals), 70);
}

#[test]
fn mixed_findings_land_in_medium_tier() {
    let input = PatientInput::new(30)
        .with_symptoms(["persistent_cough", "fever"])
        .with_conditions(["diabetes"])
        .with_vitals(VitalsReading {
            temperature: Some(102.0),
            ..VitalsReading::default()
        });

    let result = assess(&input);

    assert_eq!(result.score, 35);
    assert_eq!(result.level, RiskLevel::Medium);
    assert_eq!(result.recommendation, FOLLOW_UP_WITHIN_48_HOURS);
}

#[test]
fn score_never_exceeds_cap_for_any_age() {
    for age in 0..=120u8 {
        let input = PatientInput::new(age)
            .with_symptoms(Symptom::VOCABULARY)
            .with_conditions(Condition::VOCABULARY)
            .with_vitals(VitalsReading {
                bp_systolic: Some(220),
                bp_diastolic: Some(140),
                heart_rate: Some(200),
                temperature: Some(106.0),
                spo2: Some(70),
            });

        let result = assess(&input);
        assert_eq!(result.score, 100, "age {age}");
        assert_eq!(result.level, RiskLevel::High);
    }
}

#[test]
fn level_boundaries_are_inclusive_lower() {
    assert_eq!(level_of(0), RiskLevel::Low);
    assert_eq!(level_of(29), RiskLevel::Low);
    assert_eq!(level_of(30), RiskLevel::Medium);
    assert_eq!(level_of(59), RiskLevel::Medium);
    assert_eq!(level_of(60), RiskLevel::High);
    assert_eq!(level_of(100), RiskLevel::High);
}

#[test]
fn level_is_monotonic_in_score() {
    let levels: Vec<RiskLevel> = (0..=100u8).map(level_of).collect();
    assert!(levels.windows(2).all(|pair| pair[0] <= pair[1]));
}

#[test]
fn recommendation_is_determined_by_level() {
    assert_eq!(recommendation_of(RiskLevel::High), URGENT_REFERRAL);
    assert_eq!(recommendation_of(RiskLevel::Medium), FOLLOW_UP_WITHIN_48_HOURS);
    assert_eq!(recommendation_of(RiskLevel::Low), HOME_CARE);

    for score in 0..=100u8 {
        let first = AssessmentResult::from_score(score);
        let second = AssessmentResult::from_score(score);
        assert_eq!(first, second);
        assert_eq!(first.recommendation, recommendation_of(first.level));
    }
}

#[test]
fn tags_serialize_as_plain_strings() {
    let symptoms: Vec<Symptom> =
        serde_json::from_str(r#"["chest_pain", "swollen ankles"]"#).expect("symptoms parse");
    assert_eq!(
        symptoms,
        vec![
            Symptom::ChestPain,
            Symptom::Other("swollen ankles".to_string())
        ]
    );
    assert_eq!(
        serde_json::to_string(&symptoms).expect("symptoms serialize"),
        r#"["chest_pain","swollen ankles"]"#
    );

    let level: RiskLevel = serde_json::from_str(r#""MEDIUM""#).expect("level parses");
    assert_eq!(level, RiskLevel::Medium);
    assert_eq!("high".parse::<RiskLevel>().expect("parses"), RiskLevel::High);
    assert!("severe".parse::<RiskLevel>().is_err());
}
