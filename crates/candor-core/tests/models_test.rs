use candor_core::models::*;

#[test]
fn perturbed_copy_leaves_original_untouched() {
    let record = CandidateRecord::new()
        .with("english_level", "Basic")
        .with("career_objective", "Data engineering");

    let copy = record.perturbed("english_level", "Fluent");

    assert_eq!(record.get("english_level"), Some("Basic"));
    assert_eq!(copy.get("english_level"), Some("Fluent"));
    assert_eq!(copy.get("career_objective"), Some("Data engineering"));
    assert_eq!(copy.len(), record.len());
}

#[test]
fn record_serializes_as_flat_object() {
    let record: CandidateRecord = [("sex", "Female"), ("disability", "No")]
        .into_iter()
        .collect();
    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json, serde_json::json!({"disability": "No", "sex": "Female"}));

    let back: CandidateRecord = serde_json::from_value(json).unwrap();
    assert_eq!(back, record);
}

#[test]
fn vocabulary_lookup_and_membership() {
    let vocabulary = DomainVocabulary::new(vec![
        Attribute::new("sex", ["Male", "Female"]),
        Attribute::new("english_level", ["None", "Basic", "Fluent"]),
    ]);

    let english = vocabulary.get("english_level").unwrap();
    assert!(english.contains("Basic"));
    assert!(!english.contains("basic"));
    assert_eq!(english.label(), "English Level");
    assert!(vocabulary.get("spanish_level").is_none());
    assert_eq!(vocabulary.total_values(), 5);
}

#[test]
fn report_lookup_by_label_and_attribute() {
    let mut report = ScoreReport::new();
    report.push(AttributeScore {
        attribute: "english_level".into(),
        label: "English Level".into(),
        score: 5.0,
    });
    report.push(AttributeScore {
        attribute: "sex".into(),
        label: "Sex".into(),
        score: 10.0,
    });

    assert_eq!(report.get("English Level"), Some(5.0));
    assert_eq!(report.get_by_attribute("sex"), Some(10.0));
    assert_eq!(report.labels(), vec!["English Level", "Sex"]);
    assert_eq!(report.scores(), vec![5.0, 10.0]);
    assert!(report.get("Disability").is_none());
}

#[test]
fn probability_rejects_invalid_json() {
    let ok: OutcomeProbability = serde_json::from_str("0.5").unwrap();
    assert_eq!(ok.value(), 0.5);
    assert!(serde_json::from_str::<OutcomeProbability>("1.5").is_err());
}

#[test]
fn stored_record_gets_unique_ids() {
    let a = StoredRecord::new(CandidateRecord::new());
    let b = StoredRecord::new(CandidateRecord::new());
    assert_ne!(a.id, b.id);
}
