use candor_core::{Attribute, CandidateRecord, DomainVocabulary};
use candor_sensitivity::compute_score_report;
use proptest::prelude::*;
use test_fixtures::{CountingClassifier, TableClassifier};

/// One generated attribute: per-value probabilities in hundredths, plus the
/// candidate's choice (`None` = attribute missing from the record).
#[derive(Debug, Clone)]
struct GenAttribute {
    probabilities: Vec<u32>,
    choice: Option<usize>,
}

fn attribute_strategy() -> impl Strategy<Value = GenAttribute> {
    prop::collection::vec(0u32..=100, 1..6).prop_flat_map(|probabilities| {
        let n = probabilities.len();
        (Just(probabilities), prop::option::of(0..n))
            .prop_map(|(probabilities, choice)| GenAttribute { probabilities, choice })
    })
}

struct Case {
    vocabulary: DomainVocabulary,
    record: CandidateRecord,
    classifier: TableClassifier,
    attrs: Vec<GenAttribute>,
}

fn build(attrs: Vec<GenAttribute>) -> Case {
    let mut vocabulary = Vec::new();
    let mut record = CandidateRecord::new();
    let mut classifier = TableClassifier::new();

    for (i, attr) in attrs.iter().enumerate() {
        let id = format!("attr_{i}");
        let values: Vec<String> = (0..attr.probabilities.len())
            .map(|j| format!("v{j}"))
            .collect();
        if let Some(choice) = attr.choice {
            record.set(id.clone(), values[choice].clone());
            // Only present attributes feed the classifier, so missing ones
            // never cause a schema mismatch.
            for (value, p) in values.iter().zip(&attr.probabilities) {
                classifier = classifier.with(&id, value, f64::from(*p) / 100.0);
            }
        }
        vocabulary.push(Attribute::new(id, values));
    }

    Case {
        vocabulary: DomainVocabulary::new(vocabulary),
        record,
        classifier,
        attrs,
    }
}

proptest! {
    #[test]
    fn scores_stay_within_bounds(attrs in prop::collection::vec(attribute_strategy(), 1..5)) {
        let case = build(attrs);
        let report = compute_score_report(&case.classifier, &case.vocabulary, &case.record).unwrap();
        for entry in &report {
            prop_assert!((0.0..=10.0).contains(&entry.score), "{} = {}", entry.label, entry.score);
            prop_assert!(!entry.score.is_nan());
        }
    }

    #[test]
    fn call_count_is_sum_of_present_value_sets(attrs in prop::collection::vec(attribute_strategy(), 1..5)) {
        let case = build(attrs);
        let expected: usize = case
            .attrs
            .iter()
            .filter(|a| a.choice.is_some())
            .map(|a| a.probabilities.len())
            .sum();
        let counting = CountingClassifier::new(case.classifier.clone());
        compute_score_report(&counting, &case.vocabulary, &case.record).unwrap();
        prop_assert_eq!(counting.calls(), expected);
    }

    #[test]
    fn report_contains_exactly_present_attributes(attrs in prop::collection::vec(attribute_strategy(), 1..5)) {
        let case = build(attrs);
        let report = compute_score_report(&case.classifier, &case.vocabulary, &case.record).unwrap();
        let expected: Vec<String> = case
            .attrs
            .iter()
            .enumerate()
            .filter(|(_, a)| a.choice.is_some())
            .map(|(i, _)| format!("Attr {i}"))
            .collect();
        let labels: Vec<String> = report.labels().into_iter().map(String::from).collect();
        prop_assert_eq!(labels, expected);
    }

    #[test]
    fn scores_match_closed_form(attrs in prop::collection::vec(attribute_strategy(), 1..5)) {
        let case = build(attrs);
        let report = compute_score_report(&case.classifier, &case.vocabulary, &case.record).unwrap();

        // Product of every present attribute's own factor.
        let factor = |a: &GenAttribute| f64::from(a.probabilities[a.choice.unwrap()]) / 100.0;
        for (i, attr) in case.attrs.iter().enumerate() {
            let Some(choice) = attr.choice else { continue };
            let others: f64 = case
                .attrs
                .iter()
                .enumerate()
                .filter(|(j, a)| *j != i && a.choice.is_some())
                .map(|(_, a)| factor(a))
                .product();
            let own = f64::from(attr.probabilities[choice]);
            let best = f64::from(*attr.probabilities.iter().max().unwrap());
            let expected = if others > 0.0 && best > 0.0 { 10.0 * own / best } else { 0.0 };

            let actual = report.get_by_attribute(&format!("attr_{i}")).unwrap();
            prop_assert!((actual - expected).abs() < 1e-9, "attr_{} expected {} got {}", i, expected, actual);
        }
    }

    #[test]
    fn argmax_choice_scores_ten(probabilities in prop::collection::vec(1u32..=100, 1..6)) {
        let best = probabilities
            .iter()
            .enumerate()
            .max_by_key(|(_, p)| **p)
            .map(|(i, _)| i)
            .unwrap();
        let case = build(vec![GenAttribute { probabilities, choice: Some(best) }]);
        let report = compute_score_report(&case.classifier, &case.vocabulary, &case.record).unwrap();
        prop_assert_eq!(report.get("Attr 0"), Some(10.0));
    }

    #[test]
    fn all_zero_sweep_scores_zero(n in 1usize..6, choice in 0usize..6) {
        let case = build(vec![GenAttribute { probabilities: vec![0; n], choice: Some(choice % n) }]);
        let report = compute_score_report(&case.classifier, &case.vocabulary, &case.record).unwrap();
        prop_assert_eq!(report.get("Attr 0"), Some(0.0));
    }

    #[test]
    fn repeated_runs_are_bit_identical(attrs in prop::collection::vec(attribute_strategy(), 1..5)) {
        let case = build(attrs);
        let first = compute_score_report(&case.classifier, &case.vocabulary, &case.record).unwrap();
        let second = compute_score_report(&case.classifier, &case.vocabulary, &case.record).unwrap();
        let bits = |r: &candor_core::ScoreReport| r.scores().iter().map(|s| s.to_bits()).collect::<Vec<_>>();
        prop_assert_eq!(bits(&first), bits(&second));
    }
}
