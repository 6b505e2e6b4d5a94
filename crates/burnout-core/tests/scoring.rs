use std::collections::BTreeMap;

use burnout_core::error::ScoreError;
use burnout_core::models::instrument::{
    Band, DomainDef, InstrumentDefinition, Item, ResponseScale,
};
use burnout_core::scoring::{compute_scores, score_item};

fn likert() -> ResponseScale {
    ResponseScale {
        labels: ["never", "seldom", "sometimes", "often", "always"]
            .map(String::from)
            .to_vec(),
        map: vec![0.0, 25.0, 50.0, 75.0, 100.0],
        ceiling: 100.0,
    }
}

fn item(id: u32, domain: &str, scale: &str, reverse: bool) -> Item {
    Item {
        id,
        text: format!("statement {id}"),
        domain: domain.to_string(),
        scale: scale.to_string(),
        reverse,
    }
}

fn domain(id: &str) -> DomainDef {
    DomainDef {
        id: id.to_string(),
        name: id.to_string(),
    }
}

fn band(min: f64, max: f64, label: &str) -> Band {
    Band {
        min,
        max,
        label: label.to_string(),
        color: "#000000".to_string(),
    }
}

/// 19 items shaped like the reference instrument: personal 6, work 7
/// with item 13 reverse-coded, patient 6, two scales sharing the 0-100
/// value range.
fn instrument() -> InstrumentDefinition {
    let mut items = Vec::new();
    for id in 1..=6 {
        items.push(item(id, "personal", "a", false));
    }
    for id in 7..=9 {
        items.push(item(id, "work", "b", false));
    }
    for id in 10..=12 {
        items.push(item(id, "work", "a", false));
    }
    items.push(item(13, "work", "a", true));
    for id in 14..=17 {
        items.push(item(id, "patient", "b", false));
    }
    for id in 18..=19 {
        items.push(item(id, "patient", "a", false));
    }

    let definition = InstrumentDefinition {
        id: "ref19".to_string(),
        title: "Reference".to_string(),
        domains: vec![domain("personal"), domain("work"), domain("patient")],
        response_scales: BTreeMap::from([
            ("a".to_string(), likert()),
            ("b".to_string(), likert()),
        ]),
        items,
        bands: vec![
            band(0.0, 49.9, "low"),
            band(50.0, 69.9, "elevated"),
            band(70.0, 100.0, "high"),
        ],
    };
    definition.validate().unwrap();
    definition
}

fn domain_score(
    report: &burnout_core::models::report::ScoreReport,
    id: &str,
) -> Option<f64> {
    report.domain(id).unwrap().score
}

#[test]
fn all_lowest_reverses_item_thirteen() {
    let definition = instrument();
    let report = compute_scores(&definition, &vec![Some(0); 19]).unwrap();

    assert_eq!(domain_score(&report, "personal"), Some(0.0));
    assert_eq!(domain_score(&report, "work"), Some(100.0 / 7.0));
    assert_eq!(domain_score(&report, "patient"), Some(0.0));
    assert_eq!(report.overall, Some(100.0 / 19.0));
}

#[test]
fn all_middle_scores_fifty_everywhere() {
    let definition = instrument();
    let report = compute_scores(&definition, &vec![Some(2); 19]).unwrap();

    // Reversal of the midpoint is still the midpoint.
    assert_eq!(domain_score(&report, "personal"), Some(50.0));
    assert_eq!(domain_score(&report, "work"), Some(50.0));
    assert_eq!(domain_score(&report, "patient"), Some(50.0));
    assert_eq!(report.overall, Some(50.0));
}

#[test]
fn all_highest_reverses_item_thirteen() {
    let definition = instrument();
    let report = compute_scores(&definition, &vec![Some(4); 19]).unwrap();

    assert_eq!(domain_score(&report, "personal"), Some(100.0));
    assert_eq!(domain_score(&report, "work"), Some(600.0 / 7.0));
    assert_eq!(domain_score(&report, "patient"), Some(100.0));
    assert_eq!(report.overall, Some(1800.0 / 19.0));
}

#[test]
fn mixed_vector_weights_overall_by_item() {
    let definition = instrument();
    let responses: Vec<Option<usize>> =
        [1, 1, 1, 1, 1, 1, 3, 3, 3, 3, 3, 3, 1, 2, 2, 2, 2, 2, 2]
            .iter()
            .map(|&i| Some(i))
            .collect();
    let report = compute_scores(&definition, &responses).unwrap();

    assert_eq!(domain_score(&report, "personal"), Some(25.0));
    // Item 13 answered "seldom" (raw 25) scores 75 after reversal.
    assert_eq!(domain_score(&report, "work"), Some(75.0));
    assert_eq!(domain_score(&report, "patient"), Some(50.0));
    // Overall is the mean over all 19 items, not of the three domain
    // means: domains weigh in proportionally to their item counts.
    assert_eq!(report.overall, Some(975.0 / 19.0));
}

#[test]
fn unanswered_domain_yields_insufficient_data() {
    let definition = instrument();
    let mut responses = vec![Some(2); 19];
    for slot in responses.iter_mut().take(6) {
        *slot = None;
    }
    let report = compute_scores(&definition, &responses).unwrap();

    assert_eq!(domain_score(&report, "personal"), None);
    assert_eq!(domain_score(&report, "work"), Some(50.0));
    assert_eq!(domain_score(&report, "patient"), Some(50.0));
    // The 13 answered items average to 50; unanswered items are excluded
    // from both numerator and denominator.
    assert_eq!(report.overall, Some(50.0));
    assert!(report.item_scores[..6].iter().all(Option::is_none));
}

#[test]
fn single_unanswered_item_excluded_from_overall() {
    let definition = instrument();
    let mut responses = vec![Some(0); 19];
    responses[0] = None;
    let report = compute_scores(&definition, &responses).unwrap();

    assert_eq!(report.item_scores[0], None);
    assert_eq!(domain_score(&report, "personal"), Some(0.0));
    assert_eq!(report.overall, Some(100.0 / 18.0));
}

#[test]
fn fully_unanswered_vector_has_no_scores() {
    let definition = instrument();
    let report = compute_scores(&definition, &vec![None; 19]).unwrap();

    assert!(report.item_scores.iter().all(Option::is_none));
    assert!(report.domain_scores.iter().all(|d| d.score.is_none()));
    assert_eq!(report.overall, None);
}

#[test]
fn out_of_range_option_index_fails_fast() {
    let definition = instrument();
    let mut responses = vec![Some(0); 19];
    responses[3] = Some(5);
    let err = compute_scores(&definition, &responses).unwrap_err();

    assert!(matches!(
        err,
        ScoreError::OptionIndexOutOfRange {
            item_id: 4,
            index: 5,
            options: 5,
            ..
        }
    ));
}

#[test]
fn response_length_mismatch_fails_fast() {
    let definition = instrument();
    let err = compute_scores(&definition, &vec![Some(0); 18]).unwrap_err();

    assert!(matches!(
        err,
        ScoreError::ResponseLength {
            expected: 19,
            actual: 18,
        }
    ));
}

#[test]
fn scoring_is_idempotent() {
    let definition = instrument();
    let responses: Vec<Option<usize>> = (0..19).map(|i| Some(i % 5)).collect();

    let first = compute_scores(&definition, &responses).unwrap();
    let second = compute_scores(&definition, &responses).unwrap();
    assert_eq!(first, second);
}

#[test]
fn answered_scores_stay_in_scale_range() {
    let definition = instrument();
    for option in 0..5 {
        let report = compute_scores(&definition, &vec![Some(option); 19]).unwrap();
        for score in report.item_scores.iter().flatten() {
            assert!((0.0..=100.0).contains(score), "score {score} out of range");
        }
    }
}

#[test]
fn reverse_coded_item_mirrors_map_value() {
    let definition = instrument();
    let thirteen = &definition.items[12];
    assert!(thirteen.reverse);

    let map = [0.0, 25.0, 50.0, 75.0, 100.0];
    for (option, raw) in map.iter().enumerate() {
        let score = score_item(&definition, thirteen, Some(option)).unwrap();
        assert_eq!(score, Some(100.0 - raw));
    }
}

#[test]
fn unanswered_item_propagates_without_defaulting() {
    let definition = instrument();
    let score = score_item(&definition, &definition.items[0], None).unwrap();
    assert_eq!(score, None);
}

#[test]
fn reversal_uses_the_scale_ceiling() {
    let definition = InstrumentDefinition {
        id: "narrow".to_string(),
        title: "Narrow".to_string(),
        domains: vec![domain("only")],
        response_scales: BTreeMap::from([(
            "r".to_string(),
            ResponseScale {
                labels: ["zero", "one", "two", "three", "four"]
                    .map(String::from)
                    .to_vec(),
                map: vec![0.0, 1.0, 2.0, 3.0, 4.0],
                ceiling: 4.0,
            },
        )]),
        items: vec![item(1, "only", "r", true), item(2, "only", "r", false)],
        bands: vec![band(0.0, 4.0, "all")],
    };
    definition.validate().unwrap();

    let report = compute_scores(&definition, &vec![Some(1), Some(1)]).unwrap();
    // The reverse-coded item mirrors around its own scale's ceiling (4),
    // not around a global 100.
    assert_eq!(report.item_scores[0], Some(3.0));
    assert_eq!(report.item_scores[1], Some(1.0));
}
