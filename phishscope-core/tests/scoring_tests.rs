// Tests for feature aggregation, scoring and verdict mapping

use phishscope_core::features::{Feature, FeatureVector};
use phishscope_core::lexical::LexicalFeatures;
use phishscope_core::verdict::{Verdict, heuristic_score, probability_score};
use phishscope_core::{ContentFeatures, ContentReport};

fn lexical(count: usize) -> LexicalFeatures {
    let mut bits = [false; 6];
    for bit in bits.iter_mut().take(count) {
        *bit = true;
    }
    LexicalFeatures::from_bits(bits)
}

// ============================================================================
// Verdict Mapping Tests
// ============================================================================

#[test]
fn test_score_boundaries() {
    assert_eq!(Verdict::from_score(Some(100)), Verdict::Safe);
    assert_eq!(Verdict::from_score(Some(70)), Verdict::Safe);
    assert_eq!(Verdict::from_score(Some(69)), Verdict::Suspicious);
    assert_eq!(Verdict::from_score(Some(40)), Verdict::Suspicious);
    assert_eq!(Verdict::from_score(Some(39)), Verdict::Phishing);
    assert_eq!(Verdict::from_score(Some(0)), Verdict::Phishing);
}

#[test]
fn test_missing_score_is_suspicious() {
    assert_eq!(Verdict::from_score(None), Verdict::Suspicious);
}

#[test]
fn test_feature_count_boundaries() {
    assert_eq!(Verdict::from_feature_count(0), Verdict::Safe);
    assert_eq!(Verdict::from_feature_count(2), Verdict::Safe);
    assert_eq!(Verdict::from_feature_count(3), Verdict::Suspicious);
    assert_eq!(Verdict::from_feature_count(4), Verdict::Suspicious);
    assert_eq!(Verdict::from_feature_count(5), Verdict::Phishing);
    assert_eq!(Verdict::from_feature_count(10), Verdict::Phishing);
}

#[test]
fn test_verdicts_order_by_severity() {
    assert!(Verdict::Safe < Verdict::Suspicious);
    assert!(Verdict::Suspicious < Verdict::Phishing);
    assert_eq!(Verdict::Suspicious.max(Verdict::Safe), Verdict::Suspicious);
}

// ============================================================================
// Score Tests
// ============================================================================

#[test]
fn test_heuristic_score_values() {
    assert_eq!(heuristic_score(0, 0), None);
    assert_eq!(heuristic_score(0, 6), Some(100));
    assert_eq!(heuristic_score(1, 6), Some(83));
    assert_eq!(heuristic_score(3, 6), Some(50));
    assert_eq!(heuristic_score(5, 6), Some(17));
    assert_eq!(heuristic_score(2, 10), Some(80));
    assert_eq!(heuristic_score(10, 10), Some(0));
}

#[test]
fn test_probability_score_is_clamped() {
    assert_eq!(probability_score(0.0), 100);
    assert_eq!(probability_score(0.25), 75);
    assert_eq!(probability_score(1.0), 0);
    assert_eq!(probability_score(1.7), 0);
    assert_eq!(probability_score(-0.5), 100);
}

// ============================================================================
// Aggregation Tests
// ============================================================================

#[test]
fn test_failed_fetch_keeps_six_slots() {
    let vector = FeatureVector::aggregate(lexical(2), &ContentReport::failed("timeout"));

    assert_eq!(vector.len(), 6);
    assert!(!vector.has_content());
    assert_eq!(vector.sum(), 2);
    assert_eq!(vector.get(Feature::MetaRefresh), None);
    assert_eq!(vector.score(), Some(67));
}

#[test]
fn test_successful_fetch_appends_content_slots_in_order() {
    let page = ContentFeatures {
        forms: true,
        password_fields: true,
        external_scripts: false,
        hidden_elements: true,
        suspicious_redirects: false,
    };
    let vector = FeatureVector::aggregate(lexical(0), &ContentReport::Fetched(page));

    assert_eq!(vector.len(), 10);
    assert_eq!(
        vector.bits(),
        vec![false, false, false, false, false, false, true, false, true, false]
    );
    assert_eq!(
        vector.flagged(),
        vec![Feature::CredentialForm, Feature::HiddenElements]
    );
    assert_eq!(vector.score(), Some(80));
}

#[test]
fn test_form_without_password_is_not_credential_form() {
    let page = ContentFeatures {
        forms: true,
        ..Default::default()
    };
    let vector = FeatureVector::aggregate(lexical(0), &ContentReport::Fetched(page));

    assert_eq!(vector.get(Feature::CredentialForm), Some(false));
    assert_eq!(vector.sum(), 0);
}

#[test]
fn test_feature_vector_serialization() {
    let vector = FeatureVector::aggregate(lexical(1), &ContentReport::failed("dns"));
    let json = serde_json::to_value(vector).unwrap();

    assert_eq!(json["bits"], serde_json::json!([1, 0, 0, 0, 0, 0]));
    assert_eq!(json["flagged"], serde_json::json!(["insecure_scheme"]));
}
