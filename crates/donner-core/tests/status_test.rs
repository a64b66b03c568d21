use donner_core::types::{RoadStatus, Scores, Verdict};

#[test]
fn status_serialises_lowercase() {
    let json = serde_json::to_string(&RoadStatus::Restrictions).unwrap();
    assert_eq!(json, "\"restrictions\"");
    let parsed: RoadStatus = serde_json::from_str("\"closed\"").unwrap();
    assert_eq!(parsed, RoadStatus::Closed);
    assert_eq!(RoadStatus::Unknown.to_string(), "unknown");
}

#[test]
fn verdict_omits_missing_note() {
    let json = serde_json::to_value(Verdict::new(RoadStatus::Open, Scores::new(0, 16))).unwrap();
    assert_eq!(json["status"], "open");
    assert_eq!(json["scores"]["open"], 16);
    assert!(json.get("note").is_none());

    let with_note = Verdict::unknown().with_note("x");
    let json = serde_json::to_value(&with_note).unwrap();
    assert_eq!(json["note"], "x");
}

#[test]
fn unknown_verdict_has_zero_scores() {
    let verdict = Verdict::unknown();
    assert_eq!(verdict.status, RoadStatus::Unknown);
    assert_eq!(verdict.scores, Scores::default());
    assert!(verdict.note.is_none());
}
