#![allow(missing_docs)]

use mec_model::{ColorToken, ConditionEntry, EligibilityChart, MethodRatings, RatingCode};

fn ratings(i: &str, c: &str) -> MethodRatings {
    MethodRatings::new(Some(i.to_string()), Some(c.to_string()))
}

#[test]
fn method_ratings_serialize_with_chart_column_names() {
    let cell = ratings("2", "1");
    let json = serde_json::to_string(&cell).expect("serialize ratings");
    assert_eq!(json, r#"{"I":"2","C":"1"}"#);

    let round: MethodRatings = serde_json::from_str(&json).expect("deserialize ratings");
    assert_eq!(round, cell);
    assert_eq!(round.initiation_code(), Some(RatingCode::Category2));
    assert_eq!(round.continuation_code(), Some(RatingCode::Category1));
}

#[test]
fn missing_columns_deserialize_as_absent() {
    let cell: MethodRatings = serde_json::from_str(r#"{"C":"3"}"#).expect("deserialize");
    assert_eq!(cell.initiation, None);
    assert!(!cell.is_applicable());
    assert_eq!(cell.continuation.as_deref(), Some("3"));
}

#[test]
fn color_tokens_match_reference_palette() {
    assert_eq!(ColorToken::DarkGreen.hex(), "#009200FF");
    assert_eq!(ColorToken::Green.hex(), "#5BC515FF");
    assert_eq!(ColorToken::Pink.hex(), "#D96888FF");
    assert_eq!(ColorToken::Red.hex(), "#FF0000");
    assert_eq!(ColorToken::Neutral.hex(), "#757575");
    assert_eq!(ColorToken::Red.rgb(), (255, 0, 0));
}

#[test]
fn chart_iteration_preserves_source_order() {
    let mut chart = EligibilityChart::new();
    for name in ["Smoking - Age <35", "Stroke", "Anemias - Thalassemia"] {
        let mut entry = ConditionEntry::new();
        entry.insert("CHC", ratings("2", "2"));
        chart.insert(name, entry);
    }
    let names: Vec<&str> = chart.condition_names().collect();
    assert_eq!(
        names,
        vec!["Smoking - Age <35", "Stroke", "Anemias - Thalassemia"]
    );
    assert_eq!(chart.len(), 3);
}
