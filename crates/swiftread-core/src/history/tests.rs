use super::*;

fn record(wpm: u32, score: u8, duration_seconds: f64) -> SessionRecord {
    SessionRecord {
        date: "2026-08-29".to_owned(),
        wpm,
        comprehension_score: score,
        duration_seconds,
        text_id: "1".to_owned(),
    }
}

#[test]
fn empty_history_summarizes_to_zeroes() {
    assert_eq!(HistorySummary::from_records(&[]), HistorySummary::default());
}

#[test]
fn summary_averages_and_totals() {
    let records = [record(400, 100, 90.0), record(600, 50, 150.0)];
    let summary = HistorySummary::from_records(&records);

    assert_eq!(summary.avg_wpm, 500);
    assert_eq!(summary.avg_score, 75);
    assert_eq!(summary.total_minutes, 4);
    assert_eq!(summary.best_wpm, 600);
}

#[test]
fn record_wire_format_matches_the_stored_shape() {
    let json = r#"{"date":"2026-08-29","wpm":512,"comprehensionScore":67,"durationSeconds":42.5,"textId":"3"}"#;
    let parsed: SessionRecord = serde_json::from_str(json).unwrap();
    assert_eq!(parsed.wpm, 512);
    assert_eq!(parsed.comprehension_score, 67);

    let back = serde_json::to_string(&parsed).unwrap();
    assert_eq!(back, json);
}
