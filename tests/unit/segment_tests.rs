/*!
 * Tests for the segment model
 */

use subtool::segment::{segments_from_json, segments_to_json, Segment};

#[test]
fn test_segment_duration_withValidSegment_shouldBeEndMinusStart() {
    let segment = Segment::new(1.5, 4.0, "Hello");
    assert_eq!(segment.duration(), 2.5);
}

#[test]
fn test_segment_hasValidTiming_shouldRequireEndAfterNonNegativeStart() {
    assert!(Segment::new(0.0, 0.1, "ok").has_valid_timing());
    assert!(!Segment::new(1.0, 1.0, "empty").has_valid_timing());
    assert!(!Segment::new(2.0, 1.0, "inverted").has_valid_timing());
    assert!(!Segment::new(-0.5, 1.0, "negative").has_valid_timing());
}

#[test]
fn test_segment_withText_shouldKeepTiming() {
    let segment = Segment::new(1.0, 2.0, "Hello");
    let translated = segment.with_text("Hola");

    assert_eq!(translated.start, 1.0);
    assert_eq!(translated.end, 2.0);
    assert_eq!(translated.text, "Hola");
    assert_eq!(segment.text, "Hello");
}

#[test]
fn test_segment_display_shouldShowTimesAndText() {
    let segment = Segment::new(0.0, 2.5, "Hello");
    assert_eq!(segment.to_string(), "[0.000 -> 2.500] Hello");
}

#[test]
fn test_segmentsFromJson_withBareList_shouldParseInOrder() {
    let json = r#"[
        {"start": 0.0, "end": 1.0, "text": "one"},
        {"start": 1.0, "end": 2.0, "text": "two"}
    ]"#;

    let segments = segments_from_json(json).unwrap();
    assert_eq!(segments, vec![Segment::new(0.0, 1.0, "one"), Segment::new(1.0, 2.0, "two")]);
}

#[test]
fn test_segmentsToJson_shouldBeReadableBack() {
    let segments = vec![Segment::new(0.25, 1.75, "Quote \"this\"")];
    let json = segments_to_json(&segments).unwrap();

    assert_eq!(segments_from_json(&json).unwrap(), segments);
}
