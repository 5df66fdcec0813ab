#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use pretty_assertions::assert_eq;
use serde_json::json;

use super::*;

#[test]
fn reads_frames_and_skips_blank_lines() {
    let input = "\
{\"type\": \"data\", \"start_time\": 0.5, \"end_time\": 0.75, \"data\": {\"data\": 1}}

   
{\"type\": \"enable\", \"start_time\": 1, \"end_time\": 2}
";
    let frames: Vec<Frame> = read_frames(input.as_bytes())
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(frames.len(), 2);
    assert_eq!(frames[0].kind, "data");
    assert_eq!(frames[0].start_time, 0.5);
    assert_eq!(frames[0].data.get("data"), Some(&json!(1)));
    assert_eq!(frames[1].kind, "enable");
    assert!(frames[1].data.is_empty());
}

#[test]
fn malformed_line_reports_line_number() {
    let input = "{\"type\": \"data\", \"start_time\": 0, \"end_time\": 0}\n\nnot json\n";
    let results: Vec<_> = read_frames(input.as_bytes()).collect();
    assert_eq!(results.len(), 2);
    let err = results.into_iter().nth(1).unwrap().unwrap_err();
    assert_eq!(err.line(), 3);
    assert!(err.to_string().starts_with("malformed frame at line 3: "));
}

#[test]
fn missing_type_is_malformed() {
    let err = read_frames("{\"start_time\": 0, \"end_time\": 0}".as_bytes())
        .next()
        .unwrap()
        .unwrap_err();
    assert!(matches!(err, FrameReadError::Malformed { line: 1, .. }));
}

#[test]
fn named_record_json() {
    let record = AnnotationRecord::from(Annotation {
        label: Label::Named("Get Version".to_owned()),
        start_time: 0.5,
        end_time: 1.5,
    });
    assert_eq!(
        serde_json::to_string(&record).unwrap(),
        r#"{"type":"named","start_time":0.5,"end_time":1.5,"data":{"text":"Get Version"}}"#
    );
}

#[test]
fn unnamed_record_json() {
    let record = AnnotationRecord::from(Annotation {
        label: Label::Unnamed,
        start_time: 2.0,
        end_time: 3.25,
    });
    assert_eq!(
        serde_json::to_string(&record).unwrap(),
        r#"{"type":"unnamed","start_time":2.0,"end_time":3.25,"data":{}}"#
    );
}
