#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use pretty_assertions::assert_eq;
use serde_json::json;

use super::*;

fn frame(kind: &str, data: Value) -> Frame {
    serde_json::from_value(json!({
        "type": kind,
        "start_time": 0.0,
        "end_time": 1.0,
        "data": data,
    }))
    .unwrap()
}

#[test]
fn async_serial_reads_data() {
    let f = frame("data", json!({ "data": 171 }));
    assert_eq!(extract_datum(InputKind::AsyncSerial, &f), Ok(Some(0xAB)));
}

#[test]
fn single_byte_array_is_a_byte() {
    let f = frame("data", json!({ "data": [254] }));
    assert_eq!(extract_datum(InputKind::AsyncSerial, &f), Ok(Some(0xFE)));
}

#[test]
fn async_serial_requires_data() {
    let f = frame("error", json!({ "error": "framing" }));
    let err = extract_datum(InputKind::AsyncSerial, &f).unwrap_err();
    assert_eq!(
        err,
        ExtractError::MissingField {
            field: "data",
            kind: InputKind::AsyncSerial,
        }
    );
    assert_eq!(err.code(), ErrorCode::E3001);
    assert_eq!(
        err.to_string(),
        "frame has no `data` field, which Async Serial input requires"
    );
}

#[test]
fn spi_reads_result_frames_only() {
    let result = frame("result", json!({ "mosi": 1, "miso": 2 }));
    assert_eq!(extract_datum(InputKind::SpiMosi, &result), Ok(Some(1)));
    assert_eq!(extract_datum(InputKind::SpiMiso, &result), Ok(Some(2)));

    let enable = frame("enable", json!({}));
    assert_eq!(extract_datum(InputKind::SpiMosi, &enable), Ok(None));
    assert_eq!(extract_datum(InputKind::SpiMiso, &enable), Ok(None));
}

#[test]
fn spi_result_requires_field() {
    let f = frame("result", json!({ "mosi": 1 }));
    assert_eq!(
        extract_datum(InputKind::SpiMiso, &f),
        Err(ExtractError::MissingField {
            field: "miso",
            kind: InputKind::SpiMiso,
        })
    );
}

#[test]
fn values_that_are_not_bytes() {
    for value in [json!(256), json!(-1), json!("AB"), json!([1, 2]), json!([]), json!(1.5)] {
        let f = frame("data", json!({ "data": value }));
        let err = extract_datum(InputKind::AsyncSerial, &f).unwrap_err();
        assert!(matches!(err, ExtractError::NotAByte { field: "data", .. }), "{value}");
        assert_eq!(err.code(), ErrorCode::E3002);
    }
}

#[test]
fn input_kind_names() {
    for kind in InputKind::ALL {
        assert_eq!(InputKind::parse(kind.name()), Ok(kind));
        assert_eq!(InputKind::parse(kind.alias()), Ok(kind));
    }
    assert_eq!(InputKind::parse("SPI-MISO"), Ok(InputKind::SpiMiso));
    let err = InputKind::parse("I2C").unwrap_err();
    assert_eq!(err.code(), ErrorCode::E3003);
    assert_eq!(err.to_string(), "unknown input kind 'I2C'");
}
