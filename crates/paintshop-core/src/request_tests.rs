//! Tests for request decoding

use super::error::DecodeError;
use super::request::*;

#[test]
fn test_decode_request() {
    let request = Request::from_json_str(
        r#"{"colors": 5, "customers": 2, "demands": [[1, 5, 1], [2, 1, 0, 2, 1]]}"#,
    )
    .unwrap();

    assert_eq!(request, Request::new(5, 2, vec![vec![1, 5, 1], vec![2, 1, 0, 2, 1]]));
}

#[test]
fn test_decode_records_non_integers() {
    let request = Request::from_json_str(
        r#"{"colors": 2.0, "customers": "1", "demands": [[1, true, 0], 7]}"#,
    )
    .unwrap();

    assert_eq!(
        request.non_integer_values(),
        &[
            ValuePath::Colors,
            ValuePath::Customers,
            ValuePath::Element {
                customer: 0,
                position: 1
            },
            ValuePath::Order { customer: 1 },
        ]
    );
    assert_eq!(request.demands, vec![vec![1, 0, 0], vec![]]);
}

#[test]
fn test_decode_huge_integer_saturates() {
    let request =
        Request::from_json_str(r#"{"colors": 18446744073709551615, "customers": 1, "demands": [[0]]}"#)
            .unwrap();
    assert_eq!(request.colors, i64::MAX);
    assert!(request.non_integer_values().is_empty());
}

#[test]
fn test_decode_errors() {
    assert!(matches!(
        Request::from_json_str("{"),
        Err(DecodeError::Json(_))
    ));
    assert!(matches!(
        Request::from_json_str("[1, 2]"),
        Err(DecodeError::NotAnObject)
    ));
    assert!(matches!(
        Request::from_json_str(r#"{"colors": 1, "customers": 1}"#),
        Err(DecodeError::MissingField("demands"))
    ));
    assert!(matches!(
        Request::from_json_str(r#"{"colors": 1, "customers": 1, "demands": 3}"#),
        Err(DecodeError::DemandsNotAList)
    ));
}

#[test]
fn test_decode_errors_convert_to_crate_result() {
    fn decode(json: &str) -> crate::Result<Request> {
        Ok(Request::from_json_str(json)?)
    }

    assert!(decode(r#"{"colors": 1, "customers": 1, "demands": []}"#).is_ok());
    assert!(matches!(
        decode("[1, 2]"),
        Err(crate::PaintShopError::Decode(DecodeError::NotAnObject))
    ));
}

#[test]
fn test_json_round_trip_keeps_shape() {
    let request = Request::new(2, 2, vec![vec![1, 1, 0], vec![1, 2, 0]]);
    let decoded = Request::from_json_str(&request.to_json_string()).unwrap();
    assert_eq!(decoded, request);
}

#[test]
fn test_value_path_display() {
    assert_eq!(ValuePath::Colors.to_string(), "colors");
    assert_eq!(
        ValuePath::Element {
            customer: 3,
            position: 2
        }
        .to_string(),
        "demands[3][2]"
    );
}
