// crates/muxconf-core/src/version/tests/value_tests.rs
#![cfg(test)]

use crate::version::error::VersionError;
use crate::version::value::{VersionLiteral, VersionValue};
use std::str::FromStr;

fn v(text: &str) -> VersionValue {
    VersionValue::parse(text).unwrap()
}

#[test]
fn test_literal_shapes_are_equal() {
    let from_int = VersionValue::parse(3).unwrap();
    let from_decimal = VersionValue::parse(3.0).unwrap();
    let from_text = VersionValue::parse("3.0").unwrap();

    assert_eq!(from_int, from_decimal);
    assert_eq!(from_decimal, from_text);
    assert_eq!(from_int.major(), 3);
    assert_eq!(from_int.minor(), 0);
    assert_eq!(from_int.suffix(), None);
}

#[test]
fn test_decimal_literal() {
    let version = VersionValue::parse(3.2).unwrap();
    assert_eq!(version, v("3.2"));
    assert_eq!(version.to_text(), "3.2");
}

#[test]
fn test_negative_zero_decimal_is_zero() {
    assert!(!VersionLiteral::Decimal(-0.0).is_negative());
    let version = VersionValue::parse(-0.0).unwrap();
    assert_eq!(version, v("0.0"));
    assert_eq!(version.to_text(), "0.0");
}

#[test]
fn test_integer_renders_with_zero_minor() {
    assert_eq!(VersionValue::parse(2).unwrap().to_text(), "2.0");
}

#[test]
fn test_text_round_trip_keeps_input() {
    for text in ["3.3a", "1.8", "3.10", "3.00"] {
        let version = VersionValue::parse(text).unwrap();
        assert_eq!(version.to_text(), text);
        assert_eq!(version.to_string(), text);
        assert_eq!(VersionValue::parse(version.to_text()).unwrap(), version);
    }
}

#[test]
fn test_suffix_parsed() {
    let version = v("3.3a");
    assert_eq!(version.major(), 3);
    assert_eq!(version.minor(), 3);
    assert_eq!(version.suffix(), Some('a'));
}

#[test]
fn test_malformed_inputs_rejected() {
    for text in ["3", "3.", ".3", "3.3ab", "3.3A", "a.b", "3.3.1", " 3.3", "3.-1", "", "master"] {
        match VersionValue::parse(text) {
            Err(VersionError::MalformedVersion(rejected)) => assert_eq!(rejected, text),
            other => panic!("expected MalformedVersion for {:?}, got {:?}", text, other),
        }
    }
    assert!(VersionValue::parse(-1).is_err());
    assert!(VersionValue::parse(-1.5).is_err());
    assert!(VersionValue::parse(f64::NAN).is_err());
}

#[test]
fn test_ordering_with_suffixes() {
    assert!(v("3.3a") < v("3.3b"));
    assert!(v("3.3b") < v("3.4"));
    assert!(v("3.3") < v("3.3a"));
    assert!(v("2.9") < v("3.0"));
    assert!(v("3.9") < v("3.10"));
    assert!(v("10.0") > v("9.9z"));
}

#[test]
fn test_total_order_trichotomy() {
    let samples: Vec<VersionValue> = ["1.8", "2.0", "2.9a", "3.0", "3.3", "3.3a", "3.3b", "3.4"]
        .iter()
        .map(|s| v(s))
        .collect();
    for a in &samples {
        for b in &samples {
            let outcomes = [a < b, a == b, a > b];
            assert_eq!(outcomes.iter().filter(|o| **o).count(), 1, "{} vs {}", a, b);
        }
    }
}

#[test]
fn test_from_str() {
    assert_eq!(VersionValue::from_str("3.2").unwrap(), VersionValue::new(3, 2));
    assert!(VersionValue::from_str("3").is_err());
}

#[test]
fn test_literal_negative_detection() {
    assert!(VersionLiteral::Integer(-1).is_negative());
    assert!(VersionLiteral::Decimal(-1.0).is_negative());
    assert!(VersionLiteral::from("-1").is_negative());
    assert!(VersionLiteral::from("-1.0").is_negative());
    assert!(!VersionLiteral::from("-x").is_negative());
    assert!(!VersionLiteral::from("3.2").is_negative());
    assert!(!VersionLiteral::Integer(0).is_negative());
}

#[test]
fn test_literal_deserializes_untagged() {
    let lits: Vec<VersionLiteral> = serde_json::from_str(r#"[3, 3.2, "3.3a"]"#).unwrap();
    assert_eq!(lits[0], VersionLiteral::Integer(3));
    assert_eq!(lits[1], VersionLiteral::Decimal(3.2));
    assert_eq!(lits[2], VersionLiteral::Text("3.3a".to_string()));
}
