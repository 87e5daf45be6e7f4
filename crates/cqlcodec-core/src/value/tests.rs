use super::*;
use crate::error::ErrorKind;
use cqlcodec_primitives::ALL_COLUMN_TYPES;
use serde_json::json;
use std::net::Ipv4Addr;

fn sample(ty: ColumnType) -> NativeValue {
    match ty {
        ColumnType::Ascii => NativeValue::Ascii("a".to_string()),
        ColumnType::Bigint => NativeValue::Bigint(1),
        ColumnType::Blob => NativeValue::Blob(vec![1]),
        ColumnType::Boolean => NativeValue::Boolean(true),
        ColumnType::Date => NativeValue::Date(Date::EPOCH),
        ColumnType::Decimal => NativeValue::Decimal(Decimal::from(1)),
        ColumnType::Double => NativeValue::Double(1.0),
        ColumnType::Duration => NativeValue::Duration(Duration::ZERO),
        ColumnType::Float => NativeValue::Float(1.0),
        ColumnType::Inet => NativeValue::Inet(IpAddr::V4(Ipv4Addr::LOCALHOST)),
        ColumnType::Int => NativeValue::Int(1),
        ColumnType::Smallint => NativeValue::Smallint(1),
        ColumnType::Text => NativeValue::Text("t".to_string()),
        ColumnType::Time => NativeValue::Time(Time::MIDNIGHT),
        ColumnType::Timestamp => NativeValue::Timestamp(Timestamp::EPOCH),
        ColumnType::Tinyint => NativeValue::Tinyint(1),
        ColumnType::Timeuuid => {
            let uuid = Uuid::parse_str("50554d6e-29bb-11e5-b345-feff819cdc9f").unwrap();
            NativeValue::Timeuuid(TimeUuid::try_from_uuid(uuid).unwrap())
        }
        ColumnType::Uuid => NativeValue::Uuid(Uuid::nil()),
        ColumnType::Varchar => NativeValue::Varchar("v".to_string()),
        ColumnType::Varint => NativeValue::Varint(BigInt::from(1)),
    }
}

#[test]
fn every_variant_reports_its_column_type() {
    for ty in ALL_COLUMN_TYPES {
        let value = sample(ty);
        assert_eq!(value.column_type(), ty);
        assert!(value.fits(ty));
    }
}

#[test]
fn text_backed_variants_do_not_fit_each_other() {
    let ascii = NativeValue::Ascii("x".to_string());
    assert!(!ascii.fits(ColumnType::Text));
    assert!(!ascii.fits(ColumnType::Varchar));
    assert_eq!(NativeValue::from("x".to_string()).column_type(), ColumnType::Text);
}

#[test]
fn external_values_deserialize_from_plain_json() {
    let values: Vec<ExternalValue> =
        serde_json::from_str(r#"[null, true, -1, 1.5, "x", 18446744073709551615]"#).unwrap();
    assert_eq!(
        values,
        vec![
            ExternalValue::Null,
            ExternalValue::Boolean(true),
            ExternalValue::Integer(-1),
            ExternalValue::Float(1.5),
            ExternalValue::String("x".to_string()),
            ExternalValue::Float(1.844_674_407_370_955_2e19),
        ]
    );
}

#[test]
fn external_values_serialize_untagged() {
    let values = vec![
        ExternalValue::Null,
        ExternalValue::from(false),
        ExternalValue::from(7),
        ExternalValue::from(0.25),
        ExternalValue::from("s"),
    ];
    assert_eq!(
        serde_json::to_value(&values).unwrap(),
        json!([null, false, 7, 0.25, "s"])
    );
}

#[test]
fn json_conversion_rejects_containers() {
    let err = ExternalValue::try_from(json!([1, 2])).unwrap_err();
    assert_eq!(err.kind, ErrorKind::UnsupportedType);
    let err = ExternalValue::try_from(json!({"a": 1})).unwrap_err();
    assert_eq!(err.kind, ErrorKind::UnsupportedType);

    assert_eq!(
        ExternalValue::try_from(json!(9_007_199_254_740_993_i64)).unwrap(),
        ExternalValue::Integer(9_007_199_254_740_993)
    );
}

#[test]
fn non_finite_floats_become_json_null() {
    assert_eq!(
        serde_json::Value::from(ExternalValue::Float(f64::NAN)),
        serde_json::Value::Null
    );
    assert_eq!(serde_json::Value::from(ExternalValue::from(3)), json!(3));
}
