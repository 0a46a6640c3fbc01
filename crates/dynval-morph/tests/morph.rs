use dynval_core::Value;
use dynval_morph::{morph, morph_bytes};
use serde_json::json;

#[test]
fn integers_render_as_minimal_decimal() {
    assert_eq!(morph(&Value::from(70)).unwrap(), "70");
    assert_eq!(morph(&Value::I64(-70)).unwrap(), "-70");
    assert_eq!(morph(&Value::U16(70)).unwrap(), "70");
    assert_eq!(morph(&Value::Usize(70)).unwrap(), "70");
}

#[test]
fn strings_pass_through_unchanged() {
    assert_eq!(morph(&Value::from("hello")).unwrap(), "hello");
    assert_eq!(morph(&Value::Str(String::new())).unwrap(), "");
}

#[test]
fn byte_sequences_decode_directly_to_text() {
    assert_eq!(morph(&Value::from(b"70".as_slice())).unwrap(), "70");
    assert_eq!(morph(&Value::Bytes(b"day".to_vec())).unwrap(), "day");
}

#[test]
fn floats_render_as_minimal_decimal() {
    assert_eq!(morph(&Value::F64(3.5)).unwrap(), "3.5");
    assert_eq!(morph(&Value::F32(3.5)).unwrap(), "3.5");
    assert_eq!(morph(&Value::F64(-0.25)).unwrap(), "-0.25");
}

#[test]
fn single_byte_renders_as_its_numeric_value() {
    assert_eq!(morph(&Value::from(70u8)).unwrap(), "70");
    assert_eq!(morph(&Value::U8(0)).unwrap(), "0");
}

#[test]
fn composite_data_falls_back_to_compact_json() {
    let value = Value::Other(json!({"b": 1, "a": 2}));
    assert_eq!(morph(&value).unwrap(), r#"{"a":2,"b":1}"#);

    let value = Value::other(vec![1u32, 2, 3]).unwrap();
    assert_eq!(morph(&value).unwrap(), "[1,2,3]");
}

#[test]
fn byte_rendering_is_the_utf8_of_the_text_rendering() {
    let values = [
        Value::from(70),
        Value::from("hello"),
        Value::from(3.5f64),
        Value::Bytes(b"70".to_vec()),
        Value::Other(json!({"k": [1, 2]})),
    ];
    for value in &values {
        assert_eq!(
            morph_bytes(value).unwrap(),
            morph(value).unwrap().into_bytes()
        );
    }
}

#[test]
fn repeated_calls_yield_identical_output() {
    let value = Value::Str("hello".into());
    assert_eq!(morph(&value).unwrap(), "hello");
    assert_eq!(morph(&value).unwrap(), "hello");

    let value = Value::I32(70);
    assert_eq!(morph(&value).unwrap(), "70");
    assert_eq!(morph(&value).unwrap(), "70");
}
