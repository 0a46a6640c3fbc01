use std::mem;

use crate::value::Value;

/// Compares two values for semantic equality.
///
/// Rules, first applicable wins:
/// 1. Identical kinds: deep structural equality over the full value
///    (byte sequences element-wise, composite data over its whole structure;
///    float NaN is never equal to itself).
/// 2. Both signed-integer-kind, any width: equal iff the mathematical values
///    are equal.
/// 3. Both unsigned-integer-kind, any width (the single byte included): same.
/// 4. Both float-kind, either width: ordinary floating-point equality after
///    widening to 64 bits.
/// 5. A string and a byte sequence, either order: equal iff the string's
///    UTF-8 encoding equals the byte sequence exactly.
/// 6. Otherwise not equal. Signed never compares equal to unsigned, and
///    strings are never parsed as numbers; a wider rule would let
///    `"5" == 5 == 5.0` chain into transitivity violations.
pub fn equal(a: &Value, b: &Value) -> bool {
    if mem::discriminant(a) == mem::discriminant(b) {
        return a == b;
    }
    if let (Some(x), Some(y)) = (signed_of(a), signed_of(b)) {
        return x == y;
    }
    if let (Some(x), Some(y)) = (unsigned_of(a), unsigned_of(b)) {
        return x == y;
    }
    if let (Some(x), Some(y)) = (float_of(a), float_of(b)) {
        return x == y;
    }
    match (a, b) {
        (Value::Str(s), Value::Bytes(v)) | (Value::Bytes(v), Value::Str(s)) => {
            s.as_bytes() == v.as_slice()
        }
        _ => false,
    }
}

fn signed_of(v: &Value) -> Option<i128> {
    match *v {
        Value::I8(x) => Some(x.into()),
        Value::I16(x) => Some(x.into()),
        Value::I32(x) => Some(x.into()),
        Value::I64(x) => Some(x.into()),
        Value::Isize(x) => Some(x as i128),
        _ => None,
    }
}

fn unsigned_of(v: &Value) -> Option<u128> {
    match *v {
        Value::Byte(x) | Value::U8(x) => Some(x.into()),
        Value::U16(x) => Some(x.into()),
        Value::U32(x) => Some(x.into()),
        Value::U64(x) => Some(x.into()),
        Value::Usize(x) => Some(x as u128),
        _ => None,
    }
}

fn float_of(v: &Value) -> Option<f64> {
    match *v {
        Value::F32(x) => Some(x.into()),
        Value::F64(x) => Some(x),
        _ => None,
    }
}
