use serde_json::Value as Json;

use crate::value::Value;

/// Receives a value narrowed to its matched kind.
///
/// Every method defaults to a no-op, so a visitor overrides only the kinds it
/// cares about; a visitor that overrides nothing is legal and dispatch is
/// then silent. [`Visit::visit_other`] fires only for values that match no
/// primitive kind, never because a primitive arm was left at its default.
pub trait Visit {
    /// Called with a byte sequence.
    fn visit_bytes(&mut self, _v: &[u8]) {}
    /// Called with a single byte.
    fn visit_byte(&mut self, _v: u8) {}
    /// Called with a string.
    fn visit_str(&mut self, _v: &str) {}
    /// Called with a 32-bit float.
    fn visit_f32(&mut self, _v: f32) {}
    /// Called with a 64-bit float.
    fn visit_f64(&mut self, _v: f64) {}
    /// Called with a 64-bit signed integer.
    fn visit_i64(&mut self, _v: i64) {}
    /// Called with a 64-bit unsigned integer.
    fn visit_u64(&mut self, _v: u64) {}
    /// Called with a 32-bit signed integer.
    fn visit_i32(&mut self, _v: i32) {}
    /// Called with a 32-bit unsigned integer.
    fn visit_u32(&mut self, _v: u32) {}
    /// Called with a 16-bit signed integer.
    fn visit_i16(&mut self, _v: i16) {}
    /// Called with a 16-bit unsigned integer.
    fn visit_u16(&mut self, _v: u16) {}
    /// Called with an 8-bit signed integer.
    fn visit_i8(&mut self, _v: i8) {}
    /// Called with an 8-bit unsigned integer.
    fn visit_u8(&mut self, _v: u8) {}
    /// Called with a machine-width signed integer.
    fn visit_isize(&mut self, _v: isize) {}
    /// Called with a machine-width unsigned integer.
    fn visit_usize(&mut self, _v: usize) {}
    /// Called with the original structured data when no primitive kind
    /// matched.
    fn visit_other(&mut self, _v: &Json) {}
}

/// Routes `value` to the visitor method for its kind.
///
/// A single exhaustive match: the matched kind's method is invoked with the
/// narrowed value, and nothing else runs. The engine itself never fails and
/// has no side effects of its own; all effects live in the visitor.
pub fn dispatch<V: Visit + ?Sized>(value: &Value, visitor: &mut V) {
    match value {
        Value::Bytes(v) => visitor.visit_bytes(v),
        Value::Byte(v) => visitor.visit_byte(*v),
        Value::Str(v) => visitor.visit_str(v),
        Value::F32(v) => visitor.visit_f32(*v),
        Value::F64(v) => visitor.visit_f64(*v),
        Value::I64(v) => visitor.visit_i64(*v),
        Value::U64(v) => visitor.visit_u64(*v),
        Value::I32(v) => visitor.visit_i32(*v),
        Value::U32(v) => visitor.visit_u32(*v),
        Value::I16(v) => visitor.visit_i16(*v),
        Value::U16(v) => visitor.visit_u16(*v),
        Value::I8(v) => visitor.visit_i8(*v),
        Value::U8(v) => visitor.visit_u8(*v),
        Value::Isize(v) => visitor.visit_isize(*v),
        Value::Usize(v) => visitor.visit_usize(*v),
        Value::Other(v) => visitor.visit_other(v),
    }
}

impl Value {
    /// Dispatches this value to `visitor`. Equivalent to [`dispatch`].
    pub fn accept<V: Visit + ?Sized>(&self, visitor: &mut V) {
        dispatch(self, visitor);
    }
}
