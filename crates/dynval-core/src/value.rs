use serde::{Deserialize, Serialize};
use serde_json::Value as Json;

use crate::error::ValueError;

/// Category of a [`Value`].
///
/// The set is closed and totally ordered; the declaration order is the
/// dispatch priority order (byte sequences first, machine-width integers
/// last, `Other` after every primitive kind).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    /// Byte sequence.
    Bytes,
    /// Single byte.
    Byte,
    /// Character string.
    Str,
    /// 32-bit float.
    F32,
    /// 64-bit float.
    F64,
    /// 64-bit signed integer.
    I64,
    /// 64-bit unsigned integer.
    U64,
    /// 32-bit signed integer.
    I32,
    /// 32-bit unsigned integer.
    U32,
    /// 16-bit signed integer.
    I16,
    /// 16-bit unsigned integer.
    U16,
    /// 8-bit signed integer.
    I8,
    /// 8-bit unsigned integer.
    U8,
    /// Machine-width signed integer.
    Isize,
    /// Machine-width unsigned integer.
    Usize,
    /// No primitive kind matched; the value is composite or unrecognized.
    Other,
}

/// An arbitrarily-typed datum with its concrete kind carried in the tag.
///
/// One variant exists per primitive [`Kind`]; anything else lives in
/// [`Value::Other`] as structured data. The only host representation that
/// satisfies two kinds is `u8` (Rust spells "byte" as `u8`): `Byte` outranks
/// `U8` in the kind order, so [`From<u8>`] yields [`Value::Byte`], and
/// [`Value::U8`] arises only from explicit construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "t", content = "v", rename_all = "lowercase")]
pub enum Value {
    /// Byte sequence.
    Bytes(Vec<u8>),
    /// Single byte.
    Byte(u8),
    /// Character string.
    Str(String),
    /// 32-bit float.
    F32(f32),
    /// 64-bit float.
    F64(f64),
    /// 64-bit signed integer.
    I64(i64),
    /// 64-bit unsigned integer.
    U64(u64),
    /// 32-bit signed integer.
    I32(i32),
    /// 32-bit unsigned integer.
    U32(u32),
    /// 16-bit signed integer.
    I16(i16),
    /// 16-bit unsigned integer.
    U16(u16),
    /// 8-bit signed integer.
    I8(i8),
    /// 8-bit unsigned integer.
    U8(u8),
    /// Machine-width signed integer.
    Isize(isize),
    /// Machine-width unsigned integer.
    Usize(usize),
    /// Composite or unrecognized data, held as structured form.
    Other(Json),
}

macro_rules! copy_accessor {
    ($(#[$doc:meta] $method:ident, $variant:ident, $ty:ty;)*) => {
        $(
            #[$doc]
            pub fn $method(&self) -> Option<$ty> {
                match *self {
                    Value::$variant(v) => Some(v),
                    _ => None,
                }
            }
        )*
    };
}

impl Value {
    /// Wraps composite data by converting it to structured form.
    ///
    /// This is the entry point for anything outside the primitive kind set:
    /// records, sequences, maps. The result always classifies as
    /// [`Kind::Other`].
    pub fn other<T: Serialize>(data: T) -> Result<Self, ValueError> {
        Ok(Value::Other(serde_json::to_value(data)?))
    }

    /// Reports this value's kind. Pure and deterministic.
    pub fn kind(&self) -> Kind {
        match self {
            Value::Bytes(_) => Kind::Bytes,
            Value::Byte(_) => Kind::Byte,
            Value::Str(_) => Kind::Str,
            Value::F32(_) => Kind::F32,
            Value::F64(_) => Kind::F64,
            Value::I64(_) => Kind::I64,
            Value::U64(_) => Kind::U64,
            Value::I32(_) => Kind::I32,
            Value::U32(_) => Kind::U32,
            Value::I16(_) => Kind::I16,
            Value::U16(_) => Kind::U16,
            Value::I8(_) => Kind::I8,
            Value::U8(_) => Kind::U8,
            Value::Isize(_) => Kind::Isize,
            Value::Usize(_) => Kind::Usize,
            Value::Other(_) => Kind::Other,
        }
    }

    /// True iff some primitive kind matches, i.e. the value is not `Other`.
    pub fn is_primitive(&self) -> bool {
        !matches!(self, Value::Other(_))
    }

    /// Borrows the byte sequence, if that kind matches.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::Bytes(v) => Some(v),
            _ => None,
        }
    }

    /// Borrows the string, if that kind matches.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(v) => Some(v),
            _ => None,
        }
    }

    /// Borrows the structured form of composite data, if no primitive kind
    /// matched.
    pub fn as_other(&self) -> Option<&Json> {
        match self {
            Value::Other(v) => Some(v),
            _ => None,
        }
    }

    /// Extracts the byte, if that kind matches. Accepts both `Byte` and `U8`:
    /// the two kinds share the one `u8` host representation.
    pub fn as_byte(&self) -> Option<u8> {
        match *self {
            Value::Byte(v) | Value::U8(v) => Some(v),
            _ => None,
        }
    }

    /// Extracts the 8-bit unsigned integer, if that kind matches. Accepts
    /// both `U8` and `Byte` for the same reason as [`Value::as_byte`].
    pub fn as_u8(&self) -> Option<u8> {
        match *self {
            Value::U8(v) | Value::Byte(v) => Some(v),
            _ => None,
        }
    }

    copy_accessor! {
        /// Extracts the 32-bit float, if that kind matches.
        as_f32, F32, f32;
        /// Extracts the 64-bit float, if that kind matches.
        as_f64, F64, f64;
        /// Extracts the 64-bit signed integer, if that kind matches.
        as_i64, I64, i64;
        /// Extracts the 64-bit unsigned integer, if that kind matches.
        as_u64, U64, u64;
        /// Extracts the 32-bit signed integer, if that kind matches.
        as_i32, I32, i32;
        /// Extracts the 32-bit unsigned integer, if that kind matches.
        as_u32, U32, u32;
        /// Extracts the 16-bit signed integer, if that kind matches.
        as_i16, I16, i16;
        /// Extracts the 16-bit unsigned integer, if that kind matches.
        as_u16, U16, u16;
        /// Extracts the 8-bit signed integer, if that kind matches.
        as_i8, I8, i8;
        /// Extracts the machine-width signed integer, if that kind matches.
        as_isize, Isize, isize;
        /// Extracts the machine-width unsigned integer, if that kind matches.
        as_usize, Usize, usize;
    }
}

macro_rules! from_primitive {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Value::$variant(v)
                }
            }
        )*
    };
}

from_primitive! {
    // u8 maps to Byte, the higher-priority of its two kinds.
    u8 => Byte,
    i8 => I8,
    i16 => I16,
    u16 => U16,
    i32 => I32,
    u32 => U32,
    i64 => I64,
    u64 => U64,
    isize => Isize,
    usize => Usize,
    f32 => F32,
    f64 => F64,
    String => Str,
    Vec<u8> => Bytes,
    Json => Other,
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_owned())
    }
}

impl From<&[u8]> for Value {
    fn from(v: &[u8]) -> Self {
        Value::Bytes(v.to_vec())
    }
}
