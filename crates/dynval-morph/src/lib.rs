//! Canonical text and byte renderings of dynamic values.
//!
//! [`morph`] routes a value through the visitor dispatch of `dynval-core`
//! with a built-in rendering visitor: numbers become locale-independent
//! minimal decimal text, strings pass through unchanged, a byte renders as
//! its decimal numeric value, and byte sequences decode directly to text.
//! Values outside the primitive kind set fall back to a compact JSON
//! encoding; a failure on that path is returned as [`MorphError`], never
//! swallowed. [`morph_bytes`] is exactly the UTF-8 bytes of [`morph`].
//!
//! Both entry points are pure functions with no shared state, so they are
//! safe to call from any number of threads without synchronization.
//!
#![deny(missing_docs)]

use dynval_core::{dispatch, Value, Visit};
use serde_json::Value as Json;
use thiserror::Error;

/// Errors that can occur while rendering a value.
#[derive(Error, Debug)]
pub enum MorphError {
    /// The fallback structured encoding of composite data failed.
    #[error("fallback encoding failed: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Renders any value as canonical text.
///
/// For the cross-kind semantics this guarantees, see the crate docs. Calling
/// it twice with the same input yields the same output; nothing accumulates
/// between calls.
pub fn morph(value: &Value) -> Result<String, MorphError> {
    let mut renderer = TextRenderer::default();
    dispatch(value, &mut renderer);
    match renderer.err {
        Some(err) => Err(MorphError::Encode(err)),
        None => Ok(renderer.out),
    }
}

/// Renders any value as canonical bytes: the UTF-8 encoding of [`morph`].
pub fn morph_bytes(value: &Value) -> Result<Vec<u8>, MorphError> {
    Ok(morph(value)?.into_bytes())
}

/// The built-in handler set behind [`morph`]; one arm per primitive kind,
/// with the structured-encoding fallback in `visit_other`.
#[derive(Default)]
struct TextRenderer {
    out: String,
    err: Option<serde_json::Error>,
}

macro_rules! render_decimal {
    ($($method:ident => $ty:ty),* $(,)?) => {
        $(
            fn $method(&mut self, v: $ty) {
                self.out = v.to_string();
            }
        )*
    };
}

impl Visit for TextRenderer {
    fn visit_bytes(&mut self, v: &[u8]) {
        self.out = String::from_utf8_lossy(v).into_owned();
    }

    fn visit_str(&mut self, v: &str) {
        self.out = v.to_owned();
    }

    render_decimal! {
        visit_byte => u8,
        visit_f32 => f32,
        visit_f64 => f64,
        visit_i64 => i64,
        visit_u64 => u64,
        visit_i32 => i32,
        visit_u32 => u32,
        visit_i16 => i16,
        visit_u16 => u16,
        visit_i8 => i8,
        visit_u8 => u8,
        visit_isize => isize,
        visit_usize => usize,
    }

    fn visit_other(&mut self, v: &Json) {
        match serde_json::to_string(v) {
            Ok(text) => self.out = text,
            Err(err) => self.err = Some(err),
        }
    }
}
