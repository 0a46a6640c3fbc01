use thiserror::Error;

/// Errors that can occur while constructing a [`crate::Value`].
#[derive(Error, Debug)]
pub enum ValueError {
    /// Composite data could not be converted to structured form.
    #[error("composite encoding failed: {0}")]
    Encode(#[from] serde_json::Error),
}
