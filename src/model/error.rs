use thiserror::Error;

/// Errors that may occur when operating on a loaded model document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// No line type with the requested name exists in the document.
    ///
    /// Lookup is exact and case-sensitive, so `"test line type"` does not
    /// match a line type named `"Test line type"`.
    #[error("unknown line type: {name:?}")]
    UnknownLineType { name: String },
}
