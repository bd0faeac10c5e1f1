//! In-memory model documents.
//!
//! A [`Model`] is the loaded form of one model file: a collection of named
//! [`LineType`] definitions looked up by exact, case-sensitive name. The
//! document does not know where it came from or how it is persisted; that
//! is the [`engine`](crate::engine) seam's concern. A handle to a loaded
//! model is expected to live for one load/mutate/save cycle and be
//! discarded afterwards.

mod document;
mod error;
mod line_type;

pub use document::Model;
pub use error::ModelError;
pub use line_type::LineType;
