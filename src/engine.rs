//! Loading and saving model documents.
//!
//! The [`Engine`] trait is the persistence seam: it turns a filesystem
//! path into a [`Model`](crate::model::Model) and writes a model back to a
//! path. The batch updater is generic over this trait, so the rest of the
//! crate never depends on a particular file format.
//!
//! One concrete engine is provided: [`YamlEngine`], which persists models
//! as YAML documents of raw SI magnitudes.

mod error;

pub mod yaml;

pub use error::YamlError;
pub use yaml::YamlEngine;

use std::path::Path;

use crate::model::Model;

/// A persistence backend for model documents.
pub trait Engine {
    /// Error type surfaced by load and save operations.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Loads the model stored at `path`.
    ///
    /// # Errors
    ///
    /// Returns the backend's error if the file cannot be read or its
    /// contents do not describe a model.
    fn load(&self, path: &Path) -> Result<Model, Self::Error>;

    /// Persists `model` to `path`, replacing any existing file in place.
    ///
    /// # Errors
    ///
    /// Returns the backend's error if the model cannot be serialized or
    /// the file cannot be written.
    fn save(&self, model: &Model, path: &Path) -> Result<(), Self::Error>;
}
