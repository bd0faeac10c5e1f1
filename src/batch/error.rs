use std::{error::Error as StdError, io, path::PathBuf};

use thiserror::Error;

use crate::model::ModelError;

/// Errors that abort a batch run.
///
/// `E` is the engine's error type. Any variant stops the run at the file
/// it names; files saved earlier keep their new contents.
#[derive(Debug, Error)]
pub enum BatchError<E: StdError + 'static> {
    /// The directory listing could not be read.
    #[error("failed to scan {}", path.display())]
    Scan {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The engine failed to load a model file.
    #[error("failed to load {}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: E,
    },

    /// The target line type was missing from a loaded model.
    #[error("in {}", path.display())]
    Model {
        path: PathBuf,
        #[source]
        source: ModelError,
    },

    /// The engine failed to save a mutated model.
    #[error("failed to save {}", path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: E,
    },
}
