use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors from the YAML-backed engine.
#[derive(Debug, Error)]
pub enum YamlError {
    /// The model file could not be read.
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file's contents are not a valid model document.
    #[error("failed to parse {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// The in-memory model could not be serialized.
    #[error("failed to serialize model")]
    Serialize {
        #[source]
        source: serde_yaml::Error,
    },

    /// The serialized model could not be written back.
    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
