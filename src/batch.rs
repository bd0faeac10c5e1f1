//! The batch parameter updater.
//!
//! [`Updater`] drives the scan → load → mutate → save loop over one
//! directory: every file whose name ends with the configured suffix is
//! loaded through the [`Engine`], the configured line type's bend
//! stiffness is overwritten with the configured value, and the model is
//! saved back to the path it was loaded from.
//!
//! Processing is strictly sequential and fail-fast: each file is loaded,
//! mutated, and saved before the next listing entry is inspected, and the
//! first failure aborts the whole run. Files saved before the failure
//! keep their new contents; remaining files are untouched.

mod config;
mod error;

pub use config::BatchConfig;
pub use error::BatchError;

use std::{
    ffi::OsStr,
    fs,
    path::{Path, PathBuf},
};

use log::debug;

use crate::engine::Engine;

/// Applies one parameter change across every matching model file in a
/// directory.
#[derive(Debug)]
pub struct Updater<E> {
    engine: E,
    config: BatchConfig,
}

impl<E: Engine> Updater<E> {
    #[must_use]
    pub fn new(engine: E, config: BatchConfig) -> Self {
        Self { engine, config }
    }

    /// Runs the update over every matching file in `dir`.
    ///
    /// The directory listing is read once, up front, and kept in the
    /// order the OS returns entries (not sorted). One
    /// `Loading model <file>` progress line is printed to standard
    /// output per processed file.
    ///
    /// Returns the paths processed, in processing order.
    ///
    /// # Errors
    ///
    /// Stops at the first failure: a directory scan error, an engine
    /// load or save error, or a missing line type. See [`BatchError`].
    pub fn run(&self, dir: &Path) -> Result<Vec<PathBuf>, BatchError<E::Error>> {
        let files = self.scan(dir)?;
        let mut processed = Vec::with_capacity(files.len());

        for path in files {
            self.process(&path)?;
            processed.push(path);
        }

        debug!("updated {} model file(s)", processed.len());
        Ok(processed)
    }

    /// Reads the directory listing once and keeps matching entries.
    fn scan(&self, dir: &Path) -> Result<Vec<PathBuf>, BatchError<E::Error>> {
        let entries = fs::read_dir(dir).map_err(|source| BatchError::Scan {
            path: dir.to_path_buf(),
            source,
        })?;

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| BatchError::Scan {
                path: dir.to_path_buf(),
                source,
            })?;
            if self.matches(&entry.file_name()) {
                files.push(entry.path());
            }
        }

        Ok(files)
    }

    /// Literal, case-sensitive suffix match on the whole file name.
    fn matches(&self, name: &OsStr) -> bool {
        name.to_str()
            .is_some_and(|name| name.ends_with(&self.config.suffix))
    }

    /// Loads one model, overwrites the target bend stiffness, and saves
    /// the model back to the same path.
    fn process(&self, path: &Path) -> Result<(), BatchError<E::Error>> {
        let name = path.file_name().unwrap_or(path.as_os_str());
        println!("Loading model {}", name.to_string_lossy());

        let mut model = self.engine.load(path).map_err(|source| BatchError::Load {
            path: path.to_path_buf(),
            source,
        })?;

        model
            .line_type_mut(&self.config.line_type)
            .map_err(|source| BatchError::Model {
                path: path.to_path_buf(),
                source,
            })?
            .bend_stiffness = self.config.bend_stiffness;

        self.engine
            .save(&model, path)
            .map_err(|source| BatchError::Save {
                path: path.to_path_buf(),
                source,
            })?;

        debug!("saved {}", path.display());
        Ok(())
    }
}
