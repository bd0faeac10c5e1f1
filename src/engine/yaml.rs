//! YAML-backed model persistence.
//!
//! Model files are YAML documents with a `line_types` mapping of name to
//! record. Record fields are raw SI magnitudes (N·m², N, kg/m):
//!
//! ```yaml
//! line_types:
//!   Test line type:
//!     bend_stiffness: 120.0
//!     axial_stiffness: 50000.0
//!     mass_per_length: 7.8
//! ```
//!
//! A document without a `line_types` mapping loads as an empty model.
//! Saving overwrites the destination file in place; no backup of the
//! previous contents is kept.

use std::{collections::BTreeMap, fs, path::Path};

use serde::{Deserialize, Serialize};

use super::{Engine, YamlError};
use crate::{
    model::{LineType, Model},
    support::units::{
        axial_stiffness, bend_stiffness, kilograms_per_meter, mass_per_length, newton_square_meters,
        newtons,
    },
};

/// Model engine persisting documents as YAML files.
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlEngine;

impl YamlEngine {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Engine for YamlEngine {
    type Error = YamlError;

    fn load(&self, path: &Path) -> Result<Model, YamlError> {
        let text = fs::read_to_string(path).map_err(|source| YamlError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let document: DocumentRecord =
            serde_yaml::from_str(&text).map_err(|source| YamlError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        Ok(document.into_model())
    }

    fn save(&self, model: &Model, path: &Path) -> Result<(), YamlError> {
        let document = DocumentRecord::from_model(model);
        let text = serde_yaml::to_string(&document)
            .map_err(|source| YamlError::Serialize { source })?;

        fs::write(path, text).map_err(|source| YamlError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// On-disk document shape.
#[derive(Debug, Serialize, Deserialize)]
struct DocumentRecord {
    #[serde(default)]
    line_types: BTreeMap<String, LineTypeRecord>,
}

/// On-disk line-type shape, raw SI magnitudes.
#[derive(Debug, Serialize, Deserialize)]
struct LineTypeRecord {
    bend_stiffness: f64,
    axial_stiffness: f64,
    mass_per_length: f64,
}

impl DocumentRecord {
    fn from_model(model: &Model) -> Self {
        let line_types = model
            .line_types()
            .map(|(name, lt)| (name.to_string(), LineTypeRecord::from_line_type(lt)))
            .collect();

        Self { line_types }
    }

    fn into_model(self) -> Model {
        let mut model = Model::new();
        for (name, record) in self.line_types {
            model.insert_line_type(name, record.into_line_type());
        }
        model
    }
}

impl LineTypeRecord {
    fn from_line_type(line_type: &LineType) -> Self {
        Self {
            bend_stiffness: newton_square_meters(line_type.bend_stiffness),
            axial_stiffness: newtons(line_type.axial_stiffness),
            mass_per_length: kilograms_per_meter(line_type.mass_per_length),
        }
    }

    fn into_line_type(self) -> LineType {
        LineType::new(
            bend_stiffness(self.bend_stiffness),
            axial_stiffness(self.axial_stiffness),
            mass_per_length(self.mass_per_length),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn parses_a_document() {
        let yaml = r"
line_types:
  Test line type:
    bend_stiffness: 120.5
    axial_stiffness: 50000.0
    mass_per_length: 7.8
";

        let document: DocumentRecord = serde_yaml::from_str(yaml).unwrap();
        let model = document.into_model();

        let lt = model.line_type("Test line type").unwrap();
        assert_relative_eq!(newton_square_meters(lt.bend_stiffness), 120.5);
        assert_relative_eq!(newtons(lt.axial_stiffness), 50_000.0);
        assert_relative_eq!(kilograms_per_meter(lt.mass_per_length), 7.8);
    }

    #[test]
    fn missing_line_types_mapping_loads_as_empty_model() {
        let document: DocumentRecord = serde_yaml::from_str("{}").unwrap();
        assert!(document.into_model().is_empty());
    }

    #[test]
    fn load_reports_missing_file_with_path() {
        let engine = YamlEngine::new();

        let err = engine
            .load(Path::new("does-not-exist.dat"))
            .unwrap_err();
        assert!(matches!(err, YamlError::Read { .. }));
        assert!(err.to_string().contains("does-not-exist.dat"));
    }

    #[test]
    fn round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("riser.dat");
        let engine = YamlEngine::new();

        let mut model = Model::new();
        model.insert_line_type(
            "Test line type",
            LineType::new(
                bend_stiffness(120.0),
                axial_stiffness(50_000.0),
                mass_per_length(7.8),
            ),
        );

        engine.save(&model, &path).unwrap();
        let reloaded = engine.load(&path).unwrap();

        assert_eq!(reloaded, model);
    }

    #[test]
    fn repeated_saves_are_byte_identical() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("riser.dat");
        let engine = YamlEngine::new();

        let mut model = Model::new();
        model.insert_line_type(
            "Test line type",
            LineType::new(
                bend_stiffness(260.0),
                axial_stiffness(50_000.0),
                mass_per_length(7.8),
            ),
        );

        engine.save(&model, &path).unwrap();
        let first = fs::read(&path).unwrap();
        engine.save(&model, &path).unwrap();
        let second = fs::read(&path).unwrap();

        assert_eq!(first, second);
    }
}
