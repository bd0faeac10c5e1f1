use std::collections::BTreeMap;

use super::{LineType, ModelError};

/// A loaded model document holding named line types.
///
/// Line types are kept sorted by name so iteration, and therefore
/// serialization, is deterministic: saving an unchanged document twice
/// produces identical bytes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Model {
    line_types: BTreeMap<String, LineType>,
}

impl Model {
    /// Creates an empty document with no line types.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the line type stored under `name`.
    pub fn insert_line_type(&mut self, name: impl Into<String>, line_type: LineType) {
        self.line_types.insert(name.into(), line_type);
    }

    /// Looks up a line type by exact name.
    #[must_use]
    pub fn line_type(&self, name: &str) -> Option<&LineType> {
        self.line_types.get(name)
    }

    /// Looks up a line type by exact name for mutation.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::UnknownLineType`] if no line type with that
    /// name exists in the document.
    pub fn line_type_mut(&mut self, name: &str) -> Result<&mut LineType, ModelError> {
        self.line_types
            .get_mut(name)
            .ok_or_else(|| ModelError::UnknownLineType {
                name: name.to_string(),
            })
    }

    /// Iterates over line types in name order.
    pub fn line_types(&self) -> impl Iterator<Item = (&str, &LineType)> {
        self.line_types.iter().map(|(name, lt)| (name.as_str(), lt))
    }

    /// Returns the number of line types in the document.
    #[must_use]
    pub fn len(&self) -> usize {
        self.line_types.len()
    }

    /// Returns `true` if the document has no line types.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.line_types.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::support::units::{
        axial_stiffness, bend_stiffness, mass_per_length, newton_square_meters,
    };

    fn steel_riser() -> LineType {
        LineType::new(
            bend_stiffness(120.0),
            axial_stiffness(50_000.0),
            mass_per_length(7.8),
        )
    }

    #[test]
    fn lookup_is_exact_and_case_sensitive() {
        let mut model = Model::new();
        model.insert_line_type("Test line type", steel_riser());

        assert!(model.line_type("Test line type").is_some());
        assert!(model.line_type("test line type").is_none());
        assert!(model.line_type("Test line typ").is_none());
    }

    #[test]
    fn missing_line_type_reports_requested_name() {
        let mut model = Model::new();

        let err = model.line_type_mut("Test line type").unwrap_err();
        assert_eq!(
            err,
            ModelError::UnknownLineType {
                name: "Test line type".to_string()
            }
        );
    }

    #[test]
    fn mutation_through_exclusive_lookup() {
        let mut model = Model::new();
        model.insert_line_type("Test line type", steel_riser());

        let lt = model.line_type_mut("Test line type").unwrap();
        *lt = lt.with_bend_stiffness(bend_stiffness(260.0));

        let updated = model.line_type("Test line type").unwrap();
        assert_relative_eq!(newton_square_meters(updated.bend_stiffness), 260.0);
    }

    #[test]
    fn iteration_is_sorted_by_name() {
        let mut model = Model::new();
        model.insert_line_type("b", steel_riser());
        model.insert_line_type("a", steel_riser());
        model.insert_line_type("c", steel_riser());

        let names: Vec<_> = model.line_types().map(|(name, _)| name).collect();
        assert_eq!(names, ["a", "b", "c"]);
    }
}
