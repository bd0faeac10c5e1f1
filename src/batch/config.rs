use crate::support::units::{BendStiffness, bend_stiffness};

/// Fixed parameters for a batch update run.
#[derive(Debug, Clone)]
pub struct BatchConfig {
    /// Literal, case-sensitive suffix a file name must end with to be
    /// processed. Compared against the whole name, so `".dat"` matches a
    /// file named exactly `.dat` and does not match `model.DAT`.
    pub suffix: String,

    /// Exact name of the line type to update in each model.
    pub line_type: String,

    /// Value written to the line type's bend stiffness, replacing
    /// whatever was there before.
    pub bend_stiffness: BendStiffness,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            suffix: ".dat".to_string(),
            line_type: "Test line type".to_string(),
            bend_stiffness: bend_stiffness(260.0),
        }
    }
}
