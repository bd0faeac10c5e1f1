use crate::support::units::{AxialStiffness, BendStiffness, MassPerLength};

/// A named reusable definition of a line's material and geometric
/// properties.
///
/// Line types describe slender structural elements (risers, mooring lines,
/// umbilicals) independently of where they are used in a model. All fields
/// are plain data; no physical consistency between them is enforced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineType {
    /// Resistance to bending (EI), N·m² in SI.
    pub bend_stiffness: BendStiffness,

    /// Resistance to stretching (EA), N in SI.
    pub axial_stiffness: AxialStiffness,

    /// Structural mass per unit length, kg/m in SI.
    pub mass_per_length: MassPerLength,
}

impl LineType {
    #[must_use]
    pub fn new(
        bend_stiffness: BendStiffness,
        axial_stiffness: AxialStiffness,
        mass_per_length: MassPerLength,
    ) -> Self {
        Self {
            bend_stiffness,
            axial_stiffness,
            mass_per_length,
        }
    }

    /// Returns this line type with its bend stiffness replaced.
    #[must_use]
    pub fn with_bend_stiffness(mut self, bend_stiffness: BendStiffness) -> Self {
        self.bend_stiffness = bend_stiffness;
        self
    }
}
