use uom::{
    si::{
        ISQ, Quantity, SI,
        area::square_meter,
        f64::{Area, Force, Length, Mass},
        force::newton,
        length::meter,
        mass::kilogram,
    },
    typenum::{N1, N2, P1, P3, Z0},
};

/// Bend stiffness (EI), N·m² in SI.
pub type BendStiffness = Quantity<ISQ<P3, P1, N2, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Axial stiffness (EA), which carries units of force.
pub type AxialStiffness = Force;

/// Mass per unit length, kg/m in SI.
pub type MassPerLength = Quantity<ISQ<N1, P1, Z0, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Constructs a [`BendStiffness`] from a magnitude in N·m².
#[must_use]
pub fn bend_stiffness(magnitude: f64) -> BendStiffness {
    Force::new::<newton>(magnitude) * Area::new::<square_meter>(1.0)
}

/// Returns the magnitude of a [`BendStiffness`] in N·m².
#[must_use]
pub fn newton_square_meters(value: BendStiffness) -> f64 {
    value.value
}

/// Constructs an [`AxialStiffness`] from a magnitude in N.
#[must_use]
pub fn axial_stiffness(magnitude: f64) -> AxialStiffness {
    Force::new::<newton>(magnitude)
}

/// Returns the magnitude of an [`AxialStiffness`] in N.
#[must_use]
pub fn newtons(value: AxialStiffness) -> f64 {
    value.value
}

/// Constructs a [`MassPerLength`] from a magnitude in kg/m.
#[must_use]
pub fn mass_per_length(magnitude: f64) -> MassPerLength {
    Mass::new::<kilogram>(magnitude) / Length::new::<meter>(1.0)
}

/// Returns the magnitude of a [`MassPerLength`] in kg/m.
#[must_use]
pub fn kilograms_per_meter(value: MassPerLength) -> f64 {
    value.value
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn magnitudes_round_trip() {
        assert_relative_eq!(newton_square_meters(bend_stiffness(260.0)), 260.0);
        assert_relative_eq!(newtons(axial_stiffness(1400.0)), 1400.0);
        assert_relative_eq!(kilograms_per_meter(mass_per_length(50.0)), 50.0);
    }

    #[test]
    fn bend_stiffness_has_force_times_area_dimensions() {
        let ei = Force::new::<newton>(2.0) * Area::new::<square_meter>(3.0);
        let expected: BendStiffness = bend_stiffness(6.0);
        assert_eq!(ei, expected);
    }
}
