//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all physical quantities on line types.
//! This module provides the quantities a line-type definition needs that
//! aren't included in [`uom`], plus raw-SI constructor and accessor helpers
//! used at the persistence boundary, where documents store plain `f64`
//! magnitudes:
//!
//! ```
//! use moorline::support::units::{bend_stiffness, newton_square_meters};
//!
//! let ei = bend_stiffness(260.0);
//! assert_eq!(newton_square_meters(ei), 260.0);
//! ```

mod quantities;

pub use quantities::{
    AxialStiffness, BendStiffness, MassPerLength, axial_stiffness, bend_stiffness,
    kilograms_per_meter, mass_per_length, newton_square_meters, newtons,
};
