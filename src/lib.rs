//! # Moorline
//!
//! Batch parameter updates for mooring line model files.
//!
//! ## Crate layout
//!
//! - [`batch`]: The updater that drives the scan → load → mutate → save
//!   loop over a directory of model files.
//! - [`engine`]: The persistence seam ([`engine::Engine`]) and the
//!   YAML-backed engine that implements it.
//! - [`model`]: In-memory model documents and their line types.
//! - [`support`]: Supporting utilities used across the crate, currently
//!   the [`uom`] quantity extensions in [`support::units`].
//!
//! The accompanying binary wires these together with fixed parameters:
//! every `.dat` file in the current directory gets the bend stiffness of
//! its `"Test line type"` set to 260 N·m² and is saved back in place.

pub mod batch;
pub mod engine;
pub mod model;
pub mod support;
