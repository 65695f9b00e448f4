
//! Physical quantities with unit conversion and dimensional
//! analysis.
//!
//! A [`Quantity`] is a value in some unit of a [`QuantityKind`].
//! Quantities of the same kind convert, add and compare freely;
//! quantities of different kinds combine through a fixed table of
//! physically meaningful products and quotients.

pub mod error;
pub mod parsing;
pub mod quantity;
pub mod units;
pub mod util;

pub use error::Error;
pub use parsing::{parse_quantity, parse_quantity_as};
pub use quantity::{Quantity, QuantityKind};
pub use units::convert_si_unit;
