
//! Physical quantities: a value in some unit of a [`QuantityKind`],
//! conversion between the units of a kind, and derivation of new
//! kinds by multiplication, division and exponentiation.

mod angle;
mod base;
pub mod catalogue;
pub mod derivation;
pub mod derived;
pub mod kind;
pub mod serialization;
pub mod temperature;

pub use base::{Quantity, DEFAULT_EPSILON};
pub use derivation::Operation;
pub use kind::{QuantityKind, UnknownKindError};
pub use serialization::QuantityRecord;
pub use temperature::TemperatureScale;
