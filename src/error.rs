
use crate::parsing::ParseQuantityError;
use crate::quantity::derivation::Operation;
use crate::quantity::kind::{QuantityKind, UnknownKindError};
use crate::units::prefix::InvalidSiUnit;
use crate::units::table::UnitTableError;

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
#[non_exhaustive]
pub enum Error {
  #[error("Unit '{unit}' not found for {kind}")]
  UnitNotFound {
    unit: String,
    kind: QuantityKind,
  },
  #[error("{0}")]
  InvalidSiUnit(#[from] InvalidSiUnit),
  #[error("Cannot divide by zero")]
  DivisionByZero,
  #[error("Cannot {op} {left} by {right}: no such derived quantity")]
  UnsupportedDimension {
    op: Operation,
    left: QuantityKind,
    right: QuantityKind,
  },
  #[error("Cannot raise {kind} to power {exponent}{}", .hint.map(|h| format!(": {}", h)).unwrap_or_default())]
  UnsupportedPower {
    kind: QuantityKind,
    exponent: i32,
    hint: Option<&'static str>,
  },
  #[error("Incompatible quantity kinds {left} and {right}")]
  IncompatibleTypes {
    left: QuantityKind,
    right: QuantityKind,
  },
  #[error("Cannot raise to power 0")]
  InvalidExponent,
  #[error("Quantities with a NaN value cannot be ordered")]
  NotComparable,
  #[error("Expected {expected}, got {found}")]
  UnexpectedKind {
    expected: QuantityKind,
    found: QuantityKind,
  },
  #[error("Invalid unit table for {kind}: {source}")]
  UnitTable {
    kind: QuantityKind,
    source: UnitTableError,
  },
  #[error("{0}")]
  UnknownKind(#[from] UnknownKindError),
  #[error("{0}")]
  Parse(#[from] ParseQuantityError),
}

impl Error {
  pub fn unit_not_found(unit: impl Into<String>, kind: QuantityKind) -> Self {
    Self::UnitNotFound { unit: unit.into(), kind }
  }

  /// Fails with [`Error::UnexpectedKind`] unless `found` is
  /// `expected`.
  pub fn expect_kind(expected: QuantityKind, found: QuantityKind) -> Result<(), Self> {
    if expected == found {
      Ok(())
    } else {
      Err(Self::UnexpectedKind { expected, found })
    }
  }
}
