
//! Dimensional derivation: the closed tables of products, quotients
//! and powers between quantity kinds.

use super::base::Quantity;
use super::kind::QuantityKind;
use crate::error::Error;

use std::fmt::{self, Formatter, Display};

/// Grams to kilograms, for products whose result unit is defined in
/// terms of kilograms.
const GRAMS_PER_KILOGRAM: f64 = 1000.0;

const TIME_SQUARED_HINT: &str = "divide by each time quantity in turn instead";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
  Multiply,
  Divide,
}

/// The kind produced by an entry of a derivation table, together
/// with the factor applied to the raw product of native values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Derived {
  pub kind: QuantityKind,
  pub scale: f64,
}

impl Derived {
  fn exact(kind: QuantityKind) -> Self {
    Self { kind, scale: 1.0 }
  }
}

impl Display for Operation {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    match self {
      Operation::Multiply => write!(f, "multiply"),
      Operation::Divide => write!(f, "divide"),
    }
  }
}

/// The kind of `left × right`. Force times length is either energy
/// or torque; it is torque only when `hint` asks for it.
pub fn product(left: QuantityKind, right: QuantityKind, hint: Option<QuantityKind>) -> Option<Derived> {
  use QuantityKind::*;
  let derived = match (left, right) {
    (Length, Length) => Derived::exact(Area),
    (Area, Length) => Derived::exact(Volume),
    (Mass, Acceleration) => Derived { kind: Force, scale: GRAMS_PER_KILOGRAM.recip() },
    (Force, Length) | (Length, Force) => {
      if hint == Some(Torque) {
        Derived::exact(Torque)
      } else {
        Derived::exact(Energy)
      }
    }
    (Current, Resistance) | (Resistance, Current) => Derived::exact(Voltage),
    (Voltage, Time) | (Time, Voltage) => Derived::exact(MagneticFlux),
    (Current, Time) | (Time, Current) => Derived::exact(Charge),
    _ => return None,
  };
  Some(derived)
}

/// The kind of `left ÷ right`.
pub fn quotient(left: QuantityKind, right: QuantityKind) -> Option<QuantityKind> {
  use QuantityKind::*;
  let kind = match (left, right) {
    (Length, Time) => Velocity,
    (Length, Velocity) => Time,
    (Velocity, Time) => Acceleration,
    (Energy, Time) => Power,
    (Force, Area) => Pressure,
    (Area, Length) => Length,
    (Volume, Length) => Area,
    (Volume, Area) => Length,
    (Voltage, Current) => Resistance,
    (Voltage, Resistance) => Current,
    (Charge, Voltage) => Capacitance,
    (MagneticFlux, Current) => Inductance,
    _ => return None,
  };
  Some(kind)
}

/// The kind of `base` raised to `exponent`, for exponents other than
/// zero and one.
pub fn power(base: QuantityKind, exponent: i32) -> Result<QuantityKind, Error> {
  match (base, exponent) {
    (QuantityKind::Length, 2) => Ok(QuantityKind::Area),
    (QuantityKind::Length, 3) => Ok(QuantityKind::Volume),
    (QuantityKind::Time, 2) => Err(Error::UnsupportedPower { kind: base, exponent, hint: Some(TIME_SQUARED_HINT) }),
    _ => Err(Error::UnsupportedPower { kind: base, exponent, hint: None }),
  }
}

impl Quantity {
  pub fn multiply(&self, other: &Quantity) -> Result<Quantity, Error> {
    self.multiply_as(other, None)
  }

  /// Multiplies two quantities. `hint` selects the result kind where
  /// a product is ambiguous.
  pub fn multiply_as(&self, other: &Quantity, hint: Option<QuantityKind>) -> Result<Quantity, Error> {
    let derived = product(self.kind(), other.kind(), hint).ok_or(Error::UnsupportedDimension {
      op: Operation::Multiply,
      left: self.kind(),
      right: other.kind(),
    })?;
    log::trace!("{} × {} -> {}", self.kind(), other.kind(), derived.kind);
    Quantity::from_native(derived.kind, self.native_value() * other.native_value() * derived.scale)
  }

  pub fn divide(&self, other: &Quantity) -> Result<Quantity, Error> {
    if other.native_value() == 0.0 {
      return Err(Error::DivisionByZero);
    }
    let kind = quotient(self.kind(), other.kind()).ok_or(Error::UnsupportedDimension {
      op: Operation::Divide,
      left: self.kind(),
      right: other.kind(),
    })?;
    log::trace!("{} ÷ {} -> {}", self.kind(), other.kind(), kind);
    Quantity::from_native(kind, self.native_value() / other.native_value())
  }

  pub fn power(&self, exponent: i32) -> Result<Quantity, Error> {
    match exponent {
      0 => Err(Error::InvalidExponent),
      1 => Ok(self.clone()),
      _ => {
        let kind = power(self.kind(), exponent)?;
        log::trace!("{}^{} -> {}", self.kind(), exponent, kind);
        Quantity::from_native(kind, self.native_value().powi(exponent))
      }
    }
  }
}
