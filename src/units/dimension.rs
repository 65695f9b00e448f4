
use crate::util::zip_with;

use num::One;
use num::pow::Pow;

use std::ops::{Mul, Div};
use std::fmt::{self, Formatter, Display};

/// A dimension is a formal product and quotient of zero or more
/// [`BaseDimension`] values.
///
/// Every [`QuantityKind`](crate::quantity::QuantityKind) has exactly
/// one dimension, and the multiply/divide/power dispatch tables only
/// ever pair kinds whose dimensions combine correctly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Dimension {
  dims: [i64; NDIMS],
}

/// The seven SI base dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaseDimension {
  Length,
  Time,
  Mass,
  Temperature,
  Current,
  LuminousIntensity,
  AmountOfSubstance,
}

pub const NDIMS: usize = 7;

impl Dimension {
  pub fn singleton(base: BaseDimension) -> Self {
    let mut dims = [0; NDIMS];
    dims[base.dimension_index()] = 1;
    Self { dims }
  }

  pub fn get(&self, base: BaseDimension) -> i64 {
    self.dims[base.dimension_index()]
  }

  /// The base dimensions with a nonzero power, together with that
  /// power.
  pub fn components(&self) -> impl Iterator<Item = (BaseDimension, i64)> + '_ {
    BaseDimension::ALL.iter()
      .copied()
      .zip(self.dims.iter().copied())
      .filter(|(_, x)| *x != 0)
  }
}

impl BaseDimension {
  pub const ALL: [BaseDimension; NDIMS] = [
    BaseDimension::Length,
    BaseDimension::Time,
    BaseDimension::Mass,
    BaseDimension::Temperature,
    BaseDimension::Current,
    BaseDimension::LuminousIntensity,
    BaseDimension::AmountOfSubstance,
  ];

  fn dimension_index(self) -> usize {
    match self {
      BaseDimension::Length => 0,
      BaseDimension::Time => 1,
      BaseDimension::Mass => 2,
      BaseDimension::Temperature => 3,
      BaseDimension::Current => 4,
      BaseDimension::LuminousIntensity => 5,
      BaseDimension::AmountOfSubstance => 6,
    }
  }
}

impl From<BaseDimension> for Dimension {
  fn from(base: BaseDimension) -> Self {
    Dimension::singleton(base)
  }
}

impl Pow<i64> for Dimension {
  type Output = Dimension;

  fn pow(self, power: i64) -> Dimension {
    Dimension {
      dims: self.dims.map(|x| x * power),
    }
  }
}

impl Pow<i64> for BaseDimension {
  type Output = Dimension;

  fn pow(self, power: i64) -> Dimension {
    Dimension::singleton(self).pow(power)
  }
}

impl Mul for Dimension {
  type Output = Self;

  fn mul(self, rhs: Self) -> Self {
    Dimension {
      dims: zip_with(self.dims, rhs.dims, |a, b| a + b),
    }
  }
}

impl Mul<BaseDimension> for Dimension {
  type Output = Self;

  fn mul(self, rhs: BaseDimension) -> Self {
    self * Dimension::singleton(rhs)
  }
}

impl Div for Dimension {
  type Output = Self;

  fn div(self, rhs: Self) -> Self {
    Dimension {
      dims: zip_with(self.dims, rhs.dims, |a, b| a - b),
    }
  }
}

impl Div<BaseDimension> for Dimension {
  type Output = Self;

  fn div(self, rhs: BaseDimension) -> Self {
    self / Dimension::singleton(rhs)
  }
}

impl Mul for BaseDimension {
  type Output = Dimension;

  fn mul(self, rhs: Self) -> Dimension {
    Dimension::singleton(self) * Dimension::singleton(rhs)
  }
}

impl Mul<Dimension> for BaseDimension {
  type Output = Dimension;

  fn mul(self, rhs: Dimension) -> Dimension {
    Dimension::singleton(self) * rhs
  }
}

impl Div for BaseDimension {
  type Output = Dimension;

  fn div(self, rhs: Self) -> Dimension {
    Dimension::singleton(self) / Dimension::singleton(rhs)
  }
}

impl Div<Dimension> for BaseDimension {
  type Output = Dimension;

  fn div(self, rhs: Dimension) -> Dimension {
    Dimension::singleton(self) / rhs
  }
}

impl One for Dimension {
  fn one() -> Self {
    Self { dims: [0; NDIMS] }
  }

  fn is_one(&self) -> bool {
    self.dims.iter().all(|x| *x == 0)
  }
}

impl Display for BaseDimension {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    match self {
      BaseDimension::Length => write!(f, "length"),
      BaseDimension::Time => write!(f, "time"),
      BaseDimension::Mass => write!(f, "mass"),
      BaseDimension::Temperature => write!(f, "temperature"),
      BaseDimension::Current => write!(f, "current"),
      BaseDimension::LuminousIntensity => write!(f, "intensity"),
      BaseDimension::AmountOfSubstance => write!(f, "amount"),
    }
  }
}

impl Display for Dimension {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    let mut numerator: Vec<String> = Vec::new();
    let mut denominator: Vec<String> = Vec::new();
    for (dim, power) in self.components() {
      match power {
        1 => numerator.push(dim.to_string()),
        -1 => denominator.push(dim.to_string()),
        power if power > 0 => numerator.push(format!("{}^{}", dim, power)),
        power => denominator.push(format!("{}^{}", dim, -power)),
      }
    }
    if numerator.is_empty() {
      write!(f, "1")?;
    } else {
      write!(f, "{}", numerator.join(" "))?;
    }
    if !denominator.is_empty() {
      write!(f, " / {}", denominator.join(" "))?;
    }
    Ok(())
  }
}
