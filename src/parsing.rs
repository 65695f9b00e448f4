
//! Free-text parsing of quantities such as `"5 km"` or `"-40°F"`.

use crate::error::Error;
use crate::quantity::{Quantity, QuantityKind};

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use std::str::FromStr;

static QUANTITY_RE: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"^([+-]?[0-9]+(?:\.[0-9]+)?)\s*(.*)$").unwrap());

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseQuantityError {
  #[error("Expected a number followed by a unit, got '{input}'")]
  InvalidFormat { input: String },
  #[error("No unit given in '{input}'")]
  MissingUnit { input: String },
  #[error("Unrecognized unit '{unit}'")]
  UnrecognizedUnit { unit: String },
}

fn split_value_and_unit(input: &str) -> Result<(f64, &str), ParseQuantityError> {
  let input = input.trim();
  let invalid_format = || ParseQuantityError::InvalidFormat { input: input.to_owned() };
  let captures = QUANTITY_RE.captures(input).ok_or_else(invalid_format)?;
  let value = captures[1].parse::<f64>().map_err(|_| invalid_format())?;
  let unit = captures.get(2).map_or("", |m| m.as_str()).trim();
  if unit.is_empty() {
    return Err(ParseQuantityError::MissingUnit { input: input.to_owned() });
  }
  Ok((value, unit))
}

/// Parses a quantity of whichever kind first accepts the unit, in
/// the order of [`QuantityKind::ALL`]. Units shared between kinds
/// (`g` is both a mass and an acceleration) resolve to the earlier
/// kind.
pub fn parse_quantity(input: &str) -> Result<Quantity, Error> {
  let (value, unit) = split_value_and_unit(input)?;
  QuantityKind::ALL.into_iter()
    .find_map(|kind| Quantity::new(kind, value, unit).ok())
    .ok_or_else(|| ParseQuantityError::UnrecognizedUnit { unit: unit.to_owned() }.into())
}

/// Parses a quantity which must be of the given kind.
pub fn parse_quantity_as(input: &str, kind: QuantityKind) -> Result<Quantity, Error> {
  let (value, unit) = split_value_and_unit(input)?;
  Quantity::new(kind, value, unit)
}

impl FromStr for Quantity {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Error> {
    parse_quantity(s)
  }
}
