
//! Affine temperature scales. These cannot be expressed as a single
//! conversion factor, so temperature units bypass the linear
//! conversion of other kinds.

use super::kind::QuantityKind;
use crate::error::Error;
use crate::units::unit::UnitRecord;

const CELSIUS_OFFSET: f64 = 273.15;
const FAHRENHEIT_OFFSET: f64 = 32.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemperatureScale {
  Kelvin,
  Celsius,
  Fahrenheit,
  Rankine,
}

impl TemperatureScale {
  /// The scale named by a canonical temperature symbol.
  pub fn from_symbol(symbol: &str) -> Option<Self> {
    match symbol {
      "K" => Some(TemperatureScale::Kelvin),
      "°C" => Some(TemperatureScale::Celsius),
      "°F" => Some(TemperatureScale::Fahrenheit),
      "°R" => Some(TemperatureScale::Rankine),
      _ => None,
    }
  }

  /// The scale of a temperature record, or of any alias of one.
  pub fn from_record(record: &UnitRecord) -> Result<Self, Error> {
    Self::from_symbol(record.symbol())
      .ok_or_else(|| Error::unit_not_found(record.symbol(), QuantityKind::Temperature))
  }

  /// Resolves a unit string through the temperature table. There is
  /// no metric-prefix fallback.
  pub fn resolve(unit: &str) -> Result<Self, Error> {
    let record = QuantityKind::Temperature.unit_table()?
      .find_unit(unit)
      .ok_or_else(|| Error::unit_not_found(unit, QuantityKind::Temperature))?;
    Self::from_record(record)
  }

  pub fn symbol(self) -> &'static str {
    match self {
      TemperatureScale::Kelvin => "K",
      TemperatureScale::Celsius => "°C",
      TemperatureScale::Fahrenheit => "°F",
      TemperatureScale::Rankine => "°R",
    }
  }

  pub fn to_kelvin(self, value: f64) -> f64 {
    match self {
      TemperatureScale::Kelvin => value,
      TemperatureScale::Celsius => value + CELSIUS_OFFSET,
      TemperatureScale::Fahrenheit => (value - FAHRENHEIT_OFFSET) * 5.0 / 9.0 + CELSIUS_OFFSET,
      TemperatureScale::Rankine => value * 5.0 / 9.0,
    }
  }

  pub fn from_kelvin(self, kelvin: f64) -> f64 {
    match self {
      TemperatureScale::Kelvin => kelvin,
      TemperatureScale::Celsius => kelvin - CELSIUS_OFFSET,
      TemperatureScale::Fahrenheit => (kelvin - CELSIUS_OFFSET) * 9.0 / 5.0 + FAHRENHEIT_OFFSET,
      TemperatureScale::Rankine => kelvin * 9.0 / 5.0,
    }
  }
}

pub fn to_kelvin(value: f64, unit: &str) -> Result<f64, Error> {
  Ok(TemperatureScale::resolve(unit)?.to_kelvin(value))
}

pub fn from_kelvin(kelvin: f64, unit: &str) -> Result<f64, Error> {
  Ok(TemperatureScale::resolve(unit)?.from_kelvin(kelvin))
}
