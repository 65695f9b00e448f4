
use super::catalogue::default_units;
use crate::error::Error;
use crate::units::dimension::{BaseDimension, Dimension};
use crate::units::table::{UnitTable, UnitTableError};

use num::One;
use num::pow::Pow;
use once_cell::sync::OnceCell;
use thiserror::Error;

use std::fmt::{self, Formatter, Display};
use std::str::FromStr;

/// The closed set of physical quantity kinds. Every [`Quantity`]
/// carries exactly one of these as its runtime type tag.
///
/// [`Quantity`]: super::Quantity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuantityKind {
  Length,
  Mass,
  Time,
  Temperature,
  Area,
  Volume,
  Force,
  Energy,
  Power,
  Pressure,
  Velocity,
  Acceleration,
  Current,
  Voltage,
  Resistance,
  LuminousIntensity,
  AmountOfSubstance,
  Angle,
  Frequency,
  Charge,
  Density,
  Torque,
  Capacitance,
  Inductance,
  MagneticFlux,
}

pub const NKINDS: usize = 25;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unknown quantity kind '{name}'")]
pub struct UnknownKindError {
  pub name: String,
}

type TableCell = OnceCell<Result<UnitTable, UnitTableError>>;

#[allow(clippy::declare_interior_mutable_const)] // Only used as an array initializer.
const EMPTY_TABLE: TableCell = OnceCell::new();

/// One lazily-populated table per kind.
static UNIT_TABLES: [TableCell; NKINDS] = [EMPTY_TABLE; NKINDS];

impl QuantityKind {
  /// Every kind, in the order in which the free-text parser tries
  /// them.
  pub const ALL: [QuantityKind; NKINDS] = [
    QuantityKind::Length,
    QuantityKind::Mass,
    QuantityKind::Time,
    QuantityKind::Temperature,
    QuantityKind::Area,
    QuantityKind::Volume,
    QuantityKind::Force,
    QuantityKind::Energy,
    QuantityKind::Power,
    QuantityKind::Pressure,
    QuantityKind::Velocity,
    QuantityKind::Acceleration,
    QuantityKind::Current,
    QuantityKind::Voltage,
    QuantityKind::Resistance,
    QuantityKind::LuminousIntensity,
    QuantityKind::AmountOfSubstance,
    QuantityKind::Angle,
    QuantityKind::Frequency,
    QuantityKind::Charge,
    QuantityKind::Density,
    QuantityKind::Torque,
    QuantityKind::Capacitance,
    QuantityKind::Inductance,
    QuantityKind::MagneticFlux,
  ];

  pub fn name(self) -> &'static str {
    match self {
      QuantityKind::Length => "Length",
      QuantityKind::Mass => "Mass",
      QuantityKind::Time => "Time",
      QuantityKind::Temperature => "Temperature",
      QuantityKind::Area => "Area",
      QuantityKind::Volume => "Volume",
      QuantityKind::Force => "Force",
      QuantityKind::Energy => "Energy",
      QuantityKind::Power => "Power",
      QuantityKind::Pressure => "Pressure",
      QuantityKind::Velocity => "Velocity",
      QuantityKind::Acceleration => "Acceleration",
      QuantityKind::Current => "Current",
      QuantityKind::Voltage => "Voltage",
      QuantityKind::Resistance => "Resistance",
      QuantityKind::LuminousIntensity => "LuminousIntensity",
      QuantityKind::AmountOfSubstance => "AmountOfSubstance",
      QuantityKind::Angle => "Angle",
      QuantityKind::Frequency => "Frequency",
      QuantityKind::Charge => "Charge",
      QuantityKind::Density => "Density",
      QuantityKind::Torque => "Torque",
      QuantityKind::Capacitance => "Capacitance",
      QuantityKind::Inductance => "Inductance",
      QuantityKind::MagneticFlux => "MagneticFlux",
    }
  }

  /// The symbol that metric prefixes attach to, for kinds which
  /// accept prefixed units outside their table. Temperature (affine
  /// scales) and Angle (no metric multiples) return `None`.
  pub fn si_base_symbol(self) -> Option<&'static str> {
    match self {
      QuantityKind::Length => Some("m"),
      QuantityKind::Mass => Some("g"),
      QuantityKind::Time => Some("s"),
      QuantityKind::Temperature => None,
      QuantityKind::Area => Some("m²"),
      QuantityKind::Volume => Some("m³"),
      QuantityKind::Force => Some("N"),
      QuantityKind::Energy => Some("J"),
      QuantityKind::Power => Some("W"),
      QuantityKind::Pressure => Some("Pa"),
      QuantityKind::Velocity => Some("m/s"),
      QuantityKind::Acceleration => Some("m/s²"),
      QuantityKind::Current => Some("A"),
      QuantityKind::Voltage => Some("V"),
      QuantityKind::Resistance => Some("Ω"),
      QuantityKind::LuminousIntensity => Some("cd"),
      QuantityKind::AmountOfSubstance => Some("mol"),
      QuantityKind::Angle => None,
      QuantityKind::Frequency => Some("Hz"),
      QuantityKind::Charge => Some("C"),
      QuantityKind::Density => Some("kg/m³"),
      QuantityKind::Torque => Some("N⋅m"),
      QuantityKind::Capacitance => Some("F"),
      QuantityKind::Inductance => Some("H"),
      QuantityKind::MagneticFlux => Some("Wb"),
    }
  }

  pub fn is_si_prefixable(self) -> bool {
    self.si_base_symbol().is_some()
  }

  /// The physical dimension of this kind. Energy and Torque share a
  /// dimension, and Angle has none.
  pub fn dimension(self) -> Dimension {
    use BaseDimension::*;
    match self {
      QuantityKind::Length => Length.into(),
      QuantityKind::Mass => Mass.into(),
      QuantityKind::Time => Time.into(),
      QuantityKind::Temperature => Temperature.into(),
      QuantityKind::Area => Length.pow(2),
      QuantityKind::Volume => Length.pow(3),
      QuantityKind::Force => Mass * Length / Time.pow(2),
      QuantityKind::Energy => Mass * Length.pow(2) / Time.pow(2),
      QuantityKind::Power => Mass * Length.pow(2) / Time.pow(3),
      QuantityKind::Pressure => Mass / Length / Time.pow(2),
      QuantityKind::Velocity => Length / Time,
      QuantityKind::Acceleration => Length / Time.pow(2),
      QuantityKind::Current => Current.into(),
      QuantityKind::Voltage => Mass * Length.pow(2) / Time.pow(3) / Current,
      QuantityKind::Resistance => Mass * Length.pow(2) / Time.pow(3) / Current.pow(2),
      QuantityKind::LuminousIntensity => LuminousIntensity.into(),
      QuantityKind::AmountOfSubstance => AmountOfSubstance.into(),
      QuantityKind::Angle => Dimension::one(),
      QuantityKind::Frequency => Time.pow(-1),
      QuantityKind::Charge => Current * Time,
      QuantityKind::Density => Mass / Length.pow(3),
      QuantityKind::Torque => Mass * Length.pow(2) / Time.pow(2),
      QuantityKind::Capacitance => Current.pow(2) * Time.pow(4) / Mass / Length.pow(2),
      QuantityKind::Inductance => Mass * Length.pow(2) / Time.pow(2) / Current.pow(2),
      QuantityKind::MagneticFlux => Mass * Length.pow(2) / Time.pow(2) / Current,
    }
  }

  /// The unit table of this kind, populated on first use.
  pub fn unit_table(self) -> Result<&'static UnitTable, Error> {
    UNIT_TABLES[self as usize]
      .get_or_init(|| {
        let table = UnitTable::new(default_units(self));
        if let Err(err) = &table {
          log::warn!("Unit table for {} is invalid: {}", self, err);
        }
        table
      })
      .as_ref()
      .map_err(|err| Error::UnitTable { kind: self, source: err.clone() })
  }
}

impl Display for QuantityKind {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    write!(f, "{}", self.name())
  }
}

impl FromStr for QuantityKind {
  type Err = UnknownKindError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    QuantityKind::ALL.into_iter()
      .find(|kind| kind.name() == s)
      .ok_or_else(|| UnknownKindError { name: s.to_owned() })
  }
}
