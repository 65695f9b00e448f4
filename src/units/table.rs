
use super::unit::UnitRecord;

use itertools::Itertools;
use thiserror::Error;

/// An ordered collection of [`UnitRecord`] values for one quantity
/// kind. The first record is the native unit of the kind.
#[derive(Debug, Clone, PartialEq)]
pub struct UnitTable {
  records: Vec<UnitRecord>,
}

#[derive(Debug, Clone, Error, PartialEq)]
#[non_exhaustive]
pub enum UnitTableError {
  #[error("Unit table is empty")]
  Empty,
  #[error("Unit '{symbol}' has invalid conversion factor {factor}")]
  InvalidFactor {
    symbol: String,
    factor: f64,
  },
  #[error("Alias '{alias}' is shared by more than one unit")]
  DuplicateAlias {
    alias: String,
  },
}

impl UnitTable {
  /// Builds a table from records in insertion order. Every factor
  /// must be finite and positive, and no alias may name two
  /// different records.
  pub fn new(records: impl IntoIterator<Item = UnitRecord>) -> Result<Self, UnitTableError> {
    let records: Vec<_> = records.into_iter().collect();
    if records.is_empty() {
      return Err(UnitTableError::Empty);
    }
    if let Some(record) = records.iter().find(|r| !(r.conversion_factor().is_finite() && r.conversion_factor() > 0.0)) {
      return Err(UnitTableError::InvalidFactor {
        symbol: record.symbol().to_owned(),
        factor: record.conversion_factor(),
      });
    }
    // A record may list the same alias twice; only cross-record
    // collisions are ambiguous.
    let duplicate = records.iter()
      .flat_map(|r| r.aliases().iter().unique())
      .duplicates()
      .next();
    if let Some(alias) = duplicate {
      return Err(UnitTableError::DuplicateAlias { alias: alias.to_owned() });
    }
    Ok(Self { records })
  }

  /// Finds the record which has `name` as an alias.
  pub fn find_unit(&self, name: &str) -> Option<&UnitRecord> {
    self.records.iter().find(|r| r.is_alias(name))
  }

  /// The first-registered record, in which all values of this kind
  /// are normalized.
  pub fn native_unit(&self) -> &UnitRecord {
    // Non-empty by construction.
    &self.records[0]
  }

  pub fn iter(&self) -> impl Iterator<Item = &UnitRecord> {
    self.records.iter()
  }

  pub fn symbols(&self) -> impl Iterator<Item = &str> {
    self.records.iter().map(UnitRecord::symbol)
  }

  pub fn len(&self) -> usize {
    self.records.len()
  }

  pub fn is_empty(&self) -> bool {
    self.records.is_empty()
  }
}

#[cfg(test)]
pub(crate) mod test_utils {
  use super::*;

  pub fn sample_table() -> UnitTable {
    UnitTable::new([
      UnitRecord::new("m", 1.0).with_aliases(["meter", "meters"]),
      UnitRecord::new("ft", 0.3048).with_aliases(["foot", "feet"]),
      UnitRecord::new("in", 0.0254).with_aliases(["inch", "inches"]),
    ]).unwrap()
  }
}
