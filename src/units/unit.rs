
use std::fmt::{self, Formatter, Display};

/// A named unit of some quantity kind, convertible to the native unit
/// of that kind by a linear factor.
///
/// The canonical symbol is always the first alias. Aliases are only
/// ever appended, and only while a [`UnitTable`](super::table::UnitTable)
/// is being populated.
#[derive(Debug, Clone, PartialEq)]
pub struct UnitRecord {
  symbol: String,
  /// The amount of the native unit that is equal to one of this unit.
  conversion_factor: f64,
  aliases: Vec<String>,
}

impl UnitRecord {
  /// Constructs a new unit record, given the canonical symbol and the
  /// conversion factor to get to the native unit.
  pub fn new(symbol: impl Into<String>, conversion_factor: f64) -> Self {
    let symbol = symbol.into();
    Self {
      aliases: vec![symbol.clone()],
      symbol,
      conversion_factor,
    }
  }

  /// A record standing in for a unit string which was resolved by
  /// metric-prefix arithmetic rather than by a table entry.
  pub fn synthetic(symbol: impl Into<String>) -> Self {
    Self::new(symbol, 1.0)
  }

  pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
    self.aliases.push(alias.into());
    self
  }

  pub fn with_aliases<I, S>(mut self, aliases: I) -> Self
  where I: IntoIterator<Item = S>,
        S: Into<String> {
    self.aliases.extend(aliases.into_iter().map(Into::into));
    self
  }

  pub fn symbol(&self) -> &str {
    &self.symbol
  }

  pub fn conversion_factor(&self) -> f64 {
    self.conversion_factor
  }

  /// All names for this unit, including the symbol itself.
  pub fn aliases(&self) -> &[String] {
    &self.aliases
  }

  /// Exact, case-sensitive alias test.
  pub fn is_alias(&self, name: &str) -> bool {
    self.aliases.iter().any(|alias| alias == name)
  }

  /// Converts an amount of this unit into the native unit.
  pub fn to_native(&self, amount: f64) -> f64 {
    amount * self.conversion_factor
  }

  /// Converts an amount of the native unit into this unit.
  pub fn from_native(&self, amount: f64) -> f64 {
    amount / self.conversion_factor
  }
}

impl Display for UnitRecord {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    write!(f, "{}", self.symbol)
  }
}
