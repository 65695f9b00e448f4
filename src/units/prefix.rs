
//! Metric-prefix arithmetic for units that are not listed verbatim
//! in a unit table.

use phf::phf_map;
use thiserror::Error;

/// SI prefixes, quecto through quetta, mapped to their power of ten.
/// The empty prefix denotes the unprefixed base unit.
pub static SI_PREFIXES: phf::Map<&'static str, i32> = phf_map! {
  "" => 0,
  "k" => 3,
  "h" => 2,
  "da" => 1,
  "d" => -1,
  "c" => -2,
  "m" => -3,
  "μ" => -6,
  "n" => -9,
  "p" => -12,
  "f" => -15,
  "a" => -18,
  "z" => -21,
  "y" => -24,
  "r" => -27,
  "q" => -30,
  "M" => 6,
  "G" => 9,
  "T" => 12,
  "P" => 15,
  "E" => 18,
  "Z" => 21,
  "Y" => 24,
  "R" => 27,
  "Q" => 30,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MetricPrefix {
  pub prefix_name: &'static str,
  pub exponent: i32,
}

/// A unit string split into its metric prefix and the power the
/// prefix is raised to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PrefixedUnit {
  pub prefix: MetricPrefix,
  pub power: i32,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum InvalidSiUnit {
  #[error("Unit '{unit}' is not a prefixed form of '{base}'")]
  MissingBaseSymbol {
    unit: String,
    base: String,
  },
  #[error("Invalid metric prefix '{prefix}' in unit '{unit}'")]
  UnknownPrefix {
    prefix: String,
    unit: String,
  },
  #[error("Cannot convert '{from}' to '{to}': the units are raised to different powers")]
  PowerMismatch {
    from: String,
    to: String,
  },
}

const SQUARED: [char; 2] = ['²', '2'];
const CUBED: [char; 2] = ['³', '3'];

impl MetricPrefix {
  pub fn lookup(prefix_name: &str) -> Option<MetricPrefix> {
    SI_PREFIXES.get_entry(prefix_name)
      .map(|(prefix_name, exponent)| MetricPrefix { prefix_name: *prefix_name, exponent: *exponent })
  }

  /// The factor which converts an amount of a `self`-prefixed unit,
  /// raised to `power`, into the `target`-prefixed unit.
  pub fn factor_to(&self, target: &MetricPrefix, power: i32) -> f64 {
    10f64.powi(self.exponent - target.exponent).powi(power)
  }
}

/// The power carried by a base symbol: `m²` and `m2` are squared,
/// `m³` and `m3` are cubed. A compound symbol such as `m/s²` carries
/// its marker on the denominator, so the prefix (which attaches to
/// the leading atom) is linear.
pub fn base_power(base_symbol: &str) -> i32 {
  if is_compound(base_symbol) {
    return 1;
  }
  marker_power(base_symbol)
}

fn marker_power(symbol: &str) -> i32 {
  match symbol.chars().last() {
    Some(c) if SQUARED.contains(&c) => 2,
    Some(c) if CUBED.contains(&c) => 3,
    _ => 1,
  }
}

fn is_compound(symbol: &str) -> bool {
  symbol.contains(['/', '⋅', '·'])
}

/// Every spelling of `base_symbol` that a prefixed unit may end
/// with. A trailing power marker may be written either as a
/// superscript or as a plain digit.
fn base_spellings(base_symbol: &str) -> Vec<String> {
  let mut spellings = vec![base_symbol.to_owned()];
  let markers = match marker_power(base_symbol) {
    2 => SQUARED,
    3 => CUBED,
    _ => return spellings,
  };
  let mut chars = base_symbol.chars();
  chars.next_back();
  let stem = chars.as_str();
  spellings.extend(
    markers.iter()
      .map(|marker| format!("{}{}", stem, marker))
      .filter(|spelling| spelling != base_symbol),
  );
  spellings
}

/// Splits `unit` into a metric prefix and the `base_symbol` it
/// qualifies.
pub fn extract_prefix(unit: &str, base_symbol: &str) -> Result<PrefixedUnit, InvalidSiUnit> {
  let prefix_name = base_spellings(base_symbol)
    .iter()
    .find_map(|spelling| unit.strip_suffix(spelling.as_str()))
    .ok_or_else(|| InvalidSiUnit::MissingBaseSymbol {
      unit: unit.to_owned(),
      base: base_symbol.to_owned(),
    })?;
  let prefix = MetricPrefix::lookup(prefix_name).ok_or_else(|| InvalidSiUnit::UnknownPrefix {
    prefix: prefix_name.to_owned(),
    unit: unit.to_owned(),
  })?;
  Ok(PrefixedUnit { prefix, power: base_power(base_symbol) })
}

/// Converts `value` from one metric-prefixed form of `base_symbol`
/// to another, e.g. `km` to `mm` or `km²` to `cm²`.
pub fn convert_si_unit(value: f64, from_unit: &str, to_unit: &str, base_symbol: &str) -> Result<f64, InvalidSiUnit> {
  let from = extract_prefix(from_unit, base_symbol)?;
  let to = extract_prefix(to_unit, base_symbol)?;
  if from.power != to.power {
    return Err(InvalidSiUnit::PowerMismatch {
      from: from_unit.to_owned(),
      to: to_unit.to_owned(),
    });
  }
  Ok(value * from.prefix.factor_to(&to.prefix, from.power))
}

#[cfg(test)]
mod tests {
  use super::*;

  use approx::assert_relative_eq;

  #[test]
  fn test_lookup() {
    assert_eq!(MetricPrefix::lookup("k"), Some(MetricPrefix { prefix_name: "k", exponent: 3 }));
    assert_eq!(MetricPrefix::lookup("da").map(|p| p.exponent), Some(1));
    assert_eq!(MetricPrefix::lookup("μ").map(|p| p.exponent), Some(-6));
    assert_eq!(MetricPrefix::lookup("").map(|p| p.exponent), Some(0));
    assert_eq!(MetricPrefix::lookup("x"), None);
    assert_eq!(MetricPrefix::lookup("K"), None);
  }

  #[test]
  fn test_prefix_table_is_complete() {
    assert_eq!(SI_PREFIXES.len(), 25);
    assert_eq!(SI_PREFIXES.get("q"), Some(&-30));
    assert_eq!(SI_PREFIXES.get("Q"), Some(&30));
  }

  #[test]
  fn test_base_power() {
    assert_eq!(base_power("m"), 1);
    assert_eq!(base_power("m²"), 2);
    assert_eq!(base_power("m2"), 2);
    assert_eq!(base_power("m³"), 3);
    assert_eq!(base_power("m3"), 3);
    assert_eq!(base_power("m/s²"), 1);
    assert_eq!(base_power("N⋅m"), 1);
  }

  #[test]
  fn test_extract_prefix() {
    assert_eq!(extract_prefix("km", "m").map(|u| u.prefix.exponent), Ok(3));
    assert_eq!(extract_prefix("m", "m").map(|u| u.prefix.exponent), Ok(0));
    assert_eq!(extract_prefix("dam", "m").map(|u| u.prefix.exponent), Ok(1));
    assert_eq!(extract_prefix("kΩ", "Ω").map(|u| u.prefix.exponent), Ok(3));
    assert_eq!(extract_prefix("cm²", "m²").map(|u| (u.prefix.exponent, u.power)), Ok((-2, 2)));
    assert_eq!(extract_prefix("cm2", "m²").map(|u| (u.prefix.exponent, u.power)), Ok((-2, 2)));
    assert_eq!(extract_prefix("dm3", "m³").map(|u| (u.prefix.exponent, u.power)), Ok((-1, 3)));
  }

  #[test]
  fn test_extract_prefix_invalid() {
    assert_eq!(
      extract_prefix("xm", "m"),
      Err(InvalidSiUnit::UnknownPrefix { prefix: "x".to_owned(), unit: "xm".to_owned() }),
    );
    assert_eq!(
      extract_prefix("ft", "m"),
      Err(InvalidSiUnit::MissingBaseSymbol { unit: "ft".to_owned(), base: "m".to_owned() }),
    );
    extract_prefix("", "m").unwrap_err();
    extract_prefix("kkm", "m").unwrap_err();
    extract_prefix("Km", "m").unwrap_err();
    extract_prefix("km³", "m²").unwrap_err();
  }

  #[test]
  fn test_convert_base_to_kilo() {
    assert_relative_eq!(convert_si_unit(1000.0, "m", "km", "m").unwrap(), 1.0);
  }

  #[test]
  fn test_convert_kilo_to_milli() {
    assert_relative_eq!(convert_si_unit(1.0, "km", "mm", "m").unwrap(), 1_000_000.0);
  }

  #[test]
  fn test_convert_same_unit() {
    assert_eq!(convert_si_unit(500.0, "m", "m", "m"), Ok(500.0));
  }

  #[test]
  fn test_convert_milli_to_micro() {
    assert_relative_eq!(convert_si_unit(1.0, "mm", "μm", "m").unwrap(), 1000.0);
  }

  #[test]
  fn test_convert_large_and_small_exponents() {
    assert_relative_eq!(convert_si_unit(1.0, "Ym", "mm", "m").unwrap(), 1e27, max_relative = 1e-12);
    assert_relative_eq!(convert_si_unit(1.0, "fm", "pm", "m").unwrap(), 0.001, max_relative = 1e-12);
    assert_relative_eq!(convert_si_unit(1.0, "Qg", "qg", "g").unwrap(), 1e60, max_relative = 1e-12);
  }

  #[test]
  fn test_convert_squared_units() {
    assert_relative_eq!(convert_si_unit(1.0, "km²", "cm²", "m²").unwrap(), 1e10);
    assert_relative_eq!(convert_si_unit(1.0, "km2", "m²", "m²").unwrap(), 1e6);
  }

  #[test]
  fn test_convert_cubed_units() {
    assert_relative_eq!(convert_si_unit(1.0, "m³", "cm³", "m³").unwrap(), 1e6);
    assert_relative_eq!(convert_si_unit(2.0, "dm3", "m³", "m³").unwrap(), 0.002);
  }

  #[test]
  fn test_convert_compound_base_is_linear() {
    assert_relative_eq!(convert_si_unit(1.0, "km/s²", "m/s²", "m/s²").unwrap(), 1000.0);
    assert_relative_eq!(convert_si_unit(1.0, "kN⋅m", "N⋅m", "N⋅m").unwrap(), 1000.0);
  }

  #[test]
  fn test_convert_invalid_units() {
    convert_si_unit(1.0, "xm", "m", "m").unwrap_err();
    convert_si_unit(1.0, "m", "xm", "m").unwrap_err();
    convert_si_unit(1.0, "m³", "m²", "m²").unwrap_err();
  }
}
