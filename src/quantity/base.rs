
use super::kind::QuantityKind;
use super::serialization::QuantityRecord;
use super::temperature::TemperatureScale;
use crate::error::Error;
use crate::units::prefix::convert_si_unit;
use crate::units::unit::UnitRecord;

use approx::{AbsDiffEq, RelativeEq};
use serde::{Serialize, Deserialize};

use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt::{self, Formatter, Display};

/// Tolerance used by [`Quantity::equals`].
pub const DEFAULT_EPSILON: f64 = 1e-10;

/// A physical quantity of some [`QuantityKind`].
///
/// The value and unit supplied at construction are kept verbatim for
/// display. Every computation works on the native value, which is
/// the same amount expressed in the first unit of the kind's table.
/// Quantities are immutable; every operation produces a new one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "QuantityRecord", into = "QuantityRecord")]
pub struct Quantity {
  kind: QuantityKind,
  original_value: f64,
  original_unit: Cow<'static, UnitRecord>,
  native_value: f64,
  native_unit: &'static UnitRecord,
}

impl Quantity {
  /// Constructs a quantity from a value and the name of its unit.
  ///
  /// The unit is first matched against the aliases of the kind's
  /// table. Failing that, kinds with a metric base symbol accept any
  /// metric-prefixed form of it (`km`, `mA`, `GPa`, ...). The
  /// returned error is always [`Error::UnitNotFound`] in that case,
  /// not the reason the prefix could not be understood.
  pub fn new(kind: QuantityKind, value: f64, unit: &str) -> Result<Self, Error> {
    let table = kind.unit_table()?;
    if let Some(record) = table.find_unit(unit) {
      return Self::from_table_record(kind, value, record);
    }
    let Some(base_symbol) = kind.si_base_symbol() else {
      return Err(Error::unit_not_found(unit, kind));
    };
    let native_unit = table.native_unit();
    match convert_si_unit(value, unit, native_unit.symbol(), base_symbol) {
      Ok(native_value) => Ok(Self {
        kind,
        original_value: value,
        original_unit: Cow::Owned(UnitRecord::synthetic(unit)),
        native_value,
        native_unit,
      }),
      Err(err) => {
        log::debug!("Unit '{}' is not a metric form of '{}': {}", unit, base_symbol, err);
        Err(Error::unit_not_found(unit, kind))
      }
    }
  }

  /// Constructs a quantity from a unit record, resolved by its
  /// symbol.
  pub fn from_record(kind: QuantityKind, value: f64, record: &UnitRecord) -> Result<Self, Error> {
    Self::new(kind, value, record.symbol())
  }

  /// Constructs a quantity directly in the native unit of `kind`.
  pub fn from_native(kind: QuantityKind, native_value: f64) -> Result<Self, Error> {
    let native_unit = kind.unit_table()?.native_unit();
    Ok(Self::in_native_unit(kind, native_value, native_unit))
  }

  fn from_table_record(kind: QuantityKind, value: f64, record: &'static UnitRecord) -> Result<Self, Error> {
    let native_value = if kind == QuantityKind::Temperature {
      TemperatureScale::from_record(record)?.to_kelvin(value)
    } else {
      record.to_native(value)
    };
    Ok(Self {
      kind,
      original_value: value,
      original_unit: Cow::Borrowed(record),
      native_value,
      native_unit: kind.unit_table()?.native_unit(),
    })
  }

  fn in_native_unit(kind: QuantityKind, native_value: f64, native_unit: &'static UnitRecord) -> Self {
    Self {
      kind,
      original_value: native_value,
      original_unit: Cow::Borrowed(native_unit),
      native_value,
      native_unit,
    }
  }

  /// A quantity of the same kind as `self` with the given native
  /// value.
  pub(super) fn with_native_value(&self, native_value: f64) -> Self {
    Self::in_native_unit(self.kind, native_value, self.native_unit)
  }

  pub fn kind(&self) -> QuantityKind {
    self.kind
  }

  pub fn original_value(&self) -> f64 {
    self.original_value
  }

  pub fn original_unit(&self) -> &UnitRecord {
    &self.original_unit
  }

  pub fn native_value(&self) -> f64 {
    self.native_value
  }

  pub fn native_unit(&self) -> &'static UnitRecord {
    self.native_unit
  }

  /// The amount of this quantity in the named unit.
  pub fn to_unit(&self, unit: &str) -> Result<f64, Error> {
    if self.kind == QuantityKind::Temperature {
      return Ok(TemperatureScale::resolve(unit)?.from_kelvin(self.native_value));
    }
    if let Some(record) = self.kind.unit_table()?.find_unit(unit) {
      return Ok(record.from_native(self.native_value));
    }
    let Some(base_symbol) = self.kind.si_base_symbol() else {
      return Err(Error::unit_not_found(unit, self.kind));
    };
    convert_si_unit(self.native_value, self.native_unit.symbol(), unit, base_symbol)
      .map_err(|err| {
        log::debug!("Unit '{}' is not a metric form of '{}': {}", unit, base_symbol, err);
        Error::unit_not_found(unit, self.kind)
      })
  }

  /// The amount of this quantity in the given unit. Temperature
  /// records named by any alias of a scale convert on that scale.
  pub fn to_unit_record(&self, record: &UnitRecord) -> f64 {
    if self.kind == QuantityKind::Temperature {
      if let Ok(scale) = TemperatureScale::resolve(record.symbol()) {
        return scale.from_kelvin(self.native_value);
      }
    }
    record.from_native(self.native_value)
  }

  /// The same quantity, expressed in a different unit.
  pub fn convert(&self, unit: &str) -> Result<Self, Error> {
    let value = self.to_unit(unit)?;
    let converted = Self::new(self.kind, value, unit)?;
    Ok(Self { native_value: self.native_value, ..converted })
  }

  /// The same quantity, expressed in the native unit.
  pub fn to_native_unit(&self) -> Self {
    self.with_native_value(self.native_value)
  }

  pub fn add(&self, other: &Quantity) -> Result<Self, Error> {
    self.check_same_kind(other)?;
    Ok(self.with_native_value(self.native_value + other.native_value))
  }

  pub fn subtract(&self, other: &Quantity) -> Result<Self, Error> {
    self.check_same_kind(other)?;
    Ok(self.with_native_value(self.native_value - other.native_value))
  }

  fn check_same_kind(&self, other: &Quantity) -> Result<(), Error> {
    if self.kind == other.kind {
      Ok(())
    } else {
      Err(Error::IncompatibleTypes { left: self.kind, right: other.kind })
    }
  }

  pub fn compare_to(&self, other: &Quantity) -> Result<Ordering, Error> {
    self.check_same_kind(other)?;
    self.native_value.partial_cmp(&other.native_value).ok_or(Error::NotComparable)
  }

  pub fn greater_than(&self, other: &Quantity) -> Result<bool, Error> {
    Ok(self.compare_to(other)? == Ordering::Greater)
  }

  pub fn less_than(&self, other: &Quantity) -> Result<bool, Error> {
    Ok(self.compare_to(other)? == Ordering::Less)
  }

  pub fn greater_or_equal(&self, other: &Quantity) -> Result<bool, Error> {
    Ok(self.compare_to(other)? != Ordering::Less)
  }

  pub fn less_or_equal(&self, other: &Quantity) -> Result<bool, Error> {
    Ok(self.compare_to(other)? != Ordering::Greater)
  }

  /// Equality of native values, within [`DEFAULT_EPSILON`].
  pub fn equals(&self, other: &Quantity) -> Result<bool, Error> {
    self.equals_within(other, DEFAULT_EPSILON)
  }

  pub fn equals_within(&self, other: &Quantity, epsilon: f64) -> Result<bool, Error> {
    self.check_same_kind(other)?;
    Ok((self.native_value - other.native_value).abs() < epsilon)
  }
}

impl Display for Quantity {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    write!(f, "{} {}", self.original_value, self.original_unit.symbol())
  }
}

impl AbsDiffEq for Quantity {
  type Epsilon = f64;

  fn default_epsilon() -> f64 {
    <f64 as AbsDiffEq>::default_epsilon()
  }

  fn abs_diff_eq(&self, other: &Quantity, epsilon: f64) -> bool {
    self.kind == other.kind && self.native_value.abs_diff_eq(&other.native_value, epsilon)
  }
}

impl RelativeEq for Quantity {
  fn default_max_relative() -> f64 {
    <f64 as RelativeEq>::default_max_relative()
  }

  fn relative_eq(&self, other: &Quantity, epsilon: f64, max_relative: f64) -> bool {
    self.kind == other.kind && self.native_value.relative_eq(&other.native_value, epsilon, max_relative)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  use approx::{assert_abs_diff_eq, assert_relative_eq, assert_relative_ne};

  fn length(value: f64, unit: &str) -> Quantity {
    Quantity::new(QuantityKind::Length, value, unit).unwrap()
  }

  #[test]
  fn test_construct_from_symbol() {
    let q = length(3.0, "ft");
    assert_eq!(q.kind(), QuantityKind::Length);
    assert_eq!(q.original_value(), 3.0);
    assert_eq!(q.original_unit().symbol(), "ft");
    assert_abs_diff_eq!(q.native_value(), 0.9144, epsilon = 1e-12);
    assert_eq!(q.native_unit().symbol(), "m");
  }

  #[test]
  fn test_construct_from_alias_keeps_canonical_record() {
    let q = length(2.0, "feet");
    assert_eq!(q.original_unit().symbol(), "ft");
    assert_abs_diff_eq!(q.native_value(), 0.6096, epsilon = 1e-12);
  }

  #[test]
  fn test_construct_with_metric_prefix() {
    let q = length(2.5, "km");
    assert_eq!(q.original_unit().symbol(), "km");
    assert_eq!(q.original_unit().conversion_factor(), 1.0);
    assert_relative_eq!(q.native_value(), 2500.0);

    let q = Quantity::new(QuantityKind::Mass, 10.0, "kg").unwrap();
    assert_relative_eq!(q.native_value(), 10000.0);
  }

  #[test]
  fn test_construct_unknown_unit() {
    assert_eq!(
      Quantity::new(QuantityKind::Length, 1.0, "furlong"),
      Err(Error::unit_not_found("furlong", QuantityKind::Length)),
    );
    // Bad prefixes surface as the outer error.
    assert_eq!(
      Quantity::new(QuantityKind::Length, 1.0, "xm"),
      Err(Error::unit_not_found("xm", QuantityKind::Length)),
    );
    assert_eq!(
      Quantity::new(QuantityKind::Angle, 1.0, "krad"),
      Err(Error::unit_not_found("krad", QuantityKind::Angle)),
    );
  }

  #[test]
  fn test_from_native() {
    let q = Quantity::from_native(QuantityKind::Energy, 42.0).unwrap();
    assert_eq!(q.original_value(), 42.0);
    assert_eq!(q.original_unit().symbol(), "J");
    assert_eq!(q.native_value(), 42.0);
  }

  #[test]
  fn test_from_record() {
    let record = UnitRecord::new("in", 0.0254);
    let q = Quantity::from_record(QuantityKind::Length, 10.0, &record).unwrap();
    assert_abs_diff_eq!(q.native_value(), 0.254, epsilon = 1e-12);
  }

  #[test]
  fn test_to_unit() {
    let q = length(1.0, "m");
    assert_abs_diff_eq!(q.to_unit("ft").unwrap(), 3.280839895013123, epsilon = 1e-12);
    assert_relative_eq!(q.to_unit("cm").unwrap(), 100.0);
    assert_relative_eq!(q.to_unit("mm").unwrap(), 1000.0);
    assert_eq!(q.to_unit("parsec"), Err(Error::unit_not_found("parsec", QuantityKind::Length)));
  }

  #[test]
  fn test_to_unit_area_with_prefix() {
    let q = Quantity::new(QuantityKind::Area, 1.0, "km²").unwrap();
    assert_relative_eq!(q.to_unit("cm²").unwrap(), 1e10, max_relative = 1e-12);
    assert_relative_eq!(q.to_unit("ha").unwrap(), 100.0, max_relative = 1e-12);
  }

  #[test]
  fn test_compound_units_are_not_synthesized() {
    let q = Quantity::new(QuantityKind::Velocity, 1.0, "m/s").unwrap();
    assert_eq!(q.to_unit("ft/h"), Err(Error::unit_not_found("ft/h", QuantityKind::Velocity)));
  }

  #[test]
  fn test_to_unit_record() {
    let q = length(1.0, "in");
    assert_abs_diff_eq!(q.to_unit_record(&UnitRecord::new("cm", 0.01)), 2.54, epsilon = 1e-12);
  }

  #[test]
  fn test_temperature_conversion() {
    let q = Quantity::new(QuantityKind::Temperature, 0.0, "°C").unwrap();
    assert_abs_diff_eq!(q.native_value(), 273.15);
    assert_abs_diff_eq!(q.to_unit("K").unwrap(), 273.15);
    assert_abs_diff_eq!(q.to_unit("°F").unwrap(), 32.0, epsilon = 1e-10);

    let q = Quantity::new(QuantityKind::Temperature, 32.0, "°F").unwrap();
    assert_abs_diff_eq!(q.to_unit("°C").unwrap(), 0.0, epsilon = 1e-10);
    assert_abs_diff_eq!(q.to_unit_record(&UnitRecord::new("°C", 1.0)), 0.0, epsilon = 1e-10);
  }

  #[test]
  fn test_temperature_to_alias_record() {
    let q = Quantity::new(QuantityKind::Temperature, 0.0, "°C").unwrap();
    assert_abs_diff_eq!(q.to_unit_record(&UnitRecord::new("celsius", 1.0)), 0.0, epsilon = 1e-10);
    assert_abs_diff_eq!(q.to_unit_record(&UnitRecord::new("F", 1.0)), 32.0, epsilon = 1e-10);
    assert_abs_diff_eq!(q.to_unit_record(&UnitRecord::new("Rankine", 1.0)), 491.67, epsilon = 1e-10);
    assert_abs_diff_eq!(q.to_unit_record(&UnitRecord::new("kelvin", 1.0)), 273.15, epsilon = 1e-10);
  }

  #[test]
  fn test_convert() {
    let q = length(1.0, "mi").convert("ft").unwrap();
    assert_eq!(q.original_unit().symbol(), "ft");
    assert_relative_eq!(q.original_value(), 5280.0, max_relative = 1e-12);
    assert_eq!(q.native_value(), 1609.344);
  }

  #[test]
  fn test_to_native_unit() {
    let q = length(12.0, "in").to_native_unit();
    assert_eq!(q.original_unit().symbol(), "m");
    assert_abs_diff_eq!(q.original_value(), 0.3048, epsilon = 1e-12);
  }

  #[test]
  fn test_add_mixed_units() {
    let sum = length(1.0, "m").add(&length(50.0, "cm")).unwrap();
    assert_abs_diff_eq!(sum.to_unit("m").unwrap(), 1.5, epsilon = 1e-12);
    assert_eq!(sum.original_unit().symbol(), "m");
  }

  #[test]
  fn test_add_leaves_operands_unchanged() {
    let a = length(1.0, "ft");
    let b = length(2.0, "in");
    let sum = a.add(&b).unwrap();
    assert_eq!(a.original_value(), 1.0);
    assert_eq!(b.original_value(), 2.0);
    assert_abs_diff_eq!(sum.native_value(), 0.3048 + 0.0508, epsilon = 1e-12);
  }

  #[test]
  fn test_subtract() {
    let diff = length(1.0, "m").subtract(&length(1.0, "ft")).unwrap();
    assert_abs_diff_eq!(diff.native_value(), 0.6952, epsilon = 1e-12);
  }

  #[test]
  fn test_add_incompatible_kinds() {
    let mass = Quantity::new(QuantityKind::Mass, 1.0, "g").unwrap();
    assert_eq!(
      length(1.0, "m").add(&mass),
      Err(Error::IncompatibleTypes { left: QuantityKind::Length, right: QuantityKind::Mass }),
    );
  }

  #[test]
  fn test_compare() {
    let a = length(1.0, "m");
    let b = length(3.0, "ft");
    assert_eq!(a.compare_to(&b), Ok(Ordering::Greater));
    assert_eq!(b.compare_to(&a), Ok(Ordering::Less));
    assert_eq!(a.compare_to(&length(100.0, "cm")), Ok(Ordering::Equal));
    assert_eq!(a.greater_than(&b), Ok(true));
    assert_eq!(a.less_than(&b), Ok(false));
    assert_eq!(a.greater_or_equal(&a), Ok(true));
    assert_eq!(a.less_or_equal(&b), Ok(false));
  }

  #[test]
  fn test_compare_incompatible_kinds() {
    let mass = Quantity::new(QuantityKind::Mass, 1.0, "g").unwrap();
    assert_eq!(
      length(1.0, "m").compare_to(&mass),
      Err(Error::IncompatibleTypes { left: QuantityKind::Length, right: QuantityKind::Mass }),
    );
    length(1.0, "m").equals(&mass).unwrap_err();
  }

  #[test]
  fn test_compare_nan() {
    assert_eq!(length(f64::NAN, "m").compare_to(&length(1.0, "m")), Err(Error::NotComparable));
  }

  #[test]
  fn test_equals() {
    assert_eq!(length(12.0, "in").equals(&length(1.0, "ft")), Ok(true));
    assert_eq!(length(1.0, "m").equals(&length(1.001, "m")), Ok(false));
    assert_eq!(length(1.0, "m").equals_within(&length(1.001, "m"), 0.01), Ok(true));
  }

  #[test]
  fn test_display() {
    assert_eq!(length(2.5, "feet").to_string(), "2.5 ft");
    assert_eq!(length(3.0, "km").to_string(), "3 km");
  }

  #[test]
  fn test_approx_traits() {
    assert_relative_eq!(length(12.0, "in"), length(1.0, "ft"));
    let mass = Quantity::new(QuantityKind::Mass, 1.0, "g").unwrap();
    assert_relative_ne!(length(1.0, "m"), mass);
  }
}
