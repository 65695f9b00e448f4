
use super::base::Quantity;
use super::kind::QuantityKind;
use crate::error::Error;

use std::f64::consts::{FRAC_PI_2, PI, TAU};

/// `value` modulo `period`, in `[0, period)`. `rem_euclid` rounds
/// tiny negative inputs up to `period` itself.
fn wrap(value: f64, period: f64) -> f64 {
  match value.rem_euclid(period) {
    wrapped if wrapped >= period => 0.0,
    wrapped => wrapped,
  }
}

impl Quantity {
  fn radians(&self) -> Result<f64, Error> {
    Error::expect_kind(QuantityKind::Angle, self.kind())?;
    Ok(self.native_value())
  }

  /// The same angle, in radians within `[0, 2π)`.
  pub fn normalize(&self) -> Result<Quantity, Error> {
    let radians = wrap(self.radians()?, TAU);
    Quantity::from_native(QuantityKind::Angle, radians)
  }

  /// The same angle, in degrees within `[0, 360)`.
  pub fn normalize_degrees(&self) -> Result<Quantity, Error> {
    let degrees = wrap(self.radians()?.to_degrees(), 360.0);
    Quantity::new(QuantityKind::Angle, degrees, "°")
  }

  pub fn complement(&self) -> Result<Quantity, Error> {
    Quantity::from_native(QuantityKind::Angle, FRAC_PI_2 - self.radians()?)
  }

  pub fn supplement(&self) -> Result<Quantity, Error> {
    Quantity::from_native(QuantityKind::Angle, PI - self.radians()?)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  use approx::assert_abs_diff_eq;

  fn degrees(value: f64) -> Quantity {
    Quantity::new(QuantityKind::Angle, value, "°").unwrap()
  }

  #[test]
  fn test_normalize() {
    assert_abs_diff_eq!(degrees(450.0).normalize().unwrap().native_value(), FRAC_PI_2, epsilon = 1e-12);
    assert_abs_diff_eq!(degrees(-90.0).normalize().unwrap().native_value(), 3.0 * FRAC_PI_2, epsilon = 1e-12);
    assert_abs_diff_eq!(degrees(0.0).normalize().unwrap().native_value(), 0.0);
  }

  #[test]
  fn test_normalize_degrees() {
    let angle = degrees(-30.0).normalize_degrees().unwrap();
    assert_eq!(angle.original_unit().symbol(), "°");
    assert_abs_diff_eq!(angle.original_value(), 330.0, epsilon = 1e-9);
    assert_abs_diff_eq!(degrees(405.0).normalize_degrees().unwrap().original_value(), 45.0, epsilon = 1e-9);
  }

  #[test]
  fn test_normalize_tiny_negative_stays_below_full_turn() {
    let angle = Quantity::from_native(QuantityKind::Angle, -1e-17).unwrap();
    let radians = angle.normalize().unwrap().native_value();
    assert!((0.0..TAU).contains(&radians), "{}", radians);
    let degrees = angle.normalize_degrees().unwrap().original_value();
    assert!((0.0..360.0).contains(&degrees), "{}", degrees);
  }

  #[test]
  fn test_complement_and_supplement() {
    assert_abs_diff_eq!(degrees(30.0).complement().unwrap().to_unit("°").unwrap(), 60.0, epsilon = 1e-9);
    assert_abs_diff_eq!(degrees(30.0).supplement().unwrap().to_unit("°").unwrap(), 150.0, epsilon = 1e-9);
  }

  #[test]
  fn test_requires_angle() {
    let length = Quantity::new(QuantityKind::Length, 1.0, "m").unwrap();
    assert_eq!(
      length.normalize(),
      Err(Error::UnexpectedKind { expected: QuantityKind::Angle, found: QuantityKind::Length }),
    );
    length.complement().unwrap_err();
    length.supplement().unwrap_err();
    length.normalize_degrees().unwrap_err();
  }
}
