
//! Named constructors for derived quantities. Each one checks the
//! kinds of its operands, so a misplaced argument is reported as an
//! [`Error::UnexpectedKind`] rather than an unsupported product.

use super::base::Quantity;
use super::kind::QuantityKind;
use crate::error::Error;

const GRAMS_PER_KILOGRAM: f64 = 1000.0;

fn expect(quantity: &Quantity, kind: QuantityKind) -> Result<(), Error> {
  Error::expect_kind(kind, quantity.kind())
}

fn nonzero(quantity: &Quantity) -> Result<f64, Error> {
  match quantity.native_value() {
    value if value == 0.0 => Err(Error::DivisionByZero),
    value => Ok(value),
  }
}

pub fn area_from_length(side: &Quantity) -> Result<Quantity, Error> {
  expect(side, QuantityKind::Length)?;
  side.power(2)
}

pub fn area_from_lengths(width: &Quantity, height: &Quantity) -> Result<Quantity, Error> {
  expect(width, QuantityKind::Length)?;
  expect(height, QuantityKind::Length)?;
  width.multiply(height)
}

pub fn volume_from_length(side: &Quantity) -> Result<Quantity, Error> {
  expect(side, QuantityKind::Length)?;
  side.power(3)
}

pub fn volume_from_area_and_length(area: &Quantity, length: &Quantity) -> Result<Quantity, Error> {
  expect(area, QuantityKind::Area)?;
  expect(length, QuantityKind::Length)?;
  area.multiply(length)
}

pub fn volume_from_lengths(width: &Quantity, height: &Quantity, depth: &Quantity) -> Result<Quantity, Error> {
  expect(depth, QuantityKind::Length)?;
  area_from_lengths(width, height)?.multiply(depth)
}

pub fn force_from_mass_and_acceleration(mass: &Quantity, acceleration: &Quantity) -> Result<Quantity, Error> {
  expect(mass, QuantityKind::Mass)?;
  expect(acceleration, QuantityKind::Acceleration)?;
  mass.multiply(acceleration)
}

pub fn energy_from_force_and_length(force: &Quantity, length: &Quantity) -> Result<Quantity, Error> {
  expect(force, QuantityKind::Force)?;
  expect(length, QuantityKind::Length)?;
  force.multiply_as(length, Some(QuantityKind::Energy))
}

pub fn torque_from_force_and_length(force: &Quantity, lever_arm: &Quantity) -> Result<Quantity, Error> {
  expect(force, QuantityKind::Force)?;
  expect(lever_arm, QuantityKind::Length)?;
  force.multiply_as(lever_arm, Some(QuantityKind::Torque))
}

pub fn power_from_energy_and_time(energy: &Quantity, time: &Quantity) -> Result<Quantity, Error> {
  expect(energy, QuantityKind::Energy)?;
  expect(time, QuantityKind::Time)?;
  energy.divide(time)
}

pub fn pressure_from_force_and_area(force: &Quantity, area: &Quantity) -> Result<Quantity, Error> {
  expect(force, QuantityKind::Force)?;
  expect(area, QuantityKind::Area)?;
  force.divide(area)
}

pub fn velocity_from_length_and_time(length: &Quantity, time: &Quantity) -> Result<Quantity, Error> {
  expect(length, QuantityKind::Length)?;
  expect(time, QuantityKind::Time)?;
  length.divide(time)
}

pub fn acceleration_from_velocity_and_time(velocity: &Quantity, time: &Quantity) -> Result<Quantity, Error> {
  expect(velocity, QuantityKind::Velocity)?;
  expect(time, QuantityKind::Time)?;
  velocity.divide(time)
}

/// Length over time squared, by dividing by the time twice.
pub fn acceleration_from_length_and_time(length: &Quantity, time: &Quantity) -> Result<Quantity, Error> {
  velocity_from_length_and_time(length, time)?.divide(time)
}

pub fn resistance_from_voltage_and_current(voltage: &Quantity, current: &Quantity) -> Result<Quantity, Error> {
  expect(voltage, QuantityKind::Voltage)?;
  expect(current, QuantityKind::Current)?;
  voltage.divide(current)
}

pub fn charge_from_current_and_time(current: &Quantity, time: &Quantity) -> Result<Quantity, Error> {
  expect(current, QuantityKind::Current)?;
  expect(time, QuantityKind::Time)?;
  current.multiply(time)
}

pub fn capacitance_from_charge_and_voltage(charge: &Quantity, voltage: &Quantity) -> Result<Quantity, Error> {
  expect(charge, QuantityKind::Charge)?;
  expect(voltage, QuantityKind::Voltage)?;
  charge.divide(voltage)
}

pub fn magnetic_flux_from_voltage_and_time(voltage: &Quantity, time: &Quantity) -> Result<Quantity, Error> {
  expect(voltage, QuantityKind::Voltage)?;
  expect(time, QuantityKind::Time)?;
  voltage.multiply(time)
}

/// The frequency of an event which recurs once per `period`.
pub fn frequency_from_period(period: &Quantity) -> Result<Quantity, Error> {
  expect(period, QuantityKind::Time)?;
  let seconds = nonzero(period)?;
  Quantity::from_native(QuantityKind::Frequency, seconds.recip())
}

pub fn density_from_mass_and_volume(mass: &Quantity, volume: &Quantity) -> Result<Quantity, Error> {
  expect(mass, QuantityKind::Mass)?;
  expect(volume, QuantityKind::Volume)?;
  let cubic_meters = nonzero(volume)?;
  let kilograms = mass.native_value() / GRAMS_PER_KILOGRAM;
  Quantity::from_native(QuantityKind::Density, kilograms / cubic_meters)
}
