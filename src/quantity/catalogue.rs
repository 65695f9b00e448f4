
//! The built-in units of every quantity kind.
//!
//! Each list begins with the native unit of its kind, which always
//! has a conversion factor of exactly one.

use super::kind::QuantityKind;
use crate::units::unit::UnitRecord;

use std::f64::consts::PI;

pub fn default_units(kind: QuantityKind) -> Vec<UnitRecord> {
  match kind {
    QuantityKind::Length => length_units(),
    QuantityKind::Mass => mass_units(),
    QuantityKind::Time => time_units(),
    QuantityKind::Temperature => temperature_units(),
    QuantityKind::Area => area_units(),
    QuantityKind::Volume => volume_units(),
    QuantityKind::Force => force_units(),
    QuantityKind::Energy => energy_units(),
    QuantityKind::Power => power_units(),
    QuantityKind::Pressure => pressure_units(),
    QuantityKind::Velocity => velocity_units(),
    QuantityKind::Acceleration => acceleration_units(),
    QuantityKind::Current => vec![
      UnitRecord::new("A", 1.0).with_aliases(["ampere", "amperes", "amp", "amps"]),
    ],
    QuantityKind::Voltage => vec![
      UnitRecord::new("V", 1.0).with_aliases(["volt", "volts"]),
    ],
    QuantityKind::Resistance => vec![
      UnitRecord::new("Ω", 1.0).with_aliases(["ohm", "ohms"]),
    ],
    QuantityKind::LuminousIntensity => vec![
      UnitRecord::new("cd", 1.0).with_aliases(["candela", "candelas"]),
    ],
    QuantityKind::AmountOfSubstance => vec![
      UnitRecord::new("mol", 1.0).with_aliases(["mole", "moles"]),
    ],
    QuantityKind::Angle => angle_units(),
    QuantityKind::Frequency => frequency_units(),
    QuantityKind::Charge => vec![
      UnitRecord::new("C", 1.0).with_aliases(["coulomb", "coulombs"]),
      UnitRecord::new("e", 1.602176634e-19).with_alias("elementary charge"),
      UnitRecord::new("Ah", 3600.0).with_aliases(["A⋅h", "ampere-hour", "amp-hour"]),
      UnitRecord::new("mAh", 3.6).with_alias("milliampere-hour"),
    ],
    QuantityKind::Density => density_units(),
    QuantityKind::Torque => vec![
      UnitRecord::new("N⋅m", 1.0).with_aliases(["Nm", "N·m", "newton-meter", "newton-metre"]),
      UnitRecord::new("lbf⋅ft", 1.3558179483314).with_aliases(["lb-ft", "lbf-ft", "pound-force foot"]),
      UnitRecord::new("lbf⋅in", 0.1129848290276).with_aliases(["lb-in", "lbf-in", "pound-force inch"]),
      UnitRecord::new("dyn⋅cm", 1e-7).with_alias("dyne-centimeter"),
    ],
    QuantityKind::Capacitance => vec![
      UnitRecord::new("F", 1.0).with_aliases(["farad", "farads"]),
    ],
    QuantityKind::Inductance => vec![
      UnitRecord::new("H", 1.0).with_aliases(["henry", "henries", "henrys"]),
    ],
    QuantityKind::MagneticFlux => vec![
      UnitRecord::new("Wb", 1.0).with_aliases(["weber", "webers"]),
      UnitRecord::new("Mx", 1e-8).with_aliases(["maxwell", "maxwells"]),
    ],
  }
}

fn length_units() -> Vec<UnitRecord> {
  vec![
    UnitRecord::new("m", 1.0).with_aliases(["meter", "meters", "metre", "metres"]),
    UnitRecord::new("ft", 0.3048).with_aliases(["foot", "feet"]),
    UnitRecord::new("in", 0.0254).with_aliases(["inch", "inches"]),
    UnitRecord::new("yd", 0.9144).with_aliases(["yard", "yards"]),
    UnitRecord::new("mi", 1609.344).with_aliases(["mile", "miles"]),
  ]
}

// Grams, not kilograms, are native. Products which yield newtons
// correct for this themselves.
fn mass_units() -> Vec<UnitRecord> {
  vec![
    UnitRecord::new("g", 1.0).with_aliases(["gram", "grams", "gramme", "grammes"]),
    UnitRecord::new("t", 1e6).with_aliases(["tonne", "tonnes", "metric ton", "metric tons"]),
    UnitRecord::new("oz", 28.349523125).with_aliases(["ounce", "ounces"]),
    UnitRecord::new("lb", 453.59237).with_aliases(["lbs", "pound", "pounds"]),
    UnitRecord::new("st", 6350.29318).with_aliases(["stone", "stones"]),
    UnitRecord::new("ton", 907184.74).with_aliases(["short ton", "US ton"]),
    UnitRecord::new("long ton", 1016046.9088).with_alias("imperial ton"),
  ]
}

fn time_units() -> Vec<UnitRecord> {
  vec![
    UnitRecord::new("s", 1.0).with_aliases(["sec", "second", "seconds"]),
    UnitRecord::new("min", 60.0).with_aliases(["minute", "minutes"]),
    UnitRecord::new("h", 3600.0).with_aliases(["hr", "hour", "hours"]),
    UnitRecord::new("d", 86400.0).with_aliases(["day", "days"]),
    UnitRecord::new("wk", 604800.0).with_aliases(["week", "weeks"]),
    UnitRecord::new("yr", 31557600.0).with_aliases(["year", "years"]),
  ]
}

// The factors here are only used for alias resolution; the scales
// themselves are converted by `temperature`.
fn temperature_units() -> Vec<UnitRecord> {
  vec![
    UnitRecord::new("K", 1.0).with_aliases(["kelvin", "Kelvin"]),
    UnitRecord::new("°C", 1.0).with_aliases(["C", "celsius", "Celsius"]),
    UnitRecord::new("°F", 1.0).with_aliases(["F", "fahrenheit", "Fahrenheit"]),
    UnitRecord::new("°R", 5.0 / 9.0).with_aliases(["R", "rankine", "Rankine"]),
  ]
}

fn area_units() -> Vec<UnitRecord> {
  vec![
    UnitRecord::new("m²", 1.0).with_aliases(["m2", "square meter", "square meters", "square metre", "square metres"]),
    UnitRecord::new("a", 100.0).with_aliases(["are", "ares"]),
    UnitRecord::new("ha", 10000.0).with_aliases(["hectare", "hectares"]),
    UnitRecord::new("in²", 0.00064516).with_aliases(["in2", "square inch", "square inches"]),
    UnitRecord::new("ft²", 0.09290304).with_aliases(["ft2", "square foot", "square feet"]),
    UnitRecord::new("yd²", 0.83612736).with_aliases(["yd2", "square yard", "square yards"]),
    UnitRecord::new("ac", 4046.8564224).with_aliases(["acre", "acres"]),
    UnitRecord::new("mi²", 2589988.110336).with_aliases(["mi2", "square mile", "square miles"]),
  ]
}

fn volume_units() -> Vec<UnitRecord> {
  vec![
    UnitRecord::new("m³", 1.0).with_aliases(["m3", "cubic meter", "cubic meters", "cubic metre", "cubic metres"]),
    UnitRecord::new("L", 0.001).with_aliases(["l", "liter", "liters", "litre", "litres"]),
    UnitRecord::new("mL", 1e-6).with_aliases(["ml", "milliliter", "milliliters", "millilitre", "millilitres"]),
    UnitRecord::new("in³", 0.000016387064).with_aliases(["in3", "cubic inch", "cubic inches"]),
    UnitRecord::new("ft³", 0.028316846592).with_aliases(["ft3", "cubic foot", "cubic feet"]),
    UnitRecord::new("yd³", 0.764554857984).with_aliases(["yd3", "cubic yard", "cubic yards"]),
    UnitRecord::new("fl oz", 0.0000295735295625).with_aliases(["fluid ounce", "fluid ounces"]),
    UnitRecord::new("cup", 0.0002365882365).with_alias("cups"),
    UnitRecord::new("pt", 0.000473176473).with_aliases(["pint", "pints"]),
    UnitRecord::new("qt", 0.000946352946).with_aliases(["quart", "quarts"]),
    UnitRecord::new("gal", 0.003785411784).with_aliases(["gallon", "gallons"]),
    UnitRecord::new("imp fl oz", 0.0000284130625).with_aliases(["imperial fluid ounce", "imperial fluid ounces"]),
    UnitRecord::new("imp pt", 0.00056826125).with_aliases(["imperial pint", "imperial pints"]),
    UnitRecord::new("imp qt", 0.0011365225).with_aliases(["imperial quart", "imperial quarts"]),
    UnitRecord::new("imp gal", 0.00454609).with_aliases(["imperial gallon", "imperial gallons"]),
  ]
}

fn force_units() -> Vec<UnitRecord> {
  vec![
    UnitRecord::new("N", 1.0).with_aliases(["newton", "newtons"]),
    UnitRecord::new("dyn", 1e-5).with_aliases(["dyne", "dynes"]),
    UnitRecord::new("kgf", 9.80665).with_aliases(["kg-force", "kilogram-force", "kilopond"]),
    UnitRecord::new("lbf", 4.4482216152605).with_aliases(["lb-force", "pound-force"]),
    UnitRecord::new("pdl", 0.138254954376).with_aliases(["poundal", "poundals"]),
  ]
}

fn energy_units() -> Vec<UnitRecord> {
  vec![
    UnitRecord::new("J", 1.0).with_aliases(["joule", "joules"]),
    UnitRecord::new("Wh", 3600.0).with_aliases(["watt-hour", "watt-hours"]),
    UnitRecord::new("kWh", 3600000.0).with_aliases(["kilowatt-hour", "kilowatt-hours"]),
    UnitRecord::new("cal", 4.184).with_aliases(["calorie", "calories"]),
    UnitRecord::new("kcal", 4184.0).with_aliases(["Cal", "kilocalorie", "kilocalories", "Calorie", "Calories"]),
    UnitRecord::new("BTU", 1055.05585262).with_aliases(["btu", "British thermal unit"]),
    UnitRecord::new("eV", 1.602176634e-19).with_aliases(["electronvolt", "electron volt"]),
    UnitRecord::new("erg", 1e-7).with_alias("ergs"),
    UnitRecord::new("ft·lbf", 1.3558179483314004).with_aliases(["ft-lb", "foot-pound", "foot-pounds"]),
  ]
}

fn power_units() -> Vec<UnitRecord> {
  vec![
    UnitRecord::new("W", 1.0).with_aliases(["watt", "watts"]),
    UnitRecord::new("hp", 745.69987158227022).with_aliases(["HP", "horsepower", "mechanical horsepower"]),
    UnitRecord::new("PS", 735.49875).with_aliases(["ps", "metric horsepower", "pferdestärke"]),
    UnitRecord::new("hp(E)", 746.0).with_alias("electric horsepower"),
    UnitRecord::new("BTU/h", 0.29307107017).with_alias("BTU per hour"),
    UnitRecord::new("cal/s", 4.184).with_alias("calorie per second"),
    UnitRecord::new("ft·lbf/s", 1.3558179483314004).with_aliases(["ft-lb/s", "foot-pound per second"]),
  ]
}

fn pressure_units() -> Vec<UnitRecord> {
  vec![
    UnitRecord::new("Pa", 1.0).with_aliases(["pascal", "pascals"]),
    UnitRecord::new("bar", 1e5).with_alias("bars"),
    UnitRecord::new("mbar", 100.0).with_aliases(["millibar", "millibars"]),
    UnitRecord::new("atm", 101325.0).with_aliases(["atmosphere", "atmospheres"]),
    UnitRecord::new("Torr", 133.322368421).with_alias("torr"),
    UnitRecord::new("mmHg", 133.322368421).with_aliases(["millimeter of mercury", "millimeters of mercury"]),
    UnitRecord::new("psi", 6894.757293168)
      .with_aliases(["PSI", "pound per square inch", "pounds per square inch", "lbf/in²"]),
    UnitRecord::new("psf", 47.880258980336)
      .with_aliases(["PSF", "pound per square foot", "pounds per square foot", "lbf/ft²"]),
    UnitRecord::new("inHg", 3386.389).with_aliases(["inch of mercury", "inches of mercury"]),
    UnitRecord::new("at", 98066.5).with_alias("technical atmosphere"),
  ]
}

fn velocity_units() -> Vec<UnitRecord> {
  vec![
    UnitRecord::new("m/s", 1.0)
      .with_aliases(["meter per second", "meters per second", "metre per second", "metres per second", "mps"]),
    UnitRecord::new("km/h", 0.277777778).with_aliases([
      "kmh",
      "kph",
      "kilometer per hour",
      "kilometers per hour",
      "kilometre per hour",
      "kilometres per hour",
    ]),
    UnitRecord::new("mph", 0.44704).with_aliases(["mi/h", "mile per hour", "miles per hour"]),
    UnitRecord::new("ft/s", 0.3048).with_aliases(["fps", "foot per second", "feet per second"]),
    UnitRecord::new("kt", 0.514444444)
      .with_aliases(["kn", "knot", "knots", "nautical mile per hour", "nautical miles per hour"]),
  ]
}

fn acceleration_units() -> Vec<UnitRecord> {
  vec![
    UnitRecord::new("m/s²", 1.0).with_aliases([
      "m/s2",
      "meter per second squared",
      "meters per second squared",
      "metre per second squared",
      "metres per second squared",
    ]),
    UnitRecord::new("g", 9.80665).with_aliases(["g₀", "standard gravity"]),
    UnitRecord::new("ft/s²", 0.3048).with_aliases(["ft/s2", "foot per second squared", "feet per second squared"]),
    UnitRecord::new("Gal", 0.01).with_alias("galileo"),
  ]
}

fn angle_units() -> Vec<UnitRecord> {
  vec![
    UnitRecord::new("rad", 1.0).with_aliases(["radian", "radians"]),
    UnitRecord::new("°", PI / 180.0).with_aliases(["deg", "degree", "degrees"]),
    UnitRecord::new("'", PI / 10800.0).with_aliases(["arcmin", "arcminute", "arcminutes"]),
    UnitRecord::new("\"", PI / 648000.0).with_aliases(["arcsec", "arcsecond", "arcseconds"]),
  ]
}

fn frequency_units() -> Vec<UnitRecord> {
  vec![
    UnitRecord::new("Hz", 1.0).with_aliases(["hertz", "hz"]),
    UnitRecord::new("RPM", 1.0 / 60.0).with_aliases(["rpm", "revolutions per minute", "rev/min"]),
    UnitRecord::new("BPM", 1.0 / 60.0).with_aliases(["bpm", "beats per minute"]),
    UnitRecord::new("rad/s", 1.0 / (2.0 * PI)).with_alias("radians per second"),
  ]
}

fn density_units() -> Vec<UnitRecord> {
  vec![
    UnitRecord::new("kg/m³", 1.0).with_aliases(["kg/m3", "kilogram per cubic meter", "kilogram per cubic metre"]),
    UnitRecord::new("g/cm³", 1000.0).with_aliases(["g/cm3", "gram per cubic centimeter"]),
    UnitRecord::new("g/L", 1.0).with_aliases(["gram per liter", "gram per litre"]),
    UnitRecord::new("lb/ft³", 16.0185).with_aliases(["lb/ft3", "pound per cubic foot"]),
    UnitRecord::new("lb/gal", 119.826).with_aliases(["pound per gallon", "ppg"]),
  ]
}
