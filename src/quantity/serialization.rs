
use super::base::Quantity;
use super::kind::QuantityKind;
use crate::error::Error;

use serde::{Serialize, Deserialize};

/// Namespace that older writers put in front of the `class` field.
const LEGACY_CLASS_NAMESPACE: &str = "Renfordt\\UnitLib\\";

/// The serialized form of a [`Quantity`].
///
/// The native fields are informational. A quantity is rebuilt from
/// `class`, `value` and `unit` alone, so its native value is always
/// recomputed from the current unit tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuantityRecord {
  pub value: f64,
  pub unit: String,
  pub native_value: f64,
  pub native_unit: String,
  pub class: String,
}

impl From<Quantity> for QuantityRecord {
  fn from(quantity: Quantity) -> Self {
    Self {
      value: quantity.original_value(),
      unit: quantity.original_unit().symbol().to_owned(),
      native_value: quantity.native_value(),
      native_unit: quantity.native_unit().symbol().to_owned(),
      class: quantity.kind().name().to_owned(),
    }
  }
}

impl TryFrom<QuantityRecord> for Quantity {
  type Error = Error;

  fn try_from(record: QuantityRecord) -> Result<Self, Error> {
    let class = record.class.strip_prefix(LEGACY_CLASS_NAMESPACE).unwrap_or(&record.class);
    let kind = class.parse::<QuantityKind>()?;
    Quantity::new(kind, record.value, &record.unit)
  }
}
