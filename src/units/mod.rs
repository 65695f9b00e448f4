
//! Unit records, unit tables, metric prefixes, and the dimension
//! algebra underlying every quantity kind.

pub mod dimension;
pub mod prefix;
pub mod table;
pub mod unit;

pub use dimension::{BaseDimension, Dimension};
pub use prefix::{MetricPrefix, InvalidSiUnit, convert_si_unit};
pub use table::{UnitTable, UnitTableError};
pub use unit::UnitRecord;
