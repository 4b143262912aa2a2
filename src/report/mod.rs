//! Measurement tables: the per-algorithm CSV schema plus the fixed
//! 3-block/15-row shape the charts rely on.

pub mod file;
pub mod row;
pub mod table;

pub use file::{read_table, write_table};
pub use row::MeasurementRow;
pub use table::{MeasurementTable, build_table};
