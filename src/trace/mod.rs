//! Reference strings: synthetic generation plus the on-disk line format.

pub mod file;
pub mod generate;
pub mod row;

pub use file::{read_trace_file, write_trace_file};
pub use generate::{GeneratorConfig, generate};
pub use row::Reference;
