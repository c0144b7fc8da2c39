pub mod compile;
pub mod dataset;

pub use compile::{compile, Compilation};
pub use dataset::dataset;

/// Destination that prints a dataset to standard output.
pub const STDOUT: &str = "stdout";
