
// top-level library module for the sort benchmark workload

pub mod bench;
pub mod clock;
pub mod error;

pub use bench::run;
pub use error::BenchError;

/// Number of elements sorted by the benchmark binary.
pub const ARRAY_LEN: usize = 50_000;
