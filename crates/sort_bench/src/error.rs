use std::process::ExitCode;

use bubble_sort::NotSorted;
use thiserror::Error;

/// Every failure of a benchmark run. None of them are recoverable: `main`
/// turns each one into a failing exit status.
#[derive(Debug, Error)]
pub enum BenchError {
    #[error("monotonic clock unavailable: {0}")]
    Clock(#[source] nix::Error),

    // `as_slice_mut` hands back an `Option`; a freshly zeroed `Array1` is
    // always in standard layout, so this is not reached in practice.
    #[error("array buffer is not contiguous")]
    Buffer,

    #[error("failed to write report: {0}")]
    Output(#[from] std::io::Error),

    #[error(transparent)]
    NotSorted(#[from] NotSorted),
}

impl BenchError {
    /// Process exit status for this failure.
    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(1)
    }
}
