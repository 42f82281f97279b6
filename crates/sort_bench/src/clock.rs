// Monotonic timestamps and integer millisecond arithmetic.

use nix::time::{ClockId, clock_gettime};

use crate::BenchError;

const MILLIS_PER_SEC: i64 = 1_000;
const NANOS_PER_MILLI: i64 = 1_000_000;

/// A reading of `CLOCK_MONOTONIC`, split into whole seconds and the
/// nanosecond remainder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timestamp {
    secs: i64,
    nanos: i64,
}

impl Timestamp {
    pub fn new(secs: i64, nanos: i64) -> Self {
        Self { secs, nanos }
    }

    /// Read the monotonic clock. Failing here means the platform has no
    /// usable monotonic time source.
    pub fn now() -> Result<Self, BenchError> {
        let ts = clock_gettime(ClockId::CLOCK_MONOTONIC).map_err(BenchError::Clock)?;
        Ok(Self::new(ts.tv_sec() as i64, ts.tv_nsec() as i64))
    }

    pub fn secs(&self) -> i64 {
        self.secs
    }

    pub fn nanos(&self) -> i64 {
        self.nanos
    }
}

/// Start a measurement. The returned timestamp is handed back to
/// [`elapsed_millis`] once the measured work is done.
pub fn start() -> Result<Timestamp, BenchError> {
    Timestamp::now()
}

/// Whole milliseconds from `start` to `now`.
///
/// Seconds and nanoseconds are differenced separately and the nanosecond
/// part is divided with truncation toward zero, so a negative nanosecond
/// difference never borrows a millisecond from the seconds part. A `now`
/// earlier than `start` gives 0.
pub fn elapsed_millis(start: Timestamp, now: Timestamp) -> u64 {
    let millis = (now.secs - start.secs) * MILLIS_PER_SEC + (now.nanos - start.nanos) / NANOS_PER_MILLI;
    u64::try_from(millis).unwrap_or(0)
}
