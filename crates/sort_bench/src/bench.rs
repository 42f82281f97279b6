// Sequencing of a single benchmark run.

use std::io::Write;

use bubble_sort::{bubble_sort, generate_array, verify_sorted};
use ndarray::Array1;

use crate::BenchError;
use crate::clock::{self, Timestamp};

/// Run the whole benchmark once over an array of `len` elements and write
/// the report to `out`.
///
/// The measured interval starts before the array is allocated and filled
/// and stops right after the sort, so generation time is included and
/// verification is not.
///
/// __Returns:__
///
/// + `Ok(ms)` - elapsed milliseconds, after `<ms> ms` has been written.
///
/// + `Err(BenchError::NotSorted)` - the sort left the array out of order;
///   the `Array is not sorted` line has already been written.
///
pub fn run<W: Write>(len: usize, out: &mut W) -> Result<u64, BenchError> {
    let start = clock::start()?;

    log::debug!("allocating array of {} elements", len);
    let mut data = Array1::<u32>::zeros(len);
    let slice = data.as_slice_mut().ok_or(BenchError::Buffer)?;

    let elapsed_ms = timed_generate_and_sort(start, slice)?;
    report_elapsed(out, elapsed_ms)?;

    check_and_report(out, slice)?;
    Ok(elapsed_ms)
}

/// Fill and sort `data`, returning milliseconds elapsed since `start`.
pub fn timed_generate_and_sort(start: Timestamp, data: &mut [u32]) -> Result<u64, BenchError> {
    generate_array(data);
    log::debug!("generated array, sorting");

    let passes = bubble_sort(data);

    let stop = Timestamp::now()?;
    let elapsed_ms = clock::elapsed_millis(start, stop);
    log::debug!("sort finished after {} passes in {} ms", passes, elapsed_ms);

    Ok(elapsed_ms)
}

pub fn report_elapsed<W: Write>(out: &mut W, elapsed_ms: u64) -> Result<(), BenchError> {
    writeln!(out, "{} ms", elapsed_ms)?;
    out.flush()?;
    Ok(())
}

/// Verify `data` is sorted. On failure the diagnostic line is written to
/// `out` before the error is returned.
pub fn check_and_report<W: Write>(out: &mut W, data: &[u32]) -> Result<(), BenchError> {
    if let Err(err) = verify_sorted(data) {
        log::warn!("descent found at index {}", err.index);
        writeln!(out, "{}", err)?;
        out.flush()?;
        return Err(err.into());
    }

    log::debug!("array verified sorted");
    Ok(())
}
