
// Home of the benchmark workload: array setup, the sort itself, and the
// post-condition check.

use thiserror::Error;

/// Fill `data` with the strictly decreasing sequence `len, len - 1, ..., 1`,
/// so index 0 holds `len` and the last index holds 1.
///
/// This is the worst case input for [`bubble_sort`]: every pair starts out
/// of order.
///
/// __Arguments:__
///
/// + `data` - buffer to overwrite.
///
/// __Panics:__
///
/// If `data.len()` does not fit in a `u32`, since the values could not be
/// represented.
///
#[inline(never)]
pub fn generate_array(data: &mut [u32]) {
    let Ok(len) = u32::try_from(data.len()) else {
        panic!("generate_array is only implemented for lengths that fit in a u32.")
    };

    for (value, slot) in (1..=len).rev().zip(data.iter_mut()) {
        *slot = value;
    }
}

/// Plain bubble sort, in place, into non-decreasing order.
///
/// Each pass walks the whole range `1..len` and swaps any adjacent pair
/// where the later element is strictly smaller. Passes repeat until one
/// of them makes no swap. The scan range is never shortened between
/// passes, so a reversed input of length N costs N full passes.
///
/// Returns the number of passes performed. Sorted input takes exactly one.
///
#[inline(never)]
pub fn bubble_sort(data: &mut [u32]) -> usize {
    let mut passes = 0;
    let mut swapped = true;

    while swapped {
        swapped = false;
        for i in 1..data.len() {
            if data[i] < data[i - 1] {
                data.swap(i, i - 1);
                swapped = true;
            }
        }
        passes += 1;
    }

    log::trace!("bubble sort of {} elements took {} passes", data.len(), passes);
    passes
}

/// Returned by [`verify_sorted`] for the first element found smaller than
/// its predecessor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Array is not sorted")]
pub struct NotSorted {
    pub index: usize,
}

/// Check that `data` is in non-decreasing order.
///
/// Equal neighbours are accepted. Empty and single element slices are
/// trivially sorted.
#[inline(never)]
pub fn verify_sorted(data: &[u32]) -> Result<(), NotSorted> {
    match (1..data.len()).find(|&i| data[i] < data[i - 1]) {
        Some(index) => Err(NotSorted { index }),
        None => Ok(()),
    }
}
