//! Per-cell transition kernel for B3/S23.
//!
//! All three steppers funnel through [`step_span`], which walks a range of
//! linear interior indices, maps each back to its padded-buffer index, and
//! applies the rule. The halo guarantees every neighbor read is in bounds.

use crate::grid::Grid;

/// Sum the 8 neighbors of the interior cell at padded index `idx`.
/// Each term is 0 or 1, so the sum is at most 8 by construction.
#[inline(always)]
pub fn neighbor_count(cells: &[u8], idx: usize, pitch: usize) -> u8 {
    cells[idx - pitch - 1]
        + cells[idx - pitch]
        + cells[idx - pitch + 1]
        + cells[idx - 1]
        + cells[idx + 1]
        + cells[idx + pitch - 1]
        + cells[idx + pitch]
        + cells[idx + pitch + 1]
}

/// The B3/S23 transition: a live cell survives with 2 or 3 neighbors, a dead
/// cell is born with exactly 3.
#[inline(always)]
pub fn next_state(alive: u8, neighbors: u8) -> u8 {
    if alive != 0 {
        (neighbors == 2 || neighbors == 3) as u8
    } else {
        (neighbors == 3) as u8
    }
}

/// Apply the rule to the linear interior range `[start, end)`, reading from
/// `current` and writing into `next`.
///
/// Linear index `i` maps to interior coordinates `y = i / width + 1`,
/// `x = i % width + 1` and from there to padded index `y * pitch + x`.
#[inline]
pub fn step_span(current: &[u8], next: &mut [u8], width: usize, start: usize, end: usize) {
    let pitch = width + 2;
    debug_assert_eq!(current.len(), next.len());
    debug_assert!(
        start <= end && end <= (current.len() / pitch - 2) * width,
        "span [{start}, {end}) escapes the interior"
    );
    for i in start..end {
        let y = i / width + 1;
        let x = i % width + 1;
        let idx = y * pitch + x;
        next[idx] = next_state(current[idx], neighbor_count(current, idx, pitch));
    }
}

/// Raw-pointer form of [`step_span`] for workers holding disjoint ranges.
///
/// # Safety
/// `current` and `next` must point at buffers of the same `(height + 2) *
/// (width + 2)` layout, the range `[start, end)` must lie within
/// `[0, width * height)`, and no other thread may write any cell this call
/// writes (disjoint partition ranges satisfy this).
#[inline]
pub(crate) unsafe fn step_span_raw(
    current: *const u8,
    next: *mut u8,
    width: usize,
    start: usize,
    end: usize,
) {
    let pitch = width + 2;
    for i in start..end {
        let y = i / width + 1;
        let x = i % width + 1;
        let idx = y * pitch + x;
        unsafe {
            let alive = *current.add(idx);
            let neighbors = *current.add(idx - pitch - 1)
                + *current.add(idx - pitch)
                + *current.add(idx - pitch + 1)
                + *current.add(idx - 1)
                + *current.add(idx + 1)
                + *current.add(idx + pitch - 1)
                + *current.add(idx + pitch)
                + *current.add(idx + pitch + 1);
            *next.add(idx) = next_state(alive, neighbors);
        }
    }
}

/// Debug-time contract check shared by the concurrent steppers: the pair
/// must have identical dimensions.
#[inline]
pub(crate) fn assert_same_dims(current: &Grid, next: &Grid) {
    assert!(
        current.width() == next.width() && current.height() == next.height(),
        "generation pair dimensions differ: {}x{} vs {}x{}",
        current.width(),
        current.height(),
        next.width(),
        next.height(),
    );
}

#[cfg(test)]
mod tests {
    use super::next_state;

    #[test]
    fn transition_table_is_exact() {
        // All 18 (state, neighbor count) cases.
        for neighbors in 0u8..=8 {
            let live_next = next_state(1, neighbors);
            let dead_next = next_state(0, neighbors);
            let live_expected = matches!(neighbors, 2 | 3) as u8;
            let dead_expected = (neighbors == 3) as u8;
            assert_eq!(
                live_next, live_expected,
                "live cell with {neighbors} neighbors"
            );
            assert_eq!(
                dead_next, dead_expected,
                "dead cell with {neighbors} neighbors"
            );
        }
    }

    #[test]
    fn outputs_are_single_bit() {
        for neighbors in 0u8..=8 {
            assert!(next_state(1, neighbors) <= 1);
            assert!(next_state(0, neighbors) <= 1);
        }
    }
}
