//! Positions in the stream where the current selection is reported.

/// Number of observations after which the selection is printed: a
/// quarter, half, three quarters and all of the `n` values.
///
/// Positions that collapse together for small `n` are reported once
/// and a position of zero is never reported.
pub fn checkpoints(n: usize) -> Vec<usize> {
    let mut points = vec![n / 4, n / 2, 3 * n / 4, n];
    points.dedup();
    points.retain(|p| *p > 0);
    points
}
