//! Escape-time classification of complex-plane points.

use crate::core::data::escape_result::EscapeResult;
use crate::core::data::plane_point::PlanePoint;

/// Classifies `c` by iterating `z ↦ z² + c` up to `max_iterations` times.
///
/// The loop is pre-shifted: `z` starts at `c`, folding in the first
/// application of the recurrence to `z₀ = 0`. The squared magnitude is
/// tested against 4.0 before each step, so any `|c| > 2` escapes with a
/// count of zero, and a returned count is always strictly below the bound.
///
/// If a step lands exactly back on `c` the orbit is periodic and the point
/// is classified `InSet` without waiting for the bound. The comparison is
/// deliberately exact; near-misses simply iterate on.
#[must_use]
pub fn evaluate(c: PlanePoint, max_iterations: u32) -> EscapeResult {
    let mut z = c;

    for n in 0..max_iterations {
        if z.magnitude_squared() > 4.0 {
            return EscapeResult::Escaped(n);
        }

        let next = z * z + c;
        if next == c {
            return EscapeResult::InSet;
        }
        z = next;
    }

    EscapeResult::InSet
}
