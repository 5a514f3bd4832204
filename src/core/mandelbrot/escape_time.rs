use crate::core::data::complex::Complex;

/// Fixed iteration cap. Bounding the loop keeps per-frame cost predictable
/// while the view re-renders every animation frame.
pub const MAX_ITERATIONS: u32 = 150;

/// Squared escape threshold; |z| > 2 provably diverges.
pub const ESCAPE_MAGNITUDE_SQUARED: f64 = 4.0;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum EscapeClass {
    /// The orbit left the bounded region with `remaining` iterations unused
    /// (an escape on the first step reports `remaining == max_iterations`).
    Escaped { remaining: u32 },
    /// The orbit stayed bounded for the full iteration budget.
    Inside,
}

/// Classifies one complex point by iterating `z ← z² + c` from `z₀ = c`.
///
/// Pure function of its arguments; the per-pixel render path and the tests
/// call it with identical semantics.
#[must_use]
pub fn escape_time(c: Complex, max_iterations: u32) -> EscapeClass {
    let mut z = c;

    for step in 0..max_iterations {
        z = z * z + c;
        if z.magnitude_squared() > ESCAPE_MAGNITUDE_SQUARED {
            return EscapeClass::Escaped {
                remaining: max_iterations - step,
            };
        }
    }

    EscapeClass::Inside
}
