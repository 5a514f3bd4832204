use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum SpanError {
    DegenerateRange { start: f64, end: f64 },
    NonFiniteEndpoint { start: f64, end: f64 },
}

impl fmt::Display for SpanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DegenerateRange { start, end } => {
                write!(f, "span must have non-zero width: [{}, {}]", start, end)
            }
            Self::NonFiniteEndpoint { start, end } => {
                write!(f, "span endpoints must be finite: [{}, {}]", start, end)
            }
        }
    }
}

impl Error for SpanError {}

/// A linear range with validated, finite, distinct endpoints.
///
/// Degenerate ranges are rejected here, at configuration time, so that
/// `linear_map` never divides by zero on the per-pixel path.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Span {
    start: f64,
    end: f64,
}

impl Span {
    pub fn new(start: f64, end: f64) -> Result<Self, SpanError> {
        if !(start.is_finite() && end.is_finite()) {
            return Err(SpanError::NonFiniteEndpoint { start, end });
        }
        if start == end {
            return Err(SpanError::DegenerateRange { start, end });
        }

        Ok(Self { start, end })
    }

    #[allow(dead_code)]
    #[must_use]
    pub fn start(&self) -> f64 {
        self.start
    }

    #[allow(dead_code)]
    #[must_use]
    pub fn end(&self) -> f64 {
        self.end
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.end - self.start
    }
}

/// Linearly rescales `value` from `source` to `target`.
///
/// Values outside the source span extrapolate linearly; no clamping. Drag
/// handling relies on that for pointer positions past the surface edge.
#[must_use]
pub fn linear_map(value: f64, source: Span, target: Span) -> f64 {
    target.start + (value - source.start) / source.width() * target.width()
}
