use crate::core::data::colour::Colour;
use crate::core::mandelbrot::escape_time::EscapeClass;

/// Colour for points that never leave the bounded region.
pub const IN_SET_COLOUR: Colour = Colour {
    r: 0.36,
    g: 1.0,
    b: 0.33,
    a: 1.0,
};

/// Sine-banded colour for escaped points, keyed by the remaining iteration
/// count. Adjacent escape counts land on smoothly shifted bands.
#[must_use]
pub fn escape_colour(remaining: u32) -> Colour {
    let r = f64::from(remaining);

    Colour {
        r: (r / 15.0).sin() as f32,
        g: (r / 10.0).sin() as f32,
        b: (r / 20.0).sin() as f32,
        a: 1.0,
    }
}

#[must_use]
pub fn colour_for(class: EscapeClass) -> Colour {
    match class {
        EscapeClass::Escaped { remaining } => escape_colour(remaining),
        EscapeClass::Inside => IN_SET_COLOUR,
    }
}
