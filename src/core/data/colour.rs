/// RGBA colour with unit-interval float components.
///
/// Components outside [0, 1] can come out of the sine palette; they are
/// clamped only at byte conversion time so colour math stays exact.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Colour {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

fn component_to_byte(component: f32) -> u8 {
    (component.clamp(0.0, 1.0) * 255.0).round() as u8
}

impl Colour {
    #[must_use]
    pub fn to_rgba_bytes(&self) -> [u8; 4] {
        [
            component_to_byte(self.r),
            component_to_byte(self.g),
            component_to_byte(self.b),
            component_to_byte(self.a),
        ]
    }
}
