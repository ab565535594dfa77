use crate::color::Color;
use crate::tuple::Point;

/// A light with no size, shining equally in every direction.
#[derive(Copy, Clone, Debug, PartialEq, Deserialize)]
pub struct PointLight {
    pub position: Point,
    pub intensity: Color,
}

impl PointLight {
    pub fn new(position: Point, intensity: Color) -> Self {
        Self { position, intensity }
    }
}
