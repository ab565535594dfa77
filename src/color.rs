use std::ops::{Add, Mul, Sub};

use image::Rgb;

use crate::float::{self, ApproxEq};

/// Linear RGB. Channels are left unclamped until the image is written out.
#[derive(Copy, Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(from = "[f64; 3]")]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
}

pub const BLACK: Color = Color::new(0.0, 0.0, 0.0);
pub const WHITE: Color = Color::new(1.0, 1.0, 1.0);

impl Color {
    #[inline]
    pub const fn new(red: f64, green: f64, blue: f64) -> Self {
        Self { red, green, blue }
    }

    pub fn clamp(&self) -> Color {
        Color::new(
            float::clamp_unit(self.red),
            float::clamp_unit(self.green),
            float::clamp_unit(self.blue),
        )
    }

    /// Quantizes to 8 bits per channel, truncating after clamping.
    pub fn to_rgb8(&self) -> Rgb<u8> {
        let c = self.clamp();
        Rgb([(c.red * 255.0) as u8, (c.green * 255.0) as u8, (c.blue * 255.0) as u8])
    }
}

impl From<[f64; 3]> for Color {
    #[inline]
    fn from(c: [f64; 3]) -> Self {
        Color::new(c[0], c[1], c[2])
    }
}

impl Add for Color {
    type Output = Color;

    #[inline]
    fn add(self, other: Color) -> Self::Output {
        Color::new(self.red + other.red, self.green + other.green, self.blue + other.blue)
    }
}

impl Sub for Color {
    type Output = Color;

    #[inline]
    fn sub(self, other: Color) -> Self::Output {
        Color::new(self.red - other.red, self.green - other.green, self.blue - other.blue)
    }
}

impl Mul<f64> for Color {
    type Output = Color;

    #[inline]
    fn mul(self, factor: f64) -> Self::Output {
        Color::new(self.red * factor, self.green * factor, self.blue * factor)
    }
}

/// Hadamard product, used to filter light through a surface color.
impl Mul for Color {
    type Output = Color;

    #[inline]
    fn mul(self, other: Color) -> Self::Output {
        Color::new(self.red * other.red, self.green * other.green, self.blue * other.blue)
    }
}

impl ApproxEq for Color {
    fn approx_eq(&self, other: &Color) -> bool {
        float::approx_eq(self.red, other.red)
            && float::approx_eq(self.green, other.green)
            && float::approx_eq(self.blue, other.blue)
    }
}

#[test]
fn adding_subtracting_and_scaling_colors() {
    let a = Color::new(0.9, 0.6, 0.75);
    let b = Color::new(0.7, 0.1, 0.25);
    assert_approx_eq!(Color::new(1.6, 0.7, 1.0), a + b);
    assert_approx_eq!(Color::new(0.2, 0.5, 0.5), a - b);
    assert_approx_eq!(Color::new(0.4, 0.6, 0.8), Color::new(0.2, 0.3, 0.4) * 2.0);
}

#[test]
fn multiplying_colors() {
    let product = Color::new(1.0, 0.2, 0.4) * Color::new(0.9, 1.0, 0.1);
    assert_approx_eq!(Color::new(0.9, 0.2, 0.04), product);
}

#[test]
fn negative_channels_clamp_to_zero() {
    assert_approx_eq!(Color::new(0.0, 1.0, 0.5), Color::new(-0.5, 1.5, 0.5).clamp());
    assert_eq!(Rgb([0, 255, 127]), Color::new(-0.5, 1.5, 0.5).to_rgb8());
}
