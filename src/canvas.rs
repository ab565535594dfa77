use std::convert::TryFrom;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use image::{ImageFormat, RgbImage};
use log::info;

use crate::color::{Color, BLACK};
use crate::error::{Error, Result};

/// Render target: `width x height` colors stored row by row, top row first.
#[derive(Clone, Debug, PartialEq)]
pub struct Canvas {
    width: usize,
    height: usize,
    pixels: Vec<Color>,
}

impl Canvas {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![BLACK; width * height],
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// # Panics
    ///
    /// Panics if `(x, y)` is outside the canvas.
    #[inline]
    pub fn pixel_at(&self, x: usize, y: usize) -> Color {
        assert!(x < self.width && y < self.height, "pixel ({}, {}) is off the canvas", x, y);
        self.pixels[y * self.width + x]
    }

    /// # Panics
    ///
    /// Panics if `(x, y)` is outside the canvas.
    #[inline]
    pub fn write_pixel(&mut self, x: usize, y: usize, color: Color) {
        assert!(x < self.width && y < self.height, "pixel ({}, {}) is off the canvas", x, y);
        self.pixels[y * self.width + x] = color;
    }

    /// Row-major pixel storage, for drivers that fill whole rows at once.
    #[inline]
    pub fn pixels_mut(&mut self) -> &mut [Color] {
        &mut self.pixels
    }

    /// Plain-text PPM: a `P3` header, then one `r g b` line per pixel.
    pub fn write_ppm<W: Write>(&self, mut out: W) -> io::Result<()> {
        write!(out, "P3\n{} {}\n255\n", self.width, self.height)?;
        for color in &self.pixels {
            let rgb = color.to_rgb8();
            writeln!(out, "{} {} {}", rgb[0], rgb[1], rgb[2])?;
        }
        out.flush()
    }

    pub fn to_image(&self) -> Result<RgbImage> {
        let too_large = || Error::CanvasTooLarge {
            width: self.width,
            height: self.height,
        };
        let width = u32::try_from(self.width).map_err(|_| too_large())?;
        let height = u32::try_from(self.height).map_err(|_| too_large())?;

        Ok(RgbImage::from_fn(width, height, |x, y| {
            self.pixel_at(x as usize, y as usize).to_rgb8()
        }))
    }

    /// Writes the canvas to `path`: plain PPM for a `.ppm` extension, PNG for
    /// anything else, whatever the extension says.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let is_ppm = path
            .extension()
            .map_or(false, |ext| ext.eq_ignore_ascii_case("ppm"));

        if is_ppm {
            self.write_ppm(BufWriter::new(File::create(path)?))?;
        } else {
            self.to_image()?.save_with_format(path, ImageFormat::Png)?;
        }

        info!("Image saved as {}", path.display());
        Ok(())
    }
}

#[test]
fn new_canvas_is_black() {
    let c = Canvas::new(10, 20);
    assert_eq!(10, c.width());
    assert_eq!(20, c.height());
    for y in 0..20 {
        for x in 0..10 {
            assert_eq!(BLACK, c.pixel_at(x, y));
        }
    }
}

#[test]
fn writing_pixels() {
    let mut c = Canvas::new(10, 20);
    let red = Color::new(1.0, 0.0, 0.0);
    c.write_pixel(2, 3, red);
    assert_eq!(red, c.pixel_at(2, 3));
    assert_eq!(red, c.pixels_mut()[3 * 10 + 2]);
}

#[test]
fn ppm_header_and_pixels() {
    let mut c = Canvas::new(3, 2);
    c.write_pixel(0, 0, Color::new(1.5, 0.0, 0.0));
    c.write_pixel(1, 0, Color::new(0.0, 0.5, 0.0));
    c.write_pixel(2, 1, Color::new(-0.5, 0.0, 1.0));

    let mut out = Vec::new();
    c.write_ppm(&mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(vec!["P3", "3 2", "255"], &lines[..3]);
    assert_eq!(3 + 6, lines.len());
    assert_eq!("255 0 0", lines[3]);
    assert_eq!("0 127 0", lines[4]);
    assert_eq!("0 0 0", lines[5]);
    assert_eq!("0 0 255", lines[8]);
    assert!(text.ends_with('\n'));
}

#[test]
fn converting_to_image() {
    let mut c = Canvas::new(2, 2);
    c.write_pixel(1, 0, Color::new(0.0, 0.0, 1.0));
    let img = c.to_image().unwrap();
    assert_eq!((2, 2), img.dimensions());
    assert_eq!(&image::Rgb([0, 0, 255]), img.get_pixel(1, 0));
}

#[cfg(test)]
fn scratch_path(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("lumen-{}-{}", std::process::id(), name))
}

#[test]
fn saving_non_ppm_paths_writes_png() {
    let mut c = Canvas::new(4, 3);
    c.write_pixel(1, 1, Color::new(0.2, 0.4, 0.6));

    for name in &["canvas.jpg", "canvas.png", "canvas"] {
        let path = scratch_path(name);
        c.save(&path).unwrap();
        let bytes = std::fs::read(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(b"\x89PNG\r\n\x1a\n", &bytes[..8], "{}", name);
    }
}

#[test]
fn saving_ppm_path_writes_text() {
    let c = Canvas::new(2, 1);
    let path = scratch_path("canvas.PPM");
    c.save(&path).unwrap();
    let text = std::fs::read_to_string(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!("P3\n2 1\n255\n0 0 0\n0 0 0\n", text);
}

#[test]
fn canvas_wider_than_u32_does_not_convert() {
    let c = Canvas::new(u32::MAX as usize + 1, 0);
    match c.to_image() {
        Err(Error::CanvasTooLarge { width, height }) => {
            assert_eq!(u32::MAX as usize + 1, width);
            assert_eq!(0, height);
        }
        other => panic!("expected an oversized canvas error, got {:?}", other.map(|img| img.dimensions())),
    }
}
