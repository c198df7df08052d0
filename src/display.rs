//! Grayscale view of a `RawImage` for display tooling.

use crate::error::Result;
use crate::images::RawImage;
use image::{GrayImage, Luma};
use std::path::Path;

/// Axis-aligned rectangle, `min` inclusive and `max` exclusive, as (x, y).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub min: (usize, usize),
    pub max: (usize, usize),
}

impl Bounds {
    pub fn width(&self) -> usize {
        self.max.0 - self.min.0
    }

    pub fn height(&self) -> usize {
        self.max.1 - self.min.1
    }

    pub fn contains(&self, x: usize, y: usize) -> bool {
        x >= self.min.0 && x < self.max.0 && y >= self.min.1 && y < self.max.1
    }
}

impl RawImage {
    /// (0, 0) to (cols, rows).
    pub fn bounds(&self) -> Bounds {
        Bounds {
            min: (0, 0),
            max: (self.cols(), self.rows()),
        }
    }

    /// Intensity at column `x`, row `y`, or `None` outside the image.
    pub fn get(&self, x: usize, y: usize) -> Option<u8> {
        if !self.bounds().contains(x, y) {
            return None;
        }
        Some(self.pixels()[y * self.cols() + x])
    }

    /// Grayscale pixel at column `x`, row `y`.
    ///
    /// Panics if (x, y) is outside `bounds()`.
    pub fn at(&self, x: usize, y: usize) -> Luma<u8> {
        match self.get(x, y) {
            Some(v) => Luma([v]),
            None => panic!(
                "pixel ({}, {}) out of bounds for {}x{} image",
                x,
                y,
                self.cols(),
                self.rows()
            ),
        }
    }

    pub fn to_gray_image(&self) -> GrayImage {
        // rows and cols were decoded from u32 fields, the casts cannot truncate.
        GrayImage::from_fn(self.cols() as u32, self.rows() as u32, |x, y| {
            self.at(x as usize, y as usize)
        })
    }

    /// Writes the image to `path`, format picked from the extension.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        self.to_gray_image().save(path)?;
        Ok(())
    }
}
