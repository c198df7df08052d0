use crate::convert::{self, to_matrix};
use crate::error::{IdxError, Result};
use crate::header::{IdxReader, IMAGE_MAGIC};
use log::{debug, trace};
use ndarray::prelude::*;
use std::io::Read;

/// Height of an MNIST digit in pixels.
pub const MNIST_ROWS: usize = 28;
/// Width of an MNIST digit in pixels.
pub const MNIST_COLS: usize = 28;

// Upper bound on up-front allocation, a corrupt count shouldn't reserve gigabytes.
const PREALLOC_LIMIT: usize = 1 << 16;

/// Pixel intensities of a single image, row-major.
/// 0 is background, 255 is foreground.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawImage {
    rows: usize,
    cols: usize,
    pixels: Vec<u8>,
}

impl RawImage {
    pub(crate) fn new(rows: usize, cols: usize, pixels: Vec<u8>) -> RawImage {
        debug_assert_eq!(pixels.len(), rows * cols);
        RawImage { rows, cols, pixels }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }
}

/// A decoded image file.
///
/// `floats` and `normalized` have shape (count, rows * cols); row `i` holds the
/// pixels of `images[i]` as raw intensities and as intensities divided by 255.
#[derive(Debug, Clone)]
pub struct ImageSet {
    rows: usize,
    cols: usize,
    images: Vec<RawImage>,
    floats: Array2<f64>,
    normalized: Array2<f64>,
}

impl ImageSet {
    pub(crate) fn from_images(rows: usize, cols: usize, images: Vec<RawImage>) -> ImageSet {
        let width = rows * cols;
        let floats = to_matrix(images.iter().map(RawImage::pixels), width, convert::intensity);
        let normalized = to_matrix(images.iter().map(RawImage::pixels), width, convert::normalized);
        ImageSet {
            rows,
            cols,
            images,
            floats,
            normalized,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn pixels_per_image(&self) -> usize {
        self.rows * self.cols
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn images(&self) -> &[RawImage] {
        &self.images
    }

    pub fn get(&self, idx: usize) -> Option<&RawImage> {
        self.images.get(idx)
    }

    /// Raw intensities widened to f64, shape (count, rows * cols).
    pub fn floats(&self) -> &Array2<f64> {
        &self.floats
    }

    /// Intensities in [0, 1], shape (count, rows * cols).
    pub fn normalized(&self) -> &Array2<f64> {
        &self.normalized
    }

    pub fn into_parts(self) -> (usize, usize, Vec<RawImage>, Array2<f64>, Array2<f64>) {
        (self.rows, self.cols, self.images, self.floats, self.normalized)
    }
}

/// Decodes an uncompressed image stream.
///
/// Layout: magic `0x00000803`, then `count`, `rows`, `cols` as big-endian u32,
/// then `count * rows * cols` pixel bytes. Nothing is returned unless every
/// image was read in full.
pub fn read_images<R: Read>(reader: R) -> Result<ImageSet> {
    let mut r = IdxReader::new(reader);
    r.expect_magic(IMAGE_MAGIC)?;
    let count = r.read_u32()?;
    let rows = r.read_u32()?;
    let cols = r.read_u32()?;
    debug!("image header: count={} rows={} cols={}", count, rows, cols);

    let pixels_per_image = (rows as usize)
        .checked_mul(cols as usize)
        .filter(|&n| n <= isize::MAX as usize)
        .ok_or(IdxError::DimensionOverflow { rows, cols })?;
    // Zero-pixel images consume no input, any count of them would be accepted.
    if pixels_per_image == 0 && count > 0 {
        return Err(IdxError::EmptyImages { count, rows, cols });
    }
    let (count, rows, cols) = (count as usize, rows as usize, cols as usize);

    let mut images = Vec::with_capacity(count.min(PREALLOC_LIMIT));
    for _ in 0..count {
        let pixels = r.read_bytes(pixels_per_image)?;
        images.push(RawImage::new(rows, cols, pixels));
    }
    trace!("read {} image bytes", r.position());

    let set = ImageSet::from_images(rows, cols, images);
    debug!("decoded {} images of {}x{}", set.len(), rows, cols);
    Ok(set)
}
