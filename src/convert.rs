//! Byte to float conversions shared by the image and label decoders.

use ndarray::prelude::*;

/// Largest raw pixel intensity.
pub const MAX_INTENSITY: f64 = 255.0;
/// Number of digit classes, the length of a one-hot vector.
pub const NUM_CLASSES: usize = 10;

#[inline]
pub fn intensity(b: u8) -> f64 {
    f64::from(b)
}

/// Maps 0..=255 onto 0.0..=1.0, with 0 and 255 landing exactly on the ends.
#[inline]
pub fn normalized(b: u8) -> f64 {
    f64::from(b) / MAX_INTENSITY
}

/// Stacks equally sized byte rows into a (rows.len(), width) matrix.
pub fn to_matrix<'a, I, F>(rows: I, width: usize, f: F) -> Array2<f64>
where
    I: ExactSizeIterator<Item = &'a [u8]>,
    F: Fn(u8) -> f64,
{
    let height = rows.len();
    let mut out = Array2::zeros((height, width));
    for (mut dst, src) in out.outer_iter_mut().zip(rows) {
        debug_assert_eq!(src.len(), width);
        for (d, &s) in dst.iter_mut().zip(src) {
            *d = f(s);
        }
    }
    out
}

/// One row per class index, 1.0 at the class and 0.0 elsewhere.
///
/// Indices must already be below `NUM_CLASSES`.
pub fn one_hot(classes: &[u8]) -> Array2<f64> {
    let mut out = Array2::zeros((classes.len(), NUM_CLASSES));
    for (i, &c) in classes.iter().enumerate() {
        out[[i, c as usize]] = 1.0;
    }
    out
}
