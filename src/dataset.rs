use crate::config::MnistConfig;
use crate::error::{IdxError, Result};
use crate::images::{ImageSet, RawImage};
use crate::labels::{Label, LabelSet};
use crate::source::{read_image_file, read_label_file};
use log::info;
use ndarray::prelude::*;
use rand::seq::SliceRandom;
use rand::Rng;
use std::path::Path;

/// Images paired with their labels, sample `i` of one belongs to sample `i` of the other.
#[derive(Debug, Clone)]
pub struct MnistSet {
    images: ImageSet,
    labels: LabelSet,
}

impl MnistSet {
    pub fn new(images: ImageSet, labels: LabelSet) -> Result<MnistSet> {
        if images.len() != labels.len() {
            return Err(IdxError::CountMismatch {
                images: images.len(),
                labels: labels.len(),
            });
        }
        Ok(MnistSet { images, labels })
    }

    pub fn images(&self) -> &ImageSet {
        &self.images
    }

    pub fn labels(&self) -> &LabelSet {
        &self.labels
    }

    pub fn rows(&self) -> usize {
        self.images.rows()
    }

    pub fn cols(&self) -> usize {
        self.images.cols()
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn get(&self, idx: usize) -> Option<(&RawImage, Label)> {
        Some((self.images.get(idx)?, self.labels.get(idx)?))
    }

    /// Sweeps the set in file order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&RawImage, Label)> + '_ {
        self.images
            .images()
            .iter()
            .zip(self.labels.labels().iter().copied())
    }

    /// A random permutation of `0..len()`.
    pub fn shuffled_indices<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..self.len()).collect();
        indices.shuffle(rng);
        indices
    }

    /// Gathers normalized pixels (batch, rows * cols) and one-hot targets (batch, 10)
    /// for the given samples. `None` if any index is out of range.
    pub fn batch(&self, indices: &[usize]) -> Option<(Array2<f64>, Array2<f64>)> {
        if indices.iter().any(|&i| i >= self.len()) {
            return None;
        }
        let inputs = self.images.normalized().select(Axis(0), indices);
        let targets = self.labels.one_hot().select(Axis(0), indices);
        Some((inputs, targets))
    }
}

/// Reads a gzip image file and its gzip label file as one set.
pub fn read_set<P: AsRef<Path>, Q: AsRef<Path>>(
    images_path: P,
    labels_path: Q,
) -> Result<MnistSet> {
    let images = read_image_file(images_path)?;
    let labels = read_label_file(labels_path)?;
    MnistSet::new(images, labels)
}

/// Loads the training and test sets named by `config`.
/// Returns: (train, test)
pub fn load(config: &MnistConfig) -> Result<(MnistSet, MnistSet)> {
    let (train_images, train_labels) = config.train_paths();
    let train = read_set(&train_images, &train_labels)?;
    info!("[TRAIN] len: {}", train.len());

    let (test_images, test_labels) = config.test_paths();
    let test = read_set(&test_images, &test_labels)?;
    info!("[TEST] len: {}", test.len());

    Ok((train, test))
}
