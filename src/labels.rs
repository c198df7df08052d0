use crate::convert::{one_hot, NUM_CLASSES};
use crate::error::{IdxError, Result};
use crate::header::{IdxReader, LABEL_MAGIC};
use log::debug;
use ndarray::prelude::*;
use std::fmt;
use std::io::Read;

/// A digit label in 0 to 9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Label(u8);

impl Label {
    pub fn value(self) -> u8 {
        self.0
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl TryFrom<u8> for Label {
    type Error = u8;

    fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
        if (value as usize) < NUM_CLASSES {
            Ok(Label(value))
        } else {
            Err(value)
        }
    }
}

impl From<Label> for u8 {
    fn from(label: Label) -> u8 {
        label.0
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A decoded label file. `one_hot` has shape (count, 10).
#[derive(Debug, Clone)]
pub struct LabelSet {
    labels: Vec<Label>,
    one_hot: Array2<f64>,
}

impl LabelSet {
    pub(crate) fn from_bytes(bytes: Vec<u8>) -> Result<LabelSet> {
        let labels = bytes
            .iter()
            .enumerate()
            .map(|(index, &value)| {
                Label::try_from(value).map_err(|value| IdxError::LabelOutOfRange { index, value })
            })
            .collect::<Result<Vec<_>>>()?;
        let one_hot = one_hot(&bytes);
        Ok(LabelSet { labels, one_hot })
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    pub fn get(&self, idx: usize) -> Option<Label> {
        self.labels.get(idx).copied()
    }

    pub fn one_hot(&self) -> &Array2<f64> {
        &self.one_hot
    }

    pub fn into_parts(self) -> (Vec<Label>, Array2<f64>) {
        (self.labels, self.one_hot)
    }
}

/// Decodes an uncompressed label stream.
///
/// Layout: magic `0x00000801`, `count` as big-endian u32, then one byte per label.
/// Bytes outside 0..=9 are rejected rather than indexed into the one-hot row.
pub fn read_labels<R: Read>(reader: R) -> Result<LabelSet> {
    let mut r = IdxReader::new(reader);
    r.expect_magic(LABEL_MAGIC)?;
    let count = r.read_u32()? as usize;
    debug!("label header: count={}", count);

    let bytes = r.read_bytes(count)?;

    let set = LabelSet::from_bytes(bytes)?;
    debug!("decoded {} labels", set.len());
    Ok(set)
}
