use crate::error::Result;
use crate::images::{read_images, ImageSet};
use crate::labels::{read_labels, LabelSet};
use flate2::read::MultiGzDecoder;
use log::debug;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Opens a gzip-compressed file and returns the decompressed byte stream.
///
/// Concatenated gzip members are read back to back as one stream.
pub fn open_gz<P: AsRef<Path>>(path: P) -> Result<MultiGzDecoder<BufReader<File>>> {
    let path = path.as_ref();
    debug!("opening {}", path.display());
    let file = File::open(path)?;
    Ok(MultiGzDecoder::new(BufReader::new(file)))
}

/// Opens the named image file (training or test), decompresses and decodes it.
pub fn read_image_file<P: AsRef<Path>>(path: P) -> Result<ImageSet> {
    let stream = open_gz(path)?;
    read_images(stream)
}

/// Opens the named label file (training or test), decompresses and decodes it.
pub fn read_label_file<P: AsRef<Path>>(path: P) -> Result<LabelSet> {
    let stream = open_gz(path)?;
    read_labels(stream)
}
