pub mod config;
pub mod convert;
pub mod dataset;
pub mod display;
pub mod error;
pub mod header;
pub mod images;
pub mod labels;
pub mod source;

pub use config::MnistConfig;
pub use convert::{MAX_INTENSITY, NUM_CLASSES};
pub use dataset::{load, read_set, MnistSet};
pub use error::{IdxError, Result};
pub use header::{IMAGE_MAGIC, LABEL_MAGIC};
pub use images::{read_images, ImageSet, RawImage, MNIST_COLS, MNIST_ROWS};
pub use labels::{read_labels, Label, LabelSet};
pub use source::{read_image_file, read_label_file};
