use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Where the four MNIST files live.
///
/// Loaded from JSON; any field left out takes the standard file name.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct MnistConfig {
    pub data_dir: PathBuf,
    pub train_images: String,
    pub train_labels: String,
    pub test_images: String,
    pub test_labels: String,
}

impl Default for MnistConfig {
    fn default() -> Self {
        MnistConfig {
            data_dir: PathBuf::from("data/"),
            train_images: "train-images-idx3-ubyte.gz".to_string(),
            train_labels: "train-labels-idx1-ubyte.gz".to_string(),
            test_images: "t10k-images-idx3-ubyte.gz".to_string(),
            test_labels: "t10k-labels-idx1-ubyte.gz".to_string(),
        }
    }
}

impl MnistConfig {
    /// Standard file names under `data_dir`.
    pub fn new<P: Into<PathBuf>>(data_dir: P) -> Self {
        MnistConfig {
            data_dir: data_dir.into(),
            ..Default::default()
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn train_paths(&self) -> (PathBuf, PathBuf) {
        (
            self.data_dir.join(&self.train_images),
            self.data_dir.join(&self.train_labels),
        )
    }

    pub fn test_paths(&self) -> (PathBuf, PathBuf) {
        (
            self.data_dir.join(&self.test_images),
            self.data_dir.join(&self.test_labels),
        )
    }
}
