#![allow(dead_code)]

use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Uncompressed image file: header followed by `pixels` verbatim.
pub fn image_stream(magic: u32, count: u32, rows: u32, cols: u32, pixels: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    for field in [magic, count, rows, cols] {
        out.extend_from_slice(&field.to_be_bytes());
    }
    out.extend_from_slice(pixels);
    out
}

/// Uncompressed label file: header followed by `labels` verbatim.
pub fn label_stream(magic: u32, count: u32, labels: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    out.extend_from_slice(&magic.to_be_bytes());
    out.extend_from_slice(&count.to_be_bytes());
    out.extend_from_slice(labels);
    out
}

pub fn write_gz(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut z = GzEncoder::new(File::create(path)?, Compression::default());
    z.write_all(bytes)?;
    z.finish()?;
    Ok(())
}

/// Writes each part as its own gzip member, one after the other in a single file.
pub fn write_gz_members(path: &Path, parts: &[&[u8]]) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    for part in parts {
        let mut z = GzEncoder::new(&mut file, Compression::default());
        z.write_all(part)?;
        z.finish()?;
    }
    Ok(())
}
