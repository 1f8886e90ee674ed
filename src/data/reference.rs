// ============================================================
// Layer 4 — Reference Dataset Loader
// ============================================================
// Reads the canonical handwritten reference set (MNIST) from the
// four IDX files the distribution ships:
//
//   train-images-idx3-ubyte   60000 × 28 × 28 u8
//   train-labels-idx1-ubyte   60000 u8
//   t10k-images-idx3-ubyte    10000 × 28 × 28 u8
//   t10k-labels-idx1-ubyte    10000 u8
//
// IDX layout (all integers big-endian):
//   images: magic 2051, count, rows, cols, then count*rows*cols bytes
//   labels: magic 2049, count,             then count bytes
//
// A missing or malformed file is fatal — the pipeline has no other
// source of ground-truth calibration data, so the error carries a
// hint about where the files were expected.

use anyhow::{bail, Context, Result};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::domain::sample::{DigitCorpus, DigitImage, DigitSample};
use crate::domain::traits::ReferenceSource;

const IMAGES_MAGIC: u32 = 2051;
const LABELS_MAGIC: u32 = 2049;

pub const TRAIN_IMAGES: &str = "train-images-idx3-ubyte";
pub const TRAIN_LABELS: &str = "train-labels-idx1-ubyte";
pub const TEST_IMAGES: &str = "t10k-images-idx3-ubyte";
pub const TEST_LABELS: &str = "t10k-labels-idx1-ubyte";

/// Loads MNIST from a directory of IDX files.
/// Implements the ReferenceSource trait from Layer 3.
pub struct IdxReferenceSource {
    /// Directory containing the four IDX files
    dir: PathBuf,
}

impl IdxReferenceSource {
    /// Create a new source pointed at a directory
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl ReferenceSource for IdxReferenceSource {
    fn load(&self) -> Result<DigitCorpus> {
        let train = load_partition(&self.dir, TRAIN_IMAGES, TRAIN_LABELS)?;
        let test  = load_partition(&self.dir, TEST_IMAGES, TEST_LABELS)?;

        tracing::info!(
            "Loaded reference dataset: {} train, {} test samples",
            train.len(),
            test.len()
        );

        Ok(DigitCorpus { train, test })
    }
}

/// Load one (images, labels) file pair and zip it into samples.
fn load_partition(dir: &Path, images_name: &str, labels_name: &str) -> Result<Vec<DigitSample>> {
    let images = read_idx_images(&dir.join(images_name))?;
    let labels = read_idx_labels(&dir.join(labels_name))?;

    if images.len() != labels.len() {
        bail!(
            "'{images_name}' holds {} images but '{labels_name}' holds {} labels",
            images.len(),
            labels.len(),
        );
    }

    images
        .into_iter()
        .zip(labels)
        .map(|(image, label)| {
            if label > 9 {
                bail!("'{labels_name}' contains label {label}, outside 0..=9");
            }
            Ok(DigitSample::new(image, label))
        })
        .collect()
}

/// Parse an IDX images file into normalised DigitImages.
fn read_idx_images(path: &Path) -> Result<Vec<DigitImage>> {
    let bytes = read_idx_file(path)?;

    let magic = be_u32(&bytes, 0, path)?;
    if magic != IMAGES_MAGIC {
        bail!(
            "'{}' is not an IDX images file (magic {magic}, expected {IMAGES_MAGIC})",
            path.display()
        );
    }

    let count = be_u32(&bytes, 4, path)? as usize;
    let rows  = be_u32(&bytes, 8, path)?;
    let cols  = be_u32(&bytes, 12, path)?;
    if rows != cols {
        bail!(
            "'{}' holds {rows}×{cols} images; this pipeline only handles square canvases",
            path.display()
        );
    }

    let pixels_per_image = (rows * cols) as usize;
    let expected = 16 + count * pixels_per_image;
    if bytes.len() != expected {
        bail!(
            "'{}' is {} bytes, expected {expected} for {count} {rows}×{cols} images",
            path.display(),
            bytes.len()
        );
    }

    Ok(bytes[16..]
        .chunks_exact(pixels_per_image)
        .map(|chunk| DigitImage::from_bytes(rows, chunk))
        .collect())
}

/// Parse an IDX labels file.
fn read_idx_labels(path: &Path) -> Result<Vec<u8>> {
    let bytes = read_idx_file(path)?;

    let magic = be_u32(&bytes, 0, path)?;
    if magic != LABELS_MAGIC {
        bail!(
            "'{}' is not an IDX labels file (magic {magic}, expected {LABELS_MAGIC})",
            path.display()
        );
    }

    let count = be_u32(&bytes, 4, path)? as usize;
    if bytes.len() != 8 + count {
        bail!(
            "'{}' is {} bytes, expected {} for {count} labels",
            path.display(),
            bytes.len(),
            8 + count
        );
    }

    Ok(bytes[8..].to_vec())
}

fn read_idx_file(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).with_context(|| {
        format!(
            "Cannot read '{}'. Download the MNIST IDX files into this \
             directory before generating.",
            path.display()
        )
    })
}

/// Read a big-endian u32 at `offset`, with the file name in the error.
fn be_u32(bytes: &[u8], offset: usize, path: &Path) -> Result<u32> {
    let slice = bytes
        .get(offset..offset + 4)
        .with_context(|| format!("'{}' is truncated", path.display()))?;
    let arr: [u8; 4] = slice.try_into()?;
    Ok(u32::from_be_bytes(arr))
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    /// Write a tiny IDX image file: `images` are flat 28×28 byte grids.
    fn write_images(path: &Path, images: &[Vec<u8>]) {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&IMAGES_MAGIC.to_be_bytes());
        bytes.extend_from_slice(&(images.len() as u32).to_be_bytes());
        bytes.extend_from_slice(&28u32.to_be_bytes());
        bytes.extend_from_slice(&28u32.to_be_bytes());
        for img in images {
            bytes.extend_from_slice(img);
        }
        fs::write(path, bytes).unwrap();
    }

    fn write_labels(path: &Path, labels: &[u8]) {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&LABELS_MAGIC.to_be_bytes());
        bytes.extend_from_slice(&(labels.len() as u32).to_be_bytes());
        bytes.extend_from_slice(labels);
        fs::write(path, bytes).unwrap();
    }

    fn write_fixture(dir: &Path, train: usize, test: usize) {
        let img = vec![255u8; 28 * 28];
        write_images(&dir.join(TRAIN_IMAGES), &vec![img.clone(); train]);
        write_labels(&dir.join(TRAIN_LABELS), &vec![7u8; train]);
        write_images(&dir.join(TEST_IMAGES), &vec![img; test]);
        write_labels(&dir.join(TEST_LABELS), &vec![3u8; test]);
    }

    #[test]
    fn test_loads_both_partitions() {
        let dir = tempfile::tempdir().unwrap();
        write_fixture(dir.path(), 4, 2);

        let corpus = IdxReferenceSource::new(dir.path()).load().unwrap();
        assert_eq!(corpus.train.len(), 4);
        assert_eq!(corpus.test.len(), 2);
        assert_eq!(corpus.train[0].label, 7);
        assert_eq!(corpus.test[0].label, 3);
    }

    #[test]
    fn test_normalises_intensities() {
        let dir = tempfile::tempdir().unwrap();
        write_fixture(dir.path(), 1, 1);

        let corpus = IdxReferenceSource::new(dir.path()).load().unwrap();
        let image = &corpus.train[0].image;
        assert_eq!(image.side(), 28);
        assert!(image.pixels().iter().all(|&p| p == 1.0));
    }

    #[test]
    fn test_missing_directory_is_fatal_with_hint() {
        let err = IdxReferenceSource::new("/definitely/not/here")
            .load()
            .unwrap_err();
        assert!(format!("{err:#}").contains(TRAIN_IMAGES));
    }

    #[test]
    fn test_count_mismatch_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let img = vec![0u8; 28 * 28];
        write_images(&dir.path().join(TRAIN_IMAGES), &[img.clone(), img.clone()]);
        write_labels(&dir.path().join(TRAIN_LABELS), &[1]);
        write_images(&dir.path().join(TEST_IMAGES), &[img]);
        write_labels(&dir.path().join(TEST_LABELS), &[1]);

        assert!(IdxReferenceSource::new(dir.path()).load().is_err());
    }

    #[test]
    fn test_wrong_magic_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        write_fixture(dir.path(), 1, 1);
        // Overwrite the train images file with a labels-style header
        write_labels(&dir.path().join(TRAIN_IMAGES), &[1, 2, 3]);

        assert!(IdxReferenceSource::new(dir.path()).load().is_err());
    }
}
