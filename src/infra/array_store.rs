// ============================================================
// Layer 5 — Array Store
// ============================================================
// Persists the assembled corpus as the four NumPy arrays the
// training script loads:
//
//   out_dir/
//     x_train.npy   float32, total_train × 28 × 28 × 1
//     y_train.npy   int64,   total_train
//     x_test.npy    float32, test_count × 28 × 28 × 1
//     y_test.npy    int64,   test_count
//
// Every array is written to a temporary name and renamed into
// place only once the write succeeded, so an aborted run never
// leaves a partial file under a final name.

use anyhow::{bail, Context, Result};
use ndarray::{Array1, Array4, ArrayBase, Data, Dimension};
use ndarray_npy::WritableElement;
use std::{fs, path::PathBuf};

use crate::domain::sample::{DigitCorpus, DigitSample};

pub const TRAIN_IMAGES_FILE: &str = "x_train.npy";
pub const TRAIN_LABELS_FILE: &str = "y_train.npy";
pub const TEST_IMAGES_FILE: &str = "x_test.npy";
pub const TEST_LABELS_FILE: &str = "y_test.npy";

/// Writes the output arrays into one directory.
pub struct ArrayStore {
    /// Directory the .npy files are written to
    dir: PathBuf,
}

impl ArrayStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Persist both partitions. Any failure here is fatal to the
    /// run and is surfaced to the caller.
    ///
    /// All four arrays are staged under .tmp names first and only
    /// renamed to their final names once every write succeeded, so
    /// a failed run never leaves a partial set of final files.
    pub fn save(&self, corpus: &DigitCorpus) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("Cannot create output directory '{}'", self.dir.display()))?;

        let mut staged = Vec::new();
        self.stage_partition(&corpus.train, TRAIN_IMAGES_FILE, TRAIN_LABELS_FILE, &mut staged)?;
        self.stage_partition(&corpus.test, TEST_IMAGES_FILE, TEST_LABELS_FILE, &mut staged)?;

        for (tmp, path) in &staged {
            fs::rename(tmp, path)
                .with_context(|| format!("Cannot move '{}' into place", tmp.display()))?;
            tracing::debug!("Wrote '{}'", path.display());
        }

        tracing::info!(
            "Wrote {} train and {} test samples to '{}'",
            corpus.train.len(),
            corpus.test.len(),
            self.dir.display()
        );
        Ok(())
    }

    fn stage_partition(
        &self,
        samples: &[DigitSample],
        images_name: &str,
        labels_name: &str,
        staged: &mut Vec<(PathBuf, PathBuf)>,
    ) -> Result<()> {
        let images = stack_images(samples)
            .with_context(|| format!("Cannot build the '{images_name}' array"))?;
        let labels: Array1<i64> = samples.iter().map(|s| i64::from(s.label)).collect();

        staged.push(self.stage_array(images_name, &images)?);
        staged.push(self.stage_array(labels_name, &labels)?);
        Ok(())
    }

    /// Write one array to `<name>.tmp` and return (tmp, final) paths.
    fn stage_array<A, S, D>(
        &self,
        name: &str,
        array: &ArrayBase<S, D>,
    ) -> Result<(PathBuf, PathBuf)>
    where
        A: WritableElement,
        S: Data<Elem = A>,
        D: Dimension,
    {
        let tmp = self.dir.join(format!("{name}.tmp"));
        ndarray_npy::write_npy(&tmp, array)
            .with_context(|| format!("Cannot write '{}'", tmp.display()))?;
        Ok((tmp, self.dir.join(name)))
    }
}

/// Stack samples into one images array with a trailing singleton
/// channel dimension: (count, side, side, 1).
fn stack_images(samples: &[DigitSample]) -> Result<Array4<f32>> {
    let Some(first) = samples.first() else {
        bail!("refusing to persist an empty partition");
    };
    let side = first.image.side() as usize;

    let mut flat = Vec::with_capacity(samples.len() * side * side);
    for sample in samples {
        if sample.image.side() as usize != side {
            bail!(
                "mixed image sizes in one partition: {} and {}",
                side,
                sample.image.side()
            );
        }
        flat.extend_from_slice(sample.image.pixels());
    }

    Ok(Array4::from_shape_vec(
        (samples.len(), side, side, 1),
        flat,
    )?)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::sample::DigitImage;
    use ndarray_npy::read_npy;

    fn sample(label: u8, fill: f32) -> DigitSample {
        DigitSample::new(DigitImage::from_pixels(28, vec![fill; 28 * 28]), label)
    }

    #[test]
    fn test_writes_all_four_arrays() {
        let dir = tempfile::tempdir().unwrap();
        let corpus = DigitCorpus {
            train: vec![sample(1, 0.25), sample(2, 0.5)],
            test:  vec![sample(3, 0.75)],
        };

        ArrayStore::new(dir.path()).save(&corpus).unwrap();

        for name in [
            TRAIN_IMAGES_FILE,
            TRAIN_LABELS_FILE,
            TEST_IMAGES_FILE,
            TEST_LABELS_FILE,
        ] {
            assert!(dir.path().join(name).is_file(), "missing {name}");
            assert!(!dir.path().join(format!("{name}.tmp")).exists());
        }
    }

    #[test]
    fn test_round_trips_shapes_and_values() {
        let dir = tempfile::tempdir().unwrap();
        let corpus = DigitCorpus {
            train: vec![sample(7, 0.5), sample(4, 0.0)],
            test:  vec![sample(9, 1.0)],
        };

        ArrayStore::new(dir.path()).save(&corpus).unwrap();

        let x_train: Array4<f32> = read_npy(dir.path().join(TRAIN_IMAGES_FILE)).unwrap();
        let y_train: Array1<i64> = read_npy(dir.path().join(TRAIN_LABELS_FILE)).unwrap();
        let x_test: Array4<f32> = read_npy(dir.path().join(TEST_IMAGES_FILE)).unwrap();
        let y_test: Array1<i64> = read_npy(dir.path().join(TEST_LABELS_FILE)).unwrap();

        assert_eq!(x_train.shape(), &[2, 28, 28, 1]);
        assert_eq!(y_train.to_vec(), vec![7, 4]);
        assert_eq!(x_test.shape(), &[1, 28, 28, 1]);
        assert_eq!(y_test.to_vec(), vec![9]);
        assert_eq!(x_train[[0, 0, 0, 0]], 0.5);
        assert_eq!(x_test[[0, 27, 27, 0]], 1.0);
    }

    #[test]
    fn test_empty_partition_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let corpus = DigitCorpus {
            train: Vec::new(),
            test:  vec![sample(1, 0.0)],
        };
        assert!(ArrayStore::new(dir.path()).save(&corpus).is_err());
    }

    #[test]
    fn test_failed_save_leaves_no_final_files() {
        let dir = tempfile::tempdir().unwrap();
        // Train partition stages fine, the empty test partition
        // fails — nothing may appear under a final name.
        let corpus = DigitCorpus {
            train: vec![sample(1, 0.5)],
            test:  Vec::new(),
        };

        assert!(ArrayStore::new(dir.path()).save(&corpus).is_err());
        for name in [
            TRAIN_IMAGES_FILE,
            TRAIN_LABELS_FILE,
            TEST_IMAGES_FILE,
            TEST_LABELS_FILE,
        ] {
            assert!(!dir.path().join(name).exists(), "unexpected {name}");
        }
    }
}
