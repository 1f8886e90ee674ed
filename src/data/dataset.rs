// ============================================================
// Layer 4 — Digit Dataset
// ============================================================
// Implements Burn's Dataset trait over the assembled samples so
// the training collaborator can consume the corpus through the
// standard DataLoader machinery without re-reading the arrays.

use burn::data::dataset::Dataset;

use crate::domain::sample::DigitSample;

pub struct DigitDataset {
    samples: Vec<DigitSample>,
}

impl DigitDataset {
    pub fn new(samples: Vec<DigitSample>) -> Self {
        Self { samples }
    }

    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }
}

impl Dataset<DigitSample> for DigitDataset {
    fn get(&self, index: usize) -> Option<DigitSample> {
        self.samples.get(index).cloned()
    }

    fn len(&self) -> usize {
        self.samples.len()
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::sample::DigitImage;

    #[test]
    fn test_get_and_len() {
        let samples = (1..=3u8)
            .map(|d| DigitSample::new(DigitImage::from_pixels(2, vec![0.0; 4]), d))
            .collect();
        let dataset = DigitDataset::new(samples);

        assert_eq!(dataset.len(), 3);
        assert_eq!(dataset.get(0).map(|s| s.label), Some(1));
        assert!(dataset.get(3).is_none());
    }
}
