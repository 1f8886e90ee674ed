// ============================================================
// Layer 5 — Run Recorder
// ============================================================
// Writes two JSON files next to the arrays so a generated
// dataset documents itself:
//
//   generation_config.json — the exact settings of the run
//   generation_report.json — what the run produced
//
// The report records how the train partition splits into
// handwritten and synthetic samples, which fonts resolved and
// which were missing, and the seed (if any), so a run can be
// reproduced or audited later.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

use crate::domain::config::GenerationConfig;
use crate::domain::font::FontDescriptor;
use crate::domain::sample::DigitCorpus;

pub const CONFIG_FILE: &str = "generation_config.json";
pub const REPORT_FILE: &str = "generation_report.json";

/// Summary of one completed generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationReport {
    /// Handwritten samples in the train partition
    pub handwritten_train: usize,

    /// Synthetic samples in the train partition
    pub synthetic: usize,

    /// Total train partition size (handwritten + synthetic)
    pub total_train: usize,

    /// Benchmark partition size
    pub test: usize,

    /// Fonts that resolved and contributed samples
    pub fonts_resolved: Vec<String>,

    /// Requested fonts that no search root provided
    pub fonts_missing: Vec<String>,

    /// Replicates per (font, digit) pair
    pub samples_per_font_per_digit: usize,

    /// The seed the run used, if one was fixed
    pub seed: Option<u64>,
}

impl GenerationReport {
    pub fn new(
        corpus: &DigitCorpus,
        synthetic: usize,
        descriptors: &[FontDescriptor],
        cfg: &GenerationConfig,
    ) -> Self {
        let (resolved, missing): (Vec<_>, Vec<_>) =
            descriptors.iter().partition(|d| d.available);

        Self {
            handwritten_train: corpus.train.len() - synthetic,
            synthetic,
            total_train: corpus.train.len(),
            test: corpus.test.len(),
            fonts_resolved: resolved.iter().map(|d| d.requested_name.clone()).collect(),
            fonts_missing: missing.iter().map(|d| d.requested_name.clone()).collect(),
            samples_per_font_per_digit: cfg.samples_per_font_per_digit,
            seed: cfg.seed,
        }
    }
}

/// Writes the config snapshot and run report as pretty JSON.
pub struct RunRecorder {
    dir: PathBuf,
}

impl RunRecorder {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn save_config(&self, cfg: &GenerationConfig) -> Result<()> {
        self.write_json(CONFIG_FILE, cfg)
    }

    pub fn save_report(&self, report: &GenerationReport) -> Result<()> {
        self.write_json(REPORT_FILE, report)
    }

    fn write_json<T: Serialize>(&self, name: &str, value: &T) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("Cannot create '{}'", self.dir.display()))?;

        let path = self.dir.join(name);
        let json = serde_json::to_string_pretty(value)?;
        fs::write(&path, json)
            .with_context(|| format!("Cannot write '{}'", path.display()))?;

        tracing::debug!("Wrote '{}'", path.display());
        Ok(())
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::sample::{DigitImage, DigitSample};

    fn sample(label: u8) -> DigitSample {
        DigitSample::new(DigitImage::from_pixels(28, vec![0.0; 28 * 28]), label)
    }

    #[test]
    fn test_report_counts_add_up() {
        let corpus = DigitCorpus {
            train: (0..5).map(|_| sample(1)).collect(),
            test:  (0..2).map(|_| sample(2)).collect(),
        };
        let descriptors = vec![
            FontDescriptor::resolved("arial.ttf", "/fonts/arial.ttf".into()),
            FontDescriptor::missing("ghost.ttf"),
        ];
        let cfg = GenerationConfig::default();

        let report = GenerationReport::new(&corpus, 3, &descriptors, &cfg);
        assert_eq!(report.handwritten_train, 2);
        assert_eq!(report.synthetic, 3);
        assert_eq!(report.total_train, 5);
        assert_eq!(report.test, 2);
        assert_eq!(report.fonts_resolved, vec!["arial.ttf"]);
        assert_eq!(report.fonts_missing, vec!["ghost.ttf"]);
    }

    #[test]
    fn test_recorder_round_trips_the_report() {
        let dir = tempfile::tempdir().unwrap();
        let corpus = DigitCorpus {
            train: vec![sample(1)],
            test:  Vec::new(),
        };
        let cfg = GenerationConfig {
            seed: Some(42),
            ..GenerationConfig::default()
        };
        let report = GenerationReport::new(&corpus, 1, &[], &cfg);

        let recorder = RunRecorder::new(dir.path());
        recorder.save_report(&report).unwrap();
        recorder.save_config(&cfg).unwrap();

        let json = fs::read_to_string(dir.path().join(REPORT_FILE)).unwrap();
        let loaded: GenerationReport = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded.total_train, 1);
        assert_eq!(loaded.seed, Some(42));
        assert!(dir.path().join(CONFIG_FILE).is_file());
    }
}
