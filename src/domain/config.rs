// ============================================================
// Layer 3 — Generation Configuration
// ============================================================
// Every knob for one dataset-generation run, collected into a
// single immutable value that is passed into each component.
// Nothing in the pipeline reads ambient/global configuration.
//
// Serialisable so the exact settings of a run can be saved next
// to the arrays it produced (see infra::report).
//
// Digit range: Sudoku cells hold 1-9 and empty cells are handled
// by the scanner before classification, so synthetic generation
// covers 1..=9 by default. Setting `include_zero` adds a printed
// "0" class on top; the handwritten reference set keeps its full
// 0..=9 label space either way.

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// All settings for one generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Directory holding the four MNIST IDX files
    pub data_dir: String,

    /// Directory the output arrays are written to
    pub out_dir: String,

    /// Ordered font search roots, probed first to last
    pub font_dirs: Vec<String>,

    /// Font file names to look for under the search roots
    pub fonts: Vec<String>,

    /// Canvas side length in pixels for every sample
    pub image_size: u32,

    /// Synthetic replicates per (font, digit) pair
    pub samples_per_font_per_digit: usize,

    /// Also synthesise a printed "0" class
    pub include_zero: bool,

    /// Rotation angle range in degrees, sampled uniformly
    pub rotation_range_degrees: (f32, f32),

    /// Chance that Gaussian noise is added to a sample
    pub noise_probability: f64,

    /// Standard deviation of the zero-mean Gaussian noise
    pub noise_stddev: f32,

    /// Chance that a sample is blurred
    pub blur_probability: f64,

    /// Sigma of the Gaussian blur (0.8 matches a 3-tap kernel)
    pub blur_sigma: f32,

    /// Fixed RNG seed for reproducible runs; None draws from entropy
    pub seed: Option<u64>,
}

impl GenerationConfig {
    /// The digits synthetic generation covers, as an inclusive range.
    pub fn digits(&self) -> RangeInclusive<u8> {
        if self.include_zero {
            0..=9
        } else {
            1..=9
        }
    }

    /// Number of digit classes synthetic generation covers.
    pub fn digit_count(&self) -> usize {
        self.digits().count()
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            data_dir: "data/mnist".to_string(),
            out_dir:  "data/generated".to_string(),
            font_dirs: vec![
                "/usr/share/fonts/truetype/msttcorefonts".to_string(),
                "/usr/share/fonts/truetype".to_string(),
                "/usr/share/fonts".to_string(),
                "C:/Windows/Fonts".to_string(),
            ],
            fonts: vec![
                "arial.ttf".to_string(),
                "times.ttf".to_string(),
                "cour.ttf".to_string(),
                "calibri.ttf".to_string(),
                "verdana.ttf".to_string(),
                // fixed width, renders digits with even spacing
                "consola.ttf".to_string(),
            ],
            image_size:                 28,
            samples_per_font_per_digit: 2000,
            include_zero:               false,
            rotation_range_degrees:     (-15.0, 15.0),
            noise_probability:          0.5,
            noise_stddev:               0.05,
            blur_probability:           0.3,
            blur_sigma:                 0.8,
            seed:                       None,
        }
    }
}
