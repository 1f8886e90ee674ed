// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the two subcommands: `generate` and `preview`
// and their configurable flags. Every flag defaults to the
// corresponding GenerationConfig constant; repeatable flags
// (--font-dir, --font) replace the default lists when given.

use clap::{Args, Subcommand};

use crate::domain::config::GenerationConfig;

/// The two top-level subcommands available to the user
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate the training dataset (fonts + MNIST → .npy arrays)
    Generate(GenerateArgs),

    /// Render one augmented PNG per font × digit for eyeballing
    Preview(PreviewArgs),
}

/// All arguments for the `generate` command.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Directory containing the four MNIST IDX files
    #[arg(long, default_value = "data/mnist")]
    pub data_dir: String,

    /// Directory to write the output arrays to
    #[arg(long, default_value = "data/generated")]
    pub out_dir: String,

    /// Font search root; repeat the flag for an ordered list
    #[arg(long = "font-dir")]
    pub font_dirs: Vec<String>,

    /// Font file name to look for; repeat the flag for several
    #[arg(long = "font")]
    pub fonts: Vec<String>,

    /// Synthetic replicates per (font, digit) pair
    #[arg(long, default_value_t = 2000)]
    pub samples_per_font_per_digit: usize,

    /// Also synthesise a printed "0" class
    #[arg(long, default_value_t = false)]
    pub include_zero: bool,

    /// Fixed RNG seed for a reproducible run
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Convert CLI GenerateArgs into the domain GenerationConfig.
/// This is the boundary between Layer 1 and Layer 2 —
/// the application layer never sees clap types.
impl From<GenerateArgs> for GenerationConfig {
    fn from(a: GenerateArgs) -> Self {
        let mut cfg = GenerationConfig::default();
        cfg.data_dir = a.data_dir;
        cfg.out_dir  = a.out_dir;
        if !a.font_dirs.is_empty() {
            cfg.font_dirs = a.font_dirs;
        }
        if !a.fonts.is_empty() {
            cfg.fonts = a.fonts;
        }
        cfg.samples_per_font_per_digit = a.samples_per_font_per_digit;
        cfg.include_zero = a.include_zero;
        cfg.seed = a.seed;
        cfg
    }
}

/// All arguments for the `preview` command
#[derive(Args, Debug)]
pub struct PreviewArgs {
    /// Directory the preview/ folder is created under
    #[arg(long, default_value = "data/generated")]
    pub out_dir: String,

    /// Font search root; repeat the flag for an ordered list
    #[arg(long = "font-dir")]
    pub font_dirs: Vec<String>,

    /// Font file name to look for; repeat the flag for several
    #[arg(long = "font")]
    pub fonts: Vec<String>,

    /// Also preview the printed "0" class
    #[arg(long, default_value_t = false)]
    pub include_zero: bool,

    /// Fixed RNG seed for a reproducible preview
    #[arg(long)]
    pub seed: Option<u64>,
}

impl From<PreviewArgs> for GenerationConfig {
    fn from(a: PreviewArgs) -> Self {
        let mut cfg = GenerationConfig::default();
        cfg.out_dir = a.out_dir;
        if !a.font_dirs.is_empty() {
            cfg.font_dirs = a.font_dirs;
        }
        if !a.fonts.is_empty() {
            cfg.fonts = a.fonts;
        }
        cfg.include_zero = a.include_zero;
        cfg.seed = a.seed;
        cfg
    }
}
