// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The application layer is written against these traits, not
// against the concrete loaders, so sources can be swapped
// without touching the orchestration code.

use crate::domain::sample::DigitCorpus;
use anyhow::Result;

// ─── ReferenceSource ──────────────────────────────────────────────────────────
/// Any component that can provide the canonical handwritten
/// reference dataset (train and test partitions).
///
/// Implementations:
///   - IdxReferenceSource → reads MNIST IDX files from a directory
///   - (future) a downloading source that fetches and caches them
pub trait ReferenceSource {
    /// Load both partitions, normalised to [0,1] intensities.
    /// Failure here is fatal to the pipeline — there is no other
    /// source of ground-truth calibration data.
    fn load(&self) -> Result<DigitCorpus>;
}
