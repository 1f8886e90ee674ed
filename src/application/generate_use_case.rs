// ============================================================
// Layer 2 — GenerateUseCase
// ============================================================
// Orchestrates the full generation pipeline in order:
//
//   Step 1: Load MNIST reference set     (Layer 4 - data, fatal on failure)
//   Step 2: Resolve fonts                (Layer 4 - data)
//   Step 3: Synthesize printed samples   (Layer 4 - data)
//   Step 4: Merge + shuffle              (Layer 4 - data)
//   Step 5: Persist the arrays           (Layer 5 - infra)
//   Step 6: Record the run               (Layer 5 - infra)
//
// All randomness flows from one StdRng created here: seeded from
// the config when a seed is set, from entropy otherwise. A seeded
// run is reproducible end to end.

use anyhow::Result;
use rand::{rngs::StdRng, SeedableRng};

use crate::data::{
    assembler::DatasetAssembler,
    font_catalog::FontCatalog,
    reference::IdxReferenceSource,
};
use crate::domain::config::GenerationConfig;
use crate::domain::traits::ReferenceSource;
use crate::infra::{
    array_store::ArrayStore,
    report::{GenerationReport, RunRecorder},
};

// ─── GenerateUseCase ─────────────────────────────────────────────────────────
// Owns the config and runs the full pipeline.
pub struct GenerateUseCase {
    config: GenerationConfig,
}

impl GenerateUseCase {
    /// Create a new GenerateUseCase with the given configuration
    pub fn new(config: GenerationConfig) -> Self {
        Self { config }
    }

    /// Execute the full generation pipeline end to end
    pub fn execute(&self) -> Result<()> {
        let cfg = &self.config;
        let mut rng = seeded_rng(cfg.seed);

        // ── Step 1: Load the handwritten reference set ────────────────────────
        // No reference data means no ground-truth calibration, so
        // this is the one step that aborts the run.
        tracing::info!("Loading MNIST from '{}'", cfg.data_dir);
        let reference = IdxReferenceSource::new(&cfg.data_dir).load()?;

        // ── Step 2: Resolve fonts ─────────────────────────────────────────────
        let catalog = FontCatalog::new(cfg.font_dirs.iter().map(String::as_str));
        let descriptors = catalog.resolve(&cfg.fonts);
        let available = descriptors.iter().filter(|d| d.available).count();
        tracing::info!(
            "Resolved {available} of {} requested fonts",
            cfg.fonts.len()
        );

        // ── Step 3: Synthesize the printed samples ────────────────────────────
        let assembler = DatasetAssembler::new(cfg)?;
        let synthetic = assembler.synthesize(&descriptors, &mut rng);
        let synthetic_count = synthetic.len();
        tracing::info!("Synthesized {synthetic_count} printed samples");

        // ── Step 4: Merge with MNIST train and shuffle once ───────────────────
        let corpus = assembler.assemble(reference, synthetic, &mut rng);
        tracing::info!("Total training samples: {}", corpus.train.len());

        // ── Step 5: Persist the four arrays ───────────────────────────────────
        ArrayStore::new(&cfg.out_dir).save(&corpus)?;

        // ── Step 6: Record settings and outcome next to the arrays ────────────
        let recorder = RunRecorder::new(&cfg.out_dir);
        recorder.save_config(cfg)?;
        recorder.save_report(&GenerationReport::new(
            &corpus,
            synthetic_count,
            &descriptors,
            cfg,
        ))?;

        Ok(())
    }
}

/// One RNG per run: fixed seed when configured, entropy otherwise.
pub fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}
