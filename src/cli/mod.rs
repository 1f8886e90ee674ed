// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// This is the entry point for all user interaction.
// It uses the `clap` crate to parse command line arguments.
// All business logic is delegated to Layer 2 (application).
//
// Two commands are supported:
//   1. `generate` — builds and persists the training dataset
//   2. `preview`  — renders sample glyph PNGs for eyeballing

// Declare the commands submodule
pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, GenerateArgs, PreviewArgs};

/// The main CLI struct — clap reads the fields and generates
/// argument parsing code automatically via the Parser derive macro.
#[derive(Parser, Debug)]
#[command(
    name = "sudoku-digit-data",
    version = "0.1.0",
    about = "Generate the Sudoku digit-recogniser training set from fonts + MNIST."
)]
pub struct Cli {
    /// The subcommand to run (generate or preview)
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Match on the subcommand and dispatch to the correct use case.
    /// This keeps the CLI layer thin — it only routes, never computes.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Generate(args) => self.run_generate(args),
            Commands::Preview(args)  => self.run_preview(args),
        }
    }

    /// Handles the `generate` subcommand.
    /// Converts CLI args into a GenerationConfig and hands off to Layer 2.
    fn run_generate(&self, args: GenerateArgs) -> Result<()> {
        use crate::application::generate_use_case::GenerateUseCase;

        tracing::info!("Starting dataset generation into: {}", args.out_dir);

        // Convert CLI args → domain config (separates presentation from domain)
        let use_case = GenerateUseCase::new(args.into());
        use_case.execute()?;

        println!("Data generation complete.");
        Ok(())
    }

    /// Handles the `preview` subcommand.
    /// Renders one augmented PNG per font × digit and prints where.
    fn run_preview(&self, args: PreviewArgs) -> Result<()> {
        use crate::application::preview_use_case::PreviewUseCase;

        let use_case = PreviewUseCase::new(args.into());
        let dir = use_case.execute()?;

        println!("Previews written to {}", dir.display());
        Ok(())
    }
}
