// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// This layer handles everything from raw MNIST files and font
// resources all the way to the assembled training corpus.
//
// The pipeline flows in this order:
//
//   MNIST IDX files            font search roots
//       │                           │
//       ▼                           ▼
//   IdxReferenceSource         FontCatalog
//       │                           │ resolved descriptors
//       │                           ▼
//       │                      DigitRenderer   → glyph on 28×28 canvas
//       │                           │             (builtin_font on failure)
//       │                           ▼
//       │                      ImageAugmenter  → rotate / noise / blur
//       │                           │
//       └───────────┬───────────────┘
//                   ▼
//             DatasetAssembler → merge, one paired shuffle
//                   │
//                   ▼
//             DigitDataset     → Dataset handoff for the trainer
//
// Each module is responsible for exactly one step.

/// Loads the MNIST IDX files into the domain corpus
pub mod reference;

/// Resolves requested font names against the search roots
pub mod font_catalog;

/// Rasterizes digit glyphs onto the fixed-size canvas
pub mod renderer;

/// Compiled-in bitmap digit glyphs, the never-fails fallback font
pub mod builtin_font;

/// Randomized rotation / noise / blur perturbation
pub mod augment;

/// Drives the font×digit×replicate grid, merges and shuffles
pub mod assembler;

/// Implements Burn's Dataset trait over the assembled samples
pub mod dataset;
