// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// This layer orchestrates all the other layers to accomplish a
// specific goal (generating the dataset or previewing glyphs).
//
// Rules for this layer:
//   - No imaging or array math here
//   - No UI or printing here (that's Layer 1)
//   - No direct parsing of files (that's Layer 4 and 5)
//   - Only workflow coordination

// The dataset generation workflow
pub mod generate_use_case;

// The glyph preview workflow
pub mod preview_use_case;
