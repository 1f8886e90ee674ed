// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain Rust structs and traits that define the core concepts
// of the pipeline.
//
// Rules for this layer:
//   - NO imaging/font/array framework types allowed here
//   - NO file I/O
//   - Only plain Rust structs, enums, and traits
//
// The data layer converts these types to and from the
// image / fontdue / ndarray representations it needs.

// A digit image, a labelled sample, and the train/test corpus
pub mod sample;

// The outcome of resolving one requested font
pub mod font;

// The immutable configuration value for a whole run
pub mod config;

// Core abstractions (traits) that other layers implement
pub mod traits;
