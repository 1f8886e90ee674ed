// ============================================================
// Layer 5 — Infrastructure Layer
// ============================================================
// Cross-cutting persistence concerns:
//
//   array_store.rs — writes the four .npy output arrays
//                    (x_train / y_train / x_test / y_test) with
//                    tmp-file-then-rename so no partial file ever
//                    sits under a final name.
//
//   report.rs      — writes generation_config.json and
//                    generation_report.json next to the arrays so
//                    a dataset records how it was produced.

/// The four .npy output arrays
pub mod array_store;

/// Config snapshot and run report JSON files
pub mod report;
