// ============================================================
// Layer 3 — FontDescriptor Domain Type
// ============================================================
// The outcome of resolving one requested font file name against
// the configured search roots. Descriptors are produced once at
// pipeline start and never mutated afterwards.
//
// Three shapes occur in practice:
//   - resolved:  available = true,  resolved_path = Some(path)
//   - missing:   available = false, resolved_path = None
//   - fallback:  available = true,  resolved_path = None
//     (the built-in bitmap font, emitted only when nothing at all
//     could be resolved)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Name reported for the built-in fallback font.
pub const BUILTIN_FONT_NAME: &str = "builtin";

/// One requested font and where (or whether) it was found.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FontDescriptor {
    /// The file name that was asked for, e.g. "arial.ttf"
    pub requested_name: String,

    /// Full path of the font file, if one of the search roots had it.
    /// None for missing fonts and for the built-in fallback.
    pub resolved_path: Option<PathBuf>,

    /// Whether this descriptor can be rendered from
    pub available: bool,
}

impl FontDescriptor {
    /// A descriptor for a font found on disk.
    pub fn resolved(requested_name: impl Into<String>, path: PathBuf) -> Self {
        Self {
            requested_name: requested_name.into(),
            resolved_path:  Some(path),
            available:      true,
        }
    }

    /// A descriptor for a font that no search root could provide.
    pub fn missing(requested_name: impl Into<String>) -> Self {
        Self {
            requested_name: requested_name.into(),
            resolved_path:  None,
            available:      false,
        }
    }

    /// The built-in bitmap font, used when the resolved set would
    /// otherwise be empty.
    pub fn builtin_fallback() -> Self {
        Self {
            requested_name: BUILTIN_FONT_NAME.to_string(),
            resolved_path:  None,
            available:      true,
        }
    }

    /// True for the descriptor produced by [`Self::builtin_fallback`].
    pub fn is_builtin(&self) -> bool {
        self.available && self.resolved_path.is_none()
    }
}
