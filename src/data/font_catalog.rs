// ============================================================
// Layer 4 — Font Catalog
// ============================================================
// Resolves the requested font file names against an ordered list
// of search roots. For every request the roots are probed first
// to last and the first hit wins.
//
// Missing fonts are not fatal: they produce an unavailable
// descriptor and a warning, and generation continues with the
// fonts that were found. Only when nothing at all resolves does
// the catalog emit a single built-in fallback descriptor, so the
// renderer is never starved of a usable font.
//
// Resolution is deterministic given the filesystem state and has
// no side effects beyond diagnostics.

use std::path::PathBuf;

use crate::domain::font::FontDescriptor;

/// Probes font requests against configured search roots.
pub struct FontCatalog {
    /// Roots probed in order; earlier roots win
    search_roots: Vec<PathBuf>,
}

impl FontCatalog {
    /// Create a catalog over an ordered list of search roots.
    pub fn new<I, P>(search_roots: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            search_roots: search_roots.into_iter().map(Into::into).collect(),
        }
    }

    /// Resolve every requested font name to a descriptor.
    ///
    /// The returned list keeps the request order and contains one
    /// descriptor per request; if none of them is available, one
    /// extra built-in fallback descriptor is appended.
    pub fn resolve(&self, requests: &[String]) -> Vec<FontDescriptor> {
        let mut descriptors: Vec<FontDescriptor> = requests
            .iter()
            .map(|name| match self.probe(name) {
                Some(path) => {
                    tracing::debug!("Resolved font '{}' to '{}'", name, path.display());
                    FontDescriptor::resolved(name, path)
                }
                None => {
                    tracing::warn!(
                        "Font '{}' not found under any search root — skipping",
                        name
                    );
                    FontDescriptor::missing(name)
                }
            })
            .collect();

        if !descriptors.iter().any(|d| d.available) {
            tracing::warn!("No requested fonts resolved — using the built-in font");
            descriptors.push(FontDescriptor::builtin_fallback());
        }

        descriptors
    }

    fn probe(&self, name: &str) -> Option<PathBuf> {
        self.search_roots
            .iter()
            .map(|root| root.join(name))
            .find(|candidate| candidate.is_file())
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn requests(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_one_missing_font_shrinks_the_resolved_set_by_one() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("arial.ttf"), b"stub").unwrap();

        let catalog = FontCatalog::new([dir.path()]);
        let descriptors = catalog.resolve(&requests(&["arial.ttf", "missing.ttf"]));

        assert_eq!(descriptors.len(), 2);
        let available = descriptors.iter().filter(|d| d.available).count();
        assert_eq!(available, 1);
        assert!(descriptors[0].available);
        assert!(!descriptors[1].available);
    }

    #[test]
    fn test_earlier_root_wins() {
        let first  = tempfile::tempdir().unwrap();
        let second = tempfile::tempdir().unwrap();
        fs::write(first.path().join("cour.ttf"), b"first").unwrap();
        fs::write(second.path().join("cour.ttf"), b"second").unwrap();

        let catalog = FontCatalog::new([first.path(), second.path()]);
        let descriptors = catalog.resolve(&requests(&["cour.ttf"]));

        assert_eq!(
            descriptors[0].resolved_path,
            Some(first.path().join("cour.ttf"))
        );
    }

    #[test]
    fn test_empty_resolved_set_degrades_to_one_fallback() {
        let dir = tempfile::tempdir().unwrap();

        let catalog = FontCatalog::new([dir.path()]);
        let descriptors = catalog.resolve(&requests(&["a.ttf", "b.ttf"]));

        // Two missing descriptors plus exactly one fallback
        assert_eq!(descriptors.len(), 3);
        let available: Vec<_> = descriptors.iter().filter(|d| d.available).collect();
        assert_eq!(available.len(), 1);
        assert!(available[0].is_builtin());
    }

    #[test]
    fn test_no_requests_still_yields_the_fallback() {
        let catalog = FontCatalog::new(Vec::<PathBuf>::new());
        let descriptors = catalog.resolve(&[]);
        assert_eq!(descriptors.len(), 1);
        assert!(descriptors[0].is_builtin());
    }
}
