// ============================================================
// Layer 2 — PreviewUseCase
// ============================================================
// Renders one augmented sample per resolved font × digit and
// writes each as a PNG, so the generated glyphs can be eyeballed
// before committing to a full run:
//
//   out_dir/preview/
//     arial.ttf_1.png
//     arial.ttf_2.png
//     ...
//     builtin_9.png
//
// Uses the same renderer and augmenter as the generation run, so
// what the preview shows is what the arrays will contain.

use anyhow::{Context, Result};
use image::GrayImage;

use crate::application::generate_use_case::seeded_rng;
use crate::data::{
    augment::{self, ImageAugmenter, UnitImage},
    font_catalog::FontCatalog,
    renderer::DigitRenderer,
};
use crate::domain::config::GenerationConfig;
use std::path::PathBuf;

pub struct PreviewUseCase {
    config: GenerationConfig,
}

impl PreviewUseCase {
    pub fn new(config: GenerationConfig) -> Self {
        Self { config }
    }

    /// Render the previews and return the directory they landed in.
    pub fn execute(&self) -> Result<PathBuf> {
        let cfg = &self.config;
        let mut rng = seeded_rng(cfg.seed);

        let preview_dir = PathBuf::from(&cfg.out_dir).join("preview");
        std::fs::create_dir_all(&preview_dir)
            .with_context(|| format!("Cannot create '{}'", preview_dir.display()))?;

        let catalog = FontCatalog::new(cfg.font_dirs.iter().map(String::as_str));
        let descriptors = catalog.resolve(&cfg.fonts);

        let renderer = DigitRenderer::new(cfg.image_size);
        let augmenter = ImageAugmenter::from_config(cfg)?;

        let mut written = 0usize;
        for descriptor in descriptors.iter().filter(|d| d.available) {
            let font = renderer.load_font(descriptor);
            for digit in cfg.digits() {
                let glyph = renderer.render(digit, &font);
                let augmented = augmenter.augment(&augment::to_unit(&glyph), &mut rng);

                let path = preview_dir.join(format!("{}_{digit}.png", font.name()));
                to_gray(&augmented)
                    .save(&path)
                    .with_context(|| format!("Cannot write '{}'", path.display()))?;
                written += 1;
            }
        }

        tracing::info!("Wrote {written} previews to '{}'", preview_dir.display());
        Ok(preview_dir)
    }
}

/// Scale a [0,1] buffer back to u8 for PNG output.
fn to_gray(image: &UnitImage) -> GrayImage {
    GrayImage::from_fn(image.width(), image.height(), |x, y| {
        image::Luma([(image.get_pixel(x, y).0[0].clamp(0.0, 1.0) * 255.0) as u8])
    })
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_writes_one_png_per_digit_for_the_fallback_font() {
        let out = tempfile::tempdir().unwrap();
        let cfg = GenerationConfig {
            out_dir: out.path().to_string_lossy().into_owned(),
            font_dirs: Vec::new(),
            fonts: vec!["arial.ttf".to_string()],
            seed: Some(5),
            ..GenerationConfig::default()
        };

        let dir = PreviewUseCase::new(cfg).execute().unwrap();
        let pngs: Vec<_> = std::fs::read_dir(&dir)
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.path().extension().is_some_and(|x| x == "png"))
            .collect();
        assert_eq!(pngs.len(), 9);
    }
}
