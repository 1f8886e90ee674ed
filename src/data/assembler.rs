// ============================================================
// Layer 4 — Dataset Assembler
// ============================================================
// Drives the synthetic grid and produces the final corpus:
//
//   for every available font
//     for every digit in the configured range
//       for every replicate
//         render → normalise → augment → accumulate
//
//   train = handwritten train ++ synthetic, one shuffle
//   test  = handwritten test, untouched
//
// Rendering is pure per (font, digit), so the glyph is rasterised
// once and each replicate augments that same normalised canvas.
// The shuffle permutes whole DigitSamples — image and label travel
// together, so the pairing can never drift.

use anyhow::Result;
use rand::{seq::SliceRandom, Rng};

use crate::data::augment::{self, ImageAugmenter};
use crate::data::renderer::DigitRenderer;
use crate::domain::config::GenerationConfig;
use crate::domain::font::FontDescriptor;
use crate::domain::sample::{DigitCorpus, DigitImage, DigitSample};

/// Builds the synthetic sample set and merges it with the
/// handwritten reference corpus.
pub struct DatasetAssembler<'a> {
    config:    &'a GenerationConfig,
    renderer:  DigitRenderer,
    augmenter: ImageAugmenter,
}

impl<'a> DatasetAssembler<'a> {
    pub fn new(config: &'a GenerationConfig) -> Result<Self> {
        Ok(Self {
            config,
            renderer: DigitRenderer::new(config.image_size),
            augmenter: ImageAugmenter::from_config(config)?,
        })
    }

    /// Render and augment the full font × digit × replicate grid.
    ///
    /// Unavailable descriptors are skipped; the caller gets exactly
    /// available_fonts × digit_count × samples_per_font_per_digit
    /// samples back.
    pub fn synthesize<R: Rng>(
        &self,
        descriptors: &[FontDescriptor],
        rng: &mut R,
    ) -> Vec<DigitSample> {
        let cfg = self.config;
        let available: Vec<_> = descriptors.iter().filter(|d| d.available).collect();

        let mut samples =
            Vec::with_capacity(available.len() * cfg.digit_count() * cfg.samples_per_font_per_digit);

        for descriptor in available {
            let font = self.renderer.load_font(descriptor);
            tracing::info!(
                "Generating {} samples per digit for font '{}'",
                cfg.samples_per_font_per_digit,
                descriptor.requested_name
            );

            for digit in cfg.digits() {
                let glyph = self.renderer.render(digit, &font);
                let unit = augment::to_unit(&glyph);

                for _ in 0..cfg.samples_per_font_per_digit {
                    let augmented = self.augmenter.augment(&unit, rng);
                    let image = DigitImage::from_pixels(cfg.image_size, augmented.into_raw());
                    samples.push(DigitSample::new(image, digit));
                }
            }
        }

        samples
    }

    /// Merge the handwritten train partition with the synthetic
    /// samples and apply a single permutation to the combined
    /// sequence. The test partition passes through untouched.
    pub fn assemble<R: Rng>(
        &self,
        reference: DigitCorpus,
        synthetic: Vec<DigitSample>,
        rng: &mut R,
    ) -> DigitCorpus {
        let DigitCorpus { mut train, test } = reference;

        let handwritten = train.len();
        train.extend(synthetic);
        train.shuffle(rng);

        tracing::debug!(
            "Assembled corpus: {} handwritten + {} synthetic = {} train, {} test",
            handwritten,
            train.len() - handwritten,
            train.len(),
            test.len(),
        );

        DigitCorpus { train, test }
    }
}
