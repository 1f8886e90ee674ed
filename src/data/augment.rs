// ============================================================
// Layer 4 — Image Augmenter
// ============================================================
// Applies a fixed, ordered composition of randomized transforms
// to a normalised [0,1] image:
//
//   1. rotation — always; uniform angle from the configured range,
//      affine about the image centre, bilinear resampling, pixels
//      rotated off the canvas are lost (zero fill, not wrapped)
//   2. noise    — with configured probability; zero-mean Gaussian,
//      clamped back into [0,1]
//   3. blur     — with configured probability; mild Gaussian blur
//      so thin glyph strokes survive at 28×28
//
// Stage order is fixed: noise and blur always see the rotated
// image. Every random draw comes from the injected RNG, so a
// seeded StdRng reproduces a run exactly.

use anyhow::{ensure, Result};
use image::{GrayImage, ImageBuffer, Luma};
use imageproc::filter::gaussian_blur_f32;
use imageproc::geometric_transformations::{rotate_about_center, Interpolation};
use rand::Rng;
use rand_distr::{Distribution, Normal};

use crate::domain::config::GenerationConfig;

/// A single-channel f32 image with intensities in [0,1].
pub type UnitImage = ImageBuffer<Luma<f32>, Vec<f32>>;

/// Convert a rendered u8 canvas into the [0,1] buffer the
/// augmentation stages run on.
pub fn to_unit(image: &GrayImage) -> UnitImage {
    UnitImage::from_fn(image.width(), image.height(), |x, y| {
        Luma([f32::from(image.get_pixel(x, y).0[0]) / 255.0])
    })
}

/// Randomized rotation / noise / blur, parameters fixed per run.
pub struct ImageAugmenter {
    rotation_range:    (f32, f32),
    noise_probability: f64,
    noise:             Normal<f32>,
    blur_probability:  f64,
    blur_sigma:        f32,
}

impl ImageAugmenter {
    /// Build an augmenter from the run configuration, validating
    /// the probabilistic parameters up front.
    pub fn from_config(cfg: &GenerationConfig) -> Result<Self> {
        let (lo, hi) = cfg.rotation_range_degrees;
        ensure!(lo <= hi, "rotation range {lo}..{hi} is inverted");
        ensure!(
            (0.0..=1.0).contains(&cfg.noise_probability),
            "noise probability {} is outside [0,1]",
            cfg.noise_probability
        );
        ensure!(
            (0.0..=1.0).contains(&cfg.blur_probability),
            "blur probability {} is outside [0,1]",
            cfg.blur_probability
        );
        ensure!(cfg.blur_sigma > 0.0, "blur sigma must be positive");

        let noise = Normal::new(0.0, cfg.noise_stddev)
            .map_err(|e| anyhow::anyhow!("invalid noise stddev {}: {e}", cfg.noise_stddev))?;

        Ok(Self {
            rotation_range:    cfg.rotation_range_degrees,
            noise_probability: cfg.noise_probability,
            noise,
            blur_probability:  cfg.blur_probability,
            blur_sigma:        cfg.blur_sigma,
        })
    }

    /// Apply rotation, then maybe noise, then maybe blur.
    /// Shape is preserved regardless of which branches fire.
    pub fn augment<R: Rng>(&self, image: &UnitImage, rng: &mut R) -> UnitImage {
        let mut out = self.rotate(image, rng);

        if rng.gen_bool(self.noise_probability) {
            self.add_noise(&mut out, rng);
        }

        if rng.gen_bool(self.blur_probability) {
            out = gaussian_blur_f32(&out, self.blur_sigma);
        }

        out
    }

    fn rotate<R: Rng>(&self, image: &UnitImage, rng: &mut R) -> UnitImage {
        let (lo, hi) = self.rotation_range;
        let degrees: f32 = rng.gen_range(lo..=hi);
        rotate_about_center(
            image,
            degrees.to_radians(),
            Interpolation::Bilinear,
            Luma([0.0]),
        )
    }

    fn add_noise<R: Rng>(&self, image: &mut UnitImage, rng: &mut R) {
        for pixel in image.pixels_mut() {
            pixel.0[0] = (pixel.0[0] + self.noise.sample(rng)).clamp(0.0, 1.0);
        }
    }
}
