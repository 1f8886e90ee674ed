// ============================================================
// Layer 4 — Digit Renderer
// ============================================================
// Rasterizes one digit glyph onto a fixed-size grayscale canvas:
//
//   1. allocate an N×N canvas, intensity 0 (background)
//   2. rasterize the digit with fontdue at glyph height ≈ 0.8×N
//   3. centre the glyph bitmap on the canvas and blit it at full
//      intensity (anti-aliased edges keep fontdue's coverage)
//
// fontdue's bitmap is tight to the glyph ink, so centring the
// bitmap centres the ink regardless of font-specific ascent or
// descent metrics.
//
// Fonts are loaded once per descriptor. A font that cannot be
// read or parsed is substituted with the built-in bitmap font
// after a single warning — rendering never fails to the caller.
// Apart from that warning this step is pure: no randomness, same
// canvas for the same (digit, font) every time.

use anyhow::{Context, Result};
use image::{GrayImage, Luma};
use std::{fs, path::Path};

use crate::data::builtin_font;
use crate::domain::font::FontDescriptor;

/// Glyph height as a fraction of the canvas side.
const GLYPH_SCALE: f32 = 0.8;

/// A font ready to rasterize from.
pub enum RenderFont {
    /// A parsed TrueType font
    Truetype {
        name: String,
        font: fontdue::Font,
    },
    /// The compiled-in bitmap font
    Builtin,
}

impl RenderFont {
    /// Name for diagnostics and the preview file names.
    pub fn name(&self) -> &str {
        match self {
            RenderFont::Truetype { name, .. } => name,
            RenderFont::Builtin => crate::domain::font::BUILTIN_FONT_NAME,
        }
    }
}

/// Renders digit glyphs onto square canvases of one fixed size.
pub struct DigitRenderer {
    /// Canvas side length in pixels
    canvas_size: u32,
}

impl DigitRenderer {
    pub fn new(canvas_size: u32) -> Self {
        Self { canvas_size }
    }

    /// Load the font behind a descriptor.
    ///
    /// Never fails: descriptors without a path get the built-in
    /// font directly, and unreadable or unparseable font files are
    /// substituted with it after a warning.
    pub fn load_font(&self, descriptor: &FontDescriptor) -> RenderFont {
        let Some(path) = &descriptor.resolved_path else {
            return RenderFont::Builtin;
        };

        match load_truetype(path) {
            Ok(font) => RenderFont::Truetype {
                name: descriptor.requested_name.clone(),
                font,
            },
            Err(e) => {
                tracing::warn!(
                    "Cannot load font '{}' ({e:#}) — using the built-in font",
                    path.display()
                );
                RenderFont::Builtin
            }
        }
    }

    /// Render one digit onto a fresh canvas.
    /// Output intensities are 0..=255 with 0 as background.
    pub fn render(&self, digit: u8, font: &RenderFont) -> GrayImage {
        debug_assert!(digit <= 9);
        let n = self.canvas_size;
        let mut canvas = GrayImage::new(n, n);

        let glyph_px = n as f32 * GLYPH_SCALE;
        let (width, height, coverage) = match font {
            RenderFont::Truetype { font, .. } => {
                let ch = char::from(b'0' + digit.min(9));
                let (metrics, bitmap) = font.rasterize(ch, glyph_px);
                (metrics.width, metrics.height, bitmap)
            }
            RenderFont::Builtin => {
                let scale = (glyph_px / builtin_font::GLYPH_HEIGHT as f32).round() as u32;
                builtin_font::rasterize(digit, scale)
            }
        };

        // Centre the tight glyph bitmap; clip anything that would
        // land outside the canvas.
        let x0 = (i64::from(n) - width as i64) / 2;
        let y0 = (i64::from(n) - height as i64) / 2;
        for (i, &cov) in coverage.iter().enumerate() {
            if cov == 0 {
                continue;
            }
            let x = x0 + (i % width) as i64;
            let y = y0 + (i / width) as i64;
            if (0..i64::from(n)).contains(&x) && (0..i64::from(n)).contains(&y) {
                canvas.put_pixel(x as u32, y as u32, Luma([cov]));
            }
        }

        canvas
    }
}

fn load_truetype(path: &Path) -> Result<fontdue::Font> {
    let bytes = fs::read(path).with_context(|| format!("Cannot read '{}'", path.display()))?;
    fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
        .map_err(|e| anyhow::anyhow!("not a parseable font: {e}"))
}
