// ============================================================
// Layer 4 — Built-in Bitmap Font
// ============================================================
// A compiled-in 5×7 digit font, used whenever no TrueType font
// can be loaded. Glyphs are stored as rows of '#' (ink) and ' '
// (background) and scaled up by pixel replication to the target
// glyph height, so the renderer always has something to draw.

/// Unscaled glyph width in cells.
pub const GLYPH_WIDTH: usize = 5;

/// Unscaled glyph height in cells.
pub const GLYPH_HEIGHT: usize = 7;

#[rustfmt::skip]
const GLYPHS: [[&str; GLYPH_HEIGHT]; 10] = [
    [
        " ### ",
        "#   #",
        "#   #",
        "#   #",
        "#   #",
        "#   #",
        " ### ",
    ],
    [
        "  #  ",
        " ##  ",
        "  #  ",
        "  #  ",
        "  #  ",
        "  #  ",
        " ### ",
    ],
    [
        " ### ",
        "#   #",
        "    #",
        "   # ",
        "  #  ",
        " #   ",
        "#####",
    ],
    [
        " ### ",
        "#   #",
        "    #",
        "  ## ",
        "    #",
        "#   #",
        " ### ",
    ],
    [
        "   # ",
        "  ## ",
        " # # ",
        "#  # ",
        "#####",
        "   # ",
        "   # ",
    ],
    [
        "#####",
        "#    ",
        "#### ",
        "    #",
        "    #",
        "#   #",
        " ### ",
    ],
    [
        "  ## ",
        " #   ",
        "#    ",
        "#### ",
        "#   #",
        "#   #",
        " ### ",
    ],
    [
        "#####",
        "    #",
        "   # ",
        "  #  ",
        "  #  ",
        "  #  ",
        "  #  ",
    ],
    [
        " ### ",
        "#   #",
        "#   #",
        " ### ",
        "#   #",
        "#   #",
        " ### ",
    ],
    [
        " ### ",
        "#   #",
        "#   #",
        " ####",
        "    #",
        "   # ",
        " ##  ",
    ],
];

/// Rasterize a digit at an integer scale factor.
///
/// Returns (width, height, coverage) where coverage is a row-major
/// bitmap of 0 (background) / 255 (ink), the same shape fontdue
/// produces, so the renderer can blit either interchangeably.
pub fn rasterize(digit: u8, scale: u32) -> (usize, usize, Vec<u8>) {
    debug_assert!(digit <= 9);
    let glyph = &GLYPHS[usize::from(digit.min(9))];
    let scale  = scale.max(1) as usize;
    let width  = GLYPH_WIDTH * scale;
    let height = GLYPH_HEIGHT * scale;

    let mut coverage = vec![0u8; width * height];
    for (row, line) in glyph.iter().enumerate() {
        for (col, cell) in line.bytes().enumerate() {
            if cell != b'#' {
                continue;
            }
            for dy in 0..scale {
                let y = row * scale + dy;
                let x0 = col * scale;
                coverage[y * width + x0..y * width + x0 + scale].fill(255);
            }
        }
    }

    (width, height, coverage)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_digit_has_ink() {
        for digit in 0..=9u8 {
            let (w, h, coverage) = rasterize(digit, 1);
            assert_eq!(w, GLYPH_WIDTH);
            assert_eq!(h, GLYPH_HEIGHT);
            assert!(coverage.iter().any(|&c| c == 255), "digit {digit} is blank");
        }
    }

    #[test]
    fn test_glyph_rows_are_uniform_width() {
        for glyph in &GLYPHS {
            for line in glyph {
                assert_eq!(line.len(), GLYPH_WIDTH);
            }
        }
    }

    #[test]
    fn test_scaling_replicates_pixels() {
        let (w1, h1, c1) = rasterize(5, 1);
        let (w3, h3, c3) = rasterize(5, 3);
        assert_eq!((w3, h3), (w1 * 3, h1 * 3));
        // Ink area scales by the square of the factor
        let ink1 = c1.iter().filter(|&&c| c == 255).count();
        let ink3 = c3.iter().filter(|&&c| c == 255).count();
        assert_eq!(ink3, ink1 * 9);
    }

    #[test]
    fn test_digits_are_distinct() {
        let (_, _, one) = rasterize(1, 1);
        let (_, _, eight) = rasterize(8, 1);
        assert_ne!(one, eight);
    }
}
