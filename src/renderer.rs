//! Icon rendering: a stylized globe (ring, equator, meridian) with a letter
//! overlay on a flat background.

use image::{Rgb, RgbImage};

use crate::canvas::{Canvas, BACKGROUND, FOREGROUND};
use crate::font::{self, FontStrategy};

/// Per-invocation drawing parameters. Built fresh for every render call and
/// discarded with it.
#[derive(Debug, Clone)]
pub struct CanvasSpec {
    /// Edge length in pixels; must be positive.
    pub size: u32,
    pub background: Rgb<u8>,
    pub foreground: Rgb<u8>,
    /// Uppercase letter drawn over the globe.
    pub letter: char,
}

impl CanvasSpec {
    pub fn new(size: u32) -> Self {
        Self {
            size,
            background: BACKGROUND,
            foreground: FOREGROUND,
            letter: 'A',
        }
    }
}

/// A finished icon plus whether the letter overlay made it on. Callers that
/// care about degraded output check the flag instead of parsing warnings.
pub struct RenderedIcon {
    pub image: RgbImage,
    pub glyph_drawn: bool,
}

/// Whitespace between the globe and the canvas edge.
pub fn padding(size: u32) -> u32 {
    size / 4
}

/// Stroke width for the ring, equator and meridian.
pub fn line_width(size: u32) -> u32 {
    (size / 16).max(2)
}

/// Renders icons of any positive size. Holds only the font-resolution chain;
/// every call allocates a fresh canvas and resolves a fresh font.
pub struct IconRenderer {
    fonts: Vec<Box<dyn FontStrategy>>,
}

impl IconRenderer {
    pub fn new() -> Self {
        Self {
            fonts: font::default_chain(),
        }
    }

    /// Renderer with a custom font chain. An empty chain renders icons
    /// without the letter, which is how tests simulate total font failure.
    pub fn with_fonts(fonts: Vec<Box<dyn FontStrategy>>) -> Self {
        Self { fonts }
    }

    pub fn render(&self, size: u32) -> RenderedIcon {
        self.render_spec(&CanvasSpec::new(size))
    }

    /// Draw the full icon. Nothing in here is fatal: a failed letter overlay
    /// degrades to `glyph_drawn = false`.
    pub fn render_spec(&self, spec: &CanvasSpec) -> RenderedIcon {
        let size = spec.size;
        let pad = padding(size);
        let width = line_width(size);
        let middle = size / 2;

        let mut canvas = Canvas::filled(size, spec.background);

        // Globe ring inscribed in the padded square.
        canvas.stroke_ellipse(pad, pad, size - pad, size - pad, width, spec.foreground);

        // Equator.
        canvas.stroke_hline(pad, size - pad, middle, width, spec.foreground);

        // Meridian: a narrow ellipse spanning the same vertical extent.
        let half = size / 8;
        canvas.stroke_ellipse(middle - half, pad, middle + half, size - pad, width, spec.foreground);

        let glyph_drawn = self.draw_letter(&mut canvas, spec);

        RenderedIcon {
            image: canvas.into_image(),
            glyph_drawn,
        }
    }

    fn draw_letter(&self, canvas: &mut Canvas, spec: &CanvasSpec) -> bool {
        let px = (spec.size / 3) as f32;

        let Some(resolved) = font::resolve_chain(&self.fonts) else {
            log::warn!(
                "no font available; {0}x{0} icon keeps only the globe glyph",
                spec.size
            );
            return false;
        };

        let Some(glyph) = resolved.rasterize(spec.letter, px) else {
            log::warn!(
                "could not rasterize '{}' at {}px; {2}x{2} icon keeps only the globe glyph",
                spec.letter,
                px,
                spec.size
            );
            return false;
        };

        // Center the visual bounding box, not the advance box.
        let x = (spec.size as i32 - glyph.width as i32) / 2;
        let y = (spec.size as i32 - glyph.height as i32) / 2;
        canvas.blend_coverage(x, y, glyph.width, glyph.height, &glyph.coverage, spec.foreground);
        true
    }
}

impl Default for IconRenderer {
    fn default() -> Self {
        Self::new()
    }
}
