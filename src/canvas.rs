//! Square RGB canvas with the stroked-shape primitives the globe glyph needs.
//!
//! Shapes are rasterized per pixel against pixel centers (`x + 0.5`), the
//! same sampling the tray-icon generators in the wild use. Every primitive
//! clips against the canvas bounds, so strokes can never escape the image.

use image::{Rgb, RgbImage};

/// Fixed background color, midway between the extension popup's
/// `#667eea` → `#764ba2` gradient endpoints.
pub const BACKGROUND: Rgb<u8> = Rgb([106, 101, 206]);

/// Stroke and letter color.
pub const FOREGROUND: Rgb<u8> = Rgb([255, 255, 255]);

/// A size × size RGB raster under construction.
pub struct Canvas {
    image: RgbImage,
}

impl Canvas {
    /// Allocate a square canvas filled with `color`.
    pub fn filled(size: u32, color: Rgb<u8>) -> Self {
        Self {
            image: RgbImage::from_pixel(size, size, color),
        }
    }

    pub fn size(&self) -> u32 {
        self.image.width()
    }

    /// Hand the finished raster to the caller.
    pub fn into_image(self) -> RgbImage {
        self.image
    }

    /// Stroke the ellipse inscribed in the bounding box `[x0, y0, x1, y1]`
    /// (corners inclusive): paint the pixels inside the outer ellipse but
    /// outside the same ellipse inset by `width` on every side.
    pub fn stroke_ellipse(&mut self, x0: u32, y0: u32, x1: u32, y1: u32, width: u32, color: Rgb<u8>) {
        if x1 <= x0 || y1 <= y0 {
            return;
        }
        let cx = (x0 + x1) as f32 / 2.0;
        let cy = (y0 + y1) as f32 / 2.0;
        let rx = (x1 - x0) as f32 / 2.0;
        let ry = (y1 - y0) as f32 / 2.0;
        // Inset radii; a wide stroke on a small ellipse fills it solid.
        let irx = (rx - width as f32).max(0.0);
        let iry = (ry - width as f32).max(0.0);

        let size = self.size();
        for py in y0..(y1 + 1).min(size) {
            for px in x0..(x1 + 1).min(size) {
                let dx = px as f32 + 0.5 - cx;
                let dy = py as f32 + 0.5 - cy;
                let outer = (dx / rx).powi(2) + (dy / ry).powi(2) <= 1.0;
                if !outer {
                    continue;
                }
                let inner = irx > 0.0
                    && iry > 0.0
                    && (dx / irx).powi(2) + (dy / iry).powi(2) <= 1.0;
                if !inner {
                    self.image.put_pixel(px, py, color);
                }
            }
        }
    }

    /// Stroke a horizontal line from `(x0, y)` to `(x1, y)` inclusive,
    /// `width` pixels tall and centered on the row `y`.
    pub fn stroke_hline(&mut self, x0: u32, x1: u32, y: u32, width: u32, color: Rgb<u8>) {
        let size = self.size();
        let top = y.saturating_sub(width / 2);
        for py in top..(top + width).min(size) {
            for px in x0..(x1 + 1).min(size) {
                self.image.put_pixel(px, py, color);
            }
        }
    }

    /// Alpha-blend an 8-bit coverage bitmap (`w` × `h`, row-major) onto the
    /// canvas at `(x, y)` in `color`. Parts hanging off the canvas are
    /// clipped.
    pub fn blend_coverage(&mut self, x: i32, y: i32, w: usize, h: usize, coverage: &[u8], color: Rgb<u8>) {
        let size = self.size() as i32;
        for gy in 0..h {
            let py = y + gy as i32;
            if py < 0 || py >= size {
                continue;
            }
            for gx in 0..w {
                let px = x + gx as i32;
                if px < 0 || px >= size {
                    continue;
                }
                let alpha = coverage[gy * w + gx] as u16;
                if alpha == 0 {
                    continue;
                }
                let under = *self.image.get_pixel(px as u32, py as u32);
                let mut blended = [0u8; 3];
                for c in 0..3 {
                    let bg = under.0[c] as u16;
                    let fg = color.0[c] as u16;
                    blended[c] = ((bg * (255 - alpha) + fg * alpha) / 255) as u8;
                }
                self.image.put_pixel(px as u32, py as u32, Rgb(blended));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filled_canvas_is_uniform() {
        let canvas = Canvas::filled(8, BACKGROUND);
        let img = canvas.into_image();
        assert_eq!(img.dimensions(), (8, 8));
        assert!(img.pixels().all(|p| *p == BACKGROUND));
    }

    #[test]
    fn hline_paints_centered_band() {
        let mut canvas = Canvas::filled(16, BACKGROUND);
        canvas.stroke_hline(4, 11, 8, 2, FOREGROUND);
        let img = canvas.into_image();
        // width 2 centered on row 8 covers rows 7 and 8
        assert_eq!(*img.get_pixel(4, 7), FOREGROUND);
        assert_eq!(*img.get_pixel(11, 8), FOREGROUND);
        assert_eq!(*img.get_pixel(4, 6), BACKGROUND);
        assert_eq!(*img.get_pixel(4, 9), BACKGROUND);
        assert_eq!(*img.get_pixel(3, 8), BACKGROUND);
        assert_eq!(*img.get_pixel(12, 8), BACKGROUND);
    }

    #[test]
    fn ellipse_ring_leaves_center_untouched() {
        let mut canvas = Canvas::filled(32, BACKGROUND);
        canvas.stroke_ellipse(4, 4, 27, 27, 2, FOREGROUND);
        let img = canvas.into_image();
        assert_eq!(*img.get_pixel(16, 16), BACKGROUND);
        // leftmost point of the ring sits on the bounding box edge
        assert_eq!(*img.get_pixel(4, 15), FOREGROUND);
        assert_eq!(*img.get_pixel(0, 0), BACKGROUND);
    }

    #[test]
    fn degenerate_ellipse_is_a_noop() {
        let mut canvas = Canvas::filled(8, BACKGROUND);
        canvas.stroke_ellipse(4, 1, 4, 6, 2, FOREGROUND);
        let img = canvas.into_image();
        assert!(img.pixels().all(|p| *p == BACKGROUND));
    }

    #[test]
    fn coverage_blend_clips_to_canvas() {
        let mut canvas = Canvas::filled(4, BACKGROUND);
        let coverage = vec![255u8; 9];
        canvas.blend_coverage(-1, -1, 3, 3, &coverage, FOREGROUND);
        let img = canvas.into_image();
        assert_eq!(*img.get_pixel(0, 0), FOREGROUND);
        assert_eq!(*img.get_pixel(1, 1), FOREGROUND);
        assert_eq!(*img.get_pixel(2, 2), BACKGROUND);
    }

    #[test]
    fn partial_coverage_blends_toward_foreground() {
        let mut canvas = Canvas::filled(2, Rgb([0, 0, 0]));
        canvas.blend_coverage(0, 0, 1, 1, &[128], Rgb([255, 255, 255]));
        let img = canvas.into_image();
        let p = img.get_pixel(0, 0);
        assert!(p.0[0] > 100 && p.0[0] < 150);
    }
}
