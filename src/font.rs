//! Font resolution for the letter overlay.
//!
//! Resolution is an ordered list of strategies, tried in sequence; the first
//! one that succeeds wins. The terminal strategy is a builtin 5×7 bitmap
//! glyph set that can never fail, so a default chain always resolves to
//! *something* and the letter only disappears when the chain is emptied out
//! (or the character has no glyph anywhere).

use std::fs;
use std::path::PathBuf;

use fontdue::{Font, FontSettings};

/// One font-resolution strategy. Returning `None` advances the chain to the
/// next entry.
pub trait FontStrategy {
    /// Human-readable name, used in debug logging only.
    fn name(&self) -> &str;

    fn resolve(&self) -> Option<ResolvedFont>;
}

/// The outcome of a successful resolution: either a scalable font or the
/// builtin fixed glyph set.
pub enum ResolvedFont {
    Scalable(Font),
    Builtin,
}

/// A glyph rasterized to its tight visual bounding box, as 8-bit coverage.
pub struct RasterizedGlyph {
    pub width: usize,
    pub height: usize,
    pub coverage: Vec<u8>,
}

impl ResolvedFont {
    /// Rasterize `ch` at `px` pixels. `None` when the font has no usable
    /// glyph for the character.
    pub fn rasterize(&self, ch: char, px: f32) -> Option<RasterizedGlyph> {
        match self {
            ResolvedFont::Scalable(font) => {
                if font.lookup_glyph_index(ch) == 0 {
                    return None;
                }
                let (metrics, coverage) = font.rasterize(ch, px);
                if metrics.width == 0 || metrics.height == 0 {
                    return None;
                }
                Some(RasterizedGlyph {
                    width: metrics.width,
                    height: metrics.height,
                    coverage,
                })
            }
            ResolvedFont::Builtin => builtin_glyph(ch, px),
        }
    }
}

/// Loads a TrueType/OpenType file from a fixed path. Missing or unparseable
/// files resolve to `None`, which is what lets the chain advance.
pub struct FontFile {
    path: PathBuf,
    collection_index: u32,
}

impl FontFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            collection_index: 0,
        }
    }

    /// A face inside a `.ttc` collection.
    pub fn collection(path: impl Into<PathBuf>, index: u32) -> Self {
        Self {
            path: path.into(),
            collection_index: index,
        }
    }
}

impl FontStrategy for FontFile {
    fn name(&self) -> &str {
        self.path.to_str().unwrap_or("font file")
    }

    fn resolve(&self) -> Option<ResolvedFont> {
        let bytes = fs::read(&self.path).ok()?;
        let settings = FontSettings {
            collection_index: self.collection_index,
            ..FontSettings::default()
        };
        Font::from_bytes(bytes, settings)
            .ok()
            .map(ResolvedFont::Scalable)
    }
}

/// Terminal strategy: the builtin 5×7 glyph set. Never fails to resolve.
pub struct BuiltinGlyphs;

impl FontStrategy for BuiltinGlyphs {
    fn name(&self) -> &str {
        "builtin 5x7 glyphs"
    }

    fn resolve(&self) -> Option<ResolvedFont> {
        Some(ResolvedFont::Builtin)
    }
}

/// The default chain: preferred system font paths first, then a font file in
/// the working directory, then the builtin glyph set.
pub fn default_chain() -> Vec<Box<dyn FontStrategy>> {
    vec![
        Box::new(FontFile::collection("/System/Library/Fonts/Helvetica.ttc", 0)),
        Box::new(FontFile::new(
            "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
        )),
        Box::new(FontFile::new("C:\\Windows\\Fonts\\arial.ttf")),
        Box::new(FontFile::new("arial.ttf")),
        Box::new(BuiltinGlyphs),
    ]
}

/// Walk the chain in order and return the first resolution.
pub fn resolve_chain(chain: &[Box<dyn FontStrategy>]) -> Option<ResolvedFont> {
    for strategy in chain {
        if let Some(resolved) = strategy.resolve() {
            log::debug!("resolved font via {}", strategy.name());
            return Some(resolved);
        }
    }
    None
}

/// 5×7 uppercase bitmaps, one row per byte, glyph bits in the low 5 bits
/// with the leftmost column at bit 4.
const BUILTIN_ROWS: [[u8; 7]; 26] = [
    [0x0E, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11], // A
    [0x1E, 0x11, 0x11, 0x1E, 0x11, 0x11, 0x1E], // B
    [0x0E, 0x11, 0x10, 0x10, 0x10, 0x11, 0x0E], // C
    [0x1E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x1E], // D
    [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x1F], // E
    [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x10], // F
    [0x0E, 0x11, 0x10, 0x10, 0x13, 0x11, 0x0F], // G
    [0x11, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11], // H
    [0x0E, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0E], // I
    [0x07, 0x02, 0x02, 0x02, 0x02, 0x12, 0x0C], // J
    [0x11, 0x12, 0x14, 0x18, 0x14, 0x12, 0x11], // K
    [0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x1F], // L
    [0x11, 0x1B, 0x15, 0x15, 0x11, 0x11, 0x11], // M
    [0x11, 0x19, 0x15, 0x13, 0x11, 0x11, 0x11], // N
    [0x0E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E], // O
    [0x1E, 0x11, 0x11, 0x1E, 0x10, 0x10, 0x10], // P
    [0x0E, 0x11, 0x11, 0x11, 0x15, 0x12, 0x0D], // Q
    [0x1E, 0x11, 0x11, 0x1E, 0x14, 0x12, 0x11], // R
    [0x0F, 0x10, 0x10, 0x0E, 0x01, 0x01, 0x1E], // S
    [0x1F, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04], // T
    [0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E], // U
    [0x11, 0x11, 0x11, 0x11, 0x11, 0x0A, 0x04], // V
    [0x11, 0x11, 0x11, 0x15, 0x15, 0x15, 0x0A], // W
    [0x11, 0x11, 0x0A, 0x04, 0x0A, 0x11, 0x11], // X
    [0x11, 0x11, 0x0A, 0x04, 0x04, 0x04, 0x04], // Y
    [0x1F, 0x01, 0x02, 0x04, 0x08, 0x10, 0x1F], // Z
];

/// Scale a builtin bitmap up to roughly `px` tall with nearest-neighbor
/// duplication. Only `A`–`Z` exist in the builtin set.
fn builtin_glyph(ch: char, px: f32) -> Option<RasterizedGlyph> {
    if !ch.is_ascii_uppercase() {
        return None;
    }
    let rows = &BUILTIN_ROWS[(ch as u8 - b'A') as usize];
    let scale = ((px / 7.0).round() as usize).max(1);
    let width = 5 * scale;
    let height = 7 * scale;
    let mut coverage = vec![0u8; width * height];
    for (row, bits) in rows.iter().enumerate() {
        for col in 0..5 {
            if bits & (0x10 >> col) == 0 {
                continue;
            }
            for dy in 0..scale {
                let y = row * scale + dy;
                let x0 = col * scale;
                coverage[y * width + x0..y * width + x0 + scale].fill(255);
            }
        }
    }
    Some(RasterizedGlyph {
        width,
        height,
        coverage,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    struct AlwaysFails;

    impl FontStrategy for AlwaysFails {
        fn name(&self) -> &str {
            "always fails"
        }

        fn resolve(&self) -> Option<ResolvedFont> {
            None
        }
    }

    #[test]
    fn builtin_strategy_always_resolves() {
        assert!(BuiltinGlyphs.resolve().is_some());
    }

    #[test]
    fn chain_skips_failing_strategies() {
        let chain: Vec<Box<dyn FontStrategy>> =
            vec![Box::new(AlwaysFails), Box::new(BuiltinGlyphs)];
        assert!(matches!(
            resolve_chain(&chain),
            Some(ResolvedFont::Builtin)
        ));
    }

    #[test]
    fn empty_chain_resolves_nothing() {
        assert!(resolve_chain(&[]).is_none());
    }

    #[test]
    fn missing_font_file_advances() {
        let strategy = FontFile::new("/nonexistent/font.ttf");
        assert!(strategy.resolve().is_none());
    }

    #[test]
    fn builtin_glyph_scales_with_point_size() {
        let small = builtin_glyph('A', 7.0).unwrap();
        assert_eq!((small.width, small.height), (5, 7));

        let large = builtin_glyph('A', 42.0).unwrap();
        assert_eq!((large.width, large.height), (30, 42));
        assert_eq!(large.coverage.len(), 30 * 42);
    }

    #[test]
    fn builtin_glyph_rejects_non_uppercase() {
        assert!(builtin_glyph('a', 14.0).is_none());
        assert!(builtin_glyph('~', 14.0).is_none());
    }

    #[test]
    fn builtin_a_has_an_open_counter() {
        // row 1 of 'A' is 0x11: outer columns set, middle column empty
        let glyph = builtin_glyph('A', 7.0).unwrap();
        assert_eq!(glyph.coverage[5], 255); // (0, 1)
        assert_eq!(glyph.coverage[7], 0); // (2, 1)
        assert_eq!(glyph.coverage[9], 255); // (4, 1)
    }
}
