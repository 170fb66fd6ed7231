//! IconForge
//!
//! Renders the square PNG icon set a browser extension manifest asks for:
//! a white globe glyph (ring, equator, meridian) with a centered letter
//! overlay on a flat purple background, at 16, 48 and 128 pixels.
//!
//! Font resolution for the letter is best-effort: system font paths are
//! tried first, then a font file in the working directory, then a builtin
//! bitmap glyph set. When everything fails the icon is still produced, just
//! without the letter, and [`RenderedIcon::glyph_drawn`] reports it.
//!
//! # Example
//!
//! ```
//! use iconforge::IconRenderer;
//!
//! let renderer = IconRenderer::new();
//! let icon = renderer.render(128);
//! assert_eq!(icon.image.dimensions(), (128, 128));
//! ```

pub mod canvas;
pub mod driver;
pub mod error;
pub mod font;
pub mod renderer;

pub use error::{Error, Result};
pub use renderer::{CanvasSpec, IconRenderer, RenderedIcon};
