//! Batch generation of the extension icon set.
//!
//! Sizes are processed strictly in order, one fresh render per size. The
//! first encode or write failure aborts the whole batch; there is no
//! skip-and-continue.

use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::{ImageError, ImageFormat, Rgb, RgbImage};

use crate::error::{Error, Result};
use crate::renderer::IconRenderer;

/// Sizes the extension manifest asks for, in processing order.
pub const ICON_SIZES: [u32; 3] = [16, 48, 128];

/// Verify at startup that PNG encoding is actually compiled into this build
/// by running a 1×1 probe image through the encoder.
pub fn probe_png_support() -> Result<()> {
    let probe = RgbImage::from_pixel(1, 1, Rgb([0, 0, 0]));
    let mut sink = Cursor::new(Vec::new());
    probe
        .write_to(&mut sink, ImageFormat::Png)
        .map_err(|e| Error::CapabilityError(e.to_string()))?;
    Ok(())
}

/// Render and save every icon size into `out_dir` with the default font
/// chain. Returns the written paths in size order.
pub fn generate_all(out_dir: &Path) -> Result<Vec<PathBuf>> {
    generate_with(out_dir, &IconRenderer::new())
}

/// Same as [`generate_all`] but with a caller-supplied renderer, so tests
/// can pin the font chain.
pub fn generate_with(out_dir: &Path, renderer: &IconRenderer) -> Result<Vec<PathBuf>> {
    probe_png_support()?;

    let mut written = Vec::with_capacity(ICON_SIZES.len());
    for size in ICON_SIZES {
        println!("Generating {size}x{size} icon...");
        let icon = renderer.render(size);
        let path = out_dir.join(format!("icon{size}.png"));
        save_png(&icon.image, &path)?;
        println!("✅ Saved: {}", path.display());
        written.push(path);
    }

    println!();
    println!("🎉 All icons generated!");
    println!("Move the files into the extension's icons/ directory.");
    Ok(written)
}

fn save_png(image: &RgbImage, path: &Path) -> Result<()> {
    image
        .save_with_format(path, ImageFormat::Png)
        .map_err(|e| match e {
            ImageError::IoError(io) => Error::WriteError(format!("{}: {}", path.display(), io)),
            other => Error::EncodeError(format!("{}: {}", path.display(), other)),
        })
}
