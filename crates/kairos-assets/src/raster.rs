//! Raster helpers on top of the `image` crate: load, resize, flatten, mask, save.

use crate::color::Color;
use crate::error::{AssetError, Result};
use image::codecs::png::{CompressionType, FilterType as PngFilter, PngEncoder};
use image::imageops::{self, FilterType};
use image::{ExtendedColorType, ImageBuffer, ImageEncoder, Pixel, PixelWithColorType, Rgb, RgbImage, Rgba, RgbaImage};
use std::path::Path;

/// Open any supported raster format and convert to RGBA8.
pub fn load_rgba(path: &Path) -> Result<RgbaImage> {
    if !path.exists() {
        return Err(AssetError::MissingSource(path.to_path_buf()));
    }
    let img = image::open(path).map_err(|e| AssetError::image(path, e))?;
    Ok(img.to_rgba8())
}

/// High-quality square resize.
pub fn resize_square(img: &RgbaImage, size: u32) -> RgbaImage {
    imageops::resize(img, size, size, FilterType::Lanczos3)
}

/// Blend a single RGBA pixel over an opaque background pixel.
fn blend_channel(src: u8, dst: u8, alpha: u8) -> u8 {
    let a = alpha as u32;
    ((src as u32 * a + dst as u32 * (255 - a) + 127) / 255) as u8
}

/// Composite `top` onto an RGB canvas at (x, y) using top's alpha as the mask.
/// Pixels falling outside the canvas are skipped.
pub fn paste_with_alpha(canvas: &mut RgbImage, top: &RgbaImage, x: i64, y: i64) {
    for (tx, ty, px) in top.enumerate_pixels() {
        let cx = x + tx as i64;
        let cy = y + ty as i64;
        if cx < 0 || cy < 0 || cx >= canvas.width() as i64 || cy >= canvas.height() as i64 {
            continue;
        }
        let Rgba([r, g, b, a]) = *px;
        if a == 0 {
            continue;
        }
        let dst = canvas.get_pixel_mut(cx as u32, cy as u32);
        *dst = Rgb([
            blend_channel(r, dst[0], a),
            blend_channel(g, dst[1], a),
            blend_channel(b, dst[2], a),
        ]);
    }
}

/// Flatten an RGBA image onto an opaque background color.
pub fn flatten(img: &RgbaImage, bg: Color) -> RgbImage {
    let mut out = ImageBuffer::from_pixel(img.width(), img.height(), bg.to_image_rgb());
    paste_with_alpha(&mut out, img, 0, 0);
    out
}

/// Clear alpha outside the circle inscribed in the image bounds.
pub fn circle_mask(img: &RgbaImage) -> RgbaImage {
    let (w, h) = img.dimensions();
    let (cx, cy) = (w as f32 / 2.0, h as f32 / 2.0);
    let (rx, ry) = (w as f32 / 2.0, h as f32 / 2.0);
    let mut out = img.clone();
    for (x, y, px) in out.enumerate_pixels_mut() {
        let dx = (x as f32 + 0.5 - cx) / rx;
        let dy = (y as f32 + 0.5 - cy) / ry;
        if dx * dx + dy * dy > 1.0 {
            px.0[3] = 0;
        }
    }
    out
}

/// Center a transparent-padded logo inside a larger transparent canvas.
pub fn pad_centered(logo: &RgbaImage, canvas_size: u32, logo_size: u32) -> RgbaImage {
    let mut canvas = RgbaImage::new(canvas_size, canvas_size);
    let icon = resize_square(logo, logo_size);
    let offset = (canvas_size.saturating_sub(logo_size) / 2) as i64;
    imageops::overlay(&mut canvas, &icon, offset, offset);
    canvas
}

/// An opaque canvas of `width`x`height` filled with `bg`, with the logo resized to
/// `logo_size` and composited at the center.
pub fn centered_on(width: u32, height: u32, bg: Color, logo: &RgbaImage, logo_size: u32) -> RgbImage {
    let mut canvas = ImageBuffer::from_pixel(width, height, bg.to_image_rgb());
    let resized = resize_square(logo, logo_size);
    let x = (width.saturating_sub(logo_size) / 2) as i64;
    let y = (height.saturating_sub(logo_size) / 2) as i64;
    paste_with_alpha(&mut canvas, &resized, x, y);
    canvas
}

/// Drop alpha without blending.
pub fn to_rgb(img: &RgbaImage) -> RgbImage {
    image::DynamicImage::ImageRgba8(img.clone()).to_rgb8()
}

/// Create the parent directory of `path` if needed.
pub fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| AssetError::io(parent, e))?;
        }
    }
    Ok(())
}

/// Save an 8-bit image as PNG, creating parent directories.
pub fn save_png<P>(img: &ImageBuffer<P, Vec<u8>>, path: &Path) -> Result<()>
where
    P: Pixel<Subpixel = u8> + PixelWithColorType,
{
    ensure_parent(path)?;
    img.save_with_format(path, image::ImageFormat::Png)
        .map_err(|e| AssetError::image(path, e))
}

/// Encode RGBA pixels as PNG with maximum compression.
pub fn encode_png(img: &RgbaImage) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    PngEncoder::new_with_quality(&mut buf, CompressionType::Best, PngFilter::Adaptive)
        .write_image(img.as_raw(), img.width(), img.height(), ExtendedColorType::Rgba8)
        .map_err(|e| AssetError::image("<memory>", e))?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid(size: u32, px: [u8; 4]) -> RgbaImage {
        RgbaImage::from_pixel(size, size, Rgba(px))
    }

    #[test]
    fn test_flatten_uses_background_for_transparent_pixels() {
        let img = solid(4, [255, 0, 0, 0]);
        let flat = flatten(&img, Color::rgb(13, 13, 13));
        assert_eq!(flat.get_pixel(1, 1), &Rgb([13, 13, 13]));

        let opaque = solid(4, [255, 0, 0, 255]);
        let flat = flatten(&opaque, Color::rgb(13, 13, 13));
        assert_eq!(flat.get_pixel(1, 1), &Rgb([255, 0, 0]));
    }

    #[test]
    fn test_circle_mask_clears_corners() {
        let masked = circle_mask(&solid(48, [10, 20, 30, 255]));
        assert_eq!(masked.get_pixel(0, 0)[3], 0);
        assert_eq!(masked.get_pixel(47, 47)[3], 0);
        assert_eq!(masked.get_pixel(24, 24)[3], 255);
        assert_eq!(masked.get_pixel(24, 0)[3], 255);
    }

    #[test]
    fn test_pad_centered_keeps_border_transparent() {
        let padded = pad_centered(&solid(64, [200, 200, 200, 255]), 108, 71);
        assert_eq!(padded.dimensions(), (108, 108));
        assert_eq!(padded.get_pixel(0, 0)[3], 0);
        assert_eq!(padded.get_pixel(54, 54)[3], 255);
    }

    #[test]
    fn test_centered_on_dimensions() {
        let out = centered_on(480, 800, Color::rgb(8, 9, 12), &solid(32, [255; 4]), 160);
        assert_eq!(out.dimensions(), (480, 800));
        assert_eq!(out.get_pixel(0, 0), &Rgb([8, 9, 12]));
        assert_eq!(out.get_pixel(240, 400), &Rgb([255, 255, 255]));
    }

    #[test]
    fn test_encode_png_decodes_back() {
        let img = solid(8, [1, 2, 3, 4]);
        let bytes = encode_png(&img).unwrap();
        let decoded = image::load_from_memory(&bytes).unwrap().to_rgba8();
        assert_eq!(decoded, img);
    }

    #[test]
    fn test_load_missing_source() {
        let err = load_rgba(Path::new("/definitely/not/here.png")).unwrap_err();
        assert!(matches!(err, AssetError::MissingSource(_)));
    }
}
