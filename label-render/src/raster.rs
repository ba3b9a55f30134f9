//! Exact-size resampling shared by the symbol renderers

use crate::error::{RenderError, RenderResult};
use image::{DynamicImage, RgbaImage, imageops::FilterType};

/// Resize an image to an exact target size.
///
/// Uses Lanczos3 so downscaled bars and modules keep clean edges.
pub fn resize_exact(image: &DynamicImage, size: (u32, u32)) -> RenderResult<RgbaImage> {
    let (width, height) = size;
    if width == 0 || height == 0 {
        return Err(RenderError::Image(format!(
            "cannot resize to {width}x{height}"
        )));
    }
    Ok(image
        .resize_exact(width, height, FilterType::Lanczos3)
        .to_rgba8())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resize_to_exact_dimensions() {
        let src = DynamicImage::ImageRgba8(RgbaImage::new(10, 10));
        let out = resize_exact(&src, (33, 7)).unwrap();
        assert_eq!(out.dimensions(), (33, 7));
    }

    #[test]
    fn test_zero_dimension_rejected() {
        let src = DynamicImage::ImageRgba8(RgbaImage::new(10, 10));
        assert!(resize_exact(&src, (0, 7)).is_err());
        assert!(resize_exact(&src, (7, 0)).is_err());
    }
}
