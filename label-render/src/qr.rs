//! QR symbol rendering

use crate::error::{RenderError, RenderResult};
use crate::raster::resize_exact;
use image::{DynamicImage, Luma, RgbaImage};
use qrcode::QrCode;
use tracing::debug;

/// Pixels per module before the final resize
const MODULE_PX: u32 = 10;

/// Render `data` as a QR symbol scaled to an exact pixel size.
///
/// The smallest symbol version that holds the data is selected; a payload
/// beyond the capacity of the largest version is an encoding error. The
/// symbol is drawn black on white with a quiet zone, then resampled to
/// `size`.
pub fn qr_image(data: &str, size: (u32, u32)) -> RenderResult<RgbaImage> {
    let code = QrCode::new(data.as_bytes()).map_err(|e| {
        RenderError::Encoding(format!("qr payload ({} bytes): {e}", data.len()))
    })?;

    let symbol = code
        .render::<Luma<u8>>()
        .module_dimensions(MODULE_PX, MODULE_PX)
        .build();
    debug!(
        modules = code.width(),
        width = symbol.width(),
        "qr symbol rendered"
    );

    resize_exact(&DynamicImage::ImageLuma8(symbol), size)
}
