//! EAN-13 bar rendering

use crate::error::{RenderError, RenderResult};
use crate::raster::resize_exact;
use barcoders::sym::ean13::EAN13;
use image::{DynamicImage, GrayImage, Luma, RgbaImage};
use tracing::debug;

/// Pixels per module before the final resize
const MODULE_PX: u32 = 4;
/// White modules on each side of the symbol
const QUIET_MODULES: u32 = 9;
/// Bar height before the final resize
const BAR_PX: u32 = 220;

/// Render `data` as an EAN-13 barcode scaled to an exact pixel size.
///
/// The payload must be 12 numeric digits (or 13 with a valid check
/// digit); anything else is an encoding error. Modules are painted as
/// full-height black bars with quiet zones on both sides, then resampled
/// to `size`.
pub fn ean13_image(data: &str, size: (u32, u32)) -> RenderResult<RgbaImage> {
    let symbol = EAN13::new(data)
        .map_err(|e| RenderError::Encoding(format!("ean13 payload {data:?}: {e}")))?;
    let modules = symbol.encode();

    let width = (modules.len() as u32 + 2 * QUIET_MODULES) * MODULE_PX;
    let mut bars = GrayImage::from_pixel(width, BAR_PX, Luma([255]));
    for (i, module) in modules.iter().enumerate() {
        if *module == 0 {
            continue;
        }
        let left = (QUIET_MODULES + i as u32) * MODULE_PX;
        for x in left..left + MODULE_PX {
            for y in 0..BAR_PX {
                bars.put_pixel(x, y, Luma([0]));
            }
        }
    }
    debug!(modules = modules.len(), width, "ean13 symbol rendered");

    resize_exact(&DynamicImage::ImageLuma8(bars), size)
}
