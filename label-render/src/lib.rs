//! # label-render
//!
//! Low-level label element rendering - symbol and text rasterization only.
//!
//! ## Scope
//!
//! This crate handles HOW a label element is produced:
//! - QR symbol rendering
//! - EAN-13 bar rendering
//! - TrueType text rasterization
//! - Exact-size anti-aliased resampling
//!
//! Business logic (WHAT goes on a label and where) should stay in
//! application code:
//! - Shipping label composition → label-gen
//!
//! ## Example
//!
//! ```ignore
//! use label_render::{ean13_image, qr_image};
//!
//! let qr = qr_image("https://example.com/track/42", (200, 200))?;
//! let bars = ean13_image("012345678905", (300, 120))?;
//! ```

mod barcode;
mod error;
mod font;
mod qr;
mod raster;

// Re-exports
pub use barcode::ean13_image;
pub use error::{RenderError, RenderResult};
pub use font::{LabelFont, draw_multiline_text};
pub use qr::qr_image;
pub use raster::resize_exact;
