//! # label-gen
//!
//! Batch shipping-label generator. Reads an INI configuration and a CSV
//! of label rows, composes a QR code, an EAN-13 barcode and address text
//! onto a master template, and writes one PNG per row.
//!
//! Rendering primitives live in the `label-render` crate; this crate owns
//! configuration, row input and composition.

pub mod config;
pub mod error;
pub mod generator;
pub mod logger;
pub mod rows;

pub use config::Settings;
pub use error::{LabelError, LabelResult};
pub use generator::LabelGenerator;
pub use rows::{LabelRow, RowSource};
