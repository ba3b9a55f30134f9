//! CSV row input
//!
//! One record per data row, keyed by the header line. The source is
//! lazy and single-pass; re-reading means reopening the file.

use crate::error::{LabelError, LabelResult};
use serde::Deserialize;
use std::fs::File;
use std::path::Path;

/// One label's worth of input data.
///
/// Extra CSV columns are ignored; a missing required column is an input
/// error.
#[derive(Debug, Clone, Deserialize)]
pub struct LabelRow {
    pub qr_data: String,
    pub barcode_data: String,
    pub multiline_text: String,
}

impl LabelRow {
    /// The text field with literal `\n` escapes decoded to line breaks
    pub fn decoded_text(&self) -> String {
        self.multiline_text.replace("\\n", "\n")
    }
}

/// Lazy iterator over the rows of a CSV file
pub struct RowSource {
    path: String,
    iter: csv::DeserializeRecordsIntoIter<File, LabelRow>,
}

impl RowSource {
    /// Open a CSV file; the first line is the header.
    pub fn open(path: &Path) -> LabelResult<Self> {
        let reader = csv::Reader::from_path(path)
            .map_err(|e| LabelError::Input(format!("{}: {e}", path.display())))?;
        Ok(Self {
            path: path.display().to_string(),
            iter: reader.into_deserialize(),
        })
    }
}

impl Iterator for RowSource {
    type Item = LabelResult<LabelRow>;

    fn next(&mut self) -> Option<Self::Item> {
        let record = self.iter.next()?;
        Some(record.map_err(|e| LabelError::Input(format!("{}: {e}", self.path))))
    }
}
