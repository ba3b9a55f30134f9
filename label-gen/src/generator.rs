//! Label composition and output
//!
//! Loads the shared font and master template once, prepares the output
//! folder, then composes and saves one label per input row. The first
//! failing row aborts the run.

use crate::config::Settings;
use crate::error::{LabelError, LabelResult};
use crate::rows::{LabelRow, RowSource};
use image::{DynamicImage, GenericImageView, imageops};
use label_render::{LabelFont, draw_multiline_text, ean13_image, qr_image};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Batch label generator.
///
/// The font and master template are loaded once and shared read-only
/// across rows; each label is composed on a fresh copy of the template.
pub struct LabelGenerator {
    settings: Settings,
    font: LabelFont,
    master: DynamicImage,
}

impl LabelGenerator {
    /// Resolve all startup state: font, master template, output folder.
    pub fn new(settings: Settings) -> LabelResult<Self> {
        let font = LabelFont::load(&settings.font_path, settings.font_size)?;

        let master = image::open(&settings.master_image_path)
            .map_err(|e| image_error(&settings.master_image_path, "open master template", e))?;
        info!(
            path = %settings.master_image_path.display(),
            width = master.width(),
            height = master.height(),
            "master template loaded"
        );

        prepare_output_folder(&settings.output_folder, settings.clear_output_folder)?;

        Ok(Self {
            settings,
            font,
            master,
        })
    }

    /// Process every row of the configured CSV file, in input order.
    ///
    /// Returns the number of labels written.
    pub fn run(&self) -> LabelResult<usize> {
        let mut written = 0;
        for row in RowSource::open(&self.settings.csv_file_path)? {
            let row = row?;
            let path = self.compose_label(&row)?;
            info!(path = %path.display(), "label written");
            written += 1;
        }
        Ok(written)
    }

    /// Compose and save a single label.
    ///
    /// The output file is named after the barcode payload, so rows that
    /// share one overwrite each other.
    fn compose_label(&self, row: &LabelRow) -> LabelResult<PathBuf> {
        let qr = qr_image(&row.qr_data, self.settings.qr_size)?;
        let bars = ean13_image(&row.barcode_data, self.settings.barcode_size)?;

        let mut canvas = self.master.to_rgba8();
        let (qx, qy) = self.settings.qr_position;
        imageops::replace(&mut canvas, &qr, qx, qy);
        let (bx, by) = self.settings.barcode_position;
        imageops::replace(&mut canvas, &bars, bx, by);

        let text = row.decoded_text();
        draw_multiline_text(&mut canvas, &text, self.settings.text_position, &self.font);

        let path = self
            .settings
            .output_folder
            .join(format!("{}.png", row.barcode_data));
        canvas
            .save(&path)
            .map_err(|e| image_error(&path, "save label", e))?;
        Ok(path)
    }
}

/// Create the output folder if needed and optionally clear it.
///
/// Clearing unlinks files and symlinks and removes empty directories.
/// A non-empty directory is never deleted, only warned about.
fn prepare_output_folder(dir: &Path, clear: bool) -> LabelResult<()> {
    fs::create_dir_all(dir)
        .map_err(|e| io_context(e, format!("create output folder {}", dir.display())))?;
    if !clear {
        return Ok(());
    }

    let entries = fs::read_dir(dir)
        .map_err(|e| io_context(e, format!("list output folder {}", dir.display())))?;
    for entry in entries {
        let entry = entry
            .map_err(|e| io_context(e, format!("list output folder {}", dir.display())))?;
        let path = entry.path();
        let file_type = entry
            .file_type()
            .map_err(|e| io_context(e, format!("inspect {}", path.display())))?;

        let removed = if file_type.is_dir() {
            fs::remove_dir(&path)
        } else {
            fs::remove_file(&path)
        };
        if let Err(e) = removed {
            warn!(path = %path.display(), error = %e, "could not clear entry");
        }
    }
    Ok(())
}

fn image_error(path: &Path, action: &str, e: image::ImageError) -> LabelError {
    match e {
        image::ImageError::IoError(io) => io_context(io, format!("{action} {}", path.display())),
        other => LabelError::Image(format!("{action} {}: {other}", path.display())),
    }
}

fn io_context(e: std::io::Error, context: String) -> LabelError {
    LabelError::Io(std::io::Error::new(e.kind(), format!("{context}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_removes_files_and_symlinks() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("labels");
        fs::create_dir_all(&out).unwrap();
        fs::write(out.join("a.png"), b"a").unwrap();
        fs::write(out.join("b.png"), b"b").unwrap();
        #[cfg(unix)]
        std::os::unix::fs::symlink(out.join("a.png"), out.join("link.png")).unwrap();

        prepare_output_folder(&out, true).unwrap();

        assert!(!out.join("a.png").exists());
        assert!(!out.join("b.png").exists());
        #[cfg(unix)]
        assert!(!out.join("link.png").exists());
    }

    #[test]
    fn test_clear_removes_empty_dir_keeps_populated_dir() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("labels");
        let empty = out.join("empty");
        let full = out.join("full");
        fs::create_dir_all(&empty).unwrap();
        fs::create_dir_all(&full).unwrap();
        fs::write(full.join("keep.txt"), b"k").unwrap();

        prepare_output_folder(&out, true).unwrap();

        assert!(!empty.exists());
        assert!(full.join("keep.txt").exists());
    }

    #[test]
    fn test_no_clear_leaves_contents() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("labels");
        fs::create_dir_all(&out).unwrap();
        fs::write(out.join("a.png"), b"a").unwrap();

        prepare_output_folder(&out, false).unwrap();

        assert!(out.join("a.png").exists());
    }

    #[test]
    fn test_creates_missing_output_folder() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("nested").join("labels");

        prepare_output_folder(&out, true).unwrap();

        assert!(out.is_dir());
    }
}
