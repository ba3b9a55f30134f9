//! Configuration loading
//!
//! Settings come from an INI file with `[Section]` headers. Every value
//! is required; a missing or malformed entry aborts startup.

use crate::error::{LabelError, LabelResult};
use ini::Ini;
use std::path::{Path, PathBuf};

/// Parsed configuration document with fail-fast typed accessors
pub struct ConfigFile {
    ini: Ini,
}

impl ConfigFile {
    /// Load and parse an INI file
    pub fn load(path: &Path) -> LabelResult<Self> {
        let ini = Ini::load_from_file(path)
            .map_err(|e| LabelError::Config(format!("{}: {e}", path.display())))?;
        Ok(Self { ini })
    }

    /// Raw string value; errors when the section or option is absent
    pub fn get(&self, section: &str, option: &str) -> LabelResult<&str> {
        self.ini
            .section(Some(section))
            .ok_or_else(|| LabelError::Config(format!("missing section [{section}]")))?
            .get(option)
            .ok_or_else(|| LabelError::Config(format!("missing option [{section}] {option}")))
    }

    /// Two comma-separated integers, e.g. `120,40`
    pub fn get_pair(&self, section: &str, option: &str) -> LabelResult<(i64, i64)> {
        let raw = self.get(section, option)?;
        let mut parts = raw.split(',');
        let (Some(first), Some(second), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(LabelError::Config(format!(
                "[{section}] {option}: expected \"x,y\", got {raw:?}"
            )));
        };
        let parse = |part: &str| {
            part.trim().parse::<i64>().map_err(|e| {
                LabelError::Config(format!("[{section}] {option}: {part:?}: {e}"))
            })
        };
        Ok((parse(first)?, parse(second)?))
    }

    /// Unsigned integer value
    pub fn get_u32(&self, section: &str, option: &str) -> LabelResult<u32> {
        let raw = self.get(section, option)?;
        raw.trim()
            .parse()
            .map_err(|e| LabelError::Config(format!("[{section}] {option}: {raw:?}: {e}")))
    }

    /// Boolean value, accepting `1/0`, `yes/no`, `true/false`, `on/off`
    pub fn get_bool(&self, section: &str, option: &str) -> LabelResult<bool> {
        let raw = self.get(section, option)?;
        match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "yes" | "true" | "on" => Ok(true),
            "0" | "no" | "false" | "off" => Ok(false),
            _ => Err(LabelError::Config(format!(
                "[{section}] {option}: not a boolean: {raw:?}"
            ))),
        }
    }
}

/// Fully-resolved run configuration, built once at startup
#[derive(Debug, Clone)]
pub struct Settings {
    pub master_image_path: PathBuf,
    pub font_path: PathBuf,
    pub output_folder: PathBuf,
    pub csv_file_path: PathBuf,

    pub qr_position: (i64, i64),
    pub barcode_position: (i64, i64),
    pub text_position: (i64, i64),

    pub qr_size: (u32, u32),
    pub barcode_size: (u32, u32),

    pub font_size: u32,

    pub clear_output_folder: bool,
}

impl Settings {
    /// Resolve every setting from `path`, failing on the first missing or
    /// malformed value.
    pub fn load(path: &Path) -> LabelResult<Self> {
        let cfg = ConfigFile::load(path)?;

        Ok(Self {
            master_image_path: cfg.get("Paths", "master_shipping_label_image_path")?.into(),
            font_path: cfg.get("Paths", "font_path")?.into(),
            output_folder: cfg.get("Paths", "output_folder")?.into(),
            csv_file_path: cfg.get("Paths", "csv_file_path")?.into(),

            qr_position: cfg.get_pair("Positions", "qr_position")?,
            barcode_position: cfg.get_pair("Positions", "barcode_position")?,
            text_position: cfg.get_pair("Positions", "text_position")?,

            qr_size: dimensions(cfg.get_pair("Sizes", "qr_size")?, "Sizes", "qr_size")?,
            barcode_size: dimensions(
                cfg.get_pair("Sizes", "barcode_size")?,
                "Sizes",
                "barcode_size",
            )?,

            font_size: cfg.get_u32("Font", "font_size")?,

            clear_output_folder: cfg.get_bool("Settings", "clear_output_folder")?,
        })
    }
}

/// A position pair is allowed to be negative; a size pair is not.
fn dimensions(pair: (i64, i64), section: &str, option: &str) -> LabelResult<(u32, u32)> {
    let convert = |v: i64| {
        u32::try_from(v).map_err(|_| {
            LabelError::Config(format!("[{section}] {option}: invalid dimension {v}"))
        })
    };
    Ok((convert(pair.0)?, convert(pair.1)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const SAMPLE: &str = "\
[Paths]
master_shipping_label_image_path=assets/master.png
font_path=assets/DejaVuSans.ttf
output_folder=out/labels
csv_file_path=data/labels.csv

[Positions]
qr_position=420,40
barcode_position=40,300
text_position=40,40

[Sizes]
qr_size=200,200
barcode_size=300,120

[Font]
font_size=24

[Settings]
clear_output_folder=true
";

    fn write_sample(contents: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.ini");
        fs::write(&path, contents).unwrap();
        (dir, path)
    }

    #[test]
    fn test_accessors_return_literal_values() {
        let (_dir, path) = write_sample(SAMPLE);
        let cfg = ConfigFile::load(&path).unwrap();

        assert_eq!(
            cfg.get("Paths", "output_folder").unwrap(),
            "out/labels"
        );
        assert_eq!(cfg.get_pair("Sizes", "qr_size").unwrap(), (200, 200));
        assert_eq!(cfg.get_u32("Font", "font_size").unwrap(), 24);
        assert!(cfg.get_bool("Settings", "clear_output_folder").unwrap());
    }

    #[test]
    fn test_missing_section_and_option() {
        let (_dir, path) = write_sample(SAMPLE);
        let cfg = ConfigFile::load(&path).unwrap();

        assert!(matches!(
            cfg.get("Nowhere", "x"),
            Err(LabelError::Config(_))
        ));
        assert!(matches!(
            cfg.get("Paths", "missing_option"),
            Err(LabelError::Config(_))
        ));
    }

    #[test]
    fn test_malformed_pair() {
        let (_dir, path) = write_sample("[Sizes]\nqr_size=200\nbarcode_size=1,2,3\n");
        let cfg = ConfigFile::load(&path).unwrap();

        assert!(cfg.get_pair("Sizes", "qr_size").is_err());
        assert!(cfg.get_pair("Sizes", "barcode_size").is_err());
    }

    #[test]
    fn test_boolean_conventions() {
        let (_dir, path) =
            write_sample("[Settings]\na=YES\nb=off\nc=1\nd=maybe\n");
        let cfg = ConfigFile::load(&path).unwrap();

        assert!(cfg.get_bool("Settings", "a").unwrap());
        assert!(!cfg.get_bool("Settings", "b").unwrap());
        assert!(cfg.get_bool("Settings", "c").unwrap());
        assert!(cfg.get_bool("Settings", "d").is_err());
    }

    #[test]
    fn test_settings_resolve_fully() {
        let (_dir, path) = write_sample(SAMPLE);
        let settings = Settings::load(&path).unwrap();

        assert_eq!(settings.qr_position, (420, 40));
        assert_eq!(settings.barcode_size, (300, 120));
        assert_eq!(settings.font_size, 24);
        assert!(settings.clear_output_folder);
        assert_eq!(settings.csv_file_path, PathBuf::from("data/labels.csv"));
    }

    #[test]
    fn test_negative_size_rejected() {
        let (_dir, path) = write_sample(SAMPLE.replace("qr_size=200,200", "qr_size=-1,200").as_str());
        assert!(Settings::load(&path).is_err());
    }

    #[test]
    fn test_missing_config_file() {
        assert!(matches!(
            ConfigFile::load(Path::new("/nonexistent/config.ini")),
            Err(LabelError::Config(_))
        ));
    }
}
