use label_gen::{LabelGenerator, LabelResult, Settings, logger};
use std::path::Path;
use std::process::ExitCode;

fn main() -> ExitCode {
    logger::init_logger();

    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "config/config.ini".to_string());

    match run(Path::new(&config_path)) {
        Ok(count) => {
            tracing::info!(labels = count, "batch complete");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "label generation failed");
            ExitCode::FAILURE
        }
    }
}

fn run(config_path: &Path) -> LabelResult<usize> {
    let settings = Settings::load(config_path)?;
    let generator = LabelGenerator::new(settings)?;
    generator.run()
}
