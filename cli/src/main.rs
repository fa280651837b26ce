use plumage::logger;
use plumage::picker::InteractivePicker;
use plumage_core::config::AppConfig;
use plumage_core::pipeline;
use std::process::ExitCode;

fn main() -> ExitCode {
    let config = AppConfig::default();

    if let Err(e) = logger::setup_logger(config.logging()) {
        eprintln!("Warning: failed to initialize logger: {e}");
    }

    match pipeline::apply_theme(&config, &InteractivePicker::new()) {
        Ok(applied) => {
            println!(
                "Successfully applied the '{}' theme to {}.",
                applied.name,
                applied.settings_path.display()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
