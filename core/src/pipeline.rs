use crate::config::AppConfig;
use crate::error::AppResult;
use crate::select::ThemeSelector;
use crate::settings::SettingsDocument;
use crate::theme::ThemeLoader;
use std::path::PathBuf;

/// Outcome of a successful pipeline run, for the caller's confirmation
/// message.
#[derive(Debug, Clone)]
pub struct AppliedTheme {
    pub name: String,
    pub settings_path: PathBuf,
}

/// Run the full theme application pipeline.
///
/// Linear early-return chain: discover -> select -> load -> read settings
/// -> merge -> write. A failure at any stage aborts the run, and because
/// the write is the last stage, the settings file is left untouched by
/// every failure path.
pub fn apply_theme(config: &AppConfig, selector: &dyn ThemeSelector) -> AppResult<AppliedTheme> {
    let loader = ThemeLoader::new(config.themes_dir());

    let names = loader.discover()?;
    log::info!(
        "Found {} theme(s) in '{}'",
        names.len(),
        config.themes_dir().display()
    );

    let selected = selector.select(&names)?;
    log::info!("Selected theme '{selected}'");

    let theme = loader.load(&selected)?;

    let mut settings = SettingsDocument::load(config.settings_path())?;
    settings.apply_theme(&theme);
    settings.save(config.settings_path())?;

    log::info!(
        "Applied theme '{}' to '{}'",
        theme.name,
        config.settings_path().display()
    );
    Ok(AppliedTheme {
        name: theme.name,
        settings_path: config.settings_path().to_path_buf(),
    })
}
