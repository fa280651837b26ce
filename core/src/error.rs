use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the theme application pipeline.
///
/// Every variant is terminal: the pipeline never retries or recovers, it
/// reports the error and the process exits non-zero. Each variant carries
/// the offending path and the underlying cause so the report always names
/// what failed and why.
///
/// # Error Categories
///
/// ## Theme Discovery Errors
/// - [`DirectoryRead`] - The themes directory is missing, unreadable, or not a directory
/// - [`NoThemesFound`] - The themes directory holds no theme definition files
/// - [`InvalidThemeName`] - A theme name failed sanitation (empty, path separators)
///
/// ## Theme Loading Errors
/// - [`ThemeRead`] - The selected theme file could not be read
/// - [`ThemeParse`] - The selected theme file is not valid JSON
///
/// ## Selection Errors
/// - [`Selection`] - The interactive prompt failed or the user cancelled
///
/// ## Settings Errors
/// - [`SettingsRead`] - The settings file exists but could not be read
/// - [`SettingsParse`] - The settings file is not a valid JSON object
/// - [`SettingsWrite`] - The merged settings could not be written back
///
/// [`DirectoryRead`]: AppError::DirectoryRead
/// [`NoThemesFound`]: AppError::NoThemesFound
/// [`InvalidThemeName`]: AppError::InvalidThemeName
/// [`ThemeRead`]: AppError::ThemeRead
/// [`ThemeParse`]: AppError::ThemeParse
/// [`Selection`]: AppError::Selection
/// [`SettingsRead`]: AppError::SettingsRead
/// [`SettingsParse`]: AppError::SettingsParse
/// [`SettingsWrite`]: AppError::SettingsWrite
#[derive(Debug, Clone, Error)]
pub enum AppError {
    /// The themes directory could not be enumerated.
    ///
    /// Raised when the directory is missing, is not a directory, or the
    /// process lacks permission to read it. Discovery happens before the
    /// prompt is shown, so this fails the run without any interaction.
    #[error("Failed to read themes directory '{path}': {reason}")]
    DirectoryRead { path: PathBuf, reason: String },

    /// The themes directory was readable but held no theme definition files.
    #[error("No theme files found in themes directory '{path}'")]
    NoThemesFound { path: PathBuf },

    /// A theme name failed sanitation.
    ///
    /// Names are joined into filesystem paths, so anything empty or carrying
    /// path separators is rejected before any file I/O happens.
    #[error("Invalid theme name: {0}")]
    InvalidThemeName(String),

    /// The interactive prompt failed or the user cancelled it.
    ///
    /// Cancellation is a fatal error, not a soft cancel: the run ends
    /// without touching the settings file.
    #[error("Theme selection failed: {0}")]
    Selection(String),

    /// The selected theme file could not be read.
    #[error("Failed to read theme file '{path}': {reason}")]
    ThemeRead { path: PathBuf, reason: String },

    /// The selected theme file is not valid JSON.
    #[error("Failed to parse theme file '{path}': {reason}")]
    ThemeParse { path: PathBuf, reason: String },

    /// The settings file exists but could not be read.
    ///
    /// A missing settings file is not an error - the pipeline starts from
    /// an empty document in that case. This variant covers everything else
    /// (permissions, I/O failures).
    #[error("Failed to read settings file '{path}': {reason}")]
    SettingsRead { path: PathBuf, reason: String },

    /// The settings file exists but is not a valid JSON object.
    ///
    /// Malformed settings are never repaired or partially recovered.
    #[error("Failed to parse settings file '{path}': {reason}")]
    SettingsParse { path: PathBuf, reason: String },

    /// The merged settings document could not be written to disk.
    #[error("Failed to write settings file '{path}': {reason}")]
    SettingsWrite { path: PathBuf, reason: String },
}

/// Result type alias for pipeline operations
pub type AppResult<T> = Result<T, AppError>;
