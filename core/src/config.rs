use std::path::{Path, PathBuf};

/// Default themes directory, relative to the working directory.
pub const DEFAULT_THEMES_DIR: &str = "themes";

/// Default workspace settings file, relative to the working directory.
pub const DEFAULT_SETTINGS_PATH: &str = ".vscode/settings.json";

/// Explicit configuration for a pipeline run.
///
/// Both paths default to the conventional workspace-relative locations but
/// are always passed explicitly into each stage, so the whole pipeline can
/// be exercised against injected paths. There is no configuration file and
/// no environment lookup behind this struct.
#[derive(Debug, Clone)]
pub struct AppConfig {
    themes_dir: PathBuf,
    settings_path: PathBuf,
    logging: LoggingConfig,
}

impl AppConfig {
    pub fn new(themes_dir: impl Into<PathBuf>, settings_path: impl Into<PathBuf>) -> Self {
        Self {
            themes_dir: themes_dir.into(),
            settings_path: settings_path.into(),
            logging: LoggingConfig::default(),
        }
    }

    pub fn with_logging(mut self, logging: LoggingConfig) -> Self {
        self.logging = logging;
        self
    }

    /// Directory that holds the theme definition files.
    pub fn themes_dir(&self) -> &Path {
        &self.themes_dir
    }

    /// Workspace settings file the merged document is written to.
    pub fn settings_path(&self) -> &Path {
        &self.settings_path
    }

    pub fn logging(&self) -> &LoggingConfig {
        &self.logging
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new(DEFAULT_THEMES_DIR, DEFAULT_SETTINGS_PATH)
    }
}

/// Logging configuration consumed by the binary's logger setup.
#[derive(Debug, Clone, Default)]
pub struct LoggingConfig {
    level: Option<String>,
}

impl LoggingConfig {
    pub fn new(level: impl Into<String>) -> Self {
        Self {
            level: Some(level.into()),
        }
    }

    pub fn level(&self) -> &str {
        self.level.as_deref().unwrap_or("info")
    }
}
