use crate::error::{AppError, AppResult};
use crate::theme::types::Theme;
use crate::theme::validation::ThemeNameValidator;
use crate::validation::Validator;
use std::{
    fs,
    path::{Path, PathBuf},
};

/// File extension that marks a theme definition.
const THEME_FILE_EXTENSION: &str = "json";

/// Theme loader responsible for discovering and loading themes from the
/// filesystem.
///
/// Discovery and loading both work against the directory handed in at
/// construction time; nothing is derived from the ambient working
/// directory here.
pub struct ThemeLoader {
    themes_dir: PathBuf,
    name_validator: ThemeNameValidator,
}

impl ThemeLoader {
    pub fn new(themes_dir: impl Into<PathBuf>) -> Self {
        Self {
            themes_dir: themes_dir.into(),
            name_validator: ThemeNameValidator,
        }
    }

    pub fn themes_dir(&self) -> &Path {
        &self.themes_dir
    }

    /// Enumerate the available theme names, sorted.
    ///
    /// A theme name is the base name of every regular `.json` file in the
    /// themes directory. Entries that are not files, carry another
    /// extension, or fail name validation are skipped. An unreadable
    /// directory fails with [`AppError::DirectoryRead`]; a readable
    /// directory with no qualifying files fails with
    /// [`AppError::NoThemesFound`].
    pub fn discover(&self) -> AppResult<Vec<String>> {
        let entries = fs::read_dir(&self.themes_dir).map_err(|e| AppError::DirectoryRead {
            path: self.themes_dir.clone(),
            reason: e.to_string(),
        })?;

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| AppError::DirectoryRead {
                path: self.themes_dir.clone(),
                reason: e.to_string(),
            })?;

            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            if path.extension().and_then(|s| s.to_str()) != Some(THEME_FILE_EXTENSION) {
                continue;
            }

            if let Some(name) = path.file_stem().and_then(|n| n.to_str()) {
                if self.name_validator.validate(name).is_ok() {
                    names.push(name.to_string());
                } else {
                    log::warn!("Skipping theme file with invalid name: {}", path.display());
                }
            }
        }

        if names.is_empty() {
            return Err(AppError::NoThemesFound {
                path: self.themes_dir.clone(),
            });
        }

        names.sort();
        log::debug!(
            "Discovered {} theme(s) in '{}'",
            names.len(),
            self.themes_dir.display()
        );
        Ok(names)
    }

    /// Load the theme definition for `name`.
    ///
    /// The expected file is `<themes_dir>/<name>.json`. The name is
    /// validated before it is joined into a path.
    pub fn load(&self, name: &str) -> AppResult<Theme> {
        self.name_validator.validate(name)?;

        let theme_path = self
            .themes_dir
            .join(format!("{name}.{THEME_FILE_EXTENSION}"));

        let theme_content = fs::read_to_string(&theme_path).map_err(|e| AppError::ThemeRead {
            path: theme_path.clone(),
            reason: e.to_string(),
        })?;

        let mut theme: Theme =
            serde_json::from_str(&theme_content).map_err(|e| AppError::ThemeParse {
                path: theme_path.clone(),
                reason: e.to_string(),
            })?;
        theme.name = name.to_string();

        log::debug!("Loaded theme '{}' from '{}'", name, theme_path.display());
        Ok(theme)
    }
}
