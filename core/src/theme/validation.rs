use crate::error::AppError;
use crate::validation::Validator;

/// Validation errors specific to theme names
#[derive(Debug, Clone)]
pub struct ThemeNameError {
    pub name: String,
    pub reason: String,
}

impl ThemeNameError {
    fn new(name: &str, reason: &str) -> Self {
        Self {
            name: name.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn user_message(&self) -> String {
        format!("'{}' ({})", self.name, self.reason)
    }
}

impl From<ThemeNameError> for AppError {
    fn from(error: ThemeNameError) -> Self {
        AppError::InvalidThemeName(error.user_message())
    }
}

/// Validator for theme names.
///
/// Theme names come from directory listings and are joined back into file
/// paths when a theme is loaded, so a valid name must stay inside the
/// themes directory: no path separators, no parent-directory component,
/// no hidden-file prefix.
pub struct ThemeNameValidator;

impl Validator<str> for ThemeNameValidator {
    type Error = ThemeNameError;

    fn validate(&self, input: &str) -> Result<(), Self::Error> {
        if input.is_empty() {
            return Err(ThemeNameError::new(input, "name cannot be empty"));
        }

        if input.contains('/') || input.contains('\\') {
            return Err(ThemeNameError::new(
                input,
                "name cannot contain path separators",
            ));
        }

        if input == ".." {
            return Err(ThemeNameError::new(
                input,
                "name cannot be a parent-directory reference",
            ));
        }

        if input.starts_with('.') {
            return Err(ThemeNameError::new(input, "name cannot start with a dot"));
        }

        Ok(())
    }
}
