use dialoguer::{Select, theme::ColorfulTheme};
use plumage_core::error::{AppError, AppResult};
use plumage_core::select::ThemeSelector;

/// Interactive single-choice theme picker rendered on the terminal.
///
/// This is the only user-facing interaction point of the whole run. Both a
/// cancelled prompt (escape) and a failed prompt are fatal
/// [`AppError::Selection`] errors.
pub struct InteractivePicker {
    prompt_theme: ColorfulTheme,
}

impl InteractivePicker {
    pub fn new() -> Self {
        Self {
            prompt_theme: ColorfulTheme::default(),
        }
    }
}

impl Default for InteractivePicker {
    fn default() -> Self {
        Self::new()
    }
}

impl ThemeSelector for InteractivePicker {
    fn select(&self, names: &[String]) -> AppResult<String> {
        if names.is_empty() {
            return Err(AppError::Selection(
                "no theme names to choose from".to_string(),
            ));
        }

        let choice = Select::with_theme(&self.prompt_theme)
            .with_prompt("Choose a theme to apply:")
            .items(names)
            .default(0)
            .interact_opt()
            .map_err(|e| AppError::Selection(e.to_string()))?;

        match choice {
            Some(index) => names
                .get(index)
                .cloned()
                .ok_or_else(|| AppError::Selection("selection index out of range".to_string())),
            None => Err(AppError::Selection("selection cancelled".to_string())),
        }
    }
}
