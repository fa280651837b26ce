use crate::error::AppResult;

/// Seam between the pipeline and whatever asks the user to pick a theme.
///
/// The production implementation renders an interactive terminal prompt;
/// tests drive the pipeline with scripted implementations instead.
pub trait ThemeSelector {
    /// Present `names` as a single-choice list and block until the user
    /// picks exactly one or cancels.
    ///
    /// `names` is non-empty and ordered; the returned name must be one of
    /// its members. Cancellation and prompt failures both surface as
    /// [`AppError::Selection`](crate::error::AppError::Selection).
    fn select(&self, names: &[String]) -> AppResult<String>;
}
