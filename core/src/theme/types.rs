use serde::Deserialize;
use serde_json::{Map, Value};

/// A parsed theme definition.
///
/// Both payload fields are optional in the file: a theme may carry only
/// color customizations, only an accent color, or neither. The display
/// name is not part of the file - the loader stamps it from the file stem
/// after parsing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Theme {
    /// Display name, derived from the theme's file name without extension.
    #[serde(skip)]
    pub name: String,

    /// Color-customization entries merged per-key into the settings document.
    #[serde(rename = "workbench.colorCustomizations", default)]
    pub color_customizations: Map<String, Value>,

    /// Accent color assigned wholesale to the settings document. When the
    /// theme defines none, any previously applied accent is removed.
    #[serde(rename = "peacock.color", default)]
    pub accent_color: Option<String>,
}
