use crate::error::{AppError, AppResult};
use crate::theme::types::Theme;
use serde::{Deserialize, Serialize};
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::{Map, Value};
use std::{fs, io, path::Path};

/// Settings key holding the per-element color customizations.
pub const COLOR_CUSTOMIZATIONS_KEY: &str = "workbench.colorCustomizations";

/// Settings key holding the workspace accent color.
pub const ACCENT_COLOR_KEY: &str = "peacock.color";

/// Indentation used when the document is written back to disk.
const SETTINGS_INDENT: &[u8] = b"    ";

/// A workspace settings document.
///
/// Thin typed wrapper over an insertion-ordered JSON object. The API can
/// only touch the two managed keys ([`COLOR_CUSTOMIZATIONS_KEY`] and
/// [`ACCENT_COLOR_KEY`]), which is what guarantees that every other key
/// passes through a merge unchanged and in its prior position. Managed
/// keys are updated in place when already present and appended when new.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SettingsDocument {
    fields: Map<String, Value>,
}

impl SettingsDocument {
    /// Load the settings document from `path`.
    ///
    /// A missing file is not an error - the pipeline starts from an empty
    /// document. Any other read failure is [`AppError::SettingsRead`];
    /// content that is not a JSON object is [`AppError::SettingsParse`].
    /// Malformed settings are never repaired or partially recovered.
    pub fn load(path: &Path) -> AppResult<Self> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::debug!(
                    "Settings file '{}' does not exist, starting from an empty document",
                    path.display()
                );
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(AppError::SettingsRead {
                    path: path.to_path_buf(),
                    reason: e.to_string(),
                });
            }
        };

        let fields = serde_json::from_str(&content).map_err(|e| AppError::SettingsParse {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        Ok(Self { fields })
    }

    /// Merge a theme into the document.
    ///
    /// Pure in-memory transformation:
    /// - the theme's color customizations are inserted key-by-key into the
    ///   existing `workbench.colorCustomizations` object (shallow merge -
    ///   keys the theme does not name survive unchanged). The key always
    ///   ends up present, as an empty object when neither side has entries.
    ///   A present-but-not-an-object value is replaced by the merge result.
    /// - `peacock.color` is a straight assignment of the theme's accent
    ///   color. A theme without one removes any previously applied accent.
    pub fn apply_theme(&mut self, theme: &Theme) {
        let mut customizations = match self.fields.get(COLOR_CUSTOMIZATIONS_KEY) {
            Some(Value::Object(existing)) => existing.clone(),
            _ => Map::new(),
        };
        for (key, value) in &theme.color_customizations {
            customizations.insert(key.clone(), value.clone());
        }
        self.fields.insert(
            COLOR_CUSTOMIZATIONS_KEY.to_string(),
            Value::Object(customizations),
        );

        match &theme.accent_color {
            Some(color) => {
                self.fields
                    .insert(ACCENT_COLOR_KEY.to_string(), Value::String(color.clone()));
            }
            None => {
                self.fields.shift_remove(ACCENT_COLOR_KEY);
            }
        }
    }

    /// Serialize the document with 4-space indentation and overwrite `path`
    /// in full.
    ///
    /// Parent directories are not created: a missing `.vscode/` directory
    /// is a write failure like any other. No backup of the prior content
    /// is kept.
    pub fn save(&self, path: &Path) -> AppResult<()> {
        let write_error = |reason: String| AppError::SettingsWrite {
            path: path.to_path_buf(),
            reason,
        };

        let mut buffer = Vec::new();
        let formatter = PrettyFormatter::with_indent(SETTINGS_INDENT);
        let mut serializer = Serializer::with_formatter(&mut buffer, formatter);
        self.serialize(&mut serializer)
            .map_err(|e| write_error(e.to_string()))?;

        fs::write(path, buffer).map_err(|e| write_error(e.to_string()))
    }

    /// Current color customizations, if the key is present and an object.
    pub fn color_customizations(&self) -> Option<&Map<String, Value>> {
        match self.fields.get(COLOR_CUSTOMIZATIONS_KEY) {
            Some(Value::Object(customizations)) => Some(customizations),
            _ => None,
        }
    }

    /// Current accent color, if the key is present and a string.
    pub fn accent_color(&self) -> Option<&str> {
        match self.fields.get(ACCENT_COLOR_KEY) {
            Some(Value::String(color)) => Some(color),
            _ => None,
        }
    }

    /// Value of an arbitrary top-level key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Top-level keys in document order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::{assert_none, assert_ok};
    use serde_json::json;
    use tempfile::TempDir;

    fn document(value: Value) -> SettingsDocument {
        serde_json::from_value(value).unwrap()
    }

    fn theme(customizations: Value, accent: Option<&str>) -> Theme {
        Theme {
            name: "test".to_string(),
            color_customizations: serde_json::from_value(customizations).unwrap(),
            accent_color: accent.map(str::to_string),
        }
    }

    #[test]
    fn load_of_missing_file_yields_empty_document() {
        let dir = TempDir::new().unwrap();
        let doc = SettingsDocument::load(&dir.path().join("settings.json")).unwrap();
        assert!(doc.is_empty());
    }

    #[test]
    fn load_of_malformed_file_is_a_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{broken").unwrap();

        let error = SettingsDocument::load(&path).unwrap_err();
        assert!(matches!(error, AppError::SettingsParse { .. }));
    }

    #[test]
    fn load_of_non_object_file_is_a_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "[1, 2, 3]").unwrap();

        let error = SettingsDocument::load(&path).unwrap_err();
        assert!(matches!(error, AppError::SettingsParse { .. }));
    }

    #[test]
    fn merge_overrides_named_keys_and_keeps_the_rest() {
        let mut doc = document(json!({
            "workbench.colorCustomizations": {"foo": "bar", "keep": "me"}
        }));
        doc.apply_theme(&theme(json!({"foo": "baz"}), Some("#000000")));

        let customizations = doc.color_customizations().unwrap();
        assert_eq!(customizations.get("foo"), Some(&json!("baz")));
        assert_eq!(customizations.get("keep"), Some(&json!("me")));
        assert_eq!(doc.accent_color(), Some("#000000"));
    }

    #[test]
    fn merge_creates_customizations_object_when_absent() {
        let mut doc = SettingsDocument::default();
        doc.apply_theme(&theme(json!({}), None));
        assert_eq!(doc.color_customizations(), Some(&Map::new()));
    }

    #[test]
    fn merge_replaces_non_object_customizations_value() {
        let mut doc = document(json!({"workbench.colorCustomizations": 42}));
        doc.apply_theme(&theme(json!({"foo": "bar"}), None));

        let customizations = doc.color_customizations().unwrap();
        assert_eq!(customizations.get("foo"), Some(&json!("bar")));
        assert_eq!(customizations.len(), 1);
    }

    #[test]
    fn accent_is_replaced_unconditionally() {
        let mut doc = document(json!({"peacock.color": "#ffffff"}));
        doc.apply_theme(&theme(json!({}), Some("#123456")));
        assert_eq!(doc.accent_color(), Some("#123456"));
    }

    #[test]
    fn theme_without_accent_removes_the_key() {
        let mut doc = document(json!({"peacock.color": "#ffffff", "editor.fontSize": 14}));
        doc.apply_theme(&theme(json!({}), None));

        assert_none!(doc.accent_color());
        assert_none!(doc.get(ACCENT_COLOR_KEY));
        assert_eq!(doc.get("editor.fontSize"), Some(&json!(14)));
    }

    #[test]
    fn unrelated_keys_keep_their_values_and_positions() {
        let mut doc = document(json!({
            "editor.fontSize": 14,
            "workbench.colorCustomizations": {"foo": "bar"},
            "files.autoSave": "on"
        }));
        doc.apply_theme(&theme(json!({"foo": "baz"}), Some("#000000")));

        assert_eq!(doc.get("editor.fontSize"), Some(&json!(14)));
        assert_eq!(doc.get("files.autoSave"), Some(&json!("on")));
        assert_eq!(
            doc.keys().collect::<Vec<_>>(),
            vec![
                "editor.fontSize",
                "workbench.colorCustomizations",
                "files.autoSave",
                "peacock.color",
            ]
        );
    }

    #[test]
    fn save_writes_four_space_indented_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");

        let mut doc = SettingsDocument::default();
        doc.apply_theme(&theme(
            json!({"titleBar.activeBackground": "#123456"}),
            Some("#123456"),
        ));
        assert_ok!(doc.save(&path));

        let written = fs::read_to_string(&path).unwrap();
        let expected = concat!(
            "{\n",
            "    \"workbench.colorCustomizations\": {\n",
            "        \"titleBar.activeBackground\": \"#123456\"\n",
            "    },\n",
            "    \"peacock.color\": \"#123456\"\n",
            "}"
        );
        assert_eq!(written, expected);
    }

    #[test]
    fn save_does_not_create_missing_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".vscode").join("settings.json");

        let error = SettingsDocument::default().save(&path).unwrap_err();
        assert!(matches!(error, AppError::SettingsWrite { .. }));
    }

    #[test]
    fn save_and_load_round_trip_preserves_order() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");

        let doc = document(json!({"zeta": 1, "alpha": 2, "mid": {"b": 1, "a": 2}}));
        doc.save(&path).unwrap();

        let reloaded = SettingsDocument::load(&path).unwrap();
        assert_eq!(reloaded, doc);
        assert_eq!(reloaded.keys().collect::<Vec<_>>(), vec!["zeta", "alpha", "mid"]);
    }
}
