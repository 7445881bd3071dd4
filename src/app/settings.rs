//! Persistent application settings.
//!
//! The backing file is a small sectioned TOML document so it stays
//! hand-editable:
//!
//! ```toml
//! [app_settings]
//! theme = "litera"
//! last_opened_file = "none"
//! ```
//!
//! Loading is self-healing: a missing file is created with defaults,
//! and any absent or unrecognized field is coerced back to its default
//! and the corrected record written out immediately.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use super::error::AppError;

/// File name kept generic on purpose so users can find and edit it.
pub const CONFIG_FILE: &str = "config.toml";

const SECTION: &str = "app_settings";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Litera,
    Darkly,
    Cyborg,
    Flatly,
    Journal,
}

impl Theme {
    pub fn all() -> &'static [Theme] {
        &[
            Theme::Litera,
            Theme::Darkly,
            Theme::Cyborg,
            Theme::Flatly,
            Theme::Journal,
        ]
    }

    pub fn name(self) -> &'static str {
        match self {
            Theme::Litera => "litera",
            Theme::Darkly => "darkly",
            Theme::Cyborg => "cyborg",
            Theme::Flatly => "flatly",
            Theme::Journal => "journal",
        }
    }

    pub fn from_name(name: &str) -> Option<Theme> {
        Theme::all().iter().copied().find(|t| t.name() == name)
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Theme::Darkly | Theme::Cyborg)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(default)]
    pub theme: Theme,

    #[serde(default, with = "none_marker")]
    pub last_opened_file: Option<String>,
}

/// `last_opened_file` is stored as the literal string "none" when no
/// file has been opened yet, so the key is always present in the file.
mod none_marker {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(v: &Option<String>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(v.as_deref().unwrap_or("none"))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
        let raw = String::deserialize(d)?;
        if raw.is_empty() || raw.eq_ignore_ascii_case("none") {
            Ok(None)
        } else {
            Ok(Some(raw))
        }
    }
}

/// On-disk layout: everything lives under one named section.
#[derive(Debug, Default, Serialize, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    app_settings: AppSettings,
}

/// Parse the config contents field by field. Returns the settings plus
/// whether any field had to be coerced back to its default (including
/// an unparseable file, which coerces wholesale).
fn parse_lenient(contents: &str) -> (AppSettings, bool) {
    let value: toml::Value = match contents.parse() {
        Ok(v) => v,
        Err(_) => return (AppSettings::default(), true),
    };

    let mut settings = AppSettings::default();
    let Some(section) = value.get(SECTION) else {
        return (settings, true);
    };
    let mut corrected = false;

    match section
        .get("theme")
        .and_then(|v| v.as_str())
        .and_then(Theme::from_name)
    {
        Some(theme) => settings.theme = theme,
        None => corrected = true,
    }

    match section.get("last_opened_file").and_then(|v| v.as_str()) {
        Some(raw) => {
            if !raw.is_empty() && !raw.eq_ignore_ascii_case("none") {
                settings.last_opened_file = Some(raw.to_string());
            }
        }
        None => corrected = true,
    }

    (settings, corrected)
}

/// Owns the config path and the in-memory settings record. Every
/// mutation saves synchronously; there is no dirty-flag deferral.
pub struct SettingsStore {
    path: PathBuf,
    settings: AppSettings,
}

impl SettingsStore {
    /// Config file path (cross-platform): config_dir/hexpad/config.toml
    pub fn default_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("hexpad");
        path.push(CONFIG_FILE);
        path
    }

    /// Load settings from `path`, creating the file (and any missing
    /// parent directory) with defaults if it does not exist. Invalid or
    /// missing fields are coerced to their defaults and the corrected
    /// record is written back before returning.
    pub fn load(path: PathBuf) -> Result<Self, AppError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        match fs::read_to_string(&path) {
            Ok(contents) => {
                let (settings, corrected) = parse_lenient(&contents);
                let store = Self { path, settings };
                if corrected {
                    store.save()?;
                }
                Ok(store)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let store = Self {
                    path,
                    settings: AppSettings::default(),
                };
                store.save()?;
                Ok(store)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// In-memory store with default settings, for when the config file
    /// exists but cannot be read. Saves will still be attempted.
    pub fn with_defaults(path: PathBuf) -> Self {
        Self {
            path,
            settings: AppSettings::default(),
        }
    }

    pub fn settings(&self) -> &AppSettings {
        &self.settings
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Overwrite the backing file with the full current record. Writes
    /// to a sibling temp file and renames it over the target, so an
    /// interrupted write never leaves a truncated config behind.
    pub fn save(&self) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let doc = toml::to_string_pretty(&ConfigFile {
            app_settings: self.settings.clone(),
        })?;

        let tmp = self.path.with_extension("toml.tmp");
        fs::write(&tmp, doc)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    pub fn set_theme(&mut self, theme: Theme) -> Result<(), AppError> {
        self.settings.theme = theme;
        self.save()
    }

    pub fn set_last_opened_file(&mut self, path: &str) -> Result<(), AppError> {
        self.settings.last_opened_file = Some(path.to_string());
        self.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn config_path(dir: &tempfile::TempDir) -> PathBuf {
        dir.path().join("hexpad").join(CONFIG_FILE)
    }

    #[test]
    fn test_theme_names_round_trip() {
        for theme in Theme::all() {
            assert_eq!(Theme::from_name(theme.name()), Some(*theme));
        }
        assert_eq!(Theme::from_name("bogus"), None);
    }

    #[test]
    fn test_theme_default_and_darkness() {
        assert_eq!(Theme::default(), Theme::Litera);
        assert!(Theme::Darkly.is_dark());
        assert!(Theme::Cyborg.is_dark());
        assert!(!Theme::Litera.is_dark());
        assert!(!Theme::Flatly.is_dark());
        assert!(!Theme::Journal.is_dark());
    }

    #[test]
    fn test_default_settings() {
        let settings = AppSettings::default();
        assert_eq!(settings.theme, Theme::Litera);
        assert_eq!(settings.last_opened_file, None);
    }

    #[test]
    fn test_none_marker_serialization() {
        let doc = toml::to_string_pretty(&ConfigFile::default()).unwrap();
        assert!(doc.contains("[app_settings]"));
        assert!(doc.contains("theme = \"litera\""));
        assert!(doc.contains("last_opened_file = \"none\""));

        let parsed: ConfigFile = toml::from_str(&doc).unwrap();
        assert_eq!(parsed.app_settings.last_opened_file, None);
    }

    #[test]
    fn test_load_missing_file_creates_defaults() {
        let dir = tempdir().unwrap();
        let path = config_path(&dir);

        let store = SettingsStore::load(path.clone()).unwrap();
        assert_eq!(store.settings().theme, Theme::Litera);
        assert_eq!(store.settings().last_opened_file, None);

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("theme = \"litera\""));
        assert!(written.contains("last_opened_file = \"none\""));
    }

    #[test]
    fn test_load_coerces_bogus_theme_and_persists() {
        let dir = tempdir().unwrap();
        let path = config_path(&dir);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(
            &path,
            "[app_settings]\ntheme = \"bogus\"\nlast_opened_file = \"none\"\n",
        )
        .unwrap();

        let store = SettingsStore::load(path.clone()).unwrap();
        assert_eq!(store.settings().theme, Theme::Litera);

        // write-back: the corrected record replaced the bad one
        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("theme = \"litera\""));
        assert!(!written.contains("bogus"));
    }

    #[test]
    fn test_load_coerces_garbage_file() {
        let dir = tempdir().unwrap();
        let path = config_path(&dir);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "not a config {{{").unwrap();

        let store = SettingsStore::load(path.clone()).unwrap();
        assert_eq!(store.settings(), &AppSettings::default());

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("[app_settings]"));
    }

    #[test]
    fn test_set_theme_survives_restart() {
        let dir = tempdir().unwrap();
        let path = config_path(&dir);

        let mut store = SettingsStore::load(path.clone()).unwrap();
        store.set_theme(Theme::Darkly).unwrap();
        drop(store);

        let reloaded = SettingsStore::load(path).unwrap();
        assert_eq!(reloaded.settings().theme, Theme::Darkly);
    }

    #[test]
    fn test_last_opened_file_survives_restart() {
        let dir = tempdir().unwrap();
        let path = config_path(&dir);

        let mut store = SettingsStore::load(path.clone()).unwrap();
        store.set_last_opened_file("/home/user/notes.txt").unwrap();
        drop(store);

        let reloaded = SettingsStore::load(path).unwrap();
        assert_eq!(
            reloaded.settings().last_opened_file.as_deref(),
            Some("/home/user/notes.txt")
        );
    }

    #[test]
    fn test_valid_file_needs_no_correction() {
        let (settings, corrected) = parse_lenient(
            "[app_settings]\ntheme = \"cyborg\"\nlast_opened_file = \"/tmp/a.txt\"\n",
        );
        assert!(!corrected);
        assert_eq!(settings.theme, Theme::Cyborg);
        assert_eq!(settings.last_opened_file.as_deref(), Some("/tmp/a.txt"));
    }

    #[test]
    fn test_missing_field_is_corrected() {
        let (settings, corrected) = parse_lenient("[app_settings]\ntheme = \"flatly\"\n");
        assert!(corrected);
        assert_eq!(settings.theme, Theme::Flatly);
        assert_eq!(settings.last_opened_file, None);
    }

    #[test]
    fn test_missing_section_is_corrected() {
        let (settings, corrected) = parse_lenient("");
        assert!(corrected);
        assert_eq!(settings, AppSettings::default());
    }

    #[test]
    fn test_save_leaves_no_temp_file() {
        let dir = tempdir().unwrap();
        let path = config_path(&dir);

        let store = SettingsStore::load(path.clone()).unwrap();
        store.save().unwrap();

        assert!(path.exists());
        assert!(!path.with_extension("toml.tmp").exists());
    }
}
