use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use session_core::DemoAccounts;
use thiserror::Error;

pub const CONFIG_FILE_NAME: &str = "medcases.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub demo_doctor_name: String,
    pub demo_student_name: String,
    pub log_filter: Option<String>,
    pub window_title: String,
}

impl Default for Settings {
    fn default() -> Self {
        let demo = DemoAccounts::default();
        Self {
            demo_doctor_name: demo.doctor_name,
            demo_student_name: demo.student_name,
            log_filter: None,
            window_title: "MedCases".into(),
        }
    }
}

impl Settings {
    pub fn demo_accounts(&self) -> DemoAccounts {
        DemoAccounts {
            doctor_name: self.demo_doctor_name.clone(),
            student_name: self.demo_student_name.clone(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config file '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// An explicit path always wins; otherwise the first existing file of
/// `./medcases.toml` and `<config_dir>/medcases/medcases.toml`.
pub fn resolve_config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }

    let local = PathBuf::from(CONFIG_FILE_NAME);
    if local.is_file() {
        return Some(local);
    }

    dirs::config_dir()
        .map(|dir| dir.join("medcases").join(CONFIG_FILE_NAME))
        .filter(|path| path.is_file())
}

pub fn load_settings(path: Option<&Path>) -> Result<Settings, ConfigError> {
    let mut settings = match path {
        Some(path) => load_file(path)?,
        None => Settings::default(),
    };
    apply_env_overrides(&mut settings, |name| std::env::var(name).ok());
    Ok(settings)
}

fn load_file(path: &Path) -> Result<Settings, ConfigError> {
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str::<Settings>(&raw).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

pub(crate) fn apply_env_overrides(
    settings: &mut Settings,
    lookup: impl Fn(&str) -> Option<String>,
) {
    if let Some(v) = non_empty(lookup("APP__DEMO_DOCTOR_NAME")) {
        settings.demo_doctor_name = v;
    }
    if let Some(v) = non_empty(lookup("APP__DEMO_STUDENT_NAME")) {
        settings.demo_student_name = v;
    }
    if let Some(v) = non_empty(lookup("APP__LOG_FILTER")) {
        settings.log_filter = Some(v);
    }
    if let Some(v) = non_empty(lookup("APP__WINDOW_TITLE")) {
        settings.window_title = v;
    }
}

#[cfg(test)]
mod tests {
    use std::{collections::HashMap, io::Write};

    use super::*;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(contents.as_bytes()).expect("write config");
        file
    }

    #[test]
    fn defaults_use_demo_accounts() {
        let settings = Settings::default();
        assert_eq!(settings.demo_accounts(), DemoAccounts::default());
        assert_eq!(settings.log_filter, None);
    }

    #[test]
    fn partial_file_keeps_defaults_for_missing_keys() {
        let file = write_config("demo_doctor_name = \"Dr. Gregory House\"\n");
        let settings = load_file(file.path()).expect("load");
        assert_eq!(settings.demo_doctor_name, "Dr. Gregory House");
        assert_eq!(settings.demo_student_name, Settings::default().demo_student_name);
        assert_eq!(settings.window_title, "MedCases");
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let file = write_config("demo_doctor_name = [");
        let err = load_file(file.path()).expect_err("should fail");
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn missing_explicit_file_is_a_read_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let err = load_settings(Some(&dir.path().join("absent.toml"))).expect_err("should fail");
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn env_overrides_ignore_blank_values() {
        let env: HashMap<&str, &str> = HashMap::from([
            ("APP__DEMO_STUDENT_NAME", "Jamie Park"),
            ("APP__DEMO_DOCTOR_NAME", "   "),
            ("APP__LOG_FILTER", "debug,eframe=warn"),
        ]);
        let mut settings = Settings::default();
        apply_env_overrides(&mut settings, |name| env.get(name).map(|v| v.to_string()));

        assert_eq!(settings.demo_student_name, "Jamie Park");
        assert_eq!(settings.demo_doctor_name, Settings::default().demo_doctor_name);
        assert_eq!(settings.log_filter.as_deref(), Some("debug,eframe=warn"));
    }

    #[test]
    fn explicit_path_is_returned_even_if_missing() {
        let path = Path::new("/nonexistent/medcases.toml");
        assert_eq!(resolve_config_path(Some(path)), Some(path.to_path_buf()));
    }
}
