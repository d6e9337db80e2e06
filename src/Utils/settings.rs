//! TOML configuration: logging and display names of variables.
//!
//! ```toml
//! [logging]
//! level = "debug"      # off|error|warn|info|debug|trace
//! console = true
//! file = "ad.log"
//!
//! [variables]
//! 0 = "x"
//! 1 = "y"
//! ```
//! Every key is optional; missing ones keep their default.

use crate::Utils::logger::LoggerSettings;
use crate::symbolic::symbolic_to_string::NameTable;
use simplelog::LevelFilter;
use std::fmt;
use std::str::FromStr;
use toml::{Table, Value};

#[derive(Debug, Clone, PartialEq)]
pub enum SettingsError {
    /// the file could not be read
    Io(String),
    /// the text is not valid TOML
    Parse(String),
    /// a key or value has the wrong type or an unknown value
    InvalidValue { key: String, value: String },
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SettingsError::Io(msg) => write!(f, "Cannot read settings: {}", msg),
            SettingsError::Parse(msg) => write!(f, "Invalid settings file: {}", msg),
            SettingsError::InvalidValue { key, value } => {
                write!(f, "Invalid value for '{}': {}", key, value)
            }
        }
    }
}

impl std::error::Error for SettingsError {}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AdSettings {
    pub logging: LoggerSettings,
    pub variable_names: NameTable,
}

impl AdSettings {
    pub fn from_toml_str(input: &str) -> Result<Self, SettingsError> {
        let table = input
            .parse::<Table>()
            .map_err(|e| SettingsError::Parse(e.to_string()))?;
        let mut settings = AdSettings::default();

        if let Some(logging) = table.get("logging") {
            let logging = section(logging, "logging")?;
            settings.read_logging(logging)?;
        }
        if let Some(variables) = table.get("variables") {
            let variables = section(variables, "variables")?;
            settings.read_variables(variables)?;
        }
        Ok(settings)
    }

    pub fn from_file(path: &str) -> Result<Self, SettingsError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| SettingsError::Io(e.to_string()))?;
        Self::from_toml_str(&content)
    }

    fn read_logging(&mut self, logging: &Table) -> Result<(), SettingsError> {
        for (key, value) in logging {
            match (key.as_str(), value) {
                ("level", Value::String(level)) => {
                    let level = LevelFilter::from_str(level).map_err(|_| invalid("logging.level", value))?;
                    self.logging.set_log_level(level);
                }
                ("console", Value::Boolean(enabled)) => self.logging.set_console_logging(*enabled),
                ("file", Value::String(file)) => self.logging.set_log_file(file.clone()),
                _ => return Err(invalid(&format!("logging.{}", key), value)),
            }
        }
        Ok(())
    }

    fn read_variables(&mut self, variables: &Table) -> Result<(), SettingsError> {
        for (key, value) in variables {
            let index = key
                .parse::<usize>()
                .map_err(|_| invalid(&format!("variables.{}", key), value))?;
            match value {
                Value::String(name) => self.variable_names.insert(index, name),
                _ => return Err(invalid(&format!("variables.{}", key), value)),
            }
        }
        Ok(())
    }
}

fn section<'a>(value: &'a Value, key: &str) -> Result<&'a Table, SettingsError> {
    value.as_table().ok_or_else(|| invalid(key, value))
}

fn invalid(key: &str, value: &Value) -> SettingsError {
    SettingsError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbolic::symbolic_engine::{X0, X1};
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let settings = AdSettings::from_toml_str("").unwrap();
        assert_eq!(settings, AdSettings::default());
        assert_eq!(settings.logging.level, LevelFilter::Info);
        assert!(settings.logging.log_to_console);
        assert!(settings.variable_names.is_empty());
    }

    #[test]
    fn test_full_file() {
        let input = r#"
            [logging]
            level = "debug"
            console = false
            file = "ad.log"

            [variables]
            0 = "x"
            1 = "y"
        "#;
        let settings = AdSettings::from_toml_str(input).unwrap();
        assert_eq!(settings.logging.level, LevelFilter::Debug);
        assert!(!settings.logging.log_to_console);
        assert_eq!(settings.logging.log_to_file.as_deref(), Some("ad.log"));
        let f = X0 * X1;
        assert_eq!(f.to_string_with(&settings.variable_names), "x * y");
    }

    #[test]
    fn test_invalid_values() {
        let err = AdSettings::from_toml_str("[logging]\nlevel = \"loud\"").unwrap_err();
        assert!(matches!(err, SettingsError::InvalidValue { ref key, .. } if key == "logging.level"));
        let err = AdSettings::from_toml_str("[variables]\nfirst = \"x\"").unwrap_err();
        assert!(matches!(err, SettingsError::InvalidValue { ref key, .. } if key == "variables.first"));
        let err = AdSettings::from_toml_str("[variables]\n0 = 5").unwrap_err();
        assert!(matches!(err, SettingsError::InvalidValue { .. }));
        let err = AdSettings::from_toml_str("logging = 3").unwrap_err();
        assert!(matches!(err, SettingsError::InvalidValue { .. }));
    }

    #[test]
    fn test_parse_error() {
        let err = AdSettings::from_toml_str("[logging").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
        assert!(err.to_string().starts_with("Invalid settings file"));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[logging]\nlevel = \"warn\"\n[variables]\n2 = \"z\"").unwrap();
        let path = file.path().to_str().unwrap().to_string();
        let settings = AdSettings::from_file(&path).unwrap();
        assert_eq!(settings.logging.level, LevelFilter::Warn);
        assert_eq!(settings.variable_names.get(2), Some("z"));
    }

    #[test]
    fn test_missing_file() {
        let err = AdSettings::from_file("definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, SettingsError::Io(_)));
    }
}
