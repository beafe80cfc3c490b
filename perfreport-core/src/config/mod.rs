//! Configuration types for perfreport

use crate::{ReportError, ReportResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Largest rounding scale accepted for averages
pub const MAX_PRECISION: u32 = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputConfig {
    /// Field separator of the input files
    #[serde(default = "default_delimiter")]
    pub delimiter: char,
    /// Strip surrounding whitespace from header names and values
    #[serde(default = "default_trim")]
    pub trim: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
    /// Number of fractional digits averages are rounded to
    #[serde(default = "default_precision")]
    pub precision: u32,
    #[serde(default)]
    pub style: TableStyle,
}

/// How a finished report is written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

/// Border preset for text tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TableStyle {
    #[default]
    Utf8,
    Ascii,
}

// Default value functions
fn default_delimiter() -> char { ',' }
fn default_trim() -> bool { true }
fn default_precision() -> u32 { 2 }

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
            trim: default_trim(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            precision: default_precision(),
            style: TableStyle::default(),
        }
    }
}

impl Config {
    /// Reject settings the loader or renderers cannot honor
    pub fn validate(&self) -> ReportResult<()> {
        self.delimiter_byte()?;
        if self.output.precision > MAX_PRECISION {
            return Err(ReportError::Configuration(format!(
                "precision must be at most {}, got {}",
                MAX_PRECISION, self.output.precision
            )));
        }
        Ok(())
    }

    /// Delimiter as the byte the CSV reader expects
    pub fn delimiter_byte(&self) -> ReportResult<u8> {
        let delimiter = self.input.delimiter;
        match u8::try_from(delimiter) {
            Ok(byte) if byte.is_ascii() && !matches!(byte, b'"' | b'\n' | b'\r') => Ok(byte),
            _ => Err(ReportError::Configuration(format!(
                "delimiter must be a single ASCII character other than '\"' or a line break, got {:?}",
                delimiter
            ))),
        }
    }
}

pub fn default_config() -> Config {
    Config::default()
}

pub fn load_config<P: AsRef<Path>>(path: P) -> ReportResult<Config> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ReportError::Configuration(format!("Config file not found: {}", path.display()))
        } else {
            ReportError::Io(e)
        }
    })?;
    let config: Config = toml::from_str(&contents)?;
    config.validate()?;
    Ok(config)
}

pub fn save_config<P: AsRef<Path>>(path: P, config: &Config) -> ReportResult<()> {
    let contents = toml::to_string_pretty(config)?;
    std::fs::write(path, contents)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.input.delimiter, ',');
        assert!(config.input.trim);

        assert_eq!(config.output.format, OutputFormat::Text);
        assert_eq!(config.output.precision, 2);
        assert_eq!(config.output.style, TableStyle::Utf8);

        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_partial_config() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[output]\nformat = \"json\"").unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.output.precision, 2); // Default
        assert_eq!(config.input.delimiter, ','); // Default
    }

    #[test]
    fn test_load_empty_config() {
        let file = NamedTempFile::new().unwrap();
        let config = load_config(file.path()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_invalid_toml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[input\ndelimiter = ").unwrap();

        let err = load_config(file.path()).unwrap_err();
        assert!(matches!(err, ReportError::Configuration(_)));
    }

    #[test]
    fn test_load_unknown_format() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[output]\nformat = \"xml\"").unwrap();

        assert!(load_config(file.path()).is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_config("/nonexistent/perfreport.toml").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/perfreport.toml"));
    }

    #[test]
    fn test_validate_rejects_non_ascii_delimiter() {
        let mut config = Config::default();
        config.input.delimiter = '；';
        assert!(config.validate().is_err());

        assert!(config.delimiter_byte().is_err());

        config.input.delimiter = 'é';
        assert!(config.delimiter_byte().is_err());

        config.input.delimiter = ';';
        assert!(config.validate().is_ok());
        assert_eq!(config.delimiter_byte().unwrap(), b';');
    }

    #[test]
    fn test_validate_rejects_line_breaks_and_quotes() {
        for delimiter in ['\n', '\r', '"'] {
            let mut config = Config::default();
            config.input.delimiter = delimiter;
            assert!(config.validate().is_err(), "accepted {:?}", delimiter);
        }

        let mut config = Config::default();
        config.input.delimiter = '\t';
        assert_eq!(config.delimiter_byte().unwrap(), b'\t');
    }

    #[test]
    fn test_validate_rejects_large_precision() {
        let mut config = Config::default();
        config.output.precision = MAX_PRECISION + 1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_save_and_reload() {
        let file = NamedTempFile::new().unwrap();
        let mut config = Config::default();
        config.input.delimiter = ';';
        config.output.format = OutputFormat::Csv;
        config.output.style = TableStyle::Ascii;

        save_config(file.path(), &config).unwrap();
        let loaded = load_config(file.path()).unwrap();
        assert_eq!(loaded, config);
    }
}
