use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use taqvim_convert::Calendar;
use taqvim_time::Locale;
use tracing::debug;

/// Config file read from the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "taqvim.toml";

/// Top-level taqvim configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TaqvimConfig {
    /// Calendars used when a command does not name one.
    #[serde(default)]
    pub defaults: DefaultsConfig,

    /// Output settings.
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DefaultsConfig {
    #[serde(default = "default_source")]
    pub source: Calendar,
    #[serde(default = "default_target")]
    pub target: Calendar,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            source: default_source(),
            target: default_target(),
        }
    }
}

fn default_source() -> Calendar {
    Calendar::Gregorian
}
fn default_target() -> Calendar {
    Calendar::Persian
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    #[serde(default)]
    pub locale: Locale,
    #[serde(default)]
    pub format: OutputFormat,
}

/// How results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

impl TaqvimConfig {
    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, [`DEFAULT_CONFIG_FILE`] is
    /// read if present and defaults are used otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path: PathBuf = match path {
            Some(p) => p.to_path_buf(),
            None => {
                let p = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !p.exists() {
                    debug!("no {DEFAULT_CONFIG_FILE} found, using defaults");
                    return Ok(Self::default());
                }
                p
            }
        };
        let toml_str = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        let config: Self = toml::from_str(&toml_str)
            .with_context(|| format!("failed to parse TOML config: {}", path.display()))?;
        debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    fn write_config(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn defaults_when_empty() {
        let config: TaqvimConfig = toml::from_str("").unwrap();
        assert_eq!(config.defaults.source, Calendar::Gregorian);
        assert_eq!(config.defaults.target, Calendar::Persian);
        assert_eq!(config.output.locale, Locale::En);
        assert_eq!(config.output.format, OutputFormat::Text);
    }

    #[test]
    fn full_file() {
        let file = write_config(
            r#"
[defaults]
source = "hijri"
target = "hebrew"

[output]
locale = "fa"
format = "json"
"#,
        );
        let config = TaqvimConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.defaults.source, Calendar::Islamic);
        assert_eq!(config.defaults.target, Calendar::Hebrew);
        assert_eq!(config.output.locale, Locale::Fa);
        assert_eq!(config.output.format, OutputFormat::Json);
    }

    #[test]
    fn partial_section_keeps_other_defaults() {
        let file = write_config("[defaults]\ntarget = \"julian\"\n");
        let config = TaqvimConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.defaults.source, Calendar::Gregorian);
        assert_eq!(config.defaults.target, Calendar::Julian);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let file = write_config("[defaults]\nsorce = \"julian\"\n");
        let err = TaqvimConfig::load(Some(file.path())).unwrap_err();
        assert!(format!("{err:#}").contains("failed to parse TOML config"));
    }

    #[test]
    fn unknown_calendar_is_rejected() {
        let file = write_config("[defaults]\nsource = \"coptic\"\n");
        assert!(TaqvimConfig::load(Some(file.path())).is_err());
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        let err = TaqvimConfig::load(Some(&missing)).unwrap_err();
        assert!(format!("{err:#}").contains("failed to read config file"));
    }
}
