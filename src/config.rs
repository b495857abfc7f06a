// Configuration loading and parsing (config/redraft.toml).

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("failed to parse config file {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("validation error for field `{field}`: {message}")]
    ValidationError { field: String, message: String },

    #[error("failed to initialize config from defaults: {message}")]
    DefaultsCopyError { message: String },
}

// ---------------------------------------------------------------------------
// redraft.toml structs
// ---------------------------------------------------------------------------

/// Raw deserialization target for the entire redraft.toml file.
#[derive(Debug, Clone, Deserialize)]
struct ConfigFile {
    data: DataSection,
    #[serde(default)]
    charts: ChartsConfig,
    #[serde(default)]
    beacon: BeaconConfig,
}

#[derive(Debug, Clone, Deserialize)]
struct DataSection {
    draft_csv: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChartsConfig {
    /// When true, zero-WSPS players get a (zero-length) bar in the WSPS
    /// chart; the default excludes them.
    #[serde(default)]
    pub include_zero_wsps_bars: bool,
}

impl Default for ChartsConfig {
    fn default() -> Self {
        ChartsConfig {
            include_zero_wsps_bars: false,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct BeaconConfig {
    /// Analytics property id. The beacon stays disabled while unset.
    pub tracking_id: Option<String>,
}

/// The assembled application config.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the draft dataset CSV, relative to the working directory.
    pub draft_csv: String,
    pub charts: ChartsConfig,
    pub beacon: BeaconConfig,
}

// ---------------------------------------------------------------------------
// Loading logic
// ---------------------------------------------------------------------------

/// Load and validate configuration from `config/redraft.toml` relative to
/// the given `base_dir`.
///
/// This is the lower-level loading primitive that does not auto-copy
/// defaults. Prefer `load_config()` which handles default initialization
/// automatically.
pub(crate) fn load_config_from(base_dir: &Path) -> Result<Config, ConfigError> {
    let config_path = base_dir.join("config").join("redraft.toml");
    let text = read_file(&config_path)?;
    let file: ConfigFile = toml::from_str(&text).map_err(|e| ConfigError::ParseError {
        path: config_path.clone(),
        source: e,
    })?;

    let config = Config {
        draft_csv: file.data.draft_csv,
        charts: file.charts,
        beacon: file.beacon,
    };

    validate(&config)?;

    Ok(config)
}

/// Ensure the config file exists by copying missing files from `defaults/`.
/// Returns the list of files that were copied. Skips `.example` files.
pub fn ensure_config_files(base_dir: &Path) -> Result<Vec<PathBuf>, ConfigError> {
    let defaults_dir = base_dir.join("defaults");
    let config_dir = base_dir.join("config");

    if !defaults_dir.exists() {
        if !config_dir.exists() {
            return Err(ConfigError::DefaultsCopyError {
                message: format!(
                    "neither defaults/ nor config/ directory found in {}; \
                     run from the project root or ensure defaults/ is present",
                    base_dir.display()
                ),
            });
        }
        return Ok(vec![]);
    }

    std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::DefaultsCopyError {
        message: format!("failed to create config directory: {e}"),
    })?;

    let mut copied = Vec::new();

    let entries = std::fs::read_dir(&defaults_dir).map_err(|e| ConfigError::DefaultsCopyError {
        message: format!("failed to read defaults directory: {e}"),
    })?;

    for entry in entries {
        let entry = entry.map_err(|e| ConfigError::DefaultsCopyError {
            message: format!("failed to read defaults entry: {e}"),
        })?;
        let path = entry.path();

        if !path.is_file() {
            continue;
        }
        let Some(file_name) = path.file_name() else {
            continue;
        };

        if file_name.to_str().is_some_and(|n| n.ends_with(".example")) {
            continue;
        }
        let target = config_dir.join(file_name);

        match std::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&target)
        {
            Ok(mut dest) => {
                let content = std::fs::read(&path).map_err(|e| ConfigError::DefaultsCopyError {
                    message: format!("failed to read {}: {e}", path.display()),
                })?;
                std::io::Write::write_all(&mut dest, &content).map_err(|e| {
                    ConfigError::DefaultsCopyError {
                        message: format!("failed to write {}: {e}", target.display()),
                    }
                })?;
                copied.push(target);
            }
            Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
                // File already exists in config/, skip it
            }
            Err(e) => {
                return Err(ConfigError::DefaultsCopyError {
                    message: format!("failed to create {}: {e}", target.display()),
                });
            }
        }
    }

    Ok(copied)
}

/// Convenience wrapper: loads config relative to the current working
/// directory, copying defaults first.
pub fn load_config() -> Result<Config, ConfigError> {
    let cwd = std::env::current_dir().map_err(|_| ConfigError::FileNotFound {
        path: PathBuf::from("."),
    })?;
    ensure_config_files(&cwd)?;
    load_config_from(&cwd)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn read_file(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
        path: path.to_path_buf(),
    })
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn validate(config: &Config) -> Result<(), ConfigError> {
    if config.draft_csv.trim().is_empty() {
        return Err(ConfigError::ValidationError {
            field: "data.draft_csv".into(),
            message: "must not be empty".into(),
        });
    }

    if let Some(tracking_id) = &config.beacon.tracking_id {
        if tracking_id.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                field: "beacon.tracking_id".into(),
                message: "must not be empty when set (omit the key to disable the beacon)".into(),
            });
        }
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const VALID_CONFIG: &str = r#"
[data]
draft_csv = "data/nba_draft_data.csv"

[charts]
include_zero_wsps_bars = false
"#;

    fn write_config(base: &Path, content: &str) {
        let config_dir = base.join("config");
        fs::create_dir_all(&config_dir).unwrap();
        fs::write(config_dir.join("redraft.toml"), content).unwrap();
    }

    fn temp_base(name: &str) -> PathBuf {
        let tmp = std::env::temp_dir().join(format!("redraftables_config_{name}"));
        let _ = fs::remove_dir_all(&tmp);
        fs::create_dir_all(&tmp).unwrap();
        tmp
    }

    #[test]
    fn load_valid_config() {
        let tmp = temp_base("valid");
        write_config(&tmp, VALID_CONFIG);

        let config = load_config_from(&tmp).expect("should load valid config");
        assert_eq!(config.draft_csv, "data/nba_draft_data.csv");
        assert!(!config.charts.include_zero_wsps_bars);
        assert!(config.beacon.tracking_id.is_none());

        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn charts_and_beacon_sections_optional() {
        let tmp = temp_base("optional_sections");
        write_config(&tmp, "[data]\ndraft_csv = \"data/x.csv\"\n");

        let config = load_config_from(&tmp).expect("should load without optional sections");
        assert!(!config.charts.include_zero_wsps_bars);
        assert!(config.beacon.tracking_id.is_none());

        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn beacon_tracking_id_parsed() {
        let tmp = temp_base("beacon");
        write_config(
            &tmp,
            "[data]\ndraft_csv = \"data/x.csv\"\n\n[beacon]\ntracking_id = \"UA-18433914-1\"\n",
        );

        let config = load_config_from(&tmp).unwrap();
        assert_eq!(config.beacon.tracking_id.as_deref(), Some("UA-18433914-1"));

        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn rejects_empty_draft_csv() {
        let tmp = temp_base("empty_csv_path");
        write_config(&tmp, "[data]\ndraft_csv = \"\"\n");

        let err = load_config_from(&tmp).unwrap_err();
        match &err {
            ConfigError::ValidationError { field, .. } => {
                assert_eq!(field, "data.draft_csv");
            }
            other => panic!("expected ValidationError, got: {other}"),
        }

        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn rejects_blank_tracking_id() {
        let tmp = temp_base("blank_tracking");
        write_config(
            &tmp,
            "[data]\ndraft_csv = \"data/x.csv\"\n\n[beacon]\ntracking_id = \"  \"\n",
        );

        let err = load_config_from(&tmp).unwrap_err();
        match &err {
            ConfigError::ValidationError { field, .. } => {
                assert_eq!(field, "beacon.tracking_id");
            }
            other => panic!("expected ValidationError, got: {other}"),
        }

        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn file_not_found_for_missing_config() {
        let tmp = temp_base("missing_config");
        fs::create_dir_all(tmp.join("config")).unwrap();

        let err = load_config_from(&tmp).unwrap_err();
        match &err {
            ConfigError::FileNotFound { path } => {
                assert!(path.ends_with("redraft.toml"));
            }
            other => panic!("expected FileNotFound, got: {other}"),
        }

        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn parse_error_for_invalid_toml() {
        let tmp = temp_base("invalid_toml");
        write_config(&tmp, "this is not valid [[[ toml");

        let err = load_config_from(&tmp).unwrap_err();
        match &err {
            ConfigError::ParseError { path, .. } => {
                assert!(path.ends_with("redraft.toml"));
            }
            other => panic!("expected ParseError, got: {other}"),
        }

        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn ensure_config_files_copies_missing_files() {
        let tmp = temp_base("ensure_copies");

        let defaults_dir = tmp.join("defaults");
        fs::create_dir_all(&defaults_dir).unwrap();
        fs::write(defaults_dir.join("redraft.toml"), VALID_CONFIG).unwrap();
        // Example files should NOT be copied
        fs::write(
            defaults_dir.join("redraft.toml.example"),
            "# template only\n",
        )
        .unwrap();

        assert!(!tmp.join("config").exists());

        let copied = ensure_config_files(&tmp).expect("should succeed");
        assert_eq!(copied.len(), 1);
        assert!(tmp.join("config/redraft.toml").exists());
        assert!(!tmp.join("config/redraft.toml.example").exists());

        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn ensure_config_files_skips_existing() {
        let tmp = temp_base("ensure_skips");

        let defaults_dir = tmp.join("defaults");
        fs::create_dir_all(&defaults_dir).unwrap();
        fs::write(defaults_dir.join("redraft.toml"), VALID_CONFIG).unwrap();

        write_config(&tmp, "# custom\n");

        let copied = ensure_config_files(&tmp).expect("should succeed");
        assert!(copied.is_empty());

        let content = fs::read_to_string(tmp.join("config/redraft.toml")).unwrap();
        assert_eq!(content, "# custom\n");

        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn ensure_config_files_no_defaults_dir_is_ok() {
        let tmp = temp_base("no_defaults");
        fs::create_dir_all(tmp.join("config")).unwrap();

        let copied = ensure_config_files(&tmp).expect("should succeed");
        assert!(copied.is_empty());

        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn ensure_config_files_errors_when_both_dirs_missing() {
        let tmp = temp_base("both_missing");

        let err = ensure_config_files(&tmp).unwrap_err();
        match &err {
            ConfigError::DefaultsCopyError { message } => {
                assert!(message.contains("neither defaults/ nor config/"));
            }
            other => panic!("expected DefaultsCopyError, got: {other}"),
        }

        let _ = fs::remove_dir_all(&tmp);
    }
}
