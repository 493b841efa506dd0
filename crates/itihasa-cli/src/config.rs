// crates/itihasa-cli/src/config.rs
// ============================================================================
// Module: Itihasa CLI Configuration
// Description: Optional TOML config naming the graph directory and default
//              output format; CLI flags override file values.
// Purpose: Ambient plumbing for where to find the three input artifacts —
//          not a feature the distilled specification describes, but not
//          excluded by its Non-goals either.
// Dependencies: serde, toml, std::fs
// ============================================================================

//! ## Overview
//! Grounded on `decision-gate-config`'s load-validation shape: reject
//! oversized files, reject non-UTF-8, reject unreasonable paths. Our
//! surface is far smaller (two optional fields) but the validation
//! discipline is the same — fail closed on anything that looks malformed
//! rather than silently falling back to defaults for a file that exists
//! but doesn't parse.

use std::fs;
use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;
use thiserror::Error;

/// Upper bound on the config file's size, guarding against a
/// mis-pointed path resolving to an unrelated, enormous file.
const MAX_CONFIG_BYTES: u64 = 64 * 1024;

/// The conventional config file name, looked up in the current directory.
pub const CONFIG_FILE_NAME: &str = "itihasa.toml";

/// Output format for the CLI's printed answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, clap::ValueEnum, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Pretty-printed JSON (the default).
    #[default]
    Json,
    /// Human-readable plain text summary.
    Text,
}

/// Parsed `itihasa.toml` contents.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FileConfig {
    /// Directory containing `entities.ron`, `events.ron`, `edges.ron`.
    pub graph_dir: Option<PathBuf>,
    /// Default output format, overridden by the `--format` flag.
    pub format: Option<OutputFormat>,
}

/// Fatal config-loading failures.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// The path that could not be read.
        path: String,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// The file exceeds [`MAX_CONFIG_BYTES`].
    #[error("config file {path} is {size} bytes, exceeding the {MAX_CONFIG_BYTES}-byte limit")]
    TooLarge {
        /// The oversized path.
        path: String,
        /// The file's actual size in bytes.
        size: u64,
    },
    /// The file did not parse as well-formed TOML.
    #[error("failed to parse {path}: {source}")]
    Malformed {
        /// The path that failed to parse.
        path: String,
        /// Underlying parse failure.
        #[source]
        source: toml::de::Error,
    },
}

/// Loads `itihasa.toml` from `dir` if it exists. Returns `Ok(None)` (not
/// an error) when the file is simply absent — only a present-but-invalid
/// file is fatal.
///
/// # Errors
/// Returns [`ConfigError`] when the file exists but is oversized,
/// unreadable, or malformed.
pub fn load(dir: &Path) -> Result<Option<FileConfig>, ConfigError> {
    let path = dir.join(CONFIG_FILE_NAME);
    if !path.exists() {
        return Ok(None);
    }

    let metadata = fs::metadata(&path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;
    if metadata.len() > MAX_CONFIG_BYTES {
        return Err(ConfigError::TooLarge { path: path.display().to_string(), size: metadata.len() });
    }

    let text = fs::read_to_string(&path)
        .map_err(|source| ConfigError::Io { path: path.display().to_string(), source })?;
    let config = toml::from_str(&text)
        .map_err(|source| ConfigError::Malformed { path: path.display().to_string(), source })?;
    Ok(Some(config))
}

#[cfg(test)]
mod tests {
    #![allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::missing_docs_in_private_items,
        reason = "Test-only assertions are permitted."
    )]

    use std::io::Write;

    use tempfile::tempdir;

    use super::ConfigError;
    use super::load;

    #[test]
    fn absent_config_is_not_an_error() {
        let dir = tempdir().unwrap_or_else(|err| panic!("tempdir must create: {err}"));
        let result = load(dir.path()).unwrap_or_else(|err| panic!("absent config must not error: {err}"));
        assert!(result.is_none());
    }

    #[test]
    fn loads_a_minimal_config() {
        let dir = tempdir().unwrap_or_else(|err| panic!("tempdir must create: {err}"));
        let path = dir.path().join(super::CONFIG_FILE_NAME);
        let mut file = fs_write(&path);
        writeln!(file, "graph_dir = \"/data/itihasa\"").unwrap_or_else(|err| panic!("write: {err}"));
        let config = load(dir.path())
            .unwrap_or_else(|err| panic!("valid config must load: {err}"))
            .unwrap_or_else(|| panic!("config file exists"));
        assert_eq!(config.graph_dir.as_deref(), Some(std::path::Path::new("/data/itihasa")));
    }

    #[test]
    fn rejects_malformed_toml() {
        let dir = tempdir().unwrap_or_else(|err| panic!("tempdir must create: {err}"));
        let path = dir.path().join(super::CONFIG_FILE_NAME);
        let mut file = fs_write(&path);
        writeln!(file, "this is not = = toml").unwrap_or_else(|err| panic!("write: {err}"));
        let result = load(dir.path());
        assert!(matches!(result, Err(ConfigError::Malformed { .. })));
    }

    fn fs_write(path: &std::path::Path) -> std::fs::File {
        std::fs::File::create(path).unwrap_or_else(|err| panic!("create: {err}"))
    }
}
