//! Error types for settings persistence.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading or writing a settings document.
///
/// Note that loading parameters *from* a parsed document never fails:
/// missing keys fall back to defaults, out-of-range values are clamped, and
/// mismatched types are treated as missing. Only the file and TOML layers
/// can surface real errors.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// Failed to read a file
    #[error("failed to read file '{path}': {source}")]
    ReadFile {
        /// Path of the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to write a file
    #[error("failed to write file '{path}': {source}")]
    WriteFile {
        /// Path of the file that could not be written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to create directory
    #[error("failed to create directory '{path}': {source}")]
    CreateDir {
        /// Path of the directory that could not be created.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse TOML
    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Failed to serialize TOML
    #[error("failed to serialize TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl SettingsError {
    /// Create a read file error.
    pub fn read_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SettingsError::ReadFile {
            path: path.into(),
            source,
        }
    }

    /// Create a write file error.
    pub fn write_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SettingsError::WriteFile {
            path: path.into(),
            source,
        }
    }

    /// Create a create directory error.
    pub fn create_dir(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SettingsError::CreateDir {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    fn mock_io_err() -> std::io::Error {
        std::io::Error::new(std::io::ErrorKind::NotFound, "mock")
    }

    #[test]
    fn read_file_factory_produces_correct_variant() {
        let err = SettingsError::read_file("/some/path", mock_io_err());
        assert!(
            matches!(err, SettingsError::ReadFile { ref path, .. } if path == std::path::Path::new("/some/path"))
        );
    }

    #[test]
    fn write_file_factory_produces_correct_variant() {
        let err = SettingsError::write_file("/out/path", mock_io_err());
        assert!(
            matches!(err, SettingsError::WriteFile { ref path, .. } if path == std::path::Path::new("/out/path"))
        );
    }

    #[test]
    fn read_file_display_mentions_path() {
        let err = SettingsError::read_file("/a/b.toml", mock_io_err());
        let msg = err.to_string();
        assert!(msg.contains("failed to read file"), "got: {msg}");
        assert!(msg.contains("/a/b.toml"), "got: {msg}");
    }

    #[test]
    fn io_wrapping_variants_expose_source() {
        assert!(
            SettingsError::read_file("/x", mock_io_err())
                .source()
                .is_some()
        );
        assert!(
            SettingsError::write_file("/x", mock_io_err())
                .source()
                .is_some()
        );
        assert!(
            SettingsError::create_dir("/x", mock_io_err())
                .source()
                .is_some()
        );
    }

    #[test]
    fn toml_parse_error_converts() {
        let err: SettingsError = toml::from_str::<toml::Table>("not = = toml")
            .unwrap_err()
            .into();
        assert!(matches!(err, SettingsError::TomlParse(_)));
    }
}
