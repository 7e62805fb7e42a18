//! Batch description loading and validation.
//!
//! A batch description names one logical change (files, commit message,
//! pull request text, head branch) and the repositories it is applied to.
//! Descriptions are YAML by default; files ending in `.toml` are read as TOML.

mod change_spec;
mod error;
mod file_mapping;

pub use change_spec::{ChangeSpec, Destination};
pub use error::{ConfigError, ValidationError};
pub use file_mapping::{EmptyFileMapping, FileMapping};

use std::path::Path;
use tracing::{debug, info};

/// Loads a batch description from disk.
///
/// The description is parsed but not validated; see [`ChangeSpec::validate`].
///
/// # Errors
///
/// Returns [`ConfigError`] if the file can't be read or parsed.
pub fn load_change_spec(path: &Path) -> Result<ChangeSpec, ConfigError> {
    info!(path = %path.display(), "Loading batch description");

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError {
        path: path.display().to_string(),
        source: e,
    })?;

    let spec = if is_toml(path) {
        toml::from_str(&content).map_err(|e| ConfigError::TomlError {
            path: path.display().to_string(),
            source: e,
        })?
    } else {
        serde_yaml::from_str(&content).map_err(|e| ConfigError::YamlError {
            path: path.display().to_string(),
            source: e,
        })?
    };

    debug!(?spec, "Parsed batch description");
    Ok(spec)
}

fn is_toml(path: &Path) -> bool {
    path.extension()
        .is_some_and(|extension| extension.eq_ignore_ascii_case("toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn loads_yaml_description() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.yml");
        fs::write(
            &path,
            r#"
commit_message: "Automatic Large Scale Change"
subject: "Update README"
body: "Rolled out by batch-pr"
head: feature/large-scale-change
files:
  - README.md
  - main.go:examples/commitpr/main.go
destinations:
  - repository: acme/r1
    base: main
  - repository: acme/r2
    base: develop
"#,
        )
        .unwrap();

        let spec = load_change_spec(&path).unwrap();

        assert_eq!(spec.head, "feature/large-scale-change");
        assert_eq!(spec.destinations.len(), 2);
        assert_eq!(spec.destinations[1], Destination::new("acme/r2", "develop"));
        assert_eq!(
            spec.files[1],
            FileMapping::new("main.go", "examples/commitpr/main.go")
        );
        assert_eq!(spec.validate(), Ok(()));
    }

    #[test]
    fn loads_toml_description() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("batch.toml");
        fs::write(
            &path,
            r#"
commit_message = "Bump CI"
subject = "Bump CI"
head = "chore/ci"
owner = "acme"
files = ["ci.yml:.github/workflows/ci.yml"]

[[destinations]]
repository = "r1"
base = "main"
"#,
        )
        .unwrap();

        let spec = load_change_spec(&path).unwrap();

        assert_eq!(spec.owner.as_deref(), Some("acme"));
        assert_eq!(spec.files[0].target, ".github/workflows/ci.yml");
        assert_eq!(spec.validate(), Ok(()));
    }

    #[test]
    fn missing_file_is_io_error() {
        let temp = TempDir::new().unwrap();
        let result = load_change_spec(&temp.path().join("missing.yml"));
        assert!(matches!(result, Err(ConfigError::IoError { .. })));
    }

    #[test]
    fn empty_file_entry_is_parse_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.yml");
        fs::write(&path, "head: x\nfiles:\n  - \"\"\n").unwrap();

        let result = load_change_spec(&path);
        assert!(matches!(result, Err(ConfigError::YamlError { .. })));
    }
}
