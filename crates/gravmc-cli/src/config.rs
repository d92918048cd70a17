use crate::error::{CliError, Result};
use gravmc::core::models::measurement::Measurement;
use gravmc::core::models::system::RedshiftSystem;
use gravmc::workflows::redshift::RedshiftTarget;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// Fallback sample count when neither the file nor the CLI supplies one.
pub const DEFAULT_SAMPLES: usize = 10_000;

#[derive(Deserialize, Debug, Clone, Copy)]
#[serde(deny_unknown_fields)]
pub struct FileMeasurement {
    pub value: f64,
    pub error: f64,
}

impl FileMeasurement {
    fn into_measurement(self, name: &str, target: &str) -> Result<Measurement> {
        Measurement::new(self.value, self.error).map_err(|e| {
            CliError::Config(format!("target '{target}', field '{name}': {e}"))
        })
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct FileTarget {
    pub name: String,
    #[serde(rename = "logg-primary")]
    pub logg_primary: FileMeasurement,
    #[serde(rename = "mass-primary")]
    pub mass_primary: FileMeasurement,
    #[serde(rename = "mass-companion")]
    pub mass_companion: FileMeasurement,
    #[serde(rename = "velocity-offset")]
    pub velocity_offset: FileMeasurement,
}

impl FileTarget {
    pub fn into_target(self) -> Result<RedshiftTarget> {
        let system = RedshiftSystem::new(
            self.logg_primary
                .into_measurement("logg-primary", &self.name)?,
            self.mass_primary
                .into_measurement("mass-primary", &self.name)?,
            self.mass_companion
                .into_measurement("mass-companion", &self.name)?,
            self.velocity_offset
                .into_measurement("velocity-offset", &self.name)?,
        );
        Ok(RedshiftTarget {
            name: self.name,
            system,
        })
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct TargetsFile {
    /// Monte-Carlo samples per target; the CLI flag takes precedence.
    pub samples: Option<usize>,
    /// Random seed; the CLI flag takes precedence.
    pub seed: Option<u64>,
    #[serde(rename = "target", default)]
    pub targets: Vec<FileTarget>,
}

impl TargetsFile {
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let file: TargetsFile = toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })?;
        debug!(targets = file.targets.len(), "Parsed target configuration");

        if file.targets.is_empty() {
            return Err(CliError::Config(format!(
                "'{}' defines no [[target]] entries",
                path.display()
            )));
        }
        Ok(file)
    }

    pub fn into_targets(self) -> Result<Vec<RedshiftTarget>> {
        self.targets
            .into_iter()
            .map(FileTarget::into_target)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const VALID: &str = r#"
samples = 5000
seed = 42

[[target]]
name = "HE0430-2457"
logg-primary = { value = 4.50, error = 0.40 }
mass-primary = { value = 0.73, error = 0.12 }
mass-companion = { value = 0.18, error = 0.05 }
velocity-offset = { value = 2.009, error = 0.25 }
"#;

    #[test]
    fn valid_file_parses_into_targets() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("targets.toml");
        fs::write(&path, VALID).unwrap();

        let file = TargetsFile::from_file(&path).unwrap();
        assert_eq!(file.samples, Some(5000));
        assert_eq!(file.seed, Some(42));

        let targets = file.into_targets().unwrap();
        assert_eq!(targets.len(), 1);
        assert_eq!(targets[0].name, "HE0430-2457");
        assert_eq!(targets[0].system.logg_primary.value(), 4.50);
        assert_eq!(targets[0].system.velocity_offset.sigma(), 0.25);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("targets.toml");
        fs::write(&path, format!("{VALID}\nbogus = 1\n")).unwrap();

        let result = TargetsFile::from_file(&path);
        assert!(matches!(result, Err(CliError::FileParsing { .. })));
    }

    #[test]
    fn empty_target_list_is_a_config_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("targets.toml");
        fs::write(&path, "samples = 1000\n").unwrap();

        let result = TargetsFile::from_file(&path);
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn negative_error_surfaces_as_a_config_error_with_context() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("targets.toml");
        fs::write(
            &path,
            r#"
[[target]]
name = "bad"
logg-primary = { value = 4.50, error = -0.40 }
mass-primary = { value = 0.73, error = 0.12 }
mass-companion = { value = 0.18, error = 0.05 }
velocity-offset = { value = 2.009, error = 0.25 }
"#,
        )
        .unwrap();

        let file = TargetsFile::from_file(&path).unwrap();
        match file.into_targets() {
            Err(CliError::Config(message)) => {
                assert!(message.contains("bad"));
                assert!(message.contains("logg-primary"));
            }
            other => panic!("expected Config error, got {other:?}"),
        }
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let result = TargetsFile::from_file(Path::new("/nonexistent/targets.toml"));
        assert!(matches!(result, Err(CliError::Io(_))));
    }
}
