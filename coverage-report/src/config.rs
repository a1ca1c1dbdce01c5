//! Run configuration.

use std::path::{Path, PathBuf};

use crate::ranking::ColorScale;

/// Errors found while validating a configuration before a run.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A required input directory does not exist
    #[error("{kind} directory not found: {}", path.display())]
    MissingDirectory { kind: &'static str, path: PathBuf },
}

/// Where inputs are read from and reports are written to, and how
/// percentages are colored.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Directory holding `systems/`, `regions/`, `counties/` and lookups.
    pub data_dir: PathBuf,

    /// Directory holding one `*.list` file per traveler.
    pub lists_dir: PathBuf,

    /// Directory reports are written into.
    pub output_dir: PathBuf,

    /// Scale for system, region and leaderboard percentages.
    pub completion_scale: ColorScale,

    /// Scale for county percentages.
    pub county_scale: ColorScale,
}

impl ReportConfig {
    /// Create a configuration with the default color scales.
    pub fn new(
        data_dir: impl Into<PathBuf>,
        lists_dir: impl Into<PathBuf>,
        output_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            data_dir: data_dir.into(),
            lists_dir: lists_dir.into(),
            output_dir: output_dir.into(),
            completion_scale: ColorScale::completion(),
            county_scale: ColorScale::county(),
        }
    }

    /// Set a custom completion scale.
    pub fn with_completion_scale(mut self, scale: ColorScale) -> Self {
        self.completion_scale = scale;
        self
    }

    /// Set a custom county scale.
    pub fn with_county_scale(mut self, scale: ColorScale) -> Self {
        self.county_scale = scale;
        self
    }

    pub fn systems_dir(&self) -> PathBuf {
        self.data_dir.join("systems")
    }

    pub fn regions_dir(&self) -> PathBuf {
        self.data_dir.join("regions")
    }

    pub fn counties_dir(&self) -> PathBuf {
        self.data_dir.join("counties")
    }

    pub fn system_names_path(&self) -> PathBuf {
        self.data_dir.join("system_names.csv")
    }

    pub fn system_tiers_path(&self) -> PathBuf {
        self.data_dir.join("system_tiers.csv")
    }

    pub fn region_names_path(&self) -> PathBuf {
        self.data_dir.join("region_names.csv")
    }

    /// Check that every required input directory exists.
    ///
    /// The output directory is created on write and is not checked.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_dir("data", &self.data_dir)?;
        require_dir("systems", &self.systems_dir())?;
        require_dir("lists", &self.lists_dir)?;
        Ok(())
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self::new("data", "lists", "outputs")
    }
}

fn require_dir(kind: &'static str, path: &Path) -> Result<(), ConfigError> {
    if path.is_dir() {
        Ok(())
    } else {
        Err(ConfigError::MissingDirectory {
            kind,
            path: path.to_path_buf(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn default_config() {
        let config = ReportConfig::default();

        assert_eq!(config.data_dir, PathBuf::from("data"));
        assert_eq!(config.lists_dir, PathBuf::from("lists"));
        assert_eq!(config.output_dir, PathBuf::from("outputs"));
        assert_eq!(config.systems_dir(), PathBuf::from("data/systems"));
        assert_eq!(config.region_names_path(), PathBuf::from("data/region_names.csv"));
        assert_eq!(config.completion_scale, ColorScale::completion());
        assert_eq!(config.county_scale, ColorScale::county());
    }

    #[test]
    fn custom_scales() {
        let scale = ColorScale::new(200.0, 50, 60).unwrap();
        let config = ReportConfig::default()
            .with_completion_scale(scale)
            .with_county_scale(scale);

        assert_eq!(config.completion_scale, scale);
        assert_eq!(config.county_scale, scale);
    }

    #[test]
    fn validate_requires_input_directories() {
        let dir = tempdir().unwrap();
        let data = dir.path().join("data");
        let lists = dir.path().join("lists");
        let config = ReportConfig::new(&data, &lists, dir.path().join("out"));

        let err = config.validate().unwrap_err();
        assert!(err.to_string().starts_with("data directory not found"));

        std::fs::create_dir_all(data.join("systems")).unwrap();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().starts_with("lists directory not found"));

        std::fs::create_dir_all(&lists).unwrap();
        assert!(config.validate().is_ok());
    }
}
