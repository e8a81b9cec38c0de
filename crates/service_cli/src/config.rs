//! Configuration management.
//!
//! Loads `spectro.toml` with environment variable overrides. A missing file
//! yields the defaults.

use serde::{Deserialize, Serialize};
use spectro_core::interpolation::Method;
use spectro_core::math::solvers::HalvingSearch;
use spectro_core::types::SolverError;
use spectro_dosimetry::{UncertaintyConfig, ALUMINIUM_DENSITY};
use std::path::Path;
use thiserror::Error;

/// Interpolation defaults for the `interpolate` command
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct InterpolationSettings {
    /// Method used when `--method` is not given
    pub default_method: Method,
    /// Interpolate in log-log space unless told otherwise
    pub log_scale: bool,
}

impl Default for InterpolationSettings {
    fn default() -> Self {
        Self {
            default_method: Method::Akima1D,
            log_scale: false,
        }
    }
}

/// Half-value layer search settings
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct HvlSettings {
    /// Absorber density in g/cm³
    pub density: f64,
    /// First guess and first step in cm
    pub initial_thickness: f64,
    /// Smallest step in cm
    pub step_tolerance: f64,
    /// Accepted transmission error
    pub goal_tolerance: f64,
}

impl Default for HvlSettings {
    fn default() -> Self {
        let search = HalvingSearch::<f64>::default();
        Self {
            density: ALUMINIUM_DENSITY,
            initial_thickness: search.initial,
            step_tolerance: search.step_tolerance,
            goal_tolerance: search.goal_tolerance,
        }
    }
}

/// Monte Carlo settings for the `convert` command
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct UncertaintySettings {
    /// Number of samples
    pub samples: usize,
    /// Relative uncertainty of the energies
    pub u_energy: f64,
    /// Relative uncertainty of the fluences
    pub u_fluence: f64,
    /// Relative uncertainty of μtr/ρ
    pub u_mutr: f64,
    /// Base seed
    pub seed: u64,
}

impl Default for UncertaintySettings {
    fn default() -> Self {
        let defaults = UncertaintyConfig::default();
        Self {
            samples: defaults.samples,
            u_energy: defaults.u_energy,
            u_fluence: defaults.u_fluence,
            u_mutr: defaults.u_mutr,
            seed: defaults.seed,
        }
    }
}

/// Spectro configuration
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct SpectroConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Interpolation defaults
    #[serde(default)]
    pub interpolation: InterpolationSettings,

    /// Half-value layer settings
    #[serde(default)]
    pub hvl: HvlSettings,

    /// Monte Carlo settings
    #[serde(default)]
    pub uncertainty: UncertaintySettings,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for SpectroConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            interpolation: InterpolationSettings::default(),
            hvl: HvlSettings::default(),
            uncertainty: UncertaintySettings::default(),
        }
    }
}

impl SpectroConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load `path` if it exists, the defaults otherwise
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Apply environment variable overrides
    pub fn with_env_override(mut self) -> Self {
        if let Ok(log_level) = std::env::var("SPECTRO_LOG_LEVEL") {
            self.log_level = log_level;
        }

        if let Ok(samples) = std::env::var("SPECTRO_SAMPLES") {
            if let Ok(samples) = samples.parse() {
                self.uncertainty.samples = samples;
            }
        }

        if let Ok(seed) = std::env::var("SPECTRO_SEED") {
            if let Ok(seed) = seed.parse() {
                self.uncertainty.seed = seed;
            }
        }

        self
    }

    /// Validate the configuration, collecting every problem
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&self.log_level.to_lowercase().as_str()) {
            errors.push(format!(
                "Invalid log_level '{}'. Valid values: {:?}",
                self.log_level, valid_log_levels
            ));
        }

        if !(self.hvl.density > 0.0 && self.hvl.density.is_finite()) {
            errors.push(format!("hvl.density must be positive, got {}", self.hvl.density));
        }
        if let Err(e) = self.halving_search() {
            errors.push(format!("Invalid hvl search settings: {}", e));
        }

        if let Err(e) = self.uncertainty_config().validate() {
            errors.push(e.to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Default interpolation method
    pub fn default_method(&self) -> Method {
        self.interpolation.default_method
    }

    /// Layer search built from the `[hvl]` section
    pub fn halving_search(&self) -> Result<HalvingSearch<f64>, SolverError> {
        HalvingSearch::new(
            self.hvl.initial_thickness,
            self.hvl.step_tolerance,
            self.hvl.goal_tolerance,
        )
    }

    /// Monte Carlo settings from the `[uncertainty]` section
    pub fn uncertainty_config(&self) -> UncertaintyConfig {
        UncertaintyConfig {
            samples: self.uncertainty.samples,
            u_energy: self.uncertainty.u_energy,
            u_fluence: self.uncertainty.u_fluence,
            u_mutr: self.uncertainty.u_mutr,
            seed: self.uncertainty.seed,
        }
    }
}

/// Configuration error type
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    /// IO error reading config file
    #[error("IO error: {0}")]
    Io(String),
    /// Parse error in config file
    #[error("Parse error: {0}")]
    Parse(String),
    /// Validation error
    #[error("Validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = SpectroConfig::default();
        assert_eq!(config.log_level, "info");
        assert_eq!(config.interpolation.default_method, Method::Akima1D);
        assert_eq!(config.hvl.density, 2.699);
        assert_eq!(config.hvl.initial_thickness, 20.0);
        assert_eq!(config.uncertainty.samples, 100);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_override() {
        std::env::set_var("SPECTRO_SAMPLES", "250");
        std::env::set_var("SPECTRO_SEED", "not-a-number");
        let config = SpectroConfig::default().with_env_override();
        assert_eq!(config.uncertainty.samples, 250);
        assert_eq!(config.uncertainty.seed, UncertaintyConfig::default().seed);
        std::env::remove_var("SPECTRO_SAMPLES");
        std::env::remove_var("SPECTRO_SEED");
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "log_level = \"debug\"\n\n[hvl]\ndensity = 8.96\n").unwrap();
        let config = SpectroConfig::load(file.path()).unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.hvl.density, 8.96);
        assert_eq!(config.hvl.goal_tolerance, 5e-6);
        assert_eq!(config.uncertainty, UncertaintySettings::default());
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let config = SpectroConfig::load_or_default(Path::new("/no/such/spectro.toml")).unwrap();
        assert_eq!(config, SpectroConfig::default());
    }

    #[test]
    fn test_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "log_level = [").unwrap();
        assert!(matches!(
            SpectroConfig::load(file.path()),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_validate_multiple_errors() {
        let mut config = SpectroConfig::default();
        config.log_level = "loud".to_string();
        config.hvl.density = -1.0;
        config.hvl.step_tolerance = 0.0;
        config.uncertainty.samples = 0;

        let result = config.validate();
        if let Err(ConfigError::Validation(errors)) = result {
            assert_eq!(errors.len(), 4);
            assert!(errors.iter().any(|e| e.contains("log_level")));
            assert!(errors.iter().any(|e| e.contains("density")));
        } else {
            panic!("Expected validation error");
        }
    }

    #[test]
    fn test_conversions() {
        let config = SpectroConfig::default();
        assert_eq!(config.default_method(), Method::Akima1D);
        assert_eq!(config.halving_search().unwrap(), HalvingSearch::default());
        assert_eq!(config.uncertainty_config(), UncertaintyConfig::default());
    }

    #[test]
    fn test_config_round_trips_through_toml() {
        let config = SpectroConfig::default();
        let text = toml::to_string(&config).unwrap();
        assert_eq!(toml::from_str::<SpectroConfig>(&text).unwrap(), config);
    }

    // ========================================
    // Method Deserialisation Tests
    // ========================================

    #[test]
    fn test_method_names_in_file() {
        for (name, method) in [
            ("B-splines", Method::BSpline),
            ("PchipInterpolator", Method::Pchip),
            ("CubicSpline", Method::CubicSpline),
        ] {
            let text = format!("[interpolation]\ndefault_method = \"{}\"\n", name);
            let config: SpectroConfig = toml::from_str(&text).unwrap();
            assert_eq!(config.default_method(), method);
        }
    }

    #[test]
    fn test_unknown_method_in_file_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[interpolation]\ndefault_method = \"Quadratic\"").unwrap();
        match SpectroConfig::load(file.path()) {
            Err(ConfigError::Parse(msg)) => assert!(msg.contains("Quadratic")),
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_method_serialises_with_canonical_name() {
        let mut config = SpectroConfig::default();
        config.interpolation.default_method = Method::BSpline;
        let text = toml::to_string(&config).unwrap();
        assert!(text.contains("default_method = \"B-splines\""));
    }
}
