//! Configuration file support for matside.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/matside/config.toml`, or
//! from an explicit path. Every section is optional; missing values fall
//! back to the layout of the club registration export.

use crate::safety::{IdentityMode, SafetyRule};
use crate::{Error, Result, SkillLevel};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub input: InputConfig,

    #[serde(default)]
    pub columns: ColumnLayout,

    #[serde(default)]
    pub skill: SkillMultipliers,

    #[serde(default)]
    pub matching: MatchingConfig,
}

/// Roster file dialect
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct InputConfig {
    #[serde(default = "default_delimiter")]
    pub delimiter: char,

    /// Skip the first row of the roster
    #[serde(default)]
    pub has_headers: bool,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
            has_headers: false,
        }
    }
}

/// Zero-based column positions in a roster row
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ColumnLayout {
    #[serde(default = "default_first_name_column")]
    pub first_name: usize,

    #[serde(default = "default_last_name_column")]
    pub last_name: usize,

    #[serde(default = "default_weight_column")]
    pub weight: usize,

    #[serde(default = "default_skill_level_column")]
    pub skill_level: usize,

    #[serde(default = "default_school_column")]
    pub school: usize,
}

impl Default for ColumnLayout {
    fn default() -> Self {
        Self {
            first_name: default_first_name_column(),
            last_name: default_last_name_column(),
            weight: default_weight_column(),
            skill_level: default_skill_level_column(),
            school: default_school_column(),
        }
    }
}

/// Weight multiplier applied per skill tier
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SkillMultipliers {
    #[serde(default = "default_beginner_multiplier")]
    pub beginner: f64,

    #[serde(default = "default_intermediate_multiplier")]
    pub intermediate: f64,

    #[serde(default = "default_experienced_multiplier")]
    pub experienced: f64,
}

impl Default for SkillMultipliers {
    fn default() -> Self {
        Self {
            beginner: default_beginner_multiplier(),
            intermediate: default_intermediate_multiplier(),
            experienced: default_experienced_multiplier(),
        }
    }
}

impl SkillMultipliers {
    pub fn for_level(&self, level: SkillLevel) -> f64 {
        match level {
            SkillLevel::Beginner => self.beginner,
            SkillLevel::Intermediate => self.intermediate,
            SkillLevel::Experienced => self.experienced,
        }
    }
}

/// Matching parameters
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MatchingConfig {
    /// Largest allowed weight gap as a fraction of the lighter athlete
    #[serde(default = "default_max_weight_ratio")]
    pub max_weight_ratio: f64,

    #[serde(default)]
    pub identity: IdentityMode,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            max_weight_ratio: default_max_weight_ratio(),
            identity: IdentityMode::default(),
        }
    }
}

// Default value functions
fn default_delimiter() -> char {
    ','
}

fn default_first_name_column() -> usize {
    2
}

fn default_last_name_column() -> usize {
    3
}

fn default_weight_column() -> usize {
    6
}

fn default_skill_level_column() -> usize {
    10
}

fn default_school_column() -> usize {
    18
}

fn default_beginner_multiplier() -> f64 {
    1.0
}

fn default_intermediate_multiplier() -> f64 {
    1.03
}

fn default_experienced_multiplier() -> f64 {
    1.05
}

fn default_max_weight_ratio() -> f64 {
    0.05
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        match Self::default_config_path() {
            Some(config_path) if config_path.exists() => Self::load_from(&config_path),
            config_path => {
                tracing::info!(
                    "No config file found at {:?}, using defaults",
                    config_path
                );
                Ok(Self::default())
            }
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path, if the platform has a config dir
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|base| base.join("matside").join("config.toml"))
    }

    /// Save the current configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }

    /// Reject values that would make weights or ratios meaningless
    pub fn validate(&self) -> Result<()> {
        let ratio = self.matching.max_weight_ratio;
        if !ratio.is_finite() || ratio <= 0.0 {
            return Err(Error::Config(format!(
                "max_weight_ratio must be a positive number, got {}",
                ratio
            )));
        }

        for level in SkillLevel::ALL {
            let multiplier = self.skill.for_level(level);
            if !multiplier.is_finite() || multiplier <= 0.0 {
                return Err(Error::Config(format!(
                    "{} multiplier must be a positive number, got {}",
                    level, multiplier
                )));
            }
        }

        if !self.input.delimiter.is_ascii() {
            return Err(Error::Config(format!(
                "delimiter must be a single ASCII character, got {:?}",
                self.input.delimiter
            )));
        }

        Ok(())
    }

    /// Safety rule described by the matching section
    pub fn safety_rule(&self) -> SafetyRule {
        SafetyRule::new(self.matching.max_weight_ratio, self.matching.identity)
    }
}
