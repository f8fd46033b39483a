//! Species configuration
//!
//! Species are configured as a JSON array; field names keep the kebab-case
//! spelling of the submission format (`govt-name`, `tech-ml`, ...). Tech
//! levels are bounded to `1..=15`; the experimental block carries setup
//! overrides with their own caps.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors from loading or validating species configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read species file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse species file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("species file contains no species")]
    Empty,

    #[error("invalid species {name:?}: {reason}")]
    Invalid { name: String, reason: String },
}

/// Experimental setup overrides.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Experimental {
    #[serde(default, rename = "x-econ-units")]
    pub econ_units: i64,
    #[serde(default, rename = "x-bridges")]
    pub make_bridges: bool,
    #[serde(default, rename = "x-ma-base")]
    pub ma_base: i64,
    #[serde(default, rename = "x-mi-base")]
    pub mi_base: i64,
    #[serde(default, rename = "x-ship-yards")]
    pub ship_yards: i64,
    #[serde(default, rename = "x-tech-bi")]
    pub tech_bi: i64,
    #[serde(default, rename = "x-tech-gv")]
    pub tech_gv: i64,
    #[serde(default, rename = "x-tech-ls")]
    pub tech_ls: i64,
    #[serde(default, rename = "x-tech-ma")]
    pub tech_ma: i64,
    #[serde(default, rename = "x-tech-mi")]
    pub tech_mi: i64,
    #[serde(default, rename = "x-tech-ml")]
    pub tech_ml: i64,
}

/// One species as configured at game setup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpeciesConfig {
    #[serde(default)]
    pub email: String,
    #[serde(default, rename = "govt-name")]
    pub govt_name: String,
    #[serde(default, rename = "govt-type")]
    pub govt_type: String,
    #[serde(default)]
    pub homeworld: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, rename = "tech-ml")]
    pub ml: i64,
    #[serde(default, rename = "tech-gv")]
    pub gv: i64,
    #[serde(default, rename = "tech-ls")]
    pub ls: i64,
    #[serde(default, rename = "tech-bi")]
    pub bi: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experimental: Option<Experimental>,
}

impl SpeciesConfig {
    /// Check tech levels and experimental caps.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |reason: String| ConfigError::Invalid {
            name: self.name.clone(),
            reason,
        };

        for (field, value) in [
            ("tech-ml", self.ml),
            ("tech-gv", self.gv),
            ("tech-ls", self.ls),
            ("tech-bi", self.bi),
        ] {
            if !(1..=15).contains(&value) {
                return Err(invalid(format!(
                    "{} must be between 1 and 15, got {}",
                    field, value
                )));
            }
        }

        if let Some(x) = &self.experimental {
            for (field, value) in [
                ("x-econ-units", x.econ_units),
                ("x-ma-base", x.ma_base),
                ("x-mi-base", x.mi_base),
                ("x-tech-bi", x.tech_bi),
                ("x-tech-gv", x.tech_gv),
                ("x-tech-ls", x.tech_ls),
                ("x-tech-ma", x.tech_ma),
                ("x-tech-mi", x.tech_mi),
                ("x-tech-ml", x.tech_ml),
            ] {
                if value > 99_999_999 {
                    return Err(invalid(format!(
                        "{} must be between 0 and 99999999, got {}",
                        field, value
                    )));
                }
            }
            if x.ship_yards > 99 {
                return Err(invalid(format!(
                    "x-ship-yards must be between 0 and 99, got {}",
                    x.ship_yards
                )));
            }
        }

        Ok(())
    }
}

/// Load and validate a species file (a JSON array of species).
///
/// An empty array is rejected: a game with no species is a configuration
/// mistake, not a degenerate game.
pub fn load_species(path: impl AsRef<Path>) -> Result<Vec<SpeciesConfig>, ConfigError> {
    let body = std::fs::read_to_string(path)?;
    let species: Vec<SpeciesConfig> = serde_json::from_str(&body)?;
    if species.is_empty() {
        return Err(ConfigError::Empty);
    }
    for s in &species {
        s.validate()?;
    }
    Ok(species)
}
