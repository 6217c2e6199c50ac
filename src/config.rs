use crate::aggregator::LayoutConfig;
use crate::error::ProjectionError;
use crate::normalizer::DisplayZone;
use crate::week::WeekStart;
#[cfg(feature = "serde")]
use anyhow::Context;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "serde")]
use std::{fs, path::Path};

pub const DEFAULT_DISPLAY_ZONE: &str = "Europe/London";

/// Configuration d'une projection : fuseau, début de semaine, géométrie.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ProjectionConfig {
    pub display_zone: String,
    pub week_starts_on: WeekStart,
    pub layout: LayoutConfig,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            display_zone: DEFAULT_DISPLAY_ZONE.to_string(),
            week_starts_on: WeekStart::Monday,
            layout: LayoutConfig::default(),
        }
    }
}

impl ProjectionConfig {
    pub fn validate(&self) -> Result<(), ProjectionError> {
        self.zone()?;
        self.layout.validate()
    }

    pub fn zone(&self) -> Result<DisplayZone, ProjectionError> {
        DisplayZone::parse(&self.display_zone)
    }

    /// Charge et valide une configuration JSON (champs absents = défauts).
    #[cfg(feature = "serde")]
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let data = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
        let config: Self = serde_json::from_slice(&data)
            .with_context(|| format!("parsing config {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }
}
