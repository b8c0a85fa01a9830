//! # Configuration
//!
//! Board size, timing and start-screen decoration. The defaults are the
//! sample configuration; a few values may be overridden through `LIFE_*`
//! environment variables.

use std::str::FromStr;

use crate::application::EditPolicy;
use crate::error::{ConfigError, ConfigResult};

pub const ENV_ROWS: &str = "LIFE_ROWS";
pub const ENV_COLS: &str = "LIFE_COLS";
pub const ENV_CELL_SIZE: &str = "LIFE_CELL_SIZE";
pub const ENV_STEP_INTERVAL: &str = "LIFE_STEP_INTERVAL";
pub const ENV_EDIT_POLICY: &str = "LIFE_EDIT_POLICY";

#[derive(Clone, Debug, PartialEq)]
pub struct LifeConfig {
    /// Grid rows
    pub rows: usize,
    /// Grid columns
    pub cols: usize,
    /// Side of one drawn cell, in pixels
    pub cell_size: f32,
    /// Seconds between generations while running
    pub step_interval: f32,
    /// Whether taps may edit the grid while running
    pub edit_policy: EditPolicy,
    /// Start screen markers
    pub marker_count: usize,
    pub marker_size: f32,
    /// Max drift on each axis, in pixels
    pub marker_drift: f32,
    pub marker_min_duration: f32,
    pub marker_max_duration: f32,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            rows: 20,
            cols: 18,
            cell_size: 20.0,
            step_interval: 0.5,
            edit_policy: EditPolicy::Live,
            marker_count: 10,
            marker_size: 10.0,
            marker_drift: 50.0,
            marker_min_duration: 2.0,
            marker_max_duration: 5.0,
        }
    }
}

impl LifeConfig {
    /// Defaults with `LIFE_*` environment overrides applied
    pub fn from_env() -> ConfigResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults with overrides read through `lookup`
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> ConfigResult<Self> {
        let mut config = Self::default();

        if let Some(v) = parse_var(&lookup, ENV_ROWS)? {
            config.rows = v;
        }
        if let Some(v) = parse_var(&lookup, ENV_COLS)? {
            config.cols = v;
        }
        if let Some(v) = parse_var(&lookup, ENV_CELL_SIZE)? {
            config.cell_size = v;
        }
        if let Some(v) = parse_var(&lookup, ENV_STEP_INTERVAL)? {
            config.step_interval = v;
        }
        if let Some(v) = parse_var(&lookup, ENV_EDIT_POLICY)? {
            config.edit_policy = v;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.rows == 0 {
            return Err(ConfigError::ZeroDimension { axis: "rows" });
        }
        if self.cols == 0 {
            return Err(ConfigError::ZeroDimension { axis: "cols" });
        }

        let positive = [
            ("cell_size", self.cell_size),
            ("step_interval", self.step_interval),
            ("marker_size", self.marker_size),
            ("marker_min_duration", self.marker_min_duration),
            ("marker_max_duration", self.marker_max_duration),
        ];
        if let Some(&(key, value)) = positive
            .iter()
            .find(|(_, value)| !(value.is_finite() && *value > 0.0))
        {
            return Err(ConfigError::NonPositive { key, value });
        }

        if !(self.marker_drift.is_finite() && self.marker_drift >= 0.0) {
            return Err(ConfigError::Negative {
                key: "marker_drift",
                value: self.marker_drift,
            });
        }
        if self.marker_min_duration > self.marker_max_duration {
            return Err(ConfigError::DurationRange {
                min: self.marker_min_duration,
                max: self.marker_max_duration,
            });
        }
        Ok(())
    }
}

fn parse_var<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
) -> ConfigResult<Option<T>> {
    let Some(raw) = lookup(key) else {
        return Ok(None);
    };
    let value = raw
        .trim()
        .parse::<T>()
        .map_err(|_| ConfigError::invalid(key, raw.as_str()))?;
    log::info!("config override {}={}", key, raw.trim());
    Ok(Some(value))
}
