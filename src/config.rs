//! Workspace configuration from environment variables or JSON.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::{ANCHOR_PADDING, DEFAULT_HEIGHT, DEFAULT_WIDTH, RESIZE_MARGIN, SCROLL_EDGE_PX, SCROLL_STEP_PX};

/// Errors produced while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {value:?}")]
    InvalidValue { var: &'static str, value: String },
    #[error("{var} must be a finite, non-negative number, got {value}")]
    OutOfRange { var: &'static str, value: f64 },
    #[error("config parse failed: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WorkspaceConfig {
    /// Inset of start/end anchors from box corners.
    pub anchor_padding: f64,
    /// Auto-scroll trigger distance from a workspace edge, client px.
    pub scroll_edge: f64,
    /// Auto-scroll step, client px before scale compensation.
    pub scroll_step: f64,
    pub auto_resize: bool,
    pub resize_margin: f64,
    pub debug: bool,
    pub width: f64,
    pub height: f64,
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        Self {
            anchor_padding: ANCHOR_PADDING,
            scroll_edge: SCROLL_EDGE_PX,
            scroll_step: SCROLL_STEP_PX,
            auto_resize: false,
            resize_margin: RESIZE_MARGIN,
            debug: false,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

impl WorkspaceConfig {
    /// Build config from environment variables.
    ///
    /// Optional:
    /// - `VIZ_ANCHOR_PADDING`: default 1
    /// - `VIZ_SCROLL_EDGE_PX`: default 40
    /// - `VIZ_SCROLL_STEP_PX`: default 25
    /// - `VIZ_AUTO_RESIZE`: `true`/`false`, default false
    /// - `VIZ_RESIZE_MARGIN`: default 40
    /// - `VIZ_DEBUG`: `true`/`false`, default false
    /// - `VIZ_WIDTH`, `VIZ_HEIGHT`: default 2000
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is set but malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| match std::env::var(key) {
            Ok(value) => Some(value),
            Err(_) => None,
        })
    }

    /// Build config from any key lookup. Unset keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a value is set but malformed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let config = Self {
            anchor_padding: lookup_parse(&lookup, "VIZ_ANCHOR_PADDING", defaults.anchor_padding)?,
            scroll_edge: lookup_parse(&lookup, "VIZ_SCROLL_EDGE_PX", defaults.scroll_edge)?,
            scroll_step: lookup_parse(&lookup, "VIZ_SCROLL_STEP_PX", defaults.scroll_step)?,
            auto_resize: lookup_parse(&lookup, "VIZ_AUTO_RESIZE", defaults.auto_resize)?,
            resize_margin: lookup_parse(&lookup, "VIZ_RESIZE_MARGIN", defaults.resize_margin)?,
            debug: lookup_parse(&lookup, "VIZ_DEBUG", defaults.debug)?,
            width: lookup_parse(&lookup, "VIZ_WIDTH", defaults.width)?,
            height: lookup_parse(&lookup, "VIZ_HEIGHT", defaults.height)?,
        };
        config.validate()
    }

    /// Parse a JSON document; missing fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] on malformed JSON or out-of-range numbers.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()
    }

    fn validate(self) -> Result<Self, ConfigError> {
        let numbers = [
            ("VIZ_ANCHOR_PADDING", self.anchor_padding),
            ("VIZ_SCROLL_EDGE_PX", self.scroll_edge),
            ("VIZ_SCROLL_STEP_PX", self.scroll_step),
            ("VIZ_RESIZE_MARGIN", self.resize_margin),
            ("VIZ_WIDTH", self.width),
            ("VIZ_HEIGHT", self.height),
        ];
        for (var, value) in numbers {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::OutOfRange { var, value });
            }
        }
        Ok(self)
    }
}

fn lookup_parse<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(var) {
        None => Ok(default),
        Some(raw) => {
            let parsed = raw.trim().parse::<T>();
            parsed.map_err(|_| ConfigError::InvalidValue { var, value: raw })
        }
    }
}
