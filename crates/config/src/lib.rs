//! Shared configuration for Inkwell
//!
//! This crate provides the single source of truth for capture and history
//! settings shared by the engine, the recognizer glue and the replay tool.

use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

/// Default stroke color (opaque black, RGBA 0.0-1.0)
pub const DEFAULT_STROKE_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];

/// Default stroke width in logical pixels
pub const DEFAULT_STROKE_WIDTH: f32 = 1.0;

/// Environment variable selecting the redo policy
pub const REDO_POLICY_ENV: &str = "INKWELL_REDO_POLICY";

/// Environment variable bounding the undo/redo stack depth
pub const MAX_REDO_DEPTH_ENV: &str = "INKWELL_MAX_REDO_DEPTH";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid redo policy {0:?} (expected \"keep\" or \"clear-on-start\")")]
    InvalidRedoPolicy(String),
    #[error("Invalid redo depth {0:?} (expected a positive integer)")]
    InvalidRedoDepth(String),
}

/// What happens to undone strokes when a new capture starts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RedoPolicy {
    /// Undone strokes stay redoable until explicitly cleared
    #[default]
    Keep,
    /// Starting a new stroke discards every undone stroke
    ClearOnStart,
}

impl RedoPolicy {
    /// Parse a policy name (`keep` or `clear-on-start`)
    pub fn parse(value: &str) -> Result<Self, ConfigError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "keep" => Ok(Self::Keep),
            "clear-on-start" | "clear_on_start" => Ok(Self::ClearOnStart),
            _ => Err(ConfigError::InvalidRedoPolicy(value.to_string())),
        }
    }
}

/// Visual attributes recorded with every stroke
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrokeStyle {
    /// Color in RGBA [r, g, b, a], 0.0-1.0
    pub color: [f32; 4],
    /// Width in logical pixels
    pub width: f32,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: DEFAULT_STROKE_COLOR,
            width: DEFAULT_STROKE_WIDTH,
        }
    }
}

/// Engine configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InkConfig {
    /// Redo behaviour when a new capture starts
    pub redo_policy: RedoPolicy,
    /// Maximum number of undone strokes kept (None = unbounded)
    pub max_redo_depth: Option<NonZeroUsize>,
    /// Style stamped onto new strokes
    pub stroke_style: StrokeStyle,
}

impl InkConfig {
    /// Build a config from the process environment, logging and ignoring
    /// malformed values.
    pub fn from_env() -> Self {
        Self::from_lookup_lossy(|key| std::env::var(key).ok())
    }

    /// Build a config from the process environment, failing on malformed
    /// values.
    pub fn try_from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(value) = lookup(REDO_POLICY_ENV) {
            config.redo_policy = RedoPolicy::parse(&value)?;
        }
        if let Some(value) = lookup(MAX_REDO_DEPTH_ENV) {
            config.max_redo_depth = Some(parse_depth(&value)?);
        }
        Ok(config)
    }

    fn from_lookup_lossy<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(value) = lookup(REDO_POLICY_ENV) {
            match RedoPolicy::parse(&value) {
                Ok(policy) => config.redo_policy = policy,
                Err(err) => warn!("{err}, using default"),
            }
        }
        if let Some(value) = lookup(MAX_REDO_DEPTH_ENV) {
            match parse_depth(&value) {
                Ok(depth) => config.max_redo_depth = Some(depth),
                Err(err) => warn!("{err}, leaving redo stack unbounded"),
            }
        }
        config
    }

    /// Set the redo policy
    pub fn with_redo_policy(mut self, policy: RedoPolicy) -> Self {
        self.redo_policy = policy;
        self
    }

    /// Bound the undo/redo stack depth
    pub fn with_max_redo_depth(mut self, depth: NonZeroUsize) -> Self {
        self.max_redo_depth = Some(depth);
        self
    }

    /// Set the style stamped onto new strokes
    pub fn with_stroke_style(mut self, style: StrokeStyle) -> Self {
        self.stroke_style = style;
        self
    }
}

fn parse_depth(value: &str) -> Result<NonZeroUsize, ConfigError> {
    value
        .trim()
        .parse::<NonZeroUsize>()
        .map_err(|_| ConfigError::InvalidRedoDepth(value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = InkConfig::default();
        assert_eq!(config.redo_policy, RedoPolicy::Keep);
        assert_eq!(config.max_redo_depth, None);
        assert_eq!(config.stroke_style.color, DEFAULT_STROKE_COLOR);
        assert_eq!(config.stroke_style.width, DEFAULT_STROKE_WIDTH);
    }

    #[test]
    fn test_redo_policy_parse() {
        assert_eq!(RedoPolicy::parse("keep"), Ok(RedoPolicy::Keep));
        assert_eq!(
            RedoPolicy::parse(" Clear-On-Start "),
            Ok(RedoPolicy::ClearOnStart)
        );
        assert_eq!(
            RedoPolicy::parse("sometimes"),
            Err(ConfigError::InvalidRedoPolicy("sometimes".to_string()))
        );
    }

    #[test]
    fn test_from_lookup() {
        let config = InkConfig::from_lookup(lookup_from(&[
            (REDO_POLICY_ENV, "clear-on-start"),
            (MAX_REDO_DEPTH_ENV, "16"),
        ]))
        .unwrap();
        assert_eq!(config.redo_policy, RedoPolicy::ClearOnStart);
        assert_eq!(config.max_redo_depth, NonZeroUsize::new(16));

        let empty = InkConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(empty, InkConfig::default());
    }

    #[test]
    fn test_from_lookup_rejects_bad_depth() {
        let err =
            InkConfig::from_lookup(lookup_from(&[(MAX_REDO_DEPTH_ENV, "0")])).unwrap_err();
        assert_eq!(err, ConfigError::InvalidRedoDepth("0".to_string()));

        // The lossy variant keeps going with defaults
        let config = InkConfig::from_lookup_lossy(lookup_from(&[
            (MAX_REDO_DEPTH_ENV, "lots"),
            (REDO_POLICY_ENV, "clear-on-start"),
        ]));
        assert_eq!(config.max_redo_depth, None);
        assert_eq!(config.redo_policy, RedoPolicy::ClearOnStart);
    }

    #[test]
    fn test_serde_defaults() {
        let config: InkConfig =
            serde_json::from_str(r#"{"redo_policy":"clear-on-start"}"#).unwrap();
        assert_eq!(config.redo_policy, RedoPolicy::ClearOnStart);
        assert_eq!(config.stroke_style, StrokeStyle::default());
    }

    #[test]
    fn test_serde_rejects_zero_redo_depth() {
        let result: Result<InkConfig, _> = serde_json::from_str(r#"{"max_redo_depth":0}"#);
        assert!(result.is_err());

        let config: InkConfig = serde_json::from_str(r#"{"max_redo_depth":3}"#).unwrap();
        assert_eq!(config.max_redo_depth, NonZeroUsize::new(3));
    }
}
