//! Configuration types for Flashmap exporters.
//!
//! All types implement [`serde::Deserialize`] and every field has a default,
//! so a configuration file only needs the values it changes.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining the exporter sections.
//! - [`OutlineConfig`] - Header and indentation of the text outline.
//! - [`DiagramConfig`] - Direction, label length and styling of regenerated
//!   flowchart text.
//!
//! # Example
//!
//! ```
//! # use flashmap::config::{AppConfig, Direction};
//! let config = AppConfig::default();
//! assert_eq!(config.outline().indent_width(), 2);
//! assert_eq!(config.diagram().direction(), Direction::TopDown);
//! assert!(config.validate().is_ok());
//! ```

use std::fmt;

use serde::Deserialize;

const DEFAULT_INDENT_WIDTH: usize = 2;
const DEFAULT_MAX_LABEL_LEN: usize = 50;
const ELLIPSIS_LEN: usize = 3;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Outline exporter section.
    #[serde(default)]
    outline: OutlineConfig,

    /// Diagram exporter section.
    #[serde(default)]
    diagram: DiagramConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    pub fn new(outline: OutlineConfig, diagram: DiagramConfig) -> Self {
        Self { outline, diagram }
    }

    /// Returns the outline configuration.
    pub fn outline(&self) -> &OutlineConfig {
        &self.outline
    }

    /// Returns the diagram configuration.
    pub fn diagram(&self) -> &DiagramConfig {
        &self.diagram
    }

    /// Checks values that deserialize fine but cannot be honored.
    ///
    /// # Errors
    ///
    /// Returns a message naming the offending key.
    pub fn validate(&self) -> Result<(), String> {
        let max = self.diagram.max_label_len;
        if max <= ELLIPSIS_LEN {
            return Err(format!(
                "diagram.max_label_len must be greater than {ELLIPSIS_LEN}, got {max}"
            ));
        }
        Ok(())
    }
}

/// Settings for the text outline.
#[derive(Debug, Clone, Deserialize)]
pub struct OutlineConfig {
    /// Line written before the outline, followed by a blank line.
    #[serde(default)]
    header: Option<String>,

    /// Spaces per depth level.
    #[serde(default = "default_indent_width")]
    indent_width: usize,
}

impl OutlineConfig {
    /// Creates a new [`OutlineConfig`].
    ///
    /// # Arguments
    ///
    /// * `header` - Optional first line of the outline.
    /// * `indent_width` - Spaces per depth level.
    pub fn new(header: Option<String>, indent_width: usize) -> Self {
        Self {
            header,
            indent_width,
        }
    }

    /// Returns the header line, if any.
    pub fn header(&self) -> Option<&str> {
        self.header.as_deref()
    }

    /// Returns the number of spaces per depth level.
    pub fn indent_width(&self) -> usize {
        self.indent_width
    }
}

impl Default for OutlineConfig {
    fn default() -> Self {
        Self::new(None, DEFAULT_INDENT_WIDTH)
    }
}

fn default_indent_width() -> usize {
    DEFAULT_INDENT_WIDTH
}

/// Flow direction written in the diagram header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub enum Direction {
    #[default]
    #[serde(rename = "TD")]
    TopDown,
    #[serde(rename = "TB")]
    TopBottom,
    #[serde(rename = "LR")]
    LeftRight,
    #[serde(rename = "RL")]
    RightLeft,
    #[serde(rename = "BT")]
    BottomTop,
}

impl Direction {
    /// Returns the keyword used in the diagram header.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TopDown => "TD",
            Self::TopBottom => "TB",
            Self::LeftRight => "LR",
            Self::RightLeft => "RL",
            Self::BottomTop => "BT",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Settings for regenerated flowchart text.
#[derive(Debug, Clone, Deserialize)]
pub struct DiagramConfig {
    /// Header direction.
    #[serde(default)]
    direction: Direction,

    /// Labels longer than this many characters are truncated.
    #[serde(default = "default_max_label_len")]
    max_label_len: usize,

    /// Style for a trailing `classDef default` line.
    #[serde(default)]
    class_def: Option<String>,
}

impl DiagramConfig {
    /// Creates a new [`DiagramConfig`].
    ///
    /// # Arguments
    ///
    /// * `direction` - Header direction.
    /// * `max_label_len` - Truncation limit for labels, in characters.
    /// * `class_def` - Optional style for the default class.
    pub fn new(direction: Direction, max_label_len: usize, class_def: Option<String>) -> Self {
        Self {
            direction,
            max_label_len,
            class_def,
        }
    }

    /// Returns the header direction.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns the label truncation limit, in characters.
    pub fn max_label_len(&self) -> usize {
        self.max_label_len
    }

    /// Returns the style of the default class, if configured.
    pub fn class_def(&self) -> Option<&str> {
        self.class_def.as_deref()
    }
}

impl Default for DiagramConfig {
    fn default() -> Self {
        Self::new(Direction::default(), DEFAULT_MAX_LABEL_LEN, None)
    }
}

fn default_max_label_len() -> usize {
    DEFAULT_MAX_LABEL_LEN
}
