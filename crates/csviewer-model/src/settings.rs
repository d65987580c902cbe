//! Figure and axis settings carried by a plot request.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ModelError;

/// Figure size in inches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FigureSize {
    pub width: f64,
    pub height: f64,
}

impl Default for FigureSize {
    fn default() -> Self {
        Self {
            width: 4.8,
            height: 2.4,
        }
    }
}

/// Figure-wide settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FigureSettings {
    pub title: String,
    pub size: FigureSize,
    pub grid_visible: bool,
    pub legend_visible: bool,
}

impl Default for FigureSettings {
    fn default() -> Self {
        Self {
            title: String::new(),
            size: FigureSize::default(),
            grid_visible: true,
            legend_visible: true,
        }
    }
}

impl FigureSettings {
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.size = FigureSize { width, height };
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::X => f.write_str("x"),
            Self::Y => f.write_str("y"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisScale {
    #[default]
    Linear,
    Log,
}

impl FromStr for AxisScale {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "linear" => Ok(Self::Linear),
            "log" => Ok(Self::Log),
            _ => Err(ModelError::UnknownScale(s.to_string())),
        }
    }
}

/// An explicit axis range. Validity (`min < max`) is checked when a plot is
/// built, not here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisLimits {
    pub min: f64,
    pub max: f64,
}

impl AxisLimits {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// True when both bounds are finite and `min` is strictly below `max`.
    pub fn is_ordered(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min < self.max
    }
}

/// Settings for one axis. `limits == None` leaves scaling to the renderer.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AxisSettings {
    pub label: String,
    pub scale: AxisScale,
    pub limits: Option<AxisLimits>,
}

impl AxisSettings {
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    #[must_use]
    pub fn with_scale(mut self, scale: AxisScale) -> Self {
        self.scale = scale;
        self
    }

    #[must_use]
    pub fn with_limits(mut self, min: f64, max: f64) -> Self {
        self.limits = Some(AxisLimits::new(min, max));
        self
    }
}
