// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis orientation.

use alloc::string::{String, ToString};
use core::fmt;
use core::str::FromStr;

/// Axis orientation, matching Vega's axis `orient` values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AxisOrient {
    /// A horizontal axis placed above the plot area.
    Top,
    /// A horizontal axis placed below the plot area.
    Bottom,
    /// A vertical axis placed to the left of the plot area.
    Left,
    /// A vertical axis placed to the right of the plot area.
    Right,
}

/// The chart dimension an axis describes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AxisDim {
    /// The horizontal dimension, drawn by `top` and `bottom` axes.
    X,
    /// The vertical dimension, drawn by `left` and `right` axes.
    Y,
}

impl AxisOrient {
    /// All orientations, in Vega declaration order.
    pub const ALL: [Self; 4] = [Self::Top, Self::Bottom, Self::Left, Self::Right];

    /// Returns `true` for `left` and `right` axes.
    pub fn is_vertical(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }

    /// Returns the dimension this axis describes.
    pub fn dim(self) -> AxisDim {
        if self.is_vertical() {
            AxisDim::Y
        } else {
            AxisDim::X
        }
    }

    /// Returns the lowercase Vega name of this orientation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl fmt::Display for AxisOrient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown orientation name.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown axis orientation `{0}` (expected top, bottom, left or right)")]
pub struct ParseOrientError(String);

impl FromStr for AxisOrient {
    type Err = ParseOrientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top" => Ok(Self::Top),
            "bottom" => Ok(Self::Bottom),
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            other => Err(ParseOrientError(other.to_string())),
        }
    }
}
