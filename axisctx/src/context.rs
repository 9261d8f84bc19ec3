// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared chart state read by every axis.
//!
//! A chart hands the same [`ChartContext`] to each of its axes. The context is
//! passed explicitly; axes never look it up from ambient state.

use alloc::sync::Arc;

use crate::{AxisOrient, ChartTheme, Scale};

/// Pixels reserved on each side of the plot for guides.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Margin {
    /// Space above the plot.
    pub top: f64,
    /// Space right of the plot.
    pub right: f64,
    /// Space below the plot.
    pub bottom: f64,
    /// Space left of the plot.
    pub left: f64,
}

impl Margin {
    /// Creates a margin from per-side values (CSS order).
    pub fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// The same margin on every side.
    pub fn uniform(value: f64) -> Self {
        Self::new(value, value, value, value)
    }

    /// Returns the space reserved on the side an axis with `orient` occupies.
    pub fn get(&self, orient: AxisOrient) -> f64 {
        match orient {
            AxisOrient::Top => self.top,
            AxisOrient::Right => self.right,
            AxisOrient::Bottom => self.bottom,
            AxisOrient::Left => self.left,
        }
    }
}

/// Theme, scales, and margin shared by the axes of one chart.
///
/// Scales are optional: a chart that has not measured its plot yet has no
/// scales, and axes resolved against it produce nothing.
#[derive(Clone, Debug, Default)]
pub struct ChartContext {
    /// Shared theme.
    pub theme: Arc<ChartTheme>,
    /// Horizontal scale, used by `top` and `bottom` axes.
    pub x_scale: Option<Arc<dyn Scale>>,
    /// Vertical scale, used by `left` and `right` axes.
    pub y_scale: Option<Arc<dyn Scale>>,
    /// Reserved space around the plot.
    pub margin: Margin,
}

impl ChartContext {
    /// Creates a context with `theme` and no scales.
    pub fn new(theme: impl Into<Arc<ChartTheme>>) -> Self {
        Self {
            theme: theme.into(),
            ..Self::default()
        }
    }

    /// Sets the horizontal scale.
    pub fn with_x_scale(mut self, scale: Arc<dyn Scale>) -> Self {
        self.x_scale = Some(scale);
        self
    }

    /// Sets the vertical scale.
    pub fn with_y_scale(mut self, scale: Arc<dyn Scale>) -> Self {
        self.y_scale = Some(scale);
        self
    }

    /// Sets the margin.
    pub fn with_margin(mut self, margin: Margin) -> Self {
        self.margin = margin;
        self
    }

    /// Returns `true` once both scales are available.
    pub fn scales_ready(&self) -> bool {
        self.x_scale.is_some() && self.y_scale.is_some()
    }
}
