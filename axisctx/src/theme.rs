// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart theme: default stroke, tick, and label styling for axes.
//!
//! A theme holds two style groups per dimension. *Tick styles* cover tick
//! marks and tick labels; *axis styles* cover the axis line and the axis
//! title. Labels are keyed by orientation because a left axis and a right
//! axis anchor their text differently even though they share the `y` group.
//!
//! Every field is optional. A missing entry is not an error: it resolves to
//! `None` and the renderer falls back to its own default.

use peniko::Brush;
use peniko::Color;

use crate::{AxisDim, AxisOrient, TextStyle};

/// One optional value per axis orientation.
#[derive(Clone, Debug, PartialEq)]
pub struct OrientMap<T> {
    /// Value for `top` axes.
    pub top: Option<T>,
    /// Value for `bottom` axes.
    pub bottom: Option<T>,
    /// Value for `left` axes.
    pub left: Option<T>,
    /// Value for `right` axes.
    pub right: Option<T>,
}

impl<T> Default for OrientMap<T> {
    fn default() -> Self {
        Self {
            top: None,
            bottom: None,
            left: None,
            right: None,
        }
    }
}

impl<T> OrientMap<T> {
    /// Returns the value stored for `orient`, if any.
    pub fn get(&self, orient: AxisOrient) -> Option<&T> {
        match orient {
            AxisOrient::Top => self.top.as_ref(),
            AxisOrient::Bottom => self.bottom.as_ref(),
            AxisOrient::Left => self.left.as_ref(),
            AxisOrient::Right => self.right.as_ref(),
        }
    }

    /// Stores `value` for `orient`.
    pub fn set(&mut self, orient: AxisOrient, value: T) {
        let slot = match orient {
            AxisOrient::Top => &mut self.top,
            AxisOrient::Bottom => &mut self.bottom,
            AxisOrient::Left => &mut self.left,
            AxisOrient::Right => &mut self.right,
        };
        *slot = Some(value);
    }

    /// Builder form of [`OrientMap::set`].
    pub fn with(mut self, orient: AxisOrient, value: T) -> Self {
        self.set(orient, value);
        self
    }
}

/// Horizontal text anchor for labels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextAnchor {
    /// Text starts at the anchor point.
    Start,
    /// Text is centered on the anchor point.
    Middle,
    /// Text ends at the anchor point.
    End,
}

/// Styling for a text label (tick label or axis title).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LabelStyle {
    /// Fill paint.
    pub fill: Option<Brush>,
    /// Font settings.
    pub text: Option<TextStyle>,
    /// Horizontal anchor.
    pub text_anchor: Option<TextAnchor>,
    /// Rotation in degrees.
    pub angle: Option<f64>,
    /// Horizontal nudge from the computed label position.
    pub dx: Option<f64>,
    /// Vertical nudge from the computed label position.
    pub dy: Option<f64>,
    /// Maximum label width; renderers truncate labels that exceed it.
    pub width: Option<f64>,
}

impl LabelStyle {
    /// Sets the fill paint.
    pub fn with_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.fill = Some(fill.into());
        self
    }

    /// Sets the font settings.
    pub fn with_text(mut self, text: TextStyle) -> Self {
        self.text = Some(text);
        self
    }

    /// Sets the horizontal anchor.
    pub fn with_anchor(mut self, anchor: TextAnchor) -> Self {
        self.text_anchor = Some(anchor);
        self
    }

    /// Sets the rotation angle in degrees.
    pub fn with_angle(mut self, angle: f64) -> Self {
        self.angle = Some(angle);
        self
    }

    /// Sets the position nudge.
    pub fn with_offset(mut self, dx: f64, dy: f64) -> Self {
        self.dx = Some(dx);
        self.dy = Some(dy);
        self
    }

    /// Sets the maximum label width.
    pub fn with_width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }
}

/// Theme styling for tick marks and tick labels.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TickStyles {
    /// Tick mark paint.
    pub stroke: Option<Brush>,
    /// Tick mark width.
    pub stroke_width: Option<f64>,
    /// Tick mark length, measured away from the plot.
    pub tick_length: Option<f64>,
    /// Tick label styling per orientation.
    pub label: OrientMap<LabelStyle>,
}

/// Theme styling for the axis line and axis title.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AxisStyles {
    /// Axis line paint.
    pub stroke: Option<Brush>,
    /// Axis line width.
    pub stroke_width: Option<f64>,
    /// Axis title styling per orientation.
    pub label: OrientMap<LabelStyle>,
}

/// Shared style configuration for chart axes.
///
/// [`ChartTheme::default`] is empty; [`ChartTheme::light`] is a complete theme.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChartTheme {
    /// Tick styles for `top`/`bottom` axes.
    pub x_tick_styles: Option<TickStyles>,
    /// Tick styles for `left`/`right` axes.
    pub y_tick_styles: Option<TickStyles>,
    /// Axis styles for `top`/`bottom` axes.
    pub x_axis_styles: Option<AxisStyles>,
    /// Axis styles for `left`/`right` axes.
    pub y_axis_styles: Option<AxisStyles>,
}

impl ChartTheme {
    /// Returns the tick style group for `dim`.
    pub fn tick_styles(&self, dim: AxisDim) -> Option<&TickStyles> {
        match dim {
            AxisDim::X => self.x_tick_styles.as_ref(),
            AxisDim::Y => self.y_tick_styles.as_ref(),
        }
    }

    /// Returns the axis style group for `dim`.
    pub fn axis_styles(&self, dim: AxisDim) -> Option<&AxisStyles> {
        match dim {
            AxisDim::X => self.x_axis_styles.as_ref(),
            AxisDim::Y => self.y_axis_styles.as_ref(),
        }
    }

    /// Sets the tick style group for `dim`.
    pub fn with_tick_styles(mut self, dim: AxisDim, styles: TickStyles) -> Self {
        match dim {
            AxisDim::X => self.x_tick_styles = Some(styles),
            AxisDim::Y => self.y_tick_styles = Some(styles),
        }
        self
    }

    /// Sets the axis style group for `dim`.
    pub fn with_axis_styles(mut self, dim: AxisDim, styles: AxisStyles) -> Self {
        match dim {
            AxisDim::X => self.x_axis_styles = Some(styles),
            AxisDim::Y => self.y_axis_styles = Some(styles),
        }
        self
    }

    /// A light theme: dark gray rules and labels on a white background.
    pub fn light() -> Self {
        let ink = Color::from_rgb8(0x22, 0x22, 0x22);
        let rule = Color::from_rgb8(0x8a, 0x8a, 0x8a);
        let tick_text = TextStyle::new(11.0);
        let title_text = TextStyle::new(12.0).with_weight(crate::FontWeight::BOLD);

        let tick_label = |anchor, dx, dy| {
            LabelStyle::default()
                .with_fill(ink)
                .with_text(tick_text.clone())
                .with_anchor(anchor)
                .with_offset(dx, dy)
        };
        let title = |angle| {
            LabelStyle::default()
                .with_fill(ink)
                .with_text(title_text.clone())
                .with_anchor(TextAnchor::Middle)
                .with_angle(angle)
        };

        let x_ticks = TickStyles {
            stroke: Some(rule.into()),
            stroke_width: Some(1.0),
            tick_length: Some(4.0),
            label: OrientMap::default()
                .with(AxisOrient::Top, tick_label(TextAnchor::Middle, 0.0, -4.0))
                .with(AxisOrient::Bottom, tick_label(TextAnchor::Middle, 0.0, 4.0)),
        };
        let y_ticks = TickStyles {
            label: OrientMap::default()
                .with(AxisOrient::Left, tick_label(TextAnchor::End, -4.0, 0.0))
                .with(AxisOrient::Right, tick_label(TextAnchor::Start, 4.0, 0.0)),
            ..x_ticks.clone()
        };
        let x_axis = AxisStyles {
            stroke: Some(ink.into()),
            stroke_width: Some(1.0),
            label: OrientMap::default()
                .with(AxisOrient::Top, title(0.0))
                .with(AxisOrient::Bottom, title(0.0)),
        };
        let y_axis = AxisStyles {
            label: OrientMap::default()
                .with(AxisOrient::Left, title(-90.0))
                .with(AxisOrient::Right, title(90.0)),
            ..x_axis.clone()
        };

        Self::default()
            .with_tick_styles(AxisDim::X, x_ticks)
            .with_tick_styles(AxisDim::Y, y_ticks)
            .with_axis_styles(AxisDim::X, x_axis)
            .with_axis_styles(AxisDim::Y, y_axis)
    }
}
