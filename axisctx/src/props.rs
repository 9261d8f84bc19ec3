// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Caller-supplied axis properties.
//!
//! Every field except the orientation is optional. Fields left unset are
//! filled from the chart theme and context during resolution; fields that are
//! set always win over the theme.

extern crate alloc;

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;

use peniko::Brush;

use crate::{AxisOrient, LabelStyle};

/// Per-tick label styling, called with `(value, index)` for each tick.
///
/// Two `TickLabelProps` compare equal only when they share the same closure.
#[derive(Clone)]
pub struct TickLabelProps(Arc<dyn Fn(f64, usize) -> LabelStyle>);

impl TickLabelProps {
    /// Wraps a label style function.
    pub fn new(f: impl Fn(f64, usize) -> LabelStyle + 'static) -> Self {
        Self(Arc::new(f))
    }

    /// A function that returns `style` for every tick.
    pub fn constant(style: LabelStyle) -> Self {
        Self::new(move |_, _| style.clone())
    }

    /// Returns the label style for the tick at `index` with domain `value`.
    pub fn style(&self, value: f64, index: usize) -> LabelStyle {
        (self.0)(value, index)
    }
}

impl PartialEq for TickLabelProps {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for TickLabelProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("TickLabelProps(..)")
    }
}

/// Tick label text formatter, called with `(value, index)` for each tick.
///
/// Two `TickFormat`s compare equal only when they share the same closure.
#[derive(Clone)]
pub struct TickFormat(Arc<dyn Fn(f64, usize) -> String>);

impl TickFormat {
    /// Wraps a formatting function.
    pub fn new(f: impl Fn(f64, usize) -> String + 'static) -> Self {
        Self(Arc::new(f))
    }

    /// Formats the tick at `index` with domain `value`.
    pub fn format(&self, value: f64, index: usize) -> String {
        (self.0)(value, index)
    }
}

impl PartialEq for TickFormat {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for TickFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("TickFormat(..)")
    }
}

/// Properties a caller passes to a themed axis.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisProps {
    /// Which plot edge the axis is drawn on.
    pub orient: AxisOrient,
    /// Tick label styling; replaces the theme's tick label style entirely.
    pub tick_label_props: Option<TickLabelProps>,
    /// Axis title styling.
    pub label_props: Option<LabelStyle>,
    /// Axis line paint.
    pub stroke: Option<Brush>,
    /// Axis line width.
    pub stroke_width: Option<f64>,
    /// Tick mark length.
    pub tick_length: Option<f64>,
    /// Tick mark paint.
    pub tick_stroke: Option<Brush>,
    /// Vertical offset of the axis origin.
    pub top: Option<f64>,
    /// Horizontal offset of the axis origin.
    pub left: Option<f64>,
    /// Approximate number of ticks.
    pub tick_count: Option<usize>,
    /// Explicit tick values, in domain space.
    pub tick_values: Option<Vec<f64>>,
    /// Tick label formatter.
    pub tick_format: Option<TickFormat>,
    /// Axis title text.
    pub label: Option<String>,
    /// Distance between tick labels and the axis title.
    pub label_offset: Option<f64>,
    /// Skip the axis line.
    pub hide_axis_line: bool,
    /// Skip tick marks.
    pub hide_ticks: bool,
    /// Skip the tick at domain value zero.
    pub hide_zero: bool,
}

impl AxisProps {
    /// Creates props for an axis on `orient` with nothing overridden.
    pub fn new(orient: AxisOrient) -> Self {
        Self {
            orient,
            tick_label_props: None,
            label_props: None,
            stroke: None,
            stroke_width: None,
            tick_length: None,
            tick_stroke: None,
            top: None,
            left: None,
            tick_count: None,
            tick_values: None,
            tick_format: None,
            label: None,
            label_offset: None,
            hide_axis_line: false,
            hide_ticks: false,
            hide_zero: false,
        }
    }

    /// Convenience constructor for a `top` axis.
    pub fn top() -> Self {
        Self::new(AxisOrient::Top)
    }

    /// Convenience constructor for a `bottom` axis.
    pub fn bottom() -> Self {
        Self::new(AxisOrient::Bottom)
    }

    /// Convenience constructor for a `left` axis.
    pub fn left() -> Self {
        Self::new(AxisOrient::Left)
    }

    /// Convenience constructor for a `right` axis.
    pub fn right() -> Self {
        Self::new(AxisOrient::Right)
    }

    /// Overrides tick label styling.
    pub fn with_tick_label_props(mut self, props: TickLabelProps) -> Self {
        self.tick_label_props = Some(props);
        self
    }

    /// Overrides axis title styling.
    pub fn with_label_props(mut self, style: LabelStyle) -> Self {
        self.label_props = Some(style);
        self
    }

    /// Overrides the axis line paint and width.
    pub fn with_stroke(mut self, stroke: impl Into<Brush>, stroke_width: f64) -> Self {
        self.stroke = Some(stroke.into());
        self.stroke_width = Some(stroke_width);
        self
    }

    /// Overrides the tick mark length.
    pub fn with_tick_length(mut self, tick_length: f64) -> Self {
        self.tick_length = Some(tick_length);
        self
    }

    /// Overrides the tick mark paint.
    pub fn with_tick_stroke(mut self, stroke: impl Into<Brush>) -> Self {
        self.tick_stroke = Some(stroke.into());
        self
    }

    /// Overrides the computed axis position.
    pub fn with_position(mut self, top: f64, left: f64) -> Self {
        self.top = Some(top);
        self.left = Some(left);
        self
    }

    /// Sets the approximate tick count.
    pub fn with_tick_count(mut self, tick_count: usize) -> Self {
        self.tick_count = Some(tick_count);
        self
    }

    /// Sets explicit tick values.
    pub fn with_tick_values(mut self, values: impl Into<Vec<f64>>) -> Self {
        self.tick_values = Some(values.into());
        self
    }

    /// Sets a custom tick label formatter.
    pub fn with_tick_format(mut self, f: impl Fn(f64, usize) -> String + 'static) -> Self {
        self.tick_format = Some(TickFormat::new(f));
        self
    }

    /// Sets the axis title.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Sets the distance between tick labels and the axis title.
    pub fn with_label_offset(mut self, offset: f64) -> Self {
        self.label_offset = Some(offset);
        self
    }

    /// Enables or disables the axis line.
    pub fn with_axis_line(mut self, show: bool) -> Self {
        self.hide_axis_line = !show;
        self
    }

    /// Enables or disables tick marks.
    pub fn with_ticks(mut self, show: bool) -> Self {
        self.hide_ticks = !show;
        self
    }

    /// Enables or disables the tick at zero.
    pub fn with_zero_tick(mut self, show: bool) -> Self {
        self.hide_zero = !show;
        self
    }
}
