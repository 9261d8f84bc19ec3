// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis resolution: props + chart context -> renderer inputs.
//!
//! Resolution picks the active scale and the theme style group from the axis
//! orientation, positions the axis on the matching plot edge using the range
//! bounds of the other dimension's scale, and fills every renderer prop the
//! caller left unset from the theme.
//!
//! The two offsets use different defaulting rules:
//! - `top` treats a zero or NaN bound as missing and falls back to `0`.
//! - `left` uses the computed bound as-is, so NaN propagates.
//!
//! Both rules are kept as-is; callers that position axes with degenerate
//! scales observe the difference.

extern crate alloc;

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;

use kurbo::{Affine, Vec2};
use peniko::Brush;

use crate::{
    AxisOrient, AxisProps, ChartContext, ChartTheme, LabelStyle, Margin, Scale, TickFormat,
    TickLabelProps,
};

/// Fully resolved inputs for an axis renderer.
#[derive(Clone)]
pub struct ResolvedAxis {
    /// Which plot edge the axis is drawn on.
    pub orient: AxisOrient,
    /// The active scale (`y` for vertical axes, `x` otherwise).
    pub scale: Arc<dyn Scale>,
    /// Vertical offset of the axis origin.
    pub top: f64,
    /// Horizontal offset of the axis origin.
    pub left: f64,
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
    /// Tick label styling. `None` means the renderer's default.
    pub tick_label_props: Option<TickLabelProps>,
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

impl ResolvedAxis {
    /// The axis origin as a vector.
    pub fn offset(&self) -> Vec2 {
        Vec2::new(self.left, self.top)
    }

    /// Translation placing axis-local coordinates on the plot edge.
    pub fn transform(&self) -> Affine {
        Affine::translate(self.offset())
    }

    /// Tick label style for one tick, if any label styling is set.
    pub fn tick_label_style(&self, value: f64, index: usize) -> Option<LabelStyle> {
        self.tick_label_props
            .as_ref()
            .map(|props| props.style(value, index))
    }
}

impl PartialEq for ResolvedAxis {
    fn eq(&self, other: &Self) -> bool {
        // Offsets are compared bitwise so a NaN offset equals itself.
        self.orient == other.orient
            && Arc::ptr_eq(&self.scale, &other.scale)
            && self.top.to_bits() == other.top.to_bits()
            && self.left.to_bits() == other.left.to_bits()
            && self.label_props == other.label_props
            && self.stroke == other.stroke
            && self.stroke_width == other.stroke_width
            && self.tick_length == other.tick_length
            && self.tick_stroke == other.tick_stroke
            && self.tick_label_props == other.tick_label_props
            && self.tick_count == other.tick_count
            && self.tick_values == other.tick_values
            && self.tick_format == other.tick_format
            && self.label == other.label
            && self.label_offset == other.label_offset
            && self.hide_axis_line == other.hide_axis_line
            && self.hide_ticks == other.hide_ticks
            && self.hide_zero == other.hide_zero
    }
}

impl fmt::Debug for ResolvedAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedAxis")
            .field("orient", &self.orient)
            .field("scale", &self.scale)
            .field("top", &self.top)
            .field("left", &self.left)
            .field("label_props", &self.label_props)
            .field("stroke", &self.stroke)
            .field("stroke_width", &self.stroke_width)
            .field("tick_length", &self.tick_length)
            .field("tick_stroke", &self.tick_stroke)
            .field("tick_label_props", &self.tick_label_props.is_some())
            .field("tick_count", &self.tick_count)
            .field("tick_values", &self.tick_values)
            .field("tick_format", &self.tick_format.is_some())
            .field("label", &self.label)
            .field("label_offset", &self.label_offset)
            .field("hide_axis_line", &self.hide_axis_line)
            .field("hide_ticks", &self.hide_ticks)
            .field("hide_zero", &self.hide_zero)
            .finish()
    }
}

/// Resolves `props` against `ctx`.
///
/// Returns `None` when either chart scale is missing; nothing is derived in
/// that case.
pub fn resolve_axis(props: &AxisProps, ctx: &ChartContext) -> Option<ResolvedAxis> {
    let orient = props.orient;
    let (Some(x_scale), Some(y_scale)) = (&ctx.x_scale, &ctx.y_scale) else {
        log::trace!("skipping {orient} axis: chart scales are not set");
        return None;
    };

    let dim = orient.dim();
    let tick_styles = ctx.theme.tick_styles(dim);
    let axis_styles = ctx.theme.axis_styles(dim);

    let top = props
        .top
        .unwrap_or_else(|| top_offset(orient, y_scale.range()));
    let left = props
        .left
        .unwrap_or_else(|| left_offset(orient, x_scale.range()));

    let scale = if orient.is_vertical() {
        y_scale.clone()
    } else {
        x_scale.clone()
    };

    Some(ResolvedAxis {
        orient,
        scale,
        top,
        left,
        label_props: props
            .label_props
            .clone()
            .or_else(|| axis_styles.and_then(|s| s.label.get(orient).cloned())),
        stroke: props
            .stroke
            .clone()
            .or_else(|| axis_styles.and_then(|s| s.stroke.clone())),
        stroke_width: props
            .stroke_width
            .or_else(|| axis_styles.and_then(|s| s.stroke_width)),
        tick_length: props
            .tick_length
            .or_else(|| tick_styles.and_then(|s| s.tick_length)),
        tick_stroke: props
            .tick_stroke
            .clone()
            .or_else(|| tick_styles.and_then(|s| s.stroke.clone())),
        tick_label_props: resolve_tick_label_props(props, &ctx.theme, &ctx.margin),
        tick_count: props.tick_count,
        tick_values: props.tick_values.clone(),
        tick_format: props.tick_format.clone(),
        label: props.label.clone(),
        label_offset: props.label_offset,
        hide_axis_line: props.hide_axis_line,
        hide_ticks: props.hide_ticks,
        hide_zero: props.hide_zero,
    })
}

/// Resolves tick label styling.
///
/// The caller's function is used unmodified when present. Otherwise the
/// theme's tick label style for this orientation is used, with its `width`
/// bound to the margin reserved on that side so labels stay inside it.
pub fn resolve_tick_label_props(
    props: &AxisProps,
    theme: &ChartTheme,
    margin: &Margin,
) -> Option<TickLabelProps> {
    if let Some(custom) = &props.tick_label_props {
        return Some(custom.clone());
    }
    let orient = props.orient;
    let themed = theme.tick_styles(orient.dim())?.label.get(orient)?;
    Some(TickLabelProps::constant(LabelStyle {
        width: Some(margin.get(orient)),
        ..themed.clone()
    }))
}

/// Vertical axis offset from the y range.
///
/// Zero and NaN bounds fall back to `0`.
pub fn top_offset(orient: AxisOrient, y_range: (f64, f64)) -> f64 {
    let bound = match orient {
        AxisOrient::Bottom => max_bound(y_range),
        AxisOrient::Top => min_bound(y_range),
        AxisOrient::Left | AxisOrient::Right => return 0.0,
    };
    if bound == 0.0 || bound.is_nan() {
        0.0
    } else {
        bound
    }
}

/// Horizontal axis offset from the x range.
///
/// The bound is used as computed; a NaN bound yields a NaN offset.
pub fn left_offset(orient: AxisOrient, x_range: (f64, f64)) -> f64 {
    match orient {
        AxisOrient::Left => min_bound(x_range),
        AxisOrient::Right => max_bound(x_range),
        AxisOrient::Top | AxisOrient::Bottom => 0.0,
    }
}

// `f64::min`/`f64::max` skip NaN operands; range bounds must propagate them.
fn min_bound((a, b): (f64, f64)) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.min(b)
    }
}

fn max_bound((a, b): (f64, f64)) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.max(b)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::cell::Cell;
    use std::rc::Rc;

    use peniko::color::palette::css;

    use super::*;
    use crate::{AxisDim, ScaleLinear, TickStyles};

    fn ctx_with_ranges(x: (f64, f64), y: (f64, f64)) -> ChartContext {
        ChartContext::new(ChartTheme::light())
            .with_x_scale(Arc::new(ScaleLinear::new((0.0, 1.0), x)))
            .with_y_scale(Arc::new(ScaleLinear::new((0.0, 1.0), y)))
            .with_margin(Margin::new(20.0, 30.0, 40.0, 50.0))
    }

    #[test]
    fn vertical_axes_use_y_scale_and_y_styles() {
        let ctx = ctx_with_ranges((10.0, 50.0), (0.0, 100.0));
        let y_ticks = ctx.theme.tick_styles(AxisDim::Y).unwrap();
        let y_axis = ctx.theme.axis_styles(AxisDim::Y).unwrap();
        for orient in [AxisOrient::Left, AxisOrient::Right] {
            let axis = resolve_axis(&AxisProps::new(orient), &ctx).unwrap();
            assert!(Arc::ptr_eq(&axis.scale, ctx.y_scale.as_ref().unwrap()));
            assert_eq!(axis.tick_length, y_ticks.tick_length);
            assert_eq!(axis.tick_stroke, y_ticks.stroke);
            assert_eq!(axis.stroke, y_axis.stroke);
            assert_eq!(axis.label_props.as_ref(), y_axis.label.get(orient));
        }
    }

    #[test]
    fn horizontal_axes_use_x_scale_and_x_styles() {
        let ctx = ctx_with_ranges((10.0, 50.0), (0.0, 100.0));
        let x_axis = ctx.theme.axis_styles(AxisDim::X).unwrap();
        for orient in [AxisOrient::Top, AxisOrient::Bottom] {
            let axis = resolve_axis(&AxisProps::new(orient), &ctx).unwrap();
            assert!(Arc::ptr_eq(&axis.scale, ctx.x_scale.as_ref().unwrap()));
            assert_eq!(axis.label_props.as_ref(), x_axis.label.get(orient));
        }
    }

    #[test]
    fn top_offset_follows_y_range_bounds() {
        let ctx = ctx_with_ranges((10.0, 50.0), (0.0, 100.0));
        let bottom = resolve_axis(&AxisProps::bottom(), &ctx).unwrap();
        let top = resolve_axis(&AxisProps::top(), &ctx).unwrap();
        assert_eq!((bottom.top, bottom.left), (100.0, 0.0));
        assert_eq!((top.top, top.left), (0.0, 0.0));

        // Reversed vertical ranges position by bounds, not by order.
        let ctx = ctx_with_ranges((10.0, 50.0), (300.0, 20.0));
        assert_eq!(resolve_axis(&AxisProps::bottom(), &ctx).unwrap().top, 300.0);
        assert_eq!(resolve_axis(&AxisProps::top(), &ctx).unwrap().top, 20.0);
    }

    #[test]
    fn left_offset_follows_x_range_bounds() {
        let ctx = ctx_with_ranges((10.0, 50.0), (0.0, 100.0));
        let left = resolve_axis(&AxisProps::left(), &ctx).unwrap();
        let right = resolve_axis(&AxisProps::right(), &ctx).unwrap();
        assert_eq!((left.top, left.left), (0.0, 10.0));
        assert_eq!((right.top, right.left), (0.0, 50.0));
    }

    #[test]
    fn top_offset_treats_nan_as_missing_but_left_offset_propagates_it() {
        assert_eq!(top_offset(AxisOrient::Bottom, (f64::NAN, 100.0)), 0.0);
        assert_eq!(top_offset(AxisOrient::Top, (-0.0, 50.0)), 0.0);
        assert!(left_offset(AxisOrient::Left, (f64::NAN, 50.0)).is_nan());
        assert!(left_offset(AxisOrient::Right, (10.0, f64::NAN)).is_nan());
        assert_eq!(left_offset(AxisOrient::Left, (0.0, 50.0)), 0.0);
        assert_eq!(left_offset(AxisOrient::Left, (-5.0, 50.0)), -5.0);
    }

    #[test]
    fn missing_scale_resolves_to_nothing() {
        let y_only = ChartContext::new(ChartTheme::light())
            .with_y_scale(Arc::new(ScaleLinear::new((0.0, 1.0), (0.0, 100.0))));
        let x_only = ChartContext::new(ChartTheme::light())
            .with_x_scale(Arc::new(ScaleLinear::new((0.0, 1.0), (0.0, 100.0))));
        for orient in AxisOrient::ALL {
            assert!(resolve_axis(&AxisProps::new(orient), &y_only).is_none());
            assert!(resolve_axis(&AxisProps::new(orient), &x_only).is_none());
        }
    }

    #[test]
    fn caller_tick_label_props_bypass_the_theme() {
        let ctx = ctx_with_ranges((10.0, 50.0), (0.0, 100.0));
        let calls = Rc::new(Cell::new(0));
        let seen = calls.clone();
        let custom = TickLabelProps::new(move |_, _| {
            seen.set(seen.get() + 1);
            LabelStyle::default().with_width(7.0)
        });
        let props = AxisProps::left().with_tick_label_props(custom.clone());

        let axis = resolve_axis(&props, &ctx).unwrap();
        assert_eq!(axis.tick_label_props.as_ref(), Some(&custom));
        assert_eq!(calls.get(), 0);
        assert_eq!(axis.tick_label_style(1.0, 0).unwrap().width, Some(7.0));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn themed_tick_labels_are_bound_to_the_margin() {
        let ctx = ctx_with_ranges((10.0, 50.0), (0.0, 100.0));
        for orient in AxisOrient::ALL {
            let axis = resolve_axis(&AxisProps::new(orient), &ctx).unwrap();
            let style = axis.tick_label_style(0.5, 0).unwrap();
            let themed = ctx
                .theme
                .tick_styles(orient.dim())
                .and_then(|s| s.label.get(orient))
                .unwrap();
            assert_eq!(style.width, Some(ctx.margin.get(orient)));
            assert_eq!(style.text_anchor, themed.text_anchor);
            assert_eq!(style.fill, themed.fill);
        }
    }

    #[test]
    fn missing_theme_label_leaves_tick_label_props_unset() {
        let theme = ChartTheme::default().with_tick_styles(
            AxisDim::X,
            TickStyles {
                tick_length: Some(9.0),
                ..TickStyles::default()
            },
        );
        let ctx = ChartContext::new(theme)
            .with_x_scale(Arc::new(ScaleLinear::new((0.0, 1.0), (0.0, 100.0))))
            .with_y_scale(Arc::new(ScaleLinear::new((0.0, 1.0), (100.0, 0.0))));

        let bottom = resolve_axis(&AxisProps::bottom(), &ctx).unwrap();
        assert!(bottom.tick_label_props.is_none());
        assert_eq!(bottom.tick_length, Some(9.0));
        assert!(bottom.stroke.is_none());
        assert!(bottom.label_props.is_none());

        let left = resolve_axis(&AxisProps::left(), &ctx).unwrap();
        assert!(left.tick_label_props.is_none());
        assert!(left.tick_length.is_none());
    }

    #[test]
    fn caller_props_override_theme_defaults() {
        let ctx = ctx_with_ranges((10.0, 50.0), (0.0, 100.0));
        let props = AxisProps::bottom()
            .with_stroke(css::RED, 3.0)
            .with_tick_stroke(css::BLUE)
            .with_tick_length(12.0)
            .with_position(5.0, 6.0)
            .with_label("Time")
            .with_tick_count(3);
        let axis = resolve_axis(&props, &ctx).unwrap();
        assert_eq!(axis.stroke, Some(Brush::from(css::RED)));
        assert_eq!(axis.stroke_width, Some(3.0));
        assert_eq!(axis.tick_stroke, Some(Brush::from(css::BLUE)));
        assert_eq!(axis.tick_length, Some(12.0));
        assert_eq!((axis.top, axis.left), (5.0, 6.0));
        assert_eq!(axis.label.as_deref(), Some("Time"));
        assert_eq!(axis.tick_count, Some(3));
    }

    #[test]
    fn resolution_does_not_touch_the_theme() {
        let ctx = ctx_with_ranges((10.0, 50.0), (0.0, 100.0));
        let before = (*ctx.theme).clone();
        for orient in AxisOrient::ALL {
            let _ = resolve_axis(&AxisProps::new(orient), &ctx);
        }
        assert_eq!(*ctx.theme, before);
    }

    #[test]
    fn transform_translates_to_the_axis_origin() {
        let ctx = ctx_with_ranges((10.0, 50.0), (0.0, 100.0));
        let axis = resolve_axis(&AxisProps::right(), &ctx).unwrap();
        let p = axis.transform() * kurbo::Point::new(0.0, 25.0);
        assert_eq!((p.x, p.y), (50.0, 25.0));
    }
}
