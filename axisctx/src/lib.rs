// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Themed chart axes.
//!
//! A chart shares one [`ChartContext`] (theme, x/y scales, margin) with all of
//! its axes. Each axis is described by [`AxisProps`], little more than an
//! orientation, and [`resolve_axis`] turns the pair into a [`ResolvedAxis`]:
//! - the active scale (`y` for `left`/`right`, `x` for `top`/`bottom`),
//! - the pixel offset that places the axis on its plot edge, and
//! - stroke, tick and label styling taken from the theme unless the caller
//!   set them.
//!
//! Drawing is delegated to an [`AxisRenderer`]. [`AxisResolver`] caches
//! resolutions for charts that redraw with mostly unchanged inputs.

#![no_std]

extern crate alloc;

mod context;
#[cfg(not(feature = "std"))]
mod float;
mod memo;
mod orient;
mod props;
mod render;
mod resolve;
mod scale;
mod theme;

pub use axisctx_text::{FontFamily, FontWeight, TextStyle};
pub use context::{ChartContext, Margin};
pub use memo::AxisResolver;
pub use orient::{AxisDim, AxisOrient, ParseOrientError};
pub use props::{AxisProps, TickFormat, TickLabelProps};
pub use render::{AxisRenderer, render_axis};
pub use resolve::{ResolvedAxis, left_offset, resolve_axis, resolve_tick_label_props, top_offset};
pub use scale::{Scale, ScaleBand, ScaleLinear, Ticks};
pub use theme::{AxisStyles, ChartTheme, LabelStyle, OrientMap, TextAnchor, TickStyles};
