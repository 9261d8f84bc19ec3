// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The axis renderer seam.
//!
//! Tick generation, label placement and painting belong to the renderer. This
//! crate only decides *what* to draw; [`AxisRenderer`] is where a backend
//! (SVG, a retained scene, a GPU painter) takes over.

use crate::{AxisProps, ChartContext, ResolvedAxis, resolve_axis};

/// Draws a resolved axis.
pub trait AxisRenderer {
    /// What rendering produces (marks, a string, unit for immediate painters).
    type Output;

    /// Draws `axis`.
    fn render(&mut self, axis: &ResolvedAxis) -> Self::Output;
}

/// Draws a themed axis.
///
/// Returns `None` without invoking `renderer` when the chart scales are not
/// set yet.
pub fn render_axis<R: AxisRenderer + ?Sized>(
    props: &AxisProps,
    ctx: &ChartContext,
    renderer: &mut R,
) -> Option<R::Output> {
    let axis = resolve_axis(props, ctx)?;
    Some(renderer.render(&axis))
}
