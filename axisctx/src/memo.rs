// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cached axis resolution for charts that redraw often.
//!
//! [`AxisResolver`] keeps the last resolution per orientation and reuses it
//! while the inputs are unchanged. Theme, scales, and callbacks are compared by
//! identity (`Arc::ptr_eq`), so replacing a scale with an equal but new `Arc`
//! is a cache miss. Output is always identical to calling [`resolve_axis`].

use alloc::sync::Arc;

use hashbrown::HashMap;

use crate::{
    AxisOrient, AxisProps, AxisRenderer, ChartContext, ChartTheme, Margin, ResolvedAxis, Scale,
    resolve_axis,
};

#[derive(Debug)]
struct CacheKey {
    theme: Arc<ChartTheme>,
    x_scale: Option<Arc<dyn Scale>>,
    y_scale: Option<Arc<dyn Scale>>,
    margin: Margin,
    props: AxisProps,
}

impl CacheKey {
    fn new(props: &AxisProps, ctx: &ChartContext) -> Self {
        Self {
            theme: ctx.theme.clone(),
            x_scale: ctx.x_scale.clone(),
            y_scale: ctx.y_scale.clone(),
            margin: ctx.margin,
            props: props.clone(),
        }
    }

    fn matches(&self, props: &AxisProps, ctx: &ChartContext) -> bool {
        Arc::ptr_eq(&self.theme, &ctx.theme)
            && same_scale(self.x_scale.as_ref(), ctx.x_scale.as_ref())
            && same_scale(self.y_scale.as_ref(), ctx.y_scale.as_ref())
            && self.margin == ctx.margin
            && self.props == *props
    }
}

fn same_scale(a: Option<&Arc<dyn Scale>>, b: Option<&Arc<dyn Scale>>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => Arc::ptr_eq(a, b),
        (None, None) => true,
        _ => false,
    }
}

#[derive(Debug)]
struct CacheEntry {
    key: CacheKey,
    resolved: Option<ResolvedAxis>,
}

/// A memoizing wrapper around [`resolve_axis`].
#[derive(Debug, Default)]
pub struct AxisResolver {
    cache: HashMap<AxisOrient, CacheEntry>,
    hits: u64,
    misses: u64,
}

impl AxisResolver {
    /// Creates an empty resolver.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves `props` against `ctx`, reusing the cached result when the
    /// inputs are unchanged since the last call for the same orientation.
    pub fn resolve(&mut self, props: &AxisProps, ctx: &ChartContext) -> Option<ResolvedAxis> {
        let orient = props.orient;
        if let Some(entry) = self.cache.get(&orient)
            && entry.key.matches(props, ctx)
        {
            self.hits += 1;
            log::trace!("{orient} axis: reusing cached resolution");
            return entry.resolved.clone();
        }

        self.misses += 1;
        log::debug!("{orient} axis: inputs changed, resolving");
        let resolved = resolve_axis(props, ctx);
        self.cache.insert(
            orient,
            CacheEntry {
                key: CacheKey::new(props, ctx),
                resolved: resolved.clone(),
            },
        );
        resolved
    }

    /// Resolves and renders, like [`crate::render_axis`] but cached.
    pub fn render<R: AxisRenderer + ?Sized>(
        &mut self,
        props: &AxisProps,
        ctx: &ChartContext,
        renderer: &mut R,
    ) -> Option<R::Output> {
        let axis = self.resolve(props, ctx)?;
        Some(renderer.render(&axis))
    }

    /// Drops every cached resolution.
    pub fn clear(&mut self) {
        self.cache.clear();
    }

    /// Number of calls answered from the cache.
    pub fn hits(&self) -> u64 {
        self.hits
    }

    /// Number of calls that resolved from scratch.
    pub fn misses(&self) -> u64 {
        self.misses
    }
}
