// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scales shared through the chart context.
//!
//! Axes never build their own scales: the chart owns one x scale and one y scale
//! and every axis reads whichever one matches its orientation. Axes only need the
//! output range (to position themselves on the plot edge), a mapping for tick
//! placement, and a set of tick values; that is the whole [`Scale`] surface.

use core::fmt::Debug;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use smallvec::SmallVec;

/// Tick values produced by a scale.
pub type Ticks = SmallVec<[f64; 16]>;

/// A mapping from a data domain into an output pixel range.
pub trait Scale: Debug {
    /// Returns the output range bounds, in the order they were configured.
    ///
    /// Vertical scales are commonly configured as `(plot_bottom, plot_top)`, so
    /// callers must not assume `range().0 <= range().1`.
    fn range(&self) -> (f64, f64);

    /// Maps a domain value into range space.
    fn map(&self, value: f64) -> f64;

    /// Returns roughly `count` tick values in domain space.
    fn ticks(&self, count: usize) -> Ticks;

    /// Width of a band in range space; `0` for continuous scales.
    fn bandwidth(&self) -> f64 {
        0.0
    }
}

/// A linear mapping from a continuous domain to a continuous range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleLinear {
    domain: (f64, f64),
    range: (f64, f64),
}

impl ScaleLinear {
    /// Creates a new scale mapping `domain` values to `range` values.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Returns the configured domain.
    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    /// Extends the domain outward to the nearest tick boundaries.
    pub fn nice(mut self, count: usize) -> Self {
        let ticks = nice_ticks(self.domain.0, self.domain.1, count);
        if let (Some(&first), Some(&last)) = (ticks.first(), ticks.last())
            && ticks.len() >= 2
        {
            self.domain = if self.domain.0 <= self.domain.1 {
                (first, last)
            } else {
                (last, first)
            };
        }
        self
    }

    /// Maps a range value back into domain space.
    pub fn invert(&self, y: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let denom = r1 - r0;
        if denom == 0.0 {
            return d0;
        }
        d0 + (y - r0) / denom * (d1 - d0)
    }
}

impl Scale for ScaleLinear {
    fn range(&self) -> (f64, f64) {
        self.range
    }

    fn map(&self, x: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let denom = d1 - d0;
        if denom == 0.0 {
            return r0;
        }
        let t = (x - d0) / denom;
        r0 + t * (r1 - r0)
    }

    fn ticks(&self, count: usize) -> Ticks {
        let (lo, hi) = if self.domain.0 <= self.domain.1 {
            self.domain
        } else {
            (self.domain.1, self.domain.0)
        };
        nice_ticks(lo, hi, count)
            .into_iter()
            .filter(|t| *t >= lo - 1e-9 && *t <= hi + 1e-9)
            .collect()
    }
}

fn nice_ticks(mut min: f64, mut max: f64, count: usize) -> Ticks {
    let mut out = Ticks::new();
    if count == 0 || !min.is_finite() || !max.is_finite() {
        return out;
    }
    if min == max {
        out.push(min);
        return out;
    }
    if min > max {
        core::mem::swap(&mut min, &mut max);
    }
    let step = nice_step((max - min) / count as f64);
    if step == 0.0 {
        out.extend([min, max]);
        return out;
    }

    let start = (min / step).floor() * step;
    let stop = (max / step).ceil() * step;
    let n = ((stop - start) / step).round().min(10_000.0);
    #[allow(
        clippy::cast_possible_truncation,
        reason = "finite, non-negative and capped at 10k"
    )]
    let n = n as u64;
    out.extend((0..=n).map(|i| start + step * i as f64));
    out
}

fn nice_step(step: f64) -> f64 {
    if !step.is_finite() || step <= 0.0 {
        return 0.0;
    }
    let base = 10_f64.powf(step.log10().floor());
    let nice = match step / base {
        e if e >= 7.5 => 10.0,
        e if e >= 3.5 => 5.0,
        e if e >= 1.5 => 2.0,
        _ => 1.0,
    };
    nice * base
}

/// A discrete band scale over `count` categories, indexed `0..count`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleBand {
    range: (f64, f64),
    count: usize,
    padding_inner: f64,
    padding_outer: f64,
}

impl ScaleBand {
    /// Creates a new band scale covering `count` bands over `range`.
    pub fn new(range: (f64, f64), count: usize) -> Self {
        Self {
            range,
            count,
            padding_inner: 0.1,
            padding_outer: 0.1,
        }
    }

    /// Sets inner and outer padding in band units.
    pub fn with_padding(mut self, inner: f64, outer: f64) -> Self {
        self.padding_inner = inner.max(0.0);
        self.padding_outer = outer.max(0.0);
        self
    }

    /// Returns the number of bands.
    pub fn count(&self) -> usize {
        self.count
    }
}

impl Scale for ScaleBand {
    fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Maps a band index to the start of its band.
    fn map(&self, index: f64) -> f64 {
        let (r0, r1) = self.range;
        let bw = self.bandwidth();
        let step = bw * (1.0 + self.padding_inner);
        let start = r0.min(r1);
        start + bw * self.padding_outer + step * index
    }

    fn ticks(&self, _count: usize) -> Ticks {
        (0..self.count).map(|i| i as f64).collect()
    }

    fn bandwidth(&self) -> f64 {
        let n = self.count as f64;
        if n <= 0.0 {
            return 0.0;
        }
        let (r0, r1) = self.range;
        let denom = n + self.padding_inner * (n - 1.0) + 2.0 * self.padding_outer;
        if denom == 0.0 {
            0.0
        } else {
            (r1 - r0).abs() / denom
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_maps_reversed_vertical_range() {
        let s = ScaleLinear::new((0.0, 10.0), (200.0, 0.0));
        assert_eq!(s.range(), (200.0, 0.0));
        assert!((s.map(0.0) - 200.0).abs() < 1e-9);
        assert!((s.map(5.0) - 100.0).abs() < 1e-9);
        assert!((s.invert(100.0) - 5.0).abs() < 1e-9);
    }

    #[test]
    fn linear_ticks_stay_within_domain() {
        let s = ScaleLinear::new((0.3, 9.7), (0.0, 100.0));
        let ticks = s.ticks(5);
        assert_eq!(ticks.as_slice(), &[2.0, 4.0, 6.0, 8.0]);
    }

    #[test]
    fn nice_extends_domain_to_tick_boundaries() {
        let s = ScaleLinear::new((0.3, 9.7), (0.0, 100.0)).nice(5);
        assert_eq!(s.domain(), (0.0, 10.0));
        let ticks = s.ticks(5);
        assert_eq!(ticks.first(), Some(&0.0));
        assert_eq!(ticks.last(), Some(&10.0));
    }

    #[test]
    fn degenerate_domain_maps_to_range_start() {
        let s = ScaleLinear::new((3.0, 3.0), (10.0, 50.0));
        assert_eq!(s.map(3.0), 10.0);
        assert_eq!(s.ticks(4).as_slice(), &[3.0]);
    }

    #[test]
    fn band_ticks_are_category_indices() {
        let s = ScaleBand::new((0.0, 100.0), 4).with_padding(0.0, 0.0);
        assert_eq!(s.ticks(10).as_slice(), &[0.0, 1.0, 2.0, 3.0]);
        assert!((s.bandwidth() - 25.0).abs() < 1e-9);
        assert!((s.map(2.0) - 50.0).abs() < 1e-9);
    }
}
