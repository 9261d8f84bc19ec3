// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text measurement for axis tick labels.
//!
//! Axis themes bound tick label width by the chart margin reserved on the
//! axis side. Renderers honor that bound by measuring labels and truncating
//! the ones that overflow; this crate holds the measurement trait and the
//! truncation helper so every renderer applies the same policy.
//!
//! The crate is `no_std` (it uses `alloc` for named font families and
//! truncated labels) and has no renderer dependencies.

#![no_std]

extern crate alloc;

use alloc::borrow::Cow;
use alloc::string::String;
use alloc::sync::Arc;

/// Suffix appended to labels shortened by [`fit_to_width`].
pub const ELLIPSIS: &str = "\u{2026}";

/// A minimal text measurement interface.
pub trait TextMeasurer {
    /// Measure a single line of text.
    ///
    /// `text` is treated as a single line; callers should split on `\n` if they
    /// want multi-line layout.
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics;
}

/// Text styling inputs relevant to measurement.
#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    /// Font size in the chart's coordinate system (typically pixels).
    pub font_size: f64,
    /// The preferred font family.
    pub font_family: FontFamily,
    /// Font weight (e.g. `400` for normal, `700` for bold).
    pub font_weight: FontWeight,
}

impl TextStyle {
    /// Creates a default `TextStyle` with the given `font_size`.
    #[must_use]
    pub fn new(font_size: f64) -> Self {
        Self {
            font_size,
            font_family: FontFamily::SansSerif,
            font_weight: FontWeight::NORMAL,
        }
    }

    /// Sets the font family.
    #[must_use]
    pub fn with_family(mut self, font_family: FontFamily) -> Self {
        self.font_family = font_family;
        self
    }

    /// Sets the font weight.
    #[must_use]
    pub fn with_weight(mut self, font_weight: FontWeight) -> Self {
        self.font_weight = font_weight;
        self
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self::new(11.0)
    }
}

/// Font family selection for measurement.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum FontFamily {
    /// A generic serif family (CSS `serif`).
    Serif,
    /// A generic sans-serif family (CSS `sans-serif`).
    SansSerif,
    /// A generic monospace family (CSS `monospace`).
    Monospace,
    /// A named family (e.g. `"Inter"`).
    Named(Arc<str>),
}

impl FontFamily {
    /// Returns the font family string for CSS-style font declarations.
    #[must_use]
    pub fn as_css_family(&self) -> &str {
        match self {
            Self::Serif => "serif",
            Self::SansSerif => "sans-serif",
            Self::Monospace => "monospace",
            Self::Named(name) => name,
        }
    }

    /// Parses a CSS generic family name, falling back to a named family.
    #[must_use]
    pub fn from_css_family(name: &str) -> Self {
        match name {
            "serif" => Self::Serif,
            "sans-serif" => Self::SansSerif,
            "monospace" => Self::Monospace,
            other => Self::Named(Arc::from(other)),
        }
    }
}

/// CSS-style font weights.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FontWeight(pub u16);

impl FontWeight {
    /// Normal weight (`400`).
    pub const NORMAL: Self = Self(400);
    /// Bold weight (`700`).
    pub const BOLD: Self = Self(700);
}

/// Measured metrics for a single line of text.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextMetrics {
    /// The advance width.
    pub advance_width: f64,
    /// Distance from baseline to the top of typical glyphs.
    pub ascent: f64,
    /// Distance from baseline to the bottom of typical glyphs.
    pub descent: f64,
}

impl TextMetrics {
    /// Returns `ascent + descent`.
    #[must_use]
    pub fn line_height(&self) -> f64 {
        self.ascent + self.descent
    }
}

/// A heuristic measurer: ~0.6em per glyph, baseline at ~0.8em.
///
/// Bold text is widened by 10%.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeuristicTextMeasurer;

impl TextMeasurer for HeuristicTextMeasurer {
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics {
        let em = if style.font_weight >= FontWeight::BOLD {
            0.66
        } else {
            0.6
        };
        TextMetrics {
            advance_width: em * style.font_size * text.chars().count() as f64,
            ascent: 0.8 * style.font_size,
            descent: 0.2 * style.font_size,
        }
    }
}

/// Shortens `text` so that its measured advance width fits within `max_width`.
///
/// Text that already fits, or a non-finite `max_width`, returns the input
/// unchanged. Otherwise trailing characters are dropped and [`ELLIPSIS`] is
/// appended; if not even the ellipsis fits, the result is empty.
pub fn fit_to_width<'a>(
    measurer: &dyn TextMeasurer,
    text: &'a str,
    style: &TextStyle,
    max_width: f64,
) -> Cow<'a, str> {
    if !max_width.is_finite() || measurer.measure(text, style).advance_width <= max_width {
        return Cow::Borrowed(text);
    }

    let mut candidate = String::with_capacity(text.len() + ELLIPSIS.len());
    let mut best = None;
    for (end, _) in text.char_indices().skip(1) {
        candidate.clear();
        candidate.push_str(&text[..end]);
        candidate.push_str(ELLIPSIS);
        if measurer.measure(&candidate, style).advance_width > max_width {
            break;
        }
        best = Some(end);
    }

    match best {
        Some(end) => {
            let mut out = String::from(&text[..end]);
            out.push_str(ELLIPSIS);
            Cow::Owned(out)
        }
        None if measurer.measure(ELLIPSIS, style).advance_width <= max_width => {
            Cow::Owned(String::from(ELLIPSIS))
        }
        None => Cow::Owned(String::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heuristic_width_scales_with_glyph_count() {
        let style = TextStyle::new(10.0);
        let m = HeuristicTextMeasurer.measure("abcd", &style);
        assert!((m.advance_width - 24.0).abs() < 1e-9);
        assert!((m.line_height() - 10.0).abs() < 1e-9);
    }

    #[test]
    fn bold_text_measures_wider() {
        let normal = TextStyle::new(10.0);
        let bold = TextStyle::new(10.0).with_weight(FontWeight::BOLD);
        let a = HeuristicTextMeasurer.measure("label", &normal).advance_width;
        let b = HeuristicTextMeasurer.measure("label", &bold).advance_width;
        assert!(b > a);
    }

    #[test]
    fn fit_to_width_keeps_short_labels() {
        let style = TextStyle::new(10.0);
        let out = fit_to_width(&HeuristicTextMeasurer, "12", &style, 40.0);
        assert!(matches!(out, Cow::Borrowed("12")));
    }

    #[test]
    fn fit_to_width_ignores_unbounded_width() {
        let style = TextStyle::new(10.0);
        let out = fit_to_width(&HeuristicTextMeasurer, "a long label", &style, f64::INFINITY);
        assert_eq!(out, "a long label");
    }

    #[test]
    fn fit_to_width_truncates_with_ellipsis() {
        let style = TextStyle::new(10.0);
        // 6px per glyph: "abc…" is 24px, "abcd…" would be 30px.
        let out = fit_to_width(&HeuristicTextMeasurer, "abcdefgh", &style, 25.0);
        assert_eq!(out, "abc\u{2026}");
    }

    #[test]
    fn fit_to_width_collapses_when_nothing_fits() {
        let style = TextStyle::new(10.0);
        assert_eq!(fit_to_width(&HeuristicTextMeasurer, "abc", &style, 7.0), ELLIPSIS);
        assert_eq!(fit_to_width(&HeuristicTextMeasurer, "abc", &style, 2.0), "");
    }

    #[test]
    fn css_family_round_trips_generic_names() {
        assert_eq!(FontFamily::from_css_family("monospace"), FontFamily::Monospace);
        assert_eq!(
            FontFamily::from_css_family("Inter").as_css_family(),
            "Inter"
        );
    }
}
