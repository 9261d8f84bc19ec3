// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A minimal SVG axis renderer.

use std::fmt::Write as _;

use axisctx::{AxisOrient, AxisRenderer, LabelStyle, ResolvedAxis, TextAnchor, TextStyle};
use axisctx_text::{TextMeasurer, fit_to_width};
use kurbo::{BezPath, Vec2};
use peniko::Brush;
use peniko::color::palette::css;

const DEFAULT_TICK_COUNT: usize = 5;
const DEFAULT_TICK_LENGTH: f64 = 8.0;
const DEFAULT_LABEL_OFFSET: f64 = 14.0;
const LABEL_GAP: f64 = 2.0;

/// Renders resolved axes into `<g>` fragments.
pub(crate) struct SvgAxisRenderer<M> {
    measurer: M,
}

impl<M: TextMeasurer> SvgAxisRenderer<M> {
    pub(crate) fn new(measurer: M) -> Self {
        Self { measurer }
    }

    fn write_label(
        &self,
        out: &mut String,
        text: &str,
        pos: Vec2,
        style: &LabelStyle,
        default_anchor: TextAnchor,
    ) {
        let text_style = style.text.clone().unwrap_or_default();
        let text = match style.width {
            Some(width) => fit_to_width(&self.measurer, text, &text_style, width),
            None => text.into(),
        };
        if text.is_empty() {
            return;
        }
        let x = pos.x + style.dx.unwrap_or(0.0);
        let y = pos.y + style.dy.unwrap_or(0.0);
        let anchor = match style.text_anchor.unwrap_or(default_anchor) {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        };
        let _ = write!(
            out,
            r#"<text x="{x}" y="{y}" font-size="{}" font-family="{}" font-weight="{}" text-anchor="{anchor}" dominant-baseline="middle""#,
            text_style.font_size,
            text_style.font_family.as_css_family(),
            text_style.font_weight.0,
        );
        if let Some(angle) = style.angle.filter(|a| *a != 0.0) {
            let _ = write!(out, r#" transform="rotate({angle} {x} {y})""#);
        }
        let fill = style.fill.clone().unwrap_or_else(|| css::BLACK.into());
        write_paint_attr(out, "fill", &fill);
        out.push('>');
        out.push_str(&escape_xml(&text));
        out.push_str("</text>\n");
    }

    fn label_extent(&self, text: &str, style: Option<&LabelStyle>) -> f64 {
        let text_style: TextStyle = style.and_then(|s| s.text.clone()).unwrap_or_default();
        let metrics = self.measurer.measure(text, &text_style);
        let width = style
            .and_then(|s| s.width)
            .map_or(metrics.advance_width, |w| metrics.advance_width.min(w));
        width.max(metrics.line_height())
    }
}

impl<M: TextMeasurer> AxisRenderer for SvgAxisRenderer<M> {
    type Output = String;

    fn render(&mut self, axis: &ResolvedAxis) -> String {
        let orient = axis.orient;
        let (r0, r1) = axis.scale.range();
        let half_band = axis.scale.bandwidth() / 2.0;
        // Unit vector pointing away from the plot.
        let outward = match orient {
            AxisOrient::Top => Vec2::new(0.0, -1.0),
            AxisOrient::Bottom => Vec2::new(0.0, 1.0),
            AxisOrient::Left => Vec2::new(-1.0, 0.0),
            AxisOrient::Right => Vec2::new(1.0, 0.0),
        };
        let along = |p: f64| {
            if orient.is_vertical() {
                Vec2::new(0.0, p)
            } else {
                Vec2::new(p, 0.0)
            }
        };

        let mut out = String::new();
        let offset = axis.offset();
        let _ = writeln!(
            out,
            r#"<g class="axis axis-{orient}" transform="translate({} {})">"#,
            offset.x, offset.y
        );

        if !axis.hide_axis_line {
            let mut line = BezPath::new();
            line.move_to(along(r0).to_point());
            line.line_to(along(r1).to_point());
            let stroke = axis.stroke.clone().unwrap_or_else(|| css::BLACK.into());
            write_path(&mut out, &line, &stroke, axis.stroke_width.unwrap_or(1.0));
        }

        let values: Vec<f64> = match &axis.tick_values {
            Some(values) => values.clone(),
            None => axis
                .scale
                .ticks(axis.tick_count.unwrap_or(DEFAULT_TICK_COUNT))
                .into_vec(),
        };
        let tick_length = axis.tick_length.unwrap_or(DEFAULT_TICK_LENGTH);
        let tick_stroke = axis.tick_stroke.clone().unwrap_or_else(|| css::BLACK.into());
        let default_anchor = match orient {
            AxisOrient::Top | AxisOrient::Bottom => TextAnchor::Middle,
            AxisOrient::Left => TextAnchor::End,
            AxisOrient::Right => TextAnchor::Start,
        };

        let mut label_extent: f64 = 0.0;
        for (index, value) in values.iter().copied().enumerate() {
            if axis.hide_zero && value == 0.0 {
                continue;
            }
            let base = along(axis.scale.map(value) + half_band);
            let tip = base + outward * tick_length;
            if !axis.hide_ticks {
                let mut tick = BezPath::new();
                tick.move_to(base.to_point());
                tick.line_to(tip.to_point());
                write_path(&mut out, &tick, &tick_stroke, 1.0);
            }

            let text = match &axis.tick_format {
                Some(f) => f.format(value, index),
                None => format_tick(value),
            };
            let style = axis.tick_label_style(value, index);
            label_extent = label_extent.max(self.label_extent(&text, style.as_ref()));
            let pos = tip + outward * LABEL_GAP;
            self.write_label(
                &mut out,
                &text,
                pos,
                &style.unwrap_or_default(),
                default_anchor,
            );
        }

        if let Some(title) = &axis.label {
            let mid = along(0.5 * (r0 + r1));
            let distance = tick_length
                + LABEL_GAP
                + label_extent
                + axis.label_offset.unwrap_or(DEFAULT_LABEL_OFFSET);
            let style = axis.label_props.clone().unwrap_or_default();
            self.write_label(
                &mut out,
                title,
                mid + outward * distance,
                &style,
                TextAnchor::Middle,
            );
        }

        out.push_str("</g>\n");
        out
    }
}

/// Formats a tick value without a trailing `.0` for whole numbers.
fn format_tick(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.0}")
    } else {
        let s = format!("{value:.4}");
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

fn write_path(out: &mut String, path: &BezPath, stroke: &Brush, stroke_width: f64) {
    let _ = write!(out, r#"<path d="{}" fill="none""#, path.to_svg());
    write_paint_attr(out, "stroke", stroke);
    let _ = write!(out, r#" stroke-width="{stroke_width}""#);
    out.push_str("/>\n");
}

fn svg_paint(brush: &Brush) -> (String, Option<f64>) {
    match brush {
        Brush::Solid(color) => {
            let rgba = color.to_rgba8();
            let fill = format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b);
            let opacity = (rgba.a != 255).then(|| f64::from(rgba.a) / 255.0);
            (fill, opacity)
        }
        _ => ("none".to_string(), None),
    }
}

pub(crate) fn write_paint_attr(out: &mut String, name: &str, brush: &Brush) {
    let (value, opacity) = svg_paint(brush);
    let _ = write!(out, r#" {name}="{value}""#);
    if let Some(o) = opacity {
        let _ = write!(out, r#" {name}-opacity="{o}""#);
    }
}

pub(crate) fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axisctx::{AxisProps, ChartContext, ChartTheme, Margin, ScaleLinear, render_axis};
    use axisctx_text::HeuristicTextMeasurer;

    use super::*;

    fn ctx() -> ChartContext {
        ChartContext::new(ChartTheme::light())
            .with_x_scale(Arc::new(ScaleLinear::new((0.0, 10.0), (50.0, 450.0))))
            .with_y_scale(Arc::new(ScaleLinear::new((0.0, 10.0), (250.0, 20.0))))
            .with_margin(Margin::new(20.0, 40.0, 50.0, 50.0))
    }

    #[test]
    fn bottom_axis_is_translated_to_the_plot_bottom() {
        let mut r = SvgAxisRenderer::new(HeuristicTextMeasurer);
        let svg = render_axis(&AxisProps::bottom(), &ctx(), &mut r).unwrap();
        assert!(svg.starts_with(r#"<g class="axis axis-bottom" transform="translate(0 250)">"#));
        assert!(svg.contains(">10</text>"));
        assert!(svg.contains(r#"text-anchor="middle""#));
    }

    #[test]
    fn hidden_parts_are_not_emitted() {
        let mut r = SvgAxisRenderer::new(HeuristicTextMeasurer);
        let props = AxisProps::left()
            .with_axis_line(false)
            .with_ticks(false)
            .with_zero_tick(false);
        let svg = render_axis(&props, &ctx(), &mut r).unwrap();
        assert!(!svg.contains("<path"));
        assert!(!svg.contains(">0</text>"));
        assert!(svg.contains(">2</text>"));
    }

    #[test]
    fn long_tick_labels_are_truncated_to_the_margin() {
        let mut r = SvgAxisRenderer::new(HeuristicTextMeasurer);
        let props = AxisProps::left()
            .with_tick_values(vec![5.0])
            .with_tick_format(|_, _| "a very long category name".to_string());
        let svg = render_axis(&props, &ctx(), &mut r).unwrap();
        assert!(svg.contains('\u{2026}'));
        assert!(!svg.contains("a very long category name"));
    }

    #[test]
    fn axis_title_is_rendered_with_theme_style() {
        let mut r = SvgAxisRenderer::new(HeuristicTextMeasurer);
        let svg = render_axis(&AxisProps::left().with_label("Load"), &ctx(), &mut r).unwrap();
        assert!(svg.contains(">Load</text>"));
        assert!(svg.contains("rotate(-90"));
        assert!(svg.contains(r#"font-weight="700""#));
    }

    #[test]
    fn format_tick_trims_trailing_zeros() {
        assert_eq!(format_tick(2.0), "2");
        assert_eq!(format_tick(0.25), "0.25");
        assert_eq!(format_tick(-1.5), "-1.5");
    }
}
