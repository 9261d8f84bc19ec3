// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! JSON theme files.
//!
//! The file mirrors [`ChartTheme`] with camelCase keys and CSS colour strings:
//!
//! ```json
//! {
//!   "xTickStyles": { "stroke": "#888", "tickLength": 4,
//!                    "label": { "bottom": { "fill": "#222", "fontSize": 11 } } },
//!   "yAxisStyles": { "stroke": "black", "strokeWidth": 1.5 }
//! }
//! ```

use std::path::Path;

use axisctx::{
    AxisStyles, ChartTheme, FontFamily, FontWeight, LabelStyle, OrientMap, TextAnchor, TextStyle,
    TickStyles,
};
use peniko::Brush;
use peniko::color::{Srgb, parse_color};
use serde::Deserialize;

use crate::DemoError;

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
struct ThemeFile {
    x_tick_styles: Option<TickStylesFile>,
    y_tick_styles: Option<TickStylesFile>,
    x_axis_styles: Option<AxisStylesFile>,
    y_axis_styles: Option<AxisStylesFile>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
struct TickStylesFile {
    stroke: Option<String>,
    stroke_width: Option<f64>,
    tick_length: Option<f64>,
    label: OrientMapFile<LabelFile>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
struct AxisStylesFile {
    stroke: Option<String>,
    stroke_width: Option<f64>,
    label: OrientMapFile<LabelFile>,
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct OrientMapFile<T> {
    top: Option<T>,
    bottom: Option<T>,
    left: Option<T>,
    right: Option<T>,
}

impl<T> Default for OrientMapFile<T> {
    fn default() -> Self {
        Self {
            top: None,
            bottom: None,
            left: None,
            right: None,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
struct LabelFile {
    fill: Option<String>,
    font_size: Option<f64>,
    font_family: Option<String>,
    font_weight: Option<u16>,
    text_anchor: Option<AnchorFile>,
    angle: Option<f64>,
    dx: Option<f64>,
    dy: Option<f64>,
    width: Option<f64>,
}

#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
enum AnchorFile {
    Start,
    Middle,
    End,
}

impl From<AnchorFile> for TextAnchor {
    fn from(value: AnchorFile) -> Self {
        match value {
            AnchorFile::Start => Self::Start,
            AnchorFile::Middle => Self::Middle,
            AnchorFile::End => Self::End,
        }
    }
}

/// Reads a theme from a JSON file.
pub(crate) fn load(path: &Path) -> Result<ChartTheme, DemoError> {
    let text = std::fs::read_to_string(path).map_err(|source| DemoError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let theme = parse(&text)?;
    log::info!("loaded theme from {}", path.display());
    Ok(theme)
}

/// Parses a theme from JSON text.
pub(crate) fn parse(text: &str) -> Result<ChartTheme, DemoError> {
    let file: ThemeFile = serde_json::from_str(text)?;
    Ok(ChartTheme {
        x_tick_styles: file.x_tick_styles.map(tick_styles).transpose()?,
        y_tick_styles: file.y_tick_styles.map(tick_styles).transpose()?,
        x_axis_styles: file.x_axis_styles.map(axis_styles).transpose()?,
        y_axis_styles: file.y_axis_styles.map(axis_styles).transpose()?,
    })
}

fn tick_styles(file: TickStylesFile) -> Result<TickStyles, DemoError> {
    Ok(TickStyles {
        stroke: file.stroke.as_deref().map(brush).transpose()?,
        stroke_width: file.stroke_width,
        tick_length: file.tick_length,
        label: labels(file.label)?,
    })
}

fn axis_styles(file: AxisStylesFile) -> Result<AxisStyles, DemoError> {
    Ok(AxisStyles {
        stroke: file.stroke.as_deref().map(brush).transpose()?,
        stroke_width: file.stroke_width,
        label: labels(file.label)?,
    })
}

fn labels(file: OrientMapFile<LabelFile>) -> Result<OrientMap<LabelStyle>, DemoError> {
    Ok(OrientMap {
        top: file.top.map(label).transpose()?,
        bottom: file.bottom.map(label).transpose()?,
        left: file.left.map(label).transpose()?,
        right: file.right.map(label).transpose()?,
    })
}

fn label(file: LabelFile) -> Result<LabelStyle, DemoError> {
    let has_font =
        file.font_size.is_some() || file.font_family.is_some() || file.font_weight.is_some();
    let text = has_font.then(|| {
        let mut style = TextStyle::default();
        if let Some(size) = file.font_size {
            style.font_size = size;
        }
        if let Some(family) = &file.font_family {
            style.font_family = FontFamily::from_css_family(family);
        }
        if let Some(weight) = file.font_weight {
            style.font_weight = FontWeight(weight);
        }
        style
    });
    Ok(LabelStyle {
        fill: file.fill.as_deref().map(brush).transpose()?,
        text,
        text_anchor: file.text_anchor.map(Into::into),
        angle: file.angle,
        dx: file.dx,
        dy: file.dy,
        width: file.width,
    })
}

fn brush(css: &str) -> Result<Brush, DemoError> {
    let color = parse_color(css).map_err(|err| DemoError::Color {
        value: css.to_string(),
        reason: format!("{err:?}"),
    })?;
    Ok(Brush::Solid(color.to_alpha_color::<Srgb>()))
}

#[cfg(test)]
mod tests {
    use axisctx::{AxisDim, AxisOrient};

    use super::*;

    #[test]
    fn empty_file_is_an_empty_theme() {
        assert_eq!(parse("{}").unwrap(), ChartTheme::default());
    }

    #[test]
    fn parses_groups_and_per_orient_labels() {
        let theme = parse(
            r##"{
                "xTickStyles": {
                    "stroke": "#ff0000",
                    "tickLength": 6,
                    "label": { "bottom": { "fill": "#000000", "fontSize": 9, "textAnchor": "middle" } }
                },
                "yAxisStyles": { "stroke": "#0000ff", "strokeWidth": 2 }
            }"##,
        )
        .unwrap();

        let x = theme.tick_styles(AxisDim::X).unwrap();
        let Some(Brush::Solid(stroke)) = &x.stroke else {
            panic!("expected a solid tick stroke");
        };
        let c = stroke.to_rgba8();
        assert_eq!((c.r, c.g, c.b, c.a), (255, 0, 0, 255));
        assert_eq!(x.tick_length, Some(6.0));
        let bottom = x.label.get(AxisOrient::Bottom).unwrap();
        assert_eq!(bottom.text_anchor, Some(TextAnchor::Middle));
        assert_eq!(bottom.text.as_ref().map(|t| t.font_size), Some(9.0));
        assert!(x.label.get(AxisOrient::Top).is_none());

        let y = theme.axis_styles(AxisDim::Y).unwrap();
        assert_eq!(y.stroke_width, Some(2.0));
        assert!(theme.tick_styles(AxisDim::Y).is_none());
    }

    #[test]
    fn invalid_colour_is_reported() {
        let err = parse(r#"{ "xAxisStyles": { "stroke": "not-a-colour" } }"#).unwrap_err();
        assert!(matches!(err, DemoError::Color { ref value, .. } if value == "not-a-colour"));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(matches!(
            parse(r#"{ "zTickStyles": {} }"#),
            Err(DemoError::Json(_))
        ));
    }
}
