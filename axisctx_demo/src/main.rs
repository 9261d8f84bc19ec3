// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Renders the four themed axes of a sample chart to SVG.

mod svg;
mod theme_file;

use std::fmt::Write as _;
use std::path::PathBuf;
use std::sync::Arc;

use axisctx::{
    AxisOrient, AxisProps, AxisResolver, ChartContext, ChartTheme, Margin, Scale, ScaleBand,
    ScaleLinear,
};
use axisctx_text::HeuristicTextMeasurer;
use clap::Parser;
use kurbo::Rect;
use peniko::{Brush, Color};

const CATEGORIES: [&str; 6] = ["north", "north-east", "east", "south", "west", "central"];

#[derive(Debug, Parser)]
#[command(about = "Render themed chart axes to an SVG file")]
struct Args {
    /// JSON theme file; the built-in light theme is used when omitted.
    #[arg(long)]
    theme: Option<PathBuf>,
    /// Output path.
    #[arg(long, default_value = "axisctx_demo.svg")]
    out: PathBuf,
    /// Chart width in pixels.
    #[arg(long, default_value_t = 640.0)]
    width: f64,
    /// Chart height in pixels.
    #[arg(long, default_value_t = 400.0)]
    height: f64,
    /// Use a categorical (band) x scale.
    #[arg(long)]
    band: bool,
    /// Orientations to draw (comma separated); all four when omitted.
    #[arg(long, value_delimiter = ',')]
    orient: Vec<AxisOrient>,
}

/// Errors surfaced by the demo binary.
#[derive(Debug, thiserror::Error)]
pub(crate) enum DemoError {
    /// A file could not be read.
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The output file could not be written.
    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// A theme file is not valid JSON or has unknown keys.
    #[error("invalid theme file")]
    Json(#[from] serde_json::Error),
    /// A theme colour could not be parsed.
    #[error("invalid colour `{value}`: {reason}")]
    Color { value: String, reason: String },
}

fn main() -> Result<(), DemoError> {
    env_logger::init();
    let args = Args::parse();

    let theme = match &args.theme {
        Some(path) => theme_file::load(path)?,
        None => ChartTheme::light(),
    };
    let margin = Margin::new(40.0, 70.0, 60.0, 70.0);
    let view = Rect::new(0.0, 0.0, args.width, args.height);
    let plot = Rect::new(
        view.x0 + margin.left,
        view.y0 + margin.top,
        view.x1 - margin.right,
        view.y1 - margin.bottom,
    );

    let x_scale: Arc<dyn Scale> = if args.band {
        Arc::new(ScaleBand::new((plot.x0, plot.x1), CATEGORIES.len()))
    } else {
        Arc::new(ScaleLinear::new((0.0, 117.0), (plot.x0, plot.x1)).nice(6))
    };
    let y_scale = Arc::new(ScaleLinear::new((-4.0, 38.5), (plot.y1, plot.y0)).nice(5));
    let ctx = ChartContext::new(theme)
        .with_x_scale(x_scale)
        .with_y_scale(y_scale)
        .with_margin(margin);

    let orients = if args.orient.is_empty() {
        AxisOrient::ALL.to_vec()
    } else {
        args.orient.clone()
    };
    let mut resolver = AxisResolver::new();
    let mut renderer = svg::SvgAxisRenderer::new(HeuristicTextMeasurer);

    let mut body = String::new();
    for orient in orients {
        let props = axis_props(orient, args.band);
        if let Some(fragment) = resolver.render(&props, &ctx, &mut renderer) {
            body.push_str(&fragment);
        }
    }

    let svg = document(view, plot, &body);
    std::fs::write(&args.out, svg).map_err(|source| DemoError::Write {
        path: args.out.clone(),
        source,
    })?;
    log::info!(
        "resolved axes: {} cache misses, {} hits",
        resolver.misses(),
        resolver.hits()
    );
    println!("wrote {}", args.out.display());
    Ok(())
}

fn axis_props(orient: AxisOrient, band: bool) -> AxisProps {
    let props = AxisProps::new(orient);
    match orient {
        AxisOrient::Bottom if band => props
            .with_label("Region")
            .with_tick_format(|v, _| category(v).to_string()),
        AxisOrient::Bottom => props.with_label("Elapsed (s)").with_tick_count(6),
        AxisOrient::Top if band => props
            .with_ticks(false)
            .with_tick_format(|_, i| format!("#{}", i + 1)),
        AxisOrient::Top => props
            .with_tick_count(6)
            .with_tick_format(|v, _| format!("{:.1}m", v / 60.0)),
        AxisOrient::Left => props.with_label("Temperature (°C)").with_tick_count(5),
        AxisOrient::Right => props
            .with_axis_line(false)
            .with_zero_tick(false)
            .with_tick_count(5)
            .with_tick_format(|v, _| format!("{:.0}°F", v * 9.0 / 5.0 + 32.0)),
    }
}

fn category(index: f64) -> &'static str {
    #[allow(
        clippy::cast_possible_truncation,
        reason = "band tick values are small non-negative indices"
    )]
    let i = index.max(0.0) as usize;
    CATEGORIES.get(i).copied().unwrap_or("?")
}

fn document(view: Rect, plot: Rect, body: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{} {} {} {}" width="{}" height="{}">"#,
        view.x0,
        view.y0,
        view.width(),
        view.height(),
        view.width(),
        view.height()
    );
    let _ = write!(
        out,
        r#"<rect x="{}" y="{}" width="{}" height="{}""#,
        plot.x0,
        plot.y0,
        plot.width(),
        plot.height()
    );
    let background = Brush::from(Color::from_rgb8(0xf4, 0xf4, 0xf4));
    svg::write_paint_attr(&mut out, "fill", &background);
    out.push_str("/>\n");
    out.push_str(body);
    out.push_str("</svg>\n");
    out
}
