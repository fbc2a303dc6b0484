use crate::models::{ChartView, FareSeries};
use std::fmt::Write;

const WIDTH: f64 = 700.0;
const HEIGHT: f64 = 400.0;
const PADDING_LEFT: f64 = 70.0;
const PADDING_RIGHT: f64 = 24.0;
const PADDING_TOP: f64 = 56.0;
const PADDING_BOTTOM: f64 = 64.0;
const LEGEND_GUTTER: f64 = 20.0;
const Y_TICKS: usize = 4;
const X_TICKS: usize = 5;

pub const X_AXIS_LABEL: &str = "Advance purchase (in days)";
pub const Y_AXIS_LABEL: &str = "Ticket price (in euros)";

struct Bounds {
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
}

impl Bounds {
    fn of(series: &[FareSeries]) -> Option<Self> {
        let mut points = series.iter().flat_map(|s| s.prices.iter());
        let first = points.next()?;
        let mut bounds = Bounds {
            x_min: first.advance_purchase as f64,
            x_max: first.advance_purchase as f64,
            y_min: first.price,
            y_max: first.price,
        };
        for point in points {
            bounds.x_min = bounds.x_min.min(point.advance_purchase as f64);
            bounds.x_max = bounds.x_max.max(point.advance_purchase as f64);
            bounds.y_min = bounds.y_min.min(point.price);
            bounds.y_max = bounds.y_max.max(point.price);
        }

        // Prices are plotted from zero so curves compare by height.
        bounds.y_min = bounds.y_min.min(0.0);
        bounds.y_max = bounds.y_max.max(0.0);
        if bounds.x_min == bounds.x_max {
            bounds.x_min -= 1.0;
            bounds.x_max += 1.0;
        }
        if bounds.y_min == bounds.y_max {
            bounds.y_max += 1.0;
        }
        Some(bounds)
    }

    fn x(&self, value: f64) -> f64 {
        let span = WIDTH - PADDING_LEFT - PADDING_RIGHT;
        PADDING_LEFT + (value - self.x_min) / (self.x_max - self.x_min) * span
    }

    fn y(&self, value: f64) -> f64 {
        let span = HEIGHT - PADDING_TOP - PADDING_BOTTOM;
        HEIGHT - PADDING_BOTTOM - (value - self.y_min) / (self.y_max - self.y_min) * span
    }
}

/// Renders the current view as a standalone SVG document.
pub fn render_chart_svg(view: &ChartView) -> String {
    let mut svg = String::new();
    let _ = write!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {WIDTH} {HEIGHT}" role="img" aria-label="Fare chart">"#
    );

    match Bounds::of(&view.series) {
        Some(bounds) => {
            render_legend(&mut svg, &view.series);
            render_axes(&mut svg, &bounds);
            for series in &view.series {
                render_series(&mut svg, &bounds, series);
            }
        }
        None => {
            let _ = write!(
                svg,
                r#"<text class="chart-label" x="50%" y="50%" text-anchor="middle">No data yet</text>"#
            );
        }
    }

    svg.push_str("</svg>");
    svg
}

fn render_legend(svg: &mut String, series: &[FareSeries]) {
    let mut x = PADDING_LEFT;
    let y = 24.0;
    svg.push_str(r#"<g class="chart-legend">"#);
    for s in series {
        let name = escape_xml(&s.airline);
        let _ = write!(
            svg,
            r#"<rect x="{x:.1}" y="{:.1}" width="12" height="12" fill="{color}" /><text class="chart-label" x="{:.1}" y="{y:.1}">{name}</text>"#,
            y - 10.0,
            x + 16.0,
            color = s.line_color,
        );
        x += 16.0 + 8.0 * s.airline.chars().count() as f64 + LEGEND_GUTTER;
    }
    svg.push_str("</g>");
}

fn render_axes(svg: &mut String, bounds: &Bounds) {
    let left = PADDING_LEFT;
    let right = WIDTH - PADDING_RIGHT;
    let bottom = HEIGHT - PADDING_BOTTOM;

    for i in 0..=Y_TICKS {
        let value = bounds.y_min + (bounds.y_max - bounds.y_min) * i as f64 / Y_TICKS as f64;
        let y = bounds.y(value);
        let _ = write!(
            svg,
            r#"<line class="chart-grid" x1="{left}" y1="{y:.2}" x2="{right}" y2="{y:.2}" /><text class="chart-label" x="{:.1}" y="{:.2}" text-anchor="end">{}</text>"#,
            left - 8.0,
            y + 4.0,
            format_axis_value(value),
        );
    }

    for i in 0..=X_TICKS {
        let value = bounds.x_min + (bounds.x_max - bounds.x_min) * i as f64 / X_TICKS as f64;
        let x = bounds.x(value);
        let _ = write!(
            svg,
            r#"<text class="chart-label" x="{x:.2}" y="{:.1}" text-anchor="middle">{}</text>"#,
            bottom + 18.0,
            format_axis_value(value),
        );
    }

    let _ = write!(
        svg,
        r#"<line class="chart-axis" x1="{left}" y1="{bottom}" x2="{right}" y2="{bottom}" /><line class="chart-axis" x1="{left}" y1="{PADDING_TOP}" x2="{left}" y2="{bottom}" />"#
    );
    let _ = write!(
        svg,
        r#"<text class="axis-label" x="{:.1}" y="{:.1}" text-anchor="middle">{X_AXIS_LABEL}</text>"#,
        (left + right) / 2.0,
        HEIGHT - 16.0,
    );
    let _ = write!(
        svg,
        r#"<text class="axis-label" x="{:.1}" y="18" text-anchor="middle" transform="rotate(-90)">{Y_AXIS_LABEL}</text>"#,
        -(PADDING_TOP + bottom) / 2.0,
    );
}

fn render_series(svg: &mut String, bounds: &Bounds, series: &FareSeries) {
    let points: Vec<String> = series
        .prices
        .iter()
        .map(|p| {
            format!(
                "{:.2},{:.2}",
                bounds.x(p.advance_purchase as f64),
                bounds.y(p.price)
            )
        })
        .collect();

    let _ = write!(
        svg,
        r#"<g class="chart-series" data-airline="{}"><polyline fill="none" stroke="{}" stroke-width="2" points="{}" />"#,
        escape_xml(&series.airline),
        series.line_color,
        points.join(" "),
    );
    for p in &series.prices {
        let _ = write!(
            svg,
            r#"<circle cx="{:.2}" cy="{:.2}" r="3" fill="{}" />"#,
            bounds.x(p.advance_purchase as f64),
            bounds.y(p.price),
            series.line_color,
        );
    }
    svg.push_str("</g>");
}

fn format_axis_value(value: f64) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 {
        format!("{rounded:.0}")
    } else {
        format!("{rounded:.1}")
    }
}

pub fn escape_xml(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
