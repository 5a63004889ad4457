use textplots::{Chart, Plot, Shape};

pub fn line_terminal(
    points: &[(f64, f64)],
    title: &str,
    x_label: &str,
    y_label: &str,
) -> String {
    if points.is_empty() {
        return format!("{title}\n  (no data)\n");
    }
    let f32_pts = to_f32_points(points);
    let (xmin, xmax) = f32_extent(f32_pts.iter().map(|p| p.0));
    let chart_body = render_chart(&f32_pts, xmin, xmax);
    format!("{title}\n  {y_label} vs {x_label}\n{chart_body}")
}

fn render_chart(pts: &[(f32, f32)], xmin: f32, xmax: f32) -> String {
    let shape = Shape::Lines(pts);
    let mut chart = Chart::new(80, 24, xmin, xmax);
    let rendered = chart.lineplot(&shape);
    rendered.axis();
    rendered.figures();
    format!("{rendered}")
}

fn to_f32_points(points: &[(f64, f64)]) -> Vec<(f32, f32)> {
    points.iter().map(|&(x, y)| (x as f32, y as f32)).collect()
}

fn f32_extent(iter: impl Iterator<Item = f32>) -> (f32, f32) {
    let (lo, hi) = iter.fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    if (hi - lo).abs() < 1e-6 {
        (lo - 1.0, hi + 1.0)
    } else {
        (lo, hi)
    }
}
