//! Static Chart Renderer
//! Renders the tunnel ellipse figures to PNG via plotters for export.

use crate::charts::plotter::{ellipse_outline, pitch_color};
use crate::stats::PitchEllipse;
use anyhow::{anyhow, Result};
use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use std::error::Error;
use std::path::Path;

/// One exported chart panel.
pub struct EllipsePanel {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub ellipses: Vec<PitchEllipse>,
}

/// Renders ellipse figures as static PNG images.
pub struct StaticChartRenderer;

impl StaticChartRenderer {
    /// Render the panels to one PNG file, two panels per row.
    pub fn render_panels(
        path: &Path,
        title: &str,
        panels: &[EllipsePanel],
        width: u32,
        height: u32,
    ) -> Result<()> {
        if panels.is_empty() {
            return Err(anyhow!("Nothing to export"));
        }
        Self::draw(path, title, panels, width, height)
            .map_err(|e| anyhow!("PNG export failed: {e}"))
    }

    fn draw(
        path: &Path,
        title: &str,
        panels: &[EllipsePanel],
        width: u32,
        height: u32,
    ) -> std::result::Result<(), Box<dyn Error>> {
        let root = BitMapBackend::new(path, (width, height)).into_drawing_area();
        root.fill(&WHITE)?;
        let root = root.titled(title, ("sans-serif", 30))?;

        let columns = 2usize;
        let rows = panels.len().div_ceil(columns);
        let areas = root.split_evenly((rows, columns));

        for (area, panel) in areas.iter().zip(panels) {
            let (x_range, y_range) = panel_bounds(&panel.ellipses);

            let mut chart = ChartBuilder::on(area)
                .caption(&panel.title, ("sans-serif", 22))
                .margin(10)
                .x_label_area_size(45)
                .y_label_area_size(55)
                .build_cartesian_2d(x_range, y_range)?;

            chart
                .configure_mesh()
                .x_desc(panel.x_label.clone())
                .y_desc(panel.y_label.clone())
                .draw()?;

            for ellipse in &panel.ellipses {
                let Some(color) = pitch_color(&ellipse.pitch_type) else {
                    continue;
                };
                let color = RGBColor(color.r(), color.g(), color.b());

                let outline = ellipse_outline(
                    ellipse.mean_x,
                    ellipse.mean_y,
                    ellipse.std_x,
                    ellipse.std_y,
                );
                chart
                    .draw_series(DashedLineSeries::new(
                        outline.into_iter().map(|p| (p[0], p[1])),
                        8,
                        4,
                        color.stroke_width(2),
                    ))?
                    .label(ellipse.pitch_type.clone())
                    .legend(move |(x, y)| Circle::new((x, y), 4, color.stroke_width(2)));

                chart.draw_series(std::iter::once(Circle::new(
                    (ellipse.mean_x, ellipse.mean_y),
                    5,
                    color.stroke_width(2),
                )))?;
            }

            chart
                .configure_series_labels()
                .border_style(&BLACK)
                .background_style(&WHITE.mix(0.85))
                .draw()?;
        }

        root.present()?;
        Ok(())
    }
}

/// Axis ranges covering every ellipse plus a margin.
fn panel_bounds(ellipses: &[PitchEllipse]) -> (std::ops::Range<f64>, std::ops::Range<f64>) {
    let mut x_lo = f64::INFINITY;
    let mut x_hi = f64::NEG_INFINITY;
    let mut y_lo = f64::INFINITY;
    let mut y_hi = f64::NEG_INFINITY;

    for e in ellipses {
        x_lo = x_lo.min(e.mean_x - e.std_x);
        x_hi = x_hi.max(e.mean_x + e.std_x);
        y_lo = y_lo.min(e.mean_y - e.std_y);
        y_hi = y_hi.max(e.mean_y + e.std_y);
    }

    if !x_lo.is_finite() || !y_lo.is_finite() {
        return (0.0..1.0, 0.0..1.0);
    }

    let x_pad = ((x_hi - x_lo) * 0.15).max(0.25);
    let y_pad = ((y_hi - y_lo) * 0.15).max(0.25);
    (x_lo - x_pad..x_hi + x_pad, y_lo - y_pad..y_hi + y_pad)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_cover_all_ellipses_with_margin() {
        let ellipses = vec![
            PitchEllipse {
                pitch_type: "FF".to_string(),
                usage: 0.6,
                mean_x: 1.0,
                mean_y: -2.0,
                std_x: 0.5,
                std_y: 0.5,
            },
            PitchEllipse {
                pitch_type: "SL".to_string(),
                usage: 0.4,
                mean_x: 3.0,
                mean_y: -5.0,
                std_x: 1.0,
                std_y: 1.0,
            },
        ];

        let (x, y) = panel_bounds(&ellipses);
        assert!(x.start < 0.5 && x.end > 4.0);
        assert!(y.start < -6.0 && y.end > -1.5);
    }

    #[test]
    fn empty_panel_gets_default_bounds() {
        let (x, y) = panel_bounds(&[]);
        assert_eq!(x, 0.0..1.0);
        assert_eq!(y, 0.0..1.0);
    }
}
