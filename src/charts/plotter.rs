//! Chart Plotter Module
//! Interactive tunneling visuals built on egui_plot.

use crate::stats::{KdeCurve, PitchEllipse};
use egui::Color32;
use egui_plot::{Legend, Line, LineStyle, Plot, PlotPoints, Points};

/// Color of the selected pitch in the density plots.
pub const SELECTED_COLOR: Color32 = Color32::from_rgb(0, 0, 255);

/// Color of the rest-of-arsenal curve.
pub const REST_COLOR: Color32 = Color32::from_rgb(255, 0, 0);

const ELLIPSE_SEGMENTS: usize = 64;

/// Fixed per-pitch-type color palette. Unmapped codes are not plotted.
pub fn pitch_color(pitch: &str) -> Option<Color32> {
    match pitch {
        "FF" => Some(Color32::from_rgb(255, 0, 0)),     // red
        "SL" => Some(Color32::from_rgb(255, 165, 0)),   // orange
        "SI" => Some(Color32::from_rgb(255, 192, 203)), // pink
        "CH" => Some(Color32::from_rgb(128, 0, 128)),   // purple
        "FC" => Some(Color32::from_rgb(0, 0, 255)),     // blue
        "CU" => Some(Color32::from_rgb(144, 238, 144)), // light green
        "ST" => Some(Color32::from_rgb(165, 42, 42)),   // brown
        "FS" => Some(Color32::from_rgb(0, 0, 0)),       // black
        "KC" => Some(Color32::from_rgb(0, 100, 0)),     // dark green
        "SV" | "FO" | "KN" | "SC" => Some(Color32::from_rgb(255, 255, 0)), // yellow
        _ => None,
    }
}

/// Blue-white-red diverging gradient used for the metric table cells.
/// Values are clamped to [vmin, vmax].
pub fn gradient_color(value: f64, vmin: f64, vmax: f64) -> Color32 {
    if !value.is_finite() || vmax <= vmin {
        return Color32::WHITE;
    }
    let t = ((value - vmin) / (vmax - vmin)).clamp(0.0, 1.0);

    let lerp = |a: f64, b: f64, s: f64| (a + (b - a) * s).round() as u8;
    if t < 0.5 {
        // blue to white
        let s = t * 2.0;
        Color32::from_rgb(lerp(0.0, 255.0, s), lerp(0.0, 255.0, s), 255)
    } else {
        // white to red
        let s = (t - 0.5) * 2.0;
        Color32::from_rgb(255, lerp(255.0, 0.0, s), lerp(255.0, 0.0, s))
    }
}

/// Closed parametric outline of a 1σ ellipse centered on the mean.
pub fn ellipse_outline(cx: f64, cy: f64, std_x: f64, std_y: f64) -> Vec<[f64; 2]> {
    (0..=ELLIPSE_SEGMENTS)
        .map(|i| {
            let t = i as f64 / ELLIPSE_SEGMENTS as f64 * std::f64::consts::TAU;
            [cx + std_x * t.cos(), cy + std_y * t.sin()]
        })
        .collect()
}

/// Creates the tunneling visualizations using egui_plot.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Density comparison panel: selected pitch vs the rest of the arsenal.
    pub fn draw_kde_panel(
        ui: &mut egui::Ui,
        id: &str,
        pitch_label: &str,
        selected: &KdeCurve,
        rest: &KdeCurve,
        height: f32,
    ) {
        Plot::new(id.to_string())
            .height(height)
            .legend(Legend::default())
            .y_axis_label("Density")
            .allow_scroll(false)
            .show(ui, |plot_ui| {
                if !selected.is_empty() {
                    plot_ui.line(
                        Line::new(PlotPoints::from(selected.points()))
                            .color(SELECTED_COLOR)
                            .width(2.0)
                            .name(pitch_label),
                    );
                }
                if !rest.is_empty() {
                    plot_ui.line(
                        Line::new(PlotPoints::from(rest.points()))
                            .color(REST_COLOR)
                            .width(2.0)
                            .name("Rest of Arsenal"),
                    );
                }
            });
    }

    /// Ellipse panel for one batter side: hollow mean markers plus
    /// dashed 1σ outlines, one entry per pitch type in legend order.
    pub fn draw_ellipse_panel(
        ui: &mut egui::Ui,
        id: &str,
        ellipses: &[PitchEllipse],
        x_label: &str,
        y_label: &str,
        height: f32,
    ) {
        Plot::new(id.to_string())
            .height(height)
            .legend(Legend::default())
            .x_axis_label(x_label.to_string())
            .y_axis_label(y_label.to_string())
            .allow_scroll(false)
            .show(ui, |plot_ui| {
                for ellipse in ellipses {
                    let Some(color) = pitch_color(&ellipse.pitch_type) else {
                        continue;
                    };

                    plot_ui.points(
                        Points::new(PlotPoints::from(vec![[ellipse.mean_x, ellipse.mean_y]]))
                            .radius(5.0)
                            .filled(false)
                            .color(color)
                            .name(&ellipse.pitch_type),
                    );

                    let outline = ellipse_outline(
                        ellipse.mean_x,
                        ellipse.mean_y,
                        ellipse.std_x,
                        ellipse.std_y,
                    );
                    plot_ui.line(
                        Line::new(PlotPoints::from(outline))
                            .color(color)
                            .width(2.0)
                            .style(LineStyle::Dashed { length: 8.0 })
                            .name(&ellipse.pitch_type),
                    );
                }
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gradient_hits_the_anchor_colors() {
        assert_eq!(gradient_color(-1.5, -1.5, 1.5), Color32::from_rgb(0, 0, 255));
        assert_eq!(gradient_color(0.0, -1.5, 1.5), Color32::from_rgb(255, 255, 255));
        assert_eq!(gradient_color(1.5, -1.5, 1.5), Color32::from_rgb(255, 0, 0));
    }

    #[test]
    fn gradient_clamps_out_of_range_values() {
        assert_eq!(gradient_color(-99.0, -0.5, 0.5), gradient_color(-0.5, -0.5, 0.5));
        assert_eq!(gradient_color(99.0, -0.5, 0.5), gradient_color(0.5, -0.5, 0.5));
        assert_eq!(gradient_color(f64::NAN, -0.5, 0.5), Color32::WHITE);
    }

    #[test]
    fn fastball_is_red_and_unknown_codes_are_skipped() {
        assert_eq!(pitch_color("FF"), Some(Color32::from_rgb(255, 0, 0)));
        assert_eq!(pitch_color("EP"), None);
    }

    #[test]
    fn ellipse_outline_is_closed_and_on_the_ellipse() {
        let outline = ellipse_outline(1.0, -2.0, 2.0, 0.5);
        assert_eq!(outline.len(), 65);
        let (first, last) = (outline[0], outline[64]);
        assert!((first[0] - last[0]).abs() < 1e-9);
        assert!((first[1] - last[1]).abs() < 1e-9);

        for p in &outline {
            let dx = (p[0] - 1.0) / 2.0;
            let dy = (p[1] + 2.0) / 0.5;
            assert!((dx * dx + dy * dy - 1.0).abs() < 1e-9);
        }
    }
}
