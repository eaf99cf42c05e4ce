//! Tunneling Metrics View
//! Per-pitch-type summary tables (All / vs LHH / vs RHH) with
//! gradient-shaded metric cells and the glossary.

use crate::charts::plotter::gradient_color;
use crate::data::filter::{self, Stand};
use crate::stats::arsenal::{self, PitchSummary};
use egui::{Color32, Grid, RichText, Ui};
use polars::prelude::DataFrame;

/// Gradient range for Tunnel Boost and Y Tunnel.
const BOOST_RANGE: (f64, f64) = (-1.5, 1.5);
/// Gradient range for X, Z and Shape Tunnel.
const PLANE_RANGE: (f64, f64) = (-0.5, 0.5);

pub fn show(ui: &mut Ui, df: &DataFrame, player: &str, player_display: &str, season: i32) {
    ui.vertical_centered(|ui| {
        ui.heading(format!("Tunneling Metrics for {player_display}"));
        ui.add_space(5.0);
        ui.label(
            RichText::new(
                "How much does the pitch's xRV/100 increase when factoring in \
                 arsenal interaction effects?",
            )
            .italics(),
        );
    });
    ui.add_space(10.0);

    if df.height() == 0 {
        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new(format!("No data available for {player} in {season}."))
                    .color(Color32::from_rgb(255, 193, 7))
                    .size(16.0),
            );
        });
        return;
    }

    section(ui, "All Hitters", "metrics_all", &arsenal::summarize(df));

    for (stand, title, id) in [
        (Stand::Left, "Left-Handed Hitters", "metrics_lhh"),
        (Stand::Right, "Right-Handed Hitters", "metrics_rhh"),
    ] {
        if let Ok(stand_df) = filter::by_stand(df, stand) {
            section(ui, title, id, &arsenal::summarize(&stand_df));
        }
    }

    ui.add_space(15.0);
    ui.collapsing("Glossary", |ui| {
        glossary_entry(ui, "Tunnel Boost", "xRV/100 increase from arsenal interaction effects in all three dimensions.");
        glossary_entry(ui, "X Tunnel", "xRV/100 increase from arsenal interaction effects on the x plane.");
        glossary_entry(ui, "Y Tunnel", "xRV/100 increase from arsenal interaction effects on the y plane.");
        glossary_entry(ui, "Z Tunnel", "xRV/100 increase from arsenal interaction effects on the z plane.");
        glossary_entry(ui, "Shape Tunnel", "xRV/100 increase from arsenal interaction effects on the x and z planes, ignoring the y plane.");
    });
}

fn glossary_entry(ui: &mut Ui, term: &str, text: &str) {
    ui.horizontal_wrapped(|ui| {
        ui.label(RichText::new(format!("{term}:")).strong());
        ui.label(text);
    });
}

fn section(ui: &mut Ui, title: &str, id: &str, rows: &[PitchSummary]) {
    ui.add_space(10.0);
    ui.vertical_centered(|ui| {
        ui.label(RichText::new(title).size(16.0).strong());
    });
    ui.add_space(5.0);

    if rows.is_empty() {
        ui.vertical_centered(|ui| {
            ui.label(RichText::new("No pitches").color(Color32::GRAY));
        });
        return;
    }

    ui.vertical_centered(|ui| {
        metrics_table(ui, id, rows);
    });
}

fn metrics_table(ui: &mut Ui, id: &str, rows: &[PitchSummary]) {
    Grid::new(id.to_string())
        .min_col_width(80.0)
        .spacing([10.0, 4.0])
        .show(ui, |ui| {
            for header in [
                "Pitch Type",
                "Usage%",
                "Tunnel Boost",
                "X Tunnel",
                "Y Tunnel",
                "Z Tunnel",
                "Shape Tunnel",
            ] {
                ui.label(RichText::new(header).strong().size(13.0));
            }
            ui.end_row();

            for row in rows {
                ui.label(RichText::new(&row.pitch_type).size(13.0));
                ui.label(RichText::new(format!("{:.1}", row.usage_pct)).size(13.0));

                metric_cell(ui, row.tunnel_boost, BOOST_RANGE);
                metric_cell(ui, row.x_tunnel, PLANE_RANGE);
                metric_cell(ui, row.y_tunnel, BOOST_RANGE);
                metric_cell(ui, row.z_tunnel, PLANE_RANGE);
                metric_cell(ui, row.shape_tunnel, PLANE_RANGE);
                ui.end_row();
            }
        });
}

fn metric_cell(ui: &mut Ui, value: f64, range: (f64, f64)) {
    if value.is_finite() {
        ui.label(
            RichText::new(format!("{value:.2}"))
                .size(13.0)
                .color(Color32::BLACK)
                .background_color(gradient_color(value, range.0, range.1)),
        );
    } else {
        ui.label(RichText::new("-").size(13.0));
    }
}
