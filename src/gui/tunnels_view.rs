//! Tunnel Ellipses View
//! Mean and 1σ ellipse scatterplots per pitch type, split by batter side,
//! at release and at the plate.

use crate::charts::ChartPlotter;
use crate::data::filter::{self, Stand};
use crate::stats::arsenal;
use egui::{RichText, Ui};
use polars::prelude::DataFrame;

const PANEL_HEIGHT: f32 = 320.0;

/// The two figures: (heading, x metric, y metric, x label, y label).
pub const FIGURES: [(&str, &str, &str, &str, &str); 2] = [
    (
        "Tunnels at Release (1 StDev Ellipses)",
        "HRA",
        "VRA",
        "Horizontal Release Angle",
        "Vertical Release Angle",
    ),
    (
        "Tunnels at Home Plate (1 StDev Ellipses)",
        "HAA",
        "VAA",
        "Horizontal Approach Angle",
        "Vertical Approach Angle",
    ),
];

pub fn show(ui: &mut Ui, df: &DataFrame, player: &str, player_display: &str, season: i32) {
    ui.vertical_centered(|ui| {
        ui.heading(format!("Tunneling Plots for {player_display}"));
        ui.add_space(5.0);
        ui.label(
            RichText::new(
                "These plots illustrate the \"tunnel\" each pitch takes out of the hand \
                 compared to their separation at the plate",
            )
            .italics(),
        );
    });
    ui.add_space(10.0);

    if df.height() == 0 {
        ui.vertical_centered(|ui| {
            ui.label(format!("No data available for {player} in {season}."));
        });
        return;
    }

    for (heading, x_metric, y_metric, x_label, y_label) in FIGURES {
        ui.vertical_centered(|ui| {
            ui.label(RichText::new(heading).size(16.0).strong());
        });
        ui.add_space(5.0);
        figure(ui, df, x_metric, y_metric, x_label, y_label);
        ui.add_space(15.0);
    }
}

fn figure(ui: &mut Ui, df: &DataFrame, x_metric: &str, y_metric: &str, x_label: &str, y_label: &str) {
    ui.columns(2, |columns| {
        for (i, (stand, side)) in [(Stand::Left, "vs. LHH"), (Stand::Right, "vs. RHH")]
            .into_iter()
            .enumerate()
        {
            let ellipses = filter::by_stand(df, stand)
                .and_then(|side_df| filter::with_angles(&side_df, &[x_metric, y_metric]))
                .map(|clean| arsenal::ellipse_stats(&clean, x_metric, y_metric))
                .unwrap_or_default();

            columns[i].vertical_centered(|ui| {
                ui.label(RichText::new(side).size(14.0).strong());
            });
            ChartPlotter::draw_ellipse_panel(
                &mut columns[i],
                &format!("tunnel_{x_metric}_{y_metric}_{side}"),
                &ellipses,
                x_label,
                y_label,
                PANEL_HEIGHT,
            );
        }
    });
}
