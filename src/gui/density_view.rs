//! Kernel Density View
//! 2x2 grid comparing a pitch's release and approach angle distributions
//! against the rest of the arsenal. Curves are cached per selection.

use crate::charts::ChartPlotter;
use crate::data::filter::{self, Stand};
use crate::stats::arsenal;
use crate::stats::kde::{self, KdeCurve};
use egui::{ComboBox, RichText, Ui};
use polars::prelude::DataFrame;
use rayon::prelude::*;

/// Angle columns every density panel needs.
pub const ANGLE_COLUMNS: [&str; 4] = ["VRA", "HRA", "VAA", "HAA"];

const PANELS: [(&str, &str); 4] = [
    ("VRA", "Vertical Release Angle"),
    ("HRA", "Horizontal Release Angle"),
    ("VAA", "Vertical Approach Angle"),
    ("HAA", "Horizontal Approach Angle"),
];

const PANEL_HEIGHT: f32 = 260.0;

struct DensityPanel {
    title: &'static str,
    selected: KdeCurve,
    rest: KdeCurve,
}

/// Density tab state: pitch/stand selectors plus cached curves.
#[derive(Default)]
pub struct DensityView {
    pub selected_pitch: Option<String>,
    pub selected_stand: Stand,
    cache_key: Option<(String, i32, String, Stand)>,
    panels: Vec<DensityPanel>,
}

impl DensityView {
    /// Forget cached curves, e.g. after a dataset or player change.
    pub fn invalidate(&mut self) {
        self.cache_key = None;
        self.panels.clear();
        self.selected_pitch = None;
    }

    pub fn show(
        &mut self,
        ui: &mut Ui,
        df: &DataFrame,
        player: &str,
        player_display: &str,
        season: i32,
    ) {
        ui.vertical_centered(|ui| {
            ui.heading(format!("Density Plots for {player_display}"));
            ui.add_space(5.0);
            ui.label(
                RichText::new(
                    "These plots demonstrate the similarity between a pitch's angles \
                     out of the hand and at the plate compared to the rest of the arsenal",
                )
                .italics(),
            );
        });
        ui.add_space(10.0);

        let pitch_usage = filter::pitch_types_by_usage(df);
        if pitch_usage.is_empty() {
            ui.vertical_centered(|ui| {
                ui.label(format!("No data available for {player} in {season}."));
            });
            return;
        }

        // Keep the selection valid across player/season changes
        let valid = self
            .selected_pitch
            .as_ref()
            .is_some_and(|p| pitch_usage.iter().any(|(name, _)| name == p));
        if !valid {
            self.selected_pitch = Some(pitch_usage[0].0.clone());
        }
        let pitch = self.selected_pitch.clone().unwrap_or_default();

        ui.horizontal(|ui| {
            ui.label(RichText::new("Select a pitch type:").strong());
            ComboBox::from_id_salt("density_pitch")
                .width(100.0)
                .selected_text(&pitch)
                .show_ui(ui, |ui| {
                    for (name, _) in &pitch_usage {
                        if ui
                            .selectable_label(self.selected_pitch.as_deref() == Some(name.as_str()), name)
                            .clicked()
                        {
                            self.selected_pitch = Some(name.clone());
                        }
                    }
                });

            ui.add_space(25.0);

            ui.label(RichText::new("Select a stand:").strong());
            ComboBox::from_id_salt("density_stand")
                .width(80.0)
                .selected_text(self.selected_stand.label())
                .show_ui(ui, |ui| {
                    for stand in Stand::SELECTABLE {
                        if ui
                            .selectable_label(self.selected_stand == stand, stand.label())
                            .clicked()
                        {
                            self.selected_stand = stand;
                        }
                    }
                });
        });

        let pitch = self.selected_pitch.clone().unwrap_or_default();
        ui.add_space(8.0);
        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new(format!(
                    "{pitch} Release and Approach Angle KDEs vs. Rest of Arsenal"
                ))
                .size(16.0)
                .strong(),
            );
        });
        ui.add_space(8.0);

        let key = (
            player.to_string(),
            season,
            pitch.clone(),
            self.selected_stand,
        );
        if self.cache_key.as_ref() != Some(&key) {
            self.rebuild(df, &pitch, self.selected_stand);
            self.cache_key = Some(key);
        }

        // Two rows of two panels
        for row in self.panels.chunks(2) {
            ui.columns(2, |columns| {
                for (i, panel) in row.iter().enumerate() {
                    columns[i].vertical_centered(|ui| {
                        ui.label(RichText::new(panel.title).size(14.0).strong());
                    });
                    ChartPlotter::draw_kde_panel(
                        &mut columns[i],
                        &format!("kde_{}", panel.title),
                        &pitch,
                        &panel.selected,
                        &panel.rest,
                        PANEL_HEIGHT,
                    );
                }
            });
            ui.add_space(10.0);
        }
    }

    fn rebuild(&mut self, df: &DataFrame, pitch: &str, stand: Stand) {
        let subset = filter::by_stand(df, stand)
            .and_then(|side| filter::with_angles(&side, &ANGLE_COLUMNS));
        let Ok(subset) = subset else {
            self.panels.clear();
            return;
        };

        self.panels = PANELS
            .par_iter()
            .map(|(metric, title)| {
                let (selected, rest) = arsenal::split_by_pitch(&subset, metric, pitch);
                DensityPanel {
                    title,
                    selected: kde::gaussian_kde(&selected),
                    rest: kde::gaussian_kde(&rest),
                }
            })
            .collect();
    }
}
