//! Sidebar Widget
//! Player/season selection, data-source controls and status line.

use egui::{Color32, ComboBox, RichText};

/// Left side panel state.
pub struct Sidebar {
    pub players: Vec<String>,
    pub seasons: Vec<i32>,
    pub selected_player: String,
    pub selected_season: Option<i32>,
    pub status: String,
    pub data_ready: bool,
}

impl Default for Sidebar {
    fn default() -> Self {
        Self {
            players: Vec::new(),
            seasons: Vec::new(),
            selected_player: String::new(),
            selected_season: None,
            status: "Starting...".to_string(),
            data_ready: false,
        }
    }
}

/// Actions triggered by the sidebar.
#[derive(Debug, Clone, PartialEq)]
pub enum SidebarAction {
    None,
    PlayerChanged,
    SeasonChanged,
    OpenCsv,
    DownloadData,
    ExportPng,
}

impl Sidebar {
    pub fn set_status(&mut self, status: &str) {
        self.status = status.to_string();
    }

    /// Draw the sidebar.
    pub fn show(&mut self, ui: &mut egui::Ui) -> SidebarAction {
        let mut action = SidebarAction::None;

        ui.vertical_centered(|ui| {
            ui.add_space(5.0);
            ui.label(
                RichText::new("Pitch Tunneling")
                    .size(22.0)
                    .color(Color32::from_rgb(100, 149, 237)),
            );
            ui.label(
                RichText::new("Arsenal Interaction Effects")
                    .size(11.0)
                    .color(Color32::GRAY),
            );
        });
        ui.add_space(10.0);
        ui.separator();
        ui.add_space(5.0);

        // ===== Selection Section =====
        ui.label(RichText::new("Select Player").size(14.0).strong());
        ui.add_space(3.0);
        ComboBox::from_id_salt("player_select")
            .width(220.0)
            .selected_text(&self.selected_player)
            .show_ui(ui, |ui| {
                for player in &self.players {
                    if ui
                        .selectable_label(self.selected_player == *player, player)
                        .clicked()
                        && self.selected_player != *player
                    {
                        self.selected_player = player.clone();
                        action = SidebarAction::PlayerChanged;
                    }
                }
            });

        ui.add_space(10.0);

        ui.label(RichText::new("Select Game Year").size(14.0).strong());
        ui.add_space(3.0);
        let season_text = self
            .selected_season
            .map(|y| y.to_string())
            .unwrap_or_default();
        ComboBox::from_id_salt("season_select")
            .width(220.0)
            .selected_text(season_text)
            .show_ui(ui, |ui| {
                for &season in &self.seasons {
                    if ui
                        .selectable_label(self.selected_season == Some(season), season.to_string())
                        .clicked()
                        && self.selected_season != Some(season)
                    {
                        self.selected_season = Some(season);
                        action = SidebarAction::SeasonChanged;
                    }
                }
            });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Data Source Section =====
        ui.label(RichText::new("Data Source").size(14.0).strong());
        ui.add_space(5.0);

        if ui.button("Open Local CSV...").clicked() {
            action = SidebarAction::OpenCsv;
        }
        ui.add_space(3.0);
        if ui.button("Re-download Dataset").clicked() {
            action = SidebarAction::DownloadData;
        }

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Export Section =====
        ui.add_enabled_ui(self.data_ready, |ui| {
            if ui.button("Export Tunnel Ellipses PNG").clicked() {
                action = SidebarAction::ExportPng;
            }
        });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(5.0);

        let status_color = if self.status.contains("Error") {
            Color32::from_rgb(220, 53, 69)
        } else if self.data_ready {
            Color32::from_rgb(40, 167, 69)
        } else {
            Color32::GRAY
        };
        ui.label(RichText::new(&self.status).size(11.0).color(status_color));

        action
    }
}
