//! Tunnelview Main Application
//! Sidebar with player/season selection plus the tabbed analysis views.

use crate::charts::{EllipsePanel, StaticChartRenderer};
use crate::config::Settings;
use crate::data::filter::{self, Stand};
use crate::data::{fetch, PitchData};
use crate::gui::density_view::DensityView;
use crate::gui::sidebar::{Sidebar, SidebarAction};
use crate::gui::{metrics_view, research_view, tunnels_view};
use crate::stats::arsenal;
use egui::SidePanel;
use polars::prelude::DataFrame;
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver};
use std::thread;

/// Dataset loading result from the background thread.
enum LoadResult {
    Progress(String),
    Complete(Box<PitchData>),
    Error(String),
}

/// Where the background thread should get the CSV from.
enum LoadRequest {
    /// Saved local path if any, otherwise the cached download.
    Auto(Option<PathBuf>),
    ForceDownload,
    Local(PathBuf),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Metrics,
    Densities,
    Tunnels,
    Research,
}

impl Tab {
    const ALL: [Tab; 4] = [Tab::Metrics, Tab::Densities, Tab::Tunnels, Tab::Research];

    fn label(&self) -> &'static str {
        match self {
            Tab::Metrics => "Tunneling Metrics",
            Tab::Densities => "Kernel Density Plots",
            Tab::Tunnels => "Tunnel Ellipses Plots",
            Tab::Research => "Research & Methodology",
        }
    }
}

/// Flip "Last, First" to "First Last" for headings.
pub fn display_name(player: &str) -> String {
    let mut parts: Vec<&str> = player.split(", ").collect();
    parts.reverse();
    parts.join(" ")
}

/// Main application window.
pub struct TunnelApp {
    data: Option<PitchData>,
    settings: Settings,
    sidebar: Sidebar,
    tab: Tab,
    density: DensityView,

    load_rx: Option<Receiver<LoadResult>>,
    is_loading: bool,
}

impl TunnelApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let settings = Settings::load();
        let mut app = Self {
            data: None,
            sidebar: Sidebar::default(),
            tab: Tab::Metrics,
            density: DensityView::default(),
            load_rx: None,
            is_loading: false,
            settings,
        };
        let saved = app.settings.csv_path.clone();
        app.start_load(LoadRequest::Auto(saved));
        app
    }

    /// Fetch and parse the dataset on a background thread.
    fn start_load(&mut self, request: LoadRequest) {
        if self.is_loading {
            return;
        }
        self.is_loading = true;
        self.sidebar.set_status("Loading dataset...");

        let (tx, rx) = channel();
        self.load_rx = Some(rx);

        thread::spawn(move || {
            let path = match request {
                LoadRequest::Local(path) => path,
                LoadRequest::Auto(Some(path)) if path.exists() => path,
                LoadRequest::Auto(_) => {
                    let _ = tx.send(LoadResult::Progress("Fetching dataset...".to_string()));
                    match fetch::fetch_dataset() {
                        Ok(path) => path,
                        Err(e) => {
                            let _ = tx.send(LoadResult::Error(e.to_string()));
                            return;
                        }
                    }
                }
                LoadRequest::ForceDownload => {
                    let _ = tx.send(LoadResult::Progress("Downloading dataset...".to_string()));
                    match fetch::refresh_dataset() {
                        Ok(path) => path,
                        Err(e) => {
                            let _ = tx.send(LoadResult::Error(e.to_string()));
                            return;
                        }
                    }
                }
            };

            let _ = tx.send(LoadResult::Progress("Parsing CSV...".to_string()));
            match PitchData::load_csv(&path.to_string_lossy()) {
                Ok(data) => {
                    let _ = tx.send(LoadResult::Complete(Box::new(data)));
                }
                Err(e) => {
                    let _ = tx.send(LoadResult::Error(e.to_string()));
                }
            }
        });
    }

    /// Poll the loader channel without blocking the frame.
    fn check_load_results(&mut self) {
        let rx = self.load_rx.take();
        if let Some(rx) = rx {
            let mut keep_receiver = true;

            while let Ok(result) = rx.try_recv() {
                match result {
                    LoadResult::Progress(status) => {
                        self.sidebar.set_status(&status);
                    }
                    LoadResult::Complete(data) => {
                        self.on_data_loaded(*data);
                        self.is_loading = false;
                        keep_receiver = false;
                    }
                    LoadResult::Error(error) => {
                        self.sidebar.set_status(&format!("Error: {error}"));
                        self.is_loading = false;
                        keep_receiver = false;
                    }
                }
            }

            if keep_receiver {
                self.load_rx = Some(rx);
            }
        }
    }

    fn on_data_loaded(&mut self, data: PitchData) {
        self.sidebar.players = data.player_names();
        self.sidebar.data_ready = true;
        self.sidebar
            .set_status(&format!("Loaded {} pitches", data.row_count()));

        // Restore the saved player if the dataset still has them
        let saved = self.settings.last_player.clone();
        self.sidebar.selected_player = if self.sidebar.players.iter().any(|p| *p == saved) {
            saved
        } else {
            self.sidebar.players.first().cloned().unwrap_or_default()
        };

        self.sidebar.seasons = data.seasons_for(&self.sidebar.selected_player);
        let saved_season = self.settings.last_season;
        self.sidebar.selected_season = saved_season
            .filter(|y| self.sidebar.seasons.contains(y))
            .or_else(|| self.sidebar.seasons.first().copied());

        self.density.invalidate();
        self.data = Some(data);
    }

    fn on_player_changed(&mut self) {
        if let Some(data) = &self.data {
            self.sidebar.seasons = data.seasons_for(&self.sidebar.selected_player);
            self.sidebar.selected_season = self.sidebar.seasons.first().copied();
        }
        self.density.invalidate();
        self.persist_selection();
    }

    fn persist_selection(&mut self) {
        self.settings.last_player = self.sidebar.selected_player.clone();
        self.settings.last_season = self.sidebar.selected_season;
        self.settings.save();
    }

    /// Rows for the current player/season selection.
    fn current_slice(&self) -> Option<DataFrame> {
        let data = self.data.as_ref()?;
        let season = self.sidebar.selected_season?;
        filter::player_season(data.dataframe(), &self.sidebar.selected_player, season).ok()
    }

    fn handle_open_csv(&mut self) {
        if self.is_loading {
            return;
        }
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("CSV Files", &["csv"])
            .pick_file()
        {
            self.settings.csv_path = Some(path.clone());
            self.settings.save();
            self.start_load(LoadRequest::Local(path));
        }
    }

    fn handle_download(&mut self) {
        if self.is_loading {
            return;
        }
        self.settings.csv_path = None;
        self.settings.save();
        self.start_load(LoadRequest::ForceDownload);
    }

    /// Export the four ellipse panels (release/plate x LHH/RHH) to one PNG.
    fn handle_export_png(&mut self) {
        let Some(df) = self.current_slice() else {
            self.sidebar.set_status("No data to export");
            return;
        };
        let Some(path) = rfd::FileDialog::new()
            .add_filter("PNG image", &["png"])
            .set_file_name("tunnel_ellipses.png")
            .save_file()
        else {
            return;
        };

        let mut panels = Vec::new();
        for (heading, x_metric, y_metric, x_label, y_label) in tunnels_view::FIGURES {
            for (stand, side) in [(Stand::Left, "vs. LHH"), (Stand::Right, "vs. RHH")] {
                let ellipses = filter::by_stand(&df, stand)
                    .and_then(|side_df| filter::with_angles(&side_df, &[x_metric, y_metric]))
                    .map(|clean| arsenal::ellipse_stats(&clean, x_metric, y_metric))
                    .unwrap_or_default();
                panels.push(EllipsePanel {
                    title: format!("{heading} {side}"),
                    x_label: x_label.to_string(),
                    y_label: y_label.to_string(),
                    ellipses,
                });
            }
        }

        let title = format!(
            "Tunnel Ellipses: {}",
            display_name(&self.sidebar.selected_player)
        );
        match StaticChartRenderer::render_panels(&path, &title, &panels, 1600, 1200) {
            Ok(()) => {
                log::info!("Exported tunnel ellipses to {}", path.display());
                self.sidebar
                    .set_status(&format!("Exported {}", path.display()));
            }
            Err(e) => {
                self.sidebar.set_status(&format!("Error: {e}"));
            }
        }
    }
}

impl eframe::App for TunnelApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.check_load_results();

        if self.is_loading {
            ctx.request_repaint();
        }

        SidePanel::left("sidebar")
            .min_width(250.0)
            .max_width(300.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    let action = self.sidebar.show(ui);
                    match action {
                        SidebarAction::PlayerChanged => self.on_player_changed(),
                        SidebarAction::SeasonChanged => {
                            self.density.invalidate();
                            self.persist_selection();
                        }
                        SidebarAction::OpenCsv => self.handle_open_csv(),
                        SidebarAction::DownloadData => self.handle_download(),
                        SidebarAction::ExportPng => self.handle_export_png(),
                        SidebarAction::None => {}
                    }
                });
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                for tab in Tab::ALL {
                    if ui
                        .selectable_label(self.tab == tab, tab.label())
                        .clicked()
                    {
                        self.tab = tab;
                    }
                }
            });
            ui.separator();

            if self.tab == Tab::Research {
                egui::ScrollArea::vertical().show(ui, |ui| research_view::show(ui));
                return;
            }

            let Some(df) = self.current_slice() else {
                ui.centered_and_justified(|ui| {
                    ui.label(if self.is_loading {
                        "Loading dataset..."
                    } else {
                        "No data loaded"
                    });
                });
                return;
            };
            let player = self.sidebar.selected_player.clone();
            let display = display_name(&player);
            let season = self.sidebar.selected_season.unwrap_or_default();

            egui::ScrollArea::vertical().show(ui, |ui| match self.tab {
                Tab::Metrics => metrics_view::show(ui, &df, &player, &display, season),
                Tab::Densities => self.density.show(ui, &df, &player, &display, season),
                Tab::Tunnels => tunnels_view::show(ui, &df, &player, &display, season),
                Tab::Research => {}
            });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_flips_last_first() {
        assert_eq!(display_name("Skenes, Paul"), "Paul Skenes");
        assert_eq!(display_name("Webb, Logan"), "Logan Webb");
    }

    #[test]
    fn display_name_leaves_single_tokens_alone() {
        assert_eq!(display_name("Ichiro"), "Ichiro");
    }
}
