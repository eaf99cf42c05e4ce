//! GUI module - User interface components

mod app;
mod density_view;
mod metrics_view;
mod research_view;
mod sidebar;
mod tunnels_view;

pub use app::TunnelApp;
