//! Charts module - interactive plotting and static export

pub mod plotter;
pub mod renderer;

pub use plotter::ChartPlotter;
pub use renderer::{EllipsePanel, StaticChartRenderer};
