//! Statistics module - kernel density estimation and arsenal aggregation

pub mod arsenal;
pub mod kde;

pub use arsenal::{PitchEllipse, PitchSummary};
pub use kde::KdeCurve;
