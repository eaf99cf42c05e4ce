//! Data module - dataset download, CSV loading and slicing

pub mod fetch;
pub mod filter;
mod loader;

pub use loader::{LoaderError, PitchData};
