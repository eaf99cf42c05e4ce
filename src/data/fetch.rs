//! Dataset Download Module
//! Fetches the tunneling CSV from its published URL and caches it on disk.

use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Published location of the precomputed tunneling dataset.
pub const DATA_URL: &str = "https://drive.google.com/uc?id=1U8wPV1QrhVTv0uebehMMFKHQTROFaXs1";

const CACHE_FILE: &str = "tunnel_data.csv";

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("No cache directory available on this platform")]
    NoCacheDir,
    #[error("Download failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Server returned status {0}")]
    BadStatus(reqwest::StatusCode),
}

/// Location of the cached dataset in the platform cache directory.
pub fn cache_path() -> Result<PathBuf, FetchError> {
    let dirs = ProjectDirs::from("", "", "tunnelview").ok_or(FetchError::NoCacheDir)?;
    Ok(dirs.cache_dir().join(CACHE_FILE))
}

/// Return the cached CSV path, downloading it first when absent.
pub fn fetch_dataset() -> Result<PathBuf, FetchError> {
    let path = cache_path()?;
    if path.exists() {
        log::info!("Using cached dataset at {}", path.display());
        return Ok(path);
    }
    download_to(&path)?;
    Ok(path)
}

/// Download a fresh copy, replacing any cached one.
pub fn refresh_dataset() -> Result<PathBuf, FetchError> {
    let path = cache_path()?;
    download_to(&path)?;
    Ok(path)
}

fn download_to(path: &Path) -> Result<(), FetchError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    log::info!("Downloading dataset from {}", DATA_URL);
    let response = reqwest::blocking::get(DATA_URL)?;
    if !response.status().is_success() {
        return Err(FetchError::BadStatus(response.status()));
    }

    let bytes = response.bytes()?;
    fs::write(path, &bytes)?;
    log::info!("Cached {} bytes at {}", bytes.len(), path.display());
    Ok(())
}
