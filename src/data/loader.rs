//! CSV Data Loader Module
//! Loads the tunneling dataset and exposes player/season lookups using Polars.

use polars::prelude::*;
use std::path::PathBuf;
use thiserror::Error;

/// Columns every tunneling export must carry.
pub const REQUIRED_COLUMNS: [&str; 13] = [
    "player_name",
    "game_year",
    "pitch_type",
    "stand",
    "VRA",
    "HRA",
    "VAA",
    "HAA",
    "tunnel_boost",
    "x_tunnel",
    "y_tunnel",
    "z_tunnel",
    "shape_tunnel",
];

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Failed to load CSV: {0}")]
    Csv(#[from] PolarsError),
    #[error("Missing required column '{0}'")]
    MissingColumn(&'static str),
}

/// The loaded per-pitch dataset. Read-only after load; filtered many times.
#[derive(Debug)]
pub struct PitchData {
    df: DataFrame,
    file_path: PathBuf,
}

impl PitchData {
    /// Load a tunneling CSV and validate its schema.
    pub fn load_csv(file_path: &str) -> Result<Self, LoaderError> {
        // Lazy scan, then collect; schema inference over the first rows
        let df = LazyCsvReader::new(file_path)
            .with_infer_schema_length(Some(10000))
            .with_ignore_errors(true)
            .finish()?
            .collect()?;

        for required in REQUIRED_COLUMNS {
            if df.column(required).is_err() {
                return Err(LoaderError::MissingColumn(required));
            }
        }

        Ok(Self {
            df,
            file_path: PathBuf::from(file_path),
        })
    }

    /// The full dataset.
    pub fn dataframe(&self) -> &DataFrame {
        &self.df
    }

    pub fn row_count(&self) -> usize {
        self.df.height()
    }

    /// All pitcher names, sorted alphabetically.
    pub fn player_names(&self) -> Vec<String> {
        let mut names = unique_strings(&self.df, "player_name");
        names.sort();
        names
    }

    /// Seasons available for one pitcher, newest first.
    pub fn seasons_for(&self, player: &str) -> Vec<i32> {
        let collected = self
            .df
            .clone()
            .lazy()
            .filter(col("player_name").eq(lit(player)))
            .select([col("game_year").cast(DataType::Int32)])
            .collect();

        let Ok(frame) = collected else {
            return Vec::new();
        };
        let Ok(column) = frame.column("game_year") else {
            return Vec::new();
        };
        let Ok(years) = column.i32() else {
            return Vec::new();
        };

        let mut seasons: Vec<i32> = years.into_iter().flatten().collect();
        seasons.sort_unstable();
        seasons.dedup();
        seasons.reverse();
        seasons
    }
}

/// Unique non-null values of a string column.
fn unique_strings(df: &DataFrame, column: &str) -> Vec<String> {
    df.column(column)
        .ok()
        .and_then(|col| col.unique().ok())
        .map(|unique| {
            let series = unique.as_materialized_series();
            (0..series.len())
                .filter_map(|i| {
                    let val = series.get(i).ok()?;
                    if val.is_null() {
                        None
                    } else {
                        Some(val.to_string().trim_matches('"').to_string())
                    }
                })
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_temp_csv(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("tunnelview_{}_{}", std::process::id(), name));
        fs::write(&path, contents).unwrap();
        path
    }

    const SAMPLE: &str = "\
player_name,game_year,pitch_type,stand,VRA,HRA,VAA,HAA,tunnel_boost,x_tunnel,y_tunnel,z_tunnel,shape_tunnel
\"Skenes, Paul\",2024,FF,R,-1.2,0.5,-4.5,1.1,0.8,0.1,0.5,0.2,0.3
\"Skenes, Paul\",2024,SL,L,-2.0,1.0,-6.0,2.0,0.4,0.0,0.3,0.1,0.1
\"Skenes, Paul\",2023,FF,R,-1.1,0.4,-4.4,1.0,0.7,0.1,0.4,0.2,0.2
\"Webb, Logan\",2024,SI,R,-1.5,0.8,-5.0,1.5,0.2,0.0,0.1,0.1,0.0
";

    #[test]
    fn loads_and_lists_players() {
        let path = write_temp_csv("players.csv", SAMPLE);
        let data = PitchData::load_csv(&path.to_string_lossy()).unwrap();

        assert_eq!(data.row_count(), 4);
        assert_eq!(data.player_names(), vec!["Skenes, Paul", "Webb, Logan"]);
        let _ = fs::remove_file(path);
    }

    #[test]
    fn seasons_are_newest_first() {
        let path = write_temp_csv("seasons.csv", SAMPLE);
        let data = PitchData::load_csv(&path.to_string_lossy()).unwrap();

        assert_eq!(data.seasons_for("Skenes, Paul"), vec![2024, 2023]);
        assert_eq!(data.seasons_for("Webb, Logan"), vec![2024]);
        assert!(data.seasons_for("Nobody, Here").is_empty());
        let _ = fs::remove_file(path);
    }

    #[test]
    fn missing_column_is_reported() {
        let path = write_temp_csv(
            "missing.csv",
            "player_name,game_year\n\"Skenes, Paul\",2024\n",
        );
        let err = PitchData::load_csv(&path.to_string_lossy()).unwrap_err();

        match err {
            LoaderError::MissingColumn(name) => assert_eq!(name, "pitch_type"),
            other => panic!("unexpected error: {other}"),
        }
        let _ = fs::remove_file(path);
    }
}
