//! Dataframe Slicing Module
//! Pure filtering and column extraction driven by the UI selections.

use polars::prelude::*;
use std::collections::HashMap;

/// Batter side selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stand {
    All,
    Left,
    Right,
}

impl Default for Stand {
    fn default() -> Self {
        Stand::All
    }
}

impl Stand {
    pub const SELECTABLE: [Stand; 3] = [Stand::All, Stand::Left, Stand::Right];

    /// Short label shown in the stand selector.
    pub fn label(&self) -> &'static str {
        match self {
            Stand::All => "All",
            Stand::Left => "L",
            Stand::Right => "R",
        }
    }

    /// Value matched against the `stand` column, if this selection filters at all.
    pub fn code(&self) -> Option<&'static str> {
        match self {
            Stand::All => None,
            Stand::Left => Some("L"),
            Stand::Right => Some("R"),
        }
    }
}

/// Rows for one pitcher in one season.
pub fn player_season(df: &DataFrame, player: &str, year: i32) -> PolarsResult<DataFrame> {
    df.clone()
        .lazy()
        .filter(
            col("player_name")
                .eq(lit(player))
                .and(col("game_year").eq(lit(year))),
        )
        .collect()
}

/// Restrict to one batter side; `Stand::All` keeps everything.
pub fn by_stand(df: &DataFrame, stand: Stand) -> PolarsResult<DataFrame> {
    match stand.code() {
        None => Ok(df.clone()),
        Some(code) => df
            .clone()
            .lazy()
            .filter(col("stand").eq(lit(code)))
            .collect(),
    }
}

/// Drop rows where any of the given columns is null.
pub fn with_angles(df: &DataFrame, columns: &[&str]) -> PolarsResult<DataFrame> {
    let mut predicate = lit(true);
    for column in columns {
        predicate = predicate.and(col(*column).is_not_null());
    }
    df.clone().lazy().filter(predicate).collect()
}

/// Materialized string column; nulls become `None`.
pub fn opt_strings(df: &DataFrame, name: &str) -> PolarsResult<Vec<Option<String>>> {
    let series = df.column(name)?.as_materialized_series();
    Ok(series
        .iter()
        .map(|val| {
            if val.is_null() {
                None
            } else {
                Some(val.to_string().trim_matches('"').to_string())
            }
        })
        .collect())
}

/// Materialized numeric column cast to f64; nulls become `None`.
pub fn opt_f64s(df: &DataFrame, name: &str) -> PolarsResult<Vec<Option<f64>>> {
    let column = df.column(name)?.cast(&DataType::Float64)?;
    Ok(column.f64()?.into_iter().collect())
}

/// Pitch types with their usage share, most used first.
pub fn pitch_types_by_usage(df: &DataFrame) -> Vec<(String, f64)> {
    let Ok(pitches) = opt_strings(df, "pitch_type") else {
        return Vec::new();
    };

    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut total = 0usize;
    for pitch in pitches.into_iter().flatten() {
        *counts.entry(pitch).or_default() += 1;
        total += 1;
    }
    if total == 0 {
        return Vec::new();
    }

    let mut shares: Vec<(String, f64)> = counts
        .into_iter()
        .map(|(pitch, count)| (pitch, count as f64 / total as f64))
        .collect();
    shares.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.0.cmp(&b.0))
    });
    shares
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_df() -> DataFrame {
        DataFrame::new(vec![
            Column::new(
                "player_name".into(),
                vec!["Skenes, Paul", "Skenes, Paul", "Skenes, Paul", "Webb, Logan"],
            ),
            Column::new("game_year".into(), vec![2024i32, 2024, 2023, 2024]),
            Column::new("pitch_type".into(), vec!["FF", "SL", "FF", "SI"]),
            Column::new("stand".into(), vec!["R", "L", "R", "R"]),
            Column::new(
                "VRA".into(),
                vec![Some(-1.2f64), None, Some(-1.1), Some(-1.5)],
            ),
            Column::new(
                "HRA".into(),
                vec![Some(0.5f64), Some(1.0), Some(0.4), Some(0.8)],
            ),
        ])
        .unwrap()
    }

    #[test]
    fn player_season_selects_matching_rows() {
        let df = sample_df();
        let slice = player_season(&df, "Skenes, Paul", 2024).unwrap();
        assert_eq!(slice.height(), 2);

        let empty = player_season(&df, "Skenes, Paul", 2020).unwrap();
        assert_eq!(empty.height(), 0);
    }

    #[test]
    fn stand_filter_keeps_one_side() {
        let df = sample_df();
        assert_eq!(by_stand(&df, Stand::All).unwrap().height(), 4);
        assert_eq!(by_stand(&df, Stand::Left).unwrap().height(), 1);
        assert_eq!(by_stand(&df, Stand::Right).unwrap().height(), 3);
    }

    #[test]
    fn with_angles_drops_null_rows() {
        let df = sample_df();
        let clean = with_angles(&df, &["VRA", "HRA"]).unwrap();
        assert_eq!(clean.height(), 3);

        let pitches = opt_strings(&clean, "pitch_type").unwrap();
        assert!(!pitches.contains(&Some("SL".to_string())));
    }

    #[test]
    fn usage_orders_most_thrown_first() {
        let df = sample_df();
        let usage = pitch_types_by_usage(&df);
        assert_eq!(usage.len(), 3);
        assert_eq!(usage[0].0, "FF");
        assert!((usage[0].1 - 0.5).abs() < 1e-12);
    }

    #[test]
    fn opt_f64s_keeps_nulls_in_place() {
        let df = sample_df();
        let vals = opt_f64s(&df, "VRA").unwrap();
        assert_eq!(vals.len(), 4);
        assert_eq!(vals[1], None);
        assert!(opt_f64s(&df, "no_such_column").is_err());
    }
}
