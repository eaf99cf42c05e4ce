//! Arsenal Aggregation Module
//! Usage shares, tunnel metric means and ellipse statistics per pitch type.

use crate::data::filter;
use polars::prelude::*;
use std::collections::HashMap;

/// Pitch types below this usage share are dropped from the ellipse plots.
pub const USAGE_FLOOR: f64 = 0.02;

/// The precomputed tunnel metrics, in table column order.
pub const TUNNEL_METRICS: [&str; 5] = [
    "tunnel_boost",
    "x_tunnel",
    "y_tunnel",
    "z_tunnel",
    "shape_tunnel",
];

/// Per-pitch-type row of the metrics table.
#[derive(Debug, Clone, PartialEq)]
pub struct PitchSummary {
    pub pitch_type: String,
    /// Share of all pitches, in percent.
    pub usage_pct: f64,
    pub tunnel_boost: f64,
    pub x_tunnel: f64,
    pub y_tunnel: f64,
    pub z_tunnel: f64,
    pub shape_tunnel: f64,
}

/// Mean and 1σ spread of two metrics for one pitch type.
#[derive(Debug, Clone, PartialEq)]
pub struct PitchEllipse {
    pub pitch_type: String,
    /// Usage share (0..1) among rows with both metrics present.
    pub usage: f64,
    pub mean_x: f64,
    pub mean_y: f64,
    pub std_x: f64,
    pub std_y: f64,
}

/// Mean tunnel metrics with usage share per pitch type, sorted by usage
/// descending. Null metric values are skipped, matching column means.
pub fn summarize(df: &DataFrame) -> Vec<PitchSummary> {
    let Ok(pitches) = filter::opt_strings(df, "pitch_type") else {
        return Vec::new();
    };
    let metrics: Vec<Vec<Option<f64>>> = TUNNEL_METRICS
        .iter()
        .map(|name| filter::opt_f64s(df, name).unwrap_or_default())
        .collect();

    struct Acc {
        rows: usize,
        sums: [f64; 5],
        counts: [usize; 5],
    }

    let mut accs: HashMap<String, Acc> = HashMap::new();
    let mut total = 0usize;

    for (i, pitch) in pitches.iter().enumerate() {
        let Some(pitch) = pitch else { continue };
        total += 1;

        let acc = accs.entry(pitch.clone()).or_insert(Acc {
            rows: 0,
            sums: [0.0; 5],
            counts: [0; 5],
        });
        acc.rows += 1;

        for (m, column) in metrics.iter().enumerate() {
            if let Some(Some(value)) = column.get(i) {
                if value.is_finite() {
                    acc.sums[m] += value;
                    acc.counts[m] += 1;
                }
            }
        }
    }

    if total == 0 {
        return Vec::new();
    }

    let mut rows: Vec<PitchSummary> = accs
        .into_iter()
        .map(|(pitch_type, acc)| {
            let mean = |m: usize| {
                if acc.counts[m] > 0 {
                    acc.sums[m] / acc.counts[m] as f64
                } else {
                    f64::NAN
                }
            };
            PitchSummary {
                pitch_type,
                usage_pct: acc.rows as f64 / total as f64 * 100.0,
                tunnel_boost: mean(0),
                x_tunnel: mean(1),
                y_tunnel: mean(2),
                z_tunnel: mean(3),
                shape_tunnel: mean(4),
            }
        })
        .collect();

    rows.sort_by(|a, b| {
        b.usage_pct
            .partial_cmp(&a.usage_pct)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.pitch_type.cmp(&b.pitch_type))
    });
    rows
}

/// Values of `metric` for the selected pitch type and for the rest of
/// the arsenal, in that order.
pub fn split_by_pitch(df: &DataFrame, metric: &str, pitch: &str) -> (Vec<f64>, Vec<f64>) {
    let Ok(pitches) = filter::opt_strings(df, "pitch_type") else {
        return (Vec::new(), Vec::new());
    };
    let Ok(values) = filter::opt_f64s(df, metric) else {
        return (Vec::new(), Vec::new());
    };

    let mut selected = Vec::new();
    let mut rest = Vec::new();
    for (p, v) in pitches.iter().zip(values) {
        let (Some(p), Some(v)) = (p, v) else { continue };
        if !v.is_finite() {
            continue;
        }
        if p.as_str() == pitch {
            selected.push(v);
        } else {
            rest.push(v);
        }
    }
    (selected, rest)
}

/// Per-pitch-type mean and 1σ spread of two metrics, restricted to rows
/// where both are present and to pitch types at or above [`USAGE_FLOOR`].
/// Sorted by usage descending for legend ordering.
pub fn ellipse_stats(df: &DataFrame, x_metric: &str, y_metric: &str) -> Vec<PitchEllipse> {
    let Ok(pitches) = filter::opt_strings(df, "pitch_type") else {
        return Vec::new();
    };
    let Ok(xs) = filter::opt_f64s(df, x_metric) else {
        return Vec::new();
    };
    let Ok(ys) = filter::opt_f64s(df, y_metric) else {
        return Vec::new();
    };

    let mut per_pitch: HashMap<String, (Vec<f64>, Vec<f64>)> = HashMap::new();
    let mut total = 0usize;

    for i in 0..pitches.len() {
        let Some(pitch) = &pitches[i] else { continue };
        let (Some(Some(x)), Some(Some(y))) = (xs.get(i), ys.get(i)) else {
            continue;
        };
        if !x.is_finite() || !y.is_finite() {
            continue;
        }
        total += 1;
        let entry = per_pitch.entry(pitch.clone()).or_default();
        entry.0.push(*x);
        entry.1.push(*y);
    }

    if total == 0 {
        return Vec::new();
    }

    let mut ellipses: Vec<PitchEllipse> = per_pitch
        .into_iter()
        .filter_map(|(pitch_type, (xv, yv))| {
            let usage = xv.len() as f64 / total as f64;
            if usage < USAGE_FLOOR {
                return None;
            }
            Some(PitchEllipse {
                pitch_type,
                usage,
                mean_x: mean(&xv),
                mean_y: mean(&yv),
                std_x: sample_std(&xv),
                std_y: sample_std(&yv),
            })
        })
        .collect();

    ellipses.sort_by(|a, b| {
        b.usage
            .partial_cmp(&a.usage)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.pitch_type.cmp(&b.pitch_type))
    });
    ellipses
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample standard deviation; 0 for fewer than two values so a lone
/// pitch still draws as a point.
fn sample_std(values: &[f64]) -> f64 {
    let n = values.len();
    if n < 2 {
        return 0.0;
    }
    let m = mean(values);
    (values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / (n - 1) as f64).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_df() -> DataFrame {
        // 4 FF, 2 SL: FF usage 66.7%, SL 33.3%
        DataFrame::new(vec![
            Column::new(
                "pitch_type".into(),
                vec!["FF", "FF", "FF", "FF", "SL", "SL"],
            ),
            Column::new(
                "tunnel_boost".into(),
                vec![Some(1.0f64), Some(2.0), Some(3.0), None, Some(0.5), Some(1.5)],
            ),
            Column::new("x_tunnel".into(), vec![0.1f64, 0.2, 0.3, 0.4, 0.0, 0.2]),
            Column::new("y_tunnel".into(), vec![0.5f64; 6]),
            Column::new("z_tunnel".into(), vec![0.25f64; 6]),
            Column::new("shape_tunnel".into(), vec![0.1f64; 6]),
            Column::new(
                "HRA".into(),
                vec![Some(1.0f64), Some(2.0), Some(3.0), Some(2.0), Some(5.0), None],
            ),
            Column::new(
                "VRA".into(),
                vec![Some(-1.0f64), Some(-2.0), Some(-3.0), Some(-2.0), Some(0.0), None],
            ),
        ])
        .unwrap()
    }

    #[test]
    fn summary_orders_by_usage() {
        let rows = summarize(&sample_df());
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].pitch_type, "FF");
        assert!((rows[0].usage_pct - 4.0 / 6.0 * 100.0).abs() < 1e-9);
        assert!((rows[1].usage_pct - 2.0 / 6.0 * 100.0).abs() < 1e-9);
    }

    #[test]
    fn summary_means_skip_nulls() {
        let rows = summarize(&sample_df());
        // FF tunnel_boost mean over the three present values
        assert!((rows[0].tunnel_boost - 2.0).abs() < 1e-9);
        assert!((rows[1].tunnel_boost - 1.0).abs() < 1e-9);
        assert!((rows[0].x_tunnel - 0.25).abs() < 1e-9);
    }

    #[test]
    fn split_partitions_selected_and_rest() {
        let (ff, rest) = split_by_pitch(&sample_df(), "tunnel_boost", "FF");
        assert_eq!(ff, vec![1.0, 2.0, 3.0]);
        assert_eq!(rest, vec![0.5, 1.5]);
    }

    #[test]
    fn ellipse_stats_computes_mean_and_spread() {
        let ellipses = ellipse_stats(&sample_df(), "HRA", "VRA");
        assert_eq!(ellipses.len(), 2);

        let ff = &ellipses[0];
        assert_eq!(ff.pitch_type, "FF");
        assert!((ff.mean_x - 2.0).abs() < 1e-9);
        assert!((ff.mean_y + 2.0).abs() < 1e-9);
        // sample std of [1,2,3,2]
        assert!((ff.std_x - (2.0f64 / 3.0).sqrt()).abs() < 1e-9);

        // SL keeps only its one complete row and degenerates to a point
        let sl = &ellipses[1];
        assert_eq!(sl.std_x, 0.0);
        assert_eq!(sl.std_y, 0.0);
    }

    #[test]
    fn ellipse_stats_drops_sparse_pitch_types() {
        let mut pitches = vec!["FF"; 60];
        pitches.extend(vec!["SL"; 39]);
        pitches.push("CH");
        let n = pitches.len();

        let df = DataFrame::new(vec![
            Column::new("pitch_type".into(), pitches),
            Column::new("HRA".into(), vec![1.0f64; n]),
            Column::new("VRA".into(), vec![-1.0f64; n]),
        ])
        .unwrap();

        let ellipses = ellipse_stats(&df, "HRA", "VRA");
        let names: Vec<&str> = ellipses.iter().map(|e| e.pitch_type.as_str()).collect();
        assert_eq!(names, vec!["FF", "SL"]);
    }
}
