// Per-sampling-interval production statistics for display layers.

use crate::domain::state::SimulationState;

/// Min/mean/std-dev/max over a series; all zero for an empty series.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Aggregates {
    pub min: f64,
    pub mean: f64,
    /// Population standard deviation.
    pub std_dev: f64,
    pub max: f64,
}

impl Aggregates {
    pub fn of(values: &[i64]) -> Self {
        if values.is_empty() {
            return Self::default();
        }

        let n = values.len() as f64;
        let mean = values.iter().map(|&v| v as f64).sum::<f64>() / n;
        let variance = values
            .iter()
            .map(|&v| {
                let d = v as f64 - mean;
                d * d
            })
            .sum::<f64>()
            / n;

        Self {
            min: values.iter().copied().min().unwrap_or_default() as f64,
            mean,
            std_dev: variance.sqrt(),
            max: values.iter().copied().max().unwrap_or_default() as f64,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressRow {
    pub time: u64,
    pub products: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatisticsSnapshot {
    /// Steps covered by each entry of `interval_production`.
    pub sample_interval: u64,
    pub interval_production: Vec<i64>,
    pub aggregates: Aggregates,
    /// Sampled `(time, products)` pairs.
    pub progress: Vec<ProgressRow>,
}

/// Product gain per sampling window, starting from an implicit zero.
pub fn interval_production(sampled: &[usize]) -> Vec<i64> {
    let mut previous = 0i64;
    sampled
        .iter()
        .map(|&count| {
            let count = count as i64;
            let delta = count - previous;
            previous = count;
            delta
        })
        .collect()
}

pub fn statistics(state: &SimulationState) -> StatisticsSnapshot {
    let history = state.history();
    let interval_production = interval_production(&history.sampled_products);
    StatisticsSnapshot {
        sample_interval: state.sample_interval(),
        aggregates: Aggregates::of(&interval_production),
        interval_production,
        progress: history
            .sampled_time
            .iter()
            .zip(&history.sampled_products)
            .map(|(&time, &products)| ProgressRow { time, products })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deltas_start_from_an_implicit_zero() {
        assert_eq!(interval_production(&[4, 10, 10, 13]), vec![4, 6, 0, 3]);
        assert!(interval_production(&[]).is_empty());
    }

    #[test]
    fn empty_series_aggregates_to_zero() {
        assert_eq!(Aggregates::of(&[]), Aggregates::default());
        assert_eq!(Aggregates::of(&[]).std_dev, 0.0);
    }

    #[test]
    fn aggregates_use_the_population_deviation() {
        let stats = Aggregates::of(&[2, 4, 4, 4, 5, 5, 7, 9]);
        assert_eq!(stats.min, 2.0);
        assert_eq!(stats.max, 9.0);
        assert_eq!(stats.mean, 5.0);
        assert_eq!(stats.std_dev, 2.0);
    }

    #[test]
    fn single_sample_has_no_spread() {
        let stats = Aggregates::of(&[6]);
        assert_eq!((stats.min, stats.mean, stats.std_dev, stats.max), (6.0, 6.0, 0.0, 6.0));
    }
}
