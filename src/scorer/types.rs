use crate::candidate::CandidateType;
use serde::{Deserialize, Serialize};

/// Outcome of classifying one decoded value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Class {
    Zero,
    NonFinite,
    Positive(f64),
    Negative(f64),
}

/// Running totals for one candidate type. Only ever grows.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RunningStatistics {
    pub count: u64,
    pub zero_count: u64,
    pub nan_count: u64,
    pub positive_sum: f64,
    pub negative_sum: f64,
}

impl RunningStatistics {
    pub fn record(&mut self, class: Class) {
        self.count += 1;
        match class {
            Class::Zero => self.zero_count += 1,
            Class::NonFinite => self.nan_count += 1,
            Class::Positive(v) => self.positive_sum += v,
            Class::Negative(v) => self.negative_sum += v,
        }
    }

    pub fn finite_count(&self) -> u64 {
        self.count - self.nan_count
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreDetails {
    // Diagnostics
    pub average_magnitude: f64,
    pub deviation_ratio: f64,
    pub zero_fraction: f64,
    pub nan_fraction: f64,

    // Combined penalty, lower is more plausible
    pub penalty: f64,
}

impl ScoreDetails {
    /// Score reported when there is nothing to judge.
    pub fn neutral() -> Self {
        Self::default()
    }
}

/// One row of the final ranking.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ranked {
    pub rank: usize,
    pub candidate: CandidateType,
    pub stats: RunningStatistics,
    pub details: ScoreDetails,
}
