pub mod accumulator;
pub mod engine;
pub mod sample;
pub mod types;

use self::accumulator::{for_candidate, Accumulate};
pub use self::types::{Class, Ranked, RunningStatistics, ScoreDetails};
use crate::candidate::CandidateType;
use crate::config::{ByteOrder, Config, ScoringWeights};
use rayon::prelude::*;
use std::cmp::Ordering;
use tracing::debug;

/// Owns one accumulator per candidate type and fans every chunk out to all
/// of them.
///
/// Not internally synchronized: callers sharing one across threads must
/// serialize `add_chunk`.
pub struct TypeScorer {
    accumulators: Vec<Box<dyn Accumulate>>,
    pub weights: ScoringWeights,
    parallel: bool,
    bytes_seen: u64,
    chunks_seen: u64,
}

impl Default for TypeScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeScorer {
    /// Little-endian decoding, default weights, sequential fan-out.
    pub fn new() -> Self {
        Self::with_options(ByteOrder::Little, ScoringWeights::default(), false)
    }

    pub fn from_config(config: &Config) -> Self {
        Self::with_options(
            config.probe.byte_order,
            config.weights,
            config.probe.parallel,
        )
    }

    pub fn with_options(order: ByteOrder, weights: ScoringWeights, parallel: bool) -> Self {
        let accumulators: Vec<Box<dyn Accumulate>> = CandidateType::all()
            .into_iter()
            .map(|c| for_candidate(c, order))
            .collect();
        assert!(
            !accumulators.is_empty(),
            "candidate set must not be empty"
        );

        Self {
            accumulators,
            weights,
            parallel,
            bytes_seen: 0,
            chunks_seen: 0,
        }
    }

    /// Forwards the same slice to every accumulator.
    pub fn add_chunk(&mut self, bytes: &[u8]) {
        debug!(
            bytes = bytes.len(),
            parallel = self.parallel,
            "fanning out chunk"
        );

        if self.parallel {
            self.accumulators
                .par_iter_mut()
                .for_each(|acc| acc.add_chunk(bytes));
        } else {
            for acc in self.accumulators.iter_mut() {
                acc.add_chunk(bytes);
            }
        }

        self.bytes_seen += bytes.len() as u64;
        self.chunks_seen += 1;
    }

    pub fn bytes_seen(&self) -> u64 {
        self.bytes_seen
    }

    pub fn chunks_seen(&self) -> u64 {
        self.chunks_seen
    }

    pub fn statistics(&self, candidate: CandidateType) -> &RunningStatistics {
        self.accumulators[candidate.ordinal()].statistics()
    }

    pub fn details(&self, candidate: CandidateType) -> ScoreDetails {
        self.accumulators[candidate.ordinal()].score(&self.weights)
    }

    /// Every candidate ordered from most to least plausible. Candidates with
    /// no complete values rank after those with data; equal penalties keep
    /// construction order.
    pub fn ranking(&self) -> Vec<Ranked> {
        let mut scored: Vec<(CandidateType, RunningStatistics, ScoreDetails)> = self
            .accumulators
            .iter()
            .map(|acc| {
                let details = acc.score(&self.weights);
                debug!(
                    candidate = %acc.candidate(),
                    deviation = details.deviation_ratio,
                    zero_fraction = details.zero_fraction,
                    nan_fraction = details.nan_fraction,
                    penalty = details.penalty,
                    "scored candidate"
                );
                (acc.candidate(), *acc.statistics(), details)
            })
            .collect();

        // Candidates that never saw a value carry no evidence and go last.
        // sort_by is stable, which is what keeps ties in construction order.
        scored.sort_by(|a, b| {
            (a.1.count == 0)
                .cmp(&(b.1.count == 0))
                .then_with(|| {
                    a.2.penalty
                        .partial_cmp(&b.2.penalty)
                        .unwrap_or(Ordering::Equal)
                })
        });

        scored
            .into_iter()
            .enumerate()
            .map(|(i, (candidate, stats, details))| Ranked {
                rank: i + 1,
                candidate,
                stats,
                details,
            })
            .collect()
    }

    pub fn best_type(&self) -> CandidateType {
        self.ranking()
            .first()
            .map(|r| r.candidate)
            .unwrap_or(CandidateType::U8)
    }
}
