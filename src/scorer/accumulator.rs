use super::engine;
use super::sample::Sample;
use super::types::{RunningStatistics, ScoreDetails};
use crate::candidate::CandidateType;
use crate::config::{ByteOrder, ScoringWeights};
use std::marker::PhantomData;

/// Capability shared by every per-type accumulator.
pub trait Accumulate: Send {
    fn candidate(&self) -> CandidateType;

    /// Folds every complete value in `bytes` into the statistics. Trailing
    /// bytes that do not fill a whole value are dropped, and are not carried
    /// over to the next call.
    fn add_chunk(&mut self, bytes: &[u8]);

    fn statistics(&self) -> &RunningStatistics;

    fn score(&self, weights: &ScoringWeights) -> ScoreDetails {
        engine::score(
            self.statistics(),
            self.candidate().half_range_midpoint(),
            weights,
        )
    }
}

pub struct TypedAccumulator<T: Sample> {
    stats: RunningStatistics,
    order: ByteOrder,
    _marker: PhantomData<T>,
}

impl<T: Sample> TypedAccumulator<T> {
    pub fn new(order: ByteOrder) -> Self {
        Self {
            stats: RunningStatistics::default(),
            order,
            _marker: PhantomData,
        }
    }
}

impl<T: Sample> Accumulate for TypedAccumulator<T> {
    fn candidate(&self) -> CandidateType {
        T::CANDIDATE
    }

    fn add_chunk(&mut self, bytes: &[u8]) {
        for raw in bytes.chunks_exact(T::WIDTH) {
            self.stats.record(T::decode(raw, self.order).classify());
        }
    }

    fn statistics(&self) -> &RunningStatistics {
        &self.stats
    }
}

/// Builds the accumulator for one candidate.
pub fn for_candidate(candidate: CandidateType, order: ByteOrder) -> Box<dyn Accumulate> {
    match candidate {
        CandidateType::U8 => Box::new(TypedAccumulator::<u8>::new(order)),
        CandidateType::I8 => Box::new(TypedAccumulator::<i8>::new(order)),
        CandidateType::U16 => Box::new(TypedAccumulator::<u16>::new(order)),
        CandidateType::I16 => Box::new(TypedAccumulator::<i16>::new(order)),
        CandidateType::U32 => Box::new(TypedAccumulator::<u32>::new(order)),
        CandidateType::I32 => Box::new(TypedAccumulator::<i32>::new(order)),
        CandidateType::U64 => Box::new(TypedAccumulator::<u64>::new(order)),
        CandidateType::I64 => Box::new(TypedAccumulator::<i64>::new(order)),
        CandidateType::F32 => Box::new(TypedAccumulator::<f32>::new(order)),
        CandidateType::F64 => Box::new(TypedAccumulator::<f64>::new(order)),
    }
}
