pub mod candidate;
pub mod config;
pub mod error;
pub mod generator;
pub mod progress;
pub mod scorer;
pub mod source;
// cmd and reports belong to the binary crate (main.rs).

pub use candidate::CandidateType;
pub use error::{ProbeError, ProbeResult};
pub use scorer::{Ranked, ScoreDetails, TypeScorer};
