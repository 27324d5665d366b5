use crate::error::{ProbeError, ProbeResult};
use clap::{parser::ValueSource, ArgMatches, Args, ValueEnum};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Byte order used to reassemble multi-byte values from a chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ByteOrder {
    #[default]
    Little,
    Big,
    Native,
}

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[command(flatten)]
    pub probe: ProbeParams,
    #[command(flatten)]
    pub weights: ScoringWeights,
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProbeParams {
    /// Bytes requested from the source per read.
    #[arg(long, default_value_t = 1 << 20)]
    pub chunk_size: usize,

    #[arg(long, value_enum, default_value_t = ByteOrder::Little)]
    pub byte_order: ByteOrder,

    /// Fan chunks out to the accumulators on the rayon pool.
    #[arg(long, default_value_t = false)]
    pub parallel: bool,

    /// Stop after this many bytes.
    #[arg(long)]
    pub limit: Option<u64>,
}

impl Default for ProbeParams {
    fn default() -> Self {
        Self {
            chunk_size: 1 << 20,
            byte_order: ByteOrder::Little,
            parallel: false,
            limit: None,
        }
    }
}

/// Relative weight of each diagnostic in the combined penalty.
#[derive(Args, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    #[arg(long, default_value_t = 1.0)]
    pub weight_deviation: f64,
    #[arg(long, default_value_t = 1.0)]
    pub weight_zero: f64,
    #[arg(long, default_value_t = 1.0)]
    pub weight_nan: f64,
}

impl ProbeParams {
    /// Number of bytes to scan out of `available`, honouring `--limit`.
    pub fn bytes_to_scan(&self, available: u64) -> u64 {
        self.limit.map_or(available, |l| l.min(available))
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            weight_deviation: 1.0,
            weight_zero: 1.0,
            weight_nan: 1.0,
        }
    }
}

impl ScoringWeights {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> ProbeResult<Self> {
        let content = fs::read_to_string(path)?;
        let weights: ScoringWeights = serde_json::from_str(&content)?;
        weights.validate()?;
        Ok(weights)
    }

    /// Takes every weight the user typed on the command line, leaving the
    /// rest as loaded. Clap defaults never override a weights file.
    pub fn merge_from_cli(&mut self, cli_weights: &ScoringWeights, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($field:ident, $arg_name:expr) => {
                if matches.value_source($arg_name) == Some(ValueSource::CommandLine) {
                    self.$field = cli_weights.$field;
                }
            };
        }

        update_if_present!(weight_deviation, "weight_deviation");
        update_if_present!(weight_zero, "weight_zero");
        update_if_present!(weight_nan, "weight_nan");
    }

    pub fn validate(&self) -> ProbeResult<()> {
        let named = [
            ("weight_deviation", self.weight_deviation),
            ("weight_zero", self.weight_zero),
            ("weight_nan", self.weight_nan),
        ];
        for (name, value) in named {
            if !value.is_finite() || value < 0.0 {
                return Err(ProbeError::Config(format!(
                    "{} must be a finite, non-negative number (got {})",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

impl Config {
    pub fn validate(&self) -> ProbeResult<()> {
        if self.probe.chunk_size == 0 {
            return Err(ProbeError::Config(
                "chunk_size must be greater than zero".to_string(),
            ));
        }
        self.weights.validate()
    }
}
