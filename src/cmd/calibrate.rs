use crate::reports;
use clap::Args;
use tracing::info;
use typeprobe::config::Config;
use typeprobe::generator;
use typeprobe::{ProbeResult, TypeScorer};

/// Scores synthetic narrow-range u64 data so the output can be eyeballed.
#[derive(Args, Debug, Clone)]
pub struct CalibrateArgs {
    #[command(flatten)]
    pub config: Config,

    #[arg(long, default_value_t = 1_000_000)]
    pub count: usize,

    #[arg(long, default_value_t = 0)]
    pub low: u64,

    #[arg(long, default_value_t = 200)]
    pub high: u64,

    #[arg(short = 'S', long, default_value_t = 42)]
    pub seed: u64,
}

pub fn run(args: CalibrateArgs) -> ProbeResult<()> {
    args.config.validate()?;

    let mut rng = fastrand::Rng::with_seed(args.seed);
    let data = generator::uniform_u64(
        &mut rng,
        args.count,
        args.low,
        args.high,
        args.config.probe.byte_order,
    )?;
    info!(
        "🧪 Calibrating on {} u64 values in [{}, {}]",
        args.count, args.low, args.high
    );

    let end = usize::try_from(args.config.probe.bytes_to_scan(data.len() as u64))
        .unwrap_or(data.len());

    let mut scorer = TypeScorer::from_config(&args.config);
    for chunk in data[..end].chunks(args.config.probe.chunk_size) {
        scorer.add_chunk(chunk);
    }

    let ranking = scorer.ranking();
    reports::print_ranking_table(&ranking);
    println!("\nBest type: {}", scorer.best_type());
    Ok(())
}
