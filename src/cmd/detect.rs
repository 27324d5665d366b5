use crate::reports;
use clap::Args;
use std::path::PathBuf;
use tracing::{info, warn};
use typeprobe::config::Config;
use typeprobe::progress::ProgressReporter;
use typeprobe::source::ChunkedReader;
use typeprobe::{ProbeResult, TypeScorer};

#[derive(Args, Debug, Clone)]
pub struct DetectArgs {
    #[command(flatten)]
    pub config: Config,

    /// File of raw numeric data.
    pub input: PathBuf,

    /// Print the ranking as JSON instead of a table.
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Also write the ranking to this CSV file.
    #[arg(long)]
    pub csv: Option<PathBuf>,
}

pub fn run(args: DetectArgs, quiet: bool) -> ProbeResult<()> {
    args.config.validate()?;

    let (reader, file_len) = ChunkedReader::open(&args.input, args.config.probe.chunk_size)?;
    let mut reader = reader.with_limit(args.config.probe.limit);
    let total = args.config.probe.bytes_to_scan(file_len);

    if total == 0 {
        warn!("⚠️  '{}' is empty; every candidate scores neutral.", args.input.display());
    }

    let mut progress = if quiet || args.json {
        ProgressReporter::hidden(total)
    } else {
        ProgressReporter::new(total)
    };

    let mut scorer = TypeScorer::from_config(&args.config);
    let mut buf = Vec::with_capacity(args.config.probe.chunk_size);
    let label = format!("Scanning {}", args.input.display());

    loop {
        let n = reader.read_next_chunk(&mut buf)?;
        if n == 0 {
            break;
        }
        scorer.add_chunk(&buf);
        progress.update(reader.delivered(), Some(label.as_str()));
    }
    progress.finish();

    info!(
        "📊 Scanned {} bytes in {} chunks",
        scorer.bytes_seen(),
        scorer.chunks_seen()
    );

    let ranking = scorer.ranking();
    if args.json {
        reports::print_ranking_json(&ranking)?;
    } else {
        reports::print_ranking_table(&ranking);
        println!("\nBest type: {}", scorer.best_type());
    }

    if let Some(path) = &args.csv {
        reports::write_ranking_csv(path, &ranking)?;
        info!("💾 Wrote ranking to {}", path.display());
    }

    Ok(())
}
