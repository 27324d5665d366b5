use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser, Subcommand};
use std::process;
use tracing::{error, info, Level};
use typeprobe::config::ScoringWeights;
use typeprobe::ProbeResult;

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON file of scoring weights. `--weight-*` flags typed on the
    /// command line take precedence over the file.
    #[arg(global = true, long)]
    weights: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,

    /// Suppress the progress bar.
    #[arg(global = true, short, long, default_value_t = false)]
    quiet: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Detect(cmd::detect::DetectArgs),
    Generate(cmd::generate::GenerateArgs),
    Calibrate(cmd::calibrate::CalibrateArgs),
}

fn init_tracing(debug: bool) {
    let level = if debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn load_weights(path: &Option<String>) -> ProbeResult<Option<ScoringWeights>> {
    match path {
        Some(p) => {
            info!("⚖️  Loading Weights from: {}", p);
            ScoringWeights::load_from_file(p).map(Some)
        }
        None => Ok(None),
    }
}

/// File weights form the base; explicit CLI flags are laid over them.
fn resolve_weights(
    cli_weights: &mut ScoringWeights,
    file_weights: Option<ScoringWeights>,
    sub_matches: Option<&ArgMatches>,
) {
    let Some(mut merged) = file_weights else {
        return;
    };
    if let Some(m) = sub_matches {
        merged.merge_from_cli(cli_weights, m);
    }
    *cli_weights = merged;
}

fn run(cli: Cli, matches: &ArgMatches) -> ProbeResult<()> {
    let file_weights = load_weights(&cli.weights)?;

    match cli.command {
        Commands::Detect(mut args) => {
            resolve_weights(
                &mut args.config.weights,
                file_weights,
                matches.subcommand_matches("detect"),
            );
            cmd::detect::run(args, cli.quiet)
        }
        Commands::Generate(args) => cmd::generate::run(args),
        Commands::Calibrate(mut args) => {
            resolve_weights(
                &mut args.config.weights,
                file_weights,
                matches.subcommand_matches("calibrate"),
            );
            cmd::calibrate::run(args)
        }
    }
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());
    init_tracing(cli.debug);

    if let Err(e) = run(cli, &matches) {
        error!("❌ {}", e);
        process::exit(1);
    }
}
