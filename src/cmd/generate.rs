use clap::Args;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use tracing::info;
use typeprobe::config::ByteOrder;
use typeprobe::generator;
use typeprobe::ProbeResult;

#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Destination file.
    pub output: PathBuf,

    #[arg(long, default_value_t = 1_000_000)]
    pub count: usize,

    #[arg(long, default_value_t = 0)]
    pub low: u64,

    #[arg(long, default_value_t = 200)]
    pub high: u64,

    #[arg(short = 'S', long, default_value_t = 42)]
    pub seed: u64,

    #[arg(long, value_enum, default_value_t = ByteOrder::Little)]
    pub byte_order: ByteOrder,
}

pub fn run(args: GenerateArgs) -> ProbeResult<()> {
    let mut rng = fastrand::Rng::with_seed(args.seed);
    let mut writer = BufWriter::new(File::create(&args.output)?);

    let written = generator::write_uniform_u64(
        &mut writer,
        &mut rng,
        args.count,
        args.low,
        args.high,
        args.byte_order,
    )?;

    info!(
        "🎲 Wrote {} u64 values in [{}, {}] ({} bytes) to {}",
        args.count,
        args.low,
        args.high,
        written,
        args.output.display()
    );
    Ok(())
}
