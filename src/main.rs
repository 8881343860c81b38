use cardvec_pipeline::{run_import, PipelineConfig};
use clap::Parser;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// Card corpus vectorization pipeline
#[derive(Parser, Debug)]
#[command(name = "cardvec")]
#[command(about = "Vectorize a card corpus for archetype classification", long_about = None)]
struct Args {
    /// Path to the source JSON corpus
    #[arg(short, long)]
    source: PathBuf,

    /// Path to the JSON config file
    #[arg(short, long)]
    config: PathBuf,

    /// Where to write the vectorized entities (stdout when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting cardvec v{}", env!("CARGO_PKG_VERSION"));
    info!("Source corpus: {:?}", args.source);
    info!("Config file: {:?}", args.config);

    let config = PipelineConfig::from_file(&args.config)?;
    let report = run_import(&args.source, &config)?;

    info!(
        "Vectorized {} cards ({} skipped, {} duplicates)",
        report.cards.len(),
        report.skipped,
        report.duplicates
    );

    match &args.output {
        Some(path) => {
            let mut writer = BufWriter::new(File::create(path)?);
            serde_json::to_writer(&mut writer, &report.cards)?;
            writer.flush()?;
            info!("Wrote vectorized entities to {:?}", path);
        }
        None => {
            let stdout = io::stdout();
            let mut writer = BufWriter::new(stdout.lock());
            serde_json::to_writer(&mut writer, &report.cards)?;
            writer.flush()?;
        }
    }

    Ok(())
}
