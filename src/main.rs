use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;

use lyrics_fetch::input::read_tracks;
use lyrics_fetch::lookup::{LookupConfig, LrclibClient, DEFAULT_ENDPOINT};
use lyrics_fetch::models::BatchStats;
use lyrics_fetch::orchestrator::{BatchOrchestrator, Concurrency};
use lyrics_fetch::output::{summary_line, write_records};
use lyrics_fetch::progress::{format_duration, is_log_only, set_log_only};
use lyrics_fetch::safety::validate_output_path;

#[derive(Parser)]
#[command(name = "lyrics-fetch")]
#[command(about = "Download lyrics for every track in Exportify playlist CSVs")]
struct Args {
    /// Paths to CSV files generated by Exportify
    #[arg(required = true)]
    input: Vec<PathBuf>,

    /// Path to the .json file to be dumped (stdout when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Maximum concurrent lookups (0 = one per track)
    #[arg(long, default_value = "32")]
    workers: usize,

    /// LRCLIB-compatible API base URL
    #[arg(long, env = "LRCLIB_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Overall timeout per lookup request in seconds (connect, send and read)
    #[arg(long, env = "LRCLIB_TIMEOUT_SECS", default_value = "15")]
    timeout: u64,

    /// Write run statistics as JSON
    #[arg(long)]
    stats: Option<PathBuf>,

    /// Hide progress bars and print periodic progress lines instead
    #[arg(long)]
    log_only: bool,
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .without_time()
        .with_level(false)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing();
    set_log_only(args.log_only);

    if let Some(ref output) = args.output {
        validate_output_path(output, args.input.as_slice())?;
    }

    let start = Instant::now();

    let tracks = read_tracks(args.input.as_slice())?;
    tracing::debug!("Read {} tracks from {} files", tracks.len(), args.input.len());

    let config = LookupConfig {
        endpoint: args.endpoint,
        request_timeout: Duration::from_secs(args.timeout),
        ..LookupConfig::default()
    };
    let client = LrclibClient::new(&config);

    let result =
        BatchOrchestrator::new(&client, Concurrency::from_workers(args.workers)).run(tracks)?;

    eprintln!("{}", summary_line(&result));

    write_records(&result.records, args.output.as_deref())?;

    let elapsed = start.elapsed();
    let stats = BatchStats::from_result(&result, elapsed.as_secs_f64());
    if is_log_only() {
        stats.log_phase("final");
    }
    if let Some(ref path) = args.stats {
        stats.write_to_file(path)?;
    }
    eprintln!(
        "Elapsed: {} ({:.1}% success)",
        format_duration(elapsed),
        stats.success_rate()
    );

    Ok(())
}
