use anyhow::Result;
use clap::Parser;
use mimir::extract::run_extraction;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[derive(Parser)]
#[command(name = "mimir")]
#[command(about = "Reconstruct wiki page content from a MediaWiki SQL dump")]
struct Cli {
    /// Path to the SQL dump file
    #[arg(short, long)]
    input: PathBuf,

    /// Output file for the extracted records
    #[arg(short, long, default_value = "wiki_records.json")]
    output: PathBuf,

    /// Base wiki URL used to derive per-page links
    #[arg(long, default_value = mimir::config::DEFAULT_BASE_URL)]
    base_url: String,

    /// Limit number of emitted records (for testing)
    #[arg(long)]
    limit: Option<usize>,

    /// Dry run - parse and report counts without writing output
    #[arg(long)]
    dry_run: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn run(cli: &Cli) -> Result<()> {
    let start = Instant::now();
    let stats = run_extraction(
        &cli.input,
        &cli.output,
        &cli.base_url,
        cli.limit,
        cli.dry_run,
    )?;
    let duration = start.elapsed();
    info!(
        duration_secs = duration.as_secs_f64(),
        "Extraction complete"
    );

    println!();
    println!("=== Summary ===");
    println!("Extraction time:    {:.2}s", duration.as_secs_f64());
    println!();
    println!("Pages found:        {}", stats.pages);
    println!("Revisions found:    {}", stats.revisions);
    println!("Texts found:        {}", stats.texts);
    println!("Records matched:    {}", stats.matched);

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");

    match run(&cli) {
        Ok(()) => {
            info!("Completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Error: {:#}", e);
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
