mod echo;

use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use pagetext_core::{
    DEFAULT_COMBINED_PATH, DEFAULT_OUTPUT_DIR, DEFAULT_PREFIX, FetchConfig, Pipeline, RunConfig, load_url_list,
    make_banner, validate_selectors,
};
use tracing_subscriber::EnvFilter;

use crate::echo::{ConsoleObserver, print_banner, print_info, print_summary};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Scrape a list of document pages into per-page and combined plain text files
#[derive(Parser, Debug)]
#[command(name = "pagetext")]
#[command(version)]
#[command(about = "Scrape document pages into plain text", long_about = None)]
struct Args {
    /// File with one URL per line (default: the built-in Highway Code pages)
    #[arg(short, long, value_name = "FILE")]
    urls: Option<PathBuf>,

    /// Prefix removed from each URL to name its output
    #[arg(long, default_value = DEFAULT_PREFIX, value_name = "URL")]
    prefix: String,

    /// Directory for per-page text files
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR, value_name = "DIR")]
    out_dir: PathBuf,

    /// Path of the combined text file
    #[arg(short, long, default_value = DEFAULT_COMBINED_PATH, value_name = "FILE")]
    combined: PathBuf,

    /// Title for the combined file banner
    #[arg(long, value_name = "TITLE")]
    banner: Option<String>,

    /// Content container selector, repeatable (replaces the built-in list)
    #[arg(short, long = "selector", value_name = "CSS")]
    selectors: Vec<String>,

    /// Render a container only once when several selectors match it
    #[arg(long)]
    dedupe: bool,

    /// HTTP timeout in seconds (default: transport default)
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,

    /// Custom User-Agent for HTTP requests
    #[arg(long, value_name = "UA")]
    user_agent: Option<String>,

    /// Print a shell completion script and exit
    #[arg(long, value_name = "SHELL")]
    completions: Option<Shell>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "pagetext_core=debug" } else { "error" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn build_config(args: Args) -> anyhow::Result<RunConfig> {
    let mut builder = RunConfig::builder()
        .prefix(args.prefix)
        .output_dir(args.out_dir)
        .combined_path(args.combined)
        .dedupe_blocks(args.dedupe);

    if let Some(path) = &args.urls {
        let urls = load_url_list(path).with_context(|| format!("Failed to load URL list: {}", path.display()))?;
        builder = builder.urls(urls);
    }

    if let Some(title) = &args.banner {
        builder = builder.banner(make_banner(title));
    }

    if !args.selectors.is_empty() {
        validate_selectors(&args.selectors).context("Invalid container selector")?;
        builder = builder.selectors(args.selectors);
    }

    let mut fetch = FetchConfig { timeout: args.timeout, ..Default::default() };
    if let Some(user_agent) = args.user_agent {
        fetch.user_agent = user_agent;
    }

    Ok(builder.fetch(fetch).build())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if let Some(shell) = args.completions {
        clap_complete::generate(shell, &mut Args::command(), "pagetext", &mut io::stdout());
        return Ok(());
    }

    let verbose = args.verbose;
    init_tracing(verbose);

    let config = build_config(args)?;

    if verbose {
        print_banner();
        print_info(&format!("{} URLs, {} container selectors", config.urls.len(), config.extract.selectors.len()));
        eprintln!();
    }

    let combined_path = config.combined_path.clone();
    let pipeline = Pipeline::from_config(config).context("Failed to build HTTP client")?;

    let mut observer = ConsoleObserver::new(verbose);
    let report = pipeline
        .run(&mut observer)
        .await
        .with_context(|| format!("Failed to write full text: {}", combined_path.display()))?;

    print_summary(&report);

    Ok(())
}
