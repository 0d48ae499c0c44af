//! Mail-Harvest main entry point
//!
//! This is the command-line interface for the Mail-Harvest email extractor.

use anyhow::Context;
use clap::{Parser, Subcommand};
use mail_harvest::config::{load_config, Config};
use mail_harvest::crawler::harvest;
use mail_harvest::output::{exporter_for_path, print_statistics, BatchStatistics};
use mail_harvest::{candidate_urls, display_domain, parse_domain_list};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Mail-Harvest: contact email extraction for lists of domains
///
/// Mail-Harvest visits a handful of likely contact pages on every domain,
/// collects the email addresses it finds, and writes one row per domain
/// to a spreadsheet.
#[derive(Parser, Debug)]
#[command(name = "mail-harvest")]
#[command(version = "1.0.0")]
#[command(about = "Extract contact emails from a list of domains", long_about = None)]
struct Cli {
    /// Path to TOML configuration file (built-in defaults when omitted)
    #[arg(short, long, value_name = "CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose", global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the HTTP API (`GET /`, `POST /extract`)
    Serve {
        /// Address to bind (overrides the config file)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (overrides the config file)
        #[arg(long, env = "PORT")]
        port: Option<u16>,
    },

    /// Harvest a domain list and write the report to a file
    Extract {
        /// File with one domain per line (reads stdin when omitted)
        #[arg(short, long, value_name = "FILE")]
        input: Option<PathBuf>,

        /// Report file; a `.csv` extension selects CSV, anything else XLSX
        #[arg(short, long, value_name = "FILE", default_value = "extracted_emails.xlsx")]
        output: PathBuf,

        /// Show the pages that would be fetched without fetching them
        #[arg(long)]
        dry_run: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path)
                .with_context(|| format!("failed to load configuration from {}", path.display()))?
        }
        None => Config::default(),
    };

    match cli.command {
        Command::Serve { host, port } => handle_serve(config, host, port).await,
        Command::Extract {
            input,
            output,
            dry_run,
        } => {
            let domain_list = read_input(input.as_deref())?;
            if dry_run {
                handle_dry_run(&config, &domain_list);
                Ok(())
            } else {
                handle_extract(&config, &domain_list, &output, cli.quiet).await
            }
        }
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
///
/// `RUST_LOG`, when set, takes precedence over the flags.
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if quiet {
            // Only show errors
            EnvFilter::new("error")
        } else {
            match verbose {
                0 => EnvFilter::new("mail_harvest=info,warn"),
                1 => EnvFilter::new("mail_harvest=debug,info"),
                2 => EnvFilter::new("mail_harvest=trace,debug"),
                _ => EnvFilter::new("trace"),
            }
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Reads newline-separated input from a file or stdin
fn read_input(path: Option<&Path>) -> anyhow::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read domain list {}", path.display())),
        None => {
            let mut input = String::new();
            std::io::stdin()
                .read_to_string(&mut input)
                .context("failed to read domain list from stdin")?;
            Ok(input)
        }
    }
}

/// Handles the `serve` command
async fn handle_serve(
    mut config: Config,
    host: Option<String>,
    port: Option<u16>,
) -> anyhow::Result<()> {
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }

    mail_harvest::server::serve(config).await?;
    Ok(())
}

/// Handles `extract --dry-run`: shows the candidate pages per domain
fn handle_dry_run(config: &Config, input: &str) {
    let domains = parse_domain_list(input);

    println!("=== Mail-Harvest Dry Run ===\n");
    println!("Strategy: {:?}", config.crawl.strategy);
    println!("Max connections: {}", config.http.max_connections);
    println!("Timeout: {}s", config.http.timeout_secs);
    println!("User agent: {}\n", config.http.user_agent);

    for domain in &domains {
        println!("{}", display_domain(domain));
        match candidate_urls(domain, &config.crawl.paths[..]) {
            Ok(urls) => {
                for url in urls {
                    println!("  * {}", url);
                }
            }
            Err(e) => println!("  ! {} (row will be empty)", e),
        }
    }

    println!(
        "\n✓ Would fetch up to {} pages for {} domains",
        domains.len() * config.crawl.paths.len(),
        domains.len()
    );
}

/// Handles the `extract` command
async fn handle_extract(
    config: &Config,
    input: &str,
    output: &Path,
    quiet: bool,
) -> anyhow::Result<()> {
    let results = harvest(config, input).await?;

    let exporter = exporter_for_path(output);
    let report = exporter.export(&results)?;
    std::fs::write(output, report)
        .with_context(|| format!("failed to write report to {}", output.display()))?;

    tracing::info!("Report written to {}", output.display());

    if !quiet {
        print_statistics(&BatchStatistics::from_results(&results));
        println!("\n✓ Report exported to: {}", output.display());
    }

    Ok(())
}
