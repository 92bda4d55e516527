use anyhow::{Context, Result};
use asma_data::{CanonicalDataset, DEFAULT_DATA_PATH, DEFAULT_SOURCE_PATH, NameRecord, Transformer};
use asma_server::ServerConfig;
use asma_server::config::DEFAULT_BIND;
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;

/// Asma Al Husna - the 99 names dataset and API
#[derive(Parser)]
#[command(name = "asma")]
#[command(version, about = "Transform and serve the 99 names of Allah", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert the raw upstream export into the canonical dataset
    Transform {
        /// Raw export to read
        #[arg(short, long, default_value = DEFAULT_SOURCE_PATH)]
        input: PathBuf,

        /// Canonical file to write
        #[arg(short, long, default_value = DEFAULT_DATA_PATH)]
        output: PathBuf,

        /// Validate and report without writing the output
        #[arg(long)]
        dry_run: bool,
    },

    /// Serve the canonical dataset over HTTP
    Serve {
        /// Canonical file to load at startup
        #[arg(short, long, default_value = DEFAULT_DATA_PATH)]
        data: PathBuf,

        /// Address to listen on
        #[arg(short, long, default_value = DEFAULT_BIND)]
        bind: SocketAddr,

        /// JSON font table to use instead of the built-in one
        #[arg(long)]
        fonts: Option<PathBuf>,
    },

    /// Print the canonical dataset
    List {
        /// Canonical file to read
        #[arg(short, long, default_value = DEFAULT_DATA_PATH)]
        data: PathBuf,

        /// Only show names whose transliteration or meaning contains this text
        #[arg(long)]
        search: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Transform {
            input,
            output,
            dry_run,
        } => handle_transform(input, output, dry_run)?,
        Commands::Serve { data, bind, fonts } => {
            let config = ServerConfig {
                data_file: data,
                bind,
                fonts_file: fonts,
            };
            asma_server::serve(config).await?
        }
        Commands::List { data, search } => handle_list(data, search)?,
    }

    Ok(())
}

/// Handle the 'transform' command
fn handle_transform(input: PathBuf, output: PathBuf, dry_run: bool) -> Result<()> {
    let start = Instant::now();
    let transformer = Transformer::new(input, output);

    let report = if dry_run {
        let (_, report) = transformer
            .build()
            .context("Transform failed; no output written")?;
        report
    } else {
        transformer
            .run()
            .context("Transform failed; existing output left untouched")?
    };

    info!("Transform finished in {:?}", start.elapsed());
    println!(
        "{} {} kept, {} dropped of {} entries{}",
        "✓".green(),
        report.kept.to_string().bold(),
        report.dropped,
        report.total_entries,
        if dry_run {
            " (dry run, nothing written)".to_string()
        } else {
            format!(" -> {}", transformer.output().display())
        }
    );
    Ok(())
}

/// Handle the 'list' command
fn handle_list(data: PathBuf, search: Option<String>) -> Result<()> {
    let dataset = CanonicalDataset::load_from(&data)
        .with_context(|| format!("Failed to load {}", data.display()))?;

    let needle = search.map(|s| s.to_lowercase());
    let matches: Vec<(usize, &NameRecord)> = dataset
        .iter()
        .enumerate()
        .filter(|(_, record)| match &needle {
            Some(needle) => {
                record.transliteration.to_lowercase().contains(needle)
                    || record.meaning.to_lowercase().contains(needle)
            }
            None => true,
        })
        .collect();

    println!(
        "{}",
        format!("{} of {} names:", matches.len(), dataset.len()).bold().blue()
    );
    for (idx, record) in matches {
        println!(
            "{:>3}. {}  {} - {}",
            (idx + 1).to_string().green(),
            record.name,
            record.transliteration.bold(),
            record.meaning
        );
    }
    Ok(())
}
