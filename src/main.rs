use anyhow::{Context, Result};
use clap::Parser;
use geo_mentions::location::{
    CsvGeoSource, IgnoreList, LocationError, LocationResolver, SqliteGeoStore,
};
use geo_mentions::logging::{init_logger, parse_level};
use log::LevelFilter;
use std::io::{self, BufRead};
use std::path::PathBuf;

/// Resolve place-name mentions into countries, regions and cities
///
/// Candidates are the raw named entities from an upstream extractor, one per
/// argument or one per line of --input. Duplicates count as extra mentions.
///
/// Examples:
///   geo-mentions France France Paris
///   geo-mentions --input entities.txt --ignore words_to_ignore.csv
///   geo-mentions --data data/City-Region-Locations.csv --reload
#[derive(Parser)]
#[command(name = "geo-mentions", version, about, long_about = None)]
struct Cli {
    /// Candidate place names.
    #[arg(index = 1)]
    candidates: Vec<String>,

    /// File with one candidate per line ("-" reads stdin).
    #[arg(long, short = 'i')]
    input: Option<PathBuf>,

    /// SQLite database holding the reference dataset.
    #[arg(long, env = "GEO_MENTIONS_DB")]
    db: Option<PathBuf>,

    /// Bulk CSV used to populate the database when it is empty.
    #[arg(long, env = "GEO_MENTIONS_DATA")]
    data: Option<PathBuf>,

    /// The bulk CSV starts with a header row.
    #[arg(long)]
    has_headers: bool,

    /// Reload the database from --data even if it already has rows.
    #[arg(long)]
    reload: bool,

    /// Words to drop from the candidates, one per line.
    #[arg(long)]
    ignore: Option<PathBuf>,

    /// Log level for this tool (overrides RUST_LOG).
    #[arg(long, value_parser = parse_level)]
    log_level: Option<LevelFilter>,
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = init_logger(cli.log_level) {
        eprintln!("  Warning: logger not initialised: {}", e);
    }

    if let Err(e) = run(&cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let candidates = collect_candidates(cli)?;

    // ── Open store ──────────────────────────────────────────────

    let store = match &cli.db {
        Some(path) => SqliteGeoStore::open(path),
        None => SqliteGeoStore::open_default(),
    }
    .context("Failed to open location database")?;
    log::debug!("Using location database {}", store.path().display());

    let mut resolver = LocationResolver::new(store);
    if let Some(ref data) = cli.data {
        resolver = resolver.with_source(CsvGeoSource::new(data).with_headers(cli.has_headers));
    }
    if let Some(ref path) = cli.ignore {
        let ignore = IgnoreList::from_path(path)
            .with_context(|| format!("Failed to read ignore list {}", path.display()))?;
        log::debug!("Ignoring {} words", ignore.len());
        resolver = resolver.with_ignore_list(ignore);
    }

    if cli.reload {
        let count = resolver.reload().context("Failed to reload location database")?;
        eprintln!("  Loaded {} location records", count);
    }
    match resolver.store().loaded_at() {
        Ok(Some(loaded_at)) => {
            log::info!("Dataset loaded at {}", loaded_at.format("%Y-%m-%d %H:%M:%S UTC"))
        }
        Ok(None) => log::debug!("Location database has not been loaded yet"),
        Err(e) => log::warn!("Could not read dataset load time: {}", e),
    }

    if candidates.is_empty() {
        if cli.reload {
            return Ok(());
        }
        return Err(LocationError::InvalidInput.into());
    }

    // ── Resolve ─────────────────────────────────────────────────

    let model = resolver.resolve(&candidates)?;

    // Summary to stderr, JSON to stdout
    eprint!("{}", model.summary());
    println!("{}", serde_json::to_string_pretty(&model)?);
    Ok(())
}

fn collect_candidates(cli: &Cli) -> Result<Vec<String>> {
    let mut candidates = cli.candidates.clone();

    if let Some(ref path) = cli.input {
        let lines: Vec<String> = if path.as_os_str() == "-" {
            io::stdin().lock().lines().collect::<io::Result<_>>()?
        } else {
            std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?
                .lines()
                .map(str::to_string)
                .collect()
        };
        candidates.extend(
            lines
                .into_iter()
                .map(|l| l.trim().to_string())
                .filter(|l| !l.is_empty()),
        );
    }

    Ok(candidates)
}
