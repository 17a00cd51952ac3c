//! folio - publication list from the command line
//!
//! Loads a portfolio data file (falling back to sample publications) and
//! prints the filtered, searched and sorted list, either once from flags or
//! repeatedly from an interactive prompt.

mod commands;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::Instant;

use clap::Parser;
use folio_catalog::{
    load_or_fallback, Catalog, CatalogConfig, CatalogRenderer, CatalogSession, JsonRenderer,
    SortKey, TextRenderer,
};
use tracing_subscriber::EnvFilter;

use commands::{Command, HELP};

#[derive(Parser, Debug)]
#[command(name = "folio", version, about = "Browse a portfolio publication list")]
struct Cli {
    /// Portfolio data file (JSON)
    #[arg(short, long, default_value = "cv_data.json")]
    data: PathBuf,

    /// Catalog config (TOML); defaults to the user config dir
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Filter tag: all, a publication type, or inprep
    #[arg(short, long, default_value = "all")]
    filter: String,

    /// Search text
    #[arg(short, long)]
    search: Option<String>,

    /// Sort key: year-desc, year-asc, citations-desc, title-asc, insertion
    #[arg(long)]
    sort: Option<SortKey>,

    /// Number of pages to show
    #[arg(short, long, default_value_t = 1)]
    pages: usize,

    /// Print JSON instead of text
    #[arg(long)]
    json: bool,

    /// Print counts and citation metrics instead of the list
    #[arg(long)]
    stats: bool,

    /// Read commands from stdin
    #[arg(short, long)]
    interactive: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so JSON output stays clean
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let config = CatalogConfig::load_or_default(cli.config.as_deref())?;
    let outcome = load_or_fallback(&cli.data);
    if outcome.is_fallback() {
        eprintln!("note: showing sample publications ({:?} unavailable)", cli.data);
    }

    let mut catalog = Catalog::new(config)?;
    if let Some(key) = cli.sort {
        catalog.set_sort_key(key);
    }
    catalog.load(outcome.publications);

    let stdout = io::stdout();
    if cli.interactive {
        if cli.json {
            run_interactive(&cli, catalog, JsonRenderer::new(stdout.lock()))
        } else {
            run_interactive(&cli, catalog, TextRenderer::new(stdout.lock()))
        }
    } else if cli.stats {
        print_stats(&catalog, cli.json, &mut stdout.lock())
    } else if cli.json {
        run_once(&cli, &mut catalog, JsonRenderer::pretty(stdout.lock()))
    } else {
        run_once(&cli, &mut catalog, TextRenderer::new(stdout.lock()))
    }
}

fn run_once<R: CatalogRenderer>(
    cli: &Cli,
    catalog: &mut Catalog,
    mut renderer: R,
) -> Result<(), Box<dyn std::error::Error>> {
    catalog.set_filter(&cli.filter)?;
    if let Some(search) = &cli.search {
        catalog.set_search_query(search);
    }
    for _ in 1..cli.pages {
        if !catalog.load_more() {
            break;
        }
    }
    renderer.render(&catalog.visible_slice())?;
    Ok(())
}

fn run_interactive<R: CatalogRenderer>(
    cli: &Cli,
    catalog: Catalog,
    renderer: R,
) -> Result<(), Box<dyn std::error::Error>> {
    let json = cli.json;
    let mut session = CatalogSession::new(catalog, renderer);
    session.set_filter(&cli.filter)?;
    if let Some(search) = &cli.search {
        session.set_search_query(search)?;
    }

    // Stdin is read on its own thread so pending search text can be applied
    // when typing pauses.
    let (tx, rx) = mpsc::channel::<io::Result<String>>();
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            if tx.send(line).is_err() {
                break;
            }
        }
    });

    loop {
        let received = match session.search_deadline() {
            Some(deadline) => rx.recv_timeout(deadline.saturating_duration_since(Instant::now())),
            None => rx.recv().map_err(|_| RecvTimeoutError::Disconnected),
        };

        let line = match received {
            Ok(line) => line?,
            Err(RecvTimeoutError::Timeout) => {
                session.tick(Instant::now())?;
                continue;
            }
            Err(RecvTimeoutError::Disconnected) => {
                session.flush_search()?;
                return Ok(());
            }
        };

        let command = match Command::parse_line(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(message) => {
                eprintln!("{}", message);
                continue;
            }
        };

        if let Command::Search(text) = command {
            session.type_search(text, Instant::now());
            continue;
        }

        // Anything else sees the latest search text first
        session.flush_search()?;
        let result = match command {
            Command::Filter(tag) => session.set_filter(&tag),
            Command::Sort(key) => session.set_sort(&key),
            Command::More => session.load_more().map(|added| {
                if !added {
                    eprintln!("no more publications");
                }
            }),
            Command::Stats => {
                // Same stream as batch `--stats`
                print_stats(session.catalog(), json, &mut io::stdout())?;
                Ok(())
            }
            Command::Help => {
                eprintln!("{}", HELP);
                Ok(())
            }
            Command::Quit => return Ok(()),
            Command::Search(_) => Ok(()),
        };

        if let Err(e) = result {
            tracing::debug!("Command failed: {}", e);
            eprintln!("{}", e);
        }
    }
}

fn print_stats(
    catalog: &Catalog,
    json: bool,
    out: &mut dyn Write,
) -> Result<(), Box<dyn std::error::Error>> {
    let stats = catalog.stats();
    let counts = catalog.counts();

    if json {
        let value = serde_json::json!({ "stats": stats, "counts": counts });
        serde_json::to_writer_pretty(&mut *out, &value)?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(out, "publications:    {}", stats.total)?;
    writeln!(out, "in progress:     {}", stats.in_progress)?;
    writeln!(out, "total citations: {}", stats.total_citations)?;
    writeln!(out, "h-index:         {}", stats.h_index)?;
    writeln!(out)?;
    for count in &counts {
        writeln!(out, "  {:<12} {}", count.tag, count.count)?;
    }
    if !stats.by_year.is_empty() {
        writeln!(out)?;
        for (year, n) in &stats.by_year {
            writeln!(out, "  {}  {}", year, "#".repeat(*n))?;
        }
    }
    Ok(())
}
