//! Portfolio CLI
//!
//! Thin wrapper around portfolio-core for inspecting project data and
//! maintaining the offline cache.
//!
//! ## Usage
//!
//! ```bash
//! # List every project (falls back to the built-in list if the data is unusable)
//! portfolio list
//!
//! # Only Laravel projects
//! portfolio list --stack laravel
//!
//! # Show one project, by id or by detail-page link
//! portfolio show perpus-sisinfo
//! portfolio show "/portfolio-details?id=perpus-sisinfo"
//!
//! # Strictly validate a data file
//! portfolio validate assets/data/projects.json
//!
//! # Inspect and roll the offline cache
//! portfolio cache list
//! portfolio cache activate --name portfolio-v3
//! ```

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use portfolio_core::detail::{query_param, ID_PARAM};
use portfolio_core::offline::{
    CacheStorage, HttpNetwork, OfflineWorker, RedbCacheStorage, Url, DEFAULT_CACHE_NAME,
};
use portfolio_core::{
    store, CardContainer, FilterToken, GridNode, ModalView, PortfolioConfig, ProjectSource,
    ProjectStore,
};

/// Portfolio - project showcase
#[derive(Parser)]
#[command(name = "portfolio")]
#[command(version = "0.1.0")]
#[command(about = "Inspect portfolio projects and maintain the offline cache")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Project data: a JSON file path or an http(s) URL
    #[arg(short, long, global = true)]
    data: Option<ProjectSource>,

    /// Directory holding the offline cache database
    #[arg(long, global = true)]
    cache_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List projects as cards, optionally filtered by stack
    List {
        /// Stack token (laravel, nextjs, mern, go, java, kotlin, php) or "all"
        #[arg(short, long)]
        stack: Option<FilterToken>,
    },

    /// Show the full details of one project
    Show {
        /// Project id, or a `/portfolio-details?id=<id>` link
        id: String,
    },

    /// Check a data file without falling back
    Validate {
        /// Path to a `{ "projects": [...] }` document
        file: PathBuf,
    },

    /// Offline cache maintenance
    Cache {
        #[command(subcommand)]
        action: CacheAction,
    },
}

#[derive(Subcommand)]
enum CacheAction {
    /// List cache generations
    List,

    /// Make a generation current, deleting all others
    Activate {
        /// Cache name to keep
        #[arg(short, long, default_value = DEFAULT_CACHE_NAME)]
        name: String,
    },
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Get the default cache directory (<cache>/portfolio)
fn default_cache_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("portfolio")
}

/// Accept either a bare id or anything carrying an `id=` query.
fn parse_project_ref(raw: &str) -> Option<String> {
    match raw.split_once('?') {
        Some((_, query)) => query_param(query, ID_PARAM),
        None if raw.contains('=') => query_param(raw, ID_PARAM),
        None => Some(raw.trim().to_string()).filter(|id| !id.is_empty()),
    }
}

fn open_cache(dir: &Path) -> Result<RedbCacheStorage> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create cache directory {}", dir.display()))?;
    let path = dir.join("offline.redb");
    RedbCacheStorage::open(&path)
        .with_context(|| format!("Failed to open cache database {}", path.display()))
}

fn print_grid(grid: &CardContainer) {
    for node in grid.nodes() {
        match node {
            GridNode::Card(card) => {
                println!("{:<28} [{}] {}", card.id, card.stack_badge, card.title);
                if !card.short.is_empty() {
                    println!("  {}", card.short);
                }
                if !card.tech.is_empty() {
                    println!("  Tech: {}", card.tech.join(", "));
                }
                if let Some(impact) = &card.impact {
                    println!("  Impact: {} {}", impact.value, impact.label);
                }
            }
            GridNode::Placeholder(message) => println!("{message}"),
        }
    }
}

fn print_project(view: &ModalView) {
    println!("{}", view.title);
    println!("  ID:       {}", view.project_id);
    println!("  Stack:    {}", view.stack_name);
    println!("  Role:     {}", view.role);
    println!("  Category: {}", view.category);
    println!("  Date:     {}", view.date);
    println!();
    println!("{}", view.description);

    if view.show_highlights() {
        println!();
        println!("Key Features:");
        for item in &view.highlights {
            println!("  - {item}");
        }
    }
    if view.show_tech() {
        println!();
        println!("Technologies: {}", view.tech.join(", "));
    }
    if view.show_impact() {
        println!();
        println!("Impact:");
        for entry in &view.impact {
            println!("  {:<12} {}", entry.value, entry.label);
        }
    }
    if let Some(url) = &view.demo_url {
        println!();
        println!("Live Demo: {url}");
    }
    if let Some(url) = &view.github_url {
        println!("Code:      {url}");
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    let cache_dir = cli.cache_dir.unwrap_or_else(default_cache_dir);
    let mut config = PortfolioConfig::new().with_cache_path(cache_dir.join("offline.redb"));
    if let Some(source) = cli.data {
        config = config.with_source(source);
    }

    match cli.command {
        Commands::List { stack } => {
            let loaded = store::load(&config).await;
            if loaded.is_fallback() {
                println!("Project data unavailable ({}); showing built-in list.", config.source);
                println!();
            }

            let token = stack.unwrap_or_default();
            let mut grid = CardContainer::new();
            grid.render(token.apply(loaded.list()));

            println!("Projects ({}): {}", token.label(), grid.card_count());
            println!();
            print_grid(&grid);
        }

        Commands::Show { id } => {
            let Some(id) = parse_project_ref(&id) else {
                bail!("No project id given");
            };
            let loaded = store::load(&config).await;
            let project = loaded.get(&id)?;
            print_project(&ModalView::from_project(project));
        }

        Commands::Validate { file } => {
            let bytes = tokio::fs::read(&file)
                .await
                .with_context(|| format!("Failed to read {}", file.display()))?;
            let parsed = ProjectStore::from_json(&bytes)
                .with_context(|| format!("Invalid project data in {}", file.display()))?;

            println!("OK: {} projects in {}", parsed.len(), file.display());
            for stack in portfolio_core::Stack::FILTERABLE {
                let count = FilterToken::Stack(stack.clone()).apply(parsed.list()).len();
                if count > 0 {
                    println!("  {:<10} {}", stack.display_name(), count);
                }
            }
        }

        Commands::Cache { action } => match action {
            CacheAction::List => {
                let cache = open_cache(&cache_dir)?;
                let names = cache.cache_names()?;
                if names.is_empty() {
                    println!("No caches.");
                } else {
                    println!("Caches ({}):", names.len());
                    for name in names {
                        let marker = if name == config.cache_name { " (current)" } else { "" };
                        println!("  {name}{marker}");
                    }
                }
            }

            CacheAction::Activate { name } => {
                let cache = open_cache(&cache_dir)?;
                let scope = match &config.source {
                    ProjectSource::Url(url) => url.clone(),
                    ProjectSource::File(_) => Url::parse("http://localhost/")?,
                };
                let mut worker = OfflineWorker::new(HttpNetwork::new()?, cache, scope, name.clone());
                worker.install();
                let deleted = worker.activate()?;

                println!("Activated cache: {name}");
                if deleted.is_empty() {
                    println!("No stale caches.");
                } else {
                    for old in deleted {
                        println!("  Deleted: {old}");
                    }
                }
            }
        },
    }

    Ok(())
}
