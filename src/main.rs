//! Admin quick-search demo server.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use admin_search::http::{router, AppState};
use admin_search::{EditLinks, InMemoryStore, QuickSearch, SearchSettings, StaticResources};

/// Admin quick search - multi-entity search endpoint for a store admin panel
#[derive(Parser)]
#[command(name = "admin-search")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the quick-search endpoint over an in-memory dataset
    Serve(ServeArgs),

    /// Print the effective search settings as JSON
    Settings(SettingsArgs),
}

#[derive(Parser)]
struct ServeArgs {
    /// Address to bind
    #[arg(short, long, default_value = "127.0.0.1:8080")]
    bind: SocketAddr,

    /// JSON dataset file (products, categories, manufacturers, topics,
    /// news, blog_posts, customers, orders)
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// JSON settings file; missing fields keep their defaults
    #[arg(short, long)]
    settings: Option<PathBuf>,

    /// Content root prepended to edit links ('/path' prefix or absolute URL)
    #[arg(short, long, default_value = "")]
    content_root: String,
}

#[derive(Parser)]
struct SettingsArgs {
    /// JSON settings file to merge over the defaults
    #[arg(short, long)]
    settings: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Serve(args) => run_serve(args).await,
        Commands::Settings(args) => print_settings(args),
    }
}

async fn run_serve(args: ServeArgs) -> Result<()> {
    let settings = load_settings(args.settings.as_deref())?;
    let content_root = validate_content_root(&args.content_root)?;

    let store = match &args.data {
        Some(path) => load_store(path)?,
        None => InMemoryStore::default(),
    };
    info!(
        products = store.products.len(),
        categories = store.categories.len(),
        manufacturers = store.manufacturers.len(),
        topics = store.topics.len(),
        news = store.news.len(),
        blog_posts = store.blog_posts.len(),
        customers = store.customers.len(),
        orders = store.orders.len(),
        "dataset loaded"
    );

    let search = QuickSearch::new(Arc::new(store))
        .with_resources(Arc::new(StaticResources::english()))
        .with_links(EditLinks::new(content_root));
    let state = AppState::new(Arc::new(search), settings);

    let listener = tokio::net::TcpListener::bind(args.bind)
        .await
        .with_context(|| format!("binding {}", args.bind))?;
    info!("quick search listening on http://{}", listener.local_addr()?);

    axum::serve(listener, router(state))
        .await
        .context("server error")?;
    Ok(())
}

fn print_settings(args: SettingsArgs) -> Result<()> {
    let settings = load_settings(args.settings.as_deref())?;
    println!("{}", serde_json::to_string_pretty(&settings)?);
    Ok(())
}

fn load_settings(path: Option<&Path>) -> Result<SearchSettings> {
    match path {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("reading settings file {}", path.display()))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("parsing settings file {}", path.display()))
        }
        None => Ok(SearchSettings::default()),
    }
}

fn load_store(path: &Path) -> Result<InMemoryStore> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading dataset file {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing dataset file {}", path.display()))
}

/// Accepts an empty root, a '/'-prefixed path, or an absolute URL.
fn validate_content_root(root: &str) -> Result<String> {
    if root.contains("://") {
        url::Url::parse(root).with_context(|| format!("invalid content root '{root}'"))?;
    } else if !root.is_empty() && !root.starts_with('/') {
        anyhow::bail!("content root must be an absolute URL or start with '/'");
    }
    Ok(root.to_string())
}
