//! ArchieWiki - building architecture catalog
//!
//! Command-line front end over the embedded catalog of walls, roofs,
//! columns, floors, windows, doors and stairs.
//!
//! # Usage
//!
//! ```bash
//! archiewiki categories
//! archiewiki browse --category stairs --sort popular
//! archiewiki search glass --json
//! archiewiki item brick_wall --image 1
//! ```

use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use archiewiki::cli::{
    BrowseArgs, CategoriesArgs, CategoryArgs, CheckArgs, CliResult, ConfigArgs, ItemArgs,
    PopularArgs, SearchArgs, Session,
};
use archiewiki::constants::{APP_BINARY_NAME, APP_NAME};

/// ArchieWiki - browse and search building architecture components
#[derive(Parser, Debug)]
#[command(name = APP_BINARY_NAME, author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List all categories
    Categories(CategoriesArgs),
    /// Show a category and its items
    Category(CategoryArgs),
    /// Browse all items with optional filter and sort
    Browse(BrowseArgs),
    /// Search items
    Search(SearchArgs),
    /// Show an item's details
    Item(ItemArgs),
    /// List popular items
    Popular(PopularArgs),
    /// Check catalog integrity
    Check(CheckArgs),
    /// Manage configuration
    Config(ConfigArgs),
}

impl Command {
    async fn execute(&self) -> CliResult<()> {
        if let Self::Config(args) = self {
            return args.execute();
        }

        let session = Session::open()?;
        match self {
            Self::Categories(args) => args.execute(&session).await,
            Self::Category(args) => args.execute(&session).await,
            Self::Browse(args) => args.execute(&session).await,
            Self::Search(args) => args.execute(&session).await,
            Self::Item(args) => args.execute(&session).await,
            Self::Popular(args) => args.execute(&session).await,
            Self::Check(args) => args.execute(&session),
            Self::Config(args) => args.execute(),
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays parseable
    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("{} v{}", APP_NAME, env!("CARGO_PKG_VERSION"));
    debug!(command = ?cli.command, "dispatching");

    if let Err(err) = cli.command.execute().await {
        eprintln!("Error: {}", err.message);
        std::process::exit(err.code.code());
    }
}
