mod cmd;
mod output;
mod root;

use clap::{Parser, Subcommand};
use cmd::{carousel::CarouselSubcommand, catalog::CatalogSubcommand, layer::LayerSubcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "eato",
    about = "EatoSystems roadmap: catalog, launch timeline, layer styles and carousels",
    version,
    propagate_version = true
)]
struct Cli {
    /// Project root (default: auto-detect from .eato/ or .git/)
    #[arg(long, global = true, env = "EATO_ROOT")]
    root: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the built-in EatoSystems content to .eato/
    Init {
        /// Replace existing content files
        #[arg(long)]
        force: bool,
    },

    /// Validate content: integrity errors fail, fallbacks are reported as warnings
    Check,

    /// Inspect the system catalog
    Catalog {
        #[command(subcommand)]
        subcommand: CatalogSubcommand,
    },

    /// Show the roadmap schedule
    Schedule,

    /// Show the joined launch timeline
    Timeline {
        /// Expand one system's card
        #[arg(long)]
        expand: Option<String>,
    },

    /// Resolve layer styles and image keywords
    Layer {
        #[command(subcommand)]
        subcommand: LayerSubcommand,
    },

    /// Inspect and simulate carousels
    Carousel {
        #[command(subcommand)]
        subcommand: CarouselSubcommand,
    },

    /// Serve the roadmap over HTTP
    Serve {
        /// Port to listen on (default: server.port from config)
        #[arg(long)]
        port: Option<u16>,

        /// Open a browser once listening
        #[arg(long)]
        open: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let default_level = match &cli.command {
        Commands::Serve { .. } => tracing::Level::INFO,
        _ => tracing::Level::WARN,
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let root = root::resolve_root(cli.root.as_deref());

    let result = match cli.command {
        Commands::Init { force } => cmd::init::run(&root, force, cli.json),
        Commands::Check => cmd::check::run(&root, cli.json),
        Commands::Catalog { subcommand } => cmd::catalog::run(&root, subcommand, cli.json),
        Commands::Schedule => cmd::schedule::run(&root, cli.json),
        Commands::Timeline { expand } => cmd::timeline::run(&root, expand.as_deref(), cli.json),
        Commands::Layer { subcommand } => cmd::layer::run(subcommand, cli.json),
        Commands::Carousel { subcommand } => cmd::carousel::run(&root, subcommand, cli.json),
        Commands::Serve { port, open } => cmd::serve::run(&root, port, open),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
