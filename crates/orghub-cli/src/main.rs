//! OrgHub PWA CLI - club manifest and installer page generation.

use clap::{Parser, Subcommand};

mod commands;
mod fetch;

use commands::{render, sync};

#[derive(Parser)]
#[command(name = "orghub-pwa")]
#[command(about = "OrgHub club PWA manifest and installer generation")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the club list and reconcile the artifact directories
    Sync {
        /// Club list endpoint URL
        #[arg(long, env = "ORGHUB_SOURCE_URL")]
        source_url: String,
        /// Directory for generated manifests
        #[arg(long, default_value = "manifests")]
        manifests_dir: String,
        /// Directory for installer pages
        #[arg(long, default_value = "install")]
        install_dir: String,
        /// Overall HTTP timeout for the fetch, in seconds
        #[arg(long, default_value_t = 30)]
        timeout: u64,
        /// Print the plan without touching the filesystem
        #[arg(long)]
        dry_run: bool,
    },
    /// Reconcile from a local club list JSON file (or stdin)
    Render {
        /// Input JSON file (or stdin if not provided)
        input: Option<String>,
        /// Directory for generated manifests
        #[arg(long, default_value = "manifests")]
        manifests_dir: String,
        /// Directory for installer pages
        #[arg(long, default_value = "install")]
        install_dir: String,
        /// Print the plan without touching the filesystem
        #[arg(long)]
        dry_run: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Sync {
            source_url,
            manifests_dir,
            install_dir,
            timeout,
            dry_run,
        } => sync::run(source_url, manifests_dir, install_dir, timeout, dry_run),
        Commands::Render {
            input,
            manifests_dir,
            install_dir,
            dry_run,
        } => render::run(input, manifests_dir, install_dir, dry_run),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
