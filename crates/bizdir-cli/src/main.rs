mod search;
mod validate;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "bizdir-cli")]
#[command(about = "Business directory catalog tooling")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Load the catalog and report per-category counts
    Validate {
        #[arg(long, env = "BIZDIR_CATALOG_PATH", default_value = "./config/catalog.yaml")]
        catalog: PathBuf,
    },
    /// Run a listing query the way the browser view does
    Search(search::SearchArgs),
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Validate { catalog }) => validate::run(&catalog),
        Some(Commands::Search(args)) => search::run(&args),
        None => {
            println!("bizdir-cli: use --help to list commands");
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests;
