//! glb-inspect - GLB container and accessor inspector
//!
//! Decodes `.glb` containers (or `.gltf` documents with external buffers)
//! and prints buffer, buffer view and accessor summaries.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod config;
mod load;
mod report;

use config::InspectConfig;

#[derive(Parser)]
#[command(name = "glb-inspect")]
#[command(about = "Inspect GLB containers and glTF accessors")]
#[command(version)]
struct Cli {
    /// TOML file with a [decode] table
    #[arg(short, long, global = true, default_value = "glb-inspect.toml")]
    config: PathBuf,

    /// Debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize buffers, buffer views and accessors
    Info {
        /// Input .glb or .gltf file
        input: PathBuf,
    },

    /// Print the components of one accessor
    Accessor {
        /// Input .glb or .gltf file
        input: PathBuf,

        /// Accessor index
        index: usize,

        /// First element to print
        #[arg(short, long, default_value_t = 0)]
        offset: usize,

        /// Number of elements (0 = all remaining)
        #[arg(short = 'n', long, default_value_t = 0)]
        count: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = InspectConfig::load(&cli.config)?;

    match cli.command {
        Commands::Info { input } => {
            tracing::debug!("Inspecting {:?}", input);
            let asset = load::load_asset(&input, &config.decode)?;
            print!("{}", report::info(&asset)?);
        }

        Commands::Accessor {
            input,
            index,
            offset,
            count,
        } => {
            tracing::debug!("Accessor {} of {:?}", index, input);
            let asset = load::load_asset(&input, &config.decode)?;
            print!("{}", report::accessor(&asset, index, offset, count)?);
        }
    }

    Ok(())
}
