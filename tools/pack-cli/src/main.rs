//! nether-pack CLI - inspect and produce packed vertex data
//!
//! # Commands
//!
//! - `nether-pack formats` - List supported attribute formats
//! - `nether-pack encode` - Pack f32 components with one attribute format
//! - `nether-pack decode` - Unpack hex bytes with one attribute format
//! - `nether-pack half` - Show binary16 bit patterns for f32 values
//! - `nether-pack vertices` - Pack a JSON vertex list using a TOML layout
//!
//! # Usage
//!
//! ```bash
//! nether-pack encode unorm8x4 1.0 0.5 0.0 1.0
//! nether-pack decode snorm16x2 0180ff7f
//! nether-pack vertices --layout layout.toml --input mesh.json --output mesh.bin
//! ```
//!
//! Log verbosity follows `RUST_LOG` (default `info`).

mod codec;
mod layout;
mod vertices;

use anyhow::Result;
use clap::{Parser, Subcommand};

/// nether-pack CLI - GLSL-style vertex data packing
#[derive(Parser)]
#[command(name = "nether-pack")]
#[command(about = "Pack and unpack GPU vertex attribute data")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List supported attribute formats
    Formats,

    /// Pack f32 components with one attribute format
    Encode(codec::EncodeArgs),

    /// Unpack hex bytes with one attribute format
    Decode(codec::DecodeArgs),

    /// Show binary16 bit patterns for f32 values
    Half(codec::HalfArgs),

    /// Pack a JSON vertex list using a TOML layout
    Vertices(vertices::VerticesArgs),
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Formats => {
            codec::print_formats();
            Ok(())
        }
        Commands::Encode(args) => codec::encode(args),
        Commands::Decode(args) => codec::decode(args),
        Commands::Half(args) => {
            codec::half(args);
            Ok(())
        }
        Commands::Vertices(args) => vertices::execute(args),
    }
}
