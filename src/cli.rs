use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "lanreel")]
#[command(author, version, about = "Serve a media folder to devices on your LAN")]
pub struct Cli {
    /// Path to a JSON config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Location of the media library.
#[derive(Args)]
pub struct LibraryArgs {
    /// Media root directory (defaults to the current directory)
    #[arg(long, env = lr_core::config::MEDIA_ROOT_ENV)]
    pub media_root: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP server
    Serve {
        /// Host to bind to
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,

        /// Directory for the static-file fallback (defaults to the current directory)
        #[arg(long)]
        static_dir: Option<PathBuf>,

        #[command(flatten)]
        library: LibraryArgs,
    },

    /// Print the catalog the server would return from /files.json
    Catalog {
        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,

        #[command(flatten)]
        library: LibraryArgs,
    },

    /// Display version information
    Version,
}
