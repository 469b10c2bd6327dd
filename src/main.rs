mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands, LibraryArgs};
use lr_core::config::Config;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "lanreel=trace,lr_server=trace,lr_catalog=debug,lr_core=debug,tower_http=debug"
                .to_string()
        } else {
            "lanreel=info,lr_server=info,lr_catalog=info,lr_core=info,tower_http=info".to_string()
        }
    });

    // Logs go to stderr so `catalog` output stays clean JSON.
    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(std::io::stderr)
        .init();

    let mut config = Config::load_or_default(cli.config.as_deref());
    tracing::debug!(?config, "Loaded configuration");

    match cli.command {
        Commands::Serve {
            host,
            port,
            static_dir,
            library,
        } => {
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            if let Some(dir) = static_dir {
                config.server.static_dir = Some(dir);
            }
            apply_library_args(&mut config, library);

            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(lr_server::start(config))
                .context("Error starting server")
        }
        Commands::Catalog { pretty, library } => {
            apply_library_args(&mut config, library);
            print_catalog(&config, pretty)
        }
        Commands::Version => {
            println!("lanreel {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

fn apply_library_args(config: &mut Config, library: LibraryArgs) {
    if let Some(root) = library.media_root {
        config.library.root = Some(root);
    }
}

fn print_catalog(config: &Config, pretty: bool) -> Result<()> {
    let root = config.resolve_media_root()?;
    let catalog = lr_catalog::try_build_catalog(&root)
        .with_context(|| format!("Failed to list {}", root.display()))?;

    let json = if pretty {
        serde_json::to_string_pretty(&catalog)?
    } else {
        serde_json::to_string(&catalog)?
    };
    println!("{json}");
    Ok(())
}
