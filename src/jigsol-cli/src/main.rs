mod cli;
mod commands;
mod config;

use anyhow::Result;
use clap::Parser;
use config::Config;
use jigsol::Highlight;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cli::*;

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "jigsol=debug,jigsol_cli=debug"
    } else {
        "jigsol=info,jigsol_cli=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config_path = match cli.config {
        Some(path) => path,
        None => Config::config_path()?,
    };
    // configure reads the file itself so it can repair a broken one
    let config = match &cli.command {
        Commands::Configure { .. } => Config::default(),
        _ => Config::load_from(&config_path)?,
    };
    tracing::debug!(path = %config_path.display(), ?config, "loaded config");

    match cli.command {
        Commands::Configure {
            metadata,
            bundle,
            show,
        } => {
            let updates = commands::configure::Updates {
                metadata,
                bundle,
                analysis_dir: cli.analysis_dir,
            };
            return commands::configure::handle(&config_path, updates, show);
        }

        Commands::Metadata { metadata } => {
            commands::extract::metadata(
                &config.metadata_path(metadata),
                &config.analysis_dir(cli.analysis_dir),
            )?;
        }

        Commands::BoardHighlights { limit } => {
            commands::extract::highlights(
                &config.analysis_dir(cli.analysis_dir),
                Highlight::Board,
                limit,
            )?;
        }

        Commands::PieceHighlights { limit } => {
            commands::extract::highlights(
                &config.analysis_dir(cli.analysis_dir),
                Highlight::Piece,
                limit,
            )?;
        }

        Commands::HomeBoard { bundle, limit } => {
            commands::extract::home_board(
                &config.bundle_path(bundle),
                &config.analysis_dir(cli.analysis_dir),
                limit,
            )?;
        }

        Commands::PieceSettings { bundle, sizes } => {
            commands::extract::piece_settings(
                &config.bundle_path(bundle),
                &config.analysis_dir(cli.analysis_dir),
                &sizes,
            )?;
        }

        Commands::All { metadata, bundle } => {
            commands::extract::all(
                &config.metadata_path(metadata),
                &config.bundle_path(bundle),
                &config.analysis_dir(cli.analysis_dir),
            )?;
        }
    }

    println!("done");
    Ok(())
}
