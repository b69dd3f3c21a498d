//! Core CLI definitions

use clap::{Parser, Subcommand};
use jigsol::{HIGHLIGHT_CAP, HOME_BOARD_EXCERPT_LIMIT};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "jigsol")]
#[command(about = "Jigsaw Solitaire asset miner", long_about = None)]
pub struct Cli {
    /// Config file (defaults to the user config directory)
    #[arg(long, global = true, env = "JIGSOL_CONFIG")]
    pub config: Option<PathBuf>,

    /// Directory extracted files are written to
    #[arg(short, long, global = true)]
    pub analysis_dir: Option<PathBuf>,

    /// Log debug details
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Split global-metadata.dat into core, piece and board token files
    #[command(visible_alias = "m")]
    Metadata {
        /// Path to global-metadata.dat
        metadata: Option<PathBuf>,
    },

    /// Pick board highlights out of metadata_board_tokens.txt
    #[command(visible_alias = "bh")]
    BoardHighlights {
        /// Maximum lines to keep
        #[arg(short = 'n', long, default_value_t = HIGHLIGHT_CAP)]
        limit: usize,
    },

    /// Pick piece highlights out of metadata_piece_tokens.txt
    #[command(visible_alias = "ph")]
    PieceHighlights {
        /// Maximum lines to keep
        #[arg(short = 'n', long, default_value_t = HIGHLIGHT_CAP)]
        limit: usize,
    },

    /// Excerpt the board master list from HomeBoardList.txt
    #[command(visible_alias = "hb")]
    HomeBoard {
        /// Asset bundle export directory
        bundle: Option<PathBuf>,

        /// Number of boards to keep
        #[arg(short = 'n', long, default_value_t = HOME_BOARD_EXCERPT_LIMIT)]
        limit: usize,
    },

    /// Dump piece setting type trees (3x3, 4x4, 5x5)
    #[command(visible_alias = "ps")]
    PieceSettings {
        /// Asset bundle export directory
        bundle: Option<PathBuf>,

        /// Board sizes to extract, comma separated
        #[arg(short, long, value_delimiter = ',')]
        sizes: Vec<String>,
    },

    /// Run every extraction in dependency order
    All {
        /// Path to global-metadata.dat
        #[arg(long)]
        metadata: Option<PathBuf>,

        /// Asset bundle export directory
        #[arg(long)]
        bundle: Option<PathBuf>,
    },

    /// Configure default paths
    #[command(visible_alias = "c")]
    Configure {
        /// Set default metadata path
        #[arg(long)]
        metadata: Option<PathBuf>,

        /// Set default bundle export directory
        #[arg(long)]
        bundle: Option<PathBuf>,

        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_highlight_default_limit() {
        let cli = Cli::try_parse_from(["jigsol", "board-highlights"]).unwrap();
        match cli.command {
            Commands::BoardHighlights { limit } => assert_eq!(limit, 40),
            _ => panic!("wrong command"),
        }
    }

    #[test]
    fn test_global_analysis_dir_after_subcommand() {
        let cli = Cli::try_parse_from(["jigsol", "home-board", "export", "-a", "out", "-n", "3"])
            .unwrap();
        assert_eq!(cli.analysis_dir, Some(PathBuf::from("out")));
        match cli.command {
            Commands::HomeBoard { bundle, limit } => {
                assert_eq!(bundle, Some(PathBuf::from("export")));
                assert_eq!(limit, 3);
            }
            _ => panic!("wrong command"),
        }
    }

    #[test]
    fn test_piece_sizes_split() {
        let cli = Cli::try_parse_from(["jigsol", "ps", "--sizes", "3x3,5x5"]).unwrap();
        match cli.command {
            Commands::PieceSettings { bundle, sizes } => {
                assert_eq!(bundle, None);
                assert_eq!(sizes, vec!["3x3", "5x5"]);
            }
            _ => panic!("wrong command"),
        }
    }
}
