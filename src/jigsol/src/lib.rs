//! Token and configuration mining for Jigsaw Solitaire game assets
//!
//! Every extraction is a linear read → filter → write pass:
//!
//! - **Metadata strings**: split the IL2CPP `global-metadata.dat` blob on
//!   null bytes and sort the readable tokens into core / piece / board sets.
//! - **Highlights**: pick the first lines of a token file that mention a
//!   known board or piece identifier.
//! - **Bundle fields**: read `HomeBoardList.txt` and the `NxN.asset` piece
//!   settings out of an exported asset bundle.
//!
//! Bundle decoding itself is left to an external exporter; this crate only
//! reads its output through [`AssetContainer`].

pub mod asset;
pub mod bundle;
pub mod filter;
pub mod highlights;
pub mod metadata;
pub mod output;
pub mod token;

use std::path::PathBuf;

pub use asset::{AssetContainer, ExportedBundle};
pub use bundle::{
    extract_home_board_list, extract_piece_settings, HomeBoardExcerpt, PieceSettingsReport,
    HOME_BOARD_EXCERPT_LIMIT, PIECE_SIZES,
};
pub use filter::{select_lines, KeywordFilter, Rule, TokenClass};
pub use highlights::{extract_highlights, Highlight, HighlightReport, HIGHLIGHT_CAP};
pub use metadata::{MetadataSummary, MetadataTokens};
pub use token::{clean, decode_ignoring_invalid, split_tokens};

/// Errors from extraction
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in {context}: {source}")]
    Json {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("No asset path ends with '{0}'")]
    MissingEntry(String),

    #[error("Field '{field}' missing or not {expected} in {context}")]
    MissingField {
        field: &'static str,
        expected: &'static str,
        context: String,
    },

    #[error("Not an asset export directory: {0}")]
    NotADirectory(PathBuf),

    #[error("Unknown asset path: {0}")]
    UnknownPath(String),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn json(context: impl Into<String>, source: serde_json::Error) -> Self {
        Error::Json {
            context: context.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
