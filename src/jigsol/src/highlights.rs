//! Board and piece highlight excerpts
//!
//! Reads a token file written by [`MetadataTokens::write_to`] and keeps the
//! first lines naming a known identifier.
//!
//! [`MetadataTokens::write_to`]: crate::MetadataTokens::write_to

use crate::filter::{select_lines, KeywordFilter, TokenClass};
use crate::output::write_text;
use crate::{Error, Result};
use std::path::{Path, PathBuf};

/// Default number of lines kept per highlight file
pub const HIGHLIGHT_CAP: usize = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Highlight {
    Board,
    Piece,
}

impl Highlight {
    /// Token class whose file is the input
    pub fn source_class(self) -> TokenClass {
        match self {
            Highlight::Board => TokenClass::Board,
            Highlight::Piece => TokenClass::Piece,
        }
    }

    pub fn source_file(self) -> &'static str {
        self.source_class().file_name()
    }

    pub fn output_file(self) -> &'static str {
        match self {
            Highlight::Board => "metadata_board_highlights.txt",
            Highlight::Piece => "metadata_piece_highlights.txt",
        }
    }

    pub fn filter(self) -> KeywordFilter {
        match self {
            Highlight::Board => KeywordFilter::board_highlights(),
            Highlight::Piece => KeywordFilter::piece_highlights(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightReport {
    pub output: PathBuf,
    pub lines: Vec<String>,
}

/// Select highlight lines from the token file in `analysis_dir`
pub fn extract_highlights(
    analysis_dir: &Path,
    highlight: Highlight,
    cap: usize,
) -> Result<HighlightReport> {
    let source = analysis_dir.join(highlight.source_file());
    let text = std::fs::read_to_string(&source).map_err(|e| Error::io(&source, e))?;

    let lines: Vec<String> = select_lines(&text, &highlight.filter(), cap)
        .into_iter()
        .map(str::to_string)
        .collect();

    let output = analysis_dir.join(highlight.output_file());
    write_text(&output, &lines.join("\n"))?;

    tracing::info!(
        source = %source.display(),
        kept = lines.len(),
        cap,
        "extracted {:?} highlights",
        highlight
    );

    Ok(HighlightReport { output, lines })
}
