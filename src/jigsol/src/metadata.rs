//! Readable token sets mined from `global-metadata.dat`
//!
//! The IL2CPP metadata blob stores its string tables as null-terminated
//! UTF-8. Splitting the whole file on `\0` is enough to surface type, method
//! and field names without understanding the table layout.

use crate::filter::{KeywordFilter, TokenClass};
use crate::output::{ensure_dir, join_with_header, write_text};
use crate::token::split_tokens;
use crate::{Error, Result};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Sorted, deduplicated tokens per class
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetadataTokens {
    pub core: BTreeSet<String>,
    pub piece: BTreeSet<String>,
    pub board: BTreeSet<String>,
}

/// Token counts for reporting
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MetadataSummary {
    pub tokens_scanned: usize,
    pub core: usize,
    pub piece: usize,
    pub board: usize,
}

impl MetadataTokens {
    /// Classify every token of the blob in a single pass
    pub fn from_blob(blob: &[u8]) -> Self {
        Self::collect(split_tokens(blob)).0
    }

    /// Read and classify a metadata file
    pub fn from_file(path: &Path) -> Result<(Self, MetadataSummary)> {
        let blob = std::fs::read(path).map_err(|e| Error::io(path, e))?;
        let (tokens, scanned) = Self::collect(split_tokens(&blob));

        let summary = tokens.summary(scanned);
        tracing::info!(
            path = %path.display(),
            scanned = summary.tokens_scanned,
            core = summary.core,
            piece = summary.piece,
            board = summary.board,
            "classified metadata tokens"
        );
        Ok((tokens, summary))
    }

    fn collect<I: Iterator<Item = String>>(tokens: I) -> (Self, usize) {
        let filters: Vec<(TokenClass, KeywordFilter)> =
            TokenClass::ALL.iter().map(|&c| (c, c.filter())).collect();

        let mut result = Self::default();
        let mut scanned = 0;

        for token in tokens {
            scanned += 1;
            for (class, filter) in &filters {
                if filter.matches(&token) {
                    result.set_mut(*class).insert(token.clone());
                }
            }
        }

        (result, scanned)
    }

    pub fn set(&self, class: TokenClass) -> &BTreeSet<String> {
        match class {
            TokenClass::Core => &self.core,
            TokenClass::Piece => &self.piece,
            TokenClass::Board => &self.board,
        }
    }

    fn set_mut(&mut self, class: TokenClass) -> &mut BTreeSet<String> {
        match class {
            TokenClass::Core => &mut self.core,
            TokenClass::Piece => &mut self.piece,
            TokenClass::Board => &mut self.board,
        }
    }

    pub fn summary(&self, tokens_scanned: usize) -> MetadataSummary {
        MetadataSummary {
            tokens_scanned,
            core: self.core.len(),
            piece: self.piece.len(),
            board: self.board.len(),
        }
    }

    /// Render one class as its output file content
    pub fn render(&self, class: TokenClass) -> String {
        join_with_header(class.header(), self.set(class).iter().map(String::as_str))
    }

    /// Write the three token files into `dir`, creating it if needed
    pub fn write_to(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        ensure_dir(dir)?;

        TokenClass::ALL
            .iter()
            .map(|&class| {
                let path = dir.join(class.file_name());
                write_text(&path, &self.render(class))?;
                Ok(path)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_core_tokens() {
        let tokens = MetadataTokens::from_blob(b"Game.Core|Foo\x00Bar\x00Piece.Baz\x00");
        assert_eq!(tokens.core, set(&["Game.Core|Foo"]));
        assert_eq!(tokens.piece, set(&["Piece.Baz"]));
        assert!(tokens.board.is_empty());
    }

    #[test]
    fn test_duplicates_collapse_and_sort() {
        let blob = b"PieceGroup\x00BoardGrid\x00\x03PieceGroup\x00HomeBoard\x00BoardGrid\x00";
        let tokens = MetadataTokens::from_blob(blob);
        assert_eq!(tokens.piece, set(&["PieceGroup"]));
        assert_eq!(
            tokens.board.iter().collect::<Vec<_>>(),
            vec!["BoardGrid", "HomeBoard"]
        );
    }

    #[test]
    fn test_token_in_several_classes() {
        let tokens = MetadataTokens::from_blob(b"Game.Core|PieceGroupBoardSize\x00");
        assert_eq!(tokens.core.len(), 1);
        assert_eq!(tokens.piece.len(), 1);
        assert_eq!(tokens.board.len(), 1);
    }

    #[test]
    fn test_control_chars_stripped_before_prefix_check() {
        let tokens = MetadataTokens::from_blob(b"\x0eOnlyPerfectPiece\x00\x1fShufflePieces\x00");
        assert_eq!(tokens.piece, set(&["OnlyPerfectPiece", "ShufflePieces"]));
    }

    #[test]
    fn test_write_files() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("analysis");
        let tokens = MetadataTokens::from_blob(
            b"Game.Core|Board\x00PieceTextureCache\x00PiecePrefab\x00CreateBoard\x00",
        );

        let written = tokens.write_to(&out).unwrap();
        assert_eq!(written.len(), 3);

        let core = std::fs::read_to_string(out.join("metadata_core.txt")).unwrap();
        assert_eq!(core, "Game.Core types and helpers\nGame.Core|Board");

        let piece = std::fs::read_to_string(out.join("metadata_piece_tokens.txt")).unwrap();
        assert_eq!(piece, "Piece-related tokens\nPiecePrefab\nPieceTextureCache");

        let board = std::fs::read_to_string(out.join("metadata_board_tokens.txt")).unwrap();
        assert_eq!(board, "Board-related tokens\nCreateBoard");
    }

    #[test]
    fn test_empty_class_still_has_header() {
        let tokens = MetadataTokens::from_blob(b"nothing here\x00");
        assert_eq!(tokens.render(TokenClass::Board), "Board-related tokens\n");
    }

    #[test]
    fn test_from_file_summary() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("global-metadata.dat");
        std::fs::write(&path, b"\xaf\x1b\x11\x00Game.Core|A\x00BoardInfo\x00BoardInfo\x00").unwrap();

        let (tokens, summary) = MetadataTokens::from_file(&path).unwrap();
        assert_eq!(summary.tokens_scanned, 5);
        assert_eq!(summary.core, 1);
        assert_eq!(summary.board, 1);
        assert_eq!(summary.piece, 0);
        assert!(tokens.board.contains("BoardInfo"));
    }

    #[test]
    fn test_from_file_missing() {
        let err = MetadataTokens::from_file(Path::new("/nonexistent/global-metadata.dat"))
            .unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}
