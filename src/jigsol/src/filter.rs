//! Static keyword filters for board and piece identifiers
//!
//! The keyword lists are heuristics picked from the game's class and method
//! names. They are hard-coded on purpose so every run over the same input
//! produces the same files.

/// Marker carried by every type in the game's core namespace
pub const CORE_MARKER: &str = "Game.Core|";

/// Prefixes of piece-related method and type names
pub const PIECE_PREFIXES: &[&str] = &[
    "Piece",
    "OnPiece",
    "Only",
    "GetPiece",
    "ShufflePieces",
    "SetParentPiece",
];

/// Fragments that mark a piece-related token anywhere in the name
pub const PIECE_FRAGMENTS: &[&str] = &["PieceGroup", "PieceTexture"];

/// Board-related identifiers, matched anywhere in the token
pub const BOARD_KEYWORDS: &[&str] = &[
    "HomeBoard",
    "BoardGrid",
    "BoardHelper",
    "BoardInfo",
    "BoardPrefab",
    "BoardSize",
    "PlayHomeBoardFilling",
    "CreateBoard",
    "CaptureHomeBoards",
];

/// Identifiers worth surfacing from the board token list
pub const BOARD_HIGHLIGHT_KEYWORDS: &[&str] = &[
    "BoardGrid",
    "BoardHelper",
    "PlayHomeBoardFilling",
    "CreateBoard",
    "GetBoard",
    "HomeBoard",
    "BoardPrefab",
    "BoardSize",
    "HomeBoardMasterJson",
];

/// Identifiers worth surfacing from the piece token list
pub const PIECE_HIGHLIGHT_KEYWORDS: &[&str] = &[
    "PieceGroup",
    "OnPiece",
    "OnlyHighestPieceOnEmptyColumn",
    "OnlyNextLowerPiece",
    "OnlyPerfectPiece",
    "ShufflePieces",
    "PieceTextureCache",
    "PieceAnimationHandler",
    "PiecePrefab",
    "SetParentPiece",
    "GetPieceGroup",
];

/// A single match rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Token starts with the literal
    Prefix(&'static str),
    /// Literal occurs anywhere in the token
    Contains(&'static str),
}

impl Rule {
    pub fn matches(self, token: &str) -> bool {
        match self {
            Rule::Prefix(p) => token.starts_with(p),
            Rule::Contains(k) => token.contains(k),
        }
    }
}

/// Ordered set of rules; a token matches when any rule does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordFilter {
    rules: Vec<Rule>,
}

impl KeywordFilter {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// Filter matching tokens that contain any of the keywords
    pub fn contains_any(keywords: &[&'static str]) -> Self {
        Self::new(keywords.iter().copied().map(Rule::Contains).collect())
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn matches(&self, token: &str) -> bool {
        self.rules.iter().any(|rule| rule.matches(token))
    }

    /// Core namespace types and helpers
    pub fn core() -> Self {
        Self::contains_any(&[CORE_MARKER])
    }

    /// Piece-related tokens
    pub fn piece() -> Self {
        let rules = PIECE_PREFIXES
            .iter()
            .copied()
            .map(Rule::Prefix)
            .chain(PIECE_FRAGMENTS.iter().copied().map(Rule::Contains))
            .collect();
        Self::new(rules)
    }

    /// Board-related tokens
    ///
    /// A prefix match is also a substring match, so a contains rule per
    /// keyword covers both.
    pub fn board() -> Self {
        Self::contains_any(BOARD_KEYWORDS)
    }

    pub fn board_highlights() -> Self {
        Self::contains_any(BOARD_HIGHLIGHT_KEYWORDS)
    }

    pub fn piece_highlights() -> Self {
        Self::contains_any(PIECE_HIGHLIGHT_KEYWORDS)
    }
}

/// Token classes produced by metadata extraction
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TokenClass {
    Core,
    Piece,
    Board,
}

impl TokenClass {
    pub const ALL: [TokenClass; 3] = [TokenClass::Core, TokenClass::Piece, TokenClass::Board];

    pub fn filter(self) -> KeywordFilter {
        match self {
            TokenClass::Core => KeywordFilter::core(),
            TokenClass::Piece => KeywordFilter::piece(),
            TokenClass::Board => KeywordFilter::board(),
        }
    }

    /// Output file name in the analysis directory
    pub fn file_name(self) -> &'static str {
        match self {
            TokenClass::Core => "metadata_core.txt",
            TokenClass::Piece => "metadata_piece_tokens.txt",
            TokenClass::Board => "metadata_board_tokens.txt",
        }
    }

    /// First line of the output file
    pub fn header(self) -> &'static str {
        match self {
            TokenClass::Core => "Game.Core types and helpers",
            TokenClass::Piece => "Piece-related tokens",
            TokenClass::Board => "Board-related tokens",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            TokenClass::Core => "core",
            TokenClass::Piece => "piece",
            TokenClass::Board => "board",
        }
    }
}

/// Characters that end a line in the token files
///
/// Besides `\n` and `\r` this includes the vertical tab, form feed, the
/// ASCII separators and the Unicode line / paragraph separators. Tokens only
/// lose control characters on the left, so these can appear mid-token.
pub fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c'..='\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Keep non-empty lines matching `filter`, in order, at most `cap` of them.
///
/// `\r\n` splits into a line and an empty piece; empty pieces are dropped.
pub fn select_lines<'a>(text: &'a str, filter: &KeywordFilter, cap: usize) -> Vec<&'a str> {
    text.split(is_line_break)
        .filter(|line| !line.is_empty() && filter.matches(line))
        .take(cap)
        .collect()
}
