//! Token kinds and contextual keywords for Cypher.
//!
//! Logos derives token recognition directly on [`SyntaxKind`]. Cypher keywords
//! are case-insensitive and most of them are legal as identifiers (labels,
//! property keys, relationship types), so the lexer emits every word as [`Id`]
//! and the parser recognises [`Keyword`]s by comparing text.
//!
//! [`Id`]: SyntaxKind::Id

use logos::Logos;

/// All token kinds produced by the lexer.
///
/// `#[repr(u16)]` keeps discriminants small enough for [`TokenSet`].
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
pub enum SyntaxKind {
    #[token("(")]
    ParenOpen = 0,

    #[token(")")]
    ParenClose,

    #[token("[")]
    BracketOpen,

    #[token("]")]
    BracketClose,

    #[token("{")]
    BraceOpen,

    #[token("}")]
    BraceClose,

    #[token(",")]
    Comma,

    #[token(";")]
    Semicolon,

    /// Range separator in variable-length relationships and slices: `*1..3`, `xs[1..2]`
    /// Must be defined before single Dot for correct precedence
    #[token("..")]
    DotDot,

    #[token(".")]
    Dot,

    #[token(":")]
    Colon,

    #[token("|")]
    Pipe,

    #[token("$")]
    Dollar,

    #[token("=~")]
    RegexMatch,

    #[token("+=")]
    PlusEquals,

    #[token("=")]
    Equals,

    #[token("<>")]
    NotEquals,

    /// Non-standard inequality, accepted and normalized to `<>`
    #[token("!=")]
    BangEquals,

    #[token("<=")]
    LessEquals,

    #[token(">=")]
    GreaterEquals,

    /// Also the head of a left arrow `<-` in relationship patterns
    #[token("<")]
    Less,

    /// Also the tail of a right arrow `->` in relationship patterns
    #[token(">")]
    Greater,

    #[token("+")]
    Plus,

    /// Also the body of relationship arrows
    #[token("-")]
    Minus,

    #[token("*")]
    Star,

    #[token("/")]
    Slash,

    #[token("%")]
    Percent,

    #[token("^")]
    Caret,

    /// String literal, quotes included. Escapes are resolved by the parser.
    #[regex(r#""(?:[^"\\]|\\.)*""#)]
    #[regex(r"'(?:[^'\\]|\\.)*'")]
    StringLiteral,

    #[regex(r"[0-9]+\.[0-9]+(?:[eE][+-]?[0-9]+)?")]
    #[regex(r"[0-9]+[eE][+-]?[0-9]+")]
    #[regex(r"\.[0-9]+(?:[eE][+-]?[0-9]+)?")]
    Float,

    #[regex(r"0[xX][0-9a-fA-F]+")]
    #[regex(r"[0-9]+")]
    Integer,

    /// Bare identifier; also every keyword
    #[regex(r"[\p{L}_][\p{L}\p{N}_]*")]
    Id,

    /// Back-tick quoted identifier, back-ticks included. Doubled back-ticks escape.
    #[regex(r"`(?:[^`]|``)*`")]
    QuotedId,

    #[regex(r"[ \t\r\n\x0C]+")]
    Whitespace,

    #[regex(r"//[^\n]*", allow_greedy = true)]
    LineComment,

    #[regex(r"/\*(?:[^*]|\*[^/])*\*/")]
    BlockComment,

    /// Consecutive unrecognized characters (coalesced by lexer)
    Garbage,

    /// End-of-input sentinel returned by lookahead past the last token
    Error,
}

use SyntaxKind::*;

impl SyntaxKind {
    #[inline]
    pub fn is_trivia(self) -> bool {
        matches!(self, Whitespace | LineComment | BlockComment)
    }

    #[inline]
    pub fn is_error(self) -> bool {
        matches!(self, Error | Garbage)
    }

    /// Human-readable form used in diagnostics.
    pub fn describe(self) -> &'static str {
        match self {
            ParenOpen => "`(`",
            ParenClose => "`)`",
            BracketOpen => "`[`",
            BracketClose => "`]`",
            BraceOpen => "`{`",
            BraceClose => "`}`",
            Comma => "`,`",
            Semicolon => "`;`",
            DotDot => "`..`",
            Dot => "`.`",
            Colon => "`:`",
            Pipe => "`|`",
            Dollar => "`$`",
            RegexMatch => "`=~`",
            PlusEquals => "`+=`",
            Equals => "`=`",
            NotEquals => "`<>`",
            BangEquals => "`!=`",
            LessEquals => "`<=`",
            GreaterEquals => "`>=`",
            Less => "`<`",
            Greater => "`>`",
            Plus => "`+`",
            Minus => "`-`",
            Star => "`*`",
            Slash => "`/`",
            Percent => "`%`",
            Caret => "`^`",
            StringLiteral => "string literal",
            Float => "float literal",
            Integer => "integer literal",
            Id => "identifier",
            QuotedId => "quoted identifier",
            Whitespace => "whitespace",
            LineComment | BlockComment => "comment",
            Garbage => "unrecognized input",
            Error => "end of input",
        }
    }
}

/// 64-bit bitset of `SyntaxKind`s for O(1) membership testing.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct TokenSet(u64);

impl TokenSet {
    pub const EMPTY: TokenSet = TokenSet(0);

    /// Panics at compile time if any kind's discriminant >= 64.
    #[inline]
    pub const fn new(kinds: &[SyntaxKind]) -> Self {
        let mut bits = 0u64;
        let mut i = 0;
        while i < kinds.len() {
            let kind = kinds[i] as u16;
            assert!(kind < 64, "SyntaxKind value exceeds TokenSet capacity");
            bits |= 1 << kind;
            i += 1;
        }
        TokenSet(bits)
    }

    #[inline]
    pub const fn contains(&self, kind: SyntaxKind) -> bool {
        let kind = kind as u16;
        if kind >= 64 {
            return false;
        }
        self.0 & (1 << kind) != 0
    }

    #[inline]
    pub const fn union(self, other: TokenSet) -> TokenSet {
        TokenSet(self.0 | other.0)
    }
}

impl std::fmt::Debug for TokenSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TokenSet({:#x})", self.0)
    }
}

/// Pre-defined token sets for the parser.
pub mod token_sets {
    use super::*;

    /// Tokens that may start an atom (keyword-led atoms start with `Id`).
    pub const ATOM_FIRST: TokenSet = TokenSet::new(&[
        ParenOpen,
        BracketOpen,
        BraceOpen,
        Dollar,
        StringLiteral,
        Float,
        Integer,
        Id,
        QuotedId,
    ]);

    pub const EXPR_FIRST: TokenSet = ATOM_FIRST.union(TokenSet::new(&[Plus, Minus]));

    pub const NAME: TokenSet = TokenSet::new(&[Id, QuotedId]);

    pub const TRIVIA: TokenSet = TokenSet::new(&[Whitespace, LineComment, BlockComment]);
}

/// Contextual keywords. Matched case-insensitively against `Id` tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    All,
    AllShortestPaths,
    And,
    Any,
    As,
    Asc,
    Ascending,
    By,
    Call,
    Case,
    Contains,
    Copy,
    Count,
    Create,
    Delete,
    Desc,
    Descending,
    Detach,
    Distinct,
    Else,
    End,
    Ends,
    False,
    Foreach,
    In,
    Is,
    Limit,
    Match,
    Merge,
    None,
    Not,
    Null,
    Of,
    On,
    Optional,
    Or,
    Order,
    Remove,
    Return,
    Set,
    ShortestPath,
    Single,
    Skip,
    Starts,
    Then,
    True,
    Union,
    Unwind,
    When,
    Where,
    With,
    Xor,
    Yield,
}

impl Keyword {
    pub fn as_str(self) -> &'static str {
        match self {
            Keyword::All => "ALL",
            Keyword::AllShortestPaths => "allShortestPaths",
            Keyword::And => "AND",
            Keyword::Any => "ANY",
            Keyword::As => "AS",
            Keyword::Asc => "ASC",
            Keyword::Ascending => "ASCENDING",
            Keyword::By => "BY",
            Keyword::Call => "CALL",
            Keyword::Case => "CASE",
            Keyword::Contains => "CONTAINS",
            Keyword::Copy => "COPY",
            Keyword::Count => "COUNT",
            Keyword::Create => "CREATE",
            Keyword::Delete => "DELETE",
            Keyword::Desc => "DESC",
            Keyword::Descending => "DESCENDING",
            Keyword::Detach => "DETACH",
            Keyword::Distinct => "DISTINCT",
            Keyword::Else => "ELSE",
            Keyword::End => "END",
            Keyword::Ends => "ENDS",
            Keyword::False => "FALSE",
            Keyword::Foreach => "FOREACH",
            Keyword::In => "IN",
            Keyword::Is => "IS",
            Keyword::Limit => "LIMIT",
            Keyword::Match => "MATCH",
            Keyword::Merge => "MERGE",
            Keyword::None => "NONE",
            Keyword::Not => "NOT",
            Keyword::Null => "NULL",
            Keyword::Of => "OF",
            Keyword::On => "ON",
            Keyword::Optional => "OPTIONAL",
            Keyword::Or => "OR",
            Keyword::Order => "ORDER",
            Keyword::Remove => "REMOVE",
            Keyword::Return => "RETURN",
            Keyword::Set => "SET",
            Keyword::ShortestPath => "shortestPath",
            Keyword::Single => "SINGLE",
            Keyword::Skip => "SKIP",
            Keyword::Starts => "STARTS",
            Keyword::Then => "THEN",
            Keyword::True => "TRUE",
            Keyword::Union => "UNION",
            Keyword::Unwind => "UNWIND",
            Keyword::When => "WHEN",
            Keyword::Where => "WHERE",
            Keyword::With => "WITH",
            Keyword::Xor => "XOR",
            Keyword::Yield => "YIELD",
        }
    }

    #[inline]
    pub fn matches(self, text: &str) -> bool {
        text.eq_ignore_ascii_case(self.as_str())
    }
}

/// Keywords that start a clause. An identifier spelled like one of these ends
/// the previous clause's item list.
pub const CLAUSE_KEYWORDS: &[Keyword] = &[
    Keyword::Match,
    Keyword::Optional,
    Keyword::Create,
    Keyword::Merge,
    Keyword::Detach,
    Keyword::Delete,
    Keyword::Set,
    Keyword::Remove,
    Keyword::Return,
    Keyword::With,
    Keyword::Unwind,
    Keyword::Call,
    Keyword::Foreach,
    Keyword::Union,
];
