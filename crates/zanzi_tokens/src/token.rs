//! A lexical token from a schema buffer

use crate::span::{Span, Spanned};
use std::borrow::Cow;
use std::fmt::{Debug, Formatter};

/// A lexical token from a schema buffer
#[derive(Clone)]
pub struct Token {
    span: Span,
    kind: TokenKind,
}

impl Token {
    /// Creates a new token
    pub fn new(span: Span, kind: TokenKind) -> Self {
        Self { span, kind }
    }

    /// Gets the kind for this token
    pub fn kind(&self) -> &TokenKind {
        &self.kind
    }

    /// Unwraps this token into its kind
    pub fn into_kind(self) -> TokenKind {
        self.kind
    }
}

impl Debug for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.kind.fmt(f)
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
    }
}

impl Spanned for Token {
    fn span(&self) -> Span {
        self.span
    }
}

/// The kind for this token
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    /// the `definition` keyword
    Definition,
    /// the `relation` keyword
    Relation,
    /// `:`
    Colon,
    /// `|`
    Pipe,
    LCurly,
    RCurly,
    /// `[a-zA-Z_][a-zA-Z0-9_]*`, excluding the keywords
    Identifier(String),
    /// a character no token starts with
    Invalid(char),
    /// EOF, will only appear at the end of the token stream
    Eof,
}

impl TokenKind {
    /// The classification label used in diagnostics
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Definition => "definition",
            TokenKind::Relation => "relation",
            TokenKind::Colon => ":",
            TokenKind::Pipe => "|",
            TokenKind::LCurly => "{",
            TokenKind::RCurly => "}",
            TokenKind::Identifier(_) => "identifier",
            TokenKind::Invalid(_) => "invalid character",
            TokenKind::Eof => "end of input",
        }
    }

    /// The literal text this token matched, empty for [TokenKind::Eof]
    pub fn text(&self) -> Cow<'_, str> {
        match self {
            TokenKind::Definition => Cow::Borrowed("definition"),
            TokenKind::Relation => Cow::Borrowed("relation"),
            TokenKind::Colon => Cow::Borrowed(":"),
            TokenKind::Pipe => Cow::Borrowed("|"),
            TokenKind::LCurly => Cow::Borrowed("{"),
            TokenKind::RCurly => Cow::Borrowed("}"),
            TokenKind::Identifier(name) => Cow::Borrowed(name.as_str()),
            TokenKind::Invalid(c) => Cow::Owned(c.to_string()),
            TokenKind::Eof => Cow::Borrowed(""),
        }
    }
}
