//! Responsible for converting a schema buffer into a token stream

use zanzi_tokens::span::Span;
use zanzi_tokens::token::{Token, TokenKind};

mod token_parsing;

/// Pull-based tokenizer over an in-memory schema buffer.
///
/// Owns a single forward-only cursor; every [Lexer::next] call advances it
/// past one token and any leading whitespace. Unrecognized characters are
/// not an error here: they come out as [TokenKind::Invalid] tokens and only
/// surface later as a parser expectation mismatch.
#[derive(Debug)]
pub struct Lexer<'s> {
    remaining: &'s str,
    offset: usize,
}

impl<'s> Lexer<'s> {
    /// Creates a new lexer positioned at the start of `source`
    pub fn new(source: &'s str) -> Self {
        Self {
            remaining: source,
            offset: 0,
        }
    }

    fn next_token(&mut self) -> Option<Token> {
        // the token grammar is total: every non-empty rest yields a token and
        // the empty rest yields Eof, so the Err arm can not be reached
        let (rest, (ws, len, kind)) = token_parsing::parse_token(self.remaining).ok()?;
        self.remaining = rest;
        if kind == TokenKind::Eof {
            self.offset += ws;
            return None;
        }
        let span = Span::new(self.offset + ws, len);
        self.offset += ws + len;
        Some(Token::new(span, kind))
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use zanzi_tokens::span::Spanned;

    fn kinds(source: &str) -> Vec<TokenKind> {
        Lexer::new(source).map(Token::into_kind).collect()
    }

    #[test]
    fn test_lex_definition() {
        assert_eq!(
            kinds("definition monsujet { }"),
            vec![
                TokenKind::Definition,
                TokenKind::Identifier("monsujet".to_string()),
                TokenKind::LCurly,
                TokenKind::RCurly,
            ]
        );
    }

    #[test]
    fn test_lex_relation() {
        assert_eq!(
            kinds("relation marelation1: monsujet2 | monsujet3"),
            vec![
                TokenKind::Relation,
                TokenKind::Identifier("marelation1".to_string()),
                TokenKind::Colon,
                TokenKind::Identifier("monsujet2".to_string()),
                TokenKind::Pipe,
                TokenKind::Identifier("monsujet3".to_string()),
            ]
        );
    }

    #[test]
    fn test_keyword_prefix_is_identifier() {
        // maximal munch keeps `definitions` and `relationship` whole
        assert_eq!(
            kinds("definitions relationship"),
            vec![
                TokenKind::Identifier("definitions".to_string()),
                TokenKind::Identifier("relationship".to_string()),
            ]
        );
    }

    #[test]
    fn test_lex_empty_and_whitespace() {
        assert_eq!(kinds(""), vec![]);
        assert_eq!(kinds(" \t\n\u{a0} "), vec![]);
    }

    #[test]
    fn test_lex_invalid_char() {
        assert_eq!(
            kinds("definition !"),
            vec![TokenKind::Definition, TokenKind::Invalid('!')]
        );
    }

    #[test]
    fn test_lexer_is_fused_at_eof() {
        let mut lexer = Lexer::new("user");
        assert!(lexer.next().is_some());
        assert!(lexer.next().is_none());
        assert!(lexer.next().is_none());
    }

    #[test]
    fn test_spans_track_offsets() {
        let tokens: Vec<Token> = Lexer::new("  definition user").collect();
        assert_eq!(tokens[0].span().offset(), 2);
        assert_eq!(tokens[0].span().len(), "definition".len());
        assert_eq!(tokens[1].span().offset(), 13);
        assert_eq!(tokens[1].span().len(), 4);
    }
}
