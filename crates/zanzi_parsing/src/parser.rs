//! The predictive recursive-descent parser for schema text

use crate::lexer::Lexer;
use crate::parser::error::{ErrorKind, SyntaxError, SyntaxResult};
use tracing::trace;
use zanzi_ast::{Definition, Relation, Schema};
use zanzi_tokens::span::{Span, Spanned};
use zanzi_tokens::token::{Token, TokenKind};

pub mod error;

/// Parses schema text into a [Schema], or returns the first [SyntaxError].
///
/// Each call owns a fresh lexer/parser pair; independent parses share no
/// state.
pub fn parse(input: &str) -> SyntaxResult<Schema> {
    SchemaParser::new(input).parse_schema()
}

#[derive(Debug, Default)]
enum State {
    #[default]
    Uninit,
    Lookahead(Token),
    Eof,
}

/// Builds the syntax tree from a token stream.
///
/// Holds exactly one token of lookahead; every grammar rule is selected
/// deterministically from the current token's kind, with no backtracking.
/// Each rule consumes its full span, closing brace included, so the
/// schema-level loop only ever inspects the lookahead.
#[derive(Debug)]
pub struct SchemaParser<'s> {
    lexer: Lexer<'s>,
    state: State,
    last_span: Option<Span>,
}

impl<'s> SchemaParser<'s> {
    /// Creates a new parser over `input`
    pub fn new(input: &'s str) -> Self {
        Self {
            lexer: Lexer::new(input),
            state: State::default(),
            last_span: None,
        }
    }

    /// `Schema ::= Definition*`
    pub fn parse_schema(&mut self) -> SyntaxResult<Schema> {
        let mut schema = Schema::new();
        while self.peek().is_some() {
            let definition = self.parse_definition()?;
            trace!("parsed definition {:?}", definition.name);
            schema.definitions.push(definition);
        }
        Ok(schema)
    }

    /// `Definition ::= "definition" Identifier "{" Body "}"`
    fn parse_definition(&mut self) -> SyntaxResult<Definition> {
        self.expect("definition", |kind| matches!(kind, TokenKind::Definition))?;
        let name = self.expect_identifier()?;
        self.expect("{", |kind| matches!(kind, TokenKind::LCurly))?;
        let relations = self.parse_body()?;
        self.expect("}", |kind| matches!(kind, TokenKind::RCurly))?;
        Ok(Definition { name, relations })
    }

    /// `Body ::= Relation*`
    fn parse_body(&mut self) -> SyntaxResult<Vec<Relation>> {
        let mut relations = vec![];
        while matches!(self.peek().map(Token::kind), Some(TokenKind::Relation)) {
            relations.push(self.parse_relation()?);
        }
        Ok(relations)
    }

    /// `Relation ::= "relation" Identifier ":" Identifier ("|" Identifier)*`
    ///
    /// The first type identifier is mandatory; a relation never has an empty
    /// type list.
    fn parse_relation(&mut self) -> SyntaxResult<Relation> {
        self.expect("relation", |kind| matches!(kind, TokenKind::Relation))?;
        let name = self.expect_identifier()?;
        self.expect(":", |kind| matches!(kind, TokenKind::Colon))?;
        let mut types = vec![self.expect_identifier()?];
        while self
            .consume_if(|kind| matches!(kind, TokenKind::Pipe))
            .is_some()
        {
            types.push(self.expect_identifier()?);
        }
        Ok(Relation { name, types })
    }

    fn next_token(&mut self) {
        self.state = match self.lexer.next() {
            Some(token) => State::Lookahead(token),
            None => State::Eof,
        };
    }

    /// Peeks the current lookahead, `None` at end of input
    fn peek(&mut self) -> Option<&Token> {
        if matches!(self.state, State::Uninit) {
            self.next_token();
        }
        match &self.state {
            State::Lookahead(token) => Some(token),
            State::Eof => None,
            State::Uninit => unreachable!("next_token() should init parser"),
        }
    }

    fn consume(&mut self) -> Option<Token> {
        if matches!(self.state, State::Uninit) {
            self.next_token();
        }
        match std::mem::replace(&mut self.state, State::Eof) {
            State::Lookahead(token) => {
                self.next_token();
                trace!("consumed {token:?}, state={:?}", self.state);
                self.last_span = Some(token.span());
                Some(token)
            }
            State::Eof => None,
            State::Uninit => unreachable!("next_token() should init parser"),
        }
    }

    /// Consumes the lookahead if the predicate matches its kind
    fn consume_if<F>(&mut self, predicate: F) -> Option<Token>
    where
        F: FnOnce(&TokenKind) -> bool,
    {
        if self
            .peek()
            .map(|token| predicate(token.kind()))
            .unwrap_or(false)
        {
            self.consume()
        } else {
            None
        }
    }

    fn expect<F>(&mut self, expected: &'static str, predicate: F) -> SyntaxResult<Token>
    where
        F: FnOnce(&TokenKind) -> bool,
    {
        match self.consume_if(predicate) {
            Some(token) => Ok(token),
            None => Err(self.error(expected)),
        }
    }

    fn expect_identifier(&mut self) -> SyntaxResult<String> {
        let token = self.expect("identifier", |kind| matches!(kind, TokenKind::Identifier(_)))?;
        match token.into_kind() {
            TokenKind::Identifier(name) => Ok(name),
            _ => unreachable!("expect() already matched an identifier"),
        }
    }

    /// Builds an error from the current lookahead; at end of input the found
    /// text is empty and the span sits directly past the last token.
    fn error(&mut self, expected: &'static str) -> SyntaxError {
        let (found, span) = match self.peek() {
            Some(token) => (token.kind().text().into_owned(), Some(token.span())),
            None => (String::new(), self.last_span.map(|span| span.end())),
        };
        SyntaxError::new(ErrorKind::ExpectedToken { expected, found }, span)
    }
}
