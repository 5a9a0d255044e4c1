use nom::branch::alt;
use nom::bytes::complete::{tag, take_while};
use nom::character::complete::{alpha1, alphanumeric1, anychar, char};
use nom::combinator::{all_consuming, consumed, cut, eof, map, map_parser, peek, recognize, value};
use nom::multi::many0_count;
use nom::sequence::{pair, preceded, tuple};
use nom::IResult;
use zanzi_tokens::token::TokenKind;

type Result<'a, O> = IResult<&'a str, O>;

/// Parses the next token, returning the byte lengths of the leading
/// whitespace and of the token text, along with the token kind.
pub(crate) fn parse_token(src: &str) -> Result<'_, (usize, usize, TokenKind)> {
    map(
        tuple((consumed(skip_whitespace), consumed(parse_kind))),
        |((ws, ()), (text, kind))| (ws.len(), text.len(), kind),
    )(src)
}

fn parse_kind(src: &str) -> Result<'_, TokenKind> {
    alt((parse_eof, parse_word, parse_punctuation, parse_invalid))(src)
}

fn parse_eof(src: &str) -> Result<'_, TokenKind> {
    value(TokenKind::Eof, eof)(src)
}

fn parse_word(src: &str) -> Result<'_, TokenKind> {
    // maximal munch first, keyword classification second, so an identifier
    // that merely starts with a keyword stays a single identifier
    preceded(
        peek(alt((alpha1, tag("_")))),
        cut(map_parser(recognize_identifier, |word| {
            alt((parse_keyword, parse_identifier))(word)
        })),
    )(src)
}

fn parse_keyword(word: &str) -> Result<'_, TokenKind> {
    alt((
        value(TokenKind::Definition, all_consuming(tag("definition"))),
        value(TokenKind::Relation, all_consuming(tag("relation"))),
    ))(word)
}

fn parse_identifier(word: &str) -> Result<'_, TokenKind> {
    map(recognize_identifier, |id: &str| {
        TokenKind::Identifier(id.to_string())
    })(word)
}

/// `[a-zA-Z_][a-zA-Z0-9_]*`
fn recognize_identifier(input: &str) -> Result<'_, &str> {
    recognize(pair(
        alt((alpha1, tag("_"))),
        many0_count(alt((alphanumeric1, tag("_")))),
    ))(input)
}

fn parse_punctuation(src: &str) -> Result<'_, TokenKind> {
    alt((
        value(TokenKind::Colon, char(':')),
        value(TokenKind::Pipe, char('|')),
        value(TokenKind::LCurly, char('{')),
        value(TokenKind::RCurly, char('}')),
    ))(src)
}

fn parse_invalid(src: &str) -> Result<'_, TokenKind> {
    map(anychar, TokenKind::Invalid)(src)
}

fn skip_whitespace(src: &str) -> Result<'_, ()> {
    value((), take_while(char::is_whitespace))(src)
}
