//! # zanzi_tokens
//!
//! The lexical vocabulary of the zanzi schema language: tokens, token kinds,
//! and the byte spans that locate them in a source buffer.

pub mod span;
pub mod token;

pub use span::{Span, Spanned};
pub use token::{Token, TokenKind};
