//! # zanzi_parsing
//!
//! Turns schema text into a [zanzi_ast::Schema], or reports the first reason
//! the text is not valid.
//!
//! The [lexer] produces tokens on demand from an in-memory buffer, and the
//! [parser] is a predictive recursive-descent walk of the grammar with a
//! single token of lookahead:
//!
//! ```text
//! Schema     ::= Definition*
//! Definition ::= "definition" Identifier "{" Body "}"
//! Body       ::= Relation*
//! Relation   ::= "relation" Identifier ":" Identifier ("|" Identifier)*
//! ```
//!
//! # Examples
//! ```
//! let schema = zanzi_parsing::parse("definition user { }").unwrap();
//! assert_eq!(schema.definitions[0].name, "user");
//! ```

pub mod lexer;
pub mod parser;

pub use lexer::Lexer;
pub use parser::error::{ErrorKind, SyntaxError, SyntaxResult};
pub use parser::{parse, SchemaParser};
