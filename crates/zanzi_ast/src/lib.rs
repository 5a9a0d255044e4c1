//! # zanzi_ast
//!
//! The abstract syntax tree for parsed zanzi schemas. A [Schema] is an
//! ordered list of [Definition]s, each holding an ordered list of
//! [Relation]s. The [std::fmt::Display] impls render the canonical grammar
//! form, so a rendered schema re-parses to a structurally identical tree.

pub mod schema;

pub use schema::{Definition, Relation, Schema};
