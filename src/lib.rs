//! `graphql_print`
//! =========
//!
//! _Lossless and deterministic printing of GraphQL ASTs._
//!
//! The **`graphql_print`** library is the inverse of a GraphQL parser: given a tree of typed AST
//! nodes it produces the GraphQL source text the tree was parsed from, or canonical source text
//! for a tree that was built programmatically. It covers the query language (operations,
//! fragments, selections, and input values) as well as the type-system definition language:
//! schema, scalar, object, interface, union, enum, input object, and directive definitions.
//!
//! The crate deliberately does not contain a parser, a validator, or an executor. It owns the AST
//! node definitions and a single rendering engine, and leaves building trees to an external
//! collaborator. This makes it a good fit for intermediary GraphQL layers that need to print
//! queries for logging, emit schema dumps, or compute stable query signatures for caching, where
//! the printed text must be byte-for-byte deterministic and re-parseable.
//!
//! Rendering is a pure, synchronous tree walk. Nodes are never mutated, so the same tree may be
//! printed from multiple threads without synchronization.
//!
//! [A good place to start is the `ast` module...](ast)

pub mod ast;
pub mod error;

pub use bumpalo;

#[cfg(feature = "json")]
pub mod json;
