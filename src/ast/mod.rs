//! # GraphQL AST and Printer
//!
//! The `graphql_print::ast` module contains the GraphQL AST and the trait to print it back to
//! source text. Both the executable query language and the type-system definition language are
//! covered, so a [`Document`] may mix operations, fragments, and type definitions.
//! [Reference](https://spec.graphql.org/October2021/#sec-Language)
//!
//! It's easiest to use this module by importing all of it, however, its three main parts are:
//! - [`ASTContext`], a context containing an arena that defines the lifetime for an AST
//! - the AST node structs and enums themselves, which are built by an external parser or
//!   programmatically via the arena
//! - [`PrintNode`], a trait using which AST Nodes are printed into source text
//!
//! The following workflow describes the minimum that's done using this module while an AST
//! Context is active in the given scope.
//!
//! ```
//! use graphql_print::ast::*;
//!
//! // Create an AST Context for a document
//! let ctx = ASTContext::new();
//!
//! // Build a field selection programmatically
//! let field = Field::new_leaf(&ctx, "hello");
//!
//! // Print the node to an output String
//! assert_eq!(field.print(), "hello");
//! ```

#[allow(clippy::module_inception)]
mod ast;

mod ast_conversion;
mod printer;
mod type_system;

pub use ast::*;
pub use ast_conversion::DefaultIn;
pub use printer::PrintNode;
pub use type_system::*;
