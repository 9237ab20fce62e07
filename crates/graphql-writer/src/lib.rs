//! <div align="center">
//!   <h1><code>graphql-writer</code></h1>
//!
//!   <p>
//!     <strong>A library to build GraphQL queries and write them as compact text.</strong>
//!   </p>
//! </div>
//!
//! `graphql-writer` models the executable part of the GraphQL grammar
//! (operations, fields, fragments, directives, variables and values) as plain
//! Rust values, and encodes them into a single line of GraphQL source ready to
//! be sent to a server.
//!
//! Identifiers are [`Name`]s. They can be built unchecked from any string and
//! are validated when the document is encoded: an invalid name makes
//! [`Encode::encode`] return an [`EncodeError`] rather than producing
//! malformed text.
//!
//! For more information on the GraphQL query language, please refer to
//! [official documentation](https://graphql.org/learn/queries/).
//!
//! ## Getting started
//! Add this to your `Cargo.toml` to start using `graphql-writer`:
//! ```toml
//! # Just an example, change to the necessary package version.
//! [dependencies]
//! graphql-writer = "0.1.0"
//! ```
//!
//! ## Features
//! - `json` (default): convert `serde_json::Value` into a GraphQL [`Value`].
//!
//! ## Example
//! ```rust
//! use graphql_writer::{
//!     Argument, Document, Encode, Field, InlineFragment, Name, Operation, TypeReference,
//!     Variable, VariableDefinition,
//! };
//!
//! let mut history = Field::new("history");
//! history.arg(Argument::new("first", 10));
//! history.selection(InlineFragment::on("Commit", vec![Field::new("message").into()]).into());
//!
//! let mut repository = Field::new("repository");
//! repository.arg(Argument::new("owner", Variable::new("owner")));
//! repository.arg(Argument::new("name", "graphql-writer"));
//! repository.selection(history.into());
//!
//! let mut query = Operation::query(Name::new("Commits"), vec![repository.into()]);
//! query.variable_definition(VariableDefinition::new(
//!     "owner",
//!     TypeReference::non_null_named("String"),
//! ));
//!
//! let mut document = Document::new();
//! document.operation(query);
//!
//! assert_eq!(
//!     document.encode().unwrap(),
//!     r#"query Commits($owner: String!) { repository(owner: $owner name: "graphql-writer") { history(first: 10) { ... on Commit { message } } } }"#
//! );
//! ```
//!
//! ## License
//! Licensed under either of
//!
//! - Apache License, Version 2.0 ([LICENSE-APACHE] or <https://www.apache.org/licenses/LICENSE-2.0>)
//! - MIT license ([LICENSE-MIT] or <https://opensource.org/licenses/MIT>)
//!
//! at your option.
//!
//! [LICENSE-APACHE]: https://www.apache.org/licenses/LICENSE-2.0
//! [LICENSE-MIT]: https://opensource.org/licenses/MIT

#![forbid(unsafe_code)]
#![deny(missing_debug_implementations, nonstandard_style)]
#![warn(missing_docs, future_incompatible, unreachable_pub, rust_2018_idioms)]

mod argument;
mod directive;
mod document;
mod encode;
mod error;
mod field;
mod fragment;
#[cfg(feature = "json")]
mod json;
mod name;
mod operation;
mod selection_set;
mod string_value;
mod ty;
mod value;
mod variable;

pub use argument::{Argument, Arguments};
pub use directive::Directive;
pub use document::{Document, ExecutableDefinition};
pub use encode::Encode;
pub use error::EncodeError;
pub use field::Field;
pub use fragment::{FragmentDefinition, FragmentSpread, InlineFragment};
pub use name::{FragmentName, Name};
pub use operation::{Operation, OperationType};
pub use selection_set::{Selection, SelectionSet};
pub use ty::{NonNullTypeReference, TypeReference};
pub use value::{EnumValue, ObjectValue, Value};
pub use variable::{Variable, VariableDefinition};
