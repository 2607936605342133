//! Trivia-preserving JSON syntax tree.
//!
//! A [`Node`] is one of six value kinds (null, boolean, number, string,
//! array, object), each carrying a leading and a trailing run of
//! [`Trivia`](parrot_reader::Trivia). For a tree produced by the parser,
//! concatenating every leading run, literal, and trailing run in document
//! order reconstructs the input exactly.
//!
//! The structural-edit layer mutates arrays and objects while adjusting
//! neighboring trivia, so edited documents stay well-formed without caller
//! intervention.

mod edit;
mod error;
mod escape;
mod value;

pub use error::TreeError;
pub use escape::escape_string;
pub use value::{Array, Key, Node, Number, Object, Property, StringValue, Value, ValueKind};
