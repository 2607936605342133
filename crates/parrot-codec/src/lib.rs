//! Lossless JSON reader/writer.
//!
//! Parrot parses an extended JSON grammar (optional trailing commas,
//! optional `//` and `/* */` comments, configurable nesting limit) into a
//! concrete syntax tree that keeps every whitespace run, comment, and
//! structural punctuation mark as trivia attached to nodes. Re-encoding an
//! unmodified tree reproduces the original input byte-for-byte, and the
//! structural-edit API on arrays and objects infers formatting for newly
//! inserted content.
//!
//! # Example
//!
//! ```
//! let source = "{\n  \"host\": \"localhost\" // dev only\n}";
//!
//! let mut tree = parrot_codec::decode(source)?;
//! assert_eq!(parrot_codec::encode(&tree), source);
//!
//! let host = tree.as_object()?.get("host").unwrap();
//! assert_eq!(host.as_str()?, "localhost");
//!
//! tree.as_object_mut()?.set("host", parrot_codec::Node::string("0.0.0.0"));
//! assert_eq!(
//!     parrot_codec::encode(&tree),
//!     "{\n  \"host\": \"0.0.0.0\" // dev only\n}",
//! );
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Options
//!
//! [`decode`] uses the relaxed preset (all extensions on, depth 1000);
//! [`decode_with`] takes explicit [`DecodeOptions`], including the strict
//! preset that turns every extension off.

mod decode;
mod diagnostic;
mod dump;
mod encode;

pub use decode::{decode, decode_with};
pub use diagnostic::{render, write_report};
pub use dump::dump;
pub use encode::{encode, encode_string};

// Re-export the reader and tree types that appear in the public API.
pub use parrot_reader::{
    DecodeOptions, ParseError, ParseErrorKind, Position, Trivia, TriviaKind,
};
pub use parrot_tree::{
    Array, Key, Node, Number, Object, Property, StringValue, TreeError, Value, ValueKind,
    escape_string,
};
