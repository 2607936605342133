//! Errors raised by tree accessors and the edit layer.
//!
//! These are local to a single operation and never corrupt the rest of the
//! tree, unlike parse errors which abort the whole decode.

use crate::ValueKind;

/// An error from a typed accessor or a structural edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// A typed accessor was used on a node of a different kind.
    KindMismatch {
        /// The kind the accessor expected.
        expected: ValueKind,
        /// The node's actual kind.
        actual: ValueKind,
    },
    /// An `add`/`insert` with a key the object already contains.
    DuplicateKey(String),
    /// A lookup or removal for a key the object does not contain.
    KeyNotFound(String),
    /// An index past the end of an array or property sequence.
    IndexOutOfBounds {
        /// The requested index.
        index: usize,
        /// The container length at the time of the operation.
        len: usize,
    },
}

impl std::fmt::Display for TreeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TreeError::KindMismatch { expected, actual } => {
                write!(f, "value is not {expected} (actual kind: {actual})")
            }
            TreeError::DuplicateKey(key) => {
                write!(f, "an item with the same key has already been added: {key}")
            }
            TreeError::KeyNotFound(key) => write!(f, "key not found: {key}"),
            TreeError::IndexOutOfBounds { index, len } => {
                write!(f, "index {index} out of bounds (len {len})")
            }
        }
    }
}

impl std::error::Error for TreeError {}
