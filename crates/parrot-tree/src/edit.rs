//! Structural edits that keep surrounding formatting intact.
//!
//! The parser and encoder are purely mechanical; everything that *infers*
//! formatting after an edit lives here. On insertion, a new element
//! inherits the previous sibling's leading trivia (typically indentation),
//! the predecessor gains a `,` if it had none, and a single newline entry
//! is copied over so closing brackets stay on their own line. Removal does
//! not repair a comma left dangling on the new last element.

use parrot_reader::{Trivia, TriviaKind};

use crate::{Array, Node, Object, Property, TreeError};

impl Array {
    /// Append an element, inferring formatting from the last element.
    pub fn push(&mut self, mut item: Node) {
        if let Some(last) = self.items.last_mut() {
            if item.leading_trivia.is_empty() {
                item.leading_trivia = last.leading_trivia.clone();
            }
            if !has_comma(&last.trailing_trivia) {
                last.trailing_trivia.insert(0, Trivia::comma());
            }
            if item.trailing_trivia.is_empty()
                && let Some(newline) = first_newline(&last.trailing_trivia)
            {
                item.trailing_trivia.push(newline);
            }
        }
        self.items.push(item);
    }

    /// Insert an element at `index`, inferring formatting from the sibling
    /// before the insertion point (or the following sibling at index 0).
    pub fn insert(&mut self, index: usize, mut item: Node) -> Result<(), TreeError> {
        if index > self.items.len() {
            return Err(TreeError::IndexOutOfBounds {
                index,
                len: self.items.len(),
            });
        }
        if !self.items.is_empty() {
            let src = if index == 0 { 0 } else { index - 1 };
            let is_last = index == self.items.len();
            if item.leading_trivia.is_empty() {
                item.leading_trivia = self.items[src].leading_trivia.clone();
            }
            if index > 0 && !has_comma(&self.items[index - 1].trailing_trivia) {
                self.items[index - 1].trailing_trivia.insert(0, Trivia::comma());
            }
            if item.trailing_trivia.is_empty()
                && let Some(newline) = first_newline(&self.items[src].trailing_trivia)
            {
                item.trailing_trivia.push(newline);
            }
            if !is_last && !has_comma(&item.trailing_trivia) {
                item.trailing_trivia.insert(0, Trivia::comma());
            }
        }
        self.items.insert(index, item);
        Ok(())
    }

    /// Replace the element at `index`, returning the old one.
    ///
    /// No trivia is transplanted; the new element is printed as given.
    pub fn set(&mut self, index: usize, item: Node) -> Result<Node, TreeError> {
        match self.items.get_mut(index) {
            Some(slot) => Ok(std::mem::replace(slot, item)),
            None => Err(TreeError::IndexOutOfBounds {
                index,
                len: self.items.len(),
            }),
        }
    }

    /// Remove and return the element at `index`.
    pub fn remove_at(&mut self, index: usize) -> Result<Node, TreeError> {
        if index >= self.items.len() {
            return Err(TreeError::IndexOutOfBounds {
                index,
                len: self.items.len(),
            });
        }
        Ok(self.items.remove(index))
    }

    /// Remove the first element structurally equal to `item`.
    ///
    /// Returns whether an element was removed. Equality ignores trivia.
    pub fn remove_value(&mut self, item: &Node) -> bool {
        match self.items.iter().position(|n| n == item) {
            Some(i) => {
                self.items.remove(i);
                true
            }
            None => false,
        }
    }
}

impl Object {
    /// Set the value for `key`, replacing or appending.
    ///
    /// A replacement value with empty trivia inherits the old value's
    /// leading and trailing runs, so in-place edits keep their surrounding
    /// comments and indentation.
    pub fn set(&mut self, key: &str, value: Node) {
        match self.index.get(key) {
            Some(&i) => {
                let slot = &mut self.properties[i].value;
                let old = std::mem::replace(slot, value);
                if slot.leading_trivia.is_empty() {
                    slot.leading_trivia = old.leading_trivia;
                }
                if slot.trailing_trivia.is_empty() {
                    slot.trailing_trivia = old.trailing_trivia;
                }
            }
            None => self.append_property(Property::new(key, value)),
        }
    }

    /// Append a property; fails if the key is already present.
    pub fn add(&mut self, key: &str, value: Node) -> Result<(), TreeError> {
        if self.index.contains_key(key) {
            return Err(TreeError::DuplicateKey(key.to_string()));
        }
        self.append_property(Property::new(key, value));
        Ok(())
    }

    /// Insert a property at a sequence position; fails on a duplicate key
    /// or an out-of-range index.
    pub fn insert(&mut self, index: usize, mut property: Property) -> Result<(), TreeError> {
        if index > self.properties.len() {
            return Err(TreeError::IndexOutOfBounds {
                index,
                len: self.properties.len(),
            });
        }
        if self.index.contains_key(property.key.value()) {
            return Err(TreeError::DuplicateKey(property.key.value().to_string()));
        }
        if !self.properties.is_empty() {
            let src = if index == 0 { 0 } else { index - 1 };
            let is_last = index == self.properties.len();
            transplant_trivia(&mut self.properties[src], &mut property, index > 0, is_last);
        }
        self.index
            .insert(property.key.value().to_string(), index);
        self.properties.insert(index, property);
        self.reindex_from(index + 1);
        Ok(())
    }

    /// Remove and return the property for `key`.
    pub fn remove(&mut self, key: &str) -> Option<Property> {
        let i = self.index.remove(key)?;
        let property = self.properties.remove(i);
        self.reindex_from(i);
        Some(property)
    }

    /// Remove and return the property at a sequence position.
    pub fn remove_at(&mut self, index: usize) -> Result<Property, TreeError> {
        if index >= self.properties.len() {
            return Err(TreeError::IndexOutOfBounds {
                index,
                len: self.properties.len(),
            });
        }
        let property = self.properties.remove(index);
        self.index.remove(property.key.value());
        self.reindex_from(index);
        Ok(property)
    }

    /// Append with trivia transplanted from the current last property.
    fn append_property(&mut self, mut property: Property) {
        if let Some(last) = self.properties.last_mut() {
            transplant_trivia(last, &mut property, true, true);
        }
        self.index
            .insert(property.key.value().to_string(), self.properties.len());
        self.properties.push(property);
    }
}

/// Copy formatting from a sibling property onto one being inserted.
///
/// `src_precedes` is false only when inserting at position 0, where the
/// source sibling is the one that will follow and must not receive a comma.
/// `dst_is_last` controls whether the new property gets its own comma.
fn transplant_trivia(src: &mut Property, dst: &mut Property, src_precedes: bool, dst_is_last: bool) {
    if dst.key.leading_trivia.is_empty() {
        dst.key.leading_trivia = src.key.leading_trivia.clone();
    }
    if dst.key.trailing_trivia.is_empty() {
        dst.key.trailing_trivia = src.key.trailing_trivia.clone();
    }
    if src_precedes && !has_comma(&src.value.trailing_trivia) {
        src.value.trailing_trivia.insert(0, Trivia::comma());
    }
    if dst.value.leading_trivia.is_empty() {
        dst.value.leading_trivia = src.value.leading_trivia.clone();
    }
    if dst.value.trailing_trivia.is_empty()
        && let Some(newline) = first_newline(&src.value.trailing_trivia)
    {
        dst.value.trailing_trivia.push(newline);
    }
    if !dst_is_last && !has_comma(&dst.value.trailing_trivia) {
        dst.value.trailing_trivia.insert(0, Trivia::comma());
    }
}

fn has_comma(trivia: &[Trivia]) -> bool {
    trivia.iter().any(|t| t.kind == TriviaKind::Comma)
}

fn first_newline(trivia: &[Trivia]) -> Option<Trivia> {
    trivia.iter().find(|t| t.kind == TriviaKind::NewLine).cloned()
}
