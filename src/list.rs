use std::slice;

use crate::error::{Error, Result};
use crate::{Tag, Value};

/// An ordered sequence of values that all share one element tag. The element
/// tag is declared when the list is created and is what reaches the wire,
/// even for an empty list; elements are never re-inspected to derive it.
///
/// Lists built empty with no better information conventionally declare
/// [`Tag::End`]. Nothing can be pushed into such a list.
#[derive(Debug, Clone, PartialEq)]
pub struct NbtList {
    tag: Tag,
    values: Vec<Value>,
}

impl NbtList {
    /// Creates an empty list with the given declared element tag.
    pub fn new(tag: Tag) -> Self {
        Self {
            tag,
            values: Vec::new(),
        }
    }

    /// Builds a list from parts without checking the elements against `tag`.
    /// A mismatched element is the caller's bug and fails as a payload error
    /// when the list is encoded.
    pub fn from_parts(tag: Tag, values: Vec<Value>) -> Self {
        Self { tag, values }
    }

    /// Appends a value, rejecting any kind other than the declared one.
    pub fn push(&mut self, value: impl Into<Value>) -> Result<()> {
        let value = value.into();
        if value.tag() != self.tag {
            return Err(Error::UnexpectedPayload {
                expected: self.tag,
                found: value.tag(),
            });
        }
        self.values.push(value);
        Ok(())
    }

    /// The declared element tag.
    pub fn element_tag(&self) -> Tag {
        self.tag
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, Value> {
        self.values.iter()
    }
}

impl<'a> IntoIterator for &'a NbtList {
    type Item = &'a Value;
    type IntoIter = slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}
