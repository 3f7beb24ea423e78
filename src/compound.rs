use indexmap::IndexMap;

use crate::error::Result;
use crate::ser::NbtWriter;
use crate::{Value, MAX_DEPTH};

/// A named, ordered collection of heterogeneous members. Insertion order is
/// the order members reach the wire. Names are unique; inserting an existing
/// name replaces the member in place.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Compound {
    entries: IndexMap<String, Value>,
}

impl Compound {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a member, returning the previous value under that name if
    /// there was one. A replaced member keeps its original position.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(name.into(), value.into())
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries.get(name)
    }

    /// Removes a member, preserving the order of the rest.
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.entries.shift_remove(name)
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value> {
        self.entries.iter()
    }
}

impl From<IndexMap<String, Value>> for Compound {
    fn from(entries: IndexMap<String, Value>) -> Self {
        Self { entries }
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Compound {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut compound = Compound::new();
        compound.extend(iter);
        compound
    }
}

impl<K: Into<String>, V: Into<Value>> Extend<(K, V)> for Compound {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (name, value) in iter {
            self.insert(name, value);
        }
    }
}

impl IntoIterator for Compound {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Compound {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// The capability a composite value implements to stream its own named
/// members into a writer. The encoder drives this whenever it meets a
/// compound, so nesting is open-ended without the encoder knowing any
/// concrete composite type.
///
/// ```
/// use nbtout::error::Result;
/// use nbtout::{NbtCompound, NbtOutput, NbtWriter, MAX_DEPTH};
///
/// struct Player {
///     health: f32,
///     xp: i32,
/// }
///
/// impl NbtCompound for Player {
///     fn stream_into(&self, writer: &mut dyn NbtWriter, _max_depth: i32) -> Result<()> {
///         writer.write_float("Health", self.health)?;
///         writer.write_int("XpTotal", self.xp)
///     }
/// }
///
/// # fn main() -> Result<()> {
/// let mut out = NbtOutput::new(Vec::new());
/// out.write_compound("player", &Player { health: 20.0, xp: 137 }, MAX_DEPTH)?;
/// # Ok(())
/// # }
/// ```
pub trait NbtCompound {
    /// Writes each named member through `writer`. `max_depth` is the budget
    /// remaining for this nesting level, already decremented by the encoder;
    /// pass it along to any nested composite writes. Implementations must
    /// not write the trailing End marker, the encoder owns it.
    fn stream_into(&self, writer: &mut dyn NbtWriter, max_depth: i32) -> Result<()>;

    /// [`stream_into`][NbtCompound::stream_into] with the default depth
    /// budget.
    fn stream(&self, writer: &mut dyn NbtWriter) -> Result<()> {
        self.stream_into(writer, MAX_DEPTH)
    }
}

impl NbtCompound for Compound {
    fn stream_into(&self, writer: &mut dyn NbtWriter, max_depth: i32) -> Result<()> {
        for (name, value) in &self.entries {
            writer.write_named(name, value, max_depth)?;
        }
        Ok(())
    }
}
