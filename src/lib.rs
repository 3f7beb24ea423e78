//! nbtout writes NBT data as used by *Minecraft: Java Edition* and the
//! tooling around it. It covers the encode side of the format only: you build
//! a [`Value`] tree (or implement [`NbtCompound`] on your own types) and
//! stream it to any [`Write`][std::io::Write] sink as tagged, named, nested
//! binary data.
//!
//! * For the value model see [`Value`], [`NbtList`] and [`Compound`].
//! * For NBT array types see [`ByteArray`], [`IntArray`], and [`LongArray`].
//! * For the encoder and the writer contract see [`ser`].
//!
//! # Quick example
//!
//! ```
//! use nbtout::{Compound, NbtList, Tag, Value};
//!
//! # fn main() -> nbtout::error::Result<()> {
//! let mut pos = NbtList::new(Tag::Double);
//! pos.push(1.5)?;
//! pos.push(70.0)?;
//! pos.push(-44.5)?;
//!
//! let mut root = Compound::new();
//! root.insert("Pos", pos);
//! root.insert("Health", 20.0f32);
//!
//! let bytes = nbtout::to_bytes(&Value::Compound(root))?;
//! # assert!(!bytes.is_empty());
//! # Ok(())
//! # }
//! ```
//!
//! Compression is up to the caller: wrap the sink before handing it over.
//! Reading NBT back is a separate concern and not part of this crate.

pub mod error;
pub mod ser;

mod arrays;
mod compound;
mod list;
mod value;

pub use arrays::*;
pub use compound::*;
pub use list::*;
pub use ser::{to_bytes, to_writer, NbtOutput, NbtWriter};
pub use value::*;

#[cfg(test)]
mod test;

use std::fmt;

/// Default depth budget for nested values, shared with the rest of the NBT
/// ecosystem. Writes through the convenience entry points refuse values
/// nested deeper than this; pass an explicit budget to go further.
pub const MAX_DEPTH: i32 = 16;

/// An NBT tag. This carries the wire kind of a value, not the value or its
/// name.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
#[repr(u8)]
pub enum Tag {
    /// Terminates a Compound. Carries no payload.
    End = 0,
    /// Equivalent to i8.
    Byte = 1,
    /// Equivalent to i16.
    Short = 2,
    /// Equivalent to i32.
    Int = 3,
    /// Equivalent to i64.
    Long = 4,
    /// Equivalent to f32.
    Float = 5,
    /// Equivalent to f64.
    Double = 6,
    /// An array of Byte (i8). Distinct from a List of Byte on the wire.
    ByteArray = 7,
    /// A modified-UTF-8 string.
    String = 8,
    /// An ordered sequence sharing a single element tag.
    List = 9,
    /// Named, heterogeneous members terminated by End.
    Compound = 10,
    /// An array of Int (i32).
    IntArray = 11,
    /// An array of Long (i64).
    LongArray = 12,
}

// The ids are wire constants. Spelled out by hand rather than derived so
// renumbering can never happen by accident.
impl TryFrom<u8> for Tag {
    type Error = ();

    fn try_from(value: u8) -> Result<Self, ()> {
        use Tag::*;
        Ok(match value {
            0 => End,
            1 => Byte,
            2 => Short,
            3 => Int,
            4 => Long,
            5 => Float,
            6 => Double,
            7 => ByteArray,
            8 => String,
            9 => List,
            10 => Compound,
            11 => IntArray,
            12 => LongArray,
            13..=u8::MAX => return Err(()),
        })
    }
}

impl From<Tag> for u8 {
    fn from(tag: Tag) -> Self {
        match tag {
            Tag::End => 0,
            Tag::Byte => 1,
            Tag::Short => 2,
            Tag::Int => 3,
            Tag::Long => 4,
            Tag::Float => 5,
            Tag::Double => 6,
            Tag::ByteArray => 7,
            Tag::String => 8,
            Tag::List => 9,
            Tag::Compound => 10,
            Tag::IntArray => 11,
            Tag::LongArray => 12,
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Tag::End => "End",
            Tag::Byte => "Byte",
            Tag::Short => "Short",
            Tag::Int => "Int",
            Tag::Long => "Long",
            Tag::Float => "Float",
            Tag::Double => "Double",
            Tag::ByteArray => "ByteArray",
            Tag::String => "String",
            Tag::List => "List",
            Tag::Compound => "Compound",
            Tag::IntArray => "IntArray",
            Tag::LongArray => "LongArray",
        })
    }
}
