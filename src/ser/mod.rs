//! The NBT encoder. [`NbtOutput`] sequences tag, name and payload bytes over
//! any [`Write`][std::io::Write] sink; the [`NbtWriter`] trait is the
//! operation set composite values stream themselves through. For encoding a
//! whole [`Value`][crate::Value] in one call use [`to_bytes`] or
//! [`to_writer`].
//!
//! Output is written as it is produced. On error the sink keeps whatever was
//! already flushed; nothing is rolled back.
mod write_nbt;
mod writer;

pub use writer::*;
