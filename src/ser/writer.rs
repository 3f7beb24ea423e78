use std::io::Write;

use byteorder::{BigEndian, WriteBytesExt};

use crate::error::{Error, Result};
use crate::{NbtCompound, Tag, Value, MAX_DEPTH};

use super::write_nbt::WriteNbt;

/// The operation set an NBT encoder exposes. Object-safe, so composite
/// values can stream themselves through `&mut dyn NbtWriter` without knowing
/// the concrete encoder behind it.
///
/// Every operation appends to the sink immediately; calling one twice writes
/// twice. `max_depth` is the number of nesting levels the write may still
/// enter; it is threaded through every recursive call rather than held in
/// the writer, so re-entrant use cannot corrupt the accounting.
pub trait NbtWriter {
    /// Writes a full tag occurrence, inferring the wire tag from the value's
    /// shape.
    fn write_named(&mut self, name: &str, value: &Value, max_depth: i32) -> Result<()>;

    /// Writes a full tag occurrence using the caller's explicit tag instead
    /// of inferring one. The header goes out first; a value whose shape does
    /// not match `tag` then fails as a payload error.
    fn write_named_as(&mut self, name: &str, tag: Tag, value: &Value, max_depth: i32)
        -> Result<()>;

    /// Writes only the payload, no tag or name. For callers that already
    /// wrote the header themselves.
    fn write_payload(&mut self, value: &Value, max_depth: i32) -> Result<()>;

    /// Writes a full tag occurrence for any composite implementing
    /// [`NbtCompound`], End marker included.
    fn write_compound(
        &mut self,
        name: &str,
        value: &dyn NbtCompound,
        max_depth: i32,
    ) -> Result<()>;

    fn write_byte(&mut self, name: &str, value: i8) -> Result<()>;

    fn write_short(&mut self, name: &str, value: i16) -> Result<()>;

    fn write_int(&mut self, name: &str, value: i32) -> Result<()>;

    fn write_long(&mut self, name: &str, value: i64) -> Result<()>;

    fn write_float(&mut self, name: &str, value: f32) -> Result<()>;

    fn write_double(&mut self, name: &str, value: f64) -> Result<()>;

    /// Writes `value` as the root entry of a document: empty name, default
    /// depth budget.
    fn write_root(&mut self, value: &Value) -> Result<()> {
        self.write_named("", value, MAX_DEPTH)
    }
}

/// Encoder over any [`Write`] sink.
///
/// One instance owns its sink and its closed flag for its whole lifetime.
/// There is no internal buffering and no synchronization; share an instance
/// between threads only behind external locking.
pub struct NbtOutput<W: Write> {
    writer: W,
    closed: bool,
}

impl<W: Write> NbtOutput<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            closed: false,
        }
    }

    /// Flushes the sink and marks the writer closed. Every write after this
    /// fails with [`Error::Closed`]. Closing twice has no further effect.
    pub fn close(&mut self) -> Result<()> {
        if self.closed {
            return Ok(());
        }
        self.closed = true;
        self.writer.flush()?;
        Ok(())
    }

    /// Returns the underlying sink.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn check_open(&self) -> Result<()> {
        if self.closed {
            Err(Error::Closed)
        } else {
            Ok(())
        }
    }

    fn write_tag_and_name(&mut self, tag: Tag, name: &str) -> Result<()> {
        self.writer.write_tag(tag)?;
        self.writer.write_str(name)?;
        Ok(())
    }

    /// Writes the payload of `value` as `tag` with `max_depth` nesting
    /// levels remaining. The budget is checked before any byte of this
    /// level's payload goes out.
    fn serialize(&mut self, value: &Value, tag: Tag, max_depth: i32) -> Result<()> {
        if max_depth < 0 {
            return Err(Error::DepthLimit);
        }

        match (tag, value) {
            (Tag::End, _) => {}
            (Tag::Byte, Value::Byte(v)) => self.writer.write_i8(*v)?,
            (Tag::Short, Value::Short(v)) => self.writer.write_i16::<BigEndian>(*v)?,
            (Tag::Int, Value::Int(v)) => self.writer.write_i32::<BigEndian>(*v)?,
            (Tag::Long, Value::Long(v)) => self.writer.write_i64::<BigEndian>(*v)?,
            (Tag::Float, Value::Float(v)) => self.writer.write_f32::<BigEndian>(*v)?,
            (Tag::Double, Value::Double(v)) => self.writer.write_f64::<BigEndian>(*v)?,
            (Tag::ByteArray, Value::ByteArray(data)) => self.writer.write_byte_array(data)?,
            (Tag::String, Value::String(s)) => self.writer.write_str(s)?,
            (Tag::List, Value::List(list)) => {
                // The declared element tag is resolved once; elements are
                // written as that tag, not re-inspected.
                let element_tag = list.element_tag();
                self.writer.write_tag(element_tag)?;
                self.writer.write_len(list.len())?;
                for element in list {
                    self.serialize(element, element_tag, max_depth - 1)?;
                }
            }
            (Tag::Compound, Value::Compound(map)) => {
                map.stream_into(self, max_depth - 1)?;
                self.writer.write_tag(Tag::End)?;
            }
            (Tag::IntArray, Value::IntArray(data)) => self.writer.write_int_array(data)?,
            (Tag::LongArray, Value::LongArray(data)) => self.writer.write_long_array(data)?,
            (expected, found) => {
                return Err(Error::UnexpectedPayload {
                    expected,
                    found: found.tag(),
                })
            }
        }

        Ok(())
    }
}

impl<W: Write> NbtWriter for NbtOutput<W> {
    fn write_named(&mut self, name: &str, value: &Value, max_depth: i32) -> Result<()> {
        self.check_open()?;
        let tag = value.tag();
        self.write_tag_and_name(tag, name)?;
        self.serialize(value, tag, max_depth)
    }

    fn write_named_as(
        &mut self,
        name: &str,
        tag: Tag,
        value: &Value,
        max_depth: i32,
    ) -> Result<()> {
        self.check_open()?;
        self.write_tag_and_name(tag, name)?;
        self.serialize(value, tag, max_depth)
    }

    fn write_payload(&mut self, value: &Value, max_depth: i32) -> Result<()> {
        self.check_open()?;
        self.serialize(value, value.tag(), max_depth)
    }

    fn write_compound(
        &mut self,
        name: &str,
        value: &dyn NbtCompound,
        max_depth: i32,
    ) -> Result<()> {
        self.check_open()?;
        self.write_tag_and_name(Tag::Compound, name)?;
        if max_depth < 0 {
            return Err(Error::DepthLimit);
        }
        value.stream_into(self, max_depth - 1)?;
        self.writer.write_tag(Tag::End)?;
        Ok(())
    }

    fn write_byte(&mut self, name: &str, value: i8) -> Result<()> {
        self.check_open()?;
        self.write_tag_and_name(Tag::Byte, name)?;
        self.writer.write_i8(value)?;
        Ok(())
    }

    fn write_short(&mut self, name: &str, value: i16) -> Result<()> {
        self.check_open()?;
        self.write_tag_and_name(Tag::Short, name)?;
        self.writer.write_i16::<BigEndian>(value)?;
        Ok(())
    }

    fn write_int(&mut self, name: &str, value: i32) -> Result<()> {
        self.check_open()?;
        self.write_tag_and_name(Tag::Int, name)?;
        self.writer.write_i32::<BigEndian>(value)?;
        Ok(())
    }

    fn write_long(&mut self, name: &str, value: i64) -> Result<()> {
        self.check_open()?;
        self.write_tag_and_name(Tag::Long, name)?;
        self.writer.write_i64::<BigEndian>(value)?;
        Ok(())
    }

    fn write_float(&mut self, name: &str, value: f32) -> Result<()> {
        self.check_open()?;
        self.write_tag_and_name(Tag::Float, name)?;
        self.writer.write_f32::<BigEndian>(value)?;
        Ok(())
    }

    fn write_double(&mut self, name: &str, value: f64) -> Result<()> {
        self.check_open()?;
        self.write_tag_and_name(Tag::Double, name)?;
        self.writer.write_f64::<BigEndian>(value)?;
        Ok(())
    }
}

/// Encodes `value` as a root entry with an empty name into `writer`.
pub fn to_writer<W: Write>(writer: W, value: &Value) -> Result<()> {
    let mut out = NbtOutput::new(writer);
    out.write_root(value)
}

/// Encodes `value` as a root entry with an empty name.
pub fn to_bytes(value: &Value) -> Result<Vec<u8>> {
    let mut payload = Vec::new();
    to_writer(&mut payload, value)?;
    Ok(payload)
}
