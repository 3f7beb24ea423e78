use std::io::Write;

use byteorder::{BigEndian, WriteBytesExt};

use crate::error::{Error, Result};
use crate::Tag;

/// Extends any byte sink with the primitive NBT wire writes: tag bytes,
/// length prefixes, modified-UTF-8 strings and array payloads. Everything
/// here is big-endian.
pub(crate) trait WriteNbt: Write {
    fn write_tag(&mut self, tag: Tag) -> Result<()> {
        self.write_u8(tag as u8)?;
        Ok(())
    }

    /// Length-prefixed modified UTF-8 ("Java CESU-8"). The two-byte prefix
    /// counts encoded bytes, not characters.
    fn write_str(&mut self, s: &str) -> Result<()> {
        let encoded = cesu8::to_java_cesu8(s);
        let len: u16 = encoded
            .len()
            .try_into()
            .map_err(|_| Error::LengthOverflow(encoded.len()))?;
        self.write_u16::<BigEndian>(len)?;
        self.write_all(&encoded)?;
        Ok(())
    }

    /// Element count as a signed four-byte prefix.
    fn write_len(&mut self, len: usize) -> Result<()> {
        let len: i32 = len.try_into().map_err(|_| Error::LengthOverflow(len))?;
        self.write_i32::<BigEndian>(len)?;
        Ok(())
    }

    fn write_byte_array(&mut self, values: &[i8]) -> Result<()> {
        self.write_len(values.len())?;
        // Safe to treat [i8] as [u8].
        let bytes = unsafe { &*(values as *const [i8] as *const [u8]) };
        self.write_all(bytes)?;
        Ok(())
    }

    fn write_int_array(&mut self, values: &[i32]) -> Result<()> {
        self.write_len(values.len())?;
        for v in values {
            self.write_i32::<BigEndian>(*v)?;
        }
        Ok(())
    }

    fn write_long_array(&mut self, values: &[i64]) -> Result<()> {
        self.write_len(values.len())?;
        for v in values {
            self.write_i64::<BigEndian>(*v)?;
        }
        Ok(())
    }
}

impl<T> WriteNbt for T where T: Write {}
