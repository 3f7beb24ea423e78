use std::ops::Deref;

/// An NBT byte array. NBT distinguishes arrays of Byte, Int and Long from
/// lists of the same element tag, so these get their own types rather than
/// reusing [`NbtList`][crate::NbtList].
#[derive(Debug, Clone, PartialEq)]
pub struct ByteArray {
    data: Vec<i8>,
}

impl ByteArray {
    pub fn new(data: Vec<i8>) -> Self {
        Self { data }
    }
}

impl Deref for ByteArray {
    type Target = Vec<i8>;

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl From<Vec<i8>> for ByteArray {
    fn from(data: Vec<i8>) -> Self {
        Self::new(data)
    }
}

/// An NBT array of Int (i32).
#[derive(Debug, Clone, PartialEq)]
pub struct IntArray {
    data: Vec<i32>,
}

impl IntArray {
    pub fn new(data: Vec<i32>) -> Self {
        Self { data }
    }
}

impl Deref for IntArray {
    type Target = Vec<i32>;

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl From<Vec<i32>> for IntArray {
    fn from(data: Vec<i32>) -> Self {
        Self::new(data)
    }
}

/// An NBT array of Long (i64).
#[derive(Debug, Clone, PartialEq)]
pub struct LongArray {
    data: Vec<i64>,
}

impl LongArray {
    pub fn new(data: Vec<i64>) -> Self {
        Self { data }
    }
}

impl Deref for LongArray {
    type Target = Vec<i64>;

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl From<Vec<i64>> for LongArray {
    fn from(data: Vec<i64>) -> Self {
        Self::new(data)
    }
}
