//! Contains the Error and Result type used by the encoder.
use std::io;

use thiserror::Error;

use crate::Tag;

/// Things that can go wrong while writing NBT.
///
/// Every failure is surfaced on the call that hit it and nothing is retried.
/// Bytes already flushed to the sink stay there; the caller owns discarding
/// partial output.
#[derive(Debug, Error)]
pub enum Error {
    /// The underlying sink failed. Carried through unchanged.
    #[error("io error: {0}")]
    Io(#[from] io::Error),

    /// A write was attempted after [`close`][crate::NbtOutput::close].
    #[error("nbt writer is closed")]
    Closed,

    /// The depth budget ran out before the value did. Bounds recursion on
    /// hostile or broken inputs.
    #[error("reached depth limit")]
    DepthLimit,

    /// A value's shape did not match the tag it was to be encoded as. Raised
    /// for explicit-tag writes and for list elements that disagree with the
    /// list's declared element tag.
    #[error("expected {expected} payload, found {found}")]
    UnexpectedPayload {
        /// The tag the caller or the enclosing list declared.
        expected: Tag,
        /// The actual kind of the offending value.
        found: Tag,
    },

    /// A string or sequence is too long for its wire length prefix.
    #[error("length {0} does not fit the wire length prefix")]
    LengthOverflow(usize),
}

/// Convenience type for Result.
pub type Result<T> = std::result::Result<T, Error>;
