//! Error types for msgpack decoding/encoding and Janet rendering.

use thiserror::Error;

/// Errors that can occur while converting between msgpack and Janet source.
#[derive(Error, Debug)]
pub enum PackError {
    /// The input bytes were not a valid msgpack value (decoding path).
    /// Includes the byte offset where the error was detected.
    #[error("msgpack decode error at byte {offset}: {message}")]
    Decode { offset: usize, message: String },

    /// A structural error while writing msgpack (e.g., an integer or length
    /// the wire format cannot represent).
    #[error("msgpack encode error: {0}")]
    Encode(String),

    /// The value kind has no Janet literal form (rendering path).
    #[error("cannot render {kind} as a Janet literal")]
    UnsupportedType { kind: &'static str },

    /// A container nested deeper than the recursion guard allows.
    #[error("value nesting exceeds {limit} levels")]
    TooDeep { limit: usize },
}

/// Convenience alias used throughout janetpack-core.
pub type Result<T> = std::result::Result<T, PackError>;
