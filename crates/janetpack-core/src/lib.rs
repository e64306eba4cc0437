//! # janetpack-core
//!
//! Decode MessagePack bytes into a value tree and print that tree as
//! **Janet** literal source text.
//!
//! The printer targets one-shot conversion: one msgpack value in, one line
//! of parseable Janet out. Strings can render as Janet strings, buffers,
//! keywords, or symbols; containers can render mutable (`@{...}`, `@[...]`)
//! or immutable; map keys default to keywords. Integers whose magnitude
//! leaves the 32-bit window render through Janet's boxed 64-bit
//! constructors instead of bare decimal.
//!
//! ## Quick start
//!
//! ```rust
//! use janetpack_core::{decode, format, JanetSettings};
//!
//! // {"a": 1, "b": [1, 2, 3]} in msgpack
//! let bytes = [0x82, 0xa1, 0x61, 0x01, 0xa1, 0x62, 0x93, 0x01, 0x02, 0x03];
//! let value = decode(&bytes).unwrap();
//! let janet = format(&value, JanetSettings::default()).unwrap();
//! assert_eq!(janet, "@{:a 1 :b @[1 2 3]}");
//! ```
//!
//! ## Modules
//!
//! - [`decoder`] — msgpack bytes → [`Value`]
//! - [`encoder`] — [`Value`] → msgpack bytes
//! - [`formatter`] — [`Value`] → Janet literal text
//! - [`settings`] — per-kind representation choices for the printer
//! - [`error`] — error types for decode/encode/render failures
//! - [`value`] — the decoded value tree

pub mod decoder;
pub mod encoder;
pub mod error;
pub mod formatter;
pub mod settings;
pub mod value;

/// Maximum container nesting accepted by the decoder, the encoder, and the
/// formatter.
pub const MAX_DEPTH: usize = 1024;

pub use decoder::decode;
pub use encoder::encode;
pub use error::{PackError, Result};
pub use formatter::format;
pub use settings::{JanetSettings, Mutability, StringType};
pub use value::Value;
