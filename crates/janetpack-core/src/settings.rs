//! Rendering choices for the Janet printer.
//!
//! msgpack only says "string", "map", "array"; Janet has several literal
//! forms for each. [`JanetSettings`] picks one form per kind and flows by
//! value through the printer, so a local override (map keys render with
//! their own string type) never leaks back to the caller.

/// Janet representation for a decoded msgpack string.
///
/// Controls both the sigil used in the bare-token fast path and the shape of
/// the fallback form:
///
/// - `Buffer` renders `@hello` or `@"hello world"`
/// - `String` renders `hello` or `"hello world"`
/// - `Keyword` renders `:hello` or `(keyword "hello world")`
/// - `Symbol` renders `'hello` or `(symbol "hello world")`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum StringType {
    Buffer,
    #[default]
    String,
    Keyword,
    Symbol,
}

impl StringType {
    /// Sigil prepended to a bare token of this type.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            StringType::Buffer => "@",
            StringType::String => "",
            StringType::Keyword => ":",
            StringType::Symbol => "'",
        }
    }

    /// Janet constructor called when a keyword or symbol cannot be written
    /// as a bare token.
    #[must_use]
    pub const fn constructor(self) -> &'static str {
        match self {
            StringType::Buffer => "buffer",
            StringType::String => "string",
            StringType::Keyword => "keyword",
            StringType::Symbol => "symbol",
        }
    }
}

/// Whether container literals get the mutable `@` sigil.
///
/// `@{...}`/`@[...]` parse as Janet tables and arrays (mutable);
/// `{...}`/`[...]` parse as structs and tuples (immutable).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Mutability {
    Immutable,
    #[default]
    Mutable,
}

impl Mutability {
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Mutability::Immutable => "",
            Mutability::Mutable => "@",
        }
    }
}

/// Per-kind representation choices for [`format`](crate::format).
///
/// The defaults match a one-shot conversion for human eyes: plain strings,
/// mutable containers, keyword map keys.
///
/// # Examples
///
/// ```rust
/// use janetpack_core::{JanetSettings, StringType, Mutability};
///
/// let settings = JanetSettings::new()
///     .with_string_type(StringType::Symbol)
///     .with_map_type(Mutability::Immutable);
/// assert_eq!(settings.string_type, StringType::Symbol);
/// assert_eq!(settings.array_type, Mutability::Mutable);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct JanetSettings {
    /// Representation for string values outside map-key position.
    pub string_type: StringType,
    /// Mutability sigil for map literals.
    pub map_type: Mutability,
    /// Mutability sigil for array literals.
    pub array_type: Mutability,
    /// Representation for strings appearing as map keys.
    pub map_key_type: StringType,
}

impl Default for JanetSettings {
    fn default() -> Self {
        JanetSettings {
            string_type: StringType::String,
            map_type: Mutability::Mutable,
            array_type: Mutability::Mutable,
            map_key_type: StringType::Keyword,
        }
    }
}

impl JanetSettings {
    /// Creates the default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the representation for string values.
    #[must_use]
    pub fn with_string_type(mut self, string_type: StringType) -> Self {
        self.string_type = string_type;
        self
    }

    /// Sets the mutability of map literals.
    #[must_use]
    pub fn with_map_type(mut self, map_type: Mutability) -> Self {
        self.map_type = map_type;
        self
    }

    /// Sets the mutability of array literals.
    #[must_use]
    pub fn with_array_type(mut self, array_type: Mutability) -> Self {
        self.array_type = array_type;
        self
    }

    /// Sets the representation for strings in map-key position.
    #[must_use]
    pub fn with_map_key_type(mut self, map_key_type: StringType) -> Self {
        self.map_key_type = map_key_type;
        self
    }
}
