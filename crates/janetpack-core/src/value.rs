//! The decoded value tree that sits between the msgpack wire format and the
//! Janet printer.
//!
//! Every msgpack value decodes into this set, including kinds Janet source
//! has no literal for (`Binary`, `Ext`); those decode fine and are only
//! rejected at render time.

use num_bigint::BigInt;

/// One msgpack value. Maps are `Vec<(Value, Value)>` to maintain wire order
/// without depending on `IndexMap`; integers are `BigInt` so the u64 and i64
/// wire ranges share one variant without loss.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Nil,
    Bool(bool),
    Int(BigInt),
    Float(f64),
    String(String),
    Binary(Vec<u8>),
    Array(Vec<Value>),
    /// Key-value pairs in wire order. Keys may be any value; uniqueness is
    /// the producer's problem.
    Map(Vec<(Value, Value)>),
    /// Application extension: type tag plus opaque payload.
    Ext(i8, Vec<u8>),
}

impl Value {
    /// Human-readable kind name, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Nil => "nil",
            Value::Bool(_) => "boolean",
            Value::Int(_) => "integer",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::Binary(_) => "binary",
            Value::Array(_) => "array",
            Value::Map(_) => "map",
            Value::Ext(..) => "extension",
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(BigInt::from(n))
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        Value::Int(BigInt::from(n))
    }
}

impl From<BigInt> for Value {
    fn from(n: BigInt) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}
