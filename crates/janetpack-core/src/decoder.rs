//! MessagePack decoder. Reads exactly one value from a byte slice into the
//! [`Value`] tree.
//!
//! The full wire format is accepted: nil, booleans, both fixint ranges,
//! every uint/int width, float32 (widened to f64) and float64, every
//! str/bin/ext form, and every array/map form. All multibyte fields are
//! big-endian. Strings must be valid UTF-8. Bytes left over after the value
//! are an error, as is the reserved type byte `0xc1`.

use crate::error::{PackError, Result};
use crate::value::Value;
use crate::MAX_DEPTH;
use num_bigint::BigInt;

/// Decode one msgpack value from `bytes`.
///
/// # Example
/// ```
/// use janetpack_core::{decode, Value};
///
/// // fixarray of three fixints
/// let value = decode(&[0x93, 0x01, 0x02, 0x03]).unwrap();
/// assert_eq!(
///     value,
///     Value::Array(vec![Value::from(1i64), Value::from(2i64), Value::from(3i64)])
/// );
/// ```
pub fn decode(bytes: &[u8]) -> Result<Value> {
    let mut r = Reader { buf: bytes, pos: 0 };
    let value = read_value(&mut r, 0)?;
    if r.pos != r.buf.len() {
        return Err(r.err("trailing bytes after the value"));
    }
    Ok(value)
}

/// Byte cursor over the input. All reads are bounds-checked; errors carry
/// the offset where the input ran out or went wrong.
struct Reader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    fn err(&self, message: impl Into<String>) -> PackError {
        self.err_at(self.pos, message)
    }

    fn err_at(&self, offset: usize, message: impl Into<String>) -> PackError {
        PackError::Decode {
            offset,
            message: message.into(),
        }
    }

    fn u8(&mut self) -> Result<u8> {
        match self.buf.get(self.pos) {
            Some(&byte) => {
                self.pos += 1;
                Ok(byte)
            }
            None => Err(self.err("unexpected end of input")),
        }
    }

    fn take(&mut self, len: usize) -> Result<&'a [u8]> {
        let end = self
            .pos
            .checked_add(len)
            .ok_or_else(|| self.err("length overflow"))?;
        if end > self.buf.len() {
            return Err(self.err("unexpected end of input"));
        }
        let slice = &self.buf[self.pos..end];
        self.pos = end;
        Ok(slice)
    }

    fn u16(&mut self) -> Result<u16> {
        let b = self.take(2)?;
        Ok(u16::from_be_bytes([b[0], b[1]]))
    }

    fn u32(&mut self) -> Result<u32> {
        let b = self.take(4)?;
        Ok(u32::from_be_bytes([b[0], b[1], b[2], b[3]]))
    }

    fn u64(&mut self) -> Result<u64> {
        let b = self.take(8)?;
        Ok(u64::from_be_bytes([
            b[0], b[1], b[2], b[3], b[4], b[5], b[6], b[7],
        ]))
    }
}

/// Dispatch on the type byte. Containers recurse with a depth guard so a
/// hostile input cannot blow the stack.
fn read_value(r: &mut Reader<'_>, depth: usize) -> Result<Value> {
    if depth > MAX_DEPTH {
        return Err(PackError::TooDeep { limit: MAX_DEPTH });
    }
    let start = r.pos;
    let tag = r.u8()?;
    match tag {
        0x00..=0x7f => Ok(Value::Int(BigInt::from(tag))),
        0x80..=0x8f => read_map(r, (tag & 0x0f) as usize, depth),
        0x90..=0x9f => read_array(r, (tag & 0x0f) as usize, depth),
        0xa0..=0xbf => read_str(r, (tag & 0x1f) as usize),
        0xc0 => Ok(Value::Nil),
        0xc1 => Err(r.err_at(start, "reserved type byte 0xc1")),
        0xc2 => Ok(Value::Bool(false)),
        0xc3 => Ok(Value::Bool(true)),
        0xc4 => {
            let len = r.u8()? as usize;
            read_bin(r, len)
        }
        0xc5 => {
            let len = r.u16()? as usize;
            read_bin(r, len)
        }
        0xc6 => {
            let len = r.u32()? as usize;
            read_bin(r, len)
        }
        0xc7 => {
            let len = r.u8()? as usize;
            read_ext(r, len)
        }
        0xc8 => {
            let len = r.u16()? as usize;
            read_ext(r, len)
        }
        0xc9 => {
            let len = r.u32()? as usize;
            read_ext(r, len)
        }
        0xca => Ok(Value::Float(f64::from(f32::from_bits(r.u32()?)))),
        0xcb => Ok(Value::Float(f64::from_bits(r.u64()?))),
        0xcc => Ok(Value::Int(BigInt::from(r.u8()?))),
        0xcd => Ok(Value::Int(BigInt::from(r.u16()?))),
        0xce => Ok(Value::Int(BigInt::from(r.u32()?))),
        0xcf => Ok(Value::Int(BigInt::from(r.u64()?))),
        0xd0 => Ok(Value::Int(BigInt::from(r.u8()? as i8))),
        0xd1 => Ok(Value::Int(BigInt::from(r.u16()? as i16))),
        0xd2 => Ok(Value::Int(BigInt::from(r.u32()? as i32))),
        0xd3 => Ok(Value::Int(BigInt::from(r.u64()? as i64))),
        0xd4 => read_ext(r, 1),
        0xd5 => read_ext(r, 2),
        0xd6 => read_ext(r, 4),
        0xd7 => read_ext(r, 8),
        0xd8 => read_ext(r, 16),
        0xd9 => {
            let len = r.u8()? as usize;
            read_str(r, len)
        }
        0xda => {
            let len = r.u16()? as usize;
            read_str(r, len)
        }
        0xdb => {
            let len = r.u32()? as usize;
            read_str(r, len)
        }
        0xdc => {
            let len = r.u16()? as usize;
            read_array(r, len, depth)
        }
        0xdd => {
            let len = r.u32()? as usize;
            read_array(r, len, depth)
        }
        0xde => {
            let len = r.u16()? as usize;
            read_map(r, len, depth)
        }
        0xdf => {
            let len = r.u32()? as usize;
            read_map(r, len, depth)
        }
        0xe0..=0xff => Ok(Value::Int(BigInt::from(tag as i8))),
    }
}

fn read_str(r: &mut Reader<'_>, len: usize) -> Result<Value> {
    let start = r.pos;
    let bytes = r.take(len)?;
    match std::str::from_utf8(bytes) {
        Ok(s) => Ok(Value::String(s.to_string())),
        Err(_) => Err(r.err_at(start, "string is not valid utf-8")),
    }
}

fn read_bin(r: &mut Reader<'_>, len: usize) -> Result<Value> {
    Ok(Value::Binary(r.take(len)?.to_vec()))
}

fn read_ext(r: &mut Reader<'_>, len: usize) -> Result<Value> {
    let ext_type = r.u8()? as i8;
    Ok(Value::Ext(ext_type, r.take(len)?.to_vec()))
}

fn read_array(r: &mut Reader<'_>, len: usize, depth: usize) -> Result<Value> {
    // The length is wire data; never trust it for preallocation.
    let mut items = Vec::new();
    for _ in 0..len {
        items.push(read_value(r, depth + 1)?);
    }
    Ok(Value::Array(items))
}

fn read_map(r: &mut Reader<'_>, len: usize, depth: usize) -> Result<Value> {
    let mut pairs = Vec::new();
    for _ in 0..len {
        let key = read_value(r, depth + 1)?;
        let val = read_value(r, depth + 1)?;
        pairs.push((key, val));
    }
    Ok(Value::Map(pairs))
}
