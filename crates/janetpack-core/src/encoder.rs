//! MessagePack encoder. Writes a [`Value`] tree in the minimal-width wire
//! encoding: fixint bytes where they fit, the narrowest uint/int/length
//! header otherwise, fixext forms when an extension payload length matches
//! one exactly. Floats always encode as float64.

use crate::error::{PackError, Result};
use crate::value::Value;
use crate::MAX_DEPTH;
use num_bigint::BigInt;

/// Encode a value tree as msgpack bytes.
///
/// # Example
/// ```
/// use janetpack_core::{encode, Value};
///
/// let bytes = encode(&Value::Array(vec![Value::from(1i64), Value::from(2i64)])).unwrap();
/// assert_eq!(bytes, [0x92, 0x01, 0x02]);
/// ```
pub fn encode(value: &Value) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    write_value(value, 0, &mut out)?;
    Ok(out)
}

fn write_value(value: &Value, depth: usize, out: &mut Vec<u8>) -> Result<()> {
    if depth > MAX_DEPTH {
        return Err(PackError::TooDeep { limit: MAX_DEPTH });
    }
    match value {
        Value::Nil => out.push(0xc0),
        Value::Bool(false) => out.push(0xc2),
        Value::Bool(true) => out.push(0xc3),
        Value::Int(n) => write_int(n, out)?,
        Value::Float(f) => {
            out.push(0xcb);
            out.extend_from_slice(&f.to_bits().to_be_bytes());
        }
        Value::String(s) => write_str(s, out)?,
        Value::Binary(bytes) => write_bin(bytes, out)?,
        Value::Array(items) => {
            write_array_header(items.len(), out)?;
            for item in items {
                write_value(item, depth + 1, out)?;
            }
        }
        Value::Map(pairs) => {
            write_map_header(pairs.len(), out)?;
            for (key, val) in pairs {
                write_value(key, depth + 1, out)?;
                write_value(val, depth + 1, out)?;
            }
        }
        Value::Ext(ext_type, payload) => write_ext(*ext_type, payload, out)?,
    }
    Ok(())
}

/// Smallest integer form: a bare fixint byte inside [-32, 127], then the
/// narrowest uint family member for n >= 0 or int family member for n < 0.
/// Integers outside the u64/i64 wire range have no msgpack encoding.
fn write_int(n: &BigInt, out: &mut Vec<u8>) -> Result<()> {
    if let Ok(u) = u64::try_from(n) {
        if u <= 0x7f {
            out.push(u as u8);
        } else if u <= 0xff {
            out.push(0xcc);
            out.push(u as u8);
        } else if u <= 0xffff {
            out.push(0xcd);
            out.extend_from_slice(&(u as u16).to_be_bytes());
        } else if u <= 0xffff_ffff {
            out.push(0xce);
            out.extend_from_slice(&(u as u32).to_be_bytes());
        } else {
            out.push(0xcf);
            out.extend_from_slice(&u.to_be_bytes());
        }
        return Ok(());
    }
    if let Ok(i) = i64::try_from(n) {
        // Negative from here on: non-negative values took the unsigned path.
        if i >= -32 {
            out.push(i as u8);
        } else if i >= i64::from(i8::MIN) {
            out.push(0xd0);
            out.push(i as u8);
        } else if i >= i64::from(i16::MIN) {
            out.push(0xd1);
            out.extend_from_slice(&(i as i16).to_be_bytes());
        } else if i >= i64::from(i32::MIN) {
            out.push(0xd2);
            out.extend_from_slice(&(i as i32).to_be_bytes());
        } else {
            out.push(0xd3);
            out.extend_from_slice(&i.to_be_bytes());
        }
        return Ok(());
    }
    Err(PackError::Encode(format!(
        "integer out of msgpack range: {n}"
    )))
}

fn write_str(s: &str, out: &mut Vec<u8>) -> Result<()> {
    let len = s.len();
    if len < 32 {
        out.push(0xa0 | len as u8);
    } else if len <= 0xff {
        out.push(0xd9);
        out.push(len as u8);
    } else if len <= 0xffff {
        out.push(0xda);
        out.extend_from_slice(&(len as u16).to_be_bytes());
    } else if len <= u32::MAX as usize {
        out.push(0xdb);
        out.extend_from_slice(&(len as u32).to_be_bytes());
    } else {
        return Err(PackError::Encode(format!(
            "string of {len} bytes exceeds the wire limit"
        )));
    }
    out.extend_from_slice(s.as_bytes());
    Ok(())
}

fn write_bin(bytes: &[u8], out: &mut Vec<u8>) -> Result<()> {
    let len = bytes.len();
    if len <= 0xff {
        out.push(0xc4);
        out.push(len as u8);
    } else if len <= 0xffff {
        out.push(0xc5);
        out.extend_from_slice(&(len as u16).to_be_bytes());
    } else if len <= u32::MAX as usize {
        out.push(0xc6);
        out.extend_from_slice(&(len as u32).to_be_bytes());
    } else {
        return Err(PackError::Encode(format!(
            "binary of {len} bytes exceeds the wire limit"
        )));
    }
    out.extend_from_slice(bytes);
    Ok(())
}

fn write_array_header(len: usize, out: &mut Vec<u8>) -> Result<()> {
    if len <= 15 {
        out.push(0x90 | len as u8);
    } else if len <= 0xffff {
        out.push(0xdc);
        out.extend_from_slice(&(len as u16).to_be_bytes());
    } else if len <= u32::MAX as usize {
        out.push(0xdd);
        out.extend_from_slice(&(len as u32).to_be_bytes());
    } else {
        return Err(PackError::Encode(format!(
            "array of {len} elements exceeds the wire limit"
        )));
    }
    Ok(())
}

fn write_map_header(len: usize, out: &mut Vec<u8>) -> Result<()> {
    if len <= 15 {
        out.push(0x80 | len as u8);
    } else if len <= 0xffff {
        out.push(0xde);
        out.extend_from_slice(&(len as u16).to_be_bytes());
    } else if len <= u32::MAX as usize {
        out.push(0xdf);
        out.extend_from_slice(&(len as u32).to_be_bytes());
    } else {
        return Err(PackError::Encode(format!(
            "map of {len} pairs exceeds the wire limit"
        )));
    }
    Ok(())
}

/// The ext header carries the payload length, then the application type
/// byte, then the payload. Fixext forms exist only for lengths 1, 2, 4, 8,
/// and 16.
fn write_ext(ext_type: i8, payload: &[u8], out: &mut Vec<u8>) -> Result<()> {
    let len = payload.len();
    match len {
        1 => out.push(0xd4),
        2 => out.push(0xd5),
        4 => out.push(0xd6),
        8 => out.push(0xd7),
        16 => out.push(0xd8),
        _ if len <= 0xff => {
            out.push(0xc7);
            out.push(len as u8);
        }
        _ if len <= 0xffff => {
            out.push(0xc8);
            out.extend_from_slice(&(len as u16).to_be_bytes());
        }
        _ if len <= u32::MAX as usize => {
            out.push(0xc9);
            out.extend_from_slice(&(len as u32).to_be_bytes());
        }
        _ => {
            return Err(PackError::Encode(format!(
                "extension payload of {len} bytes exceeds the wire limit"
            )));
        }
    }
    out.push(ext_type as u8);
    out.extend_from_slice(payload);
    Ok(())
}
