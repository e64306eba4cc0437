//! Janet literal printer. Walks a decoded [`Value`] tree and emits one line
//! of Janet source text.
//!
//! Per-kind output:
//!
//! - **nil / booleans**: spelled out (`nil`, `true`, `false`)
//! - **integers**: bare decimal inside the 32-bit magnitude window, a boxed
//!   constructor call like `(int/s64 "5000000000")` outside it
//! - **strings**: sigil + token on the bare-token fast path (`:north`,
//!   `@buf`, `'sym`), a double-quoted form with canonical escapes otherwise
//! - **arrays**: `@[1 2 3]` or `[1 2 3]` per [`JanetSettings::array_type`]
//! - **maps**: `@{:a 1 :b 2}` or `{...}` per [`JanetSettings::map_type`],
//!   pairs in wire order, keys rendered with their own string type
//!
//! # Example
//! ```
//! use janetpack_core::{format, JanetSettings, Value};
//!
//! let value = Value::Array(vec![Value::from(1i64), Value::from("hi")]);
//! let janet = format(&value, JanetSettings::default()).unwrap();
//! assert_eq!(janet, "@[1 hi]");
//! ```

use crate::error::{PackError, Result};
use crate::settings::{JanetSettings, StringType};
use crate::value::Value;
use crate::MAX_DEPTH;
use num_bigint::{BigInt, Sign};

/// Render a value tree as Janet literal source.
///
/// The output is a single line: newlines and other control characters inside
/// string data are always escaped. Fails with [`PackError::UnsupportedType`]
/// for kinds Janet source cannot express as a literal (`Binary`, `Ext`); a
/// failed call yields no text, not even a partial prefix.
pub fn format(value: &Value, settings: JanetSettings) -> Result<String> {
    let mut out = String::new();
    format_value(value, settings, 0, &mut out)?;
    Ok(out)
}

/// Recursive dispatch over the value kinds.
fn format_value(
    value: &Value,
    settings: JanetSettings,
    depth: usize,
    out: &mut String,
) -> Result<()> {
    if depth > MAX_DEPTH {
        return Err(PackError::TooDeep { limit: MAX_DEPTH });
    }
    match value {
        Value::Nil => out.push_str("nil"),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Int(n) => format_integer(n, out),
        Value::Float(f) => format_float(*f, out),
        Value::String(s) => format_string(s, settings.string_type, out),
        Value::Array(items) => {
            out.push_str(settings.array_type.prefix());
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(' ');
                }
                format_value(item, settings, depth + 1, out)?;
            }
            out.push(']');
        }
        Value::Map(pairs) => {
            // Keys carry their own string representation; every other
            // setting flows through to the values unchanged.
            let key_settings = settings.with_string_type(settings.map_key_type);
            out.push_str(settings.map_type.prefix());
            out.push('{');
            for (i, (key, val)) in pairs.iter().enumerate() {
                if i > 0 {
                    out.push(' ');
                }
                format_value(key, key_settings, depth + 1, out)?;
                out.push(' ');
                format_value(val, settings, depth + 1, out)?;
            }
            out.push('}');
        }
        Value::Binary(_) | Value::Ext(..) => {
            return Err(PackError::UnsupportedType { kind: value.kind() });
        }
    }
    Ok(())
}

/// Largest magnitude rendered as a bare decimal literal. Janet reads bare
/// numbers as IEEE doubles; magnitudes past 2^32 - 1 go through the boxed
/// 64-bit constructors instead.
const PLAIN_INT_MAX: u64 = u32::MAX as u64;

/// Integers inside the plain window render as decimal digits. Outside it,
/// non-negative values render as `(int/s64 "...")` and negative values as
/// `(int/u64 "...")`; downstream parsers match on exactly this pairing.
/// The digits never need escaping, so they are quoted directly.
fn format_integer(n: &BigInt, out: &mut String) {
    if fits_plain(n) {
        out.push_str(&n.to_string());
        return;
    }
    let constructor = if n.sign() == Sign::Minus {
        "int/u64"
    } else {
        "int/s64"
    };
    out.push('(');
    out.push_str(constructor);
    out.push_str(" \"");
    out.push_str(&n.to_string());
    out.push_str("\")");
}

fn fits_plain(n: &BigInt) -> bool {
    match u64::try_from(n.magnitude()) {
        Ok(mag) => mag <= PLAIN_INT_MAX,
        Err(_) => false,
    }
}

/// Floats use Rust's shortest round-trip formatting, which Janet reads back
/// to the same double. `nan` is lowercased; infinities already print as
/// `inf`/`-inf`.
fn format_float(f: f64, out: &mut String) {
    if f.is_nan() {
        out.push_str("nan");
    } else {
        out.push_str(&f.to_string());
    }
}

/// True for a non-empty run of `[A-Za-z0-9_-]`. Bare tokens render with
/// just the type sigil, no quotes, for every string type.
fn is_bare_token(s: &str) -> bool {
    !s.is_empty()
        && s.chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

/// Strings: sigil + token on the fast path, a quoted form otherwise.
/// Keywords and symbols have no quoted literal (`:"two words"` does not
/// parse), so they fall back to their constructor, `(keyword "two words")`.
fn format_string(s: &str, kind: StringType, out: &mut String) {
    if is_bare_token(s) {
        out.push_str(kind.prefix());
        out.push_str(s);
        return;
    }
    match kind {
        StringType::Buffer | StringType::String => {
            out.push_str(kind.prefix());
            push_quoted(s, out);
        }
        StringType::Keyword | StringType::Symbol => {
            out.push('(');
            out.push_str(kind.constructor());
            out.push(' ');
            push_quoted(s, out);
            out.push(')');
        }
    }
}

/// Append the canonical double-quoted form of `s`.
fn push_quoted(s: &str, out: &mut String) {
    out.push('"');
    for c in s.chars() {
        push_escaped(c, out);
    }
    out.push('"');
}

/// Escape one char per Janet string literal rules. Backslash, quote, and
/// the three named controls take two-char escapes; any other control
/// character takes the smallest hex escape holding its codepoint; every
/// remaining char is emitted literally.
fn push_escaped(c: char, out: &mut String) {
    match c {
        '\\' => out.push_str("\\\\"),
        '"' => out.push_str("\\\""),
        '\n' => out.push_str("\\n"),
        '\r' => out.push_str("\\r"),
        '\t' => out.push_str("\\t"),
        c if c.is_control() => push_hex_escape(c, out),
        c => out.push(c),
    }
}

/// Hex escape sized to the codepoint: `\xhh` through U+00FF, `\uhhhh`
/// through U+FFFF, `\Uhhhhhhhh` above. Lowercase digits.
fn push_hex_escape(c: char, out: &mut String) {
    let cp = c as u32;
    if cp <= 0xFF {
        out.push_str(&format!("\\x{:02x}", cp));
    } else if cp <= 0xFFFF {
        out.push_str(&format!("\\u{:04x}", cp));
    } else {
        out.push_str(&format!("\\U{:08x}", cp));
    }
}
