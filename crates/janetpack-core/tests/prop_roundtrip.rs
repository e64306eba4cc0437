/// Property-based tests for the msgpack codec and the Janet printer.
///
/// Uses `proptest` to generate random value trees and verify:
/// - `decode(encode(value)) == value` for every encodable tree (the wire
///   roundtrip), including binary and extension values
/// - the printer emits a single line with no raw control characters
/// - the bare-token fast path and the 32-bit integer window hold for
///   arbitrary inputs, not just the hand-picked cases
///
/// NaN floats are excluded from roundtrip strategies (NaN != NaN would fail
/// the comparison for reasons unrelated to the codec) and integers stay
/// inside the u64/i64 wire range; both exclusions are covered by targeted
/// unit tests instead.
use janetpack_core::{decode, encode, format, JanetSettings, StringType, Value};
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

/// Integers across every wire-width bucket, with the bucket boundaries
/// always in the pool.
fn arb_int() -> impl Strategy<Value = Value> {
    prop_oneof![
        4 => (-1_000i64..1_000i64).prop_map(Value::from),
        2 => any::<i64>().prop_map(Value::from),
        2 => any::<u64>().prop_map(Value::from),
        1 => prop_oneof![
            Just(Value::from(127i64)),
            Just(Value::from(128i64)),
            Just(Value::from(-32i64)),
            Just(Value::from(-33i64)),
            Just(Value::from(4_294_967_295i64)),
            Just(Value::from(4_294_967_296i64)),
            Just(Value::from(u64::MAX)),
            Just(Value::from(i64::MIN)),
        ],
    ]
}

/// Finite floats only.
fn arb_float() -> impl Strategy<Value = Value> {
    prop_oneof![
        (-1.0e9f64..1.0e9f64).prop_map(Value::from),
        Just(Value::from(0.0)),
        Just(Value::from(-0.5)),
        Just(Value::from(f64::MIN_POSITIVE)),
    ]
}

/// Strings with the interesting edges always in the pool: empty, bare
/// tokens, spaces, quotes, backslashes, controls, unicode.
fn arb_string() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => "[a-z0-9_-]{0,12}",
        2 => "[ -~]{0,20}",
        2 => any::<String>(),
        1 => prop_oneof![
            Just(String::new()),
            Just("two words".to_string()),
            Just("line1\nline2".to_string()),
            Just("tab\tsep".to_string()),
            Just("say \"hi\"".to_string()),
            Just("back\\slash".to_string()),
            Just("caf\u{e9}".to_string()),
            Just("\u{1b}[31m".to_string()),
        ],
    ]
}

fn arb_binary() -> impl Strategy<Value = Value> {
    prop::collection::vec(any::<u8>(), 0..64).prop_map(Value::Binary)
}

fn arb_ext() -> impl Strategy<Value = Value> {
    (any::<i8>(), prop::collection::vec(any::<u8>(), 0..40))
        .prop_map(|(ext_type, payload)| Value::Ext(ext_type, payload))
}

/// Leaf values the printer accepts.
fn arb_atom() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Nil),
        any::<bool>().prop_map(Value::from),
        arb_int(),
        arb_float(),
        arb_string().prop_map(Value::String),
    ]
}

/// Any value tree, including kinds the printer rejects. Map keys are
/// arbitrary values on purpose.
fn arb_value_inner(depth: u32) -> BoxedStrategy<Value> {
    if depth == 0 {
        arb_atom().boxed()
    } else {
        prop_oneof![
            4 => arb_atom(),
            1 => arb_binary(),
            1 => arb_ext(),
            2 => prop::collection::vec(arb_value_inner(depth - 1), 0..5)
                .prop_map(Value::Array),
            2 => prop::collection::vec(
                (arb_value_inner(depth - 1), arb_value_inner(depth - 1)),
                0..4,
            )
            .prop_map(Value::Map),
        ]
        .boxed()
    }
}

fn arb_value() -> impl Strategy<Value = Value> {
    arb_value_inner(3)
}

/// Value trees restricted to kinds the printer accepts.
fn arb_printable_inner(depth: u32) -> BoxedStrategy<Value> {
    if depth == 0 {
        arb_atom().boxed()
    } else {
        prop_oneof![
            4 => arb_atom(),
            2 => prop::collection::vec(arb_printable_inner(depth - 1), 0..5)
                .prop_map(Value::Array),
            2 => prop::collection::vec(
                (arb_printable_inner(depth - 1), arb_printable_inner(depth - 1)),
                0..4,
            )
            .prop_map(Value::Map),
        ]
        .boxed()
    }
}

fn arb_printable() -> impl Strategy<Value = Value> {
    arb_printable_inner(3)
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Core wire property: decode(encode(value)) == value.
    #[test]
    fn wire_roundtrip(value in arb_value()) {
        let bytes = encode(&value).expect("encode failed");
        let back = decode(&bytes).expect("decode failed");
        prop_assert_eq!(&back, &value, "wire roundtrip changed the value");
    }

    /// The decoder consumes exactly the bytes the encoder wrote; appending
    /// anything makes the input invalid.
    #[test]
    fn trailing_garbage_is_rejected(value in arb_value(), junk in any::<u8>()) {
        let mut bytes = encode(&value).expect("encode failed");
        bytes.push(junk);
        prop_assert!(decode(&bytes).is_err(), "trailing byte was accepted");
    }

    /// Printer output is one line of printable text for every supported
    /// tree, no matter what the strings contain.
    #[test]
    fn format_output_is_a_single_printable_line(value in arb_printable()) {
        let out = format(&value, JanetSettings::default()).unwrap();
        prop_assert!(
            !out.chars().any(|c| c.is_control()),
            "control character leaked into output: {:?}",
            out
        );
    }

    /// The fast path holds for every bare token: sigil plus the text,
    /// nothing quoted.
    #[test]
    fn bare_tokens_render_with_sigil_only(token in "[A-Za-z0-9_-]{1,16}") {
        let value = Value::from(token.as_str());
        let plain = format(&value, JanetSettings::default()).unwrap();
        let keyword = format(
            &value,
            JanetSettings::new().with_string_type(StringType::Keyword),
        )
        .unwrap();
        let expected_keyword = format!(":{token}");
        prop_assert_eq!(plain, token);
        prop_assert_eq!(keyword, expected_keyword);
    }

    /// Non-bare strings under the default string type always come back
    /// double-quoted.
    #[test]
    fn string_forms_are_bare_or_quoted(s in arb_string()) {
        let out = format(&Value::from(s.as_str()), JanetSettings::default()).unwrap();
        let bare = !s.is_empty()
            && s.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if bare {
            prop_assert_eq!(out, s);
        } else {
            prop_assert!(
                out.starts_with('"') && out.ends_with('"') && out.len() >= 2,
                "expected a quoted form for {:?}, got {:?}",
                s,
                out
            );
        }
    }

    /// Integers inside the 32-bit magnitude window are bare decimal.
    #[test]
    fn ints_inside_window_are_bare_decimal(n in -4_294_967_295i64..=4_294_967_295i64) {
        let out = format(&Value::from(n), JanetSettings::default()).unwrap();
        prop_assert_eq!(out, n.to_string());
    }

    /// Integers outside the window are boxed, s64 for non-negative and u64
    /// for negative.
    #[test]
    fn ints_outside_window_are_boxed(
        n in prop_oneof![
            4_294_967_296i64..i64::MAX,
            i64::MIN..-4_294_967_295i64,
        ]
    ) {
        let out = format(&Value::from(n), JanetSettings::default()).unwrap();
        let expected = if n >= 0 {
            format!("(int/s64 \"{n}\")")
        } else {
            format!("(int/u64 \"{n}\")")
        };
        prop_assert_eq!(out, expected);
    }

    /// The whole fixint range encodes to exactly one byte.
    #[test]
    fn fixint_encodes_to_one_byte(n in -32i64..=127i64) {
        let bytes = encode(&Value::from(n)).unwrap();
        prop_assert_eq!(bytes.len(), 1, "fixint took more than one byte");
    }

    /// Decoding arbitrary bytes never panics; it either produces a value or
    /// a proper error.
    #[test]
    fn decode_never_panics(bytes in prop::collection::vec(any::<u8>(), 0..64)) {
        let _ = decode(&bytes);
    }
}
