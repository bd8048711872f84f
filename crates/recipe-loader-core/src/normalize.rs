// crates/recipe-loader-core/src/normalize.rs

//! # NaN Normalization
//!
//! Data exporters (pandas in particular) write missing floats as the bare
//! literal `NaN`, which is not valid JSON. This module rewrites every such
//! literal to `null` before the document reaches `serde_json`, so a missing
//! float and an absent key end up as the same `None`.
//!
//! The scan is lexical: it tracks string literals (including escapes) and
//! only touches `NaN` tokens that stand on their own outside of strings.
//! Titles like `"NaN bread"` and keys named `"NaN"` are left alone.

use std::borrow::Cow;

const NAN: &[u8] = b"NaN";
const NULL: &str = "null";

/// Output of [`null_nan_literals`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized<'a> {
    pub text: Cow<'a, str>,
    /// How many `NaN` literals were rewritten.
    pub replaced: usize,
}

/// Replaces every standalone `NaN` literal outside string literals with `null`.
///
/// Borrows the input when nothing needs rewriting.
///
/// ```
/// use recipe_loader_core::normalize::null_nan_literals;
///
/// let out = null_nan_literals(r#"{"rating": NaN, "title": "NaN bread"}"#);
/// assert_eq!(out.text, r#"{"rating": null, "title": "NaN bread"}"#);
/// assert_eq!(out.replaced, 1);
/// ```
pub fn null_nan_literals(input: &str) -> Normalized<'_> {
    let bytes = input.as_bytes();
    let mut out: Option<String> = None;
    let mut copied_up_to = 0;
    let mut replaced = 0;
    let mut in_string = false;
    let mut escaped = false;
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];

        if in_string {
            if escaped {
                escaped = false;
            } else if b == b'\\' {
                escaped = true;
            } else if b == b'"' {
                in_string = false;
            }
            i += 1;
            continue;
        }

        if b == b'"' {
            in_string = true;
        } else if b == b'N' && is_standalone_nan(bytes, i) {
            let buf = out.get_or_insert_with(|| String::with_capacity(input.len()));
            buf.push_str(&input[copied_up_to..i]);
            buf.push_str(NULL);
            i += NAN.len();
            copied_up_to = i;
            replaced += 1;
            continue;
        }
        i += 1;
    }

    let text = match out {
        Some(mut buf) => {
            buf.push_str(&input[copied_up_to..]);
            Cow::Owned(buf)
        }
        None => Cow::Borrowed(input),
    };

    Normalized { text, replaced }
}

/// `true` when `bytes[at..]` starts with `NaN` and the token is not part of a
/// longer identifier or number (`NaNa`, `-NaN`, `1NaN` stay as they are and
/// are rejected later by the JSON parser).
fn is_standalone_nan(bytes: &[u8], at: usize) -> bool {
    if !bytes[at..].starts_with(NAN) {
        return false;
    }
    let before_ok = at == 0 || !is_token_byte(bytes[at - 1]);
    let after = at + NAN.len();
    let after_ok = after == bytes.len() || !is_token_byte(bytes[after]);
    before_ok && after_ok
}

#[inline]
fn is_token_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'_' | b'.' | b'-' | b'+')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rewrites_nan_in_value_positions() {
        let out = null_nan_literals(r#"[{"rating": NaN, "prep_time":NaN}, NaN]"#);
        assert_eq!(out.text, r#"[{"rating": null, "prep_time":null}, null]"#);
        assert_eq!(out.replaced, 3);
    }

    #[test]
    fn rewrites_nested_nan() {
        let out = null_nan_literals(r#"{"nutrients": {"fat": NaN}}"#);
        assert_eq!(out.text, r#"{"nutrients": {"fat": null}}"#);
        assert_eq!(out.replaced, 1);
    }

    #[test]
    fn leaves_strings_and_keys_alone() {
        let input = r#"{"NaN": "NaN", "title": "say \"NaN\" twice", "x": NaN}"#;
        let out = null_nan_literals(input);
        assert_eq!(
            out.text,
            r#"{"NaN": "NaN", "title": "say \"NaN\" twice", "x": null}"#
        );
        assert_eq!(out.replaced, 1);
    }

    #[test]
    fn escaped_backslash_closes_string() {
        // The string is `a\` so the quote after the backslash pair ends it.
        let out = null_nan_literals(r#"{"t": "a\\", "r": NaN}"#);
        assert_eq!(out.text, r#"{"t": "a\\", "r": null}"#);
        assert_eq!(out.replaced, 1);
    }

    #[test]
    fn ignores_nan_inside_longer_tokens() {
        let input = "[NaNa, -NaN, xNaN]";
        let out = null_nan_literals(input);
        assert_eq!(out.text, input);
        assert_eq!(out.replaced, 0);
    }

    #[test]
    fn borrows_when_untouched() {
        let input = r#"{"rating": 4.5}"#;
        let out = null_nan_literals(input);
        assert!(matches!(out.text, Cow::Borrowed(_)));
        assert_eq!(out.replaced, 0);
    }

    #[test]
    fn keeps_multibyte_text_intact() {
        let out = null_nan_literals(r#"{"title": "Crème brûlée", "rating": NaN}"#);
        assert_eq!(out.text, r#"{"title": "Crème brûlée", "rating": null}"#);
    }

    #[test]
    fn handles_nan_at_document_edges() {
        let out = null_nan_literals("NaN");
        assert_eq!(out.text, "null");
        assert_eq!(out.replaced, 1);
    }
}
