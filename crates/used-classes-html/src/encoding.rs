//! Character encoding detection for HTML files.
//!
//! Templates on disk are not always UTF-8. The encoding is chosen the way a
//! browser would for a local file: a byte order mark wins, then a
//! `<meta charset>` declaration near the top of the file, then UTF-8 if the
//! bytes are valid UTF-8, and windows-1252 otherwise. Decoding never fails;
//! malformed sequences become U+FFFD.

use std::borrow::Cow;

use encoding_rs::{Encoding, UTF_8, UTF_16BE, UTF_16LE, WINDOWS_1252, X_USER_DEFINED};

/// Number of leading bytes searched for a `<meta charset>` declaration.
const PRESCAN_LIMIT: usize = 1024;

/// Pick the encoding to decode `bytes` with.
#[must_use]
pub fn sniff_encoding(bytes: &[u8]) -> &'static Encoding {
    if let Some((encoding, _)) = Encoding::for_bom(bytes) {
        return encoding;
    }
    if let Some(encoding) = prescan_meta_charset(bytes) {
        return encoding;
    }
    if Encoding::utf8_valid_up_to(bytes) == bytes.len() {
        UTF_8
    } else {
        WINDOWS_1252
    }
}

/// Decode an HTML file's bytes to text, dropping any byte order mark.
///
/// Returns the text together with the encoding that was used.
#[must_use]
pub fn decode_html(bytes: &[u8]) -> (Cow<'_, str>, &'static Encoding) {
    let encoding = sniff_encoding(bytes);
    let (text, _) = encoding.decode_with_bom_removal(bytes);
    (text, encoding)
}

/// Look for a `charset` in the `<meta>` tags within the first
/// [`PRESCAN_LIMIT`] bytes. Covers both `<meta charset="...">` and
/// `<meta http-equiv="Content-Type" content="text/html; charset=...">`.
fn prescan_meta_charset(bytes: &[u8]) -> Option<&'static Encoding> {
    let head = bytes[..bytes.len().min(PRESCAN_LIMIT)].to_ascii_lowercase();
    let mut rest = head.as_slice();

    while let Some(start) = find(rest, b"<meta") {
        let after = &rest[start + b"<meta".len()..];
        let end = after.iter().position(|&b| b == b'>').unwrap_or(after.len());
        if let Some(encoding) = charset_in_tag(&after[..end]) {
            return Some(encoding);
        }
        rest = &after[end..];
    }

    None
}

/// Extract and resolve the `charset=` value inside one (lowercased) tag.
fn charset_in_tag(tag: &[u8]) -> Option<&'static Encoding> {
    let start = find(tag, b"charset")? + b"charset".len();
    let value = tag[start..].trim_ascii_start().strip_prefix(b"=")?;
    let value = value.trim_ascii_start();

    let (quote, value) = match value.first() {
        Some(&quote) if quote == b'"' || quote == b'\'' => (Some(quote), &value[1..]),
        _ => (None, value),
    };
    let end = value
        .iter()
        .position(|&b| match quote {
            Some(quote) => b == quote,
            None => b.is_ascii_whitespace() || matches!(b, b';' | b'"' | b'\'' | b'/'),
        })
        .unwrap_or(value.len());

    let encoding = Encoding::for_label(&value[..end])?;
    // A declared UTF-16 cannot be right for bytes we just read as ASCII.
    if encoding == UTF_16BE || encoding == UTF_16LE {
        Some(UTF_8)
    } else if encoding == X_USER_DEFINED {
        Some(WINDOWS_1252)
    } else {
        Some(encoding)
    }
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}
