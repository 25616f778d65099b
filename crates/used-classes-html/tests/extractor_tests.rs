//! Integration tests for collecting classes from HTML documents.

use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use encoding_rs::{UTF_8, UTF_16BE, UTF_16LE, WINDOWS_1252};
use tempfile::TempDir;
use used_classes_html::{ExtractError, scan_html_classes, scan_html_file, used_html_classes};

/// Helper to build a set of class names
fn set(classes: &[&str]) -> HashSet<String> {
    classes.iter().map(|&class| class.to_owned()).collect()
}

/// Helper to write an HTML file into a temporary directory
fn write_file(dir: &TempDir, name: &str, contents: impl AsRef<[u8]>) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write temp file");
    path
}

#[test]
fn test_nested_elements() {
    let usage = scan_html_classes(r#"<div class="foo bar"><span class="bar baz"></span></div>"#);
    assert_eq!(usage.classes, set(&["foo", "bar", "baz"]));
    assert_eq!(usage.elements, 2);
}

#[test]
fn test_empty_class_attribute() {
    let usage = scan_html_classes(r#"<div class=""><p class>text</p></div>"#);
    assert!(usage.classes.is_empty());
    assert_eq!(usage.elements, 2);
}

#[test]
fn test_no_class_attributes() {
    let usage = scan_html_classes("<!DOCTYPE html><html><body><p>Hello</p></body></html>");
    assert!(usage.classes.is_empty());
    assert_eq!(usage.elements, 0);
}

#[test]
fn test_template_expressions_in_attributes() {
    let html = r#"
        <ul class="list {{ list_class }}">
          {% for item in items %}
            <li class="item {% if item.active %}active{% endif %}">{{ item }}</li>
          {% endfor %}
        </ul>
    "#;
    let usage = scan_html_classes(html);
    assert_eq!(usage.classes, set(&["list", "item", "active"]));
    assert!(usage.unbalanced.is_empty());
}

#[test]
fn test_class_text_outside_attributes_ignored() {
    let html = r#"<p>class="not-a-class"</p><script>el.className = "nope";</script>"#;
    assert!(scan_html_classes(html).classes.is_empty());
}

#[test]
fn test_malformed_markup_is_repaired() {
    let usage = scan_html_classes(r#"<div class="outer"><p class="para">one<p class="para two"></div></span>"#);
    assert_eq!(usage.classes, set(&["outer", "para", "two"]));
    assert!(usage.parse_errors > 0);
}

#[test]
fn test_unbalanced_values_reported() {
    let usage = scan_html_classes(r#"<a class="btn {{ size"></a><b class="ok"></b><i class="x }"></i>"#);
    assert_eq!(usage.unbalanced, ["btn {{ size", "x }"]);
    assert_eq!(usage.classes, set(&["btn", "ok", "x"]));
}

#[test]
fn test_used_html_classes_from_file() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_file(
        &dir,
        "page.html",
        r#"<div class="foo bar"><span class="bar baz"></span></div>"#,
    );
    let classes = used_html_classes(&path).expect("scan file");
    assert_eq!(classes, set(&["foo", "bar", "baz"]));
}

#[test]
fn test_byte_order_mark_is_skipped() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_file(&dir, "bom.html", "\u{feff}<p class=\"bom\"></p>");
    let usage = scan_html_file(&path).expect("scan file");
    assert_eq!(usage.classes, set(&["bom"]));
}

#[test]
fn test_missing_file() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("missing.html");
    match used_html_classes(&path) {
        Err(ExtractError::Io { path: failed, .. }) => assert_eq!(failed, path),
        other => panic!("Expected Io error, got {other:?}"),
    }
}

/// Helper to encode text as UTF-16 with a leading byte order mark
fn utf16_with_bom(text: &str, little_endian: bool) -> Vec<u8> {
    let mut bytes = if little_endian {
        vec![0xFF, 0xFE]
    } else {
        vec![0xFE, 0xFF]
    };
    for unit in text.encode_utf16() {
        if little_endian {
            bytes.extend_from_slice(&unit.to_le_bytes());
        } else {
            bytes.extend_from_slice(&unit.to_be_bytes());
        }
    }
    bytes
}

#[test]
fn test_latin1_with_meta_charset() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_file(
        &dir,
        "latin1.html",
        b"<meta charset=\"iso-8859-1\"><p class=\"nav caf\xe9\"></p>",
    );
    let usage = scan_html_file(&path).expect("latin-1 should decode");
    assert_eq!(usage.classes, set(&["nav", "café"]));
    assert_eq!(usage.encoding, Some(WINDOWS_1252));
}

#[test]
fn test_http_equiv_content_type() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_file(
        &dir,
        "legacy.html",
        b"<head><meta http-equiv=\"Content-Type\" content=\"text/html; charset=windows-1252\"></head><p class=\"\x93quoted\x94\"></p>",
    );
    let classes = used_html_classes(&path).expect("scan file");
    assert_eq!(classes, set(&["\u{201c}quoted\u{201d}"]));
}

#[test]
fn test_utf16le_with_bom() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_file(&dir, "le.html", utf16_with_bom(r#"<p class="nav"></p>"#, true));
    let usage = scan_html_file(&path).expect("utf-16 should decode");
    assert_eq!(usage.classes, set(&["nav"]));
    assert_eq!(usage.encoding, Some(UTF_16LE));
}

#[test]
fn test_utf16be_with_bom() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_file(&dir, "be.html", utf16_with_bom(r#"<p class="nav ☃"></p>"#, false));
    let usage = scan_html_file(&path).expect("utf-16 should decode");
    assert_eq!(usage.classes, set(&["nav", "☃"]));
    assert_eq!(usage.encoding, Some(UTF_16BE));
}

#[test]
fn test_undeclared_non_utf8_falls_back_to_windows_1252() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_file(&dir, "plain.html", b"<p class=\"caf\xe9 menu\"></p>");
    let usage = scan_html_file(&path).expect("fallback should decode");
    assert_eq!(usage.classes, set(&["café", "menu"]));
    assert_eq!(usage.encoding, Some(WINDOWS_1252));
}

#[test]
fn test_undeclared_utf8_stays_utf8() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_file(&dir, "utf8.html", r#"<p class="café größe"></p>"#);
    let usage = scan_html_file(&path).expect("scan file");
    assert_eq!(usage.classes, set(&["café", "größe"]));
    assert_eq!(usage.encoding, Some(UTF_8));
}
