//! Class attribute tokenizer and HTML class extractor.
//!
//! # Scope
//!
//! This crate implements:
//! - **Class list tokenizer** - splits a `class` attribute value into class
//!   names, eliding brace-delimited template expressions such as `{{ size }}`
//! - **Encoding detection** - byte order mark, `<meta charset>`, then a
//!   UTF-8 or windows-1252 fallback, so any file on disk can be scanned
//! - **Class extractor** - parses an HTML document or template with the
//!   HTML5 tree-construction algorithm and collects every class name used
//!
//! # Not Yet Implemented
//!
//! - Escaping literal braces inside class names
//! - Template syntaxes other than brace-delimited expressions

pub mod encoding;
/// Error type for reading documents.
pub mod error;
/// Class collection over parsed HTML documents.
pub mod extractor;
/// Class attribute tokenizer.
pub mod tokenizer;

pub use encoding::{decode_html, sniff_encoding};
pub use error::ExtractError;
pub use extractor::{ClassUsage, scan_html_classes, scan_html_file, used_html_classes};
pub use tokenizer::{ClassListTokenizer, split_class_list};
