use std::collections::HashSet;
use std::fs;
use std::path::Path;

use encoding_rs::Encoding;
use scraper::Html;

use crate::encoding::decode_html;
use crate::error::ExtractError;
use crate::tokenizer::ClassListTokenizer;

/// Class usage found in one HTML document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassUsage {
    /// Distinct class names referenced by `class` attributes.
    pub classes: HashSet<String>,
    /// Number of elements carrying a `class` attribute, empty ones included.
    pub elements: usize,
    /// Class attribute values whose braces do not balance, in document order.
    pub unbalanced: Vec<String>,
    /// Number of markup errors the HTML parser recovered from.
    pub parse_errors: usize,
    /// Encoding the file was decoded with; `None` for in-memory strings.
    pub encoding: Option<&'static Encoding>,
}

impl ClassUsage {
    /// Tokenize one `class` attribute value into this usage.
    fn record(&mut self, class_attr: &str) {
        let mut tokenizer = ClassListTokenizer::new(class_attr);
        tokenizer.run();
        if !tokenizer.is_balanced() {
            self.unbalanced.push(class_attr.to_owned());
        }
        self.elements += 1;
        self.classes.extend(tokenizer.into_tokens());
    }
}

/// Collect the classes referenced by `class` attributes in an HTML string.
///
/// The markup goes through the HTML5 tree-construction algorithm, so broken
/// markup is repaired the way a browser would before elements are visited.
/// Every element in the tree is considered, including `<svg>` and `<math>`
/// elements and the contents of `<template>`.
#[must_use]
pub fn scan_html_classes(html: &str) -> ClassUsage {
    let document = Html::parse_document(html);
    let mut usage = ClassUsage {
        parse_errors: document.errors.len(),
        ..ClassUsage::default()
    };

    for node in document.tree.root().descendants() {
        let Some(element) = node.value().as_element() else {
            continue;
        };
        let Some(class_attr) = element.attr("class") else {
            continue;
        };
        usage.record(class_attr);
    }

    usage
}

/// Read an HTML file or template and collect its class usage.
///
/// The bytes are decoded with [`decode_html`], so files in any encoding a
/// browser would accept are scanned rather than rejected.
///
/// # Errors
///
/// Returns [`ExtractError::Io`] if the file cannot be read.
pub fn scan_html_file(path: impl AsRef<Path>) -> Result<ClassUsage, ExtractError> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| ExtractError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let (html, encoding) = decode_html(&bytes);
    let mut usage = scan_html_classes(&html);
    usage.encoding = Some(encoding);
    Ok(usage)
}

/// Return the CSS classes referenced by `class` attributes on tags in an HTML
/// file or a template for an HTML file.
///
/// # Errors
///
/// Fails under the same conditions as [`scan_html_file`].
pub fn used_html_classes(path: impl AsRef<Path>) -> Result<HashSet<String>, ExtractError> {
    scan_html_file(path).map(|usage| usage.classes)
}
