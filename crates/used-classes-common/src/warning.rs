//! Diagnostics with colored terminal output.
//!
//! Warnings are deduplicated so the same unbalanced class attribute repeated
//! across a template only gets reported once per run.

use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

use owo_colors::OwoColorize;

/// Prefix shown in front of every diagnostic line.
const TOOL: &str = "used-css-classes";

/// Global set of warnings we've already printed (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// Format the deduplication key and display text for a warning.
fn warning_key(component: &str, message: &str) -> String {
    format!("[{component}] {message}")
}

/// Record a warning, returning `true` the first time a given message is seen.
fn record_warning(component: &str, message: &str) -> bool {
    WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .get_or_insert_with(HashSet::new)
        .insert(warning_key(component, message))
}

/// Warn about questionable input (prints once per unique message)
///
/// # Example
/// ```ignore
/// warn_once("templates/base.html", "unbalanced braces in class=\"btn {{ size\"");
/// ```
pub fn warn_once(component: &str, message: &str) {
    if record_warning(component, message) {
        eprintln!("{}", format!("[{TOOL} {component}] ⚠ {message}").yellow());
    }
}

/// Print an informational line. Notes are never deduplicated.
pub fn note(component: &str, message: &str) {
    eprintln!("{}", format!("[{TOOL} {component}] {message}").dimmed());
}

/// Clear all recorded warnings (call before starting a new run)
pub fn clear_warnings() {
    let mut guard = WARNED.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(set) = guard.as_mut() {
        set.clear();
    }
}
