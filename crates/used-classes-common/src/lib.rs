//! Common utilities for used-css-classes.
//!
//! This crate provides shared infrastructure for the extractor and the CLI:
//! - **Warning System** - colored, deduplicated diagnostics on stderr

pub mod warning;
