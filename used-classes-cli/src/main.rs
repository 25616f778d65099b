//! used-css-classes CLI
//!
//! Lists the CSS classes referenced by `class` attributes in HTML files and
//! templates, one per line, sorted. Useful for spotting dead styles.

use std::collections::BTreeSet;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use used_classes_common::warning::{clear_warnings, note, warn_once};
use used_classes_html::{ClassUsage, scan_html_file};

/// List the CSS classes used by HTML files and templates
#[derive(Parser, Debug)]
#[command(name = "used-css-classes")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Classes used by a single page
    used-css-classes index.html

    # Classes used across a set of templates
    used-css-classes templates/*.html

    # Also report unbalanced template braces and repaired markup on stderr
    used-css-classes -v templates/*.html

    # A file whose name starts with a dash goes after `--`
    used-css-classes -- -v
"#)]
struct Cli {
    /// HTML files or templates to scan
    #[arg(value_name = "FILE", required = true)]
    files: Vec<PathBuf>,

    /// Print per-file diagnostics to stderr
    #[arg(short, long)]
    verbose: bool,
}

/// Class usage of one input file.
struct FileReport {
    path: PathBuf,
    usage: ClassUsage,
}

/// Scan every file in order, stopping at the first one that fails.
fn scan_files(files: &[PathBuf]) -> Result<Vec<FileReport>> {
    files
        .iter()
        .map(|path| {
            let usage = scan_html_file(path)?;
            Ok(FileReport {
                path: path.clone(),
                usage,
            })
        })
        .collect()
}

/// Union of the classes used by all files, in sorted order.
fn merge_classes(reports: &[FileReport]) -> BTreeSet<&str> {
    reports
        .iter()
        .flat_map(|report| report.usage.classes.iter().map(String::as_str))
        .collect()
}

fn write_classes<'a>(
    out: &mut impl Write,
    classes: impl IntoIterator<Item = &'a str>,
) -> io::Result<()> {
    for class in classes {
        writeln!(out, "{class}")?;
    }
    out.flush()
}

fn print_diagnostics(reports: &[FileReport]) {
    clear_warnings();
    for FileReport { path, usage } in reports {
        let component = path.display().to_string();
        note(
            &component,
            &format!(
                "{} elements with class attributes, {} distinct classes, {} markup errors repaired ({})",
                usage.elements,
                usage.classes.len(),
                usage.parse_errors,
                usage.encoding.map_or("in memory", |encoding| encoding.name())
            ),
        );
        for value in &usage.unbalanced {
            warn_once(
                &component,
                &format!("unbalanced braces in class=\"{value}\""),
            );
        }
    }
}

/// Scan the files named on the command line and write the merged class list.
///
/// Nothing is written unless every file was scanned successfully.
fn run(cli: &Cli, out: &mut impl Write) -> Result<()> {
    let reports = scan_files(&cli.files)?;
    write_classes(out, merge_classes(&reports))?;

    if cli.verbose {
        print_diagnostics(&reports);
    }

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut out = BufWriter::new(io::stdout().lock());
    run(&cli, &mut out)
}
