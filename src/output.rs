//! CLI output formatting for both pipeline stages.
//!
//! Output is information-first: every entity leads with its positional
//! index and title, with paths as indented context lines.
//!
//! ## Scan
//!
//! ```text
//! Pages
//!     001 Installation → /getting-started/installation
//!         Source: 010-getting-started/010-installation.md
//!     003 Introduction → /screencasts/introduction (video)
//!         Source: 020-screencasts/010-introduction.md
//!
//! Sequences
//!     screencasts (4 lessons)
//!         010 Introduction → /screencasts/introduction
//!         030 Orders → /screencasts/orders (unpublished)
//!
//! Config
//!     config.toml
//! ```
//!
//! ## Generate
//!
//! ```text
//! 001 Installation → getting-started/installation/index.html
//! 003 Introduction → screencasts/introduction/index.html
//!     Next: /screencasts/products
//!
//! Built-in
//!     Components → components/index.html
//!
//! Generated 7 pages, 2 built-in
//! ```
//!
//! Each stage has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout.

use crate::content::Manifest;
use crate::generate::{GenerateSummary, RenderedPage};
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Output file of a route, relative to the output root.
fn route_file(href: &str) -> String {
    let dir = href.trim_matches('/');
    if dir.is_empty() {
        "index.html".to_string()
    } else {
        format!("{dir}/index.html")
    }
}

fn pluralize(count: usize, one: &str, many: &str) -> String {
    if count == 1 {
        format!("{count} {one}")
    } else {
        format!("{count} {many}")
    }
}

// ============================================================================
// Stage 1: Scan output
// ============================================================================

/// Format scan stage output: pages, sequences and config.
pub fn format_scan_output(manifest: &Manifest, source_root: &Path) -> Vec<String> {
    let mut lines = vec!["Pages".to_string()];
    for (i, page) in manifest.pages.iter().enumerate() {
        let marker = if page.is_video() { " (video)" } else { "" };
        lines.push(format!(
            "{}{} {} → {}{}",
            indent(1),
            format_index(i + 1),
            page.front.title,
            page.href,
            marker
        ));
        lines.push(format!("{}Source: {}", indent(2), page.source_path));
    }

    let sections: Vec<_> = manifest
        .sections
        .iter()
        .filter(|s| !s.sequence.is_empty())
        .collect();
    if !sections.is_empty() {
        lines.push(String::new());
        lines.push("Sequences".to_string());
        for section in sections {
            let name = if section.path.is_empty() {
                "/"
            } else {
                section.path.as_str()
            };
            lines.push(format!(
                "{}{} ({})",
                indent(1),
                name,
                pluralize(section.sequence.len(), "lesson", "lessons")
            ));
            for descriptor in &section.sequence {
                let marker = if descriptor.published {
                    ""
                } else {
                    " (unpublished)"
                };
                lines.push(format!(
                    "{}{} {} → {}{}",
                    indent(2),
                    format_index(descriptor.order as usize),
                    descriptor.title,
                    descriptor.href,
                    marker
                ));
            }
        }
    }

    lines.push(String::new());
    lines.push("Config".to_string());
    if source_root.join("config.toml").exists() {
        lines.push(format!("{}config.toml", indent(1)));
    } else {
        lines.push(format!("{}(stock defaults)", indent(1)));
    }

    lines
}

/// Print scan output to stdout.
pub fn print_scan_output(manifest: &Manifest, source_root: &Path) {
    for line in format_scan_output(manifest, source_root) {
        println!("{}", line);
    }
}

// ============================================================================
// Stage 2: Generate output
// ============================================================================

fn page_line(index: Option<usize>, page: &RenderedPage) -> String {
    match index {
        Some(i) => format!(
            "{} {} → {}",
            format_index(i),
            page.title,
            route_file(&page.href)
        ),
        None => format!("{}{} → {}", indent(1), page.title, route_file(&page.href)),
    }
}

/// Format generate stage output: every written page with its next-lesson
/// target, then the built-in pages and a count line.
pub fn format_generate_output(summary: &GenerateSummary) -> Vec<String> {
    let mut lines = Vec::new();
    for (i, page) in summary.pages.iter().enumerate() {
        lines.push(page_line(Some(i + 1), page));
        if let Some(next) = &page.next {
            lines.push(format!("{}Next: {}", indent(1), next));
        }
    }

    if !summary.generated.is_empty() {
        lines.push(String::new());
        lines.push("Built-in".to_string());
        for page in &summary.generated {
            lines.push(page_line(None, page));
        }
    }

    lines.push(String::new());
    lines.push(format!(
        "Generated {}, {} built-in",
        pluralize(summary.pages.len(), "page", "pages"),
        summary.generated.len()
    ));
    lines
}

/// Print generate output to stdout.
pub fn print_generate_output(summary: &GenerateSummary) {
    for line in format_generate_output(summary) {
        println!("{}", line);
    }
}
