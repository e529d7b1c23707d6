//! # Shopper Docs
//!
//! Documentation and component-preview site generator for Laravel Shopper.
//! Markdown pages with YAML front matter become static HTML pages; numbered
//! pages inside a directory form a lesson sequence, and video pages link to
//! the next published lesson.
//!
//! # Architecture: Two-Stage Pipeline
//!
//! ```text
//! 1. Scan      content/  →  Manifest   (markdown + front matter → typed pages, sequences)
//! 2. Generate  Manifest  →  dist/      (final HTML site)
//! ```
//!
//! The scan manifest is plain serializable data; `shopper-docs check --json`
//! prints it for inspection.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`tokens`] | Severity and size variants and their style tokens |
//! | [`stock`] | Low/ok stock classification against a fixed threshold |
//! | [`sequence`] | "Next lesson" resolution over an ordered page sequence |
//! | [`layout`] | Page shells: header, content, sidebar slot, video player |
//! | [`components`] | Preview components rendered with Maud |
//! | [`markdown`] | Markdown rendering with inline ```` ```preview ```` components |
//! | [`showcase`] | The `/components/` gallery |
//! | [`content`] | Stage 1: walks the content directory into a manifest |
//! | [`generate`] | Stage 2: renders the manifest into the output directory |
//! | [`config`] | `config.toml` loading, validation, and layout CSS |
//! | [`types`] | Front matter and page metadata types |
//! | [`naming`] | `NNN-name` convention parser |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Variants Are Closed Enums
//!
//! Severity and size are enums with exhaustive token tables. Typed callers
//! cannot hit an unknown variant; only string keys coming from markdown go
//! through `FromStr` and can fail, and they fail the build.
//!
//! ## The Sidebar Is Structural
//!
//! On a narrow viewport the sidebar column is not emitted and its slot is
//! never rendered. Static builds target a wide viewport and let the
//! stylesheet hide the column below `layout.sidebar_breakpoint`.
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/): templates are
//! checked at compile time and all interpolation is escaped.

pub mod components;
pub mod config;
pub mod content;
pub mod generate;
pub mod layout;
pub mod markdown;
pub mod naming;
pub mod output;
pub mod sequence;
pub mod showcase;
pub mod stock;
pub mod tokens;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
