//! HTML site generation.
//!
//! Stage 2 of the build. Takes the scan [`Manifest`] and writes the final
//! static site.
//!
//! ## Generated Pages
//!
//! - **Content pages** (`/{route}/index.html`): basic or video shell around
//!   the rendered markdown
//! - **Component gallery** (`/components/index.html`), unless the content
//!   has its own page at that route
//! - **Coming soon** (`/screencasts/coming-soon/index.html`): the "next
//!   lesson" fallback target, written only when the content does not
//!   provide that route itself
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! ├── index.html
//! ├── style.css
//! ├── components/index.html
//! ├── getting-started/
//! │   └── installation/index.html
//! └── screencasts/
//!     ├── introduction/index.html
//!     └── coming-soon/index.html
//! ```
//!
//! Pages are rendered in parallel on the global rayon pool. Every page is an
//! independent pass over the shared manifest, so output order does not
//! depend on scheduling.
//!
//! Static builds render for a wide viewport: the sidebar slot is always
//! emitted when configured and `style.css` hides it below the breakpoint.

use crate::components::{self, EmptyStateProps};
use crate::config;
use crate::content::{Manifest, Page};
use crate::layout::{self, AdSlot, PageShell, Slot, Viewport};
use crate::markdown::{self, MarkdownError};
use crate::sequence::{self, FALLBACK_ROUTE, NavigationError};
use crate::showcase::{self, SHOWCASE_ROUTE};
use crate::stock::StockError;
use crate::types::{MetaError, PageMeta, VideoMeta};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use rayon::prelude::*;
use serde::Serialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Meta(#[from] MetaError),
    #[error("Navigation error in {path}: {source}")]
    Navigation {
        path: String,
        source: NavigationError,
    },
    #[error("Markdown error in {path}: {source}")]
    Markdown { path: String, source: MarkdownError },
    #[error("Component gallery error: {0}")]
    Showcase(#[from] StockError),
    #[error("No page at route {0}")]
    UnknownRoute(String),
}

const CSS_STATIC: &str = include_str!("../static/style.css");

/// Stylesheet file name, linked from every page.
pub const STYLESHEET: &str = "style.css";

/// One written page.
#[derive(Debug, Clone, Serialize)]
pub struct RenderedPage {
    pub href: String,
    pub title: String,
    /// Source file; `None` for generated pages.
    pub source_path: Option<String>,
    /// "Next lesson" target of a video page.
    pub next: Option<String>,
}

/// What [`generate`] wrote.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateSummary {
    /// Content pages in manifest order.
    pub pages: Vec<RenderedPage>,
    /// Pages produced without a source file (gallery, coming-soon).
    pub generated: Vec<RenderedPage>,
}

pub fn generate(manifest: &Manifest, output_dir: &Path) -> Result<GenerateSummary, GenerateError> {
    fs::create_dir_all(output_dir)?;

    let css = format!(
        "{}\n\n{}",
        config::generate_layout_css(&manifest.config.layout),
        CSS_STATIC
    );
    fs::write(output_dir.join(STYLESHEET), css)?;

    let pages = manifest
        .pages
        .par_iter()
        .map(|page| -> Result<RenderedPage, GenerateError> {
            let shell = compose_page(manifest, page, Viewport::Wide)?;
            let document = base_document(&page.front.title, &manifest.config.site_title, &shell);
            write_route(output_dir, &page.href, document)?;
            tracing::debug!(href = %page.href, source = %page.source_path, "rendered page");
            Ok(RenderedPage {
                href: page.href.clone(),
                title: page.front.title.clone(),
                source_path: Some(page.source_path.clone()),
                next: shell.next.as_ref().map(|n| n.href().to_string()),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut generated = Vec::new();

    if manifest.page(SHOWCASE_ROUTE).is_none() {
        let meta = showcase::page_meta();
        let shell = compose_showcase(manifest, Viewport::Wide)?;
        write_route(
            output_dir,
            SHOWCASE_ROUTE,
            base_document(&meta.title, &manifest.config.site_title, &shell),
        )?;
        generated.push(RenderedPage {
            href: SHOWCASE_ROUTE.to_string(),
            title: meta.title,
            source_path: None,
            next: None,
        });
    } else {
        tracing::debug!(href = SHOWCASE_ROUTE, "content provides the gallery route");
    }

    if manifest.page(FALLBACK_ROUTE).is_none() {
        let meta = coming_soon_meta();
        let shell = compose_coming_soon(manifest, Viewport::Wide);
        write_route(
            output_dir,
            FALLBACK_ROUTE,
            base_document(&meta.title, &manifest.config.site_title, &shell),
        )?;
        generated.push(RenderedPage {
            href: FALLBACK_ROUTE.to_string(),
            title: meta.title,
            source_path: None,
            next: None,
        });
    }

    tracing::info!(
        pages = pages.len(),
        generated = generated.len(),
        output = %output_dir.display(),
        "site generated"
    );
    Ok(GenerateSummary { pages, generated })
}

/// Render a single route to a full HTML document.
///
/// Resolves content pages, the component gallery, and the built-in
/// coming-soon page. Trailing slashes are ignored.
pub fn render_route(
    manifest: &Manifest,
    href: &str,
    viewport: Viewport,
) -> Result<String, GenerateError> {
    let href = normalize_route(href);
    let site_title = &manifest.config.site_title;

    let document = if let Some(page) = manifest.page(&href) {
        let shell = compose_page(manifest, page, viewport)?;
        base_document(&page.front.title, site_title, &shell)
    } else if href == SHOWCASE_ROUTE {
        let shell = compose_showcase(manifest, viewport)?;
        base_document(&showcase::page_meta().title, site_title, &shell)
    } else if href == FALLBACK_ROUTE {
        let shell = compose_coming_soon(manifest, viewport);
        base_document(&coming_soon_meta().title, site_title, &shell)
    } else {
        return Err(GenerateError::UnknownRoute(href));
    };
    Ok(document.into_string())
}

fn normalize_route(href: &str) -> String {
    let trimmed = href.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    }
}

fn write_route(output_dir: &Path, href: &str, document: Markup) -> std::io::Result<()> {
    let dir = output_dir.join(href.trim_start_matches('/'));
    fs::create_dir_all(&dir)?;
    fs::write(dir.join("index.html"), document.into_string())
}

// ============================================================================
// Page composition
// ============================================================================

/// Compose a content page: video shell for `layout: video`, basic otherwise.
pub fn compose_page(
    manifest: &Manifest,
    page: &Page,
    viewport: Viewport,
) -> Result<PageShell, GenerateError> {
    let config = &manifest.config;
    let ad = AdSlot::from_config(&config.ad);
    let sidebar = ad.as_ref().map(|slot| slot as &dyn Slot);

    let body = markdown::render(&page.body).map_err(|source| GenerateError::Markdown {
        path: page.source_path.clone(),
        source,
    })?;
    let content = PreEscaped(body);

    if page.is_video() {
        let video = VideoMeta::from_front_matter(&page.front, &page.source_path)?;
        let sequence = manifest
            .section(&page.section)
            .map(|s| s.sequence.as_slice())
            .unwrap_or_default();
        let navigation_error = |source: NavigationError| GenerateError::Navigation {
            path: page.source_path.clone(),
            source,
        };
        let current = sequence::position_of(sequence, &page.href).map_err(navigation_error)?;
        layout::compose_video(&video, content, sidebar, viewport, sequence, current)
            .map_err(navigation_error)
    } else {
        let meta = PageMeta::from_front_matter(
            &page.front,
            &config.header.badge_key,
            &page.source_path,
        )?;
        Ok(layout::compose(&meta, content, sidebar, viewport))
    }
}

fn compose_showcase(manifest: &Manifest, viewport: Viewport) -> Result<PageShell, GenerateError> {
    let ad = AdSlot::from_config(&manifest.config.ad);
    Ok(layout::compose(
        &showcase::page_meta(),
        showcase::render()?,
        ad.as_ref().map(|slot| slot as &dyn Slot),
        viewport,
    ))
}

fn coming_soon_meta() -> PageMeta {
    PageMeta {
        description: Some("This lesson is still being recorded.".to_string()),
        ..PageMeta::new("Coming soon")
    }
}

fn compose_coming_soon(manifest: &Manifest, viewport: Viewport) -> PageShell {
    let ad = AdSlot::from_config(&manifest.config.ad);
    let content = components::empty_state(&EmptyStateProps {
        title: "New screencasts are on the way".to_string(),
        content: "Check back soon for the next lesson.".to_string(),
        ..EmptyStateProps::default()
    });
    layout::compose(
        &coming_soon_meta(),
        content,
        ad.as_ref().map(|slot| slot as &dyn Slot),
        viewport,
    )
}

// ============================================================================
// Document
// ============================================================================

fn document_title(title: &str, site_title: &str) -> String {
    if title == site_title {
        title.to_string()
    } else {
        format!("{title} | {site_title}")
    }
}

/// Renders the base HTML document around a page shell.
fn base_document(title: &str, site_title: &str, shell: &PageShell) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (document_title(title, site_title)) }
                link rel="stylesheet" href={ "/" (STYLESHEET) };
            }
            body {
                (shell.render())
            }
        }
    }
}
