//! Page shells: header, content column, optional sidebar, and the video
//! player block.
//!
//! ## Structure
//!
//! ```text
//! div.sh-page
//! ├── header.sh-page-header      title, description, badge, divider
//! ├── div.sh-video               (video pages) player, links, next lesson
//! └── div.sh-layout
//!     ├── div.sh-layout-primary  page content
//!     └── aside.sh-layout-secondary   sidebar slot (wide viewports only)
//! ```
//!
//! The secondary column is structural: on a narrow viewport it is not
//! produced and the slot is never rendered, so collaborators like the ad
//! script are not instantiated at all. Static builds render for a wide
//! viewport and the stylesheet hides the column below the same breakpoint.

use crate::config::AdConfig;
use crate::sequence::{self, NavigationError, NavigationTarget};
use crate::types::{PageDescriptor, PageMeta, VideoMeta};
use maud::{Markup, html};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Fixed player query: no autoplay, no title/byline/portrait chrome.
const EMBED_URL_QUERY: &str = "title=0&byline=0&portrait=0&speed=1&app_id=122963";

/// Query value characters left as is: A-Z a-z 0-9 - . _ ~
const QUERY_VALUE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

fn encode_query_value(value: &str) -> String {
    utf8_percent_encode(value.trim(), QUERY_VALUE_SET).to_string()
}

pub const NEXT_LESSON_LABEL: &str = "Next lesson";
pub const NEXT_LESSON_FALLBACK_LABEL: &str = "Next lesson (coming soon)";

const ARROW_PATH: &str = "M18.59 13H3a1 1 0 0 1 0-2h15.59l-5.3-5.3a1 1 0 1 1 1.42-1.4l7 7a1 1 0 0 1 0 1.4l-7 7a1 1 0 0 1-1.42-1.4l5.3-5.3z";

/// Player iframe source for a Vimeo video id.
pub fn embed_url(vimeo_id: &str) -> String {
    format!("https://player.vimeo.com/video/{vimeo_id}?{EMBED_URL_QUERY}")
}

/// Viewport class the page is rendered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Viewport {
    Narrow,
    #[default]
    Wide,
}

impl Viewport {
    pub fn from_width(width: u32, breakpoint: u32) -> Self {
        if width < breakpoint {
            Viewport::Narrow
        } else {
            Viewport::Wide
        }
    }
}

/// Content placed in the secondary column.
pub trait Slot: Sync {
    fn render(&self) -> Markup;
}

/// Sidebar ad script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdSlot {
    script_src: String,
}

impl AdSlot {
    /// `None` when the ad config has no serve id.
    pub fn from_config(config: &AdConfig) -> Option<Self> {
        if !config.is_enabled() {
            return None;
        }
        Some(Self {
            script_src: format!(
                "{}?serve={}&placement={}",
                config.script_url.trim(),
                encode_query_value(&config.serve),
                encode_query_value(&config.placement)
            ),
        })
    }
}

impl Slot for AdSlot {
    fn render(&self) -> Markup {
        html! {
            div.sh-ad {
                script async type="text/javascript" src=(self.script_src) id="_carbon_ads_js" {}
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellVariant {
    Basic,
    Video,
}

impl ShellVariant {
    pub fn class(self) -> &'static str {
        match self {
            ShellVariant::Basic => "sh-page-basic",
            ShellVariant::Video => "sh-page-video",
        }
    }
}

/// A composed page, ready to render into a document body.
#[derive(Debug, Clone)]
pub struct PageShell {
    pub variant: ShellVariant,
    pub container_id: Option<String>,
    pub header: Markup,
    /// Player block; video pages only.
    pub player: Option<Markup>,
    pub primary: Markup,
    /// `None` when there is no slot or the viewport is narrow.
    pub secondary: Option<Markup>,
    /// Resolved "next lesson" target; video pages only.
    pub next: Option<NavigationTarget>,
}

impl PageShell {
    pub fn has_secondary(&self) -> bool {
        self.secondary.is_some()
    }

    pub fn render(&self) -> Markup {
        html! {
            div class={ "sh-page " (self.variant.class()) } id=[self.container_id.as_deref()] {
                (self.header)
                @if let Some(player) = &self.player {
                    (player)
                }
                div.sh-layout {
                    div.sh-layout-primary.sh-markdown {
                        (self.primary)
                    }
                    @if let Some(secondary) = &self.secondary {
                        aside.sh-layout-secondary {
                            div.sh-layout-secondary-inner { (secondary) }
                        }
                    }
                }
            }
        }
    }
}

/// Renders the page header. `meta.header_separator` controls the divider.
pub fn page_header(meta: &PageMeta) -> Markup {
    html! {
        header.sh-page-header {
            @if let Some(badge) = &meta.badge {
                div.sh-page-badge {
                    span.sh-page-badge-key { (badge.key) }
                    span.sh-page-badge-value { (badge.value) }
                }
            }
            h1.sh-page-title { (meta.title) }
            @if let Some(description) = &meta.description {
                p.sh-page-description { (description) }
            }
            @if meta.header_separator {
                hr.sh-page-divider;
            }
        }
    }
}

fn secondary_column(sidebar: Option<&dyn Slot>, viewport: Viewport) -> Option<Markup> {
    match viewport {
        Viewport::Narrow => None,
        Viewport::Wide => sidebar.map(|slot| slot.render()),
    }
}

/// Compose a basic page shell.
pub fn compose(
    meta: &PageMeta,
    content: Markup,
    sidebar: Option<&dyn Slot>,
    viewport: Viewport,
) -> PageShell {
    PageShell {
        variant: ShellVariant::Basic,
        container_id: meta.container_id.clone(),
        header: page_header(meta),
        player: None,
        primary: content,
        secondary: secondary_column(sidebar, viewport),
        next: None,
    }
}

/// Compose a video page shell. `current` is this page's index in `sequence`.
pub fn compose_video(
    video: &VideoMeta,
    content: Markup,
    sidebar: Option<&dyn Slot>,
    viewport: Viewport,
    sequence: &[PageDescriptor],
    current: usize,
) -> Result<PageShell, NavigationError> {
    let next = sequence::next(sequence, current)?;
    if next.is_fallback() {
        tracing::debug!(video = %video.title, "next lesson falls back to coming-soon");
    }

    let header_meta = PageMeta {
        description: video.description.clone(),
        ..PageMeta::new(video.title.clone())
    };

    Ok(PageShell {
        variant: ShellVariant::Video,
        container_id: None,
        header: page_header(&header_meta),
        player: Some(video_player(video, &next)),
        primary: content,
        secondary: secondary_column(sidebar, viewport),
        next: Some(next),
    })
}

fn video_player(video: &VideoMeta, next: &NavigationTarget) -> Markup {
    let label = if next.is_fallback() {
        NEXT_LESSON_FALLBACK_LABEL
    } else {
        NEXT_LESSON_LABEL
    };
    html! {
        div.sh-video {
            div.sh-video-frame {
                iframe.sh-video-iframe
                    title=(video.title)
                    src=(embed_url(&video.vimeo_id))
                    frameborder="0"
                    allow="autoplay; fullscreen"
                    allowfullscreen {}
            }
            div.sh-video-actions {
                div.sh-video-links {
                    a.sh-video-link href=[video.download_hd.as_deref()] { "Download HD" }
                    " "
                    a.sh-video-link href=[video.download_sd.as_deref()] { "Download SD" }
                    " "
                    a.sh-video-link href=[video.source_code.as_deref()] { "Source code" }
                }
                a.sh-next-lesson.sh-next-lesson-fallback[next.is_fallback()] href=(next.href()) {
                    span { (label) }
                    svg.sh-next-lesson-icon viewBox="0 0 24 24" aria-hidden="true" {
                        path d=(ARROW_PATH) {}
                    }
                }
            }
        }
    }
}
