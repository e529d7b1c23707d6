//! Markdown rendering with inline component previews.
//!
//! Page bodies are CommonMark rendered through pulldown-cmark. A fenced
//! block tagged `preview` is not shown as code; its body is TOML describing
//! one component and is replaced by the rendered component:
//!
//! ````markdown
//! ```preview
//! component = "alert"
//! color = "danger"
//! title = "Payment failed"
//! message = "The card was declined."
//! ```
//! ````
//!
//! Variant keys (`color`, `size`) are plain strings resolved through the
//! token table, so a typo fails the build with an unknown-variant error
//! instead of rendering an unstyled component. Prop keys are camelCase
//! (`showName`, `buttonText`, `imageSrc`, `isRequired`). `centered` and `class` are
//! accepted on every block and configure the surrounding preview frame.

use crate::components::{self, ButtonVariant};
use crate::stock::StockError;
use crate::tokens::{self, Severity, Size, TokenError};
use maud::{Markup, PreEscaped, html};
use pulldown_cmark::{CodeBlockKind, CowStr, Event, Options, Parser, Tag, TagEnd, html as md_html};
use serde::Deserialize;
use thiserror::Error;

const PREVIEW_LANG: &str = "preview";

#[derive(Error, Debug)]
pub enum MarkdownError {
    #[error("Invalid preview block: {0}")]
    InvalidBlock(#[from] toml::de::Error),
    #[error(transparent)]
    Token(#[from] TokenError),
    #[error(transparent)]
    Stock(#[from] StockError),
}

fn default_true() -> bool {
    true
}

/// Props of a `preview` block, tagged by `component`.
#[derive(Debug, Clone, Deserialize)]
#[serde(
    tag = "component",
    rename_all = "kebab-case",
    rename_all_fields = "camelCase",
    deny_unknown_fields
)]
pub enum PreviewBlock {
    Alert {
        message: String,
        color: Option<String>,
        title: Option<String>,
        #[serde(default = "default_true")]
        icon: bool,
    },
    Card {
        title: Option<String>,
        description: Option<String>,
        #[serde(default)]
        body: String,
    },
    Heading { title: String },
    SectionHeading {
        title: String,
        description: Option<String>,
    },
    EmptyState {
        title: String,
        content: String,
        button_text: Option<String>,
        image_src: Option<String>,
    },
    EmptyCard {
        heading: String,
        description: Option<String>,
        #[serde(default = "default_true")]
        icon: bool,
        action: Option<String>,
    },
    Button {
        label: String,
        #[serde(default)]
        variant: ButtonVariant,
        size: Option<String>,
    },
    StockBadge { stock: i64 },
    Loader { size: Option<String> },
    Label {
        value: String,
        #[serde(default)]
        is_required: bool,
    },
    Avatar {
        name: String,
        #[serde(default = "default_true")]
        show_name: bool,
        src: Option<String>,
    },
}

/// Preview frame settings shared by every block.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Frame {
    #[serde(default = "default_true")]
    pub centered: bool,
    #[serde(default)]
    pub class: String,
}

const FRAME_KEYS: [&str; 2] = ["centered", "class"];

/// A parsed `preview` block: the component and the frame around it.
#[derive(Debug, Clone)]
pub struct Preview {
    pub block: PreviewBlock,
    pub frame: Frame,
}

impl Preview {
    /// Parse the TOML body of a `preview` block.
    pub fn parse(source: &str) -> Result<Self, MarkdownError> {
        let mut table: toml::Table = toml::from_str(source)?;
        let mut frame_table = toml::Table::new();
        for key in FRAME_KEYS {
            if let Some(value) = table.remove(key) {
                frame_table.insert(key.to_string(), value);
            }
        }
        Ok(Self {
            block: toml::Value::Table(table).try_into()?,
            frame: toml::Value::Table(frame_table).try_into()?,
        })
    }

    pub fn render(&self) -> Result<Markup, MarkdownError> {
        Ok(components::preview(
            &components::PreviewProps {
                class: self.frame.class.clone(),
                centered: self.frame.centered,
            },
            self.block.render()?,
        ))
    }
}

impl PreviewBlock {
    /// Render the bare component.
    pub fn render(&self) -> Result<Markup, MarkdownError> {
        let component = match self {
            PreviewBlock::Alert {
                message,
                color,
                title,
                icon,
                ..
            } => components::alert(&components::AlertProps {
                message: message.clone(),
                color: tokens::parse_or_default::<Severity>(color.as_deref())?,
                title: title.clone(),
                icon: *icon,
            }),
            PreviewBlock::Card {
                title,
                description,
                body,
                ..
            } => components::card(
                &components::CardProps {
                    title: title.clone(),
                    description: description.clone(),
                    class: String::new(),
                },
                PreEscaped(render_plain(body)),
            ),
            PreviewBlock::Heading { title, .. } => components::heading(title, None),
            PreviewBlock::SectionHeading {
                title, description, ..
            } => components::section_heading(title, description.as_deref()),
            PreviewBlock::EmptyState {
                title,
                content,
                button_text,
                image_src,
                ..
            } => components::empty_state(&components::EmptyStateProps {
                title: title.clone(),
                content: content.clone(),
                button_text: button_text.clone(),
                image_src: image_src.clone(),
            }),
            PreviewBlock::EmptyCard {
                heading,
                description,
                icon,
                action,
                ..
            } => components::empty_card(&components::EmptyCardProps {
                heading: heading.clone(),
                description: description.clone(),
                icon: *icon,
                action: action.as_ref().map(|text| {
                    components::button(&components::ButtonProps::default(), html! { (text) })
                }),
            }),
            PreviewBlock::Button {
                label,
                variant,
                size,
                ..
            } => components::button(
                &components::ButtonProps {
                    variant: *variant,
                    size: tokens::parse_or_default::<Size>(size.as_deref())?,
                },
                html! { (label) },
            ),
            PreviewBlock::StockBadge { stock, .. } => components::stock_badge(*stock)?,
            PreviewBlock::Loader { size, .. } => {
                components::loader(tokens::parse_or_default::<Size>(size.as_deref())?)
            }
            PreviewBlock::Label {
                value, is_required, ..
            } => components::label(value, *is_required),
            PreviewBlock::Avatar {
                name,
                show_name,
                src,
                ..
            } => components::user_avatar(&components::AvatarProps {
                name: name.clone(),
                show_name: *show_name,
                src: src
                    .clone()
                    .unwrap_or_else(|| components::DEFAULT_AVATAR_SRC.to_string()),
            }),
        };
        Ok(component)
    }
}

fn options() -> Options {
    Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_HEADING_ATTRIBUTES
}

/// Markdown to HTML without preview handling (card bodies).
fn render_plain(source: &str) -> String {
    let mut out = String::new();
    md_html::push_html(&mut out, Parser::new_ext(source, options()));
    out
}

/// Render a page body to HTML, replacing `preview` blocks with components.
pub fn render(source: &str) -> Result<String, MarkdownError> {
    let mut events: Vec<Event<'_>> = Vec::new();
    let mut preview_source: Option<String> = None;

    for event in Parser::new_ext(source, options()) {
        if let Some(buf) = preview_source.as_mut() {
            match event {
                Event::Text(text) => buf.push_str(&text),
                Event::End(TagEnd::CodeBlock) => {
                    let markup = Preview::parse(buf)?.render()?;
                    events.push(Event::Html(CowStr::from(markup.into_string())));
                    preview_source = None;
                }
                _ => {}
            }
            continue;
        }
        match event {
            Event::Start(Tag::CodeBlock(CodeBlockKind::Fenced(ref lang)))
                if lang.trim() == PREVIEW_LANG =>
            {
                preview_source = Some(String::new());
            }
            event => events.push(event),
        }
    }

    let mut out = String::new();
    md_html::push_html(&mut out, events.into_iter());
    Ok(out)
}
