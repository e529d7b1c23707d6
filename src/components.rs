//! Preview components.
//!
//! Small stateless maud renderers used by the component showcase and by
//! ```` ```preview ```` blocks in markdown. Each takes a props struct whose
//! `Default` documents the optional props; variant styling comes from
//! [`crate::tokens`] and stock state from [`crate::stock`].
//!
//! Every class emitted here starts with `sh-` so the stylesheet can be
//! dropped into a host page without colliding with its global styles.

use crate::stock::{self, StockError};
use crate::tokens::{Severity, Size};
use maud::{Markup, html};
use serde::Deserialize;

/// Avatar image used when no `src` is given.
pub const DEFAULT_AVATAR_SRC: &str =
    "https://ui-avatars.com/api/?name=John+Doe&background=3b82f6&color=fff";

/// Namespace prefix for every class this crate emits.
pub const CLASS_PREFIX: &str = "sh-";

const BOX_ICON_PATH: &str =
    "M20 7l-8-4-8 4m16 0l-8 4m8-4v10l-8 4m0-10L4 7m8 4v10M4 7v10l8 4";

fn with_extra(base: &str, extra: &str) -> String {
    let extra = extra.trim();
    if extra.is_empty() {
        base.to_string()
    } else {
        format!("{base} {extra}")
    }
}

// ============================================================================
// Frames
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewProps {
    /// Extra classes appended to the frame.
    pub class: String,
    /// Center the content. Defaults to `true`.
    pub centered: bool,
}

impl Default for PreviewProps {
    fn default() -> Self {
        Self {
            class: String::new(),
            centered: true,
        }
    }
}

/// Bordered frame around a rendered component.
pub fn preview(props: &PreviewProps, children: Markup) -> Markup {
    html! {
        div class=(with_extra("sh-preview", &props.class)) {
            div.sh-preview-content.sh-preview-centered[props.centered] {
                (children)
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardProps {
    pub title: Option<String>,
    /// Only shown when `title` is set.
    pub description: Option<String>,
    pub class: String,
}

pub fn card(props: &CardProps, children: Markup) -> Markup {
    html! {
        div class=(with_extra("sh-card-outer", &props.class)) {
            @if let Some(title) = &props.title {
                div.sh-card-header {
                    span.sh-card-title { (title) }
                    @if let Some(description) = &props.description {
                        span.sh-card-description { (description) }
                    }
                }
            }
            div.sh-card-inner {
                (children)
            }
        }
    }
}

// ============================================================================
// Feedback
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertProps {
    pub message: String,
    pub color: Severity,
    pub title: Option<String>,
    /// Show the severity icon. Defaults to `true`.
    pub icon: bool,
}

impl Default for AlertProps {
    fn default() -> Self {
        Self {
            message: String::new(),
            color: Severity::default(),
            title: None,
            icon: true,
        }
    }
}

pub fn alert(props: &AlertProps) -> Markup {
    let tokens = props.color.tokens();
    let message_margin = if props.title.is_some() { 8 } else { 0 };
    html! {
        div class={ "sh-alert sh-alert-" (props.color) } role="alert" {
            div.sh-alert-body {
                @if props.icon {
                    div.sh-alert-icon {
                        svg width="20" height="20" fill=(tokens.icon_color) viewBox="0 0 20 20" aria-hidden="true" {
                            path fill-rule="evenodd" clip-rule="evenodd" d=(tokens.icon_path) {}
                        }
                    }
                }
                div {
                    @if let Some(title) = &props.title {
                        span.sh-alert-title style={ "color: " (tokens.title_color) } { (title) }
                    }
                    span.sh-alert-message
                        style={ "margin-top: " (message_margin) "px; color: " (tokens.icon_color) } {
                        (props.message)
                    }
                }
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmptyStateProps {
    pub title: String,
    pub content: String,
    pub button_text: Option<String>,
    /// Illustration; a box icon is drawn when absent.
    pub image_src: Option<String>,
}

pub fn empty_state(props: &EmptyStateProps) -> Markup {
    html! {
        div.sh-empty-state {
            div.sh-empty-state-media {
                @if let Some(src) = &props.image_src {
                    img.sh-empty-image src=(src) alt="";
                } @else {
                    div.sh-empty-icon-bg {
                        svg.sh-empty-icon fill="none" viewBox="0 0 24 24" stroke="currentColor" aria-hidden="true" {
                            path stroke-linecap="round" stroke-linejoin="round" stroke-width="1.5" d=(BOX_ICON_PATH) {}
                        }
                    }
                }
            }
            div.sh-empty-state-text {
                span.sh-empty-title { (props.title) }
                span.sh-empty-content { (props.content) }
                @if let Some(text) = &props.button_text {
                    button.sh-btn.sh-btn-primary.sh-empty-action type="button" { (text) }
                }
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct EmptyCardProps {
    pub heading: String,
    pub description: Option<String>,
    /// Show the box icon. Defaults to `true`.
    pub icon: bool,
    pub action: Option<Markup>,
}

impl Default for EmptyCardProps {
    fn default() -> Self {
        Self {
            heading: String::new(),
            description: None,
            icon: true,
            action: None,
        }
    }
}

pub fn empty_card(props: &EmptyCardProps) -> Markup {
    html! {
        div.sh-empty-card {
            @if props.icon {
                div.sh-empty-card-icon {
                    svg width="20" height="20" fill="none" viewBox="0 0 24 24" stroke="currentColor" aria-hidden="true" {
                        path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d=(BOX_ICON_PATH) {}
                    }
                }
            }
            span.sh-empty-card-heading.sh-empty-card-heading-spaced[props.icon] { (props.heading) }
            @if let Some(description) = &props.description {
                span.sh-empty-card-description { (description) }
            }
            @if let Some(action) = &props.action {
                div.sh-empty-card-action { (action) }
            }
        }
    }
}

// ============================================================================
// Typography
// ============================================================================

pub fn heading(title: &str, children: Option<Markup>) -> Markup {
    html! {
        div.sh-heading-row {
            span.sh-heading { (title) }
            @if let Some(children) = children {
                div { (children) }
            }
        }
    }
}

pub fn section_heading(title: &str, description: Option<&str>) -> Markup {
    html! {
        div.sh-section-heading {
            span.sh-section-title { (title) }
            @if let Some(description) = description {
                span.sh-section-description { (description) }
            }
        }
    }
}

pub fn label(value: &str, is_required: bool) -> Markup {
    html! {
        span.sh-label {
            (value)
            @if is_required {
                span.sh-label-required { " *" }
            }
        }
    }
}

// ============================================================================
// Controls
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "sh-btn sh-btn-primary",
            ButtonVariant::Secondary => "sh-btn sh-btn-secondary",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ButtonProps {
    pub variant: ButtonVariant,
    pub size: Size,
}

pub fn button(props: &ButtonProps, children: Markup) -> Markup {
    html! {
        button class=(props.variant.class()) style=(props.size.tokens().button_style()) type="button" {
            (children)
        }
    }
}

/// Spinner sized from the size tokens. Padding does not apply.
pub fn loader(size: Size) -> Markup {
    html! {
        svg.sh-loader style=(size.tokens().loader_style()) fill="none" viewBox="0 0 24 24" role="status" {
            circle.sh-loader-track cx="12" cy="12" r="10" stroke="currentColor" stroke-width="4" {}
            path.sh-loader-head fill="currentColor"
                d="M4 12a8 8 0 018-8V0C5.373 0 0 5.373 0 12h4zm2 5.291A7.962 7.962 0 014 12H0c0 3.042 1.135 5.824 3 7.938l3-2.647z" {}
        }
    }
}

/// Stock count badge, styled low below the threshold.
pub fn stock_badge(stock: i64) -> Result<Markup, StockError> {
    let state = stock::classify(stock)?;
    Ok(html! {
        span class={ "sh-stock-badge " (state.class()) } { (stock) }
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvatarProps {
    pub name: String,
    /// Show the name next to the image. Defaults to `true`.
    pub show_name: bool,
    pub src: String,
}

impl Default for AvatarProps {
    fn default() -> Self {
        Self {
            name: String::new(),
            show_name: true,
            src: DEFAULT_AVATAR_SRC.to_string(),
        }
    }
}

pub fn user_avatar(props: &AvatarProps) -> Markup {
    html! {
        div.sh-user-avatar {
            img.sh-user-avatar-img src=(props.src) alt=(props.name);
            @if props.show_name {
                span.sh-user-avatar-name { (props.name) }
            }
        }
    }
}

#[cfg(test)]
pub(crate) fn class_values(html: &str) -> Vec<String> {
    html.split("class=\"")
        .skip(1)
        .filter_map(|rest| rest.split('"').next())
        .flat_map(|v| v.split_whitespace().map(String::from).collect::<Vec<_>>())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_namespaced(html: &str) {
        for class in class_values(html) {
            assert!(
                class.starts_with(CLASS_PREFIX),
                "class '{class}' is missing the {CLASS_PREFIX} prefix in {html}"
            );
        }
    }

    #[test]
    fn alert_uses_severity_tokens() {
        let html = alert(&AlertProps {
            message: "Payment failed".to_string(),
            color: Severity::Danger,
            title: Some("Error".to_string()),
            ..AlertProps::default()
        })
        .into_string();
        assert!(html.contains("sh-alert-danger"));
        assert!(html.contains(r##"fill="#ef4444""##));
        assert!(html.contains("color: #dc2626"));
        assert!(html.contains("margin-top: 8px"));
        assert_namespaced(&html);
    }

    #[test]
    fn alert_defaults_to_warning_with_icon() {
        let html = alert(&AlertProps {
            message: "Careful".to_string(),
            ..AlertProps::default()
        })
        .into_string();
        assert!(html.contains("sh-alert-warning"));
        assert!(html.contains("<svg"));
        assert!(html.contains("margin-top: 0px"));
        assert!(!html.contains("sh-alert-title"));
    }

    #[test]
    fn alert_icon_can_be_hidden() {
        let html = alert(&AlertProps {
            message: "Plain".to_string(),
            color: Severity::Info,
            icon: false,
            ..AlertProps::default()
        })
        .into_string();
        assert!(!html.contains("<svg"));
    }

    #[test]
    fn each_severity_draws_its_own_glyph() {
        let glyphs: Vec<String> = Severity::ALL
            .iter()
            .map(|&color| {
                alert(&AlertProps {
                    message: "m".to_string(),
                    color,
                    ..AlertProps::default()
                })
                .into_string()
            })
            .collect();
        for (i, a) in glyphs.iter().enumerate() {
            for b in glyphs.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn stock_badge_low_and_ok() {
        let low = stock_badge(3).unwrap().into_string();
        assert!(low.contains("sh-stock-badge-low"));
        assert!(low.contains(">3<"));
        let ok = stock_badge(10).unwrap().into_string();
        assert!(ok.contains("sh-stock-badge-ok"));
    }

    #[test]
    fn stock_badge_rejects_negative() {
        assert!(matches!(
            stock_badge(-4),
            Err(StockError::InvalidQuantity(-4))
        ));
    }

    #[test]
    fn button_applies_size_tokens() {
        let html = button(
            &ButtonProps {
                size: Size::Sm,
                ..ButtonProps::default()
            },
            html! { "Save" },
        )
        .into_string();
        assert!(html.contains("sh-btn-primary"));
        assert!(html.contains("padding: 6px 12px; font-size: 13px"));
        assert_namespaced(&html);
    }

    #[test]
    fn loader_ignores_padding() {
        let html = loader(Size::Lg).into_string();
        assert!(html.contains("width: 24px; height: 24px"));
        assert!(!html.contains("padding"));
    }

    #[test]
    fn avatar_defaults() {
        let html = user_avatar(&AvatarProps {
            name: "Jane".to_string(),
            ..AvatarProps::default()
        })
        .into_string();
        assert!(html.contains("ui-avatars.com"));
        assert!(html.contains("sh-user-avatar-name"));
    }

    #[test]
    fn avatar_can_hide_name() {
        let html = user_avatar(&AvatarProps {
            name: "Jane".to_string(),
            show_name: false,
            src: "/me.png".to_string(),
        })
        .into_string();
        assert!(!html.contains("sh-user-avatar-name"));
        assert!(html.contains(r#"src="/me.png""#));
        assert!(html.contains(r#"alt="Jane""#));
    }

    #[test]
    fn card_description_needs_title() {
        let html = card(
            &CardProps {
                description: Some("orphan".to_string()),
                ..CardProps::default()
            },
            html! { "body" },
        )
        .into_string();
        assert!(!html.contains("orphan"));
        assert!(html.contains("sh-card-inner"));
    }

    #[test]
    fn preview_centering_toggle() {
        let centered = preview(&PreviewProps::default(), html! {}).into_string();
        assert!(centered.contains("sh-preview-centered"));
        let plain = preview(
            &PreviewProps {
                centered: false,
                class: "sh-wide".to_string(),
            },
            html! {},
        )
        .into_string();
        assert!(!plain.contains("sh-preview-centered"));
        assert!(plain.contains(r#"class="sh-preview sh-wide""#));
    }

    #[test]
    fn empty_card_spacing_follows_icon() {
        let with_icon = empty_card(&EmptyCardProps {
            heading: "No orders".to_string(),
            ..EmptyCardProps::default()
        })
        .into_string();
        assert!(with_icon.contains("sh-empty-card-heading-spaced"));
        let without = empty_card(&EmptyCardProps {
            heading: "No orders".to_string(),
            icon: false,
            action: Some(html! { "Create" }),
            ..EmptyCardProps::default()
        })
        .into_string();
        assert!(!without.contains("sh-empty-card-heading-spaced"));
        assert!(without.contains("sh-empty-card-action"));
    }

    #[test]
    fn empty_state_prefers_image() {
        let html = empty_state(&EmptyStateProps {
            title: "Nothing here".to_string(),
            content: "Add a product".to_string(),
            button_text: Some("Add".to_string()),
            image_src: Some("/empty.svg".to_string()),
        })
        .into_string();
        assert!(html.contains(r#"src="/empty.svg""#));
        assert!(!html.contains("sh-empty-icon-bg"));
        assert!(html.contains("sh-btn-primary"));
    }

    #[test]
    fn label_marks_required() {
        assert!(label("Email", true).into_string().contains("sh-label-required"));
        assert!(!label("Email", false).into_string().contains("sh-label-required"));
    }

    #[test]
    fn typography_is_namespaced() {
        assert_namespaced(&heading("Orders", Some(html! { "x" })).into_string());
        assert_namespaced(&section_heading("General", Some("Store details")).into_string());
    }

    #[test]
    fn props_are_escaped() {
        let html = label("<b>bold</b>", false).into_string();
        assert!(html.contains("&lt;b&gt;"));
    }
}
