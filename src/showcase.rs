//! Component gallery served at `/components/`.
//!
//! Renders every preview component once per variant so the whole token
//! table is visible on one page: each severity, each size, and stock values
//! on both sides of the low-stock threshold.

use crate::components::{self, AlertProps, AvatarProps, ButtonProps, ButtonVariant, CardProps};
use crate::components::{EmptyCardProps, EmptyStateProps, PreviewProps};
use crate::stock::{LOW_STOCK_THRESHOLD, StockError};
use crate::tokens::{Severity, Size};
use crate::types::PageMeta;
use maud::{Markup, html};

/// Route of the gallery page.
pub const SHOWCASE_ROUTE: &str = "/components";

/// Stock counts shown in the gallery: empty, just below and at the threshold.
pub fn sample_stock_levels() -> [i64; 4] {
    [0, LOW_STOCK_THRESHOLD - 1, LOW_STOCK_THRESHOLD, LOW_STOCK_THRESHOLD * 5]
}

pub fn page_meta() -> PageMeta {
    PageMeta {
        description: Some("Every preview component in every variant.".to_string()),
        ..PageMeta::new("Components")
    }
}

fn framed(children: Markup) -> Markup {
    components::preview(&PreviewProps::default(), children)
}

fn entry(title: &str, description: Option<&str>, body: Markup) -> Markup {
    html! {
        section.sh-showcase-entry {
            (components::section_heading(title, description))
            (body)
        }
    }
}

/// Gallery body. Fails only if a sample stock level is rejected.
pub fn render() -> Result<Markup, StockError> {
    let badges = sample_stock_levels()
        .into_iter()
        .map(components::stock_badge)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(html! {
        div.sh-showcase {
            (entry("Alert", Some("One per severity."), html! {
                @for severity in Severity::ALL {
                    (framed(components::alert(&AlertProps {
                        title: Some(format!("{} alert", severity.as_str())),
                        message: format!("This alert uses the {severity} severity."),
                        color: severity,
                        ..AlertProps::default()
                    })))
                }
            }))
            (entry("Button", Some("Both variants in every size."), html! {
                @for variant in [ButtonVariant::Primary, ButtonVariant::Secondary] {
                    (framed(html! {
                        @for size in Size::ALL {
                            (components::button(&ButtonProps { variant, size }, html! { "Button " (size.as_str()) }))
                            " "
                        }
                    }))
                }
            }))
            (entry("Loader", None, framed(html! {
                @for size in Size::ALL {
                    (components::loader(size))
                }
            })))
            (entry("Stock badge", Some("Counts below 10 are flagged as low."), framed(html! {
                @for badge in &badges {
                    (badge)
                    " "
                }
            })))
            (entry("Card", None, framed(components::card(
                &CardProps {
                    title: Some("Store details".to_string()),
                    description: Some("Shown on invoices and receipts.".to_string()),
                    class: String::new(),
                },
                html! { p { "Card content." } },
            ))))
            (entry("Heading", None, framed(components::heading(
                "Products",
                Some(components::button(&ButtonProps::default(), html! { "Create product" })),
            ))))
            (entry("Empty state", None, framed(components::empty_state(&EmptyStateProps {
                title: "No customers yet".to_string(),
                content: "Customers appear here after their first order.".to_string(),
                button_text: Some("Add customer".to_string()),
                image_src: None,
            }))))
            (entry("Empty card", None, framed(components::empty_card(&EmptyCardProps {
                heading: "No orders".to_string(),
                description: Some("Orders placed on the storefront are listed here.".to_string()),
                icon: true,
                action: None,
            }))))
            (entry("Label", None, framed(html! {
                (components::label("Name", false))
                " "
                (components::label("Email", true))
            })))
            (entry("Avatar", None, html! {
                (framed(components::user_avatar(&AvatarProps {
                    name: "John Doe".to_string(),
                    ..AvatarProps::default()
                })))
                (framed(components::user_avatar(&AvatarProps {
                    name: "John Doe".to_string(),
                    show_name: false,
                    ..AvatarProps::default()
                })))
            }))
        }
    })
}
