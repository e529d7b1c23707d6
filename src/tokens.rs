//! Style token table for the closed variant sets.
//!
//! Components never carry their own color or spacing literals. They ask this
//! table for the tokens that belong to a semantic state:
//!
//! | Category   | Keys                                | Tokens                                  |
//! |------------|-------------------------------------|-----------------------------------------|
//! | `Severity` | `info`, `danger`, `success`, `warning` | icon color, title color, icon glyph  |
//! | `Size`     | `sm`, `md`, `lg`                    | padding, font size, loader size         |
//!
//! Typed callers go through [`Severity::tokens`] and [`Size::tokens`], which
//! are exhaustive matches and cannot fail. String keys (front matter, preview
//! blocks) go through [`resolve`] or `FromStr`, where anything outside the
//! set is [`TokenError::UnknownVariant`] instead of an empty style.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Unknown {category} variant '{key}' (expected one of: {expected})")]
    UnknownVariant {
        category: Category,
        key: String,
        expected: &'static str,
    },
}

/// Which lookup table a key belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Severity,
    Size,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Severity => f.write_str("severity"),
            Category::Size => f.write_str("size"),
        }
    }
}

/// Alert state. Defaults to `Warning`, the alert component's default color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Danger,
    Success,
    #[default]
    Warning,
}

/// Colors and glyph for one severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeverityTokens {
    pub icon_color: &'static str,
    pub title_color: &'static str,
    /// SVG path data for the 20x20 solid icon.
    #[serde(skip)]
    pub icon_path: &'static str,
}

impl Severity {
    pub const ALL: [Severity; 4] = [
        Severity::Info,
        Severity::Danger,
        Severity::Success,
        Severity::Warning,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Danger => "danger",
            Severity::Success => "success",
            Severity::Warning => "warning",
        }
    }

    pub fn tokens(self) -> SeverityTokens {
        match self {
            Severity::Info => SeverityTokens {
                icon_color: "#3b82f6",
                title_color: "#2563eb",
                icon_path: "M18 10a8 8 0 11-16 0 8 8 0 0116 0zm-7-4a1 1 0 11-2 0 1 1 0 012 0zM9 9a1 1 0 000 2v3a1 1 0 001 1h1a1 1 0 100-2v-3a1 1 0 00-1-1H9z",
            },
            Severity::Danger => SeverityTokens {
                icon_color: "#ef4444",
                title_color: "#dc2626",
                icon_path: "M10 18a8 8 0 100-16 8 8 0 000 16zM8.707 7.293a1 1 0 00-1.414 1.414L8.586 10l-1.293 1.293a1 1 0 101.414 1.414L10 11.414l1.293 1.293a1 1 0 001.414-1.414L11.414 10l1.293-1.293a1 1 0 00-1.414-1.414L10 8.586 8.707 7.293z",
            },
            Severity::Success => SeverityTokens {
                icon_color: "#22c55e",
                title_color: "#16a34a",
                icon_path: "M10 18a8 8 0 100-16 8 8 0 000 16zm3.707-9.293a1 1 0 00-1.414-1.414L9 10.586 7.707 9.293a1 1 0 00-1.414 1.414l2 2a1 1 0 001.414 0l4-4z",
            },
            Severity::Warning => SeverityTokens {
                icon_color: "#f59e0b",
                title_color: "#d97706",
                icon_path: "M8.257 3.099c.765-1.36 2.722-1.36 3.486 0l5.58 9.92c.75 1.334-.213 2.98-1.742 2.98H4.42c-1.53 0-2.493-1.646-1.743-2.98l5.58-9.92zM11 13a1 1 0 11-2 0 1 1 0 012 0zm-1-8a1 1 0 00-1 1v3a1 1 0 002 0V6a1 1 0 00-1-1z",
            },
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = TokenError;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        match key {
            "info" => Ok(Severity::Info),
            "danger" => Ok(Severity::Danger),
            "success" => Ok(Severity::Success),
            "warning" => Ok(Severity::Warning),
            _ => Err(TokenError::UnknownVariant {
                category: Category::Severity,
                key: key.to_string(),
                expected: "info, danger, success, warning",
            }),
        }
    }
}

/// Dimensional preset shared by buttons and loaders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    Sm,
    #[default]
    Md,
    Lg,
}

/// Spacing and typography for one size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SizeTokens {
    /// Vertical padding in px.
    pub padding_y: u32,
    /// Horizontal padding in px.
    pub padding_x: u32,
    /// Font size in px.
    pub font_size: u32,
    /// Loader edge length in px. Loaders ignore padding.
    pub loader_px: u32,
}

impl SizeTokens {
    /// Inline `style` value for buttons.
    pub fn button_style(&self) -> String {
        format!(
            "padding: {}px {}px; font-size: {}px",
            self.padding_y, self.padding_x, self.font_size
        )
    }

    /// Inline `style` value for loaders.
    pub fn loader_style(&self) -> String {
        format!("width: {0}px; height: {0}px", self.loader_px)
    }
}

impl Size {
    pub const ALL: [Size; 3] = [Size::Sm, Size::Md, Size::Lg];

    pub fn as_str(self) -> &'static str {
        match self {
            Size::Sm => "sm",
            Size::Md => "md",
            Size::Lg => "lg",
        }
    }

    pub fn tokens(self) -> SizeTokens {
        match self {
            Size::Sm => SizeTokens {
                padding_y: 6,
                padding_x: 12,
                font_size: 13,
                loader_px: 16,
            },
            Size::Md => SizeTokens {
                padding_y: 8,
                padding_x: 16,
                font_size: 14,
                loader_px: 20,
            },
            Size::Lg => SizeTokens {
                padding_y: 12,
                padding_x: 24,
                font_size: 16,
                loader_px: 24,
            },
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Size {
    type Err = TokenError;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        match key {
            "sm" => Ok(Size::Sm),
            "md" => Ok(Size::Md),
            "lg" => Ok(Size::Lg),
            _ => Err(TokenError::UnknownVariant {
                category: Category::Size,
                key: key.to_string(),
                expected: "sm, md, lg",
            }),
        }
    }
}

/// Result of a [`resolve`] lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum StyleAttributes {
    Severity(SeverityTokens),
    Size(SizeTokens),
}

/// Look up the style tokens for a string key within a category.
pub fn resolve(category: Category, key: &str) -> Result<StyleAttributes, TokenError> {
    match category {
        Category::Severity => Ok(StyleAttributes::Severity(key.parse::<Severity>()?.tokens())),
        Category::Size => Ok(StyleAttributes::Size(key.parse::<Size>()?.tokens())),
    }
}

/// Parse an optional string key, falling back to the variant's default.
pub fn parse_or_default<T>(key: Option<&str>) -> Result<T, TokenError>
where
    T: FromStr<Err = TokenError> + Default,
{
    key.map(|k| k.parse::<T>()).transpose().map(Option::unwrap_or_default)
}
