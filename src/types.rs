//! Page metadata shared by scanning, navigation, and layout.
//!
//! Front matter is deserialized as-is into [`FrontMatter`]; the typed views
//! ([`PageMeta`], [`VideoMeta`], [`PageDescriptor`]) are derived from it and
//! checked for required fields on the way.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MetaError {
    #[error("Missing required field '{field}' in {source_path}")]
    MissingRequiredField {
        field: &'static str,
        source_path: String,
    },
}

fn default_true() -> bool {
    true
}

/// Which page template renders the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutKind {
    #[default]
    Basic,
    Video,
}

/// YAML front matter of a content page. Keys are camelCase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FrontMatter {
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub layout: LayoutKind,
    /// Only an explicit `false` hides the page from "next lesson" links.
    #[serde(default = "default_true")]
    pub published: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feature_version: Option<String>,
    #[serde(default = "default_true")]
    pub header_separator: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vimeo_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download_hd: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download_sd: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_code: Option<String>,
}

impl Default for FrontMatter {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: None,
            layout: LayoutKind::Basic,
            published: true,
            feature_version: None,
            header_separator: true,
            container_id: None,
            vimeo_id: None,
            download_hd: None,
            download_sd: None,
            source_code: None,
        }
    }
}

/// One entry of a navigable sequence, as the navigator sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageDescriptor {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub href: String,
    #[serde(default = "default_true")]
    pub published: bool,
    /// Position key within the sequence (the `NNN-` prefix).
    pub order: u32,
}

impl PageDescriptor {
    pub fn validate(&self, source_path: &str) -> Result<(), MetaError> {
        require("title", &self.title, source_path)?;
        require("href", &self.href, source_path)
    }
}

/// Header badge, e.g. `Laravel Shopper version: 2.x`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    pub key: String,
    pub value: String,
}

/// Metadata the basic page template needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMeta {
    pub title: String,
    pub description: Option<String>,
    pub badge: Option<Badge>,
    /// Whether the header has a divider under it.
    pub header_separator: bool,
    pub container_id: Option<String>,
}

impl PageMeta {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            badge: None,
            header_separator: true,
            container_id: None,
        }
    }

    /// Build from front matter. `badge_key` labels the `featureVersion` badge.
    pub fn from_front_matter(
        fm: &FrontMatter,
        badge_key: &str,
        source_path: &str,
    ) -> Result<Self, MetaError> {
        require("title", &fm.title, source_path)?;
        Ok(Self {
            title: fm.title.clone(),
            description: fm.description.clone(),
            badge: fm.feature_version.as_ref().map(|v| Badge {
                key: badge_key.to_string(),
                value: v.clone(),
            }),
            header_separator: fm.header_separator,
            container_id: fm.container_id.clone(),
        })
    }
}

/// Metadata the video page template needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoMeta {
    pub title: String,
    pub description: Option<String>,
    pub vimeo_id: String,
    /// Download and source links are used verbatim, never validated.
    pub download_hd: Option<String>,
    pub download_sd: Option<String>,
    pub source_code: Option<String>,
}

impl VideoMeta {
    pub fn from_front_matter(fm: &FrontMatter, source_path: &str) -> Result<Self, MetaError> {
        require("title", &fm.title, source_path)?;
        let vimeo_id = fm.vimeo_id.as_deref().unwrap_or_default();
        require("vimeoId", vimeo_id, source_path)?;
        Ok(Self {
            title: fm.title.clone(),
            description: fm.description.clone(),
            vimeo_id: vimeo_id.to_string(),
            download_hd: fm.download_hd.clone(),
            download_sd: fm.download_sd.clone(),
            source_code: fm.source_code.clone(),
        })
    }
}

fn require(field: &'static str, value: &str, source_path: &str) -> Result<(), MetaError> {
    if value.trim().is_empty() {
        return Err(MetaError::MissingRequiredField {
            field,
            source_path: source_path.to_string(),
        });
    }
    Ok(())
}
