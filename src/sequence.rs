//! "Next lesson" resolution over an ordered page sequence.
//!
//! The navigator looks exactly one position ahead. If that page exists and
//! is published, it is the target; otherwise the target is the well-known
//! coming-soon route. It never skips past an unpublished page to find a
//! later published one.
//!
//! ```text
//! [A, B(published), C]      current = A  →  B
//! [A, B(unpublished), C]    current = A  →  /screencasts/coming-soon
//! [A]                       current = A  →  /screencasts/coming-soon
//! ```

use crate::types::PageDescriptor;
use thiserror::Error;

/// Route shown when there is no published next page.
pub const FALLBACK_ROUTE: &str = "/screencasts/coming-soon";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavigationError {
    #[error("Position {position} not found in a sequence of {len} pages")]
    PositionNotFound { position: String, len: usize },
}

/// Where the "next" link points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationTarget {
    Page { href: String, title: String },
    Fallback,
}

impl NavigationTarget {
    pub fn href(&self) -> &str {
        match self {
            NavigationTarget::Page { href, .. } => href,
            NavigationTarget::Fallback => FALLBACK_ROUTE,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, NavigationTarget::Fallback)
    }
}

/// Compute the target following `current` in `sequence`.
pub fn next(sequence: &[PageDescriptor], current: usize) -> Result<NavigationTarget, NavigationError> {
    if sequence.is_empty() {
        return Ok(NavigationTarget::Fallback);
    }
    if current >= sequence.len() {
        return Err(NavigationError::PositionNotFound {
            position: current.to_string(),
            len: sequence.len(),
        });
    }
    match sequence.get(current + 1) {
        Some(successor) if successor.published => Ok(NavigationTarget::Page {
            href: successor.href.clone(),
            title: successor.title.clone(),
        }),
        _ => Ok(NavigationTarget::Fallback),
    }
}

/// Find the index of the page with `href` in `sequence`.
pub fn position_of(sequence: &[PageDescriptor], href: &str) -> Result<usize, NavigationError> {
    sequence
        .iter()
        .position(|d| d.href == href)
        .ok_or_else(|| NavigationError::PositionNotFound {
            position: href.to_string(),
            len: sequence.len(),
        })
}
