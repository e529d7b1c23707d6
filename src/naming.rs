//! `NNN-name` convention for content files and section directories.
//!
//! The numeric prefix orders pages inside a section (and therefore the
//! lesson sequence); the rest becomes the URL slug:
//!
//! - `010-getting-started/` → order 10, slug `getting-started`
//! - `020-Installing-Shopper.md` → order 20, slug `installing-shopper`
//! - `coming-soon.md` → no order, slug `coming-soon`

/// Result of parsing an entry name like `020-Installing-Shopper`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedName {
    /// Number prefix if present (e.g. `20` from `020-Installing-Shopper`).
    pub number: Option<u32>,
    /// URL slug: the name after the prefix, lowercased. Falls back to the
    /// number itself for number-only names.
    pub slug: String,
}

/// Parse an entry name (file stem or directory name).
///
/// - `"020-Installing-Shopper"` → number=Some(20), slug="installing-shopper"
/// - `"001"` → number=Some(1), slug="001"
/// - `"001-"` → number=Some(1), slug="001"
/// - `"coming-soon"` → number=None, slug="coming-soon"
pub fn parse_entry_name(name: &str) -> ParsedName {
    if let Some((prefix, rest)) = name.split_once('-') {
        if let Ok(num) = prefix.parse::<u32>() {
            let slug = if rest.is_empty() {
                prefix.to_string()
            } else {
                rest.to_lowercase()
            };
            return ParsedName {
                number: Some(num),
                slug,
            };
        }
    }
    if let Ok(num) = name.parse::<u32>() {
        return ParsedName {
            number: Some(num),
            slug: name.to_string(),
        };
    }
    ParsedName {
        number: None,
        slug: name.to_lowercase(),
    }
}
