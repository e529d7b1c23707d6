//! Shared test utilities.
//!
//! Lookup helpers and bulk extractors over the scan [`Manifest`].
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = setup_fixtures();
//! let manifest = scan(tmp.path()).unwrap();
//!
//! let section = find_section(&manifest, "screencasts");
//! assert_eq!(sequence_hrefs(section)[0], "/screencasts/introduction");
//! ```

use std::path::Path;
use tempfile::TempDir;

use crate::content::{Manifest, Page, Section};

// =========================================================================
// Fixture setup
// =========================================================================

/// Copy `fixtures/content/` to a temp directory and return it.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/content");
    copy_dir_recursive(&fixtures, tmp.path()).unwrap();
    tmp
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            std::fs::create_dir_all(&dst_path)?;
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

// =========================================================================
// Manifest lookups: panic with a clear message on miss
// =========================================================================

/// Find a page by route. Panics if not found.
pub fn find_page<'a>(manifest: &'a Manifest, href: &str) -> &'a Page {
    manifest.page(href).unwrap_or_else(|| {
        panic!(
            "page '{href}' not found. Available: {:?}",
            page_hrefs(manifest)
        )
    })
}

/// Find a section by route prefix. Panics if not found.
pub fn find_section<'a>(manifest: &'a Manifest, path: &str) -> &'a Section {
    manifest.section(path).unwrap_or_else(|| {
        let paths: Vec<&str> = manifest.sections.iter().map(|s| s.path.as_str()).collect();
        panic!("section '{path}' not found. Available: {paths:?}")
    })
}

// =========================================================================
// Bulk extractors
// =========================================================================

/// All page routes in scan order.
pub fn page_hrefs(manifest: &Manifest) -> Vec<&str> {
    manifest.pages.iter().map(|p| p.href.as_str()).collect()
}

/// Routes of a section's sequence in order.
pub fn sequence_hrefs(section: &Section) -> Vec<&str> {
    section.sequence.iter().map(|d| d.href.as_str()).collect()
}
