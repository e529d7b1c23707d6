//! Content scanning and manifest generation.
//!
//! Stage 1 of the build. Walks the content directory, reads every markdown
//! page with its YAML front matter, and groups pages into sections whose
//! numbered pages form the lesson sequence.
//!
//! ## Directory Structure
//!
//! ```text
//! content/
//! ├── config.toml                      # Site configuration (optional)
//! ├── index.md                         # → /
//! ├── 010-getting-started/             # Section → /getting-started
//! │   ├── 010-installation.md          # → /getting-started/installation
//! │   └── 020-configuration.md
//! └── 020-screencasts/
//!     ├── 010-introduction.md          # layout: video
//!     ├── 020-products.md
//!     └── coming-soon.md               # Unnumbered: not part of the sequence
//! ```
//!
//! ## Sequences
//!
//! Within a section, numbered pages sorted by number are the sequence the
//! "next lesson" link walks. Unnumbered pages are rendered but are not in any
//! sequence. A video page must therefore be numbered.
//!
//! ## Validation
//!
//! - Every page needs front matter with a `title`
//! - Video pages need a `vimeoId` and a number prefix
//! - No two files may resolve to the same route

use crate::config::{self, SiteConfig};
use crate::naming::parse_entry_name;
use crate::types::{FrontMatter, LayoutKind, MetaError, PageDescriptor, PageMeta, VideoMeta};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Unclosed front matter block in {0}")]
    UnclosedFrontMatter(PathBuf),
    #[error("Invalid front matter in {path}: {message}")]
    InvalidFrontMatter { path: PathBuf, message: String },
    #[error(transparent)]
    Meta(#[from] MetaError),
    #[error("Video page {0} needs a number prefix to join its lesson sequence")]
    UnnumberedVideo(String),
    #[error("Route {href} is produced by both {first} and {second}")]
    DuplicateRoute {
        href: String,
        first: String,
        second: String,
    },
}

/// Output of the scan stage.
#[derive(Debug, Serialize)]
pub struct Manifest {
    pub pages: Vec<Page>,
    pub sections: Vec<Section>,
    pub config: SiteConfig,
}

impl Manifest {
    pub fn page(&self, href: &str) -> Option<&Page> {
        self.pages.iter().find(|p| p.href == href)
    }

    pub fn section(&self, path: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.path == path)
    }
}

/// A directory of pages. The root directory is the section with path `""`.
#[derive(Debug, Clone, Serialize)]
pub struct Section {
    /// Route prefix without leading slash, e.g. `screencasts`.
    pub path: String,
    /// Directory relative to the content root.
    pub source_dir: String,
    /// Numbered pages in order.
    pub sequence: Vec<PageDescriptor>,
}

/// A markdown page.
#[derive(Debug, Clone, Serialize)]
pub struct Page {
    /// File path relative to the content root.
    pub source_path: String,
    pub href: String,
    /// Path of the owning [`Section`].
    pub section: String,
    /// Number prefix; `None` keeps the page out of the sequence.
    pub order: Option<u32>,
    pub front: FrontMatter,
    /// Markdown after the front matter.
    pub body: String,
}

impl Page {
    pub fn descriptor(&self) -> PageDescriptor {
        PageDescriptor {
            title: self.front.title.clone(),
            description: self.front.description.clone(),
            href: self.href.clone(),
            published: self.front.published,
            order: self.order.unwrap_or(u32::MAX),
        }
    }

    pub fn is_video(&self) -> bool {
        self.front.layout == LayoutKind::Video
    }

    /// Route as a path relative to the output root, e.g. `screencasts/intro`.
    pub fn output_dir(&self) -> &str {
        self.href.trim_start_matches('/')
    }
}

/// Split `---` YAML front matter from a markdown source.
///
/// Returns `None` for the front matter when the source does not open with a
/// fence.
pub fn split_front_matter<'a>(
    source: &'a str,
    path: &Path,
) -> Result<(Option<FrontMatter>, &'a str), ScanError> {
    let trimmed = source.trim_start();
    let Some(after_open) = trimmed.strip_prefix("---") else {
        return Ok((None, source));
    };
    let Some((yaml, rest)) = closing_fence(after_open) else {
        return Err(ScanError::UnclosedFrontMatter(path.to_path_buf()));
    };
    let yaml = yaml.trim();

    let front: FrontMatter = if yaml.is_empty() {
        FrontMatter::default()
    } else {
        serde_yaml::from_str(yaml).map_err(|e| ScanError::InvalidFrontMatter {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
    };
    Ok((Some(front), rest.trim_start()))
}

/// Split at the first line that is exactly `---`, trailing whitespace
/// allowed. Returns the text before that line and the text after it.
fn closing_fence(after_open: &str) -> Option<(&str, &str)> {
    let mut offset = 0;
    for line in after_open.split_inclusive('\n') {
        let start = offset;
        offset += line.len();
        // The opening fence line itself is never a close.
        if start == 0 {
            continue;
        }
        if line.trim_end() == "---" {
            return Some((&after_open[..start], &after_open[offset..]));
        }
    }
    None
}

fn is_hidden(entry: &walkdir::DirEntry) -> bool {
    entry.depth() > 0
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.starts_with('.'))
}

/// Join slugs into a route. The `index` page maps to its section route.
fn route_for(section_slugs: &[String], page_slug: &str) -> String {
    let mut parts: Vec<&str> = section_slugs.iter().map(String::as_str).collect();
    if page_slug != "index" {
        parts.push(page_slug);
    }
    format!("/{}", parts.join("/"))
}

/// Scan a content directory into a [`Manifest`].
pub fn scan(root: &Path) -> Result<Manifest, ScanError> {
    let config = config::load_config(root)?;

    let mut pages = Vec::new();
    let mut routes: BTreeMap<String, String> = BTreeMap::new();
    let mut section_dirs: BTreeMap<String, String> = BTreeMap::new();

    for entry in WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !is_hidden(e))
    {
        let entry = entry?;
        let path = entry.path();
        if !entry.file_type().is_file() || path.extension().is_none_or(|e| e != "md") {
            continue;
        }

        let rel = path.strip_prefix(root).unwrap_or(path);
        let source_path = rel.to_string_lossy().replace('\\', "/");

        let section_slugs: Vec<String> = rel
            .parent()
            .map(|p| {
                p.components()
                    .map(|c| parse_entry_name(&c.as_os_str().to_string_lossy()).slug)
                    .collect()
            })
            .unwrap_or_default();
        let section = section_slugs.join("/");
        let source_dir = rel
            .parent()
            .map(|p| p.to_string_lossy().replace('\\', "/"))
            .unwrap_or_default();
        section_dirs.entry(section.clone()).or_insert(source_dir);

        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let parsed = parse_entry_name(&stem);
        let href = route_for(&section_slugs, &parsed.slug);

        if let Some(first) = routes.insert(href.clone(), source_path.clone()) {
            return Err(ScanError::DuplicateRoute {
                href,
                first,
                second: source_path,
            });
        }

        let source = fs::read_to_string(path)?;
        let (front, body) = split_front_matter(&source, rel)?;
        let front = front.unwrap_or_default();

        // Surface missing required fields at scan time rather than mid-render.
        match front.layout {
            LayoutKind::Basic => {
                PageMeta::from_front_matter(&front, &config.header.badge_key, &source_path)?;
            }
            LayoutKind::Video => {
                VideoMeta::from_front_matter(&front, &source_path)?;
                if parsed.number.is_none() {
                    return Err(ScanError::UnnumberedVideo(source_path));
                }
            }
        }

        tracing::debug!(%href, source = %source_path, "scanned page");
        pages.push(Page {
            source_path,
            href,
            section,
            order: parsed.number,
            front,
            body: body.to_string(),
        });
    }

    let sections = build_sections(&pages, section_dirs)?;

    Ok(Manifest {
        pages,
        sections,
        config,
    })
}

fn build_sections(
    pages: &[Page],
    section_dirs: BTreeMap<String, String>,
) -> Result<Vec<Section>, ScanError> {
    let mut sections = Vec::with_capacity(section_dirs.len());
    for (path, source_dir) in section_dirs {
        let mut numbered: Vec<&Page> = pages
            .iter()
            .filter(|p| p.section == path && p.order.is_some())
            .collect();
        numbered.sort_by_key(|p| (p.order, p.href.clone()));

        let mut sequence = Vec::with_capacity(numbered.len());
        for page in numbered {
            let descriptor = page.descriptor();
            descriptor.validate(&page.source_path)?;
            sequence.push(descriptor);
        }
        sections.push(Section {
            path,
            source_dir,
            sequence,
        });
    }
    Ok(sections)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;
    use tempfile::TempDir;

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn split_front_matter_reads_yaml_and_body() {
        let source = "---\ntitle: Intro\ndescription: Start here\n---\n\n# Hello\n";
        let (front, body) = split_front_matter(source, Path::new("intro.md")).unwrap();
        let front = front.unwrap();
        assert_eq!(front.title, "Intro");
        assert_eq!(front.description.as_deref(), Some("Start here"));
        assert!(body.starts_with("# Hello"));
    }

    #[test]
    fn split_front_matter_without_fence() {
        let source = "# Just markdown";
        let (front, body) = split_front_matter(source, Path::new("a.md")).unwrap();
        assert!(front.is_none());
        assert_eq!(body, source);
    }

    #[test]
    fn split_front_matter_unclosed() {
        let result = split_front_matter("---\ntitle: x\n# body", Path::new("a.md"));
        assert!(matches!(result, Err(ScanError::UnclosedFrontMatter(_))));
    }

    #[test]
    fn split_front_matter_needs_an_exact_fence() {
        let source = "---\ntitle: Intro\ndescription: |\n  ---- dashes\n---foo: 1\n---  \nBody\n";
        let result = split_front_matter(source, Path::new("a.md"));
        // `---foo` and `  ----` are content, so YAML sees the `---foo` key.
        assert!(matches!(result, Err(ScanError::InvalidFrontMatter { .. })));

        let source = "---\ntitle: Intro\ndescription: |-\n  ----\n---  \nBody\n";
        let (front, body) = split_front_matter(source, Path::new("a.md")).unwrap();
        assert_eq!(front.unwrap().description.as_deref(), Some("----"));
        assert_eq!(body, "Body\n");
    }

    #[test]
    fn split_front_matter_rejects_dashes_only_prefix() {
        let result = split_front_matter("---\ntitle: x\n----\nbody\n", Path::new("a.md"));
        assert!(matches!(result, Err(ScanError::UnclosedFrontMatter(_))));
    }

    #[test]
    fn split_front_matter_invalid_yaml() {
        let result = split_front_matter("---\ntitle: [oops\n---\n", Path::new("a.md"));
        assert!(matches!(result, Err(ScanError::InvalidFrontMatter { .. })));
    }

    #[test]
    fn route_for_index_and_pages() {
        assert_eq!(route_for(&[], "index"), "/");
        assert_eq!(route_for(&["screencasts".to_string()], "index"), "/screencasts");
        assert_eq!(
            route_for(&["screencasts".to_string()], "intro"),
            "/screencasts/intro"
        );
    }

    #[test]
    fn scan_fixtures_builds_routes() {
        let tmp = setup_fixtures();
        let manifest = scan(tmp.path()).unwrap();

        assert_eq!(
            page_hrefs(&manifest),
            vec![
                "/getting-started/installation",
                "/getting-started/configuration",
                "/screencasts/introduction",
                "/screencasts/products",
                "/screencasts/orders",
                "/screencasts/customers",
                "/",
            ]
        );
    }

    #[test]
    fn scan_fixtures_builds_sequences() {
        let tmp = setup_fixtures();
        let manifest = scan(tmp.path()).unwrap();

        let screencasts = find_section(&manifest, "screencasts");
        assert_eq!(
            sequence_hrefs(screencasts),
            vec![
                "/screencasts/introduction",
                "/screencasts/products",
                "/screencasts/orders",
                "/screencasts/customers",
            ]
        );
        assert!(!screencasts.sequence[2].published);
        assert_eq!(screencasts.source_dir, "020-screencasts");
    }

    #[test]
    fn scan_fixtures_reads_video_front_matter() {
        let tmp = setup_fixtures();
        let manifest = scan(tmp.path()).unwrap();
        let intro = find_page(&manifest, "/screencasts/introduction");
        assert!(intro.is_video());
        assert_eq!(intro.front.vimeo_id.as_deref(), Some("76979871"));
        assert_eq!(intro.order, Some(10));
    }

    #[test]
    fn unnumbered_pages_stay_out_of_sequence() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "020-screencasts/010-intro.md", "---\ntitle: Intro\n---\n");
        write(tmp.path(), "020-screencasts/coming-soon.md", "---\ntitle: Soon\n---\n");
        let manifest = scan(tmp.path()).unwrap();

        let section = manifest.section("screencasts").unwrap();
        assert_eq!(sequence_hrefs(section), vec!["/screencasts/intro"]);
        assert!(manifest.page("/screencasts/coming-soon").is_some());
    }

    #[test]
    fn scan_rejects_missing_title() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "010-guide.md", "# No front matter\n");
        let err = scan(tmp.path()).unwrap_err();
        assert!(matches!(
            err,
            ScanError::Meta(MetaError::MissingRequiredField { field: "title", .. })
        ));
    }

    #[test]
    fn scan_rejects_video_without_vimeo_id() {
        let tmp = TempDir::new().unwrap();
        write(
            tmp.path(),
            "screencasts/010-intro.md",
            "---\ntitle: Intro\nlayout: video\n---\n",
        );
        let err = scan(tmp.path()).unwrap_err();
        assert!(err.to_string().contains("vimeoId"));
    }

    #[test]
    fn scan_rejects_unnumbered_video() {
        let tmp = TempDir::new().unwrap();
        write(
            tmp.path(),
            "screencasts/intro.md",
            "---\ntitle: Intro\nlayout: video\nvimeoId: '1'\n---\n",
        );
        let err = scan(tmp.path()).unwrap_err();
        assert!(matches!(&err, ScanError::UnnumberedVideo(path) if path == "screencasts/intro.md"));
        assert!(err.to_string().contains("screencasts/intro.md"));
    }

    #[test]
    fn scan_rejects_duplicate_routes() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "010-guide.md", "---\ntitle: A\n---\n");
        write(tmp.path(), "020-guide.md", "---\ntitle: B\n---\n");
        assert!(matches!(
            scan(tmp.path()),
            Err(ScanError::DuplicateRoute { .. })
        ));
    }

    #[test]
    fn scan_skips_hidden_and_non_markdown() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), ".drafts/010-wip.md", "not even front matter");
        write(tmp.path(), "notes.txt", "ignored");
        write(tmp.path(), "index.md", "---\ntitle: Home\n---\n");
        let manifest = scan(tmp.path()).unwrap();
        assert_eq!(page_hrefs(&manifest), vec!["/"]);
    }
}
