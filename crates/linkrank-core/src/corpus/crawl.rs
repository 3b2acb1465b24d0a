//! Link extraction from a directory of HTML pages

use super::{Corpus, LinkMap};
use crate::error::{LinkRankError, Result};
use glob::Pattern;
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::BTreeSet;
use std::path::Path;
use walkdir::WalkDir;

/// File names considered pages
const PAGE_PATTERN: &str = "*.html";

lazy_static! {
    static ref ANCHOR_HREF: Regex =
        Regex::new(r#"<a\s+(?:[^>]*?)href="([^"]*)""#).expect("Invalid regex");
}

/// Extract every anchor `href` target from an HTML document
pub fn extract_links(html: &str) -> BTreeSet<String> {
    ANCHOR_HREF
        .captures_iter(html)
        .filter_map(|cap| cap.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Build a corpus from the `.html` files directly inside `dir`
///
/// Pages are identified by file name. Self-links and links to files that
/// are not pages of the corpus are dropped.
pub fn crawl(dir: &Path) -> Result<Corpus> {
    if !dir.is_dir() {
        return Err(LinkRankError::CorpusNotFound(dir.display().to_string()));
    }

    let pattern = Pattern::new(PAGE_PATTERN)?;
    let mut pages = LinkMap::new();

    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let name = entry.file_name().to_string_lossy().to_string();
        if !pattern.matches(&name) {
            tracing::debug!("Skipping non-page file {}", name);
            continue;
        }

        let bytes = match std::fs::read(entry.path()) {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::warn!("Skipping unreadable page {}: {}", name, e);
                continue;
            }
        };
        // Non-UTF-8 pages stay in the corpus; only their undecodable bytes are lost
        let contents = String::from_utf8_lossy(&bytes);

        let mut links = extract_links(&contents);
        links.remove(&name);
        pages.insert(name, links);
    }

    // Only keep links that stay inside the corpus
    let names: BTreeSet<String> = pages.keys().cloned().collect();
    for links in pages.values_mut() {
        links.retain(|link| names.contains(link));
    }

    if pages.is_empty() {
        return Err(LinkRankError::InvalidCorpus(format!(
            "no pages matching {} in {}",
            PAGE_PATTERN,
            dir.display()
        )));
    }

    tracing::info!("Crawled {} pages from {}", pages.len(), dir.display());
    Corpus::new(pages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_extract_links() {
        let html = r#"<html><body>
            <a href="2.html">Two</a>
            <a class="nav" href="3.html">Three</a>
            <a href="2.html">Again</a>
            <link href="style.css">
        </body></html>"#;

        let links = extract_links(html);
        let expected: BTreeSet<String> = ["2.html", "3.html"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(links, expected);
    }

    #[test]
    fn test_crawl_directory() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("1.html"),
            r#"<a href="2.html">2</a> <a href="1.html">self</a> <a href="https://example.com">x</a>"#,
        )
        .unwrap();
        fs::write(dir.path().join("2.html"), r#"<a href="1.html">1</a>"#).unwrap();
        fs::write(dir.path().join("3.html"), "no links here").unwrap();
        fs::write(dir.path().join("notes.txt"), r#"<a href="1.html">1</a>"#).unwrap();

        let corpus = crawl(dir.path()).unwrap();
        let map = corpus.to_link_map();

        assert_eq!(corpus.len(), 3);
        assert_eq!(map["1.html"].iter().collect::<Vec<_>>(), vec!["2.html"]);
        assert_eq!(map["2.html"].iter().collect::<Vec<_>>(), vec!["1.html"]);
        assert!(map["3.html"].is_empty());
        assert!(!corpus.contains("notes.txt"));
    }

    #[test]
    fn test_crawl_ignores_subdirectories() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("nested").join("2.html"), "").unwrap();
        fs::write(dir.path().join("1.html"), r#"<a href="2.html">2</a>"#).unwrap();

        let corpus = crawl(dir.path()).unwrap();
        assert_eq!(corpus.pages(), &["1.html"]);
        assert!(corpus.is_dangling(0));
    }

    #[test]
    fn test_crawl_keeps_non_utf8_pages() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("1.html"), r#"<a href="2.html">2</a>"#).unwrap();
        let mut latin1 = b"<p>caf\xe9</p> ".to_vec();
        latin1.extend_from_slice(br#"<a href="1.html">1</a>"#);
        fs::write(dir.path().join("2.html"), latin1).unwrap();

        let corpus = crawl(dir.path()).unwrap();
        let map = corpus.to_link_map();

        assert_eq!(corpus.len(), 2);
        assert_eq!(map["1.html"].iter().collect::<Vec<_>>(), vec!["2.html"]);
        assert_eq!(map["2.html"].iter().collect::<Vec<_>>(), vec!["1.html"]);
    }

    #[test]
    fn test_crawl_empty_directory() {
        let dir = TempDir::new().unwrap();
        let err = crawl(dir.path()).unwrap_err();
        assert!(matches!(err, LinkRankError::InvalidCorpus(_)));
    }
}
