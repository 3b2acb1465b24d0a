//! Immutable link corpus consumed by the ranking estimators
//!
//! A corpus maps every page to the set of pages it links to. It is validated
//! once on construction and read-only afterwards. Pages are kept in ascending
//! order so that every estimator enumerates them the same way.

pub mod crawl;

use crate::error::{LinkRankError, Result};
use std::collections::{BTreeMap, BTreeSet};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

pub use crawl::{crawl, extract_links};

/// Adjacency map form of a corpus: page -> pages it links to
pub type LinkMap = BTreeMap<String, BTreeSet<String>>;

/// A validated, immutable set of pages and their outbound links
///
/// Pages are addressed either by name or by their dense index in
/// [`Corpus::pages`]. Indices are stable for the lifetime of the corpus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Corpus {
    pages: Vec<String>,
    outbound: Vec<Vec<usize>>,
    inbound: Vec<Vec<usize>>,
}

impl Corpus {
    /// Build a corpus from an adjacency map
    ///
    /// Fails with [`LinkRankError::InvalidCorpus`] if the map is empty, a
    /// page links to itself, or a link target is not itself a page.
    pub fn new(links: LinkMap) -> Result<Self> {
        if links.is_empty() {
            return Err(LinkRankError::InvalidCorpus(
                "corpus has no pages".to_string(),
            ));
        }

        let pages: Vec<String> = links.keys().cloned().collect();
        let mut outbound = vec![Vec::new(); pages.len()];
        let mut inbound = vec![Vec::new(); pages.len()];

        for (source, (page, targets)) in links.iter().enumerate() {
            for target in targets {
                if target == page {
                    return Err(LinkRankError::InvalidCorpus(format!(
                        "page '{}' links to itself",
                        page
                    )));
                }
                let dest = pages.binary_search(target).map_err(|_| {
                    LinkRankError::InvalidCorpus(format!(
                        "page '{}' links to unknown page '{}'",
                        page, target
                    ))
                })?;
                outbound[source].push(dest);
                inbound[dest].push(source);
            }
        }

        tracing::debug!(
            pages = pages.len(),
            links = outbound.iter().map(Vec::len).sum::<usize>(),
            "Built corpus"
        );

        Ok(Self {
            pages,
            outbound,
            inbound,
        })
    }

    /// Build a corpus from any iterator of `(page, links)` pairs
    ///
    /// Repeated pages have their link sets merged.
    pub fn from_links<I, P, L, T>(links: I) -> Result<Self>
    where
        I: IntoIterator<Item = (P, L)>,
        P: Into<String>,
        L: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let mut map = LinkMap::new();
        for (page, targets) in links {
            map.entry(page.into())
                .or_default()
                .extend(targets.into_iter().map(Into::into));
        }
        Self::new(map)
    }

    /// Start an empty builder
    pub fn builder() -> CorpusBuilder {
        CorpusBuilder::new()
    }

    /// Load a corpus from a path: a directory of `.html` pages or a JSON
    /// adjacency file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(LinkRankError::CorpusNotFound(path.display().to_string()));
        }
        if path.is_dir() {
            crawl(path)
        } else {
            Self::from_json_file(path)
        }
    }

    /// Load a corpus from a JSON object of `{"page": ["link", ...]}`
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => {
                LinkRankError::CorpusNotFound(path.display().to_string())
            }
            _ => LinkRankError::Io(e),
        })?;
        Self::from_json_reader(BufReader::new(file))
    }

    /// Parse a corpus from JSON read from `reader`
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self> {
        let links: LinkMap = serde_json::from_reader(reader)?;
        Self::new(links)
    }

    /// Convert back to the adjacency map form
    pub fn to_link_map(&self) -> LinkMap {
        self.pages
            .iter()
            .zip(&self.outbound)
            .map(|(page, targets)| {
                let links = targets.iter().map(|&t| self.pages[t].clone()).collect();
                (page.clone(), links)
            })
            .collect()
    }

    /// Number of pages (`N`)
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Always false for a validated corpus
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// All pages in enumeration order
    pub fn pages(&self) -> &[String] {
        &self.pages
    }

    /// Name of the page at `index`
    pub fn page(&self, index: usize) -> &str {
        &self.pages[index]
    }

    /// Index of a page by name
    pub fn index_of(&self, page: &str) -> Option<usize> {
        self.pages.binary_search_by(|p| p.as_str().cmp(page)).ok()
    }

    /// Whether `page` is part of this corpus
    pub fn contains(&self, page: &str) -> bool {
        self.index_of(page).is_some()
    }

    /// Indices of the pages linked from `index`, ascending
    pub fn outbound(&self, index: usize) -> &[usize] {
        &self.outbound[index]
    }

    /// Indices of the pages linking to `index`, ascending
    pub fn inbound(&self, index: usize) -> &[usize] {
        &self.inbound[index]
    }

    /// Names of the pages linked from `page`, or `None` for an unknown page
    pub fn links(&self, page: &str) -> Option<impl Iterator<Item = &str> + '_> {
        let index = self.index_of(page)?;
        Some(self.outbound[index].iter().map(move |&t| self.page(t)))
    }

    /// Out-degree of the page at `index`
    pub fn out_degree(&self, index: usize) -> usize {
        self.outbound[index].len()
    }

    /// Whether the page at `index` has no outbound links
    pub fn is_dangling(&self, index: usize) -> bool {
        self.outbound[index].is_empty()
    }

    /// Indices of all dangling pages
    pub fn dangling(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.len()).filter(move |&i| self.is_dangling(i))
    }

    /// Total number of links
    pub fn link_count(&self) -> usize {
        self.outbound.iter().map(Vec::len).sum()
    }

    /// Resolve a page name, failing for pages outside the corpus
    pub(crate) fn require(&self, page: &str) -> Result<usize> {
        self.index_of(page).ok_or_else(|| {
            LinkRankError::InvalidCorpus(format!("page '{}' is not in the corpus", page))
        })
    }
}

/// Incremental corpus construction
///
/// Nothing is validated until [`CorpusBuilder::build`].
#[derive(Debug, Clone, Default)]
pub struct CorpusBuilder {
    links: LinkMap,
}

impl CorpusBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a page with no links (yet)
    pub fn page(mut self, page: impl Into<String>) -> Self {
        self.links.entry(page.into()).or_default();
        self
    }

    /// Add a link, registering `from` as a page
    ///
    /// `to` must be added as a page separately for the corpus to validate.
    pub fn link(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.links.entry(from.into()).or_default().insert(to.into());
        self
    }

    /// Validate and freeze the corpus
    pub fn build(self) -> Result<Corpus> {
        Corpus::new(self.links)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_corpus() -> Corpus {
        Corpus::builder()
            .link("1.html", "2.html")
            .link("2.html", "1.html")
            .link("2.html", "3.html")
            .page("3.html")
            .build()
            .unwrap()
    }

    #[test]
    fn test_pages_are_sorted() {
        let corpus = Corpus::from_links(vec![
            ("c.html", vec!["a.html"]),
            ("a.html", vec![]),
            ("b.html", vec!["c.html", "a.html"]),
        ])
        .unwrap();

        assert_eq!(corpus.pages(), &["a.html", "b.html", "c.html"]);
        assert_eq!(corpus.index_of("b.html"), Some(1));
        assert_eq!(corpus.outbound(1), &[0, 2]);
    }

    #[test]
    fn test_inbound_and_dangling() {
        let corpus = sample_corpus();

        assert_eq!(corpus.len(), 3);
        assert_eq!(corpus.link_count(), 3);
        assert_eq!(corpus.inbound(0), &[1]);
        assert_eq!(corpus.inbound(2), &[1]);
        assert!(corpus.is_dangling(2));
        assert_eq!(corpus.dangling().collect::<Vec<_>>(), vec![2]);

        let links: Vec<&str> = corpus.links("2.html").unwrap().collect();
        assert_eq!(links, vec!["1.html", "3.html"]);
        assert!(corpus.links("missing.html").is_none());
    }

    #[test]
    fn test_empty_corpus_rejected() {
        let err = Corpus::new(LinkMap::new()).unwrap_err();
        assert!(matches!(err, LinkRankError::InvalidCorpus(_)));
    }

    #[test]
    fn test_unknown_target_rejected() {
        let err = Corpus::builder()
            .link("1.html", "2.html")
            .build()
            .unwrap_err();

        match err {
            LinkRankError::InvalidCorpus(msg) => assert!(msg.contains("2.html")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_self_link_rejected() {
        let err = Corpus::builder()
            .link("1.html", "1.html")
            .build()
            .unwrap_err();
        assert!(matches!(err, LinkRankError::InvalidCorpus(_)));
    }

    #[test]
    fn test_json_round_trip() {
        let json = r#"{"1.html": ["2.html"], "2.html": ["1.html"], "3.html": []}"#;
        let corpus = Corpus::from_json_reader(json.as_bytes()).unwrap();

        assert_eq!(corpus.len(), 3);
        let map = corpus.to_link_map();
        assert!(map["1.html"].contains("2.html"));
        assert!(map["3.html"].is_empty());
        assert_eq!(Corpus::new(map).unwrap(), corpus);
    }

    #[test]
    fn test_load_missing_path() {
        let err = Corpus::load(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, LinkRankError::CorpusNotFound(_)));
    }
}
