//! Integration tests: both estimators on crawled corpora
//!
//! Builds small HTML corpora on disk, crawls them, and checks that the
//! sampling and iterative estimates agree.

use linkrank_core::{
    compare, crawl, iterate_rank, Corpus, IterativeEstimator, RankEstimator, RankMethod,
    SamplingEstimator,
};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_page(dir: &Path, name: &str, links: &[&str]) {
    let anchors: String = links
        .iter()
        .map(|l| format!("<li><a href=\"{}\">{}</a></li>\n", l, l))
        .collect();
    let html = format!(
        "<!DOCTYPE html>\n<html>\n<head><title>{}</title></head>\n<body>\n<ul>\n{}</ul>\n</body>\n</html>\n",
        name, anchors
    );
    fs::write(dir.join(name), html).unwrap();
}

fn setup_topic_corpus() -> TempDir {
    let dir = TempDir::new().unwrap();
    let pages: &[(&str, &[&str])] = &[
        ("ai.html", &["algorithms.html", "inference.html"]),
        ("algorithms.html", &["programming.html", "recursion.html"]),
        ("c.html", &["programming.html"]),
        ("inference.html", &["ai.html"]),
        ("logic.html", &["inference.html"]),
        ("programming.html", &["c.html", "python.html"]),
        ("python.html", &["ai.html", "programming.html"]),
        ("recursion.html", &[]),
    ];
    for (name, links) in pages {
        write_page(dir.path(), name, links);
    }
    dir
}

#[test]
fn test_crawled_corpus_shape() {
    let dir = setup_topic_corpus();
    let corpus = crawl(dir.path()).unwrap();

    assert_eq!(corpus.len(), 8);
    assert_eq!(corpus.link_count(), 11);
    let dangling: Vec<&str> = corpus.dangling().map(|i| corpus.page(i)).collect();
    assert_eq!(dangling, vec!["recursion.html"]);
}

#[test]
fn test_estimators_agree_on_crawled_corpus() {
    let dir = setup_topic_corpus();
    let corpus = crawl(dir.path()).unwrap();

    let estimators: Vec<Box<dyn RankEstimator>> = vec![
        Box::new(SamplingEstimator::new().with_samples(50_000).with_seed(11)),
        Box::new(IterativeEstimator::new()),
    ];
    let results: Vec<_> = estimators
        .iter()
        .map(|e| e.estimate(&corpus).unwrap())
        .collect();

    for result in &results {
        assert!((result.ranks.total() - 1.0).abs() < 1e-6);
        assert_eq!(result.ranks.len(), corpus.len());
    }

    let comparison = compare(&results[0], &results[1]).unwrap();
    assert!(
        comparison.agrees(0.02),
        "estimates diverge at {} by {}",
        comparison.worst_page,
        comparison.max_abs_diff
    );

    // logic.html has no incoming links, only the jump share and the
    // dangling page's spread reach it
    let logic = results[1].rank("logic.html").unwrap();
    assert!(logic > 0.0);
    let best = results[1]
        .ranks
        .iter()
        .map(|(_, rank)| rank)
        .fold(0.0, f64::max);
    assert!(logic < best);
}

#[test]
fn test_sampling_converges_toward_iteration() {
    let dir = setup_topic_corpus();
    let corpus = crawl(dir.path()).unwrap();
    let exact = IterativeEstimator::new()
        .with_threshold(1e-9)
        .run(&corpus)
        .unwrap();

    let diff_at = |samples: usize| {
        let sampled = SamplingEstimator::new()
            .with_samples(samples)
            .with_seed(2024)
            .run(&corpus)
            .unwrap();
        sampled.ranks.max_abs_diff(&exact.ranks)
    };

    let small = diff_at(100);
    let large = diff_at(100_000);
    assert!(large < small, "100 samples: {small}, 100000 samples: {large}");
    assert!(large < 0.01);
}

#[test]
fn test_two_page_cycle() {
    let corpus = Corpus::from_links(vec![("1.html", vec!["2.html"]), ("2.html", vec!["1.html"])])
        .unwrap();

    let iterated = iterate_rank(&corpus, 0.85).unwrap();
    assert!((iterated.rank("1.html").unwrap() - 0.5).abs() < 1e-9);
    assert!((iterated.rank("2.html").unwrap() - 0.5).abs() < 1e-9);
}

#[test]
fn test_single_dangling_page_both_methods() {
    let corpus = Corpus::from_links(vec![("1.html", Vec::<String>::new())]).unwrap();

    for damping in [0.0, 0.5, 0.85, 1.0] {
        for samples in [1, 10, 1000] {
            let sampled = SamplingEstimator::new()
                .with_damping(damping)
                .with_samples(samples)
                .run(&corpus)
                .unwrap();
            assert_eq!(sampled.rank("1.html"), Some(1.0));
            assert_eq!(sampled.method, RankMethod::Sampling { samples });
        }

        let iterated = iterate_rank(&corpus, damping).unwrap();
        assert!((iterated.rank("1.html").unwrap() - 1.0).abs() < 1e-12);
    }
}

#[test]
fn test_json_corpus_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("corpus.json");
    fs::write(
        &path,
        r#"{"1.html": ["2.html"], "2.html": ["1.html", "3.html"], "3.html": []}"#,
    )
    .unwrap();

    let corpus = Corpus::load(&path).unwrap();
    assert_eq!(corpus.len(), 3);

    let from_dir = Corpus::load(dir.path());
    assert!(from_dir.is_err(), "directory without .html pages is not a corpus");
}
