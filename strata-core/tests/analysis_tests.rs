// Tests for the full analysis pipeline

use std::io::Write;
use std::path::PathBuf;
use strata_core::analysis::{analyze_dataset, analyze_records};
use strata_engine::error::AnalyticsError;
use strata_engine::record::PageRecord;
use tempfile::NamedTempFile;

fn page(url: &str, parent: &str, depth: u32, child_count: u32) -> PageRecord {
    PageRecord {
        url: url.to_string(),
        parent_url: parent.to_string(),
        depth,
        child_count,
        status_code: Some(200),
        title: format!("Title {depth}"),
        description: "desc".to_string(),
        heading: "h1".to_string(),
    }
}

fn small_site() -> Vec<PageRecord> {
    vec![
        page("https://site.test/", "", 0, 2),
        page("https://site.test/about", "https://site.test/", 1, 0),
        page("https://site.test/products", "https://site.test/", 1, 1),
        page(
            "https://site.test/products/a",
            "https://site.test/products",
            2,
            0,
        ),
    ]
}

fn dataset_file() -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    write!(
        file,
        r#"[
            {{"url": "https://site.test/", "parent_url": "", "depth": 0, "child_count": 2, "status_code": 200, "title": "Home page"}},
            {{"url": "https://site.test/about", "parent_url": "https://site.test/", "depth": 1, "child_count": 0, "status_code": 200, "title": "About us"}},
            {{"url": "https://site.test/products", "parent_url": "https://site.test/", "depth": 1, "child_count": 1, "status_code": 200, "title": "Products"}},
            {{"url": "https://site.test/products/a", "parent_url": "https://site.test/products", "depth": 2, "child_count": 0, "status_code": 404, "title": "Widget A"}}
        ]"#
    )
    .unwrap();
    file
}

// ============================================================================
// Pipeline Tests
// ============================================================================

#[test]
fn test_analyze_records_populates_every_stage() {
    let analysis = analyze_records(&small_site()).unwrap();

    assert_eq!(analysis.metrics.total_pages, 4);
    assert_eq!(analysis.metrics.max_depth, 2);
    assert!(analysis.navigation_efficiency.total > 0.0);
    assert!(analysis.information_architecture.total_score > 0.0);
    assert_eq!(analysis.navigation_pattern, "balanced");
    assert_eq!(analysis.sections.content_distribution.sections, 2);
    assert!(!analysis.user_journeys.most_common_paths.is_empty());
    assert!(!analysis.content_gaps.orphan_pages.is_empty());
    assert_eq!(analysis.seo_audit.metadata.total_pages, 4);
    assert!(!analysis.recommendations.is_empty());
}

#[test]
fn test_analyze_records_empty_is_error() {
    let result = analyze_records(&[]);
    assert!(matches!(result, Err(AnalyticsError::EmptyDataset)));
}

#[test]
fn test_analyze_dataset_from_file() {
    let file = dataset_file();
    let analysis = analyze_dataset(file.path()).unwrap();

    assert_eq!(analysis.metrics.total_pages, 4);
    assert_eq!(analysis.metrics.data_quality.failed_pages, 1);
}

#[test]
fn test_analyze_dataset_missing_file() {
    let result = analyze_dataset(&PathBuf::from("/nonexistent/crawl.json"));
    assert!(matches!(result, Err(AnalyticsError::DatasetNotFound(_))));
}

#[test]
fn test_rootless_dataset_degrades_to_empty_journeys() {
    let records = vec![
        page("https://site.test/a", "https://site.test/", 1, 1),
        page("https://site.test/b", "https://site.test/a", 2, 0),
    ];
    let analysis = analyze_records(&records).unwrap();

    assert!(analysis.user_journeys.most_common_paths.is_empty());
    assert_eq!(analysis.metrics.total_pages, 2);
}

// ============================================================================
// Serialization Boundary
// ============================================================================

#[test]
fn test_to_json_exposes_document_fields() {
    let analysis = analyze_records(&small_site()).unwrap();
    let document = analysis.to_json().unwrap();

    assert!(document.get("metrics").is_some());
    assert!(document.get("navigation_efficiency").is_some());
    assert!(document.get("information_architecture").is_some());
    assert!(document.get("user_journeys").is_some());
    assert!(document.get("content_gaps").is_some());
    assert!(document.get("seo_audit").is_some());
    assert!(document.get("recommendations").is_some());

    let total = document["metrics"]["total_pages"].as_u64().unwrap();
    assert_eq!(total, 4);
}

#[test]
fn test_pipeline_is_idempotent() {
    let file = dataset_file();

    let first = analyze_dataset(file.path()).unwrap();
    let second = analyze_dataset(file.path()).unwrap();

    let first_json = serde_json::to_string(&first.to_json().unwrap()).unwrap();
    let second_json = serde_json::to_string(&second.to_json().unwrap()).unwrap();
    assert_eq!(first_json, second_json);
}

#[test]
fn test_scores_match_between_document_and_struct() {
    let analysis = analyze_records(&small_site()).unwrap();
    let document = analysis.to_json().unwrap();

    assert_eq!(
        document["navigation_efficiency"]["total"].as_f64().unwrap(),
        analysis.navigation_efficiency.total
    );
    assert_eq!(
        document["information_architecture"]["total_score"]
            .as_f64()
            .unwrap(),
        analysis.information_architecture.total_score
    );
}
