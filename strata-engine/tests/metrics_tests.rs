// Tests for structural metrics

use strata_engine::metrics::{StructuralMetrics, compute_metrics};
use strata_engine::record::PageRecord;

fn page(url: &str, parent: &str, depth: u32, child_count: u32) -> PageRecord {
    PageRecord {
        url: url.to_string(),
        parent_url: parent.to_string(),
        depth,
        child_count,
        status_code: Some(200),
        title: format!("Page {url}"),
        description: String::new(),
        heading: String::new(),
    }
}

// The four-page reference site: root with two children, one grandchild.
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

// ============================================================================
// Totals and Distributions
// ============================================================================

#[test]
fn test_totals_and_depth_distribution() {
    let metrics = compute_metrics(&small_site());

    assert_eq!(metrics.total_pages, 4);
    assert_eq!(metrics.max_depth, 2);
    let levels: Vec<(u32, usize)> = metrics
        .depth_distribution
        .iter()
        .map(|(&d, &c)| (d, c))
        .collect();
    assert_eq!(levels, [(0, 1), (1, 2), (2, 1)]);
}

#[test]
fn test_depth_mean_and_variance() {
    let metrics = compute_metrics(&small_site());

    // depths 0, 1, 1, 2: mean 1.0, sample variance 2/3
    assert!((metrics.average_depth - 1.0).abs() < 1e-9);
    assert!((metrics.depth_variance - 2.0 / 3.0).abs() < 1e-9);
}

#[test]
fn test_variance_single_record_is_zero() {
    let metrics = compute_metrics(&[page("https://site.test/", "", 0, 0)]);
    assert_eq!(metrics.depth_variance, 0.0);
    assert_eq!(metrics.child_count_variance, 0.0);
}

#[test]
fn test_orphan_count_and_ratio() {
    let metrics = compute_metrics(&small_site());

    assert_eq!(metrics.orphan_count, 2);
    assert!((metrics.orphan_ratio - 0.5).abs() < 1e-9);
}

// ============================================================================
// Fan-out
// ============================================================================

#[test]
fn test_fan_out_per_level() {
    let metrics = compute_metrics(&small_site());

    // level 0: 2 pages at depth 1 over 1 at depth 0; level 1: 1 over 2
    assert!((metrics.fan_out_by_level[&0] - 2.0).abs() < 1e-9);
    assert!((metrics.fan_out_by_level[&1] - 0.5).abs() < 1e-9);
    assert!((metrics.average_fan_out - 1.25).abs() < 1e-9);
}

#[test]
fn test_fan_out_skips_empty_denominator_levels() {
    // Depth 1 is unpopulated: level 0 has no fan-out entry and level 1 is
    // skipped rather than counted as zero.
    let records = vec![
        page("https://site.test/", "", 0, 1),
        page("https://site.test/deep", "https://site.test/", 2, 0),
    ];
    let metrics = compute_metrics(&records);

    assert!(!metrics.fan_out_by_level.contains_key(&1));
    assert_eq!(metrics.fan_out_by_level.len(), 1);
    assert!((metrics.fan_out_by_level[&0] - 0.0).abs() < 1e-9);
}

#[test]
fn test_fan_out_flat_site_is_empty() {
    let records = vec![
        page("https://site.test/", "", 0, 0),
        page("https://site.test/a", "", 0, 0),
    ];
    let metrics = compute_metrics(&records);

    assert!(metrics.fan_out_by_level.is_empty());
    assert_eq!(metrics.average_fan_out, 0.0);
}

// ============================================================================
// Top Pages
// ============================================================================

#[test]
fn test_top_pages_sorted_by_link_count() {
    let metrics = compute_metrics(&small_site());

    assert_eq!(metrics.top_pages[0].url, "https://site.test/");
    assert_eq!(metrics.top_pages[0].link_count, 2);
    assert_eq!(metrics.top_pages[1].url, "https://site.test/products");
}

#[test]
fn test_top_pages_ties_keep_row_order() {
    let records = vec![
        page("https://site.test/x", "", 1, 7),
        page("https://site.test/y", "", 1, 7),
        page("https://site.test/z", "", 1, 7),
    ];
    let metrics = compute_metrics(&records);

    let urls: Vec<&str> = metrics.top_pages.iter().map(|p| p.url.as_str()).collect();
    assert_eq!(
        urls,
        [
            "https://site.test/x",
            "https://site.test/y",
            "https://site.test/z"
        ]
    );
}

#[test]
fn test_top_pages_capped_at_ten() {
    let records: Vec<PageRecord> = (0..15)
        .map(|i| page(&format!("https://site.test/p{i}"), "", 1, i))
        .collect();
    let metrics = compute_metrics(&records);

    assert_eq!(metrics.top_pages.len(), 10);
    assert_eq!(metrics.top_pages[0].link_count, 14);
}

// ============================================================================
// Breadth and Balance
// ============================================================================

#[test]
fn test_breadth_factor() {
    let metrics = compute_metrics(&small_site());
    // 4 pages over max depth 2
    assert!((metrics.breadth_factor - 2.0).abs() < 1e-9);
}

#[test]
fn test_breadth_factor_zero_depth() {
    let metrics = compute_metrics(&[page("https://site.test/", "", 0, 0)]);
    assert_eq!(metrics.breadth_factor, 0.0);
}

#[test]
fn test_average_pages_per_section() {
    let metrics = compute_metrics(&small_site());
    // 4 pages over 2 depth-1 sections
    assert!((metrics.average_pages_per_section - 2.0).abs() < 1e-9);
}

#[test]
fn test_hierarchy_balance() {
    let metrics = compute_metrics(&small_site());
    assert_eq!(metrics.hierarchy_balance, "balanced");

    let shallow = vec![
        page("https://site.test/", "", 0, 1),
        page("https://site.test/a", "https://site.test/", 1, 0),
    ];
    assert_eq!(compute_metrics(&shallow).hierarchy_balance, "unbalanced");
}

// ============================================================================
// Data Quality
// ============================================================================

#[test]
fn test_data_quality_counts() {
    let mut records = small_site();
    records[1].status_code = Some(404);
    records[2].status_code = None;
    records[3].title = String::new();

    let quality = compute_metrics(&records).data_quality;
    assert_eq!(quality.total_pages, 4);
    assert_eq!(quality.successful_pages, 2);
    assert_eq!(quality.failed_pages, 2);
    assert!((quality.success_rate - 50.0).abs() < 1e-9);
    assert_eq!(quality.pages_with_title, 3);
}

// ============================================================================
// Serialization
// ============================================================================

#[test]
fn test_metrics_serialize_to_json() {
    let metrics = compute_metrics(&small_site());
    let json = serde_json::to_string(&metrics).unwrap();

    assert!(json.contains("\"total_pages\":4"));
    assert!(json.contains("\"orphan_count\":2"));
}

#[test]
fn test_metrics_are_deterministic() {
    let a: StructuralMetrics = compute_metrics(&small_site());
    let b: StructuralMetrics = compute_metrics(&small_site());

    assert_eq!(
        serde_json::to_string(&a).unwrap(),
        serde_json::to_string(&b).unwrap()
    );
}
