// Tests for recommendation rules and navigation pattern classification

use strata_engine::metrics::compute_metrics;
use strata_engine::record::PageRecord;
use strata_engine::recommend::{generate_recommendations, navigation_pattern};

fn page(url: &str, parent: &str, depth: u32, child_count: u32) -> PageRecord {
    PageRecord {
        url: url.to_string(),
        parent_url: parent.to_string(),
        depth,
        child_count,
        status_code: Some(200),
        title: String::new(),
        description: String::new(),
        heading: String::new(),
    }
}

fn chain(levels: u32) -> Vec<PageRecord> {
    let mut records = vec![page("https://site.test/0", "", 0, 1)];
    for i in 1..=levels {
        records.push(page(
            &format!("https://site.test/{i}"),
            &format!("https://site.test/{}", i - 1),
            i,
            1,
        ));
    }
    records
}

// ============================================================================
// Navigation Pattern
// ============================================================================

#[test]
fn test_pattern_deep() {
    let metrics = compute_metrics(&chain(5));
    assert_eq!(navigation_pattern(&metrics), "deep");
}

#[test]
fn test_pattern_wide() {
    let mut records = vec![page("https://site.test/", "", 0, 30)];
    for i in 0..30 {
        records.push(page(
            &format!("https://site.test/p{i}"),
            "https://site.test/",
            1,
            1,
        ));
    }
    let metrics = compute_metrics(&records);
    // breadth factor 31 pages / depth 1
    assert_eq!(navigation_pattern(&metrics), "wide");
}

#[test]
fn test_pattern_balanced() {
    let records = vec![
        page("https://site.test/", "", 0, 2),
        page("https://site.test/a", "https://site.test/", 1, 0),
        page("https://site.test/b", "https://site.test/", 1, 0),
    ];
    let metrics = compute_metrics(&records);
    assert_eq!(navigation_pattern(&metrics), "balanced");
}

#[test]
fn test_wide_takes_precedence_over_deep() {
    let mut records = chain(4);
    for i in 0..100 {
        records.push(page(
            &format!("https://site.test/wide/{i}"),
            "https://site.test/0",
            1,
            1,
        ));
    }
    let metrics = compute_metrics(&records);
    assert_eq!(navigation_pattern(&metrics), "wide");
}

// ============================================================================
// Threshold Rules
// ============================================================================

#[test]
fn test_depth_warning_fires_past_four_levels() {
    let records = chain(5);
    let metrics = compute_metrics(&records);
    let recommendations = generate_recommendations(&metrics, &records);

    assert!(
        recommendations
            .iter()
            .any(|r| r.starts_with("Consider reducing navigation depth"))
    );
}

#[test]
fn test_orphan_warning_includes_percentage() {
    let records = vec![
        page("https://site.test/", "", 0, 3),
        page("https://site.test/a", "https://site.test/", 1, 0),
        page("https://site.test/b", "https://site.test/", 1, 0),
        page("https://site.test/c", "https://site.test/", 1, 0),
    ];
    let metrics = compute_metrics(&records);
    let recommendations = generate_recommendations(&metrics, &records);

    assert!(
        recommendations
            .iter()
            .any(|r| r.contains("orphan pages (75.0%)"))
    );
}

#[test]
fn test_high_fan_out_rule() {
    let mut records = vec![page("https://site.test/", "", 0, 20)];
    for i in 0..20 {
        records.push(page(
            &format!("https://site.test/p{i}"),
            "https://site.test/",
            1,
            1,
        ));
    }
    let metrics = compute_metrics(&records);
    let recommendations = generate_recommendations(&metrics, &records);

    assert!(
        recommendations
            .iter()
            .any(|r| r.starts_with("High fan-out ratio"))
    );
}

#[test]
fn test_low_fan_out_rule_needs_depth() {
    let records = chain(3);
    let metrics = compute_metrics(&records);
    let recommendations = generate_recommendations(&metrics, &records);

    assert!(
        recommendations
            .iter()
            .any(|r| r.starts_with("Low fan-out ratio"))
    );

    // Shallow sites with low fan-out are left alone.
    let shallow = vec![
        page("https://site.test/", "", 0, 1),
        page("https://site.test/a", "https://site.test/", 1, 0),
    ];
    let shallow_metrics = compute_metrics(&shallow);
    let shallow_recommendations = generate_recommendations(&shallow_metrics, &shallow);
    assert!(
        !shallow_recommendations
            .iter()
            .any(|r| r.starts_with("Low fan-out ratio"))
    );
}

#[test]
fn test_broken_link_warning_counts_failures() {
    let mut records = vec![
        page("https://site.test/", "", 0, 2),
        page("https://site.test/a", "https://site.test/", 1, 1),
        page("https://site.test/b", "https://site.test/", 1, 1),
    ];
    records[1].status_code = Some(404);
    records[2].status_code = None;

    let metrics = compute_metrics(&records);
    let recommendations = generate_recommendations(&metrics, &records);

    assert!(
        recommendations
            .iter()
            .any(|r| r.starts_with("Found 2 pages with errors"))
    );
}

#[test]
fn test_multiple_rules_fire_together() {
    // Deep chain of orphan-heavy pages trips several rules at once.
    let mut records = chain(5);
    for record in &mut records {
        record.child_count = 0;
    }
    let metrics = compute_metrics(&records);
    let recommendations = generate_recommendations(&metrics, &records);

    assert!(recommendations.len() >= 3);
}

#[test]
fn test_healthy_site_gets_single_positive_message() {
    let mut records = vec![page("https://site.test/", "", 0, 12)];
    for i in 0..12 {
        records.push(page(
            &format!("https://site.test/s{i}"),
            "https://site.test/",
            1,
            12,
        ));
    }
    for i in 0..12 {
        records.push(page(
            &format!("https://site.test/s0/leaf{i}"),
            "https://site.test/s0",
            2,
            10,
        ));
    }
    let metrics = compute_metrics(&records);
    let recommendations = generate_recommendations(&metrics, &records);

    assert_eq!(
        recommendations,
        ["Site structure looks good! No major issues detected."]
    );
}
