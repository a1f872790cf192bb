// Threshold rules that turn metrics into prioritized advice. Rules are
// evaluated independently and in a fixed order; several may fire.

use crate::metrics::StructuralMetrics;
use crate::record::PageRecord;

pub const DEEP_HIERARCHY_LEVELS: u32 = 4;
pub const ORPHAN_WARNING_PERCENTAGE: f64 = 20.0;
pub const HIGH_FAN_OUT: f64 = 15.0;
pub const LOW_FAN_OUT: f64 = 3.0;
pub const WIDE_BREADTH_FACTOR: f64 = 20.0;
pub const DEEP_PATTERN_DEPTH: u32 = 3;

/// Classify the navigation shape; `wide` takes precedence over `deep`.
pub fn navigation_pattern(metrics: &StructuralMetrics) -> &'static str {
    if metrics.breadth_factor > WIDE_BREADTH_FACTOR {
        "wide"
    } else if metrics.max_depth > DEEP_PATTERN_DEPTH {
        "deep"
    } else {
        "balanced"
    }
}

pub fn generate_recommendations(
    metrics: &StructuralMetrics,
    records: &[PageRecord],
) -> Vec<String> {
    let mut recommendations = Vec::new();

    if metrics.max_depth > DEEP_HIERARCHY_LEVELS {
        recommendations.push(
            "Consider reducing navigation depth. Deep hierarchies (>4 levels) can \
             confuse users."
                .to_string(),
        );
    }

    let orphan_percentage = metrics.orphan_ratio * 100.0;
    if orphan_percentage > ORPHAN_WARNING_PERCENTAGE {
        recommendations.push(format!(
            "High percentage of orphan pages ({orphan_percentage:.1}%). Add internal \
             links to improve discoverability."
        ));
    }

    if metrics.average_fan_out > HIGH_FAN_OUT {
        recommendations.push(
            "High fan-out ratio. Consider grouping related pages into subsections."
                .to_string(),
        );
    }

    if metrics.average_fan_out < LOW_FAN_OUT && metrics.max_depth > 2 {
        recommendations.push(
            "Low fan-out ratio. Consider flattening the navigation structure."
                .to_string(),
        );
    }

    match navigation_pattern(metrics) {
        "deep" => recommendations.push(
            "Site has deep navigation. Consider adding breadcrumbs and improving \
             top-level navigation."
                .to_string(),
        ),
        "wide" => recommendations.push(
            "Site has wide navigation. Consider organizing content into logical \
             categories."
                .to_string(),
        ),
        _ => {}
    }

    let failed_pages = records.iter().filter(|r| !r.is_success()).count();
    if failed_pages > 0 {
        recommendations.push(format!(
            "Found {failed_pages} pages with errors. Review and fix broken links."
        ));
    }

    if recommendations.is_empty() {
        recommendations
            .push("Site structure looks good! No major issues detected.".to_string());
    }

    recommendations
}
