// Full analysis pipeline for a single dataset.

use serde::Serialize;
use std::path::Path;
use strata_engine::error::{AnalyticsError, Result};
use strata_engine::gaps::{self, ContentGapAnalysis};
use strata_engine::graph::SiteGraph;
use strata_engine::journey::{self, JourneyAnalysis};
use strata_engine::metrics::{self, StructuralMetrics};
use strata_engine::record::{self, PageRecord};
use strata_engine::recommend;
use strata_engine::score::{self, IaScore, NavigationScore};
use strata_engine::section::{self, SectionReport};
use strata_engine::seo::{self, SeoAudit};
use tracing::info;

/// The complete analysis document for one dataset. This is what the
/// report assembler renders and what external consumers (dashboards)
/// read; they recompute nothing.
#[derive(Debug, Clone, Serialize)]
pub struct SiteAnalysis {
    pub metrics: StructuralMetrics,
    pub navigation_efficiency: NavigationScore,
    pub information_architecture: IaScore,
    pub navigation_pattern: String,
    pub sections: SectionReport,
    pub user_journeys: JourneyAnalysis,
    pub content_gaps: ContentGapAnalysis,
    pub seo_audit: SeoAudit,
    pub recommendations: Vec<String>,
}

impl SiteAnalysis {
    /// The serialization boundary: everything downstream works from this
    /// value. Applied once per analysis, never per component.
    pub fn to_json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}

/// Load, normalize, and analyze a dataset file.
pub fn analyze_dataset(path: &Path) -> Result<SiteAnalysis> {
    let records = record::load_dataset(path)?;
    analyze_records(&records)
}

/// Run every analysis stage over already-normalized records. The graph and
/// all derived structures live only for the duration of this call.
pub fn analyze_records(records: &[PageRecord]) -> Result<SiteAnalysis> {
    if records.is_empty() {
        return Err(AnalyticsError::EmptyDataset);
    }

    let graph = SiteGraph::build(records);
    let metrics = metrics::compute_metrics(records);
    let navigation_efficiency = score::navigation_efficiency(&metrics);
    let information_architecture = score::information_architecture(records, &metrics);
    let navigation_pattern = recommend::navigation_pattern(&metrics).to_string();
    let sections = section::identify_sections(records, &graph);
    let user_journeys = journey::analyze_journeys(records, &graph);
    let content_gaps = gaps::analyze_gaps(records);
    let seo_audit = seo::audit_seo(records);
    let recommendations = recommend::generate_recommendations(&metrics, records);

    info!(
        "Analyzed {} pages: nav {} / ia {}",
        metrics.total_pages, navigation_efficiency.total, information_architecture.total_score
    );

    Ok(SiteAnalysis {
        metrics,
        navigation_efficiency,
        information_architecture,
        navigation_pattern,
        sections,
        user_journeys,
        content_gaps,
        seo_audit,
        recommendations,
    })
}
