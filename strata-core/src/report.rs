// Report generation from analysis documents.

use crate::analysis::SiteAnalysis;
use crate::compare::SiteComparison;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ReportFormat {
    Text,
    Json,
}

impl ReportFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "text" => Some(ReportFormat::Text),
            "json" => Some(ReportFormat::Json),
            _ => None,
        }
    }
}

pub fn generate_text_report(analysis: &SiteAnalysis) -> String {
    let mut report = String::new();
    let metrics = &analysis.metrics;
    let quality = &metrics.data_quality;

    // Header
    report.push_str(&heavy_rule());
    report.push_str("STRATA SITE ANALYTICS - COMPREHENSIVE INSIGHTS REPORT\n");
    report.push_str(&heavy_rule());
    report.push('\n');

    // Executive Summary
    report.push_str("EXECUTIVE SUMMARY\n");
    report.push_str(&light_rule());
    report.push_str(&format!("✓ Total Pages Analyzed: {}\n", metrics.total_pages));
    report.push_str(&format!(
        "✓ Navigation Efficiency Score: {}/100\n",
        analysis.navigation_efficiency.total
    ));
    report.push_str(&format!(
        "✓ Information Architecture Score: {}/100\n",
        analysis.information_architecture.total_score
    ));
    report.push_str(&format!("✓ Site Depth: {} levels\n", metrics.max_depth));
    report.push_str(&format!(
        "✓ Main Sections Identified: {}\n",
        analysis.sections.content_distribution.sections
    ));
    report.push('\n');

    // Site Structure Overview
    report.push_str("SITE STRUCTURE OVERVIEW\n");
    report.push_str(&light_rule());
    report.push_str(&format!("Maximum Depth: {} levels\n", metrics.max_depth));
    report.push_str(&format!("Average Depth: {:.2}\n", metrics.average_depth));
    report.push('\n');
    report.push_str("Pages by Depth Level:\n");
    for (depth, count) in &metrics.depth_distribution {
        report.push_str(&format!("  Level {}: {} pages\n", depth, count));
    }
    report.push('\n');
    report.push_str(&format!(
        "Main Sections: {}\n",
        analysis.sections.content_distribution.sections
    ));
    report.push_str(&format!(
        "Average Pages per Section: {:.2}\n",
        analysis.sections.content_distribution.pages_per_section_avg
    ));
    report.push('\n');

    // Navigation Efficiency Assessment
    report.push_str("NAVIGATION EFFICIENCY ASSESSMENT\n");
    report.push_str(&light_rule());
    let nav = &analysis.navigation_efficiency;
    report.push_str(&format!("Overall Score: {}/100\n", nav.total));
    report.push('\n');
    report.push_str("Score Breakdown:\n");
    report.push_str(&format!("  Depth Score: {:.2}/25\n", nav.depth_score));
    report.push_str(&format!(
        "  Link Distribution Score: {:.2}/25\n",
        nav.link_distribution_score
    ));
    report.push_str(&format!("  Orphan Page Score: {:.2}/25\n", nav.orphan_score));
    report.push_str(&format!(
        "  Connectivity Score: {:.2}/25\n",
        nav.connectivity_score
    ));
    report.push('\n');
    report.push_str(&format!(
        "Navigation Pattern: {}\n",
        analysis.navigation_pattern.to_uppercase()
    ));
    report.push('\n');

    // Information Architecture Assessment
    report.push_str("INFORMATION ARCHITECTURE ASSESSMENT\n");
    report.push_str(&light_rule());
    let ia = &analysis.information_architecture;
    report.push_str(&format!("Overall Score: {}/100\n", ia.total_score));
    report.push('\n');
    report.push_str("Score Breakdown:\n");
    report.push_str(&format!(
        "  Depth Score: {:.2}/25\n",
        ia.components.depth_score
    ));
    report.push_str(&format!(
        "  Balance Score: {:.2}/25\n",
        ia.components.balance_score
    ));
    report.push_str(&format!(
        "  Connectivity Score: {:.2}/25\n",
        ia.components.connectivity_score
    ));
    report.push_str(&format!(
        "  Reachability Score: {:.2}/25\n",
        ia.components.reachability_score
    ));
    report.push('\n');

    // Top Pages Analysis
    report.push_str("TOP PAGES ANALYSIS\n");
    report.push_str(&light_rule());
    report.push_str("Most Important Pages (by link count):\n");
    report.push('\n');
    for (idx, page) in metrics.top_pages.iter().take(5).enumerate() {
        let title = if page.title.is_empty() {
            "No Title"
        } else {
            &page.title
        };
        report.push_str(&format!("{}. {}\n", idx + 1, title));
        report.push_str(&format!("   URL: {}\n", page.url));
        report.push_str(&format!(
            "   Links: {} | Depth: {}\n",
            page.link_count, page.depth
        ));
        report.push('\n');
    }

    // Recommendations
    report.push_str("RECOMMENDATIONS\n");
    report.push_str(&light_rule());
    for (idx, recommendation) in analysis.recommendations.iter().enumerate() {
        report.push_str(&format!("{}. {}\n", idx + 1, recommendation));
    }
    report.push('\n');

    // Data Quality Metrics
    report.push_str("DATA QUALITY METRICS\n");
    report.push_str(&light_rule());
    report.push_str(&format!("Total Pages Crawled: {}\n", quality.total_pages));
    report.push_str(&format!(
        "Successfully Fetched: {} ({:.1}%)\n",
        quality.successful_pages, quality.success_rate
    ));
    report.push_str(&format!(
        "Failed Fetches: {} ({:.1}%)\n",
        quality.failed_pages,
        100.0 - quality.success_rate
    ));
    report.push_str(&format!(
        "Pages with Titles: {} ({:.1}%)\n",
        quality.pages_with_title, quality.title_coverage
    ));
    report.push_str(&format!(
        "Pages with Descriptions: {} ({:.1}%)\n",
        quality.pages_with_description, quality.description_coverage
    ));
    report.push('\n');

    // Footer
    report.push_str(&heavy_rule());
    report.push_str("Report generated by Strata Site Analytics\n");
    report.push_str(&heavy_rule());

    report
}

pub fn generate_json_report(analysis: &SiteAnalysis) -> Result<String, serde_json::Error> {
    let json_report = serde_json::json!({
        "report": {
            "metadata": {
                "generator": "Strata",
                "version": env!("CARGO_PKG_VERSION"),
                "generated_at": chrono::Utc::now().to_rfc3339(),
                "format": "json"
            },
            "analysis": analysis.to_json()?
        }
    });

    serde_json::to_string_pretty(&json_report)
}

pub fn generate_comparison_text(comparison: &SiteComparison) -> String {
    let mut report = String::new();

    report.push_str(&heavy_rule());
    report.push_str("STRATA SITE ANALYTICS - COMPARISON REPORT\n");
    report.push_str(&heavy_rule());
    report.push('\n');
    report.push_str(&format!("Sites Analyzed: {}\n", comparison.sites.len()));
    report.push('\n');

    let sections = [
        (
            "By Navigation Efficiency:",
            &comparison.rankings.by_navigation_efficiency,
        ),
        ("By Information Architecture:", &comparison.rankings.by_ia_score),
        ("By Total Pages:", &comparison.rankings.by_total_pages),
    ];

    report.push_str("RANKINGS\n");
    report.push_str(&light_rule());
    for (label, entries) in sections {
        report.push_str(label);
        report.push('\n');
        for (idx, entry) in entries.iter().enumerate() {
            report.push_str(&format!("  {}. {}: {:.2}\n", idx + 1, entry.site, entry.value));
        }
        report.push('\n');
    }

    report.push_str(&heavy_rule());
    report.push_str("Report generated by Strata Site Analytics\n");
    report.push_str(&heavy_rule());

    report
}

pub fn generate_comparison_json(
    comparison: &SiteComparison,
) -> Result<String, serde_json::Error> {
    let json_report = serde_json::json!({
        "report": {
            "metadata": {
                "generator": "Strata",
                "version": env!("CARGO_PKG_VERSION"),
                "generated_at": chrono::Utc::now().to_rfc3339(),
                "format": "json"
            },
            "comparison": serde_json::to_value(comparison)?
        }
    });

    serde_json::to_string_pretty(&json_report)
}

pub fn save_report(content: &str, path: &Path) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(content.as_bytes())?;
    Ok(())
}

fn heavy_rule() -> String {
    format!("{}\n", "=".repeat(80))
}

fn light_rule() -> String {
    format!("{}\n", "-".repeat(80))
}
