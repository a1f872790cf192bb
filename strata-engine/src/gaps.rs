// Content gap analysis: orphans and section imbalance.

use crate::record::PageRecord;
use crate::section::extract_section;
use serde::Serialize;
use std::collections::BTreeMap;

/// Sections more than this fraction away from the mean page count are
/// flagged as imbalanced.
pub const IMBALANCE_TOLERANCE: f64 = 0.5;

#[derive(Debug, Clone, Serialize)]
pub struct OrphanPage {
    pub url: String,
    pub title: String,
    pub depth: u32,
    pub child_count: u32,
    pub parent_url: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SectionStats {
    pub pages: usize,
    pub avg_depth: f64,
    pub max_depth: u32,
    pub avg_child_count: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ImbalancedSection {
    pub pages: usize,
    pub avg_depth: f64,
    pub max_depth: u32,
    pub avg_child_count: f64,
    pub imbalance_type: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ContentGapAnalysis {
    pub orphan_pages: Vec<OrphanPage>,
    pub section_stats: BTreeMap<String, SectionStats>,
    pub imbalanced_sections: BTreeMap<String, ImbalancedSection>,
    pub recommendations: Vec<String>,
}

pub fn analyze_gaps(records: &[PageRecord]) -> ContentGapAnalysis {
    // A page counts as orphaned when it has no resolvable parent or no
    // outgoing links of its own.
    let orphan_pages: Vec<OrphanPage> = records
        .iter()
        .filter(|record| record.parent_url.is_empty() || record.is_orphan())
        .map(|record| OrphanPage {
            url: record.url.clone(),
            title: record.title.clone(),
            depth: record.depth,
            child_count: record.child_count,
            parent_url: record.parent_url.clone(),
        })
        .collect();

    let section_stats = section_stats(records);

    let avg_pages_per_section = if section_stats.is_empty() {
        0.0
    } else {
        records.len() as f64 / section_stats.len() as f64
    };

    let mut imbalanced_sections = BTreeMap::new();
    for (name, stats) in &section_stats {
        let pages = stats.pages as f64;
        let high = avg_pages_per_section * (1.0 + IMBALANCE_TOLERANCE);
        let low = avg_pages_per_section * (1.0 - IMBALANCE_TOLERANCE);
        if pages > high || pages < low {
            let imbalance_type = if pages > avg_pages_per_section {
                "overrepresented"
            } else {
                "underrepresented"
            };
            imbalanced_sections.insert(
                name.clone(),
                ImbalancedSection {
                    pages: stats.pages,
                    avg_depth: stats.avg_depth,
                    max_depth: stats.max_depth,
                    avg_child_count: stats.avg_child_count,
                    imbalance_type: imbalance_type.to_string(),
                },
            );
        }
    }

    let mut recommendations = Vec::new();
    if !imbalanced_sections.is_empty() {
        recommendations.push(
            "Rebalance content: some sections have significantly more or fewer pages \
             than the site average. Consider merging or splitting sections."
                .to_string(),
        );
    }
    if !orphan_pages.is_empty() {
        recommendations.push(
            "Add internal links to orphan pages so users and search engines can \
             discover them more easily."
                .to_string(),
        );
    }
    if recommendations.is_empty() {
        recommendations.push(
            "Content distribution appears reasonably balanced. No major gaps detected."
                .to_string(),
        );
    }

    ContentGapAnalysis {
        orphan_pages,
        section_stats,
        imbalanced_sections,
        recommendations,
    }
}

fn section_stats(records: &[PageRecord]) -> BTreeMap<String, SectionStats> {
    let mut grouped: BTreeMap<String, Vec<&PageRecord>> = BTreeMap::new();
    for record in records {
        grouped
            .entry(extract_section(&record.url))
            .or_default()
            .push(record);
    }

    grouped
        .into_iter()
        .map(|(name, group)| {
            let pages = group.len();
            let avg_depth =
                group.iter().map(|r| r.depth as f64).sum::<f64>() / pages as f64;
            let max_depth = group.iter().map(|r| r.depth).max().unwrap_or(0);
            let avg_child_count =
                group.iter().map(|r| r.child_count as f64).sum::<f64>() / pages as f64;
            (
                name,
                SectionStats {
                    pages,
                    avg_depth,
                    max_depth,
                    avg_child_count,
                },
            )
        })
        .collect()
}
