// Section extraction and depth-1 section identification.

use crate::graph::SiteGraph;
use crate::record::PageRecord;
use serde::Serialize;
use std::collections::BTreeMap;
use url::Url;

/// Map a URL to its section: the first non-empty path segment, `"home"`
/// for an empty path, `"unknown"` when the URL does not parse.
pub fn extract_section(raw: &str) -> String {
    match Url::parse(raw) {
        Ok(parsed) => parsed
            .path_segments()
            .and_then(|mut segments| segments.find(|segment| !segment.is_empty()))
            .map(|segment| segment.to_string())
            .unwrap_or_else(|| "home".to_string()),
        Err(_) => "unknown".to_string(),
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SectionPage {
    pub url: String,
    pub title: String,
    pub child_count: u32,
    pub depth: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct SectionInfo {
    pub url: String,
    pub title: String,
    pub page_count: usize,
    pub subsection_count: usize,
    pub total_links: u32,
    pub depth: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct ContentDistribution {
    pub sections: usize,
    pub pages_per_section_avg: f64,
    pub largest_section: Option<String>,
    pub smallest_section: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SectionReport {
    pub main_pages: Vec<SectionPage>,
    pub section_stats: BTreeMap<String, SectionInfo>,
    pub content_distribution: ContentDistribution,
}

/// Identify main site sections from depth-1 pages and measure how content
/// is distributed across them.
pub fn identify_sections(records: &[PageRecord], graph: &SiteGraph) -> SectionReport {
    let main_pages: Vec<SectionPage> = records
        .iter()
        .filter(|record| record.depth == 1)
        .map(|record| SectionPage {
            url: record.url.clone(),
            title: record.title.clone(),
            child_count: record.child_count,
            depth: record.depth,
        })
        .collect();

    let mut section_stats = BTreeMap::new();
    for page in &main_pages {
        let name = extract_section(&page.url);
        let marker = format!("/{}/", name);
        let page_count = records
            .iter()
            .filter(|record| record.url.contains(&marker) || record.url == page.url)
            .count();
        let subsection_count = graph
            .children_of(&page.url)
            .iter()
            .filter(|child| {
                graph
                    .record_of(child)
                    .is_some_and(|record| record.depth == 2)
            })
            .count();

        section_stats.insert(
            name,
            SectionInfo {
                url: page.url.clone(),
                title: page.title.clone(),
                page_count,
                subsection_count,
                total_links: page.child_count,
                depth: page.depth,
            },
        );
    }

    let content_distribution = summarize_distribution(records.len(), &section_stats);

    SectionReport {
        main_pages,
        section_stats,
        content_distribution,
    }
}

fn summarize_distribution(
    total_pages: usize,
    section_stats: &BTreeMap<String, SectionInfo>,
) -> ContentDistribution {
    let mut largest: Option<&SectionInfo> = None;
    let mut smallest: Option<&SectionInfo> = None;
    for info in section_stats.values() {
        if largest.is_none_or(|best| info.page_count > best.page_count) {
            largest = Some(info);
        }
        if smallest.is_none_or(|best| info.page_count < best.page_count) {
            smallest = Some(info);
        }
    }

    let pages_per_section_avg = if section_stats.is_empty() {
        0.0
    } else {
        total_pages as f64 / section_stats.len() as f64
    };

    ContentDistribution {
        sections: section_stats.len(),
        pages_per_section_avg,
        largest_section: largest.map(|info| info.title.clone()),
        smallest_section: smallest.map(|info| info.title.clone()),
    }
}
