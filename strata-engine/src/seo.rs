// On-site SEO audit over normalized crawl records.

use crate::record::PageRecord;
use crate::score::round2;
use serde::Serialize;
use std::collections::BTreeMap;
use url::Url;

pub const LONG_PATH_THRESHOLD: usize = 80;
pub const WEAK_TITLE_MIN_CHARS: usize = 5;
pub const WEAK_TITLE_EXAMPLE_LIMIT: usize = 10;

// Titles that say nothing about the page they label.
const GENERIC_TITLES: [&str; 4] = ["home", "untitled", "page", "index"];

#[derive(Debug, Clone, Serialize)]
pub struct MetadataAudit {
    pub total_pages: usize,
    pub missing_title: usize,
    pub missing_description: usize,
    pub missing_heading: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct UrlQualityAudit {
    pub lowercase_ratio: f64,
    pub issue_counts: BTreeMap<String, usize>,
}

#[derive(Debug, Clone, Serialize)]
pub struct WeakTitlePage {
    pub url: String,
    pub title: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct WeakTitleAudit {
    pub weak_title_count: usize,
    pub weak_title_examples: Vec<WeakTitlePage>,
    pub note: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct SeoAudit {
    pub metadata: MetadataAudit,
    pub url_quality: UrlQualityAudit,
    pub anchor_text_proxy: WeakTitleAudit,
}

#[derive(Debug, Clone)]
pub struct UrlQuality {
    pub is_lowercase: bool,
    pub issues: Vec<&'static str>,
}

pub fn audit_seo(records: &[PageRecord]) -> SeoAudit {
    let total_pages = records.len();

    let metadata = MetadataAudit {
        total_pages,
        missing_title: records.iter().filter(|r| r.title.is_empty()).count(),
        missing_description: records
            .iter()
            .filter(|r| r.description.is_empty())
            .count(),
        missing_heading: records.iter().filter(|r| r.heading.is_empty()).count(),
    };

    let mut lowercase_count = 0;
    let mut issue_counts: BTreeMap<String, usize> = BTreeMap::new();
    for record in records {
        let quality = check_url_quality(&record.url);
        if quality.is_lowercase {
            lowercase_count += 1;
        }
        for issue in quality.issues {
            *issue_counts.entry(issue.to_string()).or_insert(0) += 1;
        }
    }
    let lowercase_ratio = if total_pages == 0 {
        0.0
    } else {
        round2(100.0 * lowercase_count as f64 / total_pages as f64)
    };

    let weak: Vec<&PageRecord> = records
        .iter()
        .filter(|r| is_weak_title(&r.title))
        .collect();
    let anchor_text_proxy = WeakTitleAudit {
        weak_title_count: weak.len(),
        weak_title_examples: weak
            .iter()
            .take(WEAK_TITLE_EXAMPLE_LIMIT)
            .map(|record| WeakTitlePage {
                url: record.url.clone(),
                title: record.title.clone(),
            })
            .collect(),
        note: "Anchor text quality is approximated using page titles, since \
               individual link anchor text is not available in the crawl data.",
    };

    SeoAudit {
        metadata,
        url_quality: UrlQualityAudit {
            lowercase_ratio,
            issue_counts,
        },
        anchor_text_proxy,
    }
}

/// URL readability heuristics: query strings, over-long paths, and
/// underscores where hyphens belong.
pub fn check_url_quality(raw: &str) -> UrlQuality {
    let path = match Url::parse(raw) {
        Ok(parsed) => {
            let path = parsed.path().to_string();
            if path.is_empty() {
                "/".to_string()
            } else {
                path
            }
        }
        Err(_) => raw.to_string(),
    };

    let mut issues = Vec::new();
    if raw.contains('?') {
        issues.push("has_query_string");
    }
    if path.len() > LONG_PATH_THRESHOLD {
        issues.push("long_path");
    }
    if path.contains('_') {
        issues.push("underscores_instead_of_hyphens");
    }

    UrlQuality {
        is_lowercase: raw == raw.to_lowercase(),
        issues,
    }
}

fn is_weak_title(title: &str) -> bool {
    title.chars().count() < WEAK_TITLE_MIN_CHARS
        || GENERIC_TITLES.contains(&title.to_lowercase().as_str())
}
