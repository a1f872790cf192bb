// Structural metrics over the full record table.

use crate::record::PageRecord;
use serde::Serialize;
use std::collections::BTreeMap;

/// How many top pages (by outgoing link count) to surface.
pub const TOP_PAGE_LIMIT: usize = 10;

#[derive(Debug, Clone, Serialize)]
pub struct TopPage {
    pub url: String,
    pub title: String,
    pub link_count: u32,
    pub depth: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct DataQuality {
    pub total_pages: usize,
    pub successful_pages: usize,
    pub failed_pages: usize,
    pub success_rate: f64,
    pub pages_with_title: usize,
    pub pages_with_description: usize,
    pub title_coverage: f64,
    pub description_coverage: f64,
}

/// Everything derived from one scan of the record table. Distributions are
/// keyed by depth level and stay sorted by level.
#[derive(Debug, Clone, Serialize)]
pub struct StructuralMetrics {
    pub total_pages: usize,
    pub max_depth: u32,
    pub average_depth: f64,
    pub depth_variance: f64,
    pub depth_distribution: BTreeMap<u32, usize>,
    pub average_child_count: f64,
    pub child_count_variance: f64,
    pub orphan_count: usize,
    pub orphan_ratio: f64,
    pub top_pages: Vec<TopPage>,
    pub fan_out_by_level: BTreeMap<u32, f64>,
    pub average_fan_out: f64,
    pub average_breadth: f64,
    pub breadth_factor: f64,
    pub average_pages_per_section: f64,
    pub hierarchy_balance: String,
    pub data_quality: DataQuality,
}

pub fn compute_metrics(records: &[PageRecord]) -> StructuralMetrics {
    let total_pages = records.len();

    let mut depth_distribution: BTreeMap<u32, usize> = BTreeMap::new();
    for record in records {
        *depth_distribution.entry(record.depth).or_insert(0) += 1;
    }
    let max_depth = depth_distribution.keys().next_back().copied().unwrap_or(0);

    let depths: Vec<f64> = records.iter().map(|r| r.depth as f64).collect();
    let child_counts: Vec<f64> = records.iter().map(|r| r.child_count as f64).collect();
    let average_depth = mean(&depths);
    let average_child_count = mean(&child_counts);

    let orphan_count = records.iter().filter(|r| r.is_orphan()).count();
    let orphan_ratio = ratio(orphan_count, total_pages);

    // Fan-out per level: pages at d+1 over pages at d. Levels with an empty
    // denominator are skipped entirely, not counted as zero.
    let mut fan_out_by_level: BTreeMap<u32, f64> = BTreeMap::new();
    for level in 0..max_depth {
        let parents = depth_distribution.get(&level).copied().unwrap_or(0);
        if parents == 0 {
            continue;
        }
        let children = depth_distribution.get(&(level + 1)).copied().unwrap_or(0);
        fan_out_by_level.insert(level, children as f64 / parents as f64);
    }
    let average_fan_out = if fan_out_by_level.is_empty() {
        0.0
    } else {
        fan_out_by_level.values().sum::<f64>() / fan_out_by_level.len() as f64
    };

    let average_breadth = if depth_distribution.is_empty() {
        0.0
    } else {
        total_pages as f64 / depth_distribution.len() as f64
    };
    let breadth_factor = if max_depth == 0 {
        0.0
    } else {
        total_pages as f64 / max_depth as f64
    };

    // Depth-1 pages act as the main sections; an empty level still counts
    // as one section so the average stays defined.
    let depth_1_count = depth_distribution.get(&1).copied().unwrap_or(0);
    let average_pages_per_section = if total_pages == 0 {
        0.0
    } else {
        total_pages as f64 / depth_1_count.max(1) as f64
    };

    let depth_2_count = depth_distribution.get(&2).copied().unwrap_or(0);
    let hierarchy_balance = if depth_1_count > 0 && depth_2_count > 0 {
        "balanced".to_string()
    } else {
        "unbalanced".to_string()
    };

    StructuralMetrics {
        total_pages,
        max_depth,
        average_depth,
        depth_variance: sample_variance(&depths, average_depth),
        depth_distribution,
        average_child_count,
        child_count_variance: sample_variance(&child_counts, average_child_count),
        orphan_count,
        orphan_ratio,
        top_pages: top_pages(records),
        fan_out_by_level,
        average_fan_out,
        average_breadth,
        breadth_factor,
        average_pages_per_section,
        hierarchy_balance,
        data_quality: data_quality(records),
    }
}

/// Top pages by outgoing link count, descending; ties keep row order.
fn top_pages(records: &[PageRecord]) -> Vec<TopPage> {
    let mut ranked: Vec<&PageRecord> = records.iter().collect();
    ranked.sort_by(|a, b| b.child_count.cmp(&a.child_count));
    ranked
        .into_iter()
        .take(TOP_PAGE_LIMIT)
        .map(|record| TopPage {
            url: record.url.clone(),
            title: record.title.clone(),
            link_count: record.child_count,
            depth: record.depth,
        })
        .collect()
}

fn data_quality(records: &[PageRecord]) -> DataQuality {
    let total_pages = records.len();
    let successful_pages = records.iter().filter(|r| r.is_success()).count();
    let pages_with_title = records.iter().filter(|r| !r.title.is_empty()).count();
    let pages_with_description = records
        .iter()
        .filter(|r| !r.description.is_empty())
        .count();

    DataQuality {
        total_pages,
        successful_pages,
        failed_pages: total_pages - successful_pages,
        success_rate: 100.0 * ratio(successful_pages, total_pages),
        pages_with_title,
        pages_with_description,
        title_coverage: 100.0 * ratio(pages_with_title, total_pages),
        description_coverage: 100.0 * ratio(pages_with_description, total_pages),
    }
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

// Sample variance (n - 1 denominator); 0.0 below two observations.
fn sample_variance(values: &[f64], mean: f64) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (values.len() - 1) as f64
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}
