// The two composite quality scores. They share their input metrics but are
// separate algorithms with separate formulas; keep them that way.

use crate::metrics::StructuralMetrics;
use crate::record::PageRecord;
use crate::section::extract_section;
use serde::Serialize;
use std::collections::BTreeMap;

/// Reachability horizon: pages within this many clicks from the root count
/// as reachable for the IA score.
pub const REACHABLE_CLICK_LIMIT: u32 = 3;

/// Balance score used when fewer than two sections exist and the Gini
/// coefficient is meaningless.
pub const SINGLE_SECTION_BALANCE: f64 = 20.0;

/// Navigation efficiency, 0-100: four components, each clamped to [0, 25].
#[derive(Debug, Clone, Serialize)]
pub struct NavigationScore {
    pub total: f64,
    pub depth_score: f64,
    pub link_distribution_score: f64,
    pub orphan_score: f64,
    pub connectivity_score: f64,
}

/// Information architecture, 0-100.
#[derive(Debug, Clone, Serialize)]
pub struct IaScore {
    pub total_score: f64,
    pub max_depth: u32,
    pub average_depth: f64,
    pub components: IaComponents,
    pub benchmarks: IaBenchmarks,
}

#[derive(Debug, Clone, Serialize)]
pub struct IaComponents {
    pub depth_score: f64,
    pub balance_score: f64,
    pub connectivity_score: f64,
    pub reachability_score: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct IaBenchmarks {
    pub ideal_max_depth: u32,
    pub ideal_reachability_within_3_clicks: &'static str,
    pub ideal_orphan_ratio: &'static str,
}

impl Default for IaBenchmarks {
    fn default() -> Self {
        Self {
            ideal_max_depth: 3,
            ideal_reachability_within_3_clicks: ">= 90%",
            ideal_orphan_ratio: "< 10%",
        }
    }
}

/// Score how efficiently the site can be navigated: shallow hierarchies,
/// moderate link counts, few orphans, high connectivity.
pub fn navigation_efficiency(metrics: &StructuralMetrics) -> NavigationScore {
    let depth_score = (25.0 - 5.0 * metrics.max_depth as f64).max(0.0);

    let avg_links = metrics.average_child_count;
    let link_distribution_score = if (10.0..=50.0).contains(&avg_links) {
        25.0
    } else {
        (25.0 - (avg_links - 30.0).abs() / 2.0).max(0.0)
    };

    let orphan_score = (25.0 - metrics.orphan_ratio * 100.0).max(0.0);

    let connectivity_score = if metrics.total_pages == 0 {
        0.0
    } else {
        let connected = (metrics.total_pages - metrics.orphan_count) as f64;
        (25.0 * connected / metrics.total_pages as f64).min(25.0)
    };

    NavigationScore {
        total: round2(depth_score + link_distribution_score + orphan_score + connectivity_score),
        depth_score: round2(depth_score),
        link_distribution_score: round2(link_distribution_score),
        orphan_score: round2(orphan_score),
        connectivity_score: round2(connectivity_score),
    }
}

/// Score the soundness of the information architecture: depth discipline,
/// balanced sections (inverse Gini), connectivity, and reachability within
/// three clicks of the root.
pub fn information_architecture(
    records: &[PageRecord],
    metrics: &StructuralMetrics,
) -> IaScore {
    let depth_score = (25.0 - 6.0 * (metrics.max_depth as f64 - 3.0).max(0.0)).max(0.0);

    let mut section_counts: BTreeMap<String, usize> = BTreeMap::new();
    for record in records {
        *section_counts.entry(extract_section(&record.url)).or_insert(0) += 1;
    }
    let counts: Vec<f64> = section_counts.values().map(|&c| c as f64).collect();
    let balance_score = if counts.len() > 1 {
        (25.0 * (1.0 - gini_coefficient(&counts))).max(0.0)
    } else {
        SINGLE_SECTION_BALANCE
    };

    let orphan_component = (15.0 - 30.0 * metrics.orphan_ratio).max(0.0);
    let avg_children = metrics.average_child_count;
    let density_component = if avg_children <= 0.0 {
        0.0
    } else if (5.0..=60.0).contains(&avg_children) {
        10.0
    } else {
        (10.0 - (avg_children - 30.0).abs() / 10.0).max(0.0)
    };
    let connectivity_score = orphan_component + density_component;

    let reachable = records
        .iter()
        .filter(|r| r.depth <= REACHABLE_CLICK_LIMIT)
        .count();
    let reachability_score = if metrics.total_pages == 0 {
        0.0
    } else {
        25.0 * reachable as f64 / metrics.total_pages as f64
    };

    IaScore {
        total_score: round2(depth_score + balance_score + connectivity_score + reachability_score),
        max_depth: metrics.max_depth,
        average_depth: round2(metrics.average_depth),
        components: IaComponents {
            depth_score: round2(depth_score),
            balance_score: round2(balance_score),
            connectivity_score: round2(connectivity_score),
            reachability_score: round2(reachability_score),
        },
        benchmarks: IaBenchmarks::default(),
    }
}

/// Gini coefficient over a set of counts: 0 for a perfectly even
/// distribution, approaching (n-1)/n when one bucket holds everything.
pub fn gini_coefficient(counts: &[f64]) -> f64 {
    let n = counts.len();
    if n < 2 {
        return 0.0;
    }
    let mut sorted = counts.to_vec();
    sorted.sort_by(f64::total_cmp);
    let total: f64 = sorted.iter().sum();
    if total <= 0.0 {
        return 0.0;
    }

    let mut cumulative = 0.0;
    let mut lorenz_sum = 0.0;
    for value in &sorted {
        cumulative += value;
        lorenz_sum += cumulative / total;
    }
    ((n as f64 + 1.0) - 2.0 * lorenz_sum) / n as f64
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
