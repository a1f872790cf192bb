// Comparative ranking across multiple crawl datasets.

use crate::analysis;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::PathBuf;
use tracing::{error, info};

#[derive(Debug, Clone, Serialize)]
pub struct RankEntry {
    pub site: String,
    pub value: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct Rankings {
    pub by_navigation_efficiency: Vec<RankEntry>,
    pub by_ia_score: Vec<RankEntry>,
    pub by_total_pages: Vec<RankEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SiteComparison {
    pub sites: BTreeMap<String, Value>,
    pub rankings: Rankings,
}

/// Run the full pipeline for every labeled dataset and rank the results.
/// A site that fails to analyze is logged and left out of the rankings;
/// the rest of the batch is unaffected.
pub fn compare_sites(sites: &BTreeMap<String, PathBuf>) -> SiteComparison {
    let mut analyzed: BTreeMap<String, Value> = BTreeMap::new();

    for (label, path) in sites {
        match analysis::analyze_dataset(path) {
            Ok(result) => match result.to_json() {
                Ok(document) => {
                    analyzed.insert(label.clone(), document);
                }
                Err(err) => error!("Failed to serialize analysis for {label}: {err}"),
            },
            Err(err) => error!("Failed to analyze {label}: {err}"),
        }
    }

    info!("Compared {} of {} sites", analyzed.len(), sites.len());

    let rankings = Rankings {
        by_navigation_efficiency: rank_by(&analyzed, &["navigation_efficiency", "total"]),
        by_ia_score: rank_by(&analyzed, &["information_architecture", "total_score"]),
        by_total_pages: rank_by(&analyzed, &["metrics", "total_pages"]),
    };

    SiteComparison {
        sites: analyzed,
        rankings,
    }
}

// A metric that is missing or non-numeric ranks at 0.0 so every analyzed
// site keeps a stable place in the ordering.
fn rank_by(sites: &BTreeMap<String, Value>, path: &[&str]) -> Vec<RankEntry> {
    let mut entries: Vec<RankEntry> = sites
        .iter()
        .map(|(label, document)| {
            let value = path
                .iter()
                .copied()
                .try_fold(document, |node, key| node.get(key))
                .and_then(Value::as_f64)
                .unwrap_or(0.0);
            RankEntry {
                site: label.clone(),
                value,
            }
        })
        .collect();

    // Descending by value; the stable sort keeps equal scores in label
    // order, so the ranking is a pure function of the computed values.
    entries.sort_by(|a, b| b.value.total_cmp(&a.value));
    entries
}
