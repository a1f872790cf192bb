// Structural journey approximation: crawl-tree paths stand in for user
// sessions, orphan pages for exits.

use crate::graph::SiteGraph;
use crate::record::PageRecord;
use crate::score::round2;
use crate::section::extract_section;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

/// Maximum path length, in edges from the root.
pub const MAX_PATH_EDGES: usize = 3;

pub const TOP_PATH_LIMIT: usize = 10;
pub const EXIT_POINT_LIMIT: usize = 20;
pub const PATH_SEPARATOR: &str = "  ->  ";

#[derive(Debug, Clone, Serialize)]
pub struct PathCount {
    pub path: String,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExitPoint {
    pub url: String,
    pub title: String,
    pub depth: u32,
    pub section: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExitStats {
    pub total_exits: usize,
    pub exit_rate: f64,
    pub exits_by_depth: BTreeMap<u32, usize>,
    pub exits_by_section: BTreeMap<String, usize>,
}

#[derive(Debug, Clone, Serialize)]
pub struct JourneyAnalysis {
    pub most_common_paths: Vec<PathCount>,
    pub depth_distribution: BTreeMap<u32, usize>,
    pub exit_points: Vec<ExitPoint>,
    pub exit_stats: ExitStats,
}

pub fn analyze_journeys(records: &[PageRecord], graph: &SiteGraph) -> JourneyAnalysis {
    let paths = enumerate_paths(graph);
    let most_common_paths = rank_paths(&paths);

    let mut depth_distribution: BTreeMap<u32, usize> = BTreeMap::new();
    for record in records {
        *depth_distribution.entry(record.depth).or_insert(0) += 1;
    }

    let exits: Vec<&PageRecord> = records.iter().filter(|r| r.is_orphan()).collect();

    let mut exits_by_depth: BTreeMap<u32, usize> = BTreeMap::new();
    let mut exits_by_section: BTreeMap<String, usize> = BTreeMap::new();
    for exit in &exits {
        *exits_by_depth.entry(exit.depth).or_insert(0) += 1;
        *exits_by_section
            .entry(extract_section(&exit.url))
            .or_insert(0) += 1;
    }

    // Deepest dead ends first; ties keep row order.
    let mut deepest = exits.clone();
    deepest.sort_by(|a, b| b.depth.cmp(&a.depth));
    deepest.truncate(EXIT_POINT_LIMIT);
    let exit_points = deepest
        .into_iter()
        .map(|record| ExitPoint {
            url: record.url.clone(),
            title: record.title.clone(),
            depth: record.depth,
            section: extract_section(&record.url),
        })
        .collect();

    let exit_rate = if records.is_empty() {
        0.0
    } else {
        round2(100.0 * exits.len() as f64 / records.len() as f64)
    };

    JourneyAnalysis {
        most_common_paths,
        depth_distribution,
        exit_points,
        exit_stats: ExitStats {
            total_exits: exits.len(),
            exit_rate,
            exits_by_depth,
            exits_by_section,
        },
    }
}

/// Every root-to-node path up to [`MAX_PATH_EDGES`] edges, including all
/// prefixes. A path never revisits one of its own nodes, so cycles and
/// duplicate edges in the adjacency cannot trap the walk. No root means
/// no paths.
pub fn enumerate_paths<'a>(graph: &SiteGraph<'a>) -> Vec<Vec<&'a str>> {
    let mut paths = Vec::new();
    if let Some(root) = graph.root() {
        let mut path = vec![root];
        walk(graph, root, &mut path, &mut paths);
    }
    paths
}

fn walk<'a>(
    graph: &SiteGraph<'a>,
    current: &'a str,
    path: &mut Vec<&'a str>,
    paths: &mut Vec<Vec<&'a str>>,
) {
    paths.push(path.clone());
    if path.len() > MAX_PATH_EDGES {
        return;
    }
    for &child in graph.children_of(current) {
        if path.contains(&child) {
            continue;
        }
        path.push(child);
        walk(graph, child, path, paths);
        path.pop();
    }
}

// Single-node paths are recorded but only multi-node paths are ranked.
// Ties break by first-seen order.
fn rank_paths(paths: &[Vec<&str>]) -> Vec<PathCount> {
    let mut order: Vec<String> = Vec::new();
    let mut counts: HashMap<String, usize> = HashMap::new();

    for path in paths {
        if path.len() <= 1 {
            continue;
        }
        let label = path.join(PATH_SEPARATOR);
        if !counts.contains_key(&label) {
            order.push(label.clone());
        }
        *counts.entry(label).or_insert(0) += 1;
    }

    let mut ranked: Vec<PathCount> = order
        .into_iter()
        .map(|path| {
            let count = counts[&path];
            PathCount { path, count }
        })
        .collect();
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked.truncate(TOP_PATH_LIMIT);
    ranked
}
