// Parent/child adjacency derived from flat crawl records.

use crate::record::PageRecord;
use std::collections::HashMap;

/// The site graph for one analysis run: parent URL to children, URL to
/// record, and the root page. Built once per run and discarded with it.
///
/// Duplicate edges and self-loops from the input are kept as-is;
/// traversals are expected to carry their own cycle defense.
#[derive(Debug)]
pub struct SiteGraph<'a> {
    children: HashMap<&'a str, Vec<&'a str>>,
    records: HashMap<&'a str, &'a PageRecord>,
    root: Option<&'a str>,
}

impl<'a> SiteGraph<'a> {
    /// Build the adjacency in a single scan over the records.
    pub fn build(records: &'a [PageRecord]) -> Self {
        let mut children: HashMap<&str, Vec<&str>> = HashMap::new();
        let mut index: HashMap<&str, &PageRecord> = HashMap::new();
        let mut root = None;

        for record in records {
            index.entry(record.url.as_str()).or_insert(record);
            if !record.parent_url.is_empty() {
                children
                    .entry(record.parent_url.as_str())
                    .or_default()
                    .push(record.url.as_str());
            }
            if root.is_none() && record.depth == 0 {
                root = Some(record.url.as_str());
            }
        }

        Self {
            children,
            records: index,
            root,
        }
    }

    pub fn children_of(&self, url: &str) -> &[&'a str] {
        self.children.get(url).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn record_of(&self, url: &str) -> Option<&'a PageRecord> {
        self.records.get(url).copied()
    }

    pub fn root(&self) -> Option<&'a str> {
        self.root
    }

    pub fn edge_count(&self) -> usize {
        self.children.values().map(Vec::len).sum()
    }
}
