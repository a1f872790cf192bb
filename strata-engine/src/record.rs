use crate::error::{AnalyticsError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::info;

/// One raw input row: field name to untyped value.
pub type RawRow = serde_json::Map<String, Value>;

/// A normalized crawl record. Every downstream component assumes the
/// coercion rules in [`PageRecord::from_row`] have already run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageRecord {
    pub url: String,
    pub parent_url: String,
    pub depth: u32,
    pub child_count: u32,
    pub status_code: Option<u16>,
    pub title: String,
    pub description: String,
    pub heading: String,
}

impl PageRecord {
    /// Build a record from a raw row. Numeric fields default to 0 when
    /// missing or unparseable, string fields to empty; a status code of 0
    /// is treated as absent.
    pub fn from_row(row: &RawRow) -> Self {
        let status_code = match coerce_integer(row.get("status_code")) {
            0 => None,
            code => u16::try_from(code).ok(),
        };

        Self {
            url: coerce_string(row.get("url")),
            parent_url: coerce_string(row.get("parent_url")),
            depth: coerce_integer(row.get("depth")) as u32,
            child_count: coerce_integer(row.get("child_count")) as u32,
            status_code,
            title: coerce_string(row.get("title")),
            description: coerce_string(row.get("description")),
            heading: coerce_string(row.get("heading")),
        }
    }

    /// A page with no outgoing links discovered in the crawl.
    pub fn is_orphan(&self) -> bool {
        self.child_count == 0
    }

    pub fn is_success(&self) -> bool {
        self.status_code == Some(200)
    }
}

/// Load and normalize a dataset file. JSON files hold an array of row
/// objects; CSV files a header row followed by data rows.
pub fn load_dataset(path: &Path) -> Result<Vec<PageRecord>> {
    if !path.exists() {
        return Err(AnalyticsError::DatasetNotFound(path.to_path_buf()));
    }

    let content = fs::read_to_string(path)?;
    let rows = match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => rows_from_json(&content)?,
        Some("csv") => rows_from_csv(&content),
        other => {
            return Err(AnalyticsError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            ));
        }
    };

    let records = normalize_rows(&rows)?;
    info!("Loaded {} records from {}", records.len(), path.display());
    Ok(records)
}

/// Normalize raw rows into records, rejecting an empty table.
pub fn normalize_rows(rows: &[RawRow]) -> Result<Vec<PageRecord>> {
    if rows.is_empty() {
        return Err(AnalyticsError::EmptyDataset);
    }
    Ok(rows.iter().map(PageRecord::from_row).collect())
}

fn rows_from_json(content: &str) -> Result<Vec<RawRow>> {
    let value: Value = serde_json::from_str(content)?;
    match value {
        Value::Array(items) => Ok(items
            .into_iter()
            .filter_map(|item| match item {
                Value::Object(map) => Some(map),
                _ => None,
            })
            .collect()),
        _ => Err(AnalyticsError::UnsupportedFormat(
            "expected a JSON array of row objects".to_string(),
        )),
    }
}

fn rows_from_csv(content: &str) -> Vec<RawRow> {
    let mut lines = content.lines();
    let header = match lines.next() {
        Some(line) => split_csv_line(line.trim_end_matches('\r')),
        None => return Vec::new(),
    };

    let mut rows = Vec::new();
    for line in lines {
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }
        let mut row = RawRow::new();
        for (name, field) in header.iter().zip(split_csv_line(line)) {
            row.insert(name.clone(), Value::String(field));
        }
        rows.push(row);
    }
    rows
}

// Quote-aware field split. Embedded newlines in quoted fields are not
// supported; crawl exports keep one record per line.
fn split_csv_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    field.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            }
            '"' => in_quotes = true,
            ',' if !in_quotes => fields.push(std::mem::take(&mut field)),
            _ => field.push(c),
        }
    }
    fields.push(field);
    fields
}

fn coerce_integer(value: Option<&Value>) -> i64 {
    match value {
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .unwrap_or(0)
            .max(0),
        Some(Value::String(s)) => {
            let trimmed = s.trim();
            trimmed
                .parse::<i64>()
                .ok()
                .or_else(|| trimmed.parse::<f64>().ok().map(|f| f as i64))
                .unwrap_or(0)
                .max(0)
        }
        _ => 0,
    }
}

fn coerce_string(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => String::new(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Number(n)) => n.to_string(),
        Some(other) => other.to_string(),
    }
}
