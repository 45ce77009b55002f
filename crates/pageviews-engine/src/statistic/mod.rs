mod total;
mod total_unique;

pub use total::TotalStatistic;
pub use total_unique::TotalUniqueStatistic;

use crate::{Error, Result};
use pageviews_types::{Layout, Report, StatRecord};
use std::collections::HashMap;

/// Pluggable aggregation and formatting unit.
///
/// Responsibilities:
/// - Compile raw log lines into an ordered [`Report`]
/// - Format a single record against the report's layout
///
/// `compile` is pure: the layout travels inside the returned report instead
/// of living as hidden strategy state, so a statistic instance can be reused
/// across unrelated inputs.
pub trait Statistic: std::fmt::Debug {
    /// Stable identifier (e.g., "total", "total_unique")
    fn id(&self) -> &str;

    /// Group and aggregate lines into per-page records, ordered by first
    /// appearance of each page key. Empty input yields an empty report.
    fn compile(&self, lines: &[String]) -> Report;

    /// Render one record. `layout` must come from the report the record
    /// belongs to.
    fn format_line(&self, record: &StatRecord, layout: &Layout) -> String;
}

#[derive(Debug, Clone)]
pub struct StatisticMetadata {
    pub name: &'static str,
    pub description: &'static str,
}

const STATISTICS: &[StatisticMetadata] = &[
    StatisticMetadata {
        name: "total",
        description: "Raw visit count per page",
    },
    StatisticMetadata {
        name: "total_unique",
        description: "Distinct visitors per page, aligned to a common column",
    },
];

pub fn supported_statistics() -> &'static [StatisticMetadata] {
    STATISTICS
}

pub fn statistic_names() -> Vec<&'static str> {
    STATISTICS.iter().map(|s| s.name).collect()
}

/// Create a statistic by name.
pub fn create_statistic(name: &str) -> Result<Box<dyn Statistic>> {
    match name {
        "total" => Ok(Box::new(TotalStatistic)),
        "total_unique" => Ok(Box::new(TotalUniqueStatistic)),
        other => Err(Error::StatisticNotSupported(other.to_string())),
    }
}

/// First whitespace-delimited field of a log line (the grouping key).
pub(crate) fn page_key(line: &str) -> Option<&str> {
    line.split_whitespace().next()
}

/// Second whitespace-delimited field (the de-duplication key).
pub(crate) fn visitor_token(line: &str) -> Option<&str> {
    line.split_whitespace().nth(1)
}

/// Group lines by page key, preserving first-appearance order of each
/// distinct key. Lines without a first field carry no key and are skipped.
pub(crate) fn group_by_page(lines: &[String]) -> Vec<(&str, Vec<&str>)> {
    let mut groups: Vec<(&str, Vec<&str>)> = Vec::new();
    let mut slots: HashMap<&str, usize> = HashMap::new();

    for line in lines {
        let Some(key) = page_key(line) else { continue };
        match slots.get(key) {
            Some(&slot) => groups[slot].1.push(line.as_str()),
            None => {
                slots.insert(key, groups.len());
                groups.push((key, vec![line.as_str()]));
            }
        }
    }
    groups
}

#[cfg(test)]
pub(crate) fn to_lines(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_key_is_first_field() {
        assert_eq!(page_key("/contact 184.123.665.067"), Some("/contact"));
        assert_eq!(page_key(""), None);
        assert_eq!(page_key("   "), None);
    }

    #[test]
    fn test_visitor_token_is_second_field() {
        assert_eq!(visitor_token("/contact 184.123.665.067"), Some("184.123.665.067"));
        assert_eq!(visitor_token("/contact"), None);
    }

    #[test]
    fn test_grouping_preserves_first_appearance_order() {
        let lines = to_lines(&["/b 1", "/a 2", "/b 3", "/c 4", "/a 5"]);
        let groups = group_by_page(&lines);
        let keys: Vec<_> = groups.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, vec!["/b", "/a", "/c"]);
        assert_eq!(groups[0].1.len(), 2);
    }

    #[test]
    fn test_grouping_skips_lines_without_fields() {
        let lines = to_lines(&["/a 1", "", "  ", "/a 2"]);
        let groups = group_by_page(&lines);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].1.len(), 2);
    }

    #[test]
    fn test_create_statistic_rejects_unknown_name() {
        let err = create_statistic("not_supported").unwrap_err();
        assert!(matches!(err, Error::StatisticNotSupported(_)));
    }

    #[test]
    fn test_create_statistic_covers_supported_set() {
        for name in statistic_names() {
            let statistic = create_statistic(name).expect("supported statistic");
            assert_eq!(statistic.id(), name);
        }
    }
}
