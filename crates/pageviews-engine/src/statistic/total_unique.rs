use super::{Statistic, group_by_page, visitor_token};
use pageviews_types::{Layout, Report, StatRecord, digit_count};
use std::collections::HashSet;

/// Distinct-visitor counts: lines in a group collapse per visitor token,
/// first occurrence wins. Formatted lines align the `unique views` suffix
/// to one common column across the whole batch.
#[derive(Debug)]
pub struct TotalUniqueStatistic;

impl TotalUniqueStatistic {
    fn distinct_visitors(items: &[&str]) -> usize {
        let mut seen = HashSet::new();
        // Token-less lines deduplicate against each other (None is one key).
        items
            .iter()
            .filter(|line| seen.insert(visitor_token(line)))
            .count()
    }
}

impl Statistic for TotalUniqueStatistic {
    fn id(&self) -> &str {
        "total_unique"
    }

    fn compile(&self, lines: &[String]) -> Report {
        let records = group_by_page(lines)
            .into_iter()
            .map(|(page, items)| StatRecord::new(page, Self::distinct_visitors(&items)))
            .collect();
        Report::new(records)
    }

    fn format_line(&self, record: &StatRecord, layout: &Layout) -> String {
        // Pad the page name so the statistic of every record in the batch
        // starts one column past the widest name+digits combination.
        let width = (layout.max_line_length + 1).saturating_sub(digit_count(record.statistic));
        format!(
            "{:<width$}{} unique views",
            record.page_name, record.statistic
        )
    }
}
