use serde::Serialize;

use crate::util::digit_count;

/// Per-page aggregation result. One record per distinct page key,
/// ordered by first appearance of the key in the input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatRecord {
    pub page_name: String,
    pub statistic: usize,
}

impl StatRecord {
    pub fn new(page_name: impl Into<String>, statistic: usize) -> Self {
        Self {
            page_name: page_name.into(),
            statistic,
        }
    }

    /// Width of the record before padding: page name length plus the
    /// number of digits in the statistic (not its display length).
    pub fn raw_width(&self) -> usize {
        self.page_name.len() + digit_count(self.statistic)
    }
}

/// Formatting context for one compiled batch.
///
/// `max_line_length` is the maximum `raw_width` across all records of the
/// batch, so every formatted line can align to one common column. The value
/// only exists as part of a [`Report`], which rules out formatting against
/// the layout of a previous input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Layout {
    pub max_line_length: usize,
}

impl Layout {
    /// Compute the layout for a batch of records.
    pub fn of(records: &[StatRecord]) -> Self {
        let max_line_length = records.iter().map(StatRecord::raw_width).max().unwrap_or(0);
        Self { max_line_length }
    }
}

/// Output of one `compile` call: the ordered records plus the layout
/// they were compiled under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    records: Vec<StatRecord>,
    layout: Layout,
}

impl Report {
    pub fn new(records: Vec<StatRecord>) -> Self {
        let layout = Layout::of(&records);
        Self { records, layout }
    }

    pub fn records(&self) -> &[StatRecord] {
        &self.records
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }
}
