use super::{Statistic, group_by_page};
use pageviews_types::{Layout, Report, StatRecord};

/// Raw visit counts: every line in a group is one visit.
#[derive(Debug)]
pub struct TotalStatistic;

impl Statistic for TotalStatistic {
    fn id(&self) -> &str {
        "total"
    }

    fn compile(&self, lines: &[String]) -> Report {
        let records = group_by_page(lines)
            .into_iter()
            .map(|(page, items)| StatRecord::new(page, items.len()))
            .collect();
        Report::new(records)
    }

    fn format_line(&self, record: &StatRecord, _layout: &Layout) -> String {
        format!("{} {} visits", record.page_name, record.statistic)
    }
}
