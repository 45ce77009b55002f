pub mod engine;
pub mod error;
pub mod source;
pub mod splitter;
pub mod statistic;

pub use engine::StatsEngine;
pub use error::{Error, Result};
pub use source::{FileSource, LineSource};
pub use splitter::split_lines;
pub use statistic::{
    Statistic, StatisticMetadata, TotalStatistic, TotalUniqueStatistic, create_statistic,
    statistic_names, supported_statistics,
};
