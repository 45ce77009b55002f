use crate::source::{FileSource, LineSource};
use crate::splitter::split_lines;
use crate::statistic::{Statistic, create_statistic};
use crate::{Error, Result};
use once_cell::unsync::OnceCell;
use pageviews_types::Report;
use std::path::Path;

/// Orchestrates one log resource and one statistic.
///
/// The source is read at most once per engine instance; repeated
/// `calculate` calls recompile from the memoized lines and return
/// structurally equal reports.
#[derive(Debug)]
pub struct StatsEngine {
    source: Box<dyn LineSource>,
    statistic: Box<dyn Statistic>,
    lines: OnceCell<Vec<String>>,
}

impl StatsEngine {
    /// Build an engine from an already-constructed source and statistic.
    ///
    /// The statistic is validated at the boundary: it must report a usable
    /// identifier. Conformance to the rest of the contract is carried by
    /// the trait itself.
    pub fn new(source: Box<dyn LineSource>, statistic: Box<dyn Statistic>) -> Result<Self> {
        if statistic.id().trim().is_empty() {
            return Err(Error::InvalidStrategy(
                "statistic reports no identifier".to_string(),
            ));
        }
        Ok(Self {
            source,
            statistic,
            lines: OnceCell::new(),
        })
    }

    /// Build an engine for a log file and a statistic selected by name.
    pub fn for_file(path: impl AsRef<Path>, statistic_name: &str) -> Result<Self> {
        let source = FileSource::new(path.as_ref())?;
        let statistic = create_statistic(statistic_name)?;
        Self::new(Box::new(source), statistic)
    }

    pub fn statistic(&self) -> &dyn Statistic {
        self.statistic.as_ref()
    }

    fn lines(&self) -> Result<&[String]> {
        let lines = self
            .lines
            .get_or_try_init(|| self.source.read().map(|text| split_lines(&text)))?;
        Ok(lines)
    }

    /// Compile the statistic over the (memoized) lines of the source.
    pub fn calculate(&self) -> Result<Report> {
        Ok(self.statistic.compile(self.lines()?))
    }

    /// Format every record of the report, write each line to stdout in
    /// record order, and return the formatted lines.
    pub fn print(&self) -> Result<Vec<String>> {
        let report = self.calculate()?;
        let formatted: Vec<String> = report
            .records()
            .iter()
            .map(|record| self.statistic.format_line(record, report.layout()))
            .collect();

        for line in &formatted {
            println!("{}", line);
        }
        Ok(formatted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::statistic::TotalStatistic;
    use pageviews_types::{Layout, StatRecord};
    use std::cell::Cell;
    use std::path::PathBuf;
    use std::rc::Rc;

    #[derive(Debug)]
    struct CountingSource {
        path: PathBuf,
        reads: Rc<Cell<usize>>,
    }

    impl LineSource for CountingSource {
        fn path(&self) -> &Path {
            &self.path
        }

        fn read(&self) -> Result<String> {
            self.reads.set(self.reads.get() + 1);
            Ok("/index a\n/index b\n/about a".to_string())
        }
    }

    #[derive(Debug)]
    struct FailingSource {
        path: PathBuf,
    }

    impl LineSource for FailingSource {
        fn path(&self) -> &Path {
            &self.path
        }

        fn read(&self) -> Result<String> {
            Err(Error::File {
                path: self.path.clone(),
                source: std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "truncated"),
            })
        }
    }

    #[derive(Debug)]
    struct BlankStatistic;

    impl Statistic for BlankStatistic {
        fn id(&self) -> &str {
            " "
        }

        fn compile(&self, _lines: &[String]) -> Report {
            Report::new(Vec::new())
        }

        fn format_line(&self, _record: &StatRecord, _layout: &Layout) -> String {
            String::new()
        }
    }

    #[test]
    fn test_source_is_read_once() {
        let reads = Rc::new(Cell::new(0));
        let source = CountingSource {
            path: PathBuf::from("counting.log"),
            reads: Rc::clone(&reads),
        };
        let engine =
            StatsEngine::new(Box::new(source), Box::new(TotalStatistic)).expect("valid engine");

        let first = engine.calculate().expect("first calculate");
        let second = engine.calculate().expect("second calculate");

        assert_eq!(reads.get(), 1);
        assert_eq!(first, second);
        assert_eq!(first.records()[0], StatRecord::new("/index", 2));
    }

    #[test]
    fn test_blank_statistic_id_is_rejected() {
        let source = CountingSource {
            path: PathBuf::from("counting.log"),
            reads: Rc::new(Cell::new(0)),
        };
        let err = StatsEngine::new(Box::new(source), Box::new(BlankStatistic)).unwrap_err();
        assert!(matches!(err, Error::InvalidStrategy(_)));
    }

    #[test]
    fn test_read_failure_surfaces_as_file_error() {
        let source = FailingSource {
            path: PathBuf::from("corrupted.log"),
        };
        let engine =
            StatsEngine::new(Box::new(source), Box::new(TotalStatistic)).expect("valid engine");

        let err = engine.calculate().unwrap_err();
        match err {
            Error::File { path, .. } => assert_eq!(path, PathBuf::from("corrupted.log")),
            other => panic!("expected Error::File, got {:?}", other),
        }
    }

    #[test]
    fn test_for_file_rejects_unknown_statistic() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("access.log");
        std::fs::write(&path, "/index 1.2.3.4\n").expect("Failed to write log");

        let err = StatsEngine::for_file(&path, "not_supported").unwrap_err();
        assert!(matches!(err, Error::StatisticNotSupported(_)));
    }
}
