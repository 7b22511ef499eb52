//! # Metrics
//!
//! Per-generation fitness statistics and the sinks that consume them once a
//! run is finished.
//!
//! A [`ConvergenceHistory`] holds one [`GenerationStats`] record per generation,
//! starting with the initial population at generation 0. Drawing the three
//! series is left to whatever [`MetricsSink`] receives the history.
//!
//! ## Example
//!
//! ```rust
//! use genesis::metrics::{ConvergenceHistory, CsvSink, GenerationStats, MetricsSink};
//!
//! let mut history = ConvergenceHistory::new();
//! history.push(GenerationStats::new(0, 3, 1, 0));
//! history.push(GenerationStats::new(1, 4, 2, 1));
//!
//! let mut sink = CsvSink::new(Vec::new());
//! sink.consume(&history).unwrap();
//!
//! let csv = String::from_utf8(sink.into_inner()).unwrap();
//! assert_eq!(csv, "generation,best,median,worst\n0,3,1,0\n1,4,2,1\n");
//! ```

use std::io::Write;

use crate::error::Result;

/// Fitness of the best, middle-ranked and worst individual of one generation.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationStats {
    pub generation: usize,
    pub best: usize,
    /// Fitness at rank `popsize / 2`, not a statistical median.
    pub median: usize,
    pub worst: usize,
    /// Whether this generation got a progress line. Set by
    /// [`ConvergenceHistory::push`].
    pub reported: bool,
}

impl GenerationStats {
    pub fn new(generation: usize, best: usize, median: usize, worst: usize) -> Self {
        Self {
            generation,
            best,
            median,
            worst,
            reported: false,
        }
    }
}

/// Decides whether a generation gets a progress line.
///
/// Generation 0 is always reported. Generations 1 and 2 never are. From
/// generation 3 on, a generation is reported when its best fitness beats the
/// previous generation's.
pub fn should_report(generation: usize, previous_best: Option<usize>, best: usize) -> bool {
    match previous_best {
        _ if generation == 0 => true,
        Some(previous) => generation > 2 && best > previous,
        None => false,
    }
}

/// The ordered per-generation statistics of a run.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConvergenceHistory {
    records: Vec<GenerationStats>,
}

impl ConvergenceHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record and decides, via [`should_report`] against the
    /// previous record's best, whether it is reported.
    pub fn push(&mut self, mut stats: GenerationStats) {
        let previous_best = self.records.last().map(|r| r.best);
        stats.reported = should_report(stats.generation, previous_best, stats.best);
        self.records.push(stats);
    }

    pub fn records(&self) -> &[GenerationStats] {
        &self.records
    }

    pub fn last(&self) -> Option<&GenerationStats> {
        self.records.last()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn best(&self) -> Vec<usize> {
        self.records.iter().map(|r| r.best).collect()
    }

    pub fn median(&self) -> Vec<usize> {
        self.records.iter().map(|r| r.median).collect()
    }

    pub fn worst(&self) -> Vec<usize> {
        self.records.iter().map(|r| r.worst).collect()
    }

    /// Generations that received a progress line.
    pub fn reported_generations(&self) -> Vec<usize> {
        self.records
            .iter()
            .filter(|r| r.reported)
            .map(|r| r.generation)
            .collect()
    }
}

/// Consumes the finished statistics of a run, e.g. to chart them.
pub trait MetricsSink {
    fn consume(&mut self, history: &ConvergenceHistory) -> Result<()>;
}

/// Discards the history.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl MetricsSink for NullSink {
    fn consume(&mut self, _history: &ConvergenceHistory) -> Result<()> {
        Ok(())
    }
}

/// Writes the history as CSV with a `generation,best,median,worst` header.
#[derive(Debug)]
pub struct CsvSink<W: Write> {
    writer: W,
}

impl<W: Write> CsvSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> MetricsSink for CsvSink<W> {
    fn consume(&mut self, history: &ConvergenceHistory) -> Result<()> {
        writeln!(self.writer, "generation,best,median,worst")?;
        for record in history.records() {
            writeln!(
                self.writer,
                "{},{},{},{}",
                record.generation, record.best, record.median, record.worst
            )?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GeneticError;

    fn history(bests: &[usize]) -> ConvergenceHistory {
        let mut history = ConvergenceHistory::new();
        for (generation, best) in bests.iter().enumerate() {
            history.push(GenerationStats::new(generation, *best, 0, 0));
        }
        history
    }

    #[test]
    fn test_generation_zero_always_reported() {
        assert!(should_report(0, None, 0));
    }

    #[test]
    fn test_early_improvements_not_reported() {
        assert!(!should_report(1, Some(1), 5));
        assert!(!should_report(2, Some(1), 5));
        assert!(should_report(3, Some(1), 5));
    }

    #[test]
    fn test_unchanged_best_not_reported() {
        assert!(!should_report(7, Some(4), 4));
    }

    #[test]
    fn test_reported_generations() {
        let history = history(&[1, 2, 3, 3, 4, 4, 6]);
        assert_eq!(history.reported_generations(), vec![0, 4, 6]);
    }

    #[test]
    fn test_series_accessors() {
        let mut history = ConvergenceHistory::new();
        history.push(GenerationStats::new(0, 3, 2, 1));
        history.push(GenerationStats::new(1, 4, 3, 2));

        assert_eq!(history.best(), vec![3, 4]);
        assert_eq!(history.median(), vec![2, 3]);
        assert_eq!(history.worst(), vec![1, 2]);
        assert_eq!(history.len(), 2);
        assert_eq!(history.last(), Some(&GenerationStats::new(1, 4, 3, 2)));
    }

    #[test]
    fn test_push_marks_reported_records() {
        let history = history(&[1, 2, 3, 3, 4]);
        let flags: Vec<bool> = history.records().iter().map(|r| r.reported).collect();

        assert_eq!(flags, vec![true, false, false, false, true]);
    }

    #[test]
    fn test_push_overrides_caller_flag() {
        let mut history = ConvergenceHistory::new();
        history.push(GenerationStats::new(0, 2, 1, 0));

        let mut stats = GenerationStats::new(1, 3, 1, 0);
        stats.reported = true;
        history.push(stats);

        assert_eq!(history.reported_generations(), vec![0]);
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_csv_sink_propagates_io_errors() {
        let mut sink = CsvSink::new(FailingWriter);
        let result = sink.consume(&history(&[1]));
        assert!(matches!(result, Err(GeneticError::Io(_))));
    }

    #[test]
    fn test_null_sink() {
        assert!(NullSink.consume(&history(&[1, 2])).is_ok());
    }
}
