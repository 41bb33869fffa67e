//! Per-line calibration values and their running total.

use crate::{CalibrationReport, NumberWordTable};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::convert::Infallible;

/// First and last numeral of `text` combined as `10 * first + last`.
///
/// A single numeral is used for both positions ("treb7uchet" gives 77).
/// Returns `None` when `text` holds no numerals.
pub fn calibration_value(text: &str) -> Option<u8> {
    let mut digits = text.chars().filter_map(|c| c.to_digit(10));
    let first = digits.next()?;
    let last = digits.last().unwrap_or(first);
    Some((first * 10 + last) as u8)
}

/// Sum the calibration values of `lines`.
///
/// With `use_word_normalization`, spelled-out numbers are converted with
/// the standard [`NumberWordTable`] before digits are extracted.
pub fn summarize<I>(lines: I, use_word_normalization: bool) -> CalibrationResult
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let summer = if use_word_normalization {
        CalibrationSummer::with_words()
    } else {
        CalibrationSummer::digits_only()
    };
    summer.summarize(lines)
}

/// The outcome of calibrating a single line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineCalibration<'a> {
    /// Line text after word normalization (the input itself when disabled).
    pub normalized: Cow<'a, str>,
    /// Two-digit value, `None` if the line had no numerals.
    pub value: Option<u8>,
}

impl LineCalibration<'_> {
    pub fn is_skipped(&self) -> bool {
        self.value.is_none()
    }
}

/// A line that contributed nothing because it held no numerals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedLine {
    /// 1-based position in the input.
    pub line_number: usize,
    pub text: String,
}

/// Running total plus diagnostics for a calibration run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalibrationResult {
    pub total: u64,
    /// Number of lines consumed, skipped ones included.
    pub lines: usize,
    pub skipped: Vec<SkippedLine>,
}

impl CalibrationResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one calibrated line into the result.
    pub fn record(&mut self, line_number: usize, text: &str, calibration: &LineCalibration<'_>) {
        self.lines += 1;
        match calibration.value {
            Some(value) => self.total += u64::from(value),
            None => self.skipped.push(SkippedLine {
                line_number,
                text: text.to_string(),
            }),
        }
    }

    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }
}

/// Extracts calibration values, optionally normalizing number words first.
#[derive(Debug, Clone, Copy)]
pub struct CalibrationSummer<'t> {
    table: Option<&'t NumberWordTable>,
}

impl CalibrationSummer<'static> {
    /// Only literal numerals count.
    pub fn digits_only() -> Self {
        Self { table: None }
    }

    /// Spelled-out numbers count too, using [`NumberWordTable::standard`].
    pub fn with_words() -> Self {
        Self {
            table: Some(NumberWordTable::standard()),
        }
    }
}

impl<'t> CalibrationSummer<'t> {
    pub fn with_table(table: &'t NumberWordTable) -> Self {
        Self { table: Some(table) }
    }

    pub fn normalizes_words(&self) -> bool {
        self.table.is_some()
    }

    pub fn calibrate<'a>(&self, line: &'a str) -> LineCalibration<'a> {
        let normalized = match self.table {
            Some(table) => table.normalize(line),
            None => Cow::Borrowed(line),
        };
        let value = calibration_value(&normalized);
        LineCalibration { normalized, value }
    }

    pub fn summarize<I>(&self, lines: I) -> CalibrationResult
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        match self.try_summarize(lines.into_iter().map(Ok::<_, Infallible>)) {
            Ok(result) => result,
            Err(never) => match never {},
        }
    }

    /// Like [`summarize`](Self::summarize) over a fallible line sequence.
    /// The first error stops the run and is returned as is.
    pub fn try_summarize<I, S, E>(&self, lines: I) -> Result<CalibrationResult, E>
    where
        I: IntoIterator<Item = Result<S, E>>,
        S: AsRef<str>,
    {
        let mut result = CalibrationResult::new();
        for (idx, line) in lines.into_iter().enumerate() {
            let line = line?;
            let line = line.as_ref();
            result.record(idx + 1, line, &self.calibrate(line));
        }
        Ok(result)
    }

    /// Calibrate every line, keeping a per-line breakdown.
    pub fn try_report<I, S, E>(&self, lines: I) -> Result<CalibrationReport, E>
    where
        I: IntoIterator<Item = Result<S, E>>,
        S: AsRef<str>,
    {
        let mut report = CalibrationReport::new();
        for (idx, line) in lines.into_iter().enumerate() {
            let line = line?;
            let line = line.as_ref();
            report.push(idx + 1, line, &self.calibrate(line));
        }
        Ok(report)
    }
}
