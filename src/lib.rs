//! Calibration-line digit extraction and summation.
//!
//! Every line of a calibration document hides a two-digit value: its first
//! and last numeral. This crate recovers those values and totals them,
//! optionally reading spelled-out numbers ("two1nine", "eightwothree") as
//! digits first.
//!
//! ## Usage
//!
//! ```
//! use trebuchet::{summarize, CalibrationSummer};
//!
//! let result = summarize(["1abc2", "pqr3stu8vwx", "treb7uchet"], false);
//! assert_eq!(result.total, 12 + 38 + 77);
//!
//! let summer = CalibrationSummer::with_words();
//! assert_eq!(summer.calibrate("xtwone3four").value, Some(24));
//! ```
//!
//! ## Modules
//!
//! - [`number_words`] - Spelled-out number table and normalization
//! - [`summer`] - Per-line values and the running total
//! - [`report`] - Per-line breakdown for display
//! - [`line_source`] - Lazy line-by-line file access
//! - [`errors`] - Error types for reading input

pub mod errors;
pub mod line_source;
pub mod number_words;
pub mod report;
pub mod summer;

pub use errors::{SourceError, SourceResult};
pub use line_source::{FileLineSource, SourceLines};
pub use number_words::NumberWordTable;
pub use report::{CalibrationReport, ReportRow};
pub use summer::{
    calibration_value, summarize, CalibrationResult, CalibrationSummer, LineCalibration,
    SkippedLine,
};
