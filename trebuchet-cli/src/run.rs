//! A single calibration run over the configured input.

use crate::config::RunConfig;
use trebuchet::{CalibrationReport, CalibrationResult, CalibrationSummer, FileLineSource, SourceError};

/// What a successful run produced.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub result: CalibrationResult,
    /// Present when the configuration asked for a report.
    pub report: Option<CalibrationReport>,
}

pub fn run(config: &RunConfig) -> Result<RunOutput, SourceError> {
    let summer = if config.word_normalization {
        CalibrationSummer::with_words()
    } else {
        CalibrationSummer::digits_only()
    };
    let lines = FileLineSource::new(&config.input).open()?;

    let output = if config.report {
        let report = summer.try_report(lines)?;
        RunOutput {
            result: report.result().clone(),
            report: Some(report),
        }
    } else {
        RunOutput {
            result: summer.try_summarize(lines)?,
            report: None,
        }
    };

    for skipped in &output.result.skipped {
        log::warn!("line {}: no digits found, skipping", skipped.line_number);
    }
    log::debug!(
        "processed {} lines from {}",
        output.result.lines,
        config.input.display()
    );

    Ok(output)
}
