use crate::{CalibrationResult, LineCalibration};
use std::fmt::{self, Write};
use unicode_width::UnicodeWidthStr;

/// One line of a [`CalibrationReport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub line_number: usize,
    pub text: String,
    /// Normalized text, present only when normalization changed the line.
    pub normalized: Option<String>,
    pub value: Option<u8>,
}

/// Per-line breakdown of a calibration run.
///
/// Renders as an aligned table:
///
/// ```text
/// line  value  text
/// 1        29  two1nine  -> 219
/// 2         -  abc
/// 2 lines, 1 skipped, total 29
/// ```
#[derive(Debug, Clone, Default)]
pub struct CalibrationReport {
    rows: Vec<ReportRow>,
    result: CalibrationResult,
}

impl CalibrationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line_number: usize, text: &str, calibration: &LineCalibration<'_>) {
        self.result.record(line_number, text, calibration);

        let normalized = if calibration.normalized != text {
            Some(calibration.normalized.to_string())
        } else {
            None
        };
        self.rows.push(ReportRow {
            line_number,
            text: text.to_string(),
            normalized,
            value: calibration.value,
        });
    }

    pub fn rows(&self) -> &[ReportRow] {
        &self.rows
    }

    pub fn result(&self) -> &CalibrationResult {
        &self.result
    }

    pub fn into_result(self) -> CalibrationResult {
        self.result
    }
}

impl fmt::Display for CalibrationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let number_width = self
            .rows
            .iter()
            .map(|row| row.line_number.to_string().len())
            .max()
            .unwrap_or(0)
            .max("line".len());
        let text_width = self
            .rows
            .iter()
            .map(|row| UnicodeWidthStr::width(row.text.as_str()))
            .max()
            .unwrap_or(0);

        write!(f, "{:<width$}  value  text", "line", width = number_width)?;

        let mut line = String::new();
        for row in &self.rows {
            line.clear();
            let value = match row.value {
                Some(value) => format!("{:02}", value),
                None => "-".to_string(),
            };
            write!(
                &mut line,
                "{:<width$}  {:>5}  {}",
                row.line_number,
                value,
                row.text,
                width = number_width
            )?;

            if let Some(normalized) = &row.normalized {
                let pad = text_width - UnicodeWidthStr::width(row.text.as_str());
                line.extend(std::iter::repeat(' ').take(pad));
                write!(&mut line, "  -> {}", normalized)?;
            }

            f.write_char('\n')?;
            // empty lines would otherwise leave trailing padding
            f.write_str(line.trim_end())?;
        }

        write!(
            f,
            "\n{} lines, {} skipped, total {}",
            self.result.lines,
            self.result.skipped_count(),
            self.result.total
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::CalibrationSummer;
    use std::convert::Infallible;

    fn report(summer: CalibrationSummer<'_>, lines: &[&str]) -> crate::CalibrationReport {
        match summer.try_report(lines.iter().map(Ok::<_, Infallible>)) {
            Ok(report) => report,
            Err(never) => match never {},
        }
    }

    #[test]
    fn report_shows_normalized_lines() {
        let report = report(
            CalibrationSummer::with_words(),
            &["two1nine", "abc", "treb7uchet", "zoneight234"],
        );

        assert_eq!(report.result().total, 120);
        insta::assert_snapshot!(report.to_string(), @r###"
        line  value  text
        1        29  two1nine     -> 219
        2         -  abc
        3        77  treb7uchet
        4        14  zoneight234  -> z18234
        4 lines, 1 skipped, total 120
        "###);
    }

    #[test]
    fn report_without_normalization() {
        let report = report(
            CalibrationSummer::digits_only(),
            &["1abc2", "pqr3stu8vwx", "", "a1b2c3d4e5f", "treb7uchet"],
        );

        insta::assert_snapshot!(report.to_string(), @r###"
        line  value  text
        1        12  1abc2
        2        38  pqr3stu8vwx
        3         -
        4        15  a1b2c3d4e5f
        5        77  treb7uchet
        5 lines, 1 skipped, total 142
        "###);
    }

    #[test]
    fn wide_characters_keep_arrows_aligned() {
        let report = report(CalibrationSummer::with_words(), &["日本one", "sixabc"]);

        insta::assert_snapshot!(report.to_string(), @r###"
        line  value  text
        1        11  日本one  -> 日本1
        2        66  sixabc   -> 6abc
        2 lines, 0 skipped, total 77
        "###);
    }

    #[test]
    fn rows_match_the_result() {
        let report = report(CalibrationSummer::with_words(), &["eightwo", "none"]);
        let rows = report.rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].normalized.as_deref(), Some("82"));
        // "none" contains "one"
        assert_eq!(rows[1].value, Some(11));

        let result = report.into_result();
        assert_eq!(result.total, 82 + 11);
        assert_eq!(result.lines, 2);
    }

    #[test]
    fn empty_report() {
        let report = report(CalibrationSummer::with_words(), &[]);
        insta::assert_snapshot!(report.to_string(), @r###"
        line  value  text
        0 lines, 0 skipped, total 0
        "###);
    }
}
