//! Line-by-line access to calibration files.

use crate::{SourceError, SourceResult};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

/// A calibration file read lazily, one line at a time.
///
/// Each call to [`open`](Self::open) starts a fresh pass over the file.
#[derive(Debug, Clone)]
pub struct FileLineSource {
    path: PathBuf,
}

impl FileLineSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Open the file and return an iterator over its lines.
    ///
    /// A missing file is reported as [`SourceError::NotFound`]; every other
    /// failure, here or while iterating, as [`SourceError::Read`].
    pub fn open(&self) -> SourceResult<SourceLines<BufReader<File>>> {
        let display = self.path.display().to_string();
        log::debug!("opening calibration source {}", display);

        let file = File::open(&self.path).map_err(|e| SourceError::from_io(display.clone(), e))?;
        Ok(SourceLines::new(display, BufReader::new(file)))
    }
}

/// Lines of a buffered reader, with I/O errors tagged by source path.
///
/// Iteration stops after the first error.
#[derive(Debug)]
pub struct SourceLines<R> {
    path: String,
    lines: io::Lines<R>,
    failed: bool,
}

impl<R: BufRead> SourceLines<R> {
    pub fn new(path: impl Into<String>, reader: R) -> Self {
        Self {
            path: path.into(),
            lines: reader.lines(),
            failed: false,
        }
    }
}

impl<R: BufRead> Iterator for SourceLines<R> {
    type Item = SourceResult<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        match self.lines.next()? {
            Ok(line) => Some(Ok(line)),
            Err(e) => {
                self.failed = true;
                Some(Err(SourceError::from_io(self.path.clone(), e)))
            }
        }
    }
}
