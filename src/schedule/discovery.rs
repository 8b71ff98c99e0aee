//! Discovery of timecard exports on disk.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use regex::Regex;
use serde::Serialize;
use tracing::debug;

use crate::error::{EngineError, EngineResult};

/// A timecard export and the payday it closes.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct TimecardFile {
    /// The payday encoded in the file name.
    pub payday: NaiveDate,
    /// Where the file lives.
    pub path: PathBuf,
}

impl TimecardFile {
    /// Recognizes a timecard export by its file name.
    ///
    /// The first capture group of `pattern` must hold the payday as `YYYYMMDD`.
    /// Returns `None` for names that do not match or do not encode a real date.
    ///
    /// # Example
    ///
    /// ```
    /// use timecard_engine::schedule::TimecardFile;
    /// use regex::Regex;
    ///
    /// let pattern = Regex::new(r"^(\d{8})-time\.csv$").unwrap();
    /// let file = TimecardFile::from_path("/etc/timecards/20190531-time.csv", &pattern).unwrap();
    /// assert_eq!(file.payday.to_string(), "2019-05-31");
    /// assert!(TimecardFile::from_path("/etc/timecards/notes.txt", &pattern).is_none());
    /// ```
    pub fn from_path<P: AsRef<Path>>(path: P, pattern: &Regex) -> Option<Self> {
        let path = path.as_ref();
        let name = path.file_name()?.to_str()?;
        let stamp = pattern.captures(name)?.get(1)?.as_str();
        let payday = NaiveDate::parse_from_str(stamp, "%Y%m%d").ok()?;
        Some(Self {
            payday,
            path: path.to_path_buf(),
        })
    }
}

/// Lists the timecard exports in `dir`, ordered by payday.
///
/// # Errors
///
/// Returns [`EngineError::ConfigParseError`] if `pattern` is not a valid
/// regular expression and [`EngineError::Io`] if the directory cannot be read.
pub fn discover_timecards<P: AsRef<Path>>(dir: P, pattern: &str) -> EngineResult<Vec<TimecardFile>> {
    let dir = dir.as_ref();
    let pattern = Regex::new(pattern).map_err(|e| EngineError::ConfigParseError {
        path: "timecard_pattern".to_string(),
        message: e.to_string(),
    })?;
    let io_error = |source| EngineError::Io {
        path: dir.display().to_string(),
        source,
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_error)? {
        let entry = entry.map_err(io_error)?;
        if !entry.file_type().map_err(io_error)?.is_file() {
            continue;
        }
        if let Some(file) = TimecardFile::from_path(entry.path(), &pattern) {
            files.push(file);
        }
    }
    files.sort();

    debug!(dir = %dir.display(), found = files.len(), "Discovered timecards");
    Ok(files)
}
