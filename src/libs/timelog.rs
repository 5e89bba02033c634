//! Append-only per-issue time log.
//!
//! Each issue key owns one text file under `<data dir>/log/`, named
//! `<KEY>.log`. Every start or stop of progress appends a single line:
//!
//! ```text
//! Start@2024-01-01 09:00:00
//! Stop@2024-01-01 09:30:00
//! ```
//!
//! Lines are never rewritten or removed. The file format does not enforce
//! Start/Stop alternation, so the pairing rules in [`intervals`] decide how
//! duplicate and unmatched markers count:
//!
//! - a Start while an interval is already open is ignored,
//! - a Stop with no open interval is ignored,
//! - an interval still open after the last line is closed at `now`.

use super::data_storage::DataStorage;
use chrono::{Duration, NaiveDateTime, Timelike};
use std::fmt::{self, Display, Formatter};
use std::fs::{self, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Subdirectory of the data directory holding the per-issue logs.
pub const LOG_DIR: &str = "log";
pub const LOG_EXTENSION: &str = "log";
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const SEPARATOR: char = '@';

#[derive(Debug, Error)]
pub enum TimeLogError {
    #[error("time log for issue {key} is not accessible: {source}")]
    Io {
        key: String,
        #[source]
        source: io::Error,
    },
    #[error("malformed entry on line {line} of the time log for issue {key}: {reason}")]
    MalformedEntry { key: String, line: usize, reason: String },
    #[error("'{0}' is not a usable issue key")]
    InvalidKey(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Start,
    Stop,
}

impl Transition {
    pub fn label(&self) -> &'static str {
        match self {
            Transition::Start => "Start",
            Transition::Stop => "Stop",
        }
    }
}

impl Display for Transition {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Transition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Start" => Ok(Transition::Start),
            "Stop" => Ok(Transition::Stop),
            other => Err(format!("unknown transition '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogEntry {
    pub transition: Transition,
    pub timestamp: NaiveDateTime,
}

impl LogEntry {
    pub fn new(transition: Transition, timestamp: NaiveDateTime) -> Self {
        Self { transition, timestamp }
    }

    /// Parses one `<Transition>@<YYYY-MM-DD HH:MM:SS>` line.
    pub fn parse(line: &str) -> Result<Self, String> {
        let (transition, timestamp) = line
            .split_once(SEPARATOR)
            .ok_or_else(|| format!("missing '{}' separator", SEPARATOR))?;
        let transition = transition.trim().parse::<Transition>()?;
        let timestamp = NaiveDateTime::parse_from_str(timestamp.trim(), TIMESTAMP_FORMAT)
            .map_err(|err| format!("bad timestamp '{}': {}", timestamp.trim(), err))?;

        Ok(Self { transition, timestamp })
    }
}

impl Display for LogEntry {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.transition, SEPARATOR, self.timestamp.format(TIMESTAMP_FORMAT))
    }
}

/// One counted stretch of work. `end` is `None` for the interval still open at `now`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    pub start: NaiveDateTime,
    pub end: Option<NaiveDateTime>,
    pub duration: Duration,
}

/// Pairs Start/Stop entries in file order.
///
/// `now` closes a trailing open interval and is truncated to whole seconds.
pub fn intervals(entries: &[LogEntry], now: NaiveDateTime) -> Vec<Interval> {
    let now = now.with_nanosecond(0).unwrap_or(now);
    let mut open: Option<NaiveDateTime> = None;
    let mut result = Vec::new();

    for entry in entries {
        match (entry.transition, open) {
            (Transition::Start, None) => open = Some(entry.timestamp),
            (Transition::Start, Some(_)) => {}
            (Transition::Stop, Some(start)) => {
                result.push(Interval {
                    start,
                    end: Some(entry.timestamp),
                    duration: entry.timestamp - start,
                });
                open = None;
            }
            (Transition::Stop, None) => {}
        }
    }

    if let Some(start) = open {
        result.push(Interval {
            start,
            end: None,
            duration: now - start,
        });
    }

    result
}

/// Total time across all intervals, in whole seconds.
pub fn accumulate(entries: &[LogEntry], now: NaiveDateTime) -> Duration {
    intervals(entries, now)
        .iter()
        .fold(Duration::zero(), |total, interval| total + interval.duration)
}

/// File-backed store of per-issue logs.
#[derive(Debug, Clone)]
pub struct TimeLog {
    dir: PathBuf,
}

impl TimeLog {
    pub fn new(storage: &DataStorage) -> Self {
        Self::with_dir(storage.dir(LOG_DIR))
    }

    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Location of the log file for `key`.
    ///
    /// Keys become file names, so empty keys and anything that could escape the
    /// log directory are rejected.
    pub fn path(&self, key: &str) -> Result<PathBuf, TimeLogError> {
        let usable = !key.trim().is_empty() && !key.contains(['/', '\\']) && !key.contains("..");
        if !usable {
            return Err(TimeLogError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{}.{}", key, LOG_EXTENSION)))
    }

    pub fn append(&self, key: &str, transition: Transition, timestamp: NaiveDateTime) -> Result<(), TimeLogError> {
        let path = self.path(key)?;
        let io_err = |source| TimeLogError::Io { key: key.to_string(), source };

        fs::create_dir_all(&self.dir).map_err(io_err)?;
        let mut file = OpenOptions::new().create(true).append(true).open(&path).map_err(io_err)?;
        let entry = LogEntry::new(transition, timestamp);
        writeln!(file, "{}", entry).map_err(io_err)?;

        tracing::debug!(key, entry = %entry, path = %path.display(), "time log entry appended");
        Ok(())
    }

    /// Reads every entry of the log in file order.
    ///
    /// A missing log is an error, not an empty history.
    pub fn entries(&self, key: &str) -> Result<Vec<LogEntry>, TimeLogError> {
        let path = self.path(key)?;
        let io_err = |source| TimeLogError::Io { key: key.to_string(), source };

        let file = fs::File::open(&path).map_err(io_err)?;
        let mut entries = Vec::new();
        for (index, line) in BufReader::new(file).lines().enumerate() {
            let line = line.map_err(io_err)?;
            let entry = LogEntry::parse(&line).map_err(|reason| TimeLogError::MalformedEntry {
                key: key.to_string(),
                line: index + 1,
                reason,
            })?;
            entries.push(entry);
        }

        tracing::debug!(key, count = entries.len(), "time log read");
        Ok(entries)
    }

    pub fn intervals(&self, key: &str, now: NaiveDateTime) -> Result<Vec<Interval>, TimeLogError> {
        Ok(intervals(&self.entries(key)?, now))
    }

    pub fn accumulate(&self, key: &str, now: NaiveDateTime) -> Result<Duration, TimeLogError> {
        Ok(accumulate(&self.entries(key)?, now))
    }
}
