// Copyright (c) 2025 SOLARE S.R.O.
//
// This file is part of FluxION.
//
// Licensed under the Creative Commons Attribution-NonCommercial-NoDerivatives 4.0 International
// (CC BY-NC-ND 4.0). You may use and share this file for non-commercial purposes only and you may not
// create derivatives. See <https://creativecommons.org/licenses/by-nc-nd/4.0/>.
//
// This software is provided "AS IS", without warranty of any kind.
//
// For commercial licensing, please contact: info@solare.cz

//! Append-only yearly archive files

use crate::error::{ArchiveError, Result};
use chrono::{Datelike, NaiveDate};
use reserve_types::DailySummary;
use std::fs::OpenOptions;
use std::io::{BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::info;

/// The archive of one year: `<data_dir>/<year>.csv`, one line per day
#[derive(Debug, Clone)]
pub struct YearArchive {
    year: i32,
    path: PathBuf,
}

impl YearArchive {
    pub fn new(data_dir: &Path, year: i32) -> Self {
        Self {
            year,
            path: data_dir.join(format!("{year}.csv")),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Date of the last archived day, or `None` when nothing is archived yet.
    ///
    /// Lines are chronological, so the last line before the first blank one
    /// holds the latest date. A file with only blank lines counts as empty.
    pub fn last_date(&self) -> Result<Option<NaiveDate>> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(ArchiveError::io(&self.path, e)),
        };

        if content.trim().is_empty() {
            return Ok(None);
        }

        let Some(last_line) = content.lines().take_while(|line| !line.trim().is_empty()).last()
        else {
            return Err(ArchiveError::MalformedArchive {
                path: self.path.clone(),
                reason: "archive starts with a blank line".to_owned(),
            });
        };

        let field = last_line.split(',').next().unwrap_or_default().trim();
        let date = NaiveDate::parse_from_str(field, "%Y-%m-%d").map_err(|e| {
            ArchiveError::MalformedArchive {
                path: self.path.clone(),
                reason: format!("invalid date {field:?} in last line: {e}"),
            }
        })?;

        if date.year() != self.year {
            return Err(ArchiveError::MalformedArchive {
                path: self.path.clone(),
                reason: format!("last date {date} does not belong to {}", self.year),
            });
        }

        Ok(Some(date))
    }

    /// Append one line per summary; returns the number of lines written
    pub fn append(&self, summaries: &[DailySummary]) -> Result<usize> {
        if summaries.is_empty() {
            return Ok(0);
        }

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| ArchiveError::io(parent, e))?;
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| ArchiveError::io(&self.path, e))?;
        let mut writer = BufWriter::new(file);

        for summary in summaries {
            let line = summary.to_archive_line();
            info!("Writing {line}");
            writeln!(writer, "{line}").map_err(|e| ArchiveError::io(&self.path, e))?;
        }
        writer.flush().map_err(|e| ArchiveError::io(&self.path, e))?;

        Ok(summaries.len())
    }
}
