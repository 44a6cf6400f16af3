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

//! Error types for the archive builder

use chrono::NaiveDate;
use reserve_types::{HourCounts, ProductFamily};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ArchiveError {
    #[error("config error: {0}")]
    Config(String),

    #[error("{family} request failed: {source}")]
    Transport {
        family: ProductFamily,
        source: reqwest::Error,
    },

    #[error("{family} download failed with status {status}")]
    HttpStatus {
        family: ProductFamily,
        status: reqwest::StatusCode,
    },

    #[error("failed to parse {family} row {line:?}: {reason}")]
    Parse {
        family: ProductFamily,
        line: String,
        reason: String,
    },

    #[error("{family} row dated {date} is outside the requested range")]
    DateOutOfRange {
        family: ProductFamily,
        date: NaiveDate,
    },

    #[error("invalid date range {from} to {to}")]
    InvalidRange { from: NaiveDate, to: NaiveDate },

    #[error("incomplete data for {date}: num hours {counts}")]
    IncompleteDay { date: NaiveDate, counts: HourCounts },

    #[error("malformed archive {path}: {reason}")]
    MalformedArchive { path: PathBuf, reason: String },

    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl ArchiveError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn parse(family: ProductFamily, line: &str, reason: impl Into<String>) -> Self {
        Self::Parse {
            family,
            line: line.to_owned(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ArchiveError>;
