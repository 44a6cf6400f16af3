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

//! Fetch → aggregate → write pipeline and the yearly resume loop

use crate::aggregate::DayBook;
use crate::archive::YearArchive;
use crate::config::ArchiveConfig;
use crate::error::{ArchiveError, Result};
use crate::plan::{YearPlan, plan_year, years_to_process};
use crate::source::{FETCH_ORDER, ReserveSource};
use chrono::{Datelike, NaiveDate};
use std::collections::BTreeMap;
use tracing::{debug, info};

/// Outcome of a full run over all years
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Years that were already fully archived
    pub complete_years: Vec<i32>,
    /// Lines appended per year
    pub written: BTreeMap<i32, usize>,
}

impl RunReport {
    pub fn total_written(&self) -> usize {
        self.written.values().sum()
    }
}

/// Builds the yearly archives from a [`ReserveSource`]
#[derive(Debug)]
pub struct ArchiveBuilder<S> {
    source: S,
    config: ArchiveConfig,
}

impl<S: ReserveSource> ArchiveBuilder<S> {
    pub fn new(source: S, config: ArchiveConfig) -> Self {
        Self { source, config }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn archive(&self, year: i32) -> YearArchive {
        YearArchive::new(&self.config.data_dir, year)
    }

    /// Bring every year from `starting_year` up to date as of `today`
    pub async fn run(&self, today: NaiveDate) -> Result<RunReport> {
        let cutoff = self.config.cutoff(today);
        info!(
            "Archiving {} from {} through {cutoff}",
            self.source.name(),
            self.config.starting_year
        );

        let mut report = RunReport::default();
        for year in years_to_process(self.config.starting_year, cutoff) {
            let archive = self.archive(year);
            let last_archived = archive.last_date()?;

            match plan_year(year, last_archived, cutoff)? {
                YearPlan::Complete => {
                    info!("Have all of {year}");
                    report.complete_years.push(year);
                }
                YearPlan::Fetch { from, to } => {
                    let written = self.process_range(from, to).await?;
                    report.written.insert(year, written);

                    if last_archived.is_none() && year != cutoff.year() {
                        tokio::time::sleep(self.config.year_delay()).await;
                    }
                }
            }
        }

        Ok(report)
    }

    /// Download, validate and append the inclusive range `from..=to`.
    ///
    /// The range must lie within one year. Nothing is written unless every
    /// day of the range is complete.
    pub async fn process_range(&self, from: NaiveDate, to: NaiveDate) -> Result<usize> {
        if from > to || from.year() != to.year() {
            return Err(ArchiveError::InvalidRange { from, to });
        }

        info!("Downloading {from} to {to}");
        let mut book = DayBook::new(from, to)?;

        for (i, family) in FETCH_ORDER.into_iter().enumerate() {
            if i > 0 {
                tokio::time::sleep(self.config.query_delay()).await;
            }
            info!("Downloading {family}");
            let lines = self.source.fetch(family, from, to).await?;
            let rows = book.ingest(family, &lines, &self.config.grid_area)?;
            debug!("{family}: {rows} hourly rows for {} days", book.len());
        }

        let summaries = book.summarize(self.config.min_hours)?;
        let archive = self.archive(from.year());
        let written = archive.append(&summaries)?;
        info!("Wrote {written} lines to {}", archive.path().display());

        Ok(written)
    }
}
