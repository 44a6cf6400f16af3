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

//! Groups parsed rows into per-day records

use crate::error::{ArchiveError, Result};
use crate::parse::parse_row;
use chrono::NaiveDate;
use reserve_types::{DailyRecord, DailySummary, ProductFamily};
use std::collections::BTreeMap;

/// Per-day records for one inclusive date range.
///
/// Every day of the range has an entry up front; rows dated outside the
/// range are rejected rather than creating new days.
#[derive(Debug, Clone)]
pub struct DayBook {
    records: BTreeMap<NaiveDate, DailyRecord>,
}

impl DayBook {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Result<Self> {
        if from > to {
            return Err(ArchiveError::InvalidRange { from, to });
        }

        let records = from
            .iter_days()
            .take_while(|date| *date <= to)
            .map(|date| (date, DailyRecord::new(date)))
            .collect();
        Ok(Self { records })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, date: NaiveDate) -> Option<&DailyRecord> {
        self.records.get(&date)
    }

    /// Add every data line of `family`; returns how many rows were accepted
    pub fn ingest(&mut self, family: ProductFamily, lines: &[String], grid_area: &str) -> Result<usize> {
        let mut accepted = 0;
        for line in lines {
            let Some(row) = parse_row(family, line, grid_area)? else {
                continue;
            };
            let record = self
                .records
                .get_mut(&row.date)
                .ok_or(ArchiveError::DateOutOfRange {
                    family,
                    date: row.date,
                })?;
            for (product, sample) in row.samples {
                record.push(product, sample);
            }
            accepted += 1;
        }
        Ok(accepted)
    }

    /// Summaries for every day in order.
    ///
    /// Stops at the first day lacking `min_hours` samples for any product.
    pub fn summarize(&self, min_hours: usize) -> Result<Vec<DailySummary>> {
        self.records
            .values()
            .map(|record| {
                record
                    .summarize(min_hours)
                    .map_err(|counts| ArchiveError::IncompleteDay {
                        date: record.date(),
                        counts,
                    })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reserve_types::Product;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn afrr_lines(day: NaiveDate, hours: u32, area: &str) -> Vec<String> {
        (0..hours)
            .map(|h| format!("{day} {h:02}:00;{area};{h},00;1,0;{h},50;1,0"))
            .collect()
    }

    #[test]
    fn test_new_initializes_every_day() {
        let book = DayBook::new(date(2024, 2, 27), date(2024, 3, 1)).unwrap();
        assert_eq!(book.len(), 4);
        assert!(book.get(date(2024, 2, 29)).is_some());
        assert!(book.get(date(2024, 3, 2)).is_none());
    }

    #[test]
    fn test_new_rejects_reversed_range() {
        let result = DayBook::new(date(2024, 3, 2), date(2024, 3, 1));
        assert!(matches!(result, Err(ArchiveError::InvalidRange { .. })));
    }

    #[test]
    fn test_ingest_filters_area_and_groups_by_day() {
        let mut book = DayBook::new(date(2023, 1, 1), date(2023, 1, 2)).unwrap();
        let mut lines = afrr_lines(date(2023, 1, 1), 24, "SN4");
        lines.extend(afrr_lines(date(2023, 1, 1), 24, "SN1"));
        lines.extend(afrr_lines(date(2023, 1, 2), 23, "SN4"));

        let accepted = book.ingest(ProductFamily::Afrr, &lines, "SN4").unwrap();
        assert_eq!(accepted, 47);

        let first = book.get(date(2023, 1, 1)).unwrap();
        assert_eq!(first.samples(Product::AfrrUp).len(), 24);
        assert_eq!(first.samples(Product::AfrrDown).len(), 24);
        assert!(first.samples(Product::MfrrUp).is_empty());
        assert_eq!(
            book.get(date(2023, 1, 2)).unwrap().samples(Product::AfrrUp).len(),
            23
        );
    }

    #[test]
    fn test_ingest_rejects_rows_outside_range() {
        let mut book = DayBook::new(date(2023, 1, 1), date(2023, 1, 1)).unwrap();
        let lines = afrr_lines(date(2023, 1, 2), 1, "SN4");

        match book.ingest(ProductFamily::Afrr, &lines, "SN4") {
            Err(ArchiveError::DateOutOfRange { family, date: day }) => {
                assert_eq!(family, ProductFamily::Afrr);
                assert_eq!(day, date(2023, 1, 2));
            }
            other => panic!("expected DateOutOfRange, got {other:?}"),
        }
    }

    #[test]
    fn test_summarize_reports_incomplete_day() {
        let mut book = DayBook::new(date(2023, 1, 1), date(2023, 1, 1)).unwrap();
        book.ingest(ProductFamily::Afrr, &afrr_lines(date(2023, 1, 1), 24, "SN4"), "SN4")
            .unwrap();

        match book.summarize(22) {
            Err(ArchiveError::IncompleteDay { date: day, counts }) => {
                assert_eq!(day, date(2023, 1, 1));
                assert_eq!(counts.get(Product::AfrrUp), 24);
                assert_eq!(counts.get(Product::FcrN), 0);
            }
            other => panic!("expected IncompleteDay, got {other:?}"),
        }
    }
}
