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

//! Decides which days of a year still need downloading

use crate::error::{ArchiveError, Result};
use chrono::{Datelike, NaiveDate};
use std::ops::RangeInclusive;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YearPlan {
    /// Everything published for the year is archived
    Complete,
    /// Download and append the inclusive range `from..=to`
    Fetch { from: NaiveDate, to: NaiveDate },
}

/// Work for `year` given its last archived day and the publication cutoff.
///
/// A year is complete once Dec 31 is archived or the last archived day has
/// reached the cutoff; otherwise fetching resumes the day after the last
/// archived one (or on Jan 1) and runs to Dec 31 or the cutoff, whichever
/// comes first.
pub fn plan_year(
    year: i32,
    last_archived: Option<NaiveDate>,
    cutoff: NaiveDate,
) -> Result<YearPlan> {
    let (year_start, year_end) = year_bounds(year)?;
    let to = year_end.min(cutoff);

    let from = match last_archived {
        Some(last) if last >= year_end || last >= cutoff => return Ok(YearPlan::Complete),
        Some(last) => last.succ_opt().ok_or(ArchiveError::InvalidRange { from: last, to })?,
        None => year_start,
    };

    if from > to {
        return Ok(YearPlan::Complete);
    }
    Ok(YearPlan::Fetch { from, to })
}

/// Years to process, oldest first, up to the cutoff's year
pub fn years_to_process(starting_year: i32, cutoff: NaiveDate) -> RangeInclusive<i32> {
    starting_year..=cutoff.year()
}

fn year_bounds(year: i32) -> Result<(NaiveDate, NaiveDate)> {
    match (
        NaiveDate::from_ymd_opt(year, 1, 1),
        NaiveDate::from_ymd_opt(year, 12, 31),
    ) {
        (Some(start), Some(end)) => Ok((start, end)),
        _ => Err(ArchiveError::Config(format!("year {year} is out of range"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_new_past_year_fetches_whole_year() {
        let plan = plan_year(2023, None, date(2024, 6, 1)).unwrap();
        assert_eq!(
            plan,
            YearPlan::Fetch {
                from: date(2023, 1, 1),
                to: date(2023, 12, 31)
            }
        );
    }

    #[test]
    fn test_new_current_year_stops_at_cutoff() {
        let plan = plan_year(2024, None, date(2024, 6, 1)).unwrap();
        assert_eq!(
            plan,
            YearPlan::Fetch {
                from: date(2024, 1, 1),
                to: date(2024, 6, 1)
            }
        );
    }

    #[test]
    fn test_resume_past_year_runs_to_year_end() {
        let plan = plan_year(2023, Some(date(2023, 9, 14)), date(2024, 6, 1)).unwrap();
        assert_eq!(
            plan,
            YearPlan::Fetch {
                from: date(2023, 9, 15),
                to: date(2023, 12, 31)
            }
        );
    }

    #[test]
    fn test_resume_current_year_runs_to_cutoff() {
        let plan = plan_year(2024, Some(date(2024, 5, 20)), date(2024, 6, 1)).unwrap();
        assert_eq!(
            plan,
            YearPlan::Fetch {
                from: date(2024, 5, 21),
                to: date(2024, 6, 1)
            }
        );
    }

    #[test]
    fn test_year_end_archived_is_complete() {
        let plan = plan_year(2023, Some(date(2023, 12, 31)), date(2024, 6, 1)).unwrap();
        assert_eq!(plan, YearPlan::Complete);
    }

    #[test]
    fn test_cutoff_reached_is_complete() {
        assert_eq!(
            plan_year(2024, Some(date(2024, 6, 1)), date(2024, 6, 1)).unwrap(),
            YearPlan::Complete
        );
        assert_eq!(
            plan_year(2024, Some(date(2024, 6, 3)), date(2024, 6, 1)).unwrap(),
            YearPlan::Complete
        );
    }

    #[test]
    fn test_resume_day_before_cutoff_fetches_single_day() {
        let plan = plan_year(2024, Some(date(2024, 5, 31)), date(2024, 6, 1)).unwrap();
        assert_eq!(
            plan,
            YearPlan::Fetch {
                from: date(2024, 6, 1),
                to: date(2024, 6, 1)
            }
        );
    }

    #[test]
    fn test_year_after_cutoff_is_complete() {
        // Cutoff can fall in the previous year during the first days of January
        let plan = plan_year(2025, None, date(2024, 12, 30)).unwrap();
        assert_eq!(plan, YearPlan::Complete);
    }

    #[test]
    fn test_years_to_process() {
        let years: Vec<i32> = years_to_process(2023, date(2025, 3, 1)).collect();
        assert_eq!(years, vec![2023, 2024, 2025]);
        assert_eq!(years_to_process(2026, date(2025, 3, 1)).count(), 0);
    }
}
