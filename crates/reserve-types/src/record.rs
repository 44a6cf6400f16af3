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

use crate::product::Product;
use chrono::NaiveDate;
use std::fmt;

/// One hourly auction result: clearing price and accepted volume
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceVolume {
    pub price: f64,
    pub volume: f64,
}

impl PriceVolume {
    pub fn new(price: f64, volume: f64) -> Self {
        Self { price, volume }
    }

    /// Sample for sources that publish no volume (FCR)
    pub fn price_only(price: f64) -> Self {
        Self { price, volume: 0.0 }
    }
}

/// Number of hourly samples collected per product for one day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HourCounts([usize; Product::COUNT]);

impl HourCounts {
    pub fn get(&self, product: Product) -> usize {
        self.0[product.index()]
    }

    /// Smallest count across all products
    pub fn min(&self) -> usize {
        self.0.iter().copied().min().unwrap_or(0)
    }

    /// True when every product has at least `min_hours` samples
    pub fn meets(&self, min_hours: usize) -> bool {
        self.min() >= min_hours
    }
}

impl fmt::Display for HourCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, product) in Product::ALL.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}={}", product.label(), self.get(*product))?;
        }
        Ok(())
    }
}

/// Hourly samples for every product on a single calendar day
#[derive(Debug, Clone, PartialEq)]
pub struct DailyRecord {
    date: NaiveDate,
    samples: [Vec<PriceVolume>; Product::COUNT],
}

impl DailyRecord {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            samples: std::array::from_fn(|_| Vec::with_capacity(24)),
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn push(&mut self, product: Product, sample: PriceVolume) {
        self.samples[product.index()].push(sample);
    }

    pub fn samples(&self, product: Product) -> &[PriceVolume] {
        &self.samples[product.index()]
    }

    pub fn hour_counts(&self) -> HourCounts {
        HourCounts(std::array::from_fn(|i| self.samples[i].len()))
    }

    /// Average the day's prices per product.
    ///
    /// Every product needs at least `min_hours` samples; otherwise the
    /// per-product counts are returned so the caller can report them.
    /// Means are rounded to the nearest integer, ties to even.
    pub fn summarize(&self, min_hours: usize) -> Result<DailySummary, HourCounts> {
        let counts = self.hour_counts();
        if !counts.meets(min_hours.max(1)) {
            return Err(counts);
        }

        Ok(DailySummary {
            date: self.date,
            averages: std::array::from_fn(|i| mean_price(&self.samples[i])),
        })
    }
}

#[expect(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn mean_price(samples: &[PriceVolume]) -> i64 {
    let total: f64 = samples.iter().map(|s| s.price).sum();
    (total / samples.len() as f64).round_ties_even() as i64
}

/// Daily average price per product, as stored in the yearly archive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailySummary {
    pub date: NaiveDate,
    pub averages: [i64; Product::COUNT],
}

impl DailySummary {
    pub fn average(&self, product: Product) -> i64 {
        self.averages[product.index()]
    }

    /// Archive line without trailing newline: `YYYY-MM-DD,v1,...,v7`
    pub fn to_archive_line(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for DailySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.date.format("%Y-%m-%d"))?;
        for value in &self.averages {
            write!(f, ",{value}")?;
        }
        Ok(())
    }
}
