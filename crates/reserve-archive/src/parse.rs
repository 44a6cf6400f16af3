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

//! Row parsing for the semicolon-separated Mimer downloads

use crate::error::{ArchiveError, Result};
use chrono::{NaiveDate, NaiveDateTime};
use reserve_types::{PriceVolume, Product, ProductFamily};

const RESTORATION_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";
const FCR_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// FCR rows: timestamp, then a block of seven columns per product
const FCR_N_PRICE: usize = 1;
const FCR_D_UP_PRICE: usize = 8;
const FCR_D_DOWN_PRICE: usize = 15;
const FCR_PRICE_COLUMNS: [usize; 3] = [FCR_N_PRICE, FCR_D_UP_PRICE, FCR_D_DOWN_PRICE];

// aFFR/mFFR rows: timestamp, area code, then up and down price/volume pairs
const RESTORATION_COLUMNS: [(usize, usize); 2] = [(2, 3), (4, 5)];

/// One parsed hour: the day it belongs to and the samples it contributes
#[derive(Debug, Clone, PartialEq)]
pub struct HourRow {
    pub date: NaiveDate,
    pub samples: Vec<(Product, PriceVolume)>,
}

/// Parse a decimal using comma as the separator, rounded to two decimals.
///
/// `"12,34"` parses to `12.34`, `"0,00"` to `0.0`.
pub fn parse_decimal(field: &str) -> Option<f64> {
    let value: f64 = field.trim().replace(',', ".").parse().ok()?;
    if !value.is_finite() {
        return None;
    }
    format!("{value:.2}").parse().ok()
}

/// Parse one data line of `family`.
///
/// Returns `Ok(None)` for aFFR/mFFR rows of other grid areas.
pub fn parse_row(family: ProductFamily, line: &str, grid_area: &str) -> Result<Option<HourRow>> {
    let columns: Vec<&str> = line.split(';').collect();
    let field = |index: usize| {
        columns
            .get(index)
            .copied()
            .ok_or_else(|| ArchiveError::parse(family, line, format!("missing column {index}")))
    };
    let decimal = |index: usize| -> Result<f64> {
        let raw = field(index)?;
        parse_decimal(raw).ok_or_else(|| {
            ArchiveError::parse(family, line, format!("invalid decimal {raw:?} in column {index}"))
        })
    };

    let products = family.products().iter().copied();

    match family {
        ProductFamily::Fcr => {
            let date = parse_date(family, line, field(0)?, FCR_TIME_FORMAT)?;
            let samples = products
                .zip(FCR_PRICE_COLUMNS)
                .map(|(product, price)| Ok((product, PriceVolume::price_only(decimal(price)?))))
                .collect::<Result<Vec<_>>>()?;
            Ok(Some(HourRow { date, samples }))
        }
        ProductFamily::Afrr | ProductFamily::Mfrr => {
            if field(1)?.trim() != grid_area {
                return Ok(None);
            }
            let date = parse_date(family, line, field(0)?, RESTORATION_TIME_FORMAT)?;
            let samples = products
                .zip(RESTORATION_COLUMNS)
                .map(|(product, (price, volume))| {
                    Ok((product, PriceVolume::new(decimal(price)?, decimal(volume)?)))
                })
                .collect::<Result<Vec<_>>>()?;
            Ok(Some(HourRow { date, samples }))
        }
    }
}

fn parse_date(family: ProductFamily, line: &str, raw: &str, format: &str) -> Result<NaiveDate> {
    NaiveDateTime::parse_from_str(raw.trim(), format)
        .map(|timestamp| timestamp.date())
        .map_err(|e| ArchiveError::parse(family, line, format!("invalid timestamp {raw:?}: {e}")))
}
