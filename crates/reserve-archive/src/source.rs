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

//! Data source abstraction for auction result downloads

use crate::error::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use reserve_types::ProductFamily;

/// Families are downloaded in this order for every range
pub const FETCH_ORDER: [ProductFamily; 3] = [
    ProductFamily::Mfrr,
    ProductFamily::Afrr,
    ProductFamily::Fcr,
];

/// Source of raw auction rows for a product family
#[async_trait]
pub trait ReserveSource: Send + Sync {
    /// Fetch data rows for the inclusive range `from..=to`.
    ///
    /// Header and footer lines of the download are already removed.
    async fn fetch(
        &self,
        family: ProductFamily,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<String>>;

    /// Source name for logging
    fn name(&self) -> &str;
}

/// Strip the text download framing: the first line is a header, the last two
/// are a footer and the empty remainder after the final newline.
pub fn data_lines(body: &str) -> Vec<String> {
    let lines: Vec<&str> = body.split('\n').collect();
    if lines.len() < 3 {
        return Vec::new();
    }

    lines
        .iter()
        .skip(1)
        .take(lines.len() - 3)
        .map(|line| line.trim_end_matches('\r').to_owned())
        .collect()
}
