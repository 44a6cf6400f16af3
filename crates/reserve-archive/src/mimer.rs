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

//! Svenska kraftnät Mimer text download client

use crate::config::ArchiveConfig;
use crate::error::{ArchiveError, Result};
use crate::source::{ReserveSource, data_lines};
use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client;
use reserve_types::ProductFamily;
use std::time::Duration;
use tracing::{debug, info};

const USER_AGENT: &str = concat!("reserve-archive/", env!("CARGO_PKG_VERSION"));

/// Download path and fixed query parameters for a family
fn endpoint(family: ProductFamily) -> (&'static str, Option<&'static str>) {
    match family {
        ProductFamily::Fcr => ("/PrimaryRegulation/DownloadText", Some("auctionTypeId=1")),
        ProductFamily::Afrr => ("/AutomaticFrequencyRestorationReserve/DownloadText", None),
        ProductFamily::Mfrr => (
            "/ManualFrequencyRestorationReserve/DownloadText",
            Some("ConstraintAreaId=0"),
        ),
    }
}

/// Period parameter value, `MM/DD/YYYY 00:00:00` URL-encoded
fn period_value(date: NaiveDate) -> String {
    let formatted = date.format("%m/%d/%Y 00:00:00").to_string();
    urlencoding::encode(&formatted).into_owned()
}

#[derive(Debug, Clone)]
pub struct MimerClient {
    base_url: String,
    client: Client,
}

impl MimerClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| ArchiveError::Config(format!("Failed to build HTTP client: {e}")))?;

        let base_url: String = base_url.into();
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            client,
        })
    }

    pub fn from_config(config: &ArchiveConfig) -> Result<Self> {
        info!("Initializing Mimer client for {}", config.base_url);
        Self::new(config.base_url.clone(), config.request_timeout())
    }

    /// Full download URL for a family and inclusive date range
    pub fn download_url(&self, family: ProductFamily, from: NaiveDate, to: NaiveDate) -> String {
        let (path, extra) = endpoint(family);
        let mut url = format!(
            "{}{path}?periodFrom={}&periodTo={}",
            self.base_url,
            period_value(from),
            period_value(to)
        );
        if let Some(extra) = extra {
            url.push('&');
            url.push_str(extra);
        }
        url
    }
}

#[async_trait]
impl ReserveSource for MimerClient {
    async fn fetch(
        &self,
        family: ProductFamily,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<String>> {
        let url = self.download_url(family, from, to);
        debug!("{family} URL: {url}");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| ArchiveError::Transport { family, source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ArchiveError::HttpStatus { family, status });
        }

        let body = response
            .text()
            .await
            .map_err(|source| ArchiveError::Transport { family, source })?;

        let lines = data_lines(&body);
        debug!("{family}: received {} data lines", lines.len());
        Ok(lines)
    }

    fn name(&self) -> &str {
        "mimer"
    }
}
