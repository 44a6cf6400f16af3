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

//! Reserve Archive - daily balancing-reserve price archives
//!
//! Downloads FCR, aFFR and mFFR auction results from the Svenska kraftnät
//! Mimer service, averages them per day and appends the results to one CSV
//! archive per year, resuming from the last archived day.

pub mod aggregate;
pub mod archive;
pub mod config;
pub mod error;
pub mod mimer;
pub mod parse;
pub mod pipeline;
pub mod plan;
pub mod source;

pub use archive::YearArchive;
pub use config::ArchiveConfig;
pub use error::{ArchiveError, Result};
pub use mimer::MimerClient;
pub use pipeline::{ArchiveBuilder, RunReport};
pub use plan::{YearPlan, plan_year};
pub use source::ReserveSource;
