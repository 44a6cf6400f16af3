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

use std::fmt;

/// Balancing products tracked in the archive, in archive column order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Product {
    /// FCR-N, frequency containment reserve for normal operation (no direction split)
    FcrN,
    FcrDUp,
    FcrDDown,
    /// aFFR, automatically activated restoration reserve
    AfrrUp,
    AfrrDown,
    /// mFFR, manually activated restoration reserve
    MfrrUp,
    MfrrDown,
}

impl Product {
    pub const COUNT: usize = 7;

    /// All products in the fixed order used by archive lines
    pub const ALL: [Product; Self::COUNT] = [
        Self::FcrN,
        Self::FcrDUp,
        Self::FcrDDown,
        Self::AfrrUp,
        Self::AfrrDown,
        Self::MfrrUp,
        Self::MfrrDown,
    ];

    /// Position of this product in archive lines and per-day storage
    pub fn index(self) -> usize {
        match self {
            Self::FcrN => 0,
            Self::FcrDUp => 1,
            Self::FcrDDown => 2,
            Self::AfrrUp => 3,
            Self::AfrrDown => 4,
            Self::MfrrUp => 5,
            Self::MfrrDown => 6,
        }
    }

    /// Short label used in logs and diagnostics
    pub fn label(self) -> &'static str {
        match self {
            Self::FcrN => "fcrn",
            Self::FcrDUp => "fcrd_up",
            Self::FcrDDown => "fcrd_down",
            Self::AfrrUp => "affr_up",
            Self::AfrrDown => "affr_down",
            Self::MfrrUp => "mffr_up",
            Self::MfrrDown => "mffr_down",
        }
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A group of products downloaded from one endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductFamily {
    Fcr,
    Afrr,
    Mfrr,
}

impl ProductFamily {
    /// Human-readable name for the family
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Fcr => "FCR",
            Self::Afrr => "aFFR",
            Self::Mfrr => "mFFR",
        }
    }

    /// Products this family reports, in archive order
    pub fn products(self) -> &'static [Product] {
        match self {
            Self::Fcr => &[Product::FcrN, Product::FcrDUp, Product::FcrDDown],
            Self::Afrr => &[Product::AfrrUp, Product::AfrrDown],
            Self::Mfrr => &[Product::MfrrUp, Product::MfrrDown],
        }
    }
}

impl fmt::Display for ProductFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
