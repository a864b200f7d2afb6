//! Currency Module
//!
//! ISO 4217 codes and the catalog of currencies the dashboard supports.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{RateError, Result};

// == Currency Code ==
/// Three-letter ISO 4217 code, always upper case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CurrencyCode([u8; 3]);

impl CurrencyCode {
    /// Parses a code, trimming whitespace and upper-casing it.
    ///
    /// Anything other than exactly three ASCII letters is rejected.
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        let bytes = trimmed.as_bytes();
        if bytes.len() != 3 || !bytes.iter().all(u8::is_ascii_alphabetic) {
            return Err(RateError::InvalidCurrency(format!(
                "'{}' is not a three-letter ISO code (e.g. USD, EUR)",
                trimmed
            )));
        }

        let mut code = [0u8; 3];
        for (dst, src) in code.iter_mut().zip(bytes) {
            *dst = src.to_ascii_uppercase();
        }
        Ok(Self(code))
    }

    pub fn as_str(&self) -> &str {
        // Only ASCII letters are ever stored.
        std::str::from_utf8(&self.0).unwrap_or("???")
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CurrencyCode {
    type Err = RateError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl Serialize for CurrencyCode {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for CurrencyCode {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

// == Supported Currencies ==
/// Currencies offered by the currency widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SupportedCurrency {
    Eur,
    Bgn,
    Czk,
    Dkk,
    Huf,
    Pln,
    Ron,
    Sek,
    Chf,
    Usd,
}

impl SupportedCurrency {
    const ALL: [SupportedCurrency; 10] = [
        SupportedCurrency::Eur,
        SupportedCurrency::Bgn,
        SupportedCurrency::Czk,
        SupportedCurrency::Dkk,
        SupportedCurrency::Huf,
        SupportedCurrency::Pln,
        SupportedCurrency::Ron,
        SupportedCurrency::Sek,
        SupportedCurrency::Chf,
        SupportedCurrency::Usd,
    ];

    pub fn all() -> &'static [SupportedCurrency] {
        &Self::ALL
    }

    pub fn iso(&self) -> &'static str {
        match self {
            SupportedCurrency::Eur => "EUR",
            SupportedCurrency::Bgn => "BGN",
            SupportedCurrency::Czk => "CZK",
            SupportedCurrency::Dkk => "DKK",
            SupportedCurrency::Huf => "HUF",
            SupportedCurrency::Pln => "PLN",
            SupportedCurrency::Ron => "RON",
            SupportedCurrency::Sek => "SEK",
            SupportedCurrency::Chf => "CHF",
            SupportedCurrency::Usd => "USD",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SupportedCurrency::Eur => "Euro",
            SupportedCurrency::Bgn => "Bulgarian Lev",
            SupportedCurrency::Czk => "Czech Koruna",
            SupportedCurrency::Dkk => "Danish Krone",
            SupportedCurrency::Huf => "Hungarian Forint",
            SupportedCurrency::Pln => "Polish Zloty",
            SupportedCurrency::Ron => "Romanian Leu",
            SupportedCurrency::Sek => "Swedish Krona",
            SupportedCurrency::Chf => "Swiss Franc",
            SupportedCurrency::Usd => "United States Dollar",
        }
    }

    pub fn from_code(code: CurrencyCode) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.iso() == code.as_str())
    }
}

/// One entry of the currency catalog.
#[derive(Debug, Clone, Serialize)]
pub struct CurrencyInfo {
    pub code: &'static str,
    pub name: &'static str,
}

impl From<SupportedCurrency> for CurrencyInfo {
    fn from(currency: SupportedCurrency) -> Self {
        Self {
            code: currency.iso(),
            name: currency.name(),
        }
    }
}

/// Lists every supported currency.
pub fn catalog() -> Vec<CurrencyInfo> {
    SupportedCurrency::all()
        .iter()
        .copied()
        .map(CurrencyInfo::from)
        .collect()
}

/// Parses `input` and checks it against the catalog.
pub fn ensure_supported(input: &str) -> Result<CurrencyCode> {
    let code = CurrencyCode::parse(input)?;
    if SupportedCurrency::from_code(code).is_none() {
        return Err(RateError::InvalidCurrency(format!(
            "'{}' is not supported, see /api/currencies",
            code
        )));
    }
    Ok(code)
}
