//! Header-checked CSV deserialization shared by every record type.

use csv::{ReaderBuilder, Trim};
use log::{info, warn};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

/// Parse a county FIPS code.
///
/// Upstream files disagree on the representation: the case file writes
/// `17031`, pandas-exported copies write `17031.0`, and the mask survey
/// zero-pads to `01001`. Empty or non-numeric codes yield `None`.
pub fn parse_fips(s: &str) -> Option<u32> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<u32>().ok().or_else(|| {
        trimmed
            .parse::<f64>()
            .ok()
            .filter(|v| *v >= 0.0 && v.fract() == 0.0 && *v <= u32::MAX as f64)
            .map(|v| v as u32)
    })
}

/// Serde adapter around [`parse_fips`] for optional FIPS columns.
pub(crate) fn deserialize_fips<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(parse_fips))
}

/// Deserialize every row of `csv_data` into `T`.
///
/// Headers and fields are whitespace-trimmed, so `County ` matches `County`.
/// A missing required column is an error. Rows that fail to deserialize are
/// skipped and counted.
pub(crate) fn parse_records<T: DeserializeOwned>(
    csv_data: &str,
    required_columns: &[&str],
    label: &str,
) -> anyhow::Result<Vec<T>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(csv_data.as_bytes());

    let headers = rdr.headers()?.clone();
    for column in required_columns {
        if !headers.iter().any(|h| h == *column) {
            anyhow::bail!("{} CSV is missing required column `{}`", label, column);
        }
    }

    let mut records = Vec::new();
    let mut skipped = 0u32;
    for result in rdr.deserialize::<T>() {
        match result {
            Ok(record) => records.push(record),
            Err(_) => skipped += 1,
        }
    }
    if skipped > 0 {
        warn!("{}: skipped {} malformed rows", label, skipped);
    }
    info!("{}: parsed {} rows", label, records.len());
    Ok(records)
}
