//! Serde helpers for statistics that may arrive as `null` or be omitted.
//!
//! Missing numbers are stored as NaN so the scorer's finite-or-default
//! guards treat them the same way as arithmetic faults.

use serde::{Deserialize, Deserializer};

pub(crate) const fn missing() -> f64 {
    f64::NAN
}

pub(crate) fn number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<f64>::deserialize(deserializer).map(|value| value.unwrap_or(f64::NAN))
}
