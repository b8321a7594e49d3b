//! Whole-unit amounts
//!
//! The client works in whole currency units (i64). Two entry points exist:
//! user input, which arrives as either text or a number and must be strictly
//! positive, and server payloads, which may carry the same integer as a
//! decimal (`10000.00`) or as a string.

use crate::{ValidationError, ValidationResult};
use serde::de::{self, Deserializer, Visitor};
use std::fmt;

/// An amount as supplied by a UI collaborator, before validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AmountInput {
    /// Raw text from an input field
    Text(String),
    /// Already-numeric value
    Number(i64),
}

impl AmountInput {
    /// Parse into a strictly positive whole amount
    ///
    /// Text is trimmed first. Fractional, empty, or non-numeric text is
    /// rejected, as is any value that is not greater than zero.
    pub fn parse_positive(&self) -> ValidationResult<i64> {
        let value = match self {
            Self::Number(n) => *n,
            Self::Text(raw) => {
                let trimmed = raw.trim();
                trimmed
                    .parse::<i64>()
                    .map_err(|_| ValidationError::AmountNotInteger(trimmed.to_string()))?
            }
        };

        if value <= 0 {
            return Err(ValidationError::AmountNotPositive(value));
        }
        Ok(value)
    }
}

impl From<i64> for AmountInput {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for AmountInput {
    fn from(value: i32) -> Self {
        Self::Number(i64::from(value))
    }
}

impl From<u32> for AmountInput {
    fn from(value: u32) -> Self {
        Self::Number(i64::from(value))
    }
}

impl From<&str> for AmountInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for AmountInput {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Deserialize a whole-unit amount from an integer, an integral float, or a
/// numeric string
pub fn deserialize_whole_units<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(WholeUnitsVisitor)
}

/// Like `deserialize_whole_units`, but rejects zero and negative amounts
pub fn deserialize_positive_units<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = deserialize_whole_units(deserializer)?;
    if value <= 0 {
        return Err(de::Error::custom(format!("amount {} is not positive", value)));
    }
    Ok(value)
}

struct WholeUnitsVisitor;

impl<'de> Visitor<'de> for WholeUnitsVisitor {
    type Value = i64;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a whole-unit amount")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<i64, E> {
        Ok(v)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<i64, E> {
        i64::try_from(v).map_err(|_| E::custom(format!("amount {} out of range", v)))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<i64, E> {
        if !v.is_finite() || v.fract() != 0.0 || v.abs() > i64::MAX as f64 {
            return Err(E::custom(format!("amount {} is not a whole number", v)));
        }
        Ok(v as i64)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<i64, E> {
        let trimmed = v.trim();
        if let Ok(n) = trimmed.parse::<i64>() {
            return Ok(n);
        }
        match trimmed.parse::<f64>() {
            Ok(f) => self.visit_f64(f),
            Err(_) => Err(E::custom(format!("amount '{}' is not numeric", v))),
        }
    }
}
