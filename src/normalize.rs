//! Turns raw table-cell text into typed numbers.
//!
//! Recognised encodings: blank or `-` (absent), `<float>m` (millions),
//! `<float>k` (thousands) and plain integers. Currency symbols are dropped
//! before parsing.

use serde::Serialize;

use crate::ParseError;

const CURRENCY_SYMBOLS: [char; 3] = ['€', '£', '$'];

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum NumericValue {
    Int(i64),
    Float(f64),
}

impl NumericValue {
    /// Integral values only; `Float(2.5)` has no integer form.
    pub fn as_i64(self) -> Option<i64> {
        match self {
            NumericValue::Int(value) => Some(value),
            NumericValue::Float(value) if value.is_finite() && value.fract() == 0.0 => {
                Some(value as i64)
            }
            NumericValue::Float(_) => None,
        }
    }

    pub fn as_f64(self) -> f64 {
        match self {
            NumericValue::Int(value) => value as f64,
            NumericValue::Float(value) => value,
        }
    }
}

pub trait Normalize {
    fn normalize(self) -> Result<Option<NumericValue>, ParseError>;
}

impl Normalize for &str {
    fn normalize(self) -> Result<Option<NumericValue>, ParseError> {
        let trimmed = self.trim();
        if trimmed.is_empty() || trimmed == "-" {
            return Ok(None);
        }

        let cleaned = trimmed.replace(CURRENCY_SYMBOLS, "");
        let cleaned = cleaned.trim();
        if cleaned.contains('m') {
            scaled(self, cleaned, 'm', 1e6)
        } else if cleaned.contains('k') {
            scaled(self, cleaned, 'k', 1e3)
        } else {
            cleaned
                .parse::<i64>()
                .map(|value| Some(NumericValue::Int(value)))
                .map_err(|_| ParseError::new(self))
        }
    }
}

impl Normalize for Option<&str> {
    fn normalize(self) -> Result<Option<NumericValue>, ParseError> {
        match self {
            Some(text) => text.normalize(),
            None => Ok(None),
        }
    }
}

// Already-typed values pass through untouched.
impl Normalize for NumericValue {
    fn normalize(self) -> Result<Option<NumericValue>, ParseError> {
        Ok(Some(self))
    }
}

impl Normalize for Option<NumericValue> {
    fn normalize(self) -> Result<Option<NumericValue>, ParseError> {
        Ok(self)
    }
}

pub fn normalize<T: Normalize>(raw: T) -> Result<Option<NumericValue>, ParseError> {
    raw.normalize()
}

fn scaled(
    raw: &str,
    cleaned: &str,
    suffix: char,
    factor: f64,
) -> Result<Option<NumericValue>, ParseError> {
    cleaned
        .replace(suffix, "")
        .trim()
        .parse::<f64>()
        .map(|value| Some(NumericValue::Float(value * factor)))
        .map_err(|_| ParseError::new(raw))
}

/// Lenient wrapper used by the extractors: malformed text is logged and
/// stored as absent rather than failing the page.
pub(crate) fn normalize_lenient(raw: Option<&str>, field: &str) -> Option<NumericValue> {
    match normalize(raw) {
        Ok(value) => value,
        Err(e) => {
            log::warn!("{field}: {e}");
            None
        }
    }
}

/// As [`normalize_lenient`], for count-like fields that must be whole.
pub(crate) fn normalize_int_lenient(raw: Option<&str>, field: &str) -> Option<i64> {
    let value = normalize_lenient(raw, field)?;
    let whole = value.as_i64();
    if whole.is_none() {
        log::warn!("{field}: {value:?} is not a whole number");
    }
    whole
}
