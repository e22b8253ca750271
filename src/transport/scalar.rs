//! Lenient JSON scalars.
//!
//! MoVizor sends numbers either bare or quoted and flags as `0`/`1`. The
//! wrappers below only accept the JSON shape; parsing happens when the value is
//! mapped into the domain so the error can name the field.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::error::DecodeError;
use crate::domain::Coordinate;

/// Number that may arrive as a JSON number or as a string holding one.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum TransportNumber {
    Number(serde_json::Number),
    String(String),
}

impl TransportNumber {
    pub fn is_blank(&self) -> bool {
        matches!(self, Self::String(value) if value.trim().is_empty())
    }

    pub fn to_i64(&self, entity: &'static str, field: &'static str) -> Result<i64, DecodeError> {
        match self {
            Self::Number(value) => value
                .as_i64()
                .ok_or_else(|| DecodeError::field(entity, field, format!("{value} is not an integer"))),
            Self::String(value) => value.trim().parse::<i64>().map_err(|_| {
                DecodeError::field(entity, field, format!("{value:?} is not an integer"))
            }),
        }
    }

    pub fn to_f64(&self, entity: &'static str, field: &'static str) -> Result<f64, DecodeError> {
        let parsed = match self {
            Self::Number(value) => value.as_f64(),
            Self::String(value) => value.trim().parse::<f64>().ok(),
        };
        match parsed {
            Some(value) if value.is_finite() => Ok(value),
            _ => Err(DecodeError::field(
                entity,
                field,
                format!("{} is not a number", self.token()),
            )),
        }
    }

    pub fn to_coordinate(
        &self,
        entity: &'static str,
        field: &'static str,
    ) -> Result<Coordinate, DecodeError> {
        self.to_f64(entity, field)
            .map(|value| Coordinate::new(value as f32))
    }

    /// Whole seconds since the Unix epoch.
    pub fn to_time(
        &self,
        entity: &'static str,
        field: &'static str,
    ) -> Result<DateTime<Utc>, DecodeError> {
        let seconds = self.to_i64(entity, field)?;
        DateTime::from_timestamp(seconds, 0).ok_or_else(|| {
            DecodeError::field(entity, field, format!("timestamp {seconds} is out of range"))
        })
    }

    fn token(&self) -> String {
        match self {
            Self::Number(value) => value.to_string(),
            Self::String(value) => format!("{value:?}"),
        }
    }
}

/// Map an optional number; `null`, absence and `""` all yield `None`.
pub fn optional<T>(
    value: Option<&TransportNumber>,
    parse: impl FnOnce(&TransportNumber) -> Result<T, DecodeError>,
) -> Result<Option<T>, DecodeError> {
    match value {
        Some(value) if !value.is_blank() => parse(value).map(Some),
        _ => Ok(None),
    }
}

/// Flag sent as `0`/`1` (number or string) or, in places, as a JSON boolean.
///
/// Only `1` and `true` are set; everything else is unset.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum TransportFlag {
    Bool(bool),
    Number(serde_json::Number),
    String(String),
}

impl TransportFlag {
    pub fn is_set(&self) -> bool {
        match self {
            Self::Bool(value) => *value,
            Self::Number(value) => value.as_i64() == Some(1),
            Self::String(value) => value.trim() == "1",
        }
    }
}

pub fn flag(value: Option<&TransportFlag>) -> bool {
    value.is_some_and(TransportFlag::is_set)
}

/// Text that is sometimes sent as a bare number (phones, codes).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum TransportText {
    String(String),
    Number(serde_json::Number),
}

impl TransportText {
    pub fn into_string(self) -> String {
        match self {
            Self::String(value) => value,
            Self::Number(value) => value.to_string(),
        }
    }
}

/// Drop empty strings.
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|it| !it.trim().is_empty())
}
