use crate::{core::value::Value, error::ValueError};
use bigdecimal::BigDecimal;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{borrow::Cow, fmt, str::FromStr};

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d.%m.%Y"];
const TIMESTAMP_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];

/// Declared type of a schema property. Drives how raw query text is
/// converted into a [`Value`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum DataType {
    #[default]
    String,
    Int,
    Float,
    Decimal,
    Boolean,
    Date,
    Timestamp,
    /// An enumeration with its allowed constants.
    Enum(Vec<String>),
}

impl DataType {
    pub fn name(&self) -> Cow<'_, str> {
        match self {
            DataType::String => Cow::Borrowed("string"),
            DataType::Int => Cow::Borrowed("int"),
            DataType::Float => Cow::Borrowed("float"),
            DataType::Decimal => Cow::Borrowed("decimal"),
            DataType::Boolean => Cow::Borrowed("boolean"),
            DataType::Date => Cow::Borrowed("date"),
            DataType::Timestamp => Cow::Borrowed("timestamp"),
            DataType::Enum(constants) => Cow::Owned(format!("enum({})", constants.join("|"))),
        }
    }

    /// Converts raw query text into a value of this type.
    pub fn parse_value(&self, raw: &str) -> Result<Value, ValueError> {
        let trimmed = raw.trim();
        let conversion_error = || ValueError::Conversion {
            raw: raw.to_string(),
            expected: self.clone(),
        };

        match self {
            DataType::String => Ok(Value::String(raw.to_string())),
            DataType::Int => trimmed
                .parse::<i64>()
                .map(Value::Int)
                .map_err(|_| conversion_error()),
            DataType::Float => trimmed
                .parse::<f64>()
                .map(Value::Float)
                .map_err(|_| conversion_error()),
            DataType::Decimal => BigDecimal::from_str(trimmed)
                .map(Value::Decimal)
                .map_err(|_| conversion_error()),
            DataType::Boolean => match trimmed.to_lowercase().as_str() {
                "true" | "1" | "yes" => Ok(Value::Boolean(true)),
                "false" | "0" | "no" => Ok(Value::Boolean(false)),
                _ => Err(conversion_error()),
            },
            DataType::Date => parse_date(trimmed)
                .map(Value::Date)
                .ok_or_else(conversion_error),
            DataType::Timestamp => parse_timestamp(trimmed)
                .map(Value::Timestamp)
                .ok_or_else(conversion_error),
            DataType::Enum(constants) => constants
                .iter()
                .find(|constant| constant.eq_ignore_ascii_case(trimmed))
                .map(|constant| Value::Enum(constant.clone()))
                .ok_or_else(|| ValueError::UnknownConstant {
                    raw: raw.to_string(),
                    allowed: constants.clone(),
                }),
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(raw, format).ok())
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }

    TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .or_else(|| parse_date(raw).and_then(|date| date.and_hms_opt(0, 0, 0)))
        .map(|naive| naive.and_utc())
}
