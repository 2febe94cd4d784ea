//! Scalar values and their canonical text encoding
//!
//! Stores only ever hold text. Every scalar kind has exactly one canonical
//! string form, and each kind's encoder and decoder live side by side here:
//! - `Text`: verbatim
//! - `Integer`: signed decimal, no leading zeros
//! - `Float`: shortest round-trip decimal (`f64` `Display`)
//! - `Boolean`: `"1"` / `"0"`
//! - `DateTime`: `YYYY-MM-DD HH:MM:SS`

use crate::{Error, Result};
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Canonical storage format for date/time values
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Date/time layouts accepted by [`parse_date`], tried in order
const DATETIME_FORMATS: &[&str] = &[
    DATE_FORMAT,
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
];

/// Date-only layouts accepted by [`parse_date`]; the time is midnight
const DATE_ONLY_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%d %B %Y",
    "%d %b %Y",
    "%B %d, %Y",
    "%b %d, %Y",
];

/// The kind of a scalar value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    Text,
    Integer,
    Float,
    Boolean,
    Date,
}

impl ValueKind {
    /// Get the string representation of the kind
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueKind::Text => "text",
            ValueKind::Integer => "integer",
            ValueKind::Float => "float",
            ValueKind::Boolean => "boolean",
            ValueKind::Date => "date",
        }
    }

    /// Get all value kinds
    pub fn all() -> &'static [ValueKind] {
        &[
            ValueKind::Text,
            ValueKind::Integer,
            ValueKind::Float,
            ValueKind::Boolean,
            ValueKind::Date,
        ]
    }
}

impl FromStr for ValueKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" | "string" | "str" => Ok(ValueKind::Text),
            "integer" | "int" => Ok(ValueKind::Integer),
            "float" | "double" | "real" => Ok(ValueKind::Float),
            "boolean" | "bool" => Ok(ValueKind::Boolean),
            "date" | "datetime" => Ok(ValueKind::Date),
            _ => Err(Error::TypeArgument(format!("Unknown value kind: {}", s))),
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A scalar value accepted by a store.
///
/// Composite values (lists, maps) have no variant; the only way to offer one
/// is through [`Value::try_from`] on a JSON value, which rejects them.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Text(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    DateTime(NaiveDateTime),
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Text(_) => ValueKind::Text,
            Value::Integer(_) => ValueKind::Integer,
            Value::Float(_) => ValueKind::Float,
            Value::Boolean(_) => ValueKind::Boolean,
            Value::DateTime(_) => ValueKind::Date,
        }
    }

    /// Canonical string form stored in the table
    pub fn encode(&self) -> String {
        match self {
            Value::Text(s) => s.clone(),
            Value::Integer(i) => encode_int(*i),
            Value::Float(f) => encode_float(*f),
            Value::Boolean(b) => encode_bool(*b).to_string(),
            Value::DateTime(dt) => encode_date(dt),
        }
    }

    /// Parse user-supplied text as a value of the given kind.
    pub fn parse_as(kind: ValueKind, text: &str) -> Result<Self> {
        match kind {
            ValueKind::Text => Ok(Value::Text(text.to_string())),
            ValueKind::Integer => decode_int(text)
                .map(Value::Integer)
                .ok_or_else(|| Error::TypeArgument(format!("Expected integer, got {:?}", text))),
            ValueKind::Float => decode_float(text)
                .map(Value::Float)
                .ok_or_else(|| Error::TypeArgument(format!("Expected float, got {:?}", text))),
            ValueKind::Boolean => match text.trim().to_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => Ok(Value::Boolean(true)),
                "0" | "false" | "no" | "off" => Ok(Value::Boolean(false)),
                _ => Err(Error::TypeArgument(format!("Expected boolean, got {:?}", text))),
            },
            ValueKind::Date => parse_date(text).map(Value::DateTime),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<&String> for Value {
    fn from(v: &String) -> Self {
        Value::Text(v.clone())
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Integer(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Integer(v.into())
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::Integer(v.into())
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float(v.into())
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Boolean(v)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(v: NaiveDateTime) -> Self {
        Value::DateTime(v)
    }
}

impl From<NaiveDate> for Value {
    fn from(v: NaiveDate) -> Self {
        Value::DateTime(v.and_time(NaiveTime::MIN))
    }
}

impl TryFrom<serde_json::Value> for Value {
    type Error = Error;

    fn try_from(value: serde_json::Value) -> Result<Self> {
        use serde_json::Value as Json;

        match value {
            Json::Null => Ok(Value::Text(String::new())),
            Json::Bool(b) => Ok(Value::Boolean(b)),
            Json::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(Value::Integer(i))
                } else if let Some(f) = n.as_f64() {
                    Ok(Value::Float(f))
                } else {
                    Err(Error::InvalidValue(format!("Unrepresentable number: {}", n)))
                }
            }
            Json::String(s) => Ok(Value::Text(s)),
            Json::Array(_) => Err(Error::InvalidValue("Array values are not allowed".to_string())),
            Json::Object(_) => Err(Error::InvalidValue("Object values are not allowed".to_string())),
        }
    }
}

pub fn encode_int(v: i64) -> String {
    v.to_string()
}

pub fn decode_int(text: &str) -> Option<i64> {
    text.trim().parse().ok()
}

pub fn encode_float(v: f64) -> String {
    v.to_string()
}

pub fn decode_float(text: &str) -> Option<f64> {
    text.trim().parse().ok()
}

pub fn encode_bool(v: bool) -> &'static str {
    if v { "1" } else { "0" }
}

/// Truthiness of stored text: missing, `""` and `"0"` are false.
pub fn decode_bool(text: Option<&str>) -> bool {
    !matches!(text, None | Some("") | Some("0"))
}

pub fn encode_date(v: &NaiveDateTime) -> String {
    v.format(DATE_FORMAT).to_string()
}

pub fn decode_date(text: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(text.trim(), DATE_FORMAT).ok()
}

/// Parse a date/time written in any of the common layouts.
///
/// Offsets in RFC 3339 / RFC 2822 input are dropped after converting to the
/// wall-clock time of that offset. `@<seconds>` is read as a UTC timestamp.
/// Sub-second precision is discarded since the canonical form has none.
pub fn parse_date(input: &str) -> Result<NaiveDateTime> {
    let text = input.trim();
    let fail = || Error::DateParse(input.to_string());

    if text.is_empty() {
        return Err(fail());
    }

    let today = || Local::now().date_naive();
    let parsed = match text.to_lowercase().as_str() {
        "now" => Some(Local::now().naive_local()),
        "today" => Some(today().and_time(NaiveTime::MIN)),
        "yesterday" => today().pred_opt().map(|d| d.and_time(NaiveTime::MIN)),
        "tomorrow" => today().succ_opt().map(|d| d.and_time(NaiveTime::MIN)),
        _ => parse_date_layouts(text),
    };

    parsed
        .map(|dt| dt.with_nanosecond(0).unwrap_or(dt))
        .ok_or_else(fail)
}

fn parse_date_layouts(text: &str) -> Option<NaiveDateTime> {
    if let Some(secs) = text.strip_prefix('@') {
        let secs: i64 = secs.parse().ok()?;
        return DateTime::from_timestamp(secs, 0).map(|dt| dt.naive_utc());
    }

    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(text, format) {
            return Some(dt);
        }
    }

    for format in DATE_ONLY_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(text, format) {
            return Some(d.and_time(NaiveTime::MIN));
        }
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.naive_local());
    }

    DateTime::parse_from_rfc2822(text).ok().map(|dt| dt.naive_local())
}
