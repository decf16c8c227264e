//! Parameter values attached to page declarations.
//!
//! Pages carry a small map of named parameters. Most are plain JSON values,
//! but calendar-shaped pages also carry week and month references that other
//! pages resolve links against. The variants are matched exhaustively at the
//! context-merge point and inside the registry comparator.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Ordered parameter map. A `BTreeMap` keeps iteration (and therefore
/// destination-key serialization) deterministic.
pub type Params = BTreeMap<String, ParamValue>;

/// A single page parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ParamValue {
    Plain(serde_json::Value),
    Week(WeekRef),
    Month(MonthRef),
}

impl ParamValue {
    pub fn str(value: impl Into<String>) -> Self {
        ParamValue::Plain(serde_json::Value::String(value.into()))
    }

    pub fn int(value: i64) -> Self {
        ParamValue::Plain(serde_json::Value::from(value))
    }

    /// The canonical string form used inside destination keys.
    pub fn key_form(&self) -> String {
        match self {
            ParamValue::Plain(serde_json::Value::String(s)) => s.clone(),
            ParamValue::Plain(value) => value.to_string(),
            ParamValue::Week(week) => week.number.to_string(),
            ParamValue::Month(month) => month.number.to_string(),
        }
    }

    /// Numeric identity, for integer-parameter comparisons.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            ParamValue::Plain(value) => value.as_i64(),
            ParamValue::Week(week) => Some(week.number as i64),
            ParamValue::Month(month) => Some(month.number as i64),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::str(value)
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::str(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::int(value)
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        ParamValue::int(value as i64)
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        ParamValue::int(value as i64)
    }
}

impl From<serde_json::Value> for ParamValue {
    fn from(value: serde_json::Value) -> Self {
        ParamValue::Plain(value)
    }
}

impl From<WeekRef> for ParamValue {
    fn from(value: WeekRef) -> Self {
        ParamValue::Week(value)
    }
}

impl From<MonthRef> for ParamValue {
    fn from(value: MonthRef) -> Self {
        ParamValue::Month(value)
    }
}

/// A reference to one planner week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekRef {
    /// 1-based week number within the planner year.
    pub number: u32,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl WeekRef {
    pub fn new(number: u32, start: NaiveDate, end: NaiveDate) -> Self {
        Self { number, start, end }
    }
}

/// A reference to one planner month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthRef {
    /// 1-based month number.
    pub number: u32,
    pub name: String,
}

impl MonthRef {
    pub fn new(number: u32, name: impl Into<String>) -> Self {
        Self {
            number,
            name: name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn key_form_is_stable() {
        assert_eq!(ParamValue::str("alpha").key_form(), "alpha");
        assert_eq!(ParamValue::int(42).key_form(), "42");
        let week = WeekRef::new(7, date(2026, 2, 9), date(2026, 2, 15));
        assert_eq!(ParamValue::Week(week).key_form(), "7");
        let month = MonthRef::new(3, "March");
        assert_eq!(ParamValue::Month(month).key_form(), "3");
    }

    #[test]
    fn numeric_identity() {
        let week = WeekRef::new(12, date(2026, 3, 16), date(2026, 3, 22));
        assert_eq!(ParamValue::Week(week).as_i64(), Some(12));
        assert_eq!(ParamValue::int(12).as_i64(), Some(12));
        assert_eq!(ParamValue::str("12").as_i64(), None);
    }
}
