// Copyright AGNTCY Contributors (https://github.com/agntcy)
// SPDX-License-Identifier: Apache-2.0

use chrono::{NaiveDate, NaiveTime};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Ordered name/value map used for argument bags, invocation payloads and
/// cast results. Iteration follows insertion order.
pub type ValueMap = IndexMap<String, RfcValue>;

/// The closed set of vendor-neutral element types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AbstractType {
    #[serde(rename = "date")]
    Date,
    #[serde(rename = "time")]
    Time,
    #[serde(rename = "int")]
    Integer,
    #[serde(rename = "float")]
    Float,
    #[serde(rename = "string")]
    String,
    #[serde(rename = "hexbin")]
    HexBinary,
    #[serde(rename = "struct")]
    Structure,
    #[serde(rename = "table")]
    Table,
}

impl AbstractType {
    /// Structures and tables carry member lists; everything else is a leaf.
    pub fn is_composite(self) -> bool {
        matches!(self, AbstractType::Structure | AbstractType::Table)
    }
}

/// Flow of an element through a function call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Input,
    Output,
    Changing,
    Table,
}

/// A vendor-neutral runtime value.
///
/// Caller-supplied arguments pass through the assembly step verbatim;
/// typed variants such as [`RfcValue::Date`] are produced by the result
/// cast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RfcValue {
    Null,
    Int(i64),
    Float(f64),
    String(String),
    Date(NaiveDate),
    Time(NaiveTime),
    Structure(ValueMap),
    Table(Vec<ValueMap>),
}

impl RfcValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            RfcValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            RfcValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_table(&self) -> Option<&[ValueMap]> {
        match self {
            RfcValue::Table(rows) => Some(rows),
            _ => None,
        }
    }

    pub fn as_structure(&self) -> Option<&ValueMap> {
        match self {
            RfcValue::Structure(fields) => Some(fields),
            _ => None,
        }
    }
}

impl From<&str> for RfcValue {
    fn from(value: &str) -> Self {
        RfcValue::String(value.to_string())
    }
}

impl From<String> for RfcValue {
    fn from(value: String) -> Self {
        RfcValue::String(value)
    }
}

impl From<i64> for RfcValue {
    fn from(value: i64) -> Self {
        RfcValue::Int(value)
    }
}

impl From<f64> for RfcValue {
    fn from(value: f64) -> Self {
        RfcValue::Float(value)
    }
}

impl From<NaiveDate> for RfcValue {
    fn from(value: NaiveDate) -> Self {
        RfcValue::Date(value)
    }
}

impl From<NaiveTime> for RfcValue {
    fn from(value: NaiveTime) -> Self {
        RfcValue::Time(value)
    }
}

impl From<ValueMap> for RfcValue {
    fn from(value: ValueMap) -> Self {
        RfcValue::Structure(value)
    }
}

impl From<Vec<ValueMap>> for RfcValue {
    fn from(value: Vec<ValueMap>) -> Self {
        RfcValue::Table(value)
    }
}
