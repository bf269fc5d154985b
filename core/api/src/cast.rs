// Copyright AGNTCY Contributors (https://github.com/agntcy)
// SPDX-License-Identifier: Apache-2.0

//! Typecasting of raw invocation results.
//!
//! The backend returns fixed-width, blank-padded fields; every cast of a
//! string, structure or table value therefore ends with a recursive
//! right-trim over the string leaves. The trim is idempotent.

use chrono::{NaiveDate, NaiveTime};

use crate::descriptor::{ApiElement, Member, StructElement, TableElement};
use crate::errors::ApiError;
use crate::types::{AbstractType, RfcValue, ValueMap};

/// Characters the backend pads fixed-width fields with.
const TRAILING: &[char] = &[' ', '\r', '\n', '\0'];

/// Recursively strip trailing blanks, newlines and NUL bytes from every
/// string leaf. Interior whitespace is untouched.
pub fn rtrim_value(value: RfcValue) -> RfcValue {
    match value {
        RfcValue::String(s) => RfcValue::String(s.trim_end_matches(TRAILING).to_string()),
        RfcValue::Structure(fields) => RfcValue::Structure(
            fields
                .into_iter()
                .map(|(name, value)| (name, rtrim_value(value)))
                .collect(),
        ),
        RfcValue::Table(rows) => RfcValue::Table(
            rows.into_iter()
                .map(|row| {
                    row.into_iter()
                        .map(|(name, value)| (name, rtrim_value(value)))
                        .collect()
                })
                .collect(),
        ),
        other => other,
    }
}

/// Cast the raw result map of an invocation.
///
/// `elements` is the descriptor's output set (output, changing and table
/// elements) in declaration order; the returned map follows that order,
/// not the raw result's. The raw map is consumed. A non-optional element
/// missing from the raw result fails the call; optional absent elements
/// are omitted.
pub fn cast_outputs<'a>(
    elements: impl IntoIterator<Item = &'a ApiElement>,
    mut raw: ValueMap,
    function: &str,
) -> Result<ValueMap, ApiError> {
    let mut output = ValueMap::new();
    for element in elements {
        match raw.shift_remove(element.name()) {
            Some(value) => {
                let mut cast = element.cast(value)?;
                if matches!(
                    element.element_type(),
                    AbstractType::String | AbstractType::Structure | AbstractType::Table
                ) {
                    cast = rtrim_value(cast);
                }
                output.insert(element.name().to_string(), cast);
            }
            None if !element.optional() => {
                return Err(ApiError::MissingResult {
                    value: element.name().to_string(),
                    function: function.to_string(),
                });
            }
            None => {}
        }
    }
    Ok(output)
}

impl ApiElement {
    /// Apply this element's cast rule to a raw value.
    pub fn cast(&self, value: RfcValue) -> Result<RfcValue, ApiError> {
        match self {
            ApiElement::Scalar(scalar) => {
                cast_scalar(scalar.value_type(), value, scalar.name())
            }
            ApiElement::Struct(element) => element.cast(value),
            ApiElement::Table(element) => element.cast(value),
        }
    }
}

impl StructElement {
    pub fn cast(&self, value: RfcValue) -> Result<RfcValue, ApiError> {
        let RfcValue::Structure(fields) = value else {
            return Err(ApiError::InvalidValue {
                element: self.name().to_string(),
                message: "expected a record".to_string(),
            });
        };
        Ok(RfcValue::Structure(cast_record(
            self.members(),
            fields,
            self.name(),
        )?))
    }
}

impl TableElement {
    pub fn cast(&self, value: RfcValue) -> Result<RfcValue, ApiError> {
        let RfcValue::Table(rows) = value else {
            return Err(ApiError::InvalidValue {
                element: self.name().to_string(),
                message: "expected a sequence of records".to_string(),
            });
        };
        let rows = rows
            .into_iter()
            .map(|row| cast_record(self.members(), row, self.name()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(RfcValue::Table(rows))
    }
}

/// Cast every known member field of a record; unknown keys pass through.
/// Field order is preserved.
fn cast_record(
    members: &[Member],
    fields: ValueMap,
    element: &str,
) -> Result<ValueMap, ApiError> {
    fields
        .into_iter()
        .map(|(name, value)| {
            let cast = match members.iter().find(|m| m.name() == name) {
                Some(member) => {
                    let label = format!("{}.{}", element, name);
                    cast_scalar(member.member_type(), value, &label)?
                }
                None => value,
            };
            Ok((name, cast))
        })
        .collect()
}

fn cast_scalar(
    value_type: AbstractType,
    value: RfcValue,
    element: &str,
) -> Result<RfcValue, ApiError> {
    if matches!(value, RfcValue::Null) {
        return Ok(RfcValue::Null);
    }
    match value_type {
        AbstractType::Integer => match value {
            RfcValue::Int(i) => Ok(RfcValue::Int(i)),
            RfcValue::Float(f) => Ok(RfcValue::Int(f as i64)),
            RfcValue::String(s) => {
                let digits = s.trim();
                if digits.is_empty() {
                    return Ok(RfcValue::Int(0));
                }
                digits
                    .parse::<i64>()
                    .map(RfcValue::Int)
                    .map_err(|e| invalid(element, format!("not an integer: {}", e)))
            }
            _ => Err(invalid(element, "expected a numeric value".to_string())),
        },
        AbstractType::Float => match value {
            RfcValue::Float(f) => Ok(RfcValue::Float(f)),
            RfcValue::Int(i) => Ok(RfcValue::Float(i as f64)),
            RfcValue::String(s) => {
                let digits = s.trim();
                if digits.is_empty() {
                    return Ok(RfcValue::Float(0.0));
                }
                digits
                    .parse::<f64>()
                    .map(RfcValue::Float)
                    .map_err(|e| invalid(element, format!("not a number: {}", e)))
            }
            _ => Err(invalid(element, "expected a numeric value".to_string())),
        },
        AbstractType::String => match value {
            RfcValue::String(s) => Ok(RfcValue::String(s)),
            RfcValue::Int(i) => Ok(RfcValue::String(i.to_string())),
            RfcValue::Float(f) => Ok(RfcValue::String(f.to_string())),
            _ => Err(invalid(element, "expected a character value".to_string())),
        },
        // Raw hex strings pass through untouched; padding is significant.
        AbstractType::HexBinary => Ok(value),
        AbstractType::Date => match value {
            RfcValue::Date(d) => Ok(RfcValue::Date(d)),
            RfcValue::String(s) => {
                let digits = s.trim_end_matches(TRAILING);
                // The backend pads absent dates as all zeros.
                if digits.is_empty() || digits == "00000000" {
                    return Ok(RfcValue::Null);
                }
                NaiveDate::parse_from_str(digits, "%Y%m%d")
                    .map(RfcValue::Date)
                    .map_err(|e| invalid(element, format!("not a date: {}", e)))
            }
            _ => Err(invalid(element, "expected a date value".to_string())),
        },
        AbstractType::Time => match value {
            RfcValue::Time(t) => Ok(RfcValue::Time(t)),
            RfcValue::String(s) => {
                let digits = s.trim_end_matches(TRAILING);
                if digits.is_empty() {
                    return Ok(RfcValue::Null);
                }
                NaiveTime::parse_from_str(digits, "%H%M%S")
                    .map(RfcValue::Time)
                    .map_err(|e| invalid(element, format!("not a time: {}", e)))
            }
            _ => Err(invalid(element, "expected a time value".to_string())),
        },
        // Composite-typed members show up when the backend nests
        // structures below one typedef level; passed through, the outer
        // trim still reaches their string leaves.
        AbstractType::Structure | AbstractType::Table => Ok(value),
    }
}

fn invalid(element: &str, message: String) -> ApiError {
    ApiError::InvalidValue {
        element: element.to_string(),
        message,
    }
}
