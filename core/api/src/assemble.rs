// Copyright AGNTCY Contributors (https://github.com/agntcy)
// SPDX-License-Identifier: Apache-2.0

//! Assembly of the invocation payload from a caller-supplied argument bag.
//!
//! Values are copied verbatim; no coercion happens on the input path.
//! Type casting is a result-path concern.

use crate::descriptor::{ApiDescriptor, ApiElement, TableElement};
use crate::errors::ApiError;
use crate::types::{RfcValue, ValueMap};

/// Collect the input and changing arguments for a call.
///
/// A non-optional element missing from `args` fails the call; optional
/// absent elements are omitted, never null-filled.
pub fn assemble_inputs<'a>(
    elements: impl IntoIterator<Item = &'a ApiElement>,
    args: &ValueMap,
    function: &str,
) -> Result<ValueMap, ApiError> {
    let mut payload = ValueMap::new();
    for element in elements {
        match args.get(element.name()) {
            Some(value) => {
                payload.insert(element.name().to_string(), value.clone());
            }
            None if !element.optional() => {
                return Err(ApiError::MissingParameter {
                    parameter: element.name().to_string(),
                    function: function.to_string(),
                });
            }
            None => {}
        }
    }
    Ok(payload)
}

/// Collect the table arguments for a call.
///
/// A table is forwarded only when the argument is present, is a sequence
/// and is non-empty. Everything else is dropped silently, even for tables
/// marked non-optional; the backend fills absent tables itself.
pub fn assemble_tables<'a>(
    tables: impl IntoIterator<Item = &'a TableElement>,
    args: &ValueMap,
) -> ValueMap {
    let mut payload = ValueMap::new();
    for table in tables {
        if let Some(RfcValue::Table(rows)) = args.get(table.name()) {
            if !rows.is_empty() {
                payload.insert(table.name().to_string(), RfcValue::Table(rows.clone()));
            }
        }
    }
    payload
}

/// Build the complete invocation payload for a function call.
///
/// The input/changing and table sets are disjoint by direction, so the
/// union is collision-free.
pub fn assemble(
    api: &ApiDescriptor,
    args: &ValueMap,
    function: &str,
) -> Result<ValueMap, ApiError> {
    let mut payload = assemble_inputs(api.call_inputs(), args, function)?;
    payload.extend(assemble_tables(api.tables(), args));
    Ok(payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raw::RawParameter;
    use crate::types::RfcValue;

    fn api() -> ApiDescriptor {
        ApiDescriptor::from_raw(&[
            RawParameter::new("IV_YEAR", "RFCTYPE_NUM", "RFC_IMPORT", false),
            RawParameter::new("IV_LANGU", "RFCTYPE_CHAR", "RFC_IMPORT", true),
            RawParameter::new("CV_FLAG", "RFCTYPE_CHAR", "RFC_CHANGING", false),
            RawParameter::new("EV_COUNT", "RFCTYPE_INT", "RFC_EXPORT", false),
            RawParameter::new("IT_ROWS", "RFCTYPE_TABLE", "RFC_TABLES", false),
        ])
        .unwrap()
    }

    fn row(key: &str, value: &str) -> ValueMap {
        let mut row = ValueMap::new();
        row.insert(key.to_string(), RfcValue::from(value));
        row
    }

    #[test]
    fn test_present_values_pass_through_unchanged() {
        let mut args = ValueMap::new();
        args.insert("IV_YEAR".to_string(), RfcValue::from("2026"));
        args.insert("CV_FLAG".to_string(), RfcValue::from("X"));
        let payload = assemble_inputs(api().call_inputs(), &args, "Z_TEST").unwrap();
        assert_eq!(payload.get("IV_YEAR"), Some(&RfcValue::from("2026")));
        assert_eq!(payload.get("CV_FLAG"), Some(&RfcValue::from("X")));
        // optional and absent: omitted, not defaulted
        assert!(!payload.contains_key("IV_LANGU"));
    }

    #[test]
    fn test_missing_mandatory_parameter_fails() {
        let args = ValueMap::new();
        let err = assemble_inputs(api().call_inputs(), &args, "Z_TEST").unwrap_err();
        assert_eq!(
            err,
            ApiError::MissingParameter {
                parameter: "IV_YEAR".to_string(),
                function: "Z_TEST".to_string(),
            }
        );
        assert!(err.to_string().contains("IV_YEAR"));
        assert!(err.to_string().contains("Z_TEST"));
    }

    #[test]
    fn test_output_elements_are_not_assembled() {
        let mut args = ValueMap::new();
        args.insert("IV_YEAR".to_string(), RfcValue::from("2026"));
        args.insert("CV_FLAG".to_string(), RfcValue::from("X"));
        args.insert("EV_COUNT".to_string(), RfcValue::from(7i64));
        let payload = assemble_inputs(api().call_inputs(), &args, "Z_TEST").unwrap();
        assert!(!payload.contains_key("EV_COUNT"));
    }

    #[test]
    fn test_non_empty_table_is_forwarded() {
        let mut args = ValueMap::new();
        args.insert(
            "IT_ROWS".to_string(),
            RfcValue::Table(vec![row("FIELD", "value")]),
        );
        let payload = assemble_tables(api().tables(), &args);
        assert_eq!(payload.len(), 1);
        assert!(payload.contains_key("IT_ROWS"));
    }

    #[test]
    fn test_missing_empty_or_mistyped_tables_are_omitted() {
        // absent
        let payload = assemble_tables(api().tables(), &ValueMap::new());
        assert!(payload.is_empty());

        // empty sequence
        let mut args = ValueMap::new();
        args.insert("IT_ROWS".to_string(), RfcValue::Table(Vec::new()));
        let payload = assemble_tables(api().tables(), &args);
        assert!(payload.is_empty());

        // not a sequence at all
        let mut args = ValueMap::new();
        args.insert("IT_ROWS".to_string(), RfcValue::from("oops"));
        let payload = assemble_tables(api().tables(), &args);
        assert!(payload.is_empty());
    }

    #[test]
    fn test_full_payload_union() {
        let mut args = ValueMap::new();
        args.insert("IV_YEAR".to_string(), RfcValue::from("2026"));
        args.insert("CV_FLAG".to_string(), RfcValue::from("X"));
        args.insert(
            "IT_ROWS".to_string(),
            RfcValue::Table(vec![row("FIELD", "value")]),
        );
        let payload = assemble(&api(), &args, "Z_TEST").unwrap();
        let names: Vec<_> = payload.keys().map(String::as_str).collect();
        assert_eq!(names, ["IV_YEAR", "CV_FLAG", "IT_ROWS"]);
    }
}
