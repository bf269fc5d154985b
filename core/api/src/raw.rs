// Copyright AGNTCY Contributors (https://github.com/agntcy)
// SPDX-License-Identifier: Apache-2.0

//! The raw, untyped parameter metadata as produced by the backend SDK's
//! describe call.

use serde::{Deserialize, Serialize};

/// One parameter or return value of a function module, as described by the
/// backend.
///
/// `typedef` carries the row/record layout of structures and tables. Older
/// SDK revisions omit it entirely; in that case the member list stays
/// empty and is never guessed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawParameter {
    pub name: String,
    #[serde(rename = "type")]
    pub param_type: String,
    pub direction: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, rename = "ucLength")]
    pub uc_length: u32,
    #[serde(default, rename = "nucLength")]
    pub nuc_length: u32,
    #[serde(default)]
    pub decimals: u32,
    #[serde(default)]
    pub optional: bool,
    #[serde(default, rename = "default")]
    pub default_value: String,
    #[serde(default)]
    pub typedef: Vec<RawField>,
}

impl RawParameter {
    pub fn new(
        name: impl Into<String>,
        param_type: impl Into<String>,
        direction: impl Into<String>,
        optional: bool,
    ) -> Self {
        Self {
            name: name.into(),
            param_type: param_type.into(),
            direction: direction.into(),
            description: String::new(),
            uc_length: 0,
            nuc_length: 0,
            decimals: 0,
            optional,
            default_value: String::new(),
            typedef: Vec::new(),
        }
    }

    pub fn with_typedef(mut self, typedef: Vec<RawField>) -> Self {
        self.typedef = typedef;
        self
    }
}

/// One field of a structure or table row layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawField {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: String,
    #[serde(default, rename = "ucLength")]
    pub uc_length: u32,
    #[serde(default, rename = "ucOffset")]
    pub uc_offset: u32,
    #[serde(default, rename = "nucLength")]
    pub nuc_length: u32,
    #[serde(default, rename = "nucOffset")]
    pub nuc_offset: u32,
    #[serde(default)]
    pub decimals: u32,
}

impl RawField {
    pub fn new(name: impl Into<String>, field_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            field_type: field_type.into(),
            uc_length: 0,
            uc_offset: 0,
            nuc_length: 0,
            nuc_offset: 0,
            decimals: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_sdk_shape() {
        let json = r#"{
            "name": "ET_ADDR",
            "type": "RFCTYPE_TABLE",
            "direction": "RFC_EXPORT",
            "description": "",
            "ucLength": 1320,
            "nucLength": 660,
            "decimals": 0,
            "optional": false,
            "default": "",
            "typedef": [
                {"name": "KUNNR", "type": "RFCTYPE_CHAR", "ucLength": 20, "nucLength": 10}
            ]
        }"#;
        let param: RawParameter = serde_json::from_str(json).unwrap();
        assert_eq!(param.name, "ET_ADDR");
        assert_eq!(param.param_type, "RFCTYPE_TABLE");
        assert_eq!(param.uc_length, 1320);
        assert_eq!(param.typedef.len(), 1);
        assert_eq!(param.typedef[0].name, "KUNNR");
        assert_eq!(param.typedef[0].nuc_length, 10);
    }

    #[test]
    fn test_missing_typedef_stays_empty() {
        let json = r#"{
            "name": "IV_DATE",
            "type": "RFCTYPE_DATE",
            "direction": "RFC_IMPORT",
            "optional": true
        }"#;
        let param: RawParameter = serde_json::from_str(json).unwrap();
        assert!(param.typedef.is_empty());
        assert!(param.optional);
    }
}
