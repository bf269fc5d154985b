// Copyright AGNTCY Contributors (https://github.com/agntcy)
// SPDX-License-Identifier: Apache-2.0

//! Vendor-neutral API descriptors built from the backend's raw parameter
//! metadata.
//!
//! A descriptor is built fresh per function lookup and is immutable once
//! construction finishes. Element names are upper-cased and pairwise
//! unique; construction aborts on the first mapping failure, a partial
//! descriptor is never handed out.

use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::errors::ApiError;
use crate::mapping::{map_direction, map_type};
use crate::raw::{RawField, RawParameter};
use crate::types::{AbstractType, Direction};

/// One field of a structure or table row, reduced to its name and scalar
/// type. Member direction is meaningless and therefore not stored.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Member {
    #[serde(rename = "type")]
    member_type: AbstractType,
    name: String,
}

impl Member {
    pub fn new(member_type: AbstractType, name: impl Into<String>) -> Self {
        Self {
            member_type,
            name: name.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn member_type(&self) -> AbstractType {
        self.member_type
    }
}

/// A non-composite parameter or return value.
#[derive(Debug, Clone, PartialEq)]
pub struct ScalarValue {
    name: String,
    value_type: AbstractType,
    direction: Direction,
    optional: bool,
}

impl ScalarValue {
    pub fn new(
        value_type: AbstractType,
        name: impl Into<String>,
        direction: Direction,
        optional: bool,
    ) -> Self {
        Self {
            name: name.into(),
            value_type,
            direction,
            optional,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value_type(&self) -> AbstractType {
        self.value_type
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn optional(&self) -> bool {
        self.optional
    }
}

/// A fixed-shape record parameter with an ordered member list.
#[derive(Debug, Clone, PartialEq)]
pub struct StructElement {
    name: String,
    direction: Direction,
    optional: bool,
    members: Vec<Member>,
}

impl StructElement {
    pub fn new(
        name: impl Into<String>,
        direction: Direction,
        optional: bool,
        members: Vec<Member>,
    ) -> Self {
        Self {
            name: name.into(),
            direction,
            optional,
            members,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn optional(&self) -> bool {
        self.optional
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub fn member(&self, name: &str) -> Option<&Member> {
        self.members.iter().find(|m| m.name() == name)
    }
}

/// A table parameter; the member list describes one row.
#[derive(Debug, Clone, PartialEq)]
pub struct TableElement {
    name: String,
    optional: bool,
    members: Vec<Member>,
}

impl TableElement {
    pub fn new(name: impl Into<String>, optional: bool, members: Vec<Member>) -> Self {
        Self {
            name: name.into(),
            optional,
            members,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn optional(&self) -> bool {
        self.optional
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub fn member(&self, name: &str) -> Option<&Member> {
        self.members.iter().find(|m| m.name() == name)
    }
}

/// One named element of a function module's API.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiElement {
    Scalar(ScalarValue),
    Struct(StructElement),
    Table(TableElement),
}

impl ApiElement {
    pub fn name(&self) -> &str {
        match self {
            ApiElement::Scalar(e) => e.name(),
            ApiElement::Struct(e) => e.name(),
            ApiElement::Table(e) => e.name(),
        }
    }

    /// Tables always flow through the table direction.
    pub fn direction(&self) -> Direction {
        match self {
            ApiElement::Scalar(e) => e.direction(),
            ApiElement::Struct(e) => e.direction(),
            ApiElement::Table(_) => Direction::Table,
        }
    }

    pub fn optional(&self) -> bool {
        match self {
            ApiElement::Scalar(e) => e.optional(),
            ApiElement::Struct(e) => e.optional(),
            ApiElement::Table(e) => e.optional(),
        }
    }

    pub fn element_type(&self) -> AbstractType {
        match self {
            ApiElement::Scalar(e) => e.value_type(),
            ApiElement::Struct(_) => AbstractType::Structure,
            ApiElement::Table(_) => AbstractType::Table,
        }
    }
}

impl Serialize for ApiElement {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("type", &self.element_type())?;
        map.serialize_entry("name", self.name())?;
        map.serialize_entry("direction", &self.direction())?;
        map.serialize_entry("optional", &self.optional())?;
        match self {
            ApiElement::Struct(e) => map.serialize_entry("members", e.members())?,
            ApiElement::Table(e) => map.serialize_entry("members", e.members())?,
            ApiElement::Scalar(_) => {}
        }
        map.end()
    }
}

/// The full typed interface description of one function module.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApiDescriptor {
    elements: IndexMap<String, ApiElement>,
}

impl ApiDescriptor {
    /// Build a descriptor from the raw metadata of a describe call.
    ///
    /// Names are upper-cased before insertion. Any unknown tag or
    /// duplicate name aborts the whole build.
    pub fn from_raw(params: &[RawParameter]) -> Result<Self, ApiError> {
        let mut descriptor = ApiDescriptor::default();
        for param in params {
            let name = param.name.to_uppercase();
            let element_type = map_type(&param.param_type)?;
            let direction = map_direction(&param.direction)?;
            let element = if direction == Direction::Table || element_type == AbstractType::Table {
                ApiElement::Table(TableElement::new(
                    name,
                    param.optional,
                    members_from(&param.typedef)?,
                ))
            } else if element_type == AbstractType::Structure {
                ApiElement::Struct(StructElement::new(
                    name,
                    direction,
                    param.optional,
                    members_from(&param.typedef)?,
                ))
            } else {
                ApiElement::Scalar(ScalarValue::new(element_type, name, direction, param.optional))
            };
            descriptor.add(element)?;
        }
        Ok(descriptor)
    }

    pub fn add(&mut self, element: ApiElement) -> Result<(), ApiError> {
        let name = element.name().to_string();
        if self.elements.contains_key(&name) {
            return Err(ApiError::DuplicateElement(name));
        }
        self.elements.insert(name, element);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&ApiElement> {
        self.elements.get(name)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// All elements in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &ApiElement> {
        self.elements.values()
    }

    pub fn input_elements(&self) -> impl Iterator<Item = &ApiElement> {
        self.by_direction(Direction::Input)
    }

    pub fn output_elements(&self) -> impl Iterator<Item = &ApiElement> {
        self.by_direction(Direction::Output)
    }

    pub fn changing_elements(&self) -> impl Iterator<Item = &ApiElement> {
        self.by_direction(Direction::Changing)
    }

    pub fn tables(&self) -> impl Iterator<Item = &TableElement> {
        self.elements.values().filter_map(|e| match e {
            ApiElement::Table(t) => Some(t),
            _ => None,
        })
    }

    /// Input and changing elements, the set the argument assembly walks.
    pub fn call_inputs(&self) -> impl Iterator<Item = &ApiElement> {
        self.elements.values().filter(|e| {
            matches!(e.direction(), Direction::Input | Direction::Changing)
        })
    }

    /// Output, changing and table elements, the set the result cast walks.
    pub fn call_outputs(&self) -> impl Iterator<Item = &ApiElement> {
        self.elements.values().filter(|e| {
            matches!(
                e.direction(),
                Direction::Output | Direction::Changing | Direction::Table
            )
        })
    }

    fn by_direction(&self, direction: Direction) -> impl Iterator<Item = &ApiElement> {
        self.elements
            .values()
            .filter(move |e| e.direction() == direction)
    }
}

impl Serialize for ApiDescriptor {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.elements.values())
    }
}

fn members_from(typedef: &[RawField]) -> Result<Vec<Member>, ApiError> {
    typedef
        .iter()
        .map(|field| {
            Ok(Member::new(map_type(&field.field_type)?, field.name.clone()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn struct_param() -> RawParameter {
        RawParameter::new("test_out", "RFCTYPE_STRUCTURE", "RFC_EXPORT", false).with_typedef(vec![
            RawField::new("RFCFLOAT", "RFCTYPE_FLOAT"),
            RawField::new("RFCCHAR1", "RFCTYPE_CHAR"),
            RawField::new("RFCINT2", "RFCTYPE_INT2"),
        ])
    }

    #[test]
    fn test_names_are_uppercased() {
        let api = ApiDescriptor::from_raw(&[struct_param()]).unwrap();
        assert!(api.get("TEST_OUT").is_some());
        assert!(api.get("test_out").is_none());
    }

    #[test]
    fn test_struct_members_in_order() {
        let api = ApiDescriptor::from_raw(&[struct_param()]).unwrap();
        let element = api.get("TEST_OUT").unwrap();
        let ApiElement::Struct(s) = element else {
            panic!("expected a struct element");
        };
        let names: Vec<_> = s.members().iter().map(|m| m.name()).collect();
        assert_eq!(names, ["RFCFLOAT", "RFCCHAR1", "RFCINT2"]);
        assert_eq!(s.members()[0].member_type(), AbstractType::Float);
    }

    #[test]
    fn test_table_without_typedef_has_empty_members() {
        let param = RawParameter::new("ET_ROWS", "RFCTYPE_TABLE", "RFC_TABLES", false);
        let api = ApiDescriptor::from_raw(&[param]).unwrap();
        let ApiElement::Table(t) = api.get("ET_ROWS").unwrap() else {
            panic!("expected a table element");
        };
        assert!(t.members().is_empty());
        assert_eq!(api.get("ET_ROWS").unwrap().direction(), Direction::Table);
    }

    #[test]
    fn test_export_direction_table_type_is_a_table() {
        // Modern SDKs describe output tables as RFCTYPE_TABLE + RFC_EXPORT.
        let param = RawParameter::new("ET_ADDR", "RFCTYPE_TABLE", "RFC_EXPORT", false);
        let api = ApiDescriptor::from_raw(&[param]).unwrap();
        assert!(matches!(api.get("ET_ADDR").unwrap(), ApiElement::Table(_)));
    }

    #[test]
    fn test_duplicate_names_abort_the_build() {
        let params = [
            RawParameter::new("iv_x", "RFCTYPE_CHAR", "RFC_IMPORT", false),
            RawParameter::new("IV_X", "RFCTYPE_CHAR", "RFC_IMPORT", false),
        ];
        let err = ApiDescriptor::from_raw(&params).unwrap_err();
        assert_eq!(err, ApiError::DuplicateElement("IV_X".to_string()));
    }

    #[test]
    fn test_unknown_member_type_aborts_the_build() {
        let param = RawParameter::new("ET_ROWS", "RFCTYPE_TABLE", "RFC_TABLES", false)
            .with_typedef(vec![RawField::new("F1", "RFCTYPE_UTCLONG")]);
        let err = ApiDescriptor::from_raw(&[param]).unwrap_err();
        assert_eq!(err, ApiError::UnknownType("RFCTYPE_UTCLONG".to_string()));
    }

    #[test]
    fn test_neutral_json_description() {
        let params = [
            RawParameter::new("IV_YEAR", "RFCTYPE_NUM", "RFC_IMPORT", false),
            struct_param(),
        ];
        let api = ApiDescriptor::from_raw(&params).unwrap();
        let json = serde_json::to_value(&api).unwrap();
        assert_eq!(
            json,
            serde_json::json!([
                {
                    "type": "int",
                    "name": "IV_YEAR",
                    "direction": "input",
                    "optional": false
                },
                {
                    "type": "struct",
                    "name": "TEST_OUT",
                    "direction": "output",
                    "optional": false,
                    "members": [
                        {"type": "float", "name": "RFCFLOAT"},
                        {"type": "string", "name": "RFCCHAR1"},
                        {"type": "int", "name": "RFCINT2"}
                    ]
                }
            ])
        );
    }

    #[test]
    fn test_iteration_follows_declaration_order() {
        let params = [
            RawParameter::new("B", "RFCTYPE_CHAR", "RFC_IMPORT", false),
            RawParameter::new("A", "RFCTYPE_CHAR", "RFC_EXPORT", false),
            RawParameter::new("C", "RFCTYPE_TABLE", "RFC_TABLES", false),
        ];
        let api = ApiDescriptor::from_raw(&params).unwrap();
        let names: Vec<_> = api.iter().map(|e| e.name()).collect();
        assert_eq!(names, ["B", "A", "C"]);
    }
}
