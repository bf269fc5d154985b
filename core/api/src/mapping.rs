// Copyright AGNTCY Contributors (https://github.com/agntcy)
// SPDX-License-Identifier: Apache-2.0

//! Lookup tables converting the backend SDK's native type and direction
//! tags into the vendor-neutral vocabulary.
//!
//! The tables are immutable process-wide state and safe for concurrent
//! reads. A tag missing from a table means the SDK introduced something
//! this crate does not know about; that is a hard error, never a default.

use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::errors::ApiError;
use crate::types::{AbstractType, Direction};

lazy_static! {
    static ref TYPE_MAP: HashMap<&'static str, AbstractType> = {
        let mut m = HashMap::new();
        m.insert("RFCTYPE_DATE", AbstractType::Date);
        m.insert("RFCTYPE_TIME", AbstractType::Time);
        m.insert("RFCTYPE_INT", AbstractType::Integer);
        m.insert("RFCTYPE_NUM", AbstractType::Integer);
        m.insert("RFCTYPE_INT1", AbstractType::Integer);
        m.insert("RFCTYPE_INT2", AbstractType::Integer);
        m.insert("RFCTYPE_INT8", AbstractType::Integer);
        m.insert("RFCTYPE_BCD", AbstractType::Float);
        m.insert("RFCTYPE_FLOAT", AbstractType::Float);
        m.insert("RFCTYPE_CHAR", AbstractType::String);
        m.insert("RFCTYPE_STRING", AbstractType::String);
        m.insert("RFCTYPE_BYTE", AbstractType::HexBinary);
        m.insert("RFCTYPE_XSTRING", AbstractType::HexBinary);
        m.insert("RFCTYPE_STRUCTURE", AbstractType::Structure);
        m.insert("RFCTYPE_TABLE", AbstractType::Table);
        m
    };
    static ref DIRECTION_MAP: HashMap<&'static str, Direction> = {
        let mut m = HashMap::new();
        m.insert("RFC_IMPORT", Direction::Input);
        m.insert("RFC_EXPORT", Direction::Output);
        m.insert("RFC_CHANGING", Direction::Changing);
        m.insert("RFC_TABLES", Direction::Table);
        m
    };
}

/// Convert a native RFC type tag into an [`AbstractType`].
pub fn map_type(native: &str) -> Result<AbstractType, ApiError> {
    TYPE_MAP
        .get(native)
        .copied()
        .ok_or_else(|| ApiError::UnknownType(native.to_string()))
}

/// Convert a native RFC direction tag into a [`Direction`].
pub fn map_direction(native: &str) -> Result<Direction, ApiError> {
    DIRECTION_MAP
        .get(native)
        .copied()
        .ok_or_else(|| ApiError::UnknownDirection(native.to_string()))
}
