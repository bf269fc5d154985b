// Copyright AGNTCY Contributors (https://github.com/agntcy)
// SPDX-License-Identifier: Apache-2.0

use thiserror::Error;

/// Errors raised while building a descriptor, assembling arguments or
/// casting results.
///
/// `UnknownType` and `UnknownDirection` signal contract drift with the
/// backend SDK: a tag showed up that the mapping tables do not know. They
/// are never absorbed or defaulted.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    #[error("unknown native RFC type '{0}'")]
    UnknownType(String),

    #[error("unknown native RFC direction '{0}'")]
    UnknownDirection(String),

    #[error("duplicate API element '{0}'")]
    DuplicateElement(String),

    #[error("missing parameter '{parameter}' for function call '{function}'")]
    MissingParameter { parameter: String, function: String },

    #[error("missing result value '{value}' for function call '{function}'")]
    MissingResult { value: String, function: String },

    #[error("invalid value for '{element}': {message}")]
    InvalidValue { element: String, message: String },
}
