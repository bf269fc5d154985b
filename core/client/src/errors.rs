// Copyright AGNTCY Contributors (https://github.com/agntcy)
// SPDX-License-Identifier: Apache-2.0

use thiserror::Error;

use sapline_api::ApiError;
use sapline_config::ConfigError;

/// Failures surfaced to the caller of a remote function call.
///
/// Nothing in here is retried; a failed call produces no partial result.
#[derive(Error, Debug)]
pub enum RfcError {
    #[error("incomplete configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("connection failed: {message}")]
    ConnectionFailed { message: String },

    #[error("unknown function {function}: {message}")]
    UnknownFunction { function: String, message: String },

    #[error("function call {function} failed: {message}")]
    CallFailed { function: String, message: String },

    #[error(transparent)]
    Api(#[from] ApiError),
}
