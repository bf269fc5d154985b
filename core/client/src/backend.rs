// Copyright AGNTCY Contributors (https://github.com/agntcy)
// SPDX-License-Identifier: Apache-2.0

//! The boundary to the vendor RFC SDK.
//!
//! Everything network-facing lives behind [`RfcBackend`]: session
//! creation, function lookup, parameter introspection and the invoke
//! itself. The adapter never owns wire details; it only consumes the
//! metadata and result maps the backend produces.

use thiserror::Error;

use sapline_api::{RawParameter, ValueMap};
use sapline_config::{ConnectionParams, TraceLevel};

/// Errors reported by a backend implementation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BackendError {
    #[error("connection failed: {0}")]
    Connection(String),

    #[error("function not found: {0}")]
    NotFound(String),

    #[error("call failed: {0}")]
    CallFailed(String),
}

/// Options forwarded to the backend's invoke call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvokeOptions {
    /// Let the backend strip trailing blanks from fixed-width fields.
    pub rtrim: bool,
}

impl Default for InvokeOptions {
    fn default() -> Self {
        Self { rtrim: true }
    }
}

/// A synchronous, blocking RFC backend.
///
/// The vendor SDK is a blocking C library; every operation here is a
/// strict, synchronous call. Session handles are owned by the caller and
/// given back through [`RfcBackend::close`].
pub trait RfcBackend {
    type Session;
    type Function;

    fn connect(&self, params: &ConnectionParams) -> Result<Self::Session, BackendError>;

    fn ping(&self, session: &Self::Session) -> Result<(), BackendError>;

    fn lookup(
        &self,
        session: &Self::Session,
        name: &str,
    ) -> Result<Self::Function, BackendError>;

    fn describe(&self, function: &Self::Function) -> Result<Vec<RawParameter>, BackendError>;

    fn invoke(
        &self,
        function: &Self::Function,
        args: ValueMap,
        options: &InvokeOptions,
    ) -> Result<ValueMap, BackendError>;

    fn close(&self, session: Self::Session) -> Result<(), BackendError>;

    /// Apply the SDK's global trace level. Optional; the default ignores it.
    fn set_trace_level(&self, level: TraceLevel) -> Result<(), BackendError> {
        let _ = level;
        Ok(())
    }
}
