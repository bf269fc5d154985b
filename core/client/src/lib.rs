// Copyright AGNTCY Contributors (https://github.com/agntcy)
// SPDX-License-Identifier: Apache-2.0

//! Session lifecycle and call orchestration for the sapline RFC adapter.
//!
//! [`Connection`] drives a backend SDK through the [`RfcBackend`] trait:
//! open a session lazily, look up a function module, describe it into an
//! [`sapline_api::ApiDescriptor`], and hand out a [`RemoteFunction`] that
//! assembles arguments, invokes and casts the result. One session per
//! connection, reused across calls, closed on drop.

pub mod backend;
pub mod connection;
pub mod errors;
pub mod function;

pub use backend::{BackendError, InvokeOptions, RfcBackend};
pub use connection::Connection;
pub use errors::RfcError;
pub use function::RemoteFunction;
