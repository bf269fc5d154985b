// Copyright AGNTCY Contributors (https://github.com/agntcy)
// SPDX-License-Identifier: Apache-2.0

//! Connection configuration for the sapline RFC adapter.
//!
//! The backend accepts two connection shapes: a direct application server
//! (`ashost`/`sysnr`) or a load-balanced message server group (`mshost`).
//! A configuration flattens into the key/value parameter set the backend's
//! connect call expects; mandatory keys are validated at flattening time.

pub mod connection;
pub mod errors;
pub mod params;
pub mod trace;

pub use connection::{ConnectionConfig, DirectConfig, LoadBalancedConfig};
pub use errors::ConfigError;
pub use params::ConnectionParams;
pub use trace::TraceLevel;
