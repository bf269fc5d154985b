// Copyright AGNTCY Contributors (https://github.com/agntcy)
// SPDX-License-Identifier: Apache-2.0

//! Test utilities for the sapline RFC adapter.
//!
//! [`MockBackend`] is a scripted, in-memory stand-in for the vendor SDK:
//! function APIs and invoke responses are queued per function name, and
//! every session/parameter interaction is recorded for assertions.

pub mod mock;

pub use mock::{MockBackend, MockFunction, MockSession};
