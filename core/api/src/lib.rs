// Copyright AGNTCY Contributors (https://github.com/agntcy)
// SPDX-License-Identifier: Apache-2.0

//! Typed API descriptors and value marshalling for NetWeaver RFC function
//! modules.
//!
//! The backend SDK describes every function module parameter with native
//! type and direction tags. This crate converts that raw metadata into a
//! vendor-neutral [`ApiDescriptor`], assembles the argument map for an
//! invocation, and casts the raw result map back into typed
//! [`RfcValue`]s, including the trailing-blank normalization the backend's
//! fixed-width fields require.

pub mod assemble;
pub mod cast;
pub mod descriptor;
pub mod errors;
pub mod mapping;
pub mod raw;
pub mod types;

pub use assemble::{assemble, assemble_inputs, assemble_tables};
pub use cast::{cast_outputs, rtrim_value};
pub use descriptor::{ApiDescriptor, ApiElement, Member, ScalarValue, StructElement, TableElement};
pub use errors::ApiError;
pub use mapping::{map_direction, map_type};
pub use raw::{RawField, RawParameter};
pub use types::{AbstractType, Direction, RfcValue, ValueMap};
