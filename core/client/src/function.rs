// Copyright AGNTCY Contributors (https://github.com/agntcy)
// SPDX-License-Identifier: Apache-2.0

use sapline_api::{ApiDescriptor, RfcValue, ValueMap, assemble, cast_outputs};

use crate::backend::{InvokeOptions, RfcBackend};
use crate::connection::Connection;
use crate::errors::RfcError;

/// Options used for every invoke; the backend strips the fixed-width
/// padding it knows about, the result cast normalizes the rest.
const INVOKE_OPTIONS: InvokeOptions = InvokeOptions { rtrim: true };

/// A prepared remote function call.
///
/// Holds the backend's function handle, the freshly built API descriptor
/// and the parameter bag. Parameters are set by name and sent verbatim;
/// typing happens on the result path.
pub struct RemoteFunction<'conn, B: RfcBackend> {
    connection: &'conn Connection<B>,
    function: B::Function,
    name: String,
    api: ApiDescriptor,
    params: ValueMap,
}

impl<'conn, B: RfcBackend> std::fmt::Debug for RemoteFunction<'conn, B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RemoteFunction")
            .field("name", &self.name)
            .field("api", &self.api)
            .field("params", &self.params)
            .finish()
    }
}

impl<'conn, B: RfcBackend> RemoteFunction<'conn, B> {
    pub(crate) fn new(
        connection: &'conn Connection<B>,
        function: B::Function,
        name: &str,
        api: ApiDescriptor,
    ) -> Self {
        Self {
            connection,
            function,
            name: name.to_string(),
            api,
            params: ValueMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The vendor-neutral API description of this function module.
    pub fn api(&self) -> &ApiDescriptor {
        &self.api
    }

    /// Set one call parameter. Values pass to the backend unchanged.
    pub fn set_param(&mut self, name: impl Into<String>, value: impl Into<RfcValue>) -> &mut Self {
        self.params.insert(name.into(), value.into());
        self
    }

    /// Replace the whole parameter bag.
    pub fn set_params(&mut self, params: ValueMap) -> &mut Self {
        self.params = params;
        self
    }

    /// Execute the call.
    ///
    /// Assembles the input and table arguments against the descriptor,
    /// invokes through the backend and casts the raw result. Fails before
    /// reaching the backend when a mandatory parameter is missing.
    pub fn invoke(&self) -> Result<ValueMap, RfcError> {
        let payload = assemble(&self.api, &self.params, &self.name)?;
        tracing::debug!(
            function = %self.name,
            parameters = payload.len(),
            "invoking function module"
        );
        let raw = self
            .connection
            .backend()
            .invoke(&self.function, payload, &INVOKE_OPTIONS)
            .map_err(|e| RfcError::CallFailed {
                function: self.name.clone(),
                message: e.to_string(),
            })?;
        let output = cast_outputs(self.api.call_outputs(), raw, &self.name)?;
        tracing::debug!(
            function = %self.name,
            values = output.len(),
            "function module returned"
        );
        Ok(output)
    }
}
