// Copyright AGNTCY Contributors (https://github.com/agntcy)
// SPDX-License-Identifier: Apache-2.0

use sapline_api::ApiDescriptor;
use sapline_config::ConnectionConfig;

use crate::backend::RfcBackend;
use crate::errors::RfcError;
use crate::function::RemoteFunction;

/// A connection to one backend system.
///
/// The session is opened lazily on the first call that needs it and kept
/// until [`Connection::close`] or drop. There is no pooling and no retry;
/// a connection holds at most one session.
pub struct Connection<B: RfcBackend> {
    backend: B,
    config: ConnectionConfig,
    session: Option<B::Session>,
}

impl<B: RfcBackend> Connection<B> {
    /// Create a connection. No I/O happens until [`Connection::open`] or
    /// the first function lookup.
    pub fn new(backend: B, config: ConnectionConfig) -> Self {
        Self {
            backend,
            config,
            session: None,
        }
    }

    pub fn config(&self) -> &ConnectionConfig {
        &self.config
    }

    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    /// Establish a session. An already open session is closed first.
    pub fn open(&mut self) -> Result<(), RfcError> {
        if self.session.is_some() {
            self.close()?;
        }
        if let Some(level) = self.config.trace() {
            self.backend
                .set_trace_level(level)
                .map_err(|e| RfcError::ConnectionFailed {
                    message: e.to_string(),
                })?;
        }
        let params = self.config.to_params()?;
        let session = self
            .backend
            .connect(&params)
            .map_err(|e| RfcError::ConnectionFailed {
                message: e.to_string(),
            })?;
        tracing::debug!("opened backend session");
        self.session = Some(session);
        Ok(())
    }

    /// Verify the session works, opening it first if needed.
    pub fn ping(&mut self) -> Result<(), RfcError> {
        self.ensure_open()?;
        let session = self.current_session()?;
        self.backend
            .ping(session)
            .map_err(|e| RfcError::ConnectionFailed {
                message: e.to_string(),
            })
    }

    /// Close the session. Safe to call on an already closed connection.
    pub fn close(&mut self) -> Result<(), RfcError> {
        if let Some(session) = self.session.take() {
            self.backend
                .close(session)
                .map_err(|e| RfcError::ConnectionFailed {
                    message: e.to_string(),
                })?;
            tracing::debug!("closed backend session");
        }
        Ok(())
    }

    /// Look up a function module and prepare it for invocation.
    ///
    /// The function's API is described and turned into a fresh
    /// [`ApiDescriptor`] on every lookup.
    pub fn function(&mut self, name: &str) -> Result<RemoteFunction<'_, B>, RfcError> {
        self.ensure_open()?;
        let session = self.current_session()?;
        let function =
            self.backend
                .lookup(session, name)
                .map_err(|e| RfcError::UnknownFunction {
                    function: name.to_string(),
                    message: e.to_string(),
                })?;
        let raw = self
            .backend
            .describe(&function)
            .map_err(|e| RfcError::ConnectionFailed {
                message: e.to_string(),
            })?;
        let api = ApiDescriptor::from_raw(&raw)?;
        tracing::debug!(function = %name, elements = api.len(), "described function module");
        Ok(RemoteFunction::new(&*self, function, name, api))
    }

    fn ensure_open(&mut self) -> Result<(), RfcError> {
        if self.session.is_none() {
            self.open()?;
        }
        Ok(())
    }

    fn current_session(&self) -> Result<&B::Session, RfcError> {
        self.session.as_ref().ok_or(RfcError::ConnectionFailed {
            message: "no open session".to_string(),
        })
    }

    pub(crate) fn backend(&self) -> &B {
        &self.backend
    }
}

impl<B: RfcBackend> Drop for Connection<B> {
    fn drop(&mut self) {
        if let Some(session) = self.session.take() {
            if self.backend.close(session).is_err() {
                tracing::debug!("backend session close failed during drop");
            }
        }
    }
}
