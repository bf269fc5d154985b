// Copyright AGNTCY Contributors (https://github.com/agntcy)
// SPDX-License-Identifier: Apache-2.0

use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::Arc;

use parking_lot::Mutex;

use sapline_api::{RawParameter, ValueMap};
use sapline_client::{BackendError, InvokeOptions, RfcBackend};
use sapline_config::{ConnectionParams, TraceLevel};

/// A scripted RFC backend.
///
/// Clones share one state; keep a clone outside the connection to assert
/// on recorded interactions after the call. Operations on a closed
/// session fail the way the vendor SDK does.
#[derive(Clone, Default)]
pub struct MockBackend {
    state: Arc<Mutex<MockState>>,
}

#[derive(Default)]
struct MockState {
    apis: HashMap<String, Vec<RawParameter>>,
    responses: HashMap<String, VecDeque<Result<ValueMap, String>>>,
    connect_error: Option<String>,
    connects: Vec<ConnectionParams>,
    invocations: Vec<(String, ValueMap)>,
    trace_level: Option<TraceLevel>,
    next_session: u64,
    open_sessions: HashSet<u64>,
}

/// Opaque session handle handed out by [`MockBackend::connect`].
#[derive(Debug)]
pub struct MockSession {
    id: u64,
}

/// Function handle carrying only the looked-up name.
#[derive(Debug)]
pub struct MockFunction {
    name: String,
}

impl MockFunction {
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script a function module and its describe() metadata.
    pub fn with_function(self, name: impl Into<String>, api: Vec<RawParameter>) -> Self {
        self.state.lock().apis.insert(name.into(), api);
        self
    }

    /// Queue a successful invoke response for a function.
    pub fn with_response(self, name: impl Into<String>, response: ValueMap) -> Self {
        self.state
            .lock()
            .responses
            .entry(name.into())
            .or_default()
            .push_back(Ok(response));
        self
    }

    /// Queue a failing invoke for a function.
    pub fn with_call_error(self, name: impl Into<String>, message: impl Into<String>) -> Self {
        self.state
            .lock()
            .responses
            .entry(name.into())
            .or_default()
            .push_back(Err(message.into()));
        self
    }

    /// Make every connect attempt fail.
    pub fn with_connect_error(self, message: impl Into<String>) -> Self {
        self.state.lock().connect_error = Some(message.into());
        self
    }

    pub fn connect_count(&self) -> usize {
        self.state.lock().connects.len()
    }

    pub fn last_connect_params(&self) -> Option<ConnectionParams> {
        self.state.lock().connects.last().cloned()
    }

    pub fn invocations(&self) -> Vec<(String, ValueMap)> {
        self.state.lock().invocations.clone()
    }

    pub fn open_session_count(&self) -> usize {
        self.state.lock().open_sessions.len()
    }

    pub fn trace_level(&self) -> Option<TraceLevel> {
        self.state.lock().trace_level
    }

    fn check_session(state: &MockState, session: &MockSession) -> Result<(), BackendError> {
        if state.open_sessions.contains(&session.id) {
            Ok(())
        } else {
            Err(BackendError::Connection("session closed".to_string()))
        }
    }
}

impl RfcBackend for MockBackend {
    type Session = MockSession;
    type Function = MockFunction;

    fn connect(&self, params: &ConnectionParams) -> Result<MockSession, BackendError> {
        let mut state = self.state.lock();
        if let Some(message) = &state.connect_error {
            return Err(BackendError::Connection(message.clone()));
        }
        state.connects.push(params.clone());
        state.next_session += 1;
        let id = state.next_session;
        state.open_sessions.insert(id);
        Ok(MockSession { id })
    }

    fn ping(&self, session: &MockSession) -> Result<(), BackendError> {
        Self::check_session(&self.state.lock(), session)
    }

    fn lookup(&self, session: &MockSession, name: &str) -> Result<MockFunction, BackendError> {
        let state = self.state.lock();
        Self::check_session(&state, session)?;
        if state.apis.contains_key(name) {
            Ok(MockFunction {
                name: name.to_string(),
            })
        } else {
            Err(BackendError::NotFound(format!(
                "function module {} does not exist",
                name
            )))
        }
    }

    fn describe(&self, function: &MockFunction) -> Result<Vec<RawParameter>, BackendError> {
        self.state
            .lock()
            .apis
            .get(&function.name)
            .cloned()
            .ok_or_else(|| {
                BackendError::CallFailed(format!("no API scripted for {}", function.name))
            })
    }

    fn invoke(
        &self,
        function: &MockFunction,
        args: ValueMap,
        _options: &InvokeOptions,
    ) -> Result<ValueMap, BackendError> {
        let mut state = self.state.lock();
        state.invocations.push((function.name.clone(), args));
        let response = state
            .responses
            .get_mut(&function.name)
            .and_then(VecDeque::pop_front)
            .ok_or_else(|| {
                BackendError::CallFailed(format!("no scripted response for {}", function.name))
            })?;
        response.map_err(BackendError::CallFailed)
    }

    fn close(&self, session: MockSession) -> Result<(), BackendError> {
        let mut state = self.state.lock();
        if state.open_sessions.remove(&session.id) {
            Ok(())
        } else {
            Err(BackendError::Connection(
                "session already closed".to_string(),
            ))
        }
    }

    fn set_trace_level(&self, level: TraceLevel) -> Result<(), BackendError> {
        self.state.lock().trace_level = Some(level);
        Ok(())
    }
}
