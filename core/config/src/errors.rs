// Copyright AGNTCY Contributors (https://github.com/agntcy)
// SPDX-License-Identifier: Apache-2.0

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("missing mandatory configuration key '{0}'")]
    MissingParameter(String),

    #[error("failed to parse configuration: {0}")]
    Parse(String),
}
