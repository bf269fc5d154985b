// Copyright AGNTCY Contributors (https://github.com/agntcy)
// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

/// SDK trace verbosity.
///
/// `Detailed` exists in the vendor SDK since v2.1.0 but not in every
/// frontend; the numeric levels below are the SDK's own.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TraceLevel {
    #[default]
    Off,
    Brief,
    Verbose,
    Detailed,
    Full,
}

impl TraceLevel {
    /// The numeric trace level the vendor SDK expects.
    pub fn level(self) -> u8 {
        match self {
            TraceLevel::Off => 0,
            TraceLevel::Brief => 1,
            TraceLevel::Verbose => 2,
            TraceLevel::Detailed => 3,
            TraceLevel::Full => 4,
        }
    }
}
