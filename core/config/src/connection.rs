// Copyright AGNTCY Contributors (https://github.com/agntcy)
// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;
use crate::params::ConnectionParams;
use crate::trace::TraceLevel;

/// Connection parameters for a specific application server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DirectConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ashost: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sysnr: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passwd: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gwhost: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gwserv: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trace: Option<TraceLevel>,
}

impl DirectConfig {
    pub fn new(
        ashost: impl Into<String>,
        sysnr: impl Into<String>,
        client: impl Into<String>,
        user: impl Into<String>,
        passwd: impl Into<String>,
    ) -> Self {
        Self {
            ashost: Some(ashost.into()),
            sysnr: Some(sysnr.into()),
            client: Some(client.into()),
            user: Some(user.into()),
            passwd: Some(passwd.into()),
            ..Self::default()
        }
    }

    pub fn with_gateway(mut self, gwhost: impl Into<String>, gwserv: impl Into<String>) -> Self {
        self.gwhost = Some(gwhost.into());
        self.gwserv = Some(gwserv.into());
        self
    }

    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = Some(lang.into());
        self
    }

    pub fn with_trace(mut self, trace: TraceLevel) -> Self {
        self.trace = Some(trace);
        self
    }

    fn to_params(&self) -> Result<ConnectionParams, ConfigError> {
        let mut params = ConnectionParams::new();
        if let Some(lang) = &self.lang {
            params.insert("lang", lang);
        }
        params.insert("client", required("client", &self.client)?);
        params.insert("user", required("user", &self.user)?);
        params.insert("passwd", required("passwd", &self.passwd)?);
        if let Some(gwhost) = &self.gwhost {
            params.insert("gwhost", gwhost);
        }
        if let Some(gwserv) = &self.gwserv {
            params.insert("gwserv", gwserv);
        }
        params.insert("ashost", required("ashost", &self.ashost)?);
        params.insert("sysnr", required("sysnr", &self.sysnr)?);
        Ok(params)
    }
}

/// Connection parameters for a load-balanced message server group.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoadBalancedConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mshost: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passwd: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub r3name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trace: Option<TraceLevel>,
}

impl LoadBalancedConfig {
    pub fn new(
        mshost: impl Into<String>,
        client: impl Into<String>,
        user: impl Into<String>,
        passwd: impl Into<String>,
    ) -> Self {
        Self {
            mshost: Some(mshost.into()),
            client: Some(client.into()),
            user: Some(user.into()),
            passwd: Some(passwd.into()),
            ..Self::default()
        }
    }

    pub fn with_system(mut self, r3name: impl Into<String>) -> Self {
        self.r3name = Some(r3name.into());
        self
    }

    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = Some(lang.into());
        self
    }

    pub fn with_trace(mut self, trace: TraceLevel) -> Self {
        self.trace = Some(trace);
        self
    }

    fn to_params(&self) -> Result<ConnectionParams, ConfigError> {
        let mut params = ConnectionParams::new();
        if let Some(lang) = &self.lang {
            params.insert("lang", lang);
        }
        params.insert("client", required("client", &self.client)?);
        params.insert("user", required("user", &self.user)?);
        params.insert("passwd", required("passwd", &self.passwd)?);
        if let Some(r3name) = &self.r3name {
            params.insert("r3name", r3name);
        }
        if let Some(group) = &self.group {
            params.insert("group", group);
        }
        params.insert("mshost", required("mshost", &self.mshost)?);
        Ok(params)
    }
}

/// One of the two connection shapes the backend accepts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ConnectionConfig {
    Direct(DirectConfig),
    LoadBalanced(LoadBalancedConfig),
}

impl ConnectionConfig {
    /// Parse a configuration from YAML.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(yaml).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Flatten into the backend's connect parameters.
    ///
    /// Optional keys are emitted only when set; a missing or empty
    /// mandatory key fails, nothing is ever defaulted.
    pub fn to_params(&self) -> Result<ConnectionParams, ConfigError> {
        match self {
            ConnectionConfig::Direct(config) => config.to_params(),
            ConnectionConfig::LoadBalanced(config) => config.to_params(),
        }
    }

    pub fn trace(&self) -> Option<TraceLevel> {
        match self {
            ConnectionConfig::Direct(config) => config.trace,
            ConnectionConfig::LoadBalanced(config) => config.trace,
        }
    }
}

fn required(key: &str, value: &Option<String>) -> Result<String, ConfigError> {
    match value {
        Some(value) if !value.is_empty() => Ok(value.clone()),
        _ => Err(ConfigError::MissingParameter(key.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direct_config_flattens_in_order() {
        let config = ConnectionConfig::Direct(
            DirectConfig::new("sap01.example.org", "00", "001", "username", "password")
                .with_lang("EN"),
        );
        let params = config.to_params().unwrap();
        let keys: Vec<_> = params.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["lang", "client", "user", "passwd", "ashost", "sysnr"]);
        assert_eq!(params.get("ashost"), Some("sap01.example.org"));
        assert_eq!(params.get("sysnr"), Some("00"));
    }

    #[test]
    fn test_optional_keys_are_omitted_when_unset() {
        let config =
            ConnectionConfig::Direct(DirectConfig::new("host", "00", "001", "user", "secret"));
        let params = config.to_params().unwrap();
        assert!(!params.contains_key("lang"));
        assert!(!params.contains_key("gwhost"));
        assert!(!params.contains_key("gwserv"));
    }

    #[test]
    fn test_missing_mandatory_key_fails() {
        let mut direct = DirectConfig::new("host", "00", "001", "user", "secret");
        direct.passwd = None;
        let err = ConnectionConfig::Direct(direct).to_params().unwrap_err();
        assert_eq!(err, ConfigError::MissingParameter("passwd".to_string()));
    }

    #[test]
    fn test_empty_mandatory_key_fails() {
        let direct = DirectConfig::new("", "00", "001", "user", "secret");
        let err = ConnectionConfig::Direct(direct).to_params().unwrap_err();
        assert_eq!(err, ConfigError::MissingParameter("ashost".to_string()));
    }

    #[test]
    fn test_load_balanced_config_flattens() {
        let config = ConnectionConfig::LoadBalanced(
            LoadBalancedConfig::new("msg.example.org", "002", "username", "password")
                .with_system("PRD")
                .with_group("SPACE"),
        );
        let params = config.to_params().unwrap();
        assert_eq!(params.get("mshost"), Some("msg.example.org"));
        assert_eq!(params.get("r3name"), Some("PRD"));
        assert_eq!(params.get("group"), Some("SPACE"));
        assert!(!params.contains_key("ashost"));
    }

    #[test]
    fn test_yaml_round_trip() {
        let yaml = r#"
kind: direct
ashost: sap01.example.org
sysnr: "00"
client: "001"
user: username
passwd: password
trace: brief
"#;
        let config = ConnectionConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.trace(), Some(TraceLevel::Brief));
        let params = config.to_params().unwrap();
        assert_eq!(params.get("sysnr"), Some("00"));
    }

    #[test]
    fn test_yaml_missing_kind_is_a_parse_error() {
        let err = ConnectionConfig::from_yaml("ashost: host").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
