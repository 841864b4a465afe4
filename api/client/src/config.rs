// Copyright 2025 ScopeDB <contact@scopedb.io>
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;
use serde::de::IntoDeserializer;
use toml_edit::DocumentMut;

/// Errors that can occur when loading a [`Config`].
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct ConfigError(String);

/// Settings used to build a [`Client`](crate::Client).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Credentials sent with every request.
    #[serde(default)]
    pub credentials: Credentials,
    /// Base URL of the API.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

impl Config {
    /// Overwrite the stored credentials. Nothing is validated here; bad
    /// credentials surface as an unauthorized error on the first request.
    pub fn set_credentials(&mut self, email: impl Into<String>, password: impl Into<String>) {
        self.credentials = Credentials {
            email: email.into(),
            password: password.into(),
        };
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            credentials: Credentials::default(),
            endpoint: default_endpoint(),
        }
    }
}

fn default_endpoint() -> String {
    "https://api.hellosign.com/v3/".to_string()
}

/// The account email and password used for HTTP basic authentication.
#[derive(Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Credentials {
    /// Account email address.
    #[serde(default)]
    pub email: String,
    /// Account password.
    #[serde(default)]
    pub password: String,
}

impl Credentials {
    /// Whether neither field has been set.
    pub fn is_empty(&self) -> bool {
        self.email.is_empty() && self.password.is_empty()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Load a [`Config`] from a TOML file.
pub fn load_config(config_file: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(config_file).map_err(|err| {
        ConfigError(format!(
            "failed to read config file {}: {err}",
            config_file.display()
        ))
    })?;
    parse_config(&content)
}

/// Parse a [`Config`] from TOML text.
pub fn parse_config(content: &str) -> Result<Config, ConfigError> {
    let doc = DocumentMut::from_str(content)
        .map_err(|err| ConfigError(format!("failed to parse config content: {err}")))?;
    Config::deserialize(doc.into_deserializer())
        .map_err(|err| ConfigError(format!("failed to deserialize config: {err}")))
}
