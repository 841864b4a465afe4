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

use reqwest::Method;
use reqwest::RequestBuilder;
use reqwest::Url;
use reqwest::redirect::Policy;
use serde_json::Value;

use crate::Config;
use crate::Credentials;
use crate::Error;
use crate::ErrorKind;
use crate::error::classify;

/// Form or query parameters, in the order they are sent.
pub(crate) type Params = Vec<(String, String)>;

/// Append a caller-supplied id to a fixed route as a single path segment.
///
/// The id is percent-encoded so that `/`, `?` and `#` cannot escape the
/// segment. Empty and dot-only ids would resolve to another route, so they
/// are rejected before any request is sent.
pub(crate) fn resource_path(route: &str, id: &str) -> Result<String, Error> {
    if matches!(id, "" | "." | "..") {
        let err = Error::new(ErrorKind::Unknown).with_message(format!("invalid resource id: {id:?}"));
        return Err(err);
    }
    Ok(format!("{route}/{}", urlencoding::encode(id)))
}

/// A builder for creating a `Client`.
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    endpoint: String,
    credentials: Credentials,
    client: Option<reqwest::Client>,
}

impl ClientBuilder {
    /// Create a new client builder with the given API endpoint and credentials.
    pub fn new(endpoint: impl Into<String>, credentials: Credentials) -> Self {
        Self {
            endpoint: endpoint.into(),
            credentials,
            client: None,
        }
    }

    /// Create a new client builder from a loaded config.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.endpoint.clone(), config.credentials.clone())
    }

    /// Set a custom HTTP client. If not set, a default client will be used.
    ///
    /// Timeouts and proxies are configured on the HTTP client.
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<Client, Error> {
        let Self {
            mut endpoint,
            credentials,
            client,
        } = self;

        // request paths are joined relative to the endpoint
        if !endpoint.ends_with('/') {
            endpoint.push('/');
        }
        let endpoint = Url::parse(&endpoint)
            .map_err(|err| Error::unknown(format!("invalid endpoint: {endpoint}"), err))?;

        let client = match client {
            Some(client) => client,
            None => reqwest::ClientBuilder::new()
                .redirect(Policy::limited(2))
                .build()
                .map_err(|err| Error::unknown("failed to build HTTP client", err))?,
        };

        Ok(Client {
            client,
            endpoint,
            credentials,
        })
    }
}

/// A client for sending authenticated requests to the API.
///
/// Resource accessors such as [`Account`](crate::Account) wrap a shared
/// `Client` and issue one request per operation.
#[derive(Debug)]
pub struct Client {
    client: reqwest::Client,
    endpoint: Url,
    credentials: Credentials,
}

impl Client {
    /// The base URL every request path is joined to.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// The credentials this client was built with.
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub(crate) async fn get(&self, path: &str, query: &Params) -> Result<Value, Error> {
        let request = self.request(Method::GET, path)?.query(query);
        let body = self.execute(request).await?;
        parse_json(&body)
    }

    pub(crate) async fn get_bytes(&self, path: &str) -> Result<Vec<u8>, Error> {
        let request = self.request(Method::GET, path)?;
        self.execute(request).await
    }

    pub(crate) async fn post(&self, path: &str, form: &Params) -> Result<Value, Error> {
        let request = self.request(Method::POST, path)?.form(form);
        let body = self.execute(request).await?;
        parse_json(&body)
    }
}

impl Client {
    fn request(&self, method: Method, path: &str) -> Result<RequestBuilder, Error> {
        let url = self
            .endpoint
            .join(path)
            .map_err(|err| Error::unknown(format!("invalid request path: {path}"), err))?;

        log::debug!("sending request: {method} {url}");

        let mut request = self.client.request(method, url);
        if !self.credentials.is_empty() {
            request = request.basic_auth(&self.credentials.email, Some(&self.credentials.password));
        }
        Ok(request)
    }

    async fn execute(&self, request: RequestBuilder) -> Result<Vec<u8>, Error> {
        let resp = request
            .send()
            .await
            .map_err(|err| Error::unknown("failed to send request", err))?;

        let status = resp.status();
        let body = resp
            .bytes()
            .await
            .map_err(|err| Error::unknown("failed to read response body", err))?;

        if status.is_success() {
            return Ok(body.to_vec());
        }

        let err = classify(status.as_u16(), &body);
        log::debug!(kind = err.kind().as_str(), status = status.as_u16(); "request failed: {err}");
        Err(err)
    }
}

fn parse_json(body: &[u8]) -> Result<Value, Error> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }
    serde_json::from_slice(body).map_err(|err| Error::unknown("failed to decode response body", err))
}
