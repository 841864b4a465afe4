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

use std::sync::Arc;

use serde_json::Value;

use crate::Client;
use crate::Error;
use crate::SignatureRequestParams;
use crate::client::Params;
use crate::client::resource_path;

/// Operations on signature requests.
#[derive(Debug, Clone)]
pub struct SignatureRequest {
    client: Arc<Client>,
}

impl SignatureRequest {
    /// Create an accessor backed by the given client.
    pub fn new(client: Arc<Client>) -> Self {
        Self { client }
    }

    /// Get the current status of a signature request.
    pub async fn status(&self, request_id: &str) -> Result<Value, Error> {
        let path = resource_path("signature_request", request_id)?;
        self.client.get(&path, &Params::new()).await
    }

    /// List signature requests, one page at a time. Pages start at 1.
    pub async fn list(&self, page: u32) -> Result<Value, Error> {
        let query = vec![("page".to_string(), page.to_string())];
        self.client.get("signature_request/list", &query).await
    }

    /// Send a new signature request.
    pub async fn deliver(&self, params: &SignatureRequestParams) -> Result<Value, Error> {
        self.client
            .post("signature_request/send", &params.to_params())
            .await
    }

    /// Remind a signer that the request is still waiting on them.
    pub async fn remind(&self, request_id: &str, email: &str) -> Result<Value, Error> {
        let path = resource_path("signature_request/remind", request_id)?;
        let form = vec![("email_address".to_string(), email.to_string())];
        self.client.post(&path, &form).await
    }

    /// Cancel an incomplete signature request.
    pub async fn cancel(&self, request_id: &str) -> Result<Value, Error> {
        let path = resource_path("signature_request/cancel", request_id)?;
        self.client.post(&path, &Params::new()).await
    }

    /// Download the signed document as PDF bytes.
    pub async fn final_copy(&self, request_id: &str) -> Result<Vec<u8>, Error> {
        let path = resource_path("signature_request/final_copy", request_id)?;
        self.client.get_bytes(&path).await
    }
}
