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
use crate::client::Params;

/// Operations on the authenticated account.
#[derive(Debug, Clone)]
pub struct Account {
    client: Arc<Client>,
}

impl Account {
    /// Create an accessor backed by the given client.
    pub fn new(client: Arc<Client>) -> Self {
        Self { client }
    }

    /// Create a new account. The service rejects emails that are already taken.
    pub async fn create(&self, email: &str, password: &str) -> Result<Value, Error> {
        let form = vec![
            ("email_address".to_string(), email.to_string()),
            ("password".to_string(), password.to_string()),
        ];
        self.client.post("account/create", &form).await
    }

    /// Read the account settings.
    pub async fn read(&self) -> Result<Value, Error> {
        self.client.get("account", &Params::new()).await
    }

    /// Set the URL that receives event callbacks for this account.
    pub async fn update(&self, callback_url: &str) -> Result<Value, Error> {
        let form = vec![("callback_url".to_string(), callback_url.to_string())];
        self.client.post("account", &form).await
    }
}
