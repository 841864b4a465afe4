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
use crate::Member;
use crate::client::Params;
use crate::client::resource_path;

/// Operations on reusable forms (templates).
#[derive(Debug, Clone)]
pub struct ReusableForm {
    client: Arc<Client>,
}

impl ReusableForm {
    /// Create an accessor backed by the given client.
    pub fn new(client: Arc<Client>) -> Self {
        Self { client }
    }

    /// List reusable forms, one page at a time. Pages start at 1.
    pub async fn list(&self, page: u32) -> Result<Value, Error> {
        let query = vec![("page".to_string(), page.to_string())];
        self.client.get("reusable_form/list", &query).await
    }

    /// Show a single reusable form.
    pub async fn show(&self, form_id: &str) -> Result<Value, Error> {
        let path = resource_path("reusable_form", form_id)?;
        self.client.get(&path, &Params::new()).await
    }

    /// Give a user access to a reusable form.
    pub async fn grant_access(&self, form_id: &str, member: &Member) -> Result<Value, Error> {
        let path = resource_path("reusable_form/add_user", form_id)?;
        self.client.post(&path, &member.to_params()).await
    }

    /// Take away a user's access to a reusable form.
    pub async fn revoke_access(&self, form_id: &str, member: &Member) -> Result<Value, Error> {
        let path = resource_path("reusable_form/remove_user", form_id)?;
        self.client.post(&path, &member.to_params()).await
    }
}
