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

/// Operations on the team of the authenticated account.
#[derive(Debug, Clone)]
pub struct Team {
    client: Arc<Client>,
}

impl Team {
    /// Create an accessor backed by the given client.
    pub fn new(client: Arc<Client>) -> Self {
        Self { client }
    }

    /// Create a team with the authenticated account as its only member.
    pub async fn create(&self, name: &str) -> Result<Value, Error> {
        let form = vec![("name".to_string(), name.to_string())];
        self.client.post("team/create", &form).await
    }

    /// Show the team and its members.
    pub async fn show(&self) -> Result<Value, Error> {
        self.client.get("team", &Params::new()).await
    }

    /// Rename the team.
    pub async fn update(&self, name: &str) -> Result<Value, Error> {
        let form = vec![("name".to_string(), name.to_string())];
        self.client.post("team", &form).await
    }

    /// Delete the team. Members keep their accounts.
    pub async fn destroy(&self) -> Result<Value, Error> {
        self.client.post("team/destroy", &Params::new()).await
    }

    /// Invite a user to the team.
    pub async fn add_member(&self, member: &Member) -> Result<Value, Error> {
        self.client
            .post("team/add_member", &member.to_params())
            .await
    }

    /// Remove a user from the team.
    pub async fn remove_member(&self, member: &Member) -> Result<Value, Error> {
        self.client
            .post("team/remove_member", &member.to_params())
            .await
    }
}
