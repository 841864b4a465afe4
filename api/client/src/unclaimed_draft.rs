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
use crate::UnclaimedDraftParams;

/// Operations on unclaimed drafts.
#[derive(Debug, Clone)]
pub struct UnclaimedDraft {
    client: Arc<Client>,
}

impl UnclaimedDraft {
    /// Create an accessor backed by the given client.
    pub fn new(client: Arc<Client>) -> Self {
        Self { client }
    }

    /// Create a draft that a user claims and finishes on the website.
    pub async fn create(&self, params: &UnclaimedDraftParams) -> Result<Value, Error> {
        self.client
            .post("unclaimed_draft/create", &params.to_params())
            .await
    }
}
