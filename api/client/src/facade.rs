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
use std::sync::OnceLock;

use crate::Account;
use crate::Client;
use crate::ClientBuilder;
use crate::Config;
use crate::Error;
use crate::ReusableForm;
use crate::SignatureRequest;
use crate::Team;
use crate::UnclaimedDraft;

/// The entry point of the library: owns a [`Config`] and a lazily built,
/// shared [`Client`], and hands out resource accessors bound to it.
///
/// The client is built on first use from the credentials set at that moment.
/// Credentials changed afterwards do not reach the already-built client.
#[derive(Debug, Default)]
pub struct HelloSign {
    config: Config,
    client: OnceLock<Arc<Client>>,
}

impl HelloSign {
    /// Create a facade with the given config. No client is built yet.
    pub fn new(config: Config) -> Self {
        Self {
            config,
            client: OnceLock::new(),
        }
    }

    /// The current config.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Overwrite the stored credentials.
    pub fn set_credentials(&mut self, email: impl Into<String>, password: impl Into<String>) {
        self.config.set_credentials(email, password);
    }

    /// Run `f` once with mutable access to the config.
    pub fn configure(&mut self, f: impl FnOnce(&mut Config)) {
        f(&mut self.config);
    }

    /// Get the shared client, building it on first call.
    pub fn client(&self) -> Result<Arc<Client>, Error> {
        if let Some(client) = self.client.get() {
            return Ok(client.clone());
        }

        let client = Arc::new(ClientBuilder::from_config(&self.config).build()?);
        log::debug!("built client for {}", client.endpoint());

        // concurrent first calls may each build a client; only the first stored is kept
        Ok(self.client.get_or_init(|| client).clone())
    }

    /// Operations on the authenticated account.
    pub fn account(&self) -> Result<Account, Error> {
        self.client().map(Account::new)
    }

    /// Operations on signature requests.
    pub fn signature_request(&self) -> Result<SignatureRequest, Error> {
        self.client().map(SignatureRequest::new)
    }

    /// Operations on reusable forms.
    pub fn reusable_form(&self) -> Result<ReusableForm, Error> {
        self.client().map(ReusableForm::new)
    }

    /// Operations on the account's team.
    pub fn team(&self) -> Result<Team, Error> {
        self.client().map(Team::new)
    }

    /// Operations on unclaimed drafts.
    pub fn unclaimed_draft(&self) -> Result<UnclaimedDraft, Error> {
        self.client().map(UnclaimedDraft::new)
    }
}
