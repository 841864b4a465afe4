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

//! Request parameters for the API operations.

use crate::client::Params;

/// Identifies a user either by account id or by email address.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Member {
    /// The user's account id.
    AccountId(String),
    /// The user's email address.
    EmailAddress(String),
}

impl Member {
    pub(crate) fn to_params(&self) -> Params {
        match self {
            Member::AccountId(id) => vec![("account_id".to_string(), id.clone())],
            Member::EmailAddress(email) => vec![("email_address".to_string(), email.clone())],
        }
    }
}

/// A person asked to sign a document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Signer {
    /// Display name.
    pub name: String,
    /// Email address the request is sent to.
    pub email_address: String,
}

impl Signer {
    /// Create a signer.
    pub fn new(name: impl Into<String>, email_address: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email_address: email_address.into(),
        }
    }
}

/// Parameters for sending a new signature request.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignatureRequestParams {
    /// Title of the request.
    pub title: Option<String>,
    /// Subject of the email sent to signers.
    pub subject: Option<String>,
    /// Body of the email sent to signers.
    pub message: Option<String>,
    /// Signers, in signing order.
    pub signers: Vec<Signer>,
    /// URLs of the documents to sign.
    pub file_urls: Vec<String>,
    /// Whether the request is free of charge and not legally binding.
    pub test_mode: bool,
}

impl SignatureRequestParams {
    pub(crate) fn to_params(&self) -> Params {
        let mut params = Params::new();
        for (key, value) in [
            ("title", &self.title),
            ("subject", &self.subject),
            ("message", &self.message),
        ] {
            if let Some(value) = value {
                params.push((key.to_string(), value.clone()));
            }
        }
        for (i, signer) in self.signers.iter().enumerate() {
            params.push((format!("signers[{i}][name]"), signer.name.clone()));
            params.push((
                format!("signers[{i}][email_address]"),
                signer.email_address.clone(),
            ));
        }
        push_file_urls(&mut params, &self.file_urls);
        push_test_mode(&mut params, self.test_mode);
        params
    }
}

/// What the claimer of an unclaimed draft is expected to do with it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DraftType {
    /// Send the document without requesting signatures.
    #[default]
    SendDocument,
    /// Request signatures on the document.
    RequestSignature,
}

impl DraftType {
    fn as_str(&self) -> &'static str {
        match self {
            DraftType::SendDocument => "send_document",
            DraftType::RequestSignature => "request_signature",
        }
    }
}

/// Parameters for creating an unclaimed draft.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UnclaimedDraftParams {
    /// What the draft will become once claimed.
    pub draft_type: DraftType,
    /// URLs of the documents in the draft.
    pub file_urls: Vec<String>,
    /// Whether the draft is free of charge and not legally binding.
    pub test_mode: bool,
}

impl UnclaimedDraftParams {
    pub(crate) fn to_params(&self) -> Params {
        let mut params = vec![("type".to_string(), self.draft_type.as_str().to_string())];
        push_file_urls(&mut params, &self.file_urls);
        push_test_mode(&mut params, self.test_mode);
        params
    }
}

fn push_file_urls(params: &mut Params, file_urls: &[String]) {
    for (i, url) in file_urls.iter().enumerate() {
        params.push((format!("file_url[{i}]"), url.clone()));
    }
}

fn push_test_mode(params: &mut Params, test_mode: bool) {
    if test_mode {
        params.push(("test_mode".to_string(), "1".to_string()));
    }
}
