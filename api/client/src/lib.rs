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

//! A client library for the HelloSign e-signature API.
//!
//! Build a [`HelloSign`] facade from a [`Config`], then reach the API
//! through its resource accessors. Every failed call returns an [`Error`]
//! whose [`ErrorKind`] says what went wrong.

#![deny(missing_docs)]

mod account;
mod client;
mod config;
mod error;
mod facade;
mod protos;
mod reusable_form;
mod signature_request;
mod team;
mod unclaimed_draft;

pub use self::account::Account;
pub use self::client::Client;
pub use self::client::ClientBuilder;
pub use self::config::Config;
pub use self::config::ConfigError;
pub use self::config::Credentials;
pub use self::config::load_config;
pub use self::config::parse_config;
pub use self::error::Error;
pub use self::error::ErrorKind;
pub use self::error::classify;
pub use self::facade::HelloSign;
pub use self::protos::DraftType;
pub use self::protos::Member;
pub use self::protos::SignatureRequestParams;
pub use self::protos::Signer;
pub use self::protos::UnclaimedDraftParams;
pub use self::reusable_form::ReusableForm;
pub use self::signature_request::SignatureRequest;
pub use self::team::Team;
pub use self::unclaimed_draft::UnclaimedDraft;
