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

//! Typed errors returned by every API call, and the classifier that turns a
//! failed response into one of them.

use std::fmt;

use serde::Deserialize;

type BoxedSource = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The kind of failure behind an [`Error`].
///
/// The set is closed: every failed call maps to exactly one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The server responded with a "400 Bad Request" status code.
    BadRequest,
    /// The server responded with a "401 Unauthorized" status code.
    Unauthorized,
    /// The server responded with a "403 Forbidden" status code.
    Forbidden,
    /// The server responded with a "404 Not Found" status code.
    NotFound,
    /// A user could not be invited to a team.
    TeamInviteFailed,
    /// A signer or recipient was rejected by the service.
    InvalidRecipient,
    /// An uploaded document could not be converted.
    ConvertFailed,
    /// A signature request could not be canceled.
    SignatureRequestCancelFailed,
    /// Anything else, including failures that never reached the server.
    Unknown,
}

impl ErrorKind {
    /// Every kind, in declaration order.
    pub const ALL: [ErrorKind; 9] = [
        ErrorKind::BadRequest,
        ErrorKind::Unauthorized,
        ErrorKind::Forbidden,
        ErrorKind::NotFound,
        ErrorKind::TeamInviteFailed,
        ErrorKind::InvalidRecipient,
        ErrorKind::ConvertFailed,
        ErrorKind::SignatureRequestCancelFailed,
        ErrorKind::Unknown,
    ];

    /// A short, stable, human-readable name for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::BadRequest => "bad request",
            ErrorKind::Unauthorized => "unauthorized",
            ErrorKind::Forbidden => "forbidden",
            ErrorKind::NotFound => "not found",
            ErrorKind::TeamInviteFailed => "team invite failed",
            ErrorKind::InvalidRecipient => "invalid recipient",
            ErrorKind::ConvertFailed => "convert failed",
            ErrorKind::SignatureRequestCancelFailed => "signature request cancel failed",
            ErrorKind::Unknown => "unknown error",
        }
    }

    fn from_status(status: u16) -> Option<Self> {
        match status {
            400 => Some(ErrorKind::BadRequest),
            401 => Some(ErrorKind::Unauthorized),
            403 => Some(ErrorKind::Forbidden),
            404 => Some(ErrorKind::NotFound),
            _ => None,
        }
    }

    fn from_error_name(name: &str) -> Option<Self> {
        match name {
            "team_invite_failed" => Some(ErrorKind::TeamInviteFailed),
            "invalid_recipient" => Some(ErrorKind::InvalidRecipient),
            "convert_failed" => Some(ErrorKind::ConvertFailed),
            "signature_request_cancel_failed" => Some(ErrorKind::SignatureRequestCancelFailed),
            _ => None,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that can occur when using the client.
#[derive(Debug, thiserror::Error)]
#[error("{kind}{}", render_detail(.status, .message))]
pub struct Error {
    kind: ErrorKind,
    status: Option<u16>,
    message: Option<String>,
    #[source]
    source: Option<BoxedSource>,
}

fn render_detail(status: &Option<u16>, message: &Option<String>) -> String {
    match (status, message) {
        (Some(status), Some(message)) => format!(" ({status}): {message}"),
        (Some(status), None) => format!(" ({status})"),
        (None, Some(message)) => format!(": {message}"),
        (None, None) => String::new(),
    }
}

impl Error {
    /// Create an error of the given kind with no status and no message.
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            status: None,
            message: None,
            source: None,
        }
    }

    /// Attach a human-readable message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Attach the HTTP status code this error was classified from.
    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    /// Attach the underlying cause.
    pub fn with_source(mut self, source: impl Into<BoxedSource>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// The kind of this error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The HTTP status code, if the request reached the server.
    pub fn status(&self) -> Option<u16> {
        self.status
    }

    /// The message reported by the server or the transport, if any.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub(crate) fn unknown(message: impl Into<String>, source: impl Into<BoxedSource>) -> Self {
        Error::new(ErrorKind::Unknown)
            .with_message(message)
            .with_source(source)
    }
}

#[derive(Deserialize)]
struct ErrorPayload {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error_msg: Option<String>,
    #[serde(default)]
    error_name: Option<String>,
}

/// Classify a non-success response into exactly one typed error.
///
/// A domain-specific `error_name` in the payload wins over the status code;
/// statuses 400, 401, 403 and 404 map to their own kinds; everything else is
/// [`ErrorKind::Unknown`].
pub fn classify(status: u16, body: &[u8]) -> Error {
    let payload = serde_json::from_slice::<ErrorPayload>(body)
        .ok()
        .map(|payload| payload.error);

    let kind = payload
        .as_ref()
        .and_then(|payload| payload.error_name.as_deref())
        .and_then(ErrorKind::from_error_name)
        .or_else(|| ErrorKind::from_status(status))
        .unwrap_or(ErrorKind::Unknown);

    let message = match payload {
        Some(payload) => payload.error_msg,
        None => {
            let text = String::from_utf8_lossy(body);
            let text = text.trim();
            (!text.is_empty()).then(|| text.to_string())
        }
    };

    let mut error = Error::new(kind).with_status(status);
    error.message = message;
    error
}
