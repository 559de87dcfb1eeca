use crate::domain::constants::{
    CODE_ENCODE, CODE_INVALID_RESPONSE, CODE_TOKEN_MISSING, CODE_TRANSPORT, CODE_UNCONFIGURED,
};
use crate::domain::models::{Environment, FieldError};

#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    #[error("No token defined for this operation; please contact your administrator")]
    TokenMissing { environment: Environment },
    #[error("client is not configured with an access token")]
    Unconfigured,
    #[error("repository rejected the request with status {code}{}", detail(.message))]
    RemoteRejected {
        code: i64,
        message: Option<String>,
        errors: Vec<FieldError>,
    },
    #[error("invalid response from repository: {0}")]
    InvalidResponse(String),
    #[error("transport error: {0}")]
    Transport(String),
    #[error("failed to encode metadata: {0}")]
    Encode(#[from] serde_json::Error),
}

fn detail(message: &Option<String>) -> String {
    match message {
        Some(m) => format!(": {}", m),
        None => String::new(),
    }
}

impl ClientError {
    /// Numeric code; the HTTP status for remote rejections.
    pub fn code(&self) -> i64 {
        match self {
            ClientError::TokenMissing { .. } => CODE_TOKEN_MISSING,
            ClientError::Unconfigured => CODE_UNCONFIGURED,
            ClientError::RemoteRejected { code, .. } => *code,
            ClientError::InvalidResponse(_) => CODE_INVALID_RESPONSE,
            ClientError::Transport(_) => CODE_TRANSPORT,
            ClientError::Encode(_) => CODE_ENCODE,
        }
    }

    /// Summary message of a remote rejection, if any.
    pub fn remote_message(&self) -> Option<&str> {
        match self {
            ClientError::RemoteRejected { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        ClientError::Transport(redact(&err.without_url().to_string()))
    }
}

/// Strips `access_token=<value>` from text bound for logs or errors.
pub fn redact(text: &str) -> String {
    const KEY: &str = "access_token=";
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(pos) = rest.find(KEY) {
        out.push_str(&rest[..pos + KEY.len()]);
        out.push_str("***");
        rest = &rest[pos + KEY.len()..];
        let end = rest
            .find(|c: char| c == '&' || c == ' ' || c == ')' || c == '"')
            .unwrap_or(rest.len());
        rest = &rest[end..];
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remote_rejection_uses_status_as_code() {
        let err = ClientError::RemoteRejected {
            code: 400,
            message: Some("title - required".to_string()),
            errors: vec![],
        };
        assert_eq!(err.code(), 400);
        assert_eq!(err.remote_message(), Some("title - required"));
        assert_eq!(
            err.to_string(),
            "repository rejected the request with status 400: title - required"
        );
    }

    #[test]
    fn rejection_without_message_has_bare_display() {
        let err = ClientError::RemoteRejected {
            code: 500,
            message: None,
            errors: vec![],
        };
        assert_eq!(err.to_string(), "repository rejected the request with status 500");
    }

    #[test]
    fn redact_hides_token_values() {
        assert_eq!(
            redact("https://zenodo.org/api?access_token=secret&x=1"),
            "https://zenodo.org/api?access_token=***&x=1"
        );
        assert_eq!(redact("no token here"), "no token here");
        assert_eq!(
            redact("a access_token=t1 b access_token=t2"),
            "a access_token=*** b access_token=***"
        );
    }
}
