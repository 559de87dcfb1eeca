use crate::domain::constants::{
    DOMAIN_PRODUCTION, DOMAIN_SANDBOX, SETTING_TOKEN_PRODUCTION, SETTING_TOKEN_SANDBOX,
};
use clap::ValueEnum;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Caller-supplied deposition metadata, sent verbatim.
pub type DepositionMetadata = serde_json::Map<String, serde_json::Value>;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Production,
    Sandbox,
}

impl Environment {
    pub fn from_production_flag(production: bool) -> Self {
        if production {
            Environment::Production
        } else {
            Environment::Sandbox
        }
    }

    pub fn domain(self) -> &'static str {
        match self {
            Environment::Production => DOMAIN_PRODUCTION,
            Environment::Sandbox => DOMAIN_SANDBOX,
        }
    }

    /// Settings key holding the token for this environment.
    pub fn token_key(self) -> &'static str {
        match self {
            Environment::Production => SETTING_TOKEN_PRODUCTION,
            Environment::Sandbox => SETTING_TOKEN_SANDBOX,
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Production => f.write_str("production"),
            Environment::Sandbox => f.write_str("sandbox"),
        }
    }
}

/// Environment and resolved token. An empty token means unconfigured.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    environment: Environment,
    token: String,
}

impl ClientConfig {
    pub fn new(environment: Environment, token: impl Into<String>) -> Self {
        Self {
            environment,
            token: token.into(),
        }
    }

    pub fn environment(&self) -> Environment {
        self.environment
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn is_configured(&self) -> bool {
        !self.token.is_empty()
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("environment", &self.environment)
            .field("configured", &self.is_configured())
            .finish()
    }
}

/// How a list of remote field errors collapses into a single message.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ErrorSummary {
    First,
    /// Keep only the final entry, matching the historical behavior.
    #[default]
    Last,
    All,
}

impl ErrorSummary {
    pub fn summarize(self, errors: &[FieldError]) -> Option<String> {
        match self {
            ErrorSummary::First => errors.first().map(FieldError::to_string),
            ErrorSummary::Last => errors.last().map(FieldError::to_string),
            ErrorSummary::All => {
                if errors.is_empty() {
                    None
                } else {
                    Some(
                        errors
                            .iter()
                            .map(FieldError::to_string)
                            .collect::<Vec<_>>()
                            .join("; "),
                    )
                }
            }
        }
    }
}

/// Treats an explicit `null` like a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    #[serde(default, deserialize_with = "null_as_default")]
    pub field: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: String,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.field, self.message)
    }
}

/// Response envelope returned by the repository.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteResult {
    pub status: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub errors: Vec<FieldError>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl RemoteResult {
    /// Identifier of the created deposition, when the body carries one.
    pub fn id(&self) -> Option<u64> {
        match self.extra.get("id")? {
            serde_json::Value::Number(n) => n.as_u64(),
            serde_json::Value::String(s) => s.parse().ok(),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Deposition {
    pub id: Option<u64>,
    pub result: RemoteResult,
}

impl From<RemoteResult> for Deposition {
    fn from(result: RemoteResult) -> Self {
        Self {
            id: result.id(),
            result,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct StatusReport {
    pub environment: Environment,
    pub configured: bool,
    pub token_key: String,
}
