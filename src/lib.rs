//! Client for the Zenodo deposition API.
//!
//! `RepositoryClient` resolves an access token from host settings, builds
//! token-signed endpoint URLs, posts deposition metadata and files, and maps
//! the repository's `{status, errors}` envelope onto [`ClientError`].
//!
//! ```no_run
//! use zenodo_deposit::{BlockingTransport, Environment, HostSettings, RepositoryClient};
//!
//! # fn main() -> anyhow::Result<()> {
//! let settings = HostSettings::from_env();
//! let client = RepositoryClient::initialize(
//!     &settings,
//!     Environment::Sandbox,
//!     BlockingTransport::new(30_000)?,
//! )?;
//! let metadata = serde_json::json!({"metadata": {"title": "Dataset"}});
//! let deposition = client.create_deposition(metadata.as_object().unwrap())?;
//! println!("{:?}", deposition.id);
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod commands;
pub mod domain;
pub mod error;
pub mod logging;
pub mod services;

pub use cli::{Cli, Commands};
pub use domain::constants::*;
pub use domain::models::{
    ClientConfig, Deposition, DepositionMetadata, Environment, ErrorSummary, FieldError, JsonOut,
    RemoteResult, StatusReport,
};
pub use error::ClientError;
pub use services::client::{resolve_config, RepositoryClient};
pub use services::output::print_one;
pub use services::settings::{default_settings_path, HostSettings, SettingsSource};
pub use services::transport::{BlockingTransport, HttpTransport};
