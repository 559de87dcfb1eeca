//! Service layer containing the repository client and its side-effect helpers.
//!
//! ## Service map
//! - `client.rs` — `RepositoryClient`: token resolution, URL building, response translation.
//! - `transport.rs` — `HttpTransport` seam + blocking reqwest implementation.
//! - `settings.rs` — host settings lookup (file layered over environment).
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - One outbound request per public client operation.
//! - Side effects should be explicit and localized.
//! - Keep command handlers thin; delegate to services.

pub mod client;
pub mod output;
pub mod settings;
pub mod transport;
