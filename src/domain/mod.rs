//! Shared data model layer (structs/constants only).
//!
//! ## Files
//! - `models.rs` — environment, config, remote envelope and output structs.
//! - `constants.rs` — endpoint domains, path templates, setting keys, error codes.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem/network side effects.
//!
//! ## Compatibility note
//! `RemoteResult` mirrors the repository's response envelope. Changes here
//! affect how responses are classified and what `--json` prints.

pub mod constants;
pub mod models;
