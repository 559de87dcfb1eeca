//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `inspect.rs` — status/url, no network access.
//! - `deposit.rs` — create/upload, one request each.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate business logic to `services/*`.
//! - Keep behavior and output schema stable.

pub mod deposit;
pub mod inspect;

pub use deposit::handle_deposit_commands;
pub use inspect::handle_inspect_commands;
