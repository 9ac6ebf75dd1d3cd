//! Commit-msg hook that prefixes commit messages with the ticket reference
//! found in the current branch name.

pub mod cmd;
pub mod config;
pub mod context;
pub mod domain;
pub mod error;
pub mod infra;
pub mod services;
pub mod workflow;

pub use config::HookConfig;
pub use domain::message::rewrite;
pub use domain::ticket::{TicketPrefixes, TicketReference, match_ticket};
pub use error::{AppError, AppResult, RewriteError};
