use std::env;

use crate::domain::ticket::TicketPrefixes;
use crate::error::{AppError, AppResult};

pub const PREFIXES_ENV: &str = "ADD_TICKET_HOOK_PREFIXES";

/// Characters stripped from prefix arguments before splitting.
const PREFIX_NOISE: &[char] = &['"', '\'', ' '];

#[derive(Debug, Clone)]
pub struct HookConfig {
    pub prefixes: TicketPrefixes,
    pub strict: bool,
    /// Put a newline instead of a space after the ticket when the message is
    /// git's placeholder template.
    pub template_newline: bool,
}

impl HookConfig {
    /// Builds the config from `--prefixes` values, falling back to
    /// `ADD_TICKET_HOOK_PREFIXES` when none were given.
    pub fn load(prefix_args: &[String], strict: bool, template_newline: bool) -> AppResult<Self> {
        let prefixes = if prefix_args.is_empty() {
            let from_env = env::var(PREFIXES_ENV).ok().into_iter().collect::<Vec<_>>();
            parse_prefixes(&from_env)
        } else {
            parse_prefixes(prefix_args)
        };

        if prefixes.is_empty() {
            return Err(AppError::Configuration(format!(
                "no ticket prefixes configured; pass --prefixes or set {PREFIXES_ENV}"
            )));
        }

        Ok(Self {
            prefixes,
            strict,
            template_newline,
        })
    }
}

/// Flattens repeated, comma separated prefix arguments into one ordered set.
pub fn parse_prefixes(raw: &[String]) -> TicketPrefixes {
    let joined = raw.join(",").replace(PREFIX_NOISE, "");
    TicketPrefixes::new(joined.split(',').filter(|prefix| !prefix.is_empty()))
}
