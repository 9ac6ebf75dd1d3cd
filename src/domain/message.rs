use crate::config::HookConfig;
use crate::domain::ticket::{TicketReference, match_ticket};
use crate::error::RewriteError;

/// Start of the template git writes when the user has not typed a message yet.
pub const DEFAULT_TEMPLATE_MARKER: &str = "# Please enter the commit message";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RewritePlan {
    /// The message already starts with a ticket reference.
    AlreadyTagged(TicketReference),
    /// Prepend the ticket found in the branch name. `template` selects the
    /// newline separator used for git's placeholder message.
    Prepend {
        ticket: TicketReference,
        template: bool,
    },
    /// No ticket anywhere and strict mode is off.
    Untouched,
}

impl RewritePlan {
    pub fn apply(&self, message: &str) -> String {
        match self {
            RewritePlan::AlreadyTagged(_) | RewritePlan::Untouched => message.to_string(),
            RewritePlan::Prepend {
                ticket,
                template: true,
            } => format!("{ticket}:\n{message}"),
            RewritePlan::Prepend {
                ticket,
                template: false,
            } => format!("{ticket}: {message}"),
        }
    }
}

pub fn plan(
    message: &str,
    branch_name: &str,
    config: &HookConfig,
) -> Result<RewritePlan, RewriteError> {
    if let Some(ticket) = match_ticket(message, &config.prefixes) {
        return Ok(RewritePlan::AlreadyTagged(ticket));
    }

    if let Some(ticket) = match_ticket(branch_name, &config.prefixes) {
        let template = config.template_newline && message.starts_with(DEFAULT_TEMPLATE_MARKER);
        return Ok(RewritePlan::Prepend { ticket, template });
    }

    if config.strict {
        return Err(RewriteError::StrictModeViolation);
    }

    Ok(RewritePlan::Untouched)
}

pub fn rewrite(
    message: &str,
    branch_name: &str,
    config: &HookConfig,
) -> Result<String, RewriteError> {
    plan(message, branch_name, config).map(|plan| plan.apply(message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ticket::TicketPrefixes;

    fn config(strict: bool) -> HookConfig {
        HookConfig {
            prefixes: TicketPrefixes::new(["test-", "lol-"]),
            strict,
            template_newline: false,
        }
    }

    #[test]
    fn leaves_tagged_message_alone() {
        let cfg = config(true);
        for branch in ["", "lol-99", "master"] {
            assert_eq!(
                rewrite("test-1: already done", branch, &cfg).unwrap(),
                "test-1: already done"
            );
        }
    }

    #[test]
    fn prepends_ticket_from_branch() {
        let cfg = config(false);
        assert_eq!(
            rewrite("random... test-1234", "lol-1ARC", &cfg).unwrap(),
            "lol-1: random... test-1234"
        );
    }

    #[test]
    fn prepends_to_empty_message() {
        assert_eq!(rewrite("", "test-13", &config(false)).unwrap(), "test-13: ");
    }

    #[test]
    fn passes_through_without_ticket_when_permissive() {
        assert_eq!(rewrite("", "__", &config(false)).unwrap(), "");
        assert_eq!(
            rewrite("plain message", "feature/login", &config(false)).unwrap(),
            "plain message"
        );
    }

    #[test]
    fn strict_mode_fails_without_ticket() {
        assert_eq!(
            rewrite("", "", &config(true)),
            Err(RewriteError::StrictModeViolation)
        );
    }

    #[test]
    fn strict_mode_accepts_branch_ticket() {
        assert_eq!(
            rewrite("fix it", "test-7_fix", &config(true)).unwrap(),
            "test-7: fix it"
        );
    }

    #[test]
    fn empty_prefix_set_never_matches() {
        let permissive = HookConfig {
            prefixes: TicketPrefixes::default(),
            strict: false,
            template_newline: false,
        };
        assert_eq!(rewrite("msg", "test-1", &permissive).unwrap(), "msg");

        let strict = HookConfig {
            strict: true,
            ..permissive
        };
        assert_eq!(
            rewrite("msg", "test-1", &strict),
            Err(RewriteError::StrictModeViolation)
        );
    }

    #[test]
    fn placeholder_template_uses_newline_when_enabled() {
        let message = "# Please enter the commit message for your changes.";
        let mut cfg = config(false);
        assert_eq!(
            rewrite(message, "test-5", &cfg).unwrap(),
            format!("test-5: {message}")
        );

        cfg.template_newline = true;
        assert_eq!(
            rewrite(message, "test-5", &cfg).unwrap(),
            format!("test-5:\n{message}")
        );
        assert_eq!(rewrite("regular", "test-5", &cfg).unwrap(), "test-5: regular");
    }

    #[test]
    fn plan_reports_decision() {
        let cfg = config(false);
        assert!(matches!(
            plan("test-2 msg", "lol-1", &cfg),
            Ok(RewritePlan::AlreadyTagged(_))
        ));
        assert!(matches!(
            plan("msg", "lol-1", &cfg),
            Ok(RewritePlan::Prepend {
                template: false,
                ..
            })
        ));
        assert_eq!(plan("msg", "main", &cfg), Ok(RewritePlan::Untouched));
    }
}
