use tracing::{debug, info, warn};

use crate::context::AppContext;
use crate::domain::branch::BranchName;
use crate::domain::message::{RewritePlan, plan};
use crate::error::AppResult;
use crate::infra::commit_file::CommitMessageFile;

pub struct HookOutcome {
    pub plan: RewritePlan,
    pub message: String,
}

/// Rewrites the message in `file` using the current branch.
///
/// The file is left untouched when the rewrite fails or `dry_run` is set.
pub async fn rewrite_commit_message(
    ctx: &AppContext,
    file: &CommitMessageFile,
    dry_run: bool,
) -> AppResult<HookOutcome> {
    let original = file.read()?;

    let branch = match ctx.version_control.current_branch().await {
        Ok(branch) => branch,
        Err(err) => {
            warn!(error = %err, "could not determine current branch");
            BranchName::unknown()
        }
    };
    debug!(
        file = %file.path().display(),
        branch = branch.as_str(),
        "resolved branch"
    );

    let plan = plan(&original, branch.as_str(), &ctx.config)?;
    let message = plan.apply(&original);

    match &plan {
        RewritePlan::AlreadyTagged(ticket) => {
            debug!(ticket = ticket.as_str(), "commit message already tagged")
        }
        RewritePlan::Prepend { ticket, .. } => {
            info!(ticket = ticket.as_str(), "added ticket from branch name")
        }
        RewritePlan::Untouched => debug!("no ticket found, message left as is"),
    }

    if !dry_run {
        file.write(&message)?;
    }

    Ok(HookOutcome { plan, message })
}
