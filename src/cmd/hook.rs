use std::path::PathBuf;

use crate::context::AppContext;
use crate::error::AppResult;
use crate::infra::commit_file::CommitMessageFile;
use crate::workflow::hook::{HookOutcome, rewrite_commit_message};

#[derive(Debug, Clone)]
pub struct HookCommandArgs {
    pub message_file: PathBuf,
    pub dry_run: bool,
}

pub async fn run(ctx: &AppContext, args: HookCommandArgs) -> AppResult<HookOutcome> {
    let file = CommitMessageFile::new(args.message_file);
    rewrite_commit_message(ctx, &file, args.dry_run).await
}
