use async_trait::async_trait;

use crate::domain::branch::BranchName;
use crate::error::AppResult;

#[async_trait]
pub trait VersionControlService: Send + Sync {
    async fn current_branch(&self) -> AppResult<BranchName>;
}

/// Branch given on the command line, bypassing git.
pub struct FixedBranch(pub BranchName);

#[async_trait]
impl VersionControlService for FixedBranch {
    async fn current_branch(&self) -> AppResult<BranchName> {
        Ok(self.0.clone())
    }
}
