use std::path::PathBuf;

use async_trait::async_trait;
use tokio::process::Command;

use crate::domain::branch::BranchName;
use crate::error::{AppError, AppResult};
use crate::services::VersionControlService;

pub struct GitCli {
    workspace_root: PathBuf,
}

impl GitCli {
    pub fn new(workspace_root: PathBuf) -> Self {
        Self { workspace_root }
    }
}

#[async_trait]
impl VersionControlService for GitCli {
    async fn current_branch(&self) -> AppResult<BranchName> {
        let output = Command::new("git")
            .current_dir(&self.workspace_root)
            .args(["rev-parse", "--abbrev-ref", "HEAD"])
            .output()
            .await
            .map_err(|err| AppError::VersionControl(format!("failed to run git: {err}")))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(AppError::VersionControl(format!(
                "git rev-parse exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        Ok(BranchName::from_raw(&String::from_utf8_lossy(&output.stdout)))
    }
}
