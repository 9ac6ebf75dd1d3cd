use std::sync::Arc;

use crate::config::HookConfig;
use crate::services::VersionControlService;

#[derive(Clone)]
pub struct AppContext {
    pub config: HookConfig,
    pub version_control: Arc<dyn VersionControlService>,
}

impl AppContext {
    pub fn new(config: HookConfig, version_control: Arc<dyn VersionControlService>) -> Self {
        Self {
            config,
            version_control,
        }
    }
}
