use serde::{Deserialize, Serialize};
use crate::gateway::GatewayPublisherVia;

pub const ENV_BRANCH: &str = "LMS_BRANCH";
pub const ENV_LOG_LEVEL: &str = "LMS_LOG_LEVEL";
pub const ENV_EVENTS: &str = "LMS_EVENTS";
pub const ENV_INTERACTIVE: &str = "LMS_INTERACTIVE";

// Configuration abstracts config options for the catalog console
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub branch_id: String,
    pub log_level: String,
    pub events_via: GatewayPublisherVia,
    // wait for Enter after each menu action
    pub pause_after_action: bool,
    pub clear_screen: bool,
}

impl Configuration {
    pub fn new(branch_id: &str) -> Self {
        Configuration {
            branch_id: branch_id.to_string(),
            log_level: "info".to_string(),
            events_via: GatewayPublisherVia::Logs,
            pause_after_action: true,
            clear_screen: true,
        }
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Self where F: Fn(&str) -> Option<String> {
        let branch = lookup(ENV_BRANCH)
            .filter(|b| !b.trim().is_empty())
            .unwrap_or_else(|| "main".to_string());
        let mut config = Configuration::new(branch.trim());
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            config.log_level = level.trim().to_lowercase();
        }
        if let Some(via) = lookup(ENV_EVENTS) {
            config.events_via = GatewayPublisherVia::from(via);
        }
        if let Some(interactive) = lookup(ENV_INTERACTIVE) {
            let interactive = !matches!(interactive.trim().to_lowercase().as_str(), "false" | "0" | "no");
            config.pause_after_action = interactive;
            config.clear_screen = interactive;
        }
        config
    }
}
