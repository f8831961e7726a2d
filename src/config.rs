//! Hook configuration.
//!
//! Two independent flags, each taken from an in-process override when one is
//! given, otherwise from the environment:
//! - `GIT_COMMIT_MSG_HOOK_SKIP_ADDING_EMOJIS` disables every emoji stage
//! - `GIT_COMMIT_MSG_HOOK_SKIP_AUTO_SUGGEST` disables auto-suggested emojis only

use std::env;
use std::sync::LazyLock;

use regex_lite::Regex;
use tracing::debug;

/// Environment variable that disables all emoji annotation.
pub const SKIP_EMOJIS_ENV_VAR: &str = "GIT_COMMIT_MSG_HOOK_SKIP_ADDING_EMOJIS";

/// Environment variable that disables auto-suggested emojis.
pub const SKIP_AUTO_SUGGEST_ENV_VAR: &str = "GIT_COMMIT_MSG_HOOK_SKIP_AUTO_SUGGEST";

static TRUTHY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(?:y|yes|true|on|1)$").unwrap());

/// Resolved pipeline configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Config {
    /// Disables type-emoji, keyword-emoji and auto-suggestion stages.
    pub skip_emoji_annotation: bool,
    /// Disables the auto-suggestion stage only.
    pub skip_auto_suggest: bool,
}

/// In-process overrides. `None` falls back to the environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfigOverrides {
    pub skip_emoji_annotation: Option<bool>,
    pub skip_auto_suggest: Option<bool>,
}

impl Config {
    /// Read both flags from the environment.
    pub fn from_env() -> Self {
        Self::resolve(ConfigOverrides::default())
    }

    /// Combine overrides with the environment, overrides winning.
    pub fn resolve(overrides: ConfigOverrides) -> Self {
        Self {
            skip_emoji_annotation: overrides
                .skip_emoji_annotation
                .unwrap_or_else(|| env_flag(SKIP_EMOJIS_ENV_VAR)),
            skip_auto_suggest: overrides
                .skip_auto_suggest
                .unwrap_or_else(|| env_flag(SKIP_AUTO_SUGGEST_ENV_VAR)),
        }
    }

    /// Whether the auto-suggestion stage should run at all.
    pub fn auto_suggest_enabled(&self) -> bool {
        !self.skip_emoji_annotation && !self.skip_auto_suggest
    }
}

/// Read a boolean flag from the environment. Absent or unrecognized is false.
fn env_flag(name: &str) -> bool {
    match env::var(name) {
        Ok(v) if is_truthy(&v) => true,
        Ok(v) if !v.trim().is_empty() => {
            debug!("Unrecognized {} value '{}', treating as false", name, v);
            false
        }
        _ => false,
    }
}

/// Case-insensitive "yes"-like check.
pub fn is_truthy(value: &str) -> bool {
    TRUTHY.is_match(value.trim())
}
