//! Application-boundary configuration: boundary secrets and the optional
//! `config.toml` under the voxnote home directory.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Secrets read once at startup and handed to the agent factories.
///
/// Missing environment variables become empty strings. Nothing is validated
/// here: an empty key flows into the agent configuration as-is and fails at
/// the model provider or tool server, not locally.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Secrets {
    pub anthropic_api_key: String,
    pub elevenlabs_api_key: String,
    pub notion_api_key: String,
}

impl Secrets {
    /// Read all secrets from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary lookup so tests can inject values without
    /// touching the real process environment.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).unwrap_or_default();
        Secrets {
            anthropic_api_key: get("ANTHROPIC_API_KEY"),
            elevenlabs_api_key: get("ELEVENLABS_API_KEY"),
            notion_api_key: get("NOTION_API_KEY"),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct UserConfig {
    pub logging: Option<LoggingCfg>,
    pub probe: Option<ProbeCfg>,
    pub output: Option<OutputCfg>,
}

#[derive(Debug, Default, Deserialize)]
pub struct LoggingCfg {
    pub to_file: Option<bool>,
    pub dir: Option<String>,
    pub json: Option<bool>,
    pub compact: Option<bool>,
    pub pretty: Option<bool>,
    pub level: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ProbeCfg {
    pub enable: Option<bool>,
    pub timeout_ms: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct OutputCfg {
    pub manifest_path: Option<String>,
}

/// Resolve the voxnote home directory: `$VOXNOTE_HOME`, else `$HOME/.voxnote`,
/// else `.voxnote` under the current directory.
pub fn home_dir() -> PathBuf {
    if let Ok(home) = std::env::var("VOXNOTE_HOME")
        && !home.is_empty()
    {
        return PathBuf::from(home);
    }
    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home).join(".voxnote");
    }
    std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(".voxnote")
}

pub fn load_user_config(home: &Path) -> anyhow::Result<Option<UserConfig>> {
    let path = home.join("config.toml");
    if !path.exists() {
        return Ok(None);
    }
    let s = std::fs::read_to_string(&path)?;
    let cfg: UserConfig = toml::from_str(&s)?;
    Ok(Some(cfg))
}

/// Resolve the manifest destination. An explicitly set env value wins and an
/// explicitly empty one forces stdout; only an unset variable falls back to
/// the config file.
pub fn resolve_manifest_path(env_value: Option<&str>, cfg: Option<&UserConfig>) -> Option<PathBuf> {
    match env_value {
        Some("") => None,
        Some(v) => Some(PathBuf::from(v)),
        None => cfg
            .and_then(|c| c.output.as_ref())
            .and_then(|o| o.manifest_path.as_ref())
            .map(|s| expand_home(s)),
    }
}

pub fn expand_home(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Ok(home) = std::env::var("HOME") {
            return PathBuf::from(home).join(stripped);
        }
    }
    PathBuf::from(path)
}
