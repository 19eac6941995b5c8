mod agent;
mod config;
mod manifest;
mod mcp;
mod roster;

use std::path::PathBuf;
use std::time::Duration;

use env_flags::env_flags;
use once_cell::sync::OnceCell;

use crate::config::Secrets;
use crate::roster::Roster;

fn init_tracing() {
    env_flags! {
        /// Tracing filter, e.g. "info", "debug", or targets format.
        RUST_LOG: &str = "info";
        /// Preferred filter env (alias). If set, overrides RUST_LOG.
        TRACING_FILTER: &str = "";
        /// Pretty formatting for logs (ignored if TRACING_JSON=true).
        TRACING_PRETTY: bool = false;
        /// Compact single-line formatting for logs (ignored if TRACING_JSON=true)
        TRACING_COMPACT: bool = true;
        /// JSON formatting for logs
        TRACING_JSON: bool = false;
        /// If true, also log to file under <VOXNOTE_HOME>/logs or LOG_DIR
        LOG_TO_FILE: bool = false;
        /// Optional explicit log directory (absolute). Defaults to <VOXNOTE_HOME>/logs
        LOG_DIR: &str = "";
    }

    use tracing_subscriber::{EnvFilter, Layer, Registry, layer::SubscriberExt, util::SubscriberInitExt};

    let home = config::home_dir();

    // Load user config (optional) and let it fill in whatever env left unset.
    let user_cfg = config::load_user_config(&home).ok().flatten();
    let env_set = |k: &str| std::env::var_os(k).is_some();

    // TRACING_FILTER is primary; fall back to RUST_LOG; then user config.
    let mut rust_log = if !(*TRACING_FILTER).is_empty() {
        (*TRACING_FILTER).to_string()
    } else {
        (*RUST_LOG).to_string()
    };
    let mut tracing_json = *TRACING_JSON;
    let mut tracing_compact = *TRACING_COMPACT;
    let mut tracing_pretty = *TRACING_PRETTY;
    let mut log_to_file = *LOG_TO_FILE;
    let mut log_dir: Option<PathBuf> = if !(*LOG_DIR).is_empty() {
        Some(PathBuf::from((*LOG_DIR).to_string()))
    } else {
        None
    };

    if let Some(cfg) = user_cfg.as_ref().and_then(|c| c.logging.as_ref()) {
        if !(env_set("TRACING_FILTER") || env_set("RUST_LOG"))
            && let Some(level) = cfg.level.as_ref()
        {
            rust_log = level.clone();
        }
        if !env_set("TRACING_JSON")
            && let Some(v) = cfg.json
        {
            tracing_json = v;
        }
        if !env_set("TRACING_COMPACT")
            && let Some(v) = cfg.compact
        {
            tracing_compact = v;
        }
        if !env_set("TRACING_PRETTY")
            && let Some(v) = cfg.pretty
        {
            tracing_pretty = v;
        }
        if !env_set("LOG_TO_FILE")
            && let Some(v) = cfg.to_file
        {
            log_to_file = v;
        }
        if !env_set("LOG_DIR")
            && let Some(dir) = cfg.dir.as_ref()
        {
            log_dir = Some(config::expand_home(dir));
        }
    }

    let filter = EnvFilter::try_new(rust_log).unwrap_or_else(|_| EnvFilter::new("info"));

    type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;
    let mut layers: Vec<BoxedLayer> = Vec::new();
    layers.push(filter.boxed());

    // Always write logs to stderr; stdout is reserved for the manifest.
    let stderr_base = tracing_subscriber::fmt::layer()
        .with_file(false)
        .with_line_number(false)
        .with_target(true)
        .with_ansi(true)
        .with_writer(std::io::stderr);
    layers.push(if tracing_json {
        stderr_base.json().boxed()
    } else if tracing_compact {
        stderr_base.compact().boxed()
    } else if tracing_pretty {
        stderr_base.pretty().boxed()
    } else {
        stderr_base.boxed()
    });

    // Optional file logging layer
    static FILE_GUARD: OnceCell<tracing_appender::non_blocking::WorkerGuard> = OnceCell::new();
    if log_to_file {
        let dir = log_dir.unwrap_or_else(|| home.join("logs"));
        match std::fs::create_dir_all(&dir) {
            Err(e) => {
                eprintln!("failed to create log dir {}: {}", dir.display(), e);
            }
            Ok(()) => {
                let appender = tracing_appender::rolling::daily(dir, "voxnote-agents.log");
                let (nb, guard) = tracing_appender::non_blocking(appender);
                let _ = FILE_GUARD.set(guard);
                let file_base = tracing_subscriber::fmt::layer()
                    .with_file(false)
                    .with_line_number(false)
                    .with_target(true)
                    .with_ansi(false)
                    .with_writer(nb);
                layers.push(if tracing_json {
                    file_base.json().boxed()
                } else if tracing_compact {
                    file_base.compact().boxed()
                } else if tracing_pretty {
                    file_base.pretty().boxed()
                } else {
                    file_base.boxed()
                });
            }
        }
    }

    if let Err(e) = tracing_subscriber::registry().with(layers).try_init() {
        eprintln!("tracing already set: {:?}", e);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    env_flags! {
        /// Launch each agent's tool server at startup and log its tool inventory.
        PROBE_TOOLS: bool = false;
        /// Probe timeout per phase in milliseconds.
        PROBE_TIMEOUT_MS: u64 = 4000;
        /// Where to write the agent manifest. Empty means stdout.
        MANIFEST_PATH: &str = "";
    }

    tracing::info!("starting voxnote-agents");

    let home = config::home_dir();
    tracing::info!("voxnote_home={}", home.display());

    // Knobs: env wins, else user config, else defaults.
    let user_cfg = config::load_user_config(&home).ok().flatten();
    let env_set = |k: &str| std::env::var_os(k).is_some();

    let probe_enable = if env_set("PROBE_TOOLS") {
        *PROBE_TOOLS
    } else {
        user_cfg
            .as_ref()
            .and_then(|c| c.probe.as_ref())
            .and_then(|p| p.enable)
            .unwrap_or(*PROBE_TOOLS)
    };
    let probe_timeout_ms = if env_set("PROBE_TIMEOUT_MS") {
        *PROBE_TIMEOUT_MS
    } else {
        user_cfg
            .as_ref()
            .and_then(|c| c.probe.as_ref())
            .and_then(|p| p.timeout_ms)
            .unwrap_or(*PROBE_TIMEOUT_MS)
    };
    let env_manifest = env_set("MANIFEST_PATH").then(|| (*MANIFEST_PATH).to_string());
    let manifest_path: Option<PathBuf> =
        config::resolve_manifest_path(env_manifest.as_deref(), user_cfg.as_ref());

    // Secrets are read exactly once, at this boundary. Absence is not an
    // error here; empty values fail downstream at agent invocation.
    let secrets = Secrets::from_env();
    tracing::debug!(
        "secrets present: anthropic={} elevenlabs={} notion={}",
        !secrets.anthropic_api_key.is_empty(),
        !secrets.elevenlabs_api_key.is_empty(),
        !secrets.notion_api_key.is_empty(),
    );

    let roster = Roster::build(&secrets);
    tracing::info!("configured {} agent(s)", roster.agents.len());
    roster.log_summary();

    if probe_enable {
        roster.probe(Duration::from_millis(probe_timeout_ms)).await;
    }

    manifest::emit(&roster, manifest_path.as_deref())?;
    tracing::info!("roster handed off");
    Ok(())
}
