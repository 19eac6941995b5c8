//! The fixed agent roster: build every agent once, summarize, and optionally
//! probe each agent's tool server.

pub mod prompt;
pub mod speech;
pub mod workspace;

use std::collections::HashSet;
use std::time::Duration;

use serde::Serialize;

use crate::agent::AgentConfig;
use crate::config::Secrets;
use crate::mcp::probe::probe_stdio;

/// All agents this process configures, in declaration order. Built once at
/// startup and passed by reference to whatever hosts it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Roster {
    pub agents: Vec<AgentConfig>,
}

impl Roster {
    /// Build every agent from the boundary secrets. Infallible by design:
    /// missing secrets flow through as empty values and fail downstream.
    pub fn build(secrets: &Secrets) -> Self {
        Roster {
            agents: vec![speech::build(secrets), workspace::build(secrets)],
        }
    }

    /// One line per agent: name, model, tool launch command, env keys only.
    pub fn log_summary(&self) {
        for agent in &self.agents {
            for conn in &agent.tools {
                tracing::info!(
                    "agent '{}' (model={}): tool server {} {} env=[{}]",
                    agent.name,
                    agent.model.summary(),
                    conn.command,
                    conn.args.join(" "),
                    conn.env_keys().join(", "),
                );
            }
        }
    }

    /// Launch each agent's tool server and log its tool inventory. Failures
    /// are logged and skipped; the roster is handed off either way.
    pub async fn probe(&self, timeout: Duration) {
        for agent in &self.agents {
            for conn in &agent.tools {
                match probe_stdio(conn, timeout).await {
                    Ok(tools) => tracing::info!(
                        "agent '{}' tool server exposes: {}",
                        agent.name,
                        summarize_tools(&tools, 10)
                    ),
                    Err(e) => tracing::warn!("probe failed for agent '{}': {}", agent.name, e),
                }
            }
        }
    }
}

fn summarize_tools(tools: &HashSet<String>, max_show: usize) -> String {
    let mut names: Vec<&str> = tools.iter().map(String::as_str).collect();
    names.sort_unstable();
    match names.len() {
        0 => "<none>".to_string(),
        n if n <= max_show => names.join(", "),
        n => format!("{} (+{} more)", names[..max_show].join(", "), n - max_show),
    }
}
