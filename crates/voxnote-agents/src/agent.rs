//! Agent domain types: model references and immutable agent configurations.

use serde::{Deserialize, Serialize};

use crate::mcp::ToolConnection;

/// Reference to the LLM backing an agent.
///
/// `Named` is a bare model name resolved by the hosting runtime's default
/// provider. `Routed` addresses an explicit provider through the model-routing
/// shim and carries its own API key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ModelRef {
    Named(String),
    Routed {
        provider: String,
        model: String,
        api_key: String,
    },
}

impl ModelRef {
    /// Short `provider/model` form for logs. Never includes the API key.
    pub fn summary(&self) -> String {
        match self {
            ModelRef::Named(model) => model.clone(),
            ModelRef::Routed {
                provider, model, ..
            } => format!("{}/{}", provider, model),
        }
    }
}

/// An immutable agent definition handed to the external hosting runtime.
///
/// Constructed once at startup and never mutated. Each agent in this
/// repository carries exactly one tool connection, though the field permits
/// several.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentConfig {
    pub name: String,
    pub description: String,
    pub instruction: String,
    pub model: ModelRef,
    pub tools: Vec<ToolConnection>,
}
