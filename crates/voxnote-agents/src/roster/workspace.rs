//! Workspace-knowledge agent backed by the Notion tool server.

use std::collections::HashMap;

use crate::agent::{AgentConfig, ModelRef};
use crate::config::Secrets;
use crate::mcp::{ToolConnection, encode_header_env};

use super::prompt;

/// Notion REST API version pinned by the tool server contract.
pub const NOTION_VERSION: &str = "2022-06-28";

/// Build the workspace-knowledge agent.
///
/// The Notion server takes its auth as a single JSON-encoded header value in
/// `OPENAPI_MCP_HEADERS`. An empty token still produces the header; whether
/// that falls back to another auth path is the tool server's business.
pub fn build(secrets: &Secrets) -> AgentConfig {
    let headers = encode_header_env(&[
        (
            "Authorization",
            &format!("Bearer {}", secrets.notion_api_key),
        ),
        ("Notion-Version", NOTION_VERSION),
    ]);
    let mut env = HashMap::new();
    env.insert("OPENAPI_MCP_HEADERS".to_string(), headers);

    AgentConfig {
        name: "notion_agent_mcp".to_string(),
        description: "Specialized agent for retrieving information from a Notion workspace."
            .to_string(),
        instruction: prompt::WORKSPACE_PROMPT.to_string(),
        model: ModelRef::Named("gemini-2.0-flash".to_string()),
        tools: vec![ToolConnection {
            command: "npx".to_string(),
            args: vec!["-y".to_string(), "@notionhq/notion-mcp-server".to_string()],
            env,
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_secrets() -> Secrets {
        Secrets {
            anthropic_api_key: String::new(),
            elevenlabs_api_key: String::new(),
            notion_api_key: "ntn-test".to_string(),
        }
    }

    #[test]
    fn builds_with_one_tool_connection() {
        let agent = build(&test_secrets());
        assert!(!agent.name.is_empty());
        assert!(!agent.instruction.is_empty());
        assert_eq!(agent.tools.len(), 1);
        assert_eq!(agent.tools[0].command, "npx");
        assert_eq!(
            agent.tools[0].args,
            vec!["-y".to_string(), "@notionhq/notion-mcp-server".to_string()]
        );
    }

    #[test]
    fn model_is_a_bare_name() {
        let agent = build(&test_secrets());
        assert_eq!(agent.model, ModelRef::Named("gemini-2.0-flash".to_string()));
    }

    #[test]
    fn header_env_decodes_to_auth_pairs() {
        let agent = build(&test_secrets());
        let raw = agent.tools[0]
            .env
            .get("OPENAPI_MCP_HEADERS")
            .expect("header env present");
        let decoded: serde_json::Value = serde_json::from_str(raw).expect("valid JSON header");
        assert_eq!(decoded["Authorization"], "Bearer ntn-test");
        assert_eq!(decoded["Notion-Version"], NOTION_VERSION);
    }

    #[test]
    fn missing_token_still_encodes_a_header() {
        let agent = build(&Secrets::default());
        let raw = agent.tools[0]
            .env
            .get("OPENAPI_MCP_HEADERS")
            .expect("header env present");
        let decoded: serde_json::Value = serde_json::from_str(raw).expect("valid JSON header");
        assert_eq!(decoded["Authorization"], "Bearer ");
    }

    #[test]
    fn repeated_builds_are_equal() {
        let secrets = test_secrets();
        assert_eq!(build(&secrets), build(&secrets));
    }
}
