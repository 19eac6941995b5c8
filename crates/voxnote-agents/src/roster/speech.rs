//! Speech-synthesis agent backed by the ElevenLabs tool server.

use std::collections::HashMap;

use crate::agent::{AgentConfig, ModelRef};
use crate::config::Secrets;
use crate::mcp::ToolConnection;

use super::prompt;

/// Build the text-to-speech agent.
///
/// The ElevenLabs key goes straight into the tool server's environment; the
/// routed model carries its own key. Empty secrets are passed through and
/// fail downstream, not here.
pub fn build(secrets: &Secrets) -> AgentConfig {
    let mut env = HashMap::new();
    env.insert(
        "ELEVENLABS_API_KEY".to_string(),
        secrets.elevenlabs_api_key.clone(),
    );

    AgentConfig {
        name: "elevenlabs_agent_mcp".to_string(),
        description: "Specialized agent for converting text to speech using ElevenLabs."
            .to_string(),
        instruction: prompt::SPEECH_PROMPT.to_string(),
        model: ModelRef::Routed {
            provider: "anthropic".to_string(),
            model: "claude-3-5-sonnet-20241022".to_string(),
            api_key: secrets.anthropic_api_key.clone(),
        },
        tools: vec![ToolConnection {
            command: "uvx".to_string(),
            args: vec!["elevenlabs-mcp".to_string()],
            env,
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_secrets() -> Secrets {
        Secrets {
            anthropic_api_key: "sk-ant-test".to_string(),
            elevenlabs_api_key: "el-test".to_string(),
            notion_api_key: String::new(),
        }
    }

    #[test]
    fn builds_with_one_tool_connection() {
        let agent = build(&test_secrets());
        assert!(!agent.name.is_empty());
        assert!(!agent.instruction.is_empty());
        assert_eq!(agent.tools.len(), 1);
        assert_eq!(agent.tools[0].command, "uvx");
        assert_eq!(agent.tools[0].args, vec!["elevenlabs-mcp".to_string()]);
    }

    #[test]
    fn tool_env_carries_the_elevenlabs_key() {
        let agent = build(&test_secrets());
        assert_eq!(
            agent.tools[0].env.get("ELEVENLABS_API_KEY").map(String::as_str),
            Some("el-test")
        );
    }

    #[test]
    fn model_is_routed_through_anthropic() {
        let agent = build(&test_secrets());
        match &agent.model {
            ModelRef::Routed {
                provider,
                model,
                api_key,
            } => {
                assert_eq!(provider, "anthropic");
                assert_eq!(model, "claude-3-5-sonnet-20241022");
                assert_eq!(api_key, "sk-ant-test");
            }
            other => panic!("expected routed model, got {:?}", other),
        }
    }

    #[test]
    fn repeated_builds_are_equal_and_independent() {
        let secrets = test_secrets();
        let a = build(&secrets);
        let mut b = build(&secrets);
        assert_eq!(a, b);
        b.tools[0]
            .env
            .insert("EXTRA".to_string(), "x".to_string());
        assert_ne!(a, b);
    }

    #[test]
    fn missing_secrets_yield_empty_fields_without_panic() {
        let agent = build(&Secrets::default());
        assert_eq!(
            agent.tools[0].env.get("ELEVENLABS_API_KEY").map(String::as_str),
            Some("")
        );
        match &agent.model {
            ModelRef::Routed { api_key, .. } => assert!(api_key.is_empty()),
            other => panic!("expected routed model, got {:?}", other),
        }
    }
}
