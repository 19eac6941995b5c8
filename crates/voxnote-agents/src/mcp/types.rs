//! Launch descriptors for stdio tool servers.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// How to launch a subprocess that speaks the tool protocol over its
/// standard streams. The `env` values commonly carry secrets; log keys only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolConnection {
    pub command: String,
    pub args: Vec<String>,
    pub env: HashMap<String, String>,
}

impl ToolConnection {
    /// Sorted env-override key names, safe to include in logs.
    pub fn env_keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.env.keys().cloned().collect();
        keys.sort();
        keys
    }
}

/// Serialize header pairs into the single JSON-encoded env value some tool
/// servers expect (e.g. `OPENAPI_MCP_HEADERS`).
pub fn encode_header_env(pairs: &[(&str, &str)]) -> String {
    let mut map = serde_json::Map::new();
    for (k, v) in pairs {
        map.insert((*k).to_string(), serde_json::Value::String((*v).to_string()));
    }
    serde_json::Value::Object(map).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_env_round_trips() {
        let encoded = encode_header_env(&[
            ("Authorization", "Bearer ntn-test"),
            ("Notion-Version", "2022-06-28"),
        ]);
        let decoded: serde_json::Value = serde_json::from_str(&encoded).expect("valid JSON");
        assert_eq!(decoded["Authorization"], "Bearer ntn-test");
        assert_eq!(decoded["Notion-Version"], "2022-06-28");
    }

    #[test]
    fn env_keys_are_sorted_and_value_free() {
        let conn = ToolConnection {
            command: "uvx".to_string(),
            args: vec!["elevenlabs-mcp".to_string()],
            env: [
                ("ZED_KEY".to_string(), "z-secret".to_string()),
                ("API_KEY".to_string(), "a-secret".to_string()),
            ]
            .into_iter()
            .collect(),
        };
        let keys = conn.env_keys();
        assert_eq!(keys, vec!["API_KEY".to_string(), "ZED_KEY".to_string()]);
        assert!(!keys.join(",").contains("secret"));
    }
}
