//! Optional startup probe for stdio tool servers.
//!
//! Launches a configured tool server, initializes a client over stdio,
//! fetches its tool list, and shuts down, each phase bounded by a timeout.
//! Informational only; a failed probe is reported to the caller and never
//! aborts startup.

use std::collections::HashSet;
use std::future::Future;
use std::time::Duration;

use rust_mcp_sdk::McpClient;
use rust_mcp_sdk::mcp_client::{ClientHandlerCore, client_runtime_core};
use rust_mcp_sdk::schema::schema_utils::{
    NotificationFromServer, RequestFromServer, ResultFromClient,
};
use rust_mcp_sdk::schema::{
    ClientCapabilities, Implementation, InitializeRequestParams, LATEST_PROTOCOL_VERSION, RpcError,
};
use rust_mcp_sdk::{StdioTransport, TransportOptions};

use super::types::ToolConnection;

/// Launch the tool server described by `conn` and list its tool names.
pub async fn probe_stdio(
    conn: &ToolConnection,
    timeout: Duration,
) -> anyhow::Result<HashSet<String>> {
    let client_details = InitializeRequestParams {
        capabilities: ClientCapabilities::default(),
        client_info: Implementation {
            name: "voxnote-agents-probe".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            title: None,
        },
        protocol_version: LATEST_PROTOCOL_VERSION.into(),
    };

    let transport = StdioTransport::create_with_server_launch(
        &conn.command,
        conn.args.clone(),
        Some(conn.env.clone()),
        TransportOptions::default(),
    )
    .map_err(|e| anyhow::anyhow!(format!("transport error: {}", e)))?;

    let client = client_runtime_core::create_client(client_details, transport, QuietClientHandler);

    within("start", timeout, client.clone().start()).await?;
    let listed = within("list_tools", timeout, client.list_tools(None)).await?;
    let tools: HashSet<String> = listed.tools.into_iter().map(|t| t.name).collect();
    within("shutdown", timeout, client.shut_down()).await?;

    Ok(tools)
}

/// Bound one probe phase by the timeout, folding both failure shapes into one.
async fn within<T, E>(
    phase: &str,
    timeout: Duration,
    fut: impl Future<Output = Result<T, E>>,
) -> anyhow::Result<T>
where
    E: std::fmt::Display,
{
    match tokio::time::timeout(timeout, fut).await {
        Ok(Ok(v)) => Ok(v),
        Ok(Err(e)) => Err(anyhow::anyhow!("probe {} error: {}", phase, e)),
        Err(_) => Err(anyhow::anyhow!("probe {} timeout", phase)),
    }
}

/// The probe never serves requests back to the tool server.
#[derive(Clone)]
struct QuietClientHandler;

#[async_trait::async_trait]
impl ClientHandlerCore for QuietClientHandler {
    async fn handle_request(
        &self,
        _request: RequestFromServer,
        _runtime: &dyn McpClient,
    ) -> std::result::Result<ResultFromClient, RpcError> {
        Err(RpcError::method_not_found())
    }

    async fn handle_notification(
        &self,
        _notification: NotificationFromServer,
        _runtime: &dyn McpClient,
    ) -> std::result::Result<(), RpcError> {
        Ok(())
    }

    async fn handle_error(
        &self,
        _error: &RpcError,
        _runtime: &dyn McpClient,
    ) -> std::result::Result<(), RpcError> {
        Ok(())
    }
}
