use std::{net::SocketAddr, time::Duration};

use axum::{
    Router,
    extract::Path,
    http::{StatusCode, Uri},
    routing::head,
};
use config::Config;
use rmcp::{
    model::{CallToolRequestParam, ReadResourceRequestParam},
    service::{RunningService, ServiceExt},
    transport::SseClientTransport,
};
use serde_json::json;
use server::ServeConfig;
use tokio::{net::TcpListener, time::timeout};
use tokio_util::sync::CancellationToken;
use url::Url;

/// The team whose logo the mock upstream knows about.
pub const KNOWN_TEAM_LOGO: &str = "13183";

/// Test client for making HTTP requests to the test server
pub struct TestClient {
    base_url: String,
    client: reqwest::Client,
}

impl TestClient {
    /// Create a new test client for the given base URL
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    /// Send a GET request to the given path
    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await
            .unwrap()
    }

    /// Whether the server answers at all.
    pub async fn is_up(&self) -> bool {
        let url = format!("{}/robots.txt", self.base_url);
        self.client.get(url).send().await.is_ok()
    }

    /// Send a GET request with an `Accept` header, without waiting for the body.
    pub async fn get_accepting(&self, path: &str, accept: &str) -> reqwest::Response {
        self.client
            .get(format!("{}{}", self.base_url, path))
            .header("accept", accept)
            .send()
            .await
            .unwrap()
    }

    /// POST a JSON-RPC message, optionally claiming to come through a proxy for `forwarded_for`.
    pub async fn post_message(&self, path: &str, forwarded_for: Option<&str>) -> reqwest::Response {
        let mut request = self.client.post(format!("{}{}", self.base_url, path)).json(&json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": "ping",
        }));

        if let Some(ip) = forwarded_for {
            request = request.header("x-forwarded-for", ip);
        }

        request.send().await.unwrap()
    }
}

/// MCP client for testing MCP protocol functionality over SSE
pub struct McpTestClient {
    service: RunningService<rmcp::RoleClient, ()>,
}

impl McpTestClient {
    /// Create a new MCP client that opens an event stream at the given URL
    pub async fn new(sse_url: String) -> Self {
        let transport = SseClientTransport::start(sse_url).await.unwrap();
        let service = ().serve(transport).await.unwrap();

        Self { service }
    }

    /// Get server information
    pub fn get_server_info(&self) -> &rmcp::model::InitializeResult {
        self.service.peer_info().unwrap()
    }

    /// List available tools
    pub async fn list_tools(&self) -> rmcp::model::ListToolsResult {
        self.service.list_tools(Default::default()).await.unwrap()
    }

    /// Call a tool with the given name and arguments
    pub async fn call_tool(&self, name: &str, arguments: serde_json::Value) -> rmcp::model::CallToolResult {
        let arguments = arguments.as_object().cloned();
        self.service
            .call_tool(CallToolRequestParam {
                name: name.to_string().into(),
                arguments,
            })
            .await
            .unwrap()
    }

    /// Call a tool and expect it to fail
    pub async fn call_tool_expect_error(&self, name: &str, arguments: serde_json::Value) -> rmcp::ServiceError {
        let arguments = arguments.as_object().cloned();
        self.service
            .call_tool(CallToolRequestParam {
                name: name.to_string().into(),
                arguments,
            })
            .await
            .unwrap_err()
    }

    /// List available resources
    pub async fn list_resources(&self) -> rmcp::model::ListResourcesResult {
        self.service.list_resources(Default::default()).await.unwrap()
    }

    /// Read a resource, returning the protocol error if there is one
    pub async fn read_resource(&self, uri: &str) -> Result<rmcp::model::ReadResourceResult, rmcp::ServiceError> {
        self.service
            .read_resource(ReadResourceRequestParam { uri: uri.to_string() })
            .await
    }

    /// Disconnect the client
    pub async fn disconnect(self) {
        self.service.cancel().await.unwrap();
    }
}

/// The text of the first content item of a tool result.
pub fn result_text(result: &rmcp::model::CallToolResult) -> String {
    let value = serde_json::to_value(result).unwrap();
    value["content"][0]["text"].as_str().unwrap().to_string()
}

/// A stand-in for the football-data API.
///
/// Every GET is answered with `{"uri": <path and query>}`, except paths containing
/// `missing` which get a 404. Team logos exist only for [`KNOWN_TEAM_LOGO`].
async fn spawn_mock_upstream() -> SocketAddr {
    async fn echo(uri: Uri) -> (StatusCode, String) {
        if uri.path().contains("missing") {
            return (StatusCode::NOT_FOUND, "not found".to_string());
        }

        (StatusCode::OK, json!({ "uri": uri.to_string() }).to_string())
    }

    async fn logo(Path(file): Path<String>) -> StatusCode {
        if file == format!("{KNOWN_TEAM_LOGO}.png") {
            StatusCode::OK
        } else {
            StatusCode::NOT_FOUND
        }
    }

    let router = Router::new()
        .route("/footapi/images/teams_gs/{file}", head(logo))
        .fallback(echo);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    address
}

/// Test server that manages the lifecycle of a server instance
pub struct TestServer {
    pub client: TestClient,
    pub address: SocketAddr,
    /// Address of the mock football-data API the server forwards to.
    pub upstream: SocketAddr,
    shutdown: CancellationToken,
    _handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    /// Start a new test server with the given TOML configuration, forwarding to a fresh mock upstream
    pub async fn start(config_toml: &str) -> Self {
        let mut config: Config = toml::from_str(config_toml).unwrap();
        config.validate().unwrap();

        let upstream = spawn_mock_upstream().await;
        config.upstream.base_url = Url::parse(&format!("http://{upstream}/footapi")).unwrap();

        // Find an available port
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap();

        let shutdown = CancellationToken::new();

        let serve_config = ServeConfig {
            listen_address: address,
            config,
            public_url: "https://livescoremcp.com".to_string(),
            shutdown: shutdown.clone(),
        };

        // Start the server in a background task
        let (tx, mut rx) = tokio::sync::oneshot::channel();
        let handle = tokio::spawn(async move {
            // Drop the listener so the server can bind to the address
            drop(listener);

            let _ = tx.send(server::serve(serve_config).await);
        });

        // Wait for the server to start up or fail
        tokio::time::sleep(Duration::from_millis(100)).await;

        if let Ok(Err(e)) = rx.try_recv() {
            eprintln!("Server failed to start: {e}");
            std::process::exit(1);
        }

        let client = TestClient::new(format!("http://{address}"));

        // Verify the server is actually running by making a simple request
        let mut retries = 10;
        while retries > 0 {
            if let Ok(true) = timeout(Duration::from_millis(100), client.is_up()).await {
                break;
            }
            retries -= 1;
            tokio::time::sleep(Duration::from_millis(50)).await;
        }

        TestServer {
            client,
            address,
            upstream,
            shutdown,
            _handle: handle,
        }
    }

    /// Create an MCP client that opens an event stream at `path` on this server
    pub async fn mcp_client(&self, path: &str) -> McpTestClient {
        McpTestClient::new(format!("http://{}{}", self.address, path)).await
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}
