use integration_tests::TestServer;
use rmcp::model::ResourceContents;

#[tokio::test]
async fn list_resources() {
    let server = TestServer::start("").await;
    let mcp_client = server.mcp_client("/sse").await;

    let result = mcp_client.list_resources().await;

    assert_eq!(result.resources.len(), 1);
    assert_eq!(result.resources[0].uri, "server://info");
    assert_eq!(result.resources[0].name, "LiveScore MCP Server Info");
    assert_eq!(result.resources[0].mime_type.as_deref(), Some("text/plain"));

    mcp_client.disconnect().await;
}

#[tokio::test]
async fn read_server_info() {
    let server = TestServer::start("").await;
    let mcp_client = server.mcp_client("/sse").await;

    let result = mcp_client.read_resource("server://info").await.unwrap();
    assert_eq!(result.contents.len(), 1);

    let ResourceContents::TextResourceContents { text, mime_type, .. } = &result.contents[0] else {
        unreachable!("server://info is a text resource");
    };

    assert_eq!(mime_type.as_deref(), Some("text/plain"));
    assert!(text.starts_with("LiveScore MCP Server v1.0.0"));
    assert!(text.contains("- get_team_image: Team logo PNG URL by team ID"));

    mcp_client.disconnect().await;
}

#[tokio::test]
async fn unknown_resource() {
    let server = TestServer::start("").await;
    let mcp_client = server.mcp_client("/sse").await;

    let error = mcp_client.read_resource("server://nope").await.unwrap_err();
    assert!(error.to_string().contains("server://nope"), "{error}");

    mcp_client.disconnect().await;
}
