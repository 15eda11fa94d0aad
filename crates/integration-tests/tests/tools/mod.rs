use integration_tests::{KNOWN_TEAM_LOGO, TestServer, result_text};
use serde_json::json;

fn echoed(title: &str, uri: &str) -> String {
    format!("{title}:\n\n{{\n  \"uri\": \"{uri}\"\n}}")
}

#[tokio::test]
async fn list_all_tools() {
    let server = TestServer::start("").await;
    let mcp_client = server.mcp_client("/sse").await;

    let tools = mcp_client.list_tools().await;
    let names: Vec<_> = tools.tools.iter().map(|tool| tool.name.to_string()).collect();

    insta::assert_json_snapshot!(names, @r#"
    [
      "health",
      "get_live_scores",
      "get_fixtures",
      "search",
      "get_league_fixtures",
      "get_team",
      "get_player",
      "get_match",
      "get_day_fixtures",
      "get_team_image"
    ]
    "#);

    let search = tools.tools.iter().find(|tool| tool.name == "search").unwrap();
    assert_eq!(search.input_schema["required"], json!(["q"]));

    mcp_client.disconnect().await;
}

#[tokio::test]
async fn health_echo() {
    let server = TestServer::start("").await;
    let mcp_client = server.mcp_client("/sse").await;

    let result = mcp_client.call_tool("health", json!({ "message": "ping" })).await;

    assert_eq!(result.is_error, Some(false));
    assert_eq!(result_text(&result), "Echo: ping");

    mcp_client.disconnect().await;
}

#[tokio::test]
async fn live_scores() {
    let server = TestServer::start("").await;
    let mcp_client = server.mcp_client("/sse").await;

    let result = mcp_client.call_tool("get_live_scores", json!({})).await;

    assert_eq!(
        result_text(&result),
        echoed("Live Scores", "/footapi/fixtures/feed_livenow.json?lang=en&version=2800")
    );

    mcp_client.disconnect().await;
}

#[tokio::test]
async fn match_defaults_to_head_to_head() {
    let server = TestServer::start("").await;
    let mcp_client = server.mcp_client("/sse").await;

    let result = mcp_client.call_tool("get_match", json!({ "id": "4321" })).await;
    assert_eq!(
        result_text(&result),
        echoed("Match info for ID 4321", "/footapi/matches/4321.json?h2h=1&lang=en&version=2800")
    );

    let result = mcp_client
        .call_tool("get_match", json!({ "id": "4321", "h2h": 0 }))
        .await;
    assert_eq!(
        result_text(&result),
        echoed("Match info for ID 4321", "/footapi/matches/4321.json?h2h=0&lang=en&version=2800")
    );

    let result = mcp_client
        .call_tool("get_match", json!({ "id": "4321", "h2h": "0" }))
        .await;
    assert_eq!(
        result_text(&result),
        echoed("Match info for ID 4321", "/footapi/matches/4321.json?h2h=1&lang=en&version=2800")
    );

    mcp_client.disconnect().await;
}

#[tokio::test]
async fn search_with_and_without_country() {
    let server = TestServer::start("").await;
    let mcp_client = server.mcp_client("/sse").await;

    let result = mcp_client.call_tool("search", json!({ "q": "Ajax" })).await;
    assert_eq!(
        result_text(&result),
        echoed("Search results for 'Ajax'", "/footapi/search_v3?lang=en&q=Ajax&version=2800")
    );

    let result = mcp_client
        .call_tool("search", json!({ "q": "Ajax", "country": "Netherlands", "language": "nl" }))
        .await;
    assert_eq!(
        result_text(&result),
        echoed(
            "Search results for 'Ajax'",
            "/footapi/search_v3?country=Netherlands&lang=nl&q=Ajax&version=2800"
        )
    );

    mcp_client.disconnect().await;
}

#[tokio::test]
async fn day_fixtures() {
    let server = TestServer::start("").await;
    let mcp_client = server.mcp_client("/sse").await;

    let result = mcp_client
        .call_tool("get_day_fixtures", json!({ "date": "30/08/2025", "tzoffset": 2 }))
        .await;

    assert_eq!(
        result_text(&result),
        echoed(
            "Fixtures for 30/08/2025",
            "/footapi/fixtures/feed_matches_aggregated.json?date=30%2F08%2F2025&lang=en&tzoffset=2&version=2800"
        )
    );

    mcp_client.disconnect().await;
}

#[tokio::test]
async fn team_image() {
    let server = TestServer::start("").await;
    let mcp_client = server.mcp_client("/sse").await;

    let result = mcp_client
        .call_tool("get_team_image", json!({ "id": KNOWN_TEAM_LOGO }))
        .await;

    assert_eq!(result.is_error, Some(false));
    assert_eq!(
        result_text(&result),
        format!(
            "Team logo URL for ID 13183:\nhttp://{}/footapi/images/teams_gs/13183.png",
            server.upstream
        )
    );

    let result = mcp_client.call_tool("get_team_image", json!({ "id": "1" })).await;

    assert_eq!(result.is_error, Some(true));
    assert_eq!(result_text(&result), "image not available (status 404) for team ID 1");

    mcp_client.disconnect().await;
}

#[tokio::test]
async fn upstream_errors_are_tool_errors() {
    let server = TestServer::start("").await;
    let mcp_client = server.mcp_client("/sse").await;

    let result = mcp_client.call_tool("get_team", json!({ "id": "missing" })).await;

    assert_eq!(result.is_error, Some(true));
    assert_eq!(result_text(&result), "API error (status 404): not found");

    mcp_client.disconnect().await;
}

#[tokio::test]
async fn unknown_tool() {
    let server = TestServer::start("").await;
    let mcp_client = server.mcp_client("/sse").await;

    let error = mcp_client.call_tool_expect_error("get_weather", json!({})).await;
    assert!(error.to_string().contains("Unknown tool 'get_weather'"), "{error}");

    mcp_client.disconnect().await;
}
