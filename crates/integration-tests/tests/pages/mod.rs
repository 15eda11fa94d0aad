use integration_tests::TestServer;

#[tokio::test]
async fn landing_page() {
    let server = TestServer::start("").await;

    let response = server.client.get("/").await;
    assert_eq!(response.status(), 200);
    assert_eq!(response.headers()["content-type"], "text/html; charset=utf-8");

    let body = response.text().await.unwrap();
    assert!(body.contains("<title>LiveScore MCP - Football Live Scores API for AI Agents</title>"));
    assert!(body.contains("https://livescoremcp.com/sse"));
}

#[tokio::test]
async fn event_stream_on_root_opens_a_session() {
    let server = TestServer::start("").await;

    let response = server.client.get_accepting("/", "text/event-stream").await;
    assert_eq!(response.status(), 200);

    let content_type = response.headers()["content-type"].to_str().unwrap();
    assert!(content_type.starts_with("text/event-stream"), "{content_type}");
}

#[tokio::test]
async fn legal_pages() {
    let server = TestServer::start("").await;

    let privacy = server.client.get("/privacy").await;
    assert_eq!(privacy.status(), 200);
    assert!(privacy.text().await.unwrap().contains("<h1>Privacy Policy</h1>"));

    let terms = server.client.get("/terms").await;
    assert_eq!(terms.status(), 200);
    assert!(terms.text().await.unwrap().contains("<h1>Terms of Use</h1>"));
}

#[tokio::test]
async fn robots_txt() {
    let server = TestServer::start("").await;

    let response = server.client.get("/robots.txt").await;
    assert_eq!(response.status(), 200);
    assert_eq!(response.headers()["content-type"], "text/plain");

    let body = response.text().await.unwrap();

    insta::assert_snapshot!(body.trim_end(), @r"
    User-agent: *
    Allow: /
    Disallow: /sse
    Disallow: /message
    Disallow: /health

    Sitemap: https://livescoremcp.com/sitemap.xml
    ");
}

#[tokio::test]
async fn sitemap_xml() {
    let server = TestServer::start("").await;

    let response = server.client.get("/sitemap.xml").await;
    assert_eq!(response.status(), 200);
    assert_eq!(response.headers()["content-type"], "application/xml");

    let body = response.text().await.unwrap();

    assert!(body.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
    assert!(body.contains("<loc>https://livescoremcp.com/</loc>"));
    assert!(body.contains("<loc>https://livescoremcp.com/privacy</loc>"));
    assert!(body.contains("<loc>https://livescoremcp.com/terms</loc>"));
}

#[tokio::test]
async fn static_assets() {
    let server = TestServer::start("").await;

    let response = server.client.get("/static/favicon.svg").await;
    assert_eq!(response.status(), 200);
    assert_eq!(response.headers()["content-type"], "image/svg+xml");

    let response = server.client.get("/static/nope.png").await;
    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn unknown_paths_are_not_found() {
    let server = TestServer::start("").await;

    let response = server.client.get("/definitely-not-here").await;
    assert_eq!(response.status(), 404);
}
