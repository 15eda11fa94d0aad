//! Landing and legal pages, crawler files and embedded static assets.

use std::sync::Arc;

use anyhow::anyhow;
use axum::{
    Router,
    body::Body,
    extract::{Path, Request, State},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use config::Config;
use http::{StatusCode, Uri, header};
use rust_embed::RustEmbed;
use tower::ServiceExt;

#[derive(RustEmbed)]
#[folder = "static"]
struct StaticAssets;

const PLACEHOLDER: &str = "{{PUBLIC_URL}}";
const LAST_MODIFIED: &str = "2026-02-24";

/// Pages rendered once for the public URL of the server.
struct Pages {
    landing: String,
    privacy: String,
    terms: String,
    robots: String,
    sitemap: String,
    sse: Router,
    sse_uri: Uri,
}

/// Routes for `/`, `/privacy`, `/terms`, `/robots.txt`, `/sitemap.xml` and `/static/*`.
///
/// Requests to `/` accepting `text/event-stream` are handed to `sse`, so clients
/// configured with the bare origin still get an MCP session.
pub(crate) fn router(config: &Config, public_url: &str, sse: Router) -> anyhow::Result<Router> {
    let public_url = public_url.trim_end_matches('/');

    let sse_uri = config
        .mcp
        .sse_path
        .parse()
        .map_err(|e| anyhow!("Invalid SSE path '{}': {e}", config.mcp.sse_path))?;

    let pages = Pages {
        landing: render(include_str!("../pages/landing.html"), public_url),
        privacy: render(include_str!("../pages/privacy.html"), public_url),
        terms: render(include_str!("../pages/terms.html"), public_url),
        robots: robots(config, public_url),
        sitemap: sitemap(public_url),
        sse,
        sse_uri,
    };

    Ok(Router::new()
        .route("/", get(landing))
        .route("/privacy", get(|State(pages): State<Arc<Pages>>| async move { Html(pages.privacy.clone()) }))
        .route("/terms", get(|State(pages): State<Arc<Pages>>| async move { Html(pages.terms.clone()) }))
        .route("/robots.txt", get(robots_txt))
        .route("/sitemap.xml", get(sitemap_xml))
        .route("/static/{*path}", get(asset))
        .with_state(Arc::new(pages)))
}

fn render(template: &str, public_url: &str) -> String {
    template.replace(PLACEHOLDER, public_url)
}

fn robots(config: &Config, public_url: &str) -> String {
    let mut robots = String::from("User-agent: *\nAllow: /\n");

    robots.push_str(&format!("Disallow: {}\n", config.mcp.sse_path));
    robots.push_str(&format!("Disallow: {}\n", config.mcp.message_path));

    if config.server.health.enabled {
        robots.push_str(&format!("Disallow: {}\n", config.server.health.path));
    }

    robots.push_str(&format!("\nSitemap: {public_url}/sitemap.xml\n"));
    robots
}

fn sitemap(public_url: &str) -> String {
    let url = |path: &str, changefreq: &str, priority: &str| {
        format!(
            "  <url>\n    <loc>{public_url}{path}</loc>\n    <lastmod>{LAST_MODIFIED}</lastmod>\n    \
             <changefreq>{changefreq}</changefreq>\n    <priority>{priority}</priority>\n  </url>\n"
        )
    };

    let mut sitemap = String::from(concat!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n",
        "<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    ));

    sitemap.push_str(&url("/", "weekly", "1.0"));
    sitemap.push_str(&url("/privacy", "monthly", "0.3"));
    sitemap.push_str(&url("/terms", "monthly", "0.3"));
    sitemap.push_str("</urlset>\n");

    sitemap
}

async fn landing(State(pages): State<Arc<Pages>>, mut request: Request) -> Response {
    let wants_stream = request
        .headers()
        .get(header::ACCEPT)
        .and_then(|accept| accept.to_str().ok())
        .is_some_and(|accept| accept.contains("text/event-stream"));

    if !wants_stream {
        return Html(pages.landing.clone()).into_response();
    }

    log::debug!("Handing an event stream request on / to {}", pages.sse_uri);

    *request.uri_mut() = pages.sse_uri.clone();
    let Ok(response) = pages.sse.clone().oneshot(request).await;

    response
}

async fn robots_txt(State(pages): State<Arc<Pages>>) -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/plain")], pages.robots.clone())
}

async fn sitemap_xml(State(pages): State<Arc<Pages>>) -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "application/xml")], pages.sitemap.clone())
}

async fn asset(Path(path): Path<String>) -> Response {
    let Some(content) = StaticAssets::get(&path) else {
        return StatusCode::NOT_FOUND.into_response();
    };

    let mime_type = mime_guess::from_path(&path).first_or_octet_stream();

    (
        [(header::CONTENT_TYPE, mime_type.as_ref())],
        Body::from(content.data.into_owned()),
    )
        .into_response()
}
