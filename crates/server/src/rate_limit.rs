//! Rate limiting middleware for the message endpoint.

use std::{
    fmt::Display,
    future::Future,
    net::SocketAddr,
    pin::Pin,
    sync::Arc,
    task::{Context, Poll},
};

use axum::{body::Body, extract::ConnectInfo};
use http::{HeaderValue, Request, Response, StatusCode, header};
use rate_limit::{RateLimitError, RateLimitManager};
use tower::Layer;

#[derive(Clone)]
pub struct RateLimitLayer(Arc<RateLimitManager>);

impl RateLimitLayer {
    pub fn new(manager: Arc<RateLimitManager>) -> Self {
        Self(manager)
    }
}

impl<Service> Layer<Service> for RateLimitLayer
where
    Service: Send + Clone,
{
    type Service = RateLimitService<Service>;

    fn layer(&self, next: Service) -> Self::Service {
        RateLimitService {
            next,
            manager: self.0.clone(),
        }
    }
}

#[derive(Clone)]
pub struct RateLimitService<Service> {
    next: Service,
    manager: Arc<RateLimitManager>,
}

impl<Service, ReqBody> tower::Service<Request<ReqBody>> for RateLimitService<Service>
where
    Service: tower::Service<Request<ReqBody>, Response = Response<Body>> + Send + Clone + 'static,
    Service::Future: Send,
    Service::Error: Display + 'static,
    ReqBody: http_body::Body + Send + 'static,
{
    type Response = http::Response<Body>;
    type Error = Service::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Response<Body>, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.next.poll_ready(cx)
    }

    fn call(&mut self, req: Request<ReqBody>) -> Self::Future {
        let mut next = self.next.clone();
        let manager = self.manager.clone();

        Box::pin(async move {
            let ip = client_key(&req);

            let err = match manager.check(&ip) {
                Ok(()) => return next.call(req).await,
                Err(err) => err,
            };

            log::info!("Rate limit exceeded for {ip} on {}", req.uri().path());

            Ok(too_many_requests(&err))
        })
    }
}

/// The key a request is limited under.
///
/// A proxy-supplied `X-Forwarded-For` wins and is used verbatim, otherwise the
/// peer address of the connection.
fn client_key<B>(req: &Request<B>) -> String {
    if let Some(forwarded_for) = req.headers().get("x-forwarded-for")
        && let Ok(value) = forwarded_for.to_str()
        && !value.is_empty()
    {
        return value.to_string();
    }

    match req.extensions().get::<ConnectInfo<SocketAddr>>() {
        Some(ConnectInfo(address)) => address.ip().to_string(),
        None => "unknown".to_string(),
    }
}

fn too_many_requests(err: &RateLimitError) -> Response<Body> {
    // Whole seconds, rounded up.
    let retry_after = err
        .retry_after()
        .map(|duration| duration.as_secs() + u64::from(duration.subsec_nanos() > 0))
        .unwrap_or(60);

    let body = serde_json::json!({
        "error": "rate limit exceeded",
        "retry_after": retry_after,
    });

    let mut response = Response::new(Body::from(body.to_string()));
    *response.status_mut() = StatusCode::TOO_MANY_REQUESTS;

    let headers = response.headers_mut();
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(header::RETRY_AFTER, HeaderValue::from(retry_after));

    response
}
