#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::ConnectInfo;
use chrono::{Duration, Utc};
use shortlink::registry::LinkRegistry;
use shortlink::state::AppState;

pub fn create_test_state() -> AppState {
    AppState::new(Arc::new(LinkRegistry::new()), "http://localhost:3000")
}

/// Inserts a link whose TTL elapsed well in the past.
pub async fn create_expired_link(state: &AppState, code: &str, url: &str) {
    let created = Utc::now() - Duration::minutes(10);
    state
        .registry
        .create_at(url, Some(1), Some(code.to_string()), created)
        .await
        .unwrap();
}

/// Layer that injects a fixed peer address, standing in for the
/// `into_make_service_with_connect_info` wiring the real server uses.
#[derive(Clone)]
pub struct MockConnectInfoLayer;

impl<S> tower::Layer<S> for MockConnectInfoLayer {
    type Service = MockConnectInfoService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        MockConnectInfoService { inner }
    }
}

#[derive(Clone)]
pub struct MockConnectInfoService<S> {
    inner: S,
}

impl<S, B> tower::Service<axum::http::Request<B>> for MockConnectInfoService<S>
where
    S: tower::Service<axum::http::Request<B>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    B: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: axum::http::Request<B>) -> Self::Future {
        let addr: SocketAddr = "127.0.0.1:12345".parse().unwrap();
        req.extensions_mut().insert(ConnectInfo(addr));
        self.inner.call(req)
    }
}
