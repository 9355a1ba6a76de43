//! Shared test helpers

#![allow(dead_code)]

use std::time::Duration;

use course_portal_gateway::{GatewayConfig, HttpGateway};
use wiremock::MockServer;

/// Assert that a `Result` is `Ok` and unwrap it (fails the test otherwise).
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(
            res.is_ok(),
            "{}: {res:?}",
            format_args!($($msg)+)
        );
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// Gateway client pointed at the mock server
pub fn gateway_for(server: &MockServer) -> HttpGateway {
    gateway_with_timeout(server, Duration::from_secs(5))
}

/// Gateway client with the given request timeout
pub fn gateway_with_timeout(server: &MockServer, timeout: Duration) -> HttpGateway {
    let config = GatewayConfig {
        request_timeout: timeout,
        download_timeout: timeout,
        ..GatewayConfig::new(server.uri())
    };
    match HttpGateway::new(config) {
        Ok(gateway) => gateway,
        Err(e) => panic!("failed to build gateway client: {e}"),
    }
}

/// Gateway client pointed at a local port nobody listens on
///
/// Binds an ephemeral port and releases it, so connections are refused.
pub fn gateway_for_closed_port() -> HttpGateway {
    let port = match std::net::TcpListener::bind("127.0.0.1:0").and_then(|l| l.local_addr()) {
        Ok(addr) => addr.port(),
        Err(e) => panic!("failed to reserve a local port: {e}"),
    };
    match HttpGateway::new(GatewayConfig::new(format!("http://127.0.0.1:{port}"))) {
        Ok(gateway) => gateway,
        Err(e) => panic!("failed to build gateway client: {e}"),
    }
}
