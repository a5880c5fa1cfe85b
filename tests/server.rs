//! End-to-end tests against the demo server on a real socket.

use axum::http::StatusCode;
use on_headers::ServerConfig;

mod common;

#[tokio::test]
async fn test_headers_reach_the_client() {
    let mut config = ServerConfig::default();
    config.headers.response_time_header = "X-Elapsed".into();
    config.headers.response_time_digits = 1;
    config
        .headers
        .static_headers
        .insert("x-frame-options".into(), "DENY".into());

    let (addr, shutdown) = common::start_server(config).await;

    let client = reqwest::Client::builder().no_proxy().build().unwrap();
    let res = client
        .get(format!("http://{addr}/status/201"))
        .send()
        .await
        .expect("server unreachable");

    assert_eq!(res.status(), StatusCode::CREATED);
    assert_eq!(res.headers()["x-frame-options"], "DENY");

    let elapsed = res.headers()["x-elapsed"].to_str().unwrap();
    let millis = elapsed.strip_suffix("ms").unwrap();
    assert_eq!(millis.split('.').nth(1).map(str::len), Some(1));

    let body: serde_json::Value = client
        .get(format!("http://{addr}/"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["service"], "on-headers");

    shutdown.trigger();
}
