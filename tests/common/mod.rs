//! Shared utilities for integration tests.

#![allow(dead_code)]

use std::net::SocketAddr;

use axum::http::StatusCode;
use indexmap::IndexMap;
use tokio::net::TcpListener;

use on_headers::{FieldValue, Head, HttpServer, ResponseHead, ServerConfig, Shutdown};

/// Error raised by [`RecordingResponse`] when told to fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestError(pub &'static str);

/// Everything a [`RecordingResponse`] was asked to do, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    SetHeader(String, FieldValue),
    WriteHead(Head),
}

/// A response that records calls instead of sending anything.
#[derive(Debug)]
pub struct RecordingResponse {
    pub status: StatusCode,
    pub headers: IndexMap<String, FieldValue>,
    pub calls: Vec<Call>,
    pub fail_header: Option<&'static str>,
    pub fail_write: bool,
}

impl Default for RecordingResponse {
    fn default() -> Self {
        Self {
            status: StatusCode::OK,
            headers: IndexMap::new(),
            calls: Vec::new(),
            fail_header: None,
            fail_write: false,
        }
    }
}

impl RecordingResponse {
    /// Heads that reached the underlying `write_head`.
    pub fn written(&self) -> Vec<Head> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                Call::WriteHead(head) => Some(head.clone()),
                Call::SetHeader(..) => None,
            })
            .collect()
    }

    /// Names passed to `set_header`, in call order.
    pub fn header_calls(&self) -> Vec<(String, FieldValue)> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                Call::SetHeader(name, value) => Some((name.clone(), value.clone())),
                Call::WriteHead(_) => None,
            })
            .collect()
    }
}

impl ResponseHead for RecordingResponse {
    type Error = TestError;

    fn status(&self) -> StatusCode {
        self.status
    }

    fn set_status(&mut self, status: StatusCode) {
        self.status = status;
    }

    fn set_header(&mut self, name: &str, value: FieldValue) -> Result<(), TestError> {
        if self.fail_header == Some(name) {
            return Err(TestError("set_header"));
        }
        self.calls.push(Call::SetHeader(name.to_string(), value.clone()));
        self.headers.insert(name.to_string(), value);
        Ok(())
    }

    fn write_head(&mut self, head: Head) -> Result<(), TestError> {
        if self.fail_write {
            return Err(TestError("write_head"));
        }
        self.calls.push(Call::WriteHead(head));
        Ok(())
    }
}

/// Start the demo server on an ephemeral port.
pub async fn start_server(config: ServerConfig) -> (SocketAddr, Shutdown) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config);
    let stop = shutdown.wait();
    tokio::spawn(async move {
        let _ = server.run(listener, stop).await;
    });

    (addr, shutdown)
}
