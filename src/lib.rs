//! Run a listener at the exact moment a response writes its head.
//!
//! [`OnHeaders`] wraps anything implementing [`ResponseHead`]. The first
//! call to `write_head` fires the listener, which may still change the
//! status and headers; the call is then forwarded to the wrapped response.
//!
//! ```
//! use std::convert::Infallible;
//! use axum::http::StatusCode;
//! use on_headers::{on_headers, FieldValue, Head, ResponseHead};
//!
//! #[derive(Default)]
//! struct Res {
//!     status: u16,
//!     headers: Vec<(String, FieldValue)>,
//!     sent: Vec<Head>,
//! }
//!
//! impl ResponseHead for Res {
//!     type Error = Infallible;
//!     fn status(&self) -> StatusCode {
//!         StatusCode::from_u16(self.status).unwrap_or(StatusCode::OK)
//!     }
//!     fn set_status(&mut self, status: StatusCode) {
//!         self.status = status.as_u16();
//!     }
//!     fn set_header(&mut self, name: &str, value: FieldValue) -> Result<(), Infallible> {
//!         self.headers.push((name.to_string(), value));
//!         Ok(())
//!     }
//!     fn write_head(&mut self, head: Head) -> Result<(), Infallible> {
//!         self.sent.push(head);
//!         Ok(())
//!     }
//! }
//!
//! let mut res = on_headers(Res::default(), |res: &mut Res| {
//!     res.set_header("x-powered-by", "on-headers".into())
//! });
//! res.write_head(Head::new(StatusCode::OK).with_reason("OK")).unwrap();
//!
//! let res = res.into_inner();
//! assert_eq!(res.headers.len(), 1);
//! assert_eq!(res.sent, vec![Head::new(StatusCode::OK).with_reason("OK")]);
//! ```

pub mod config;
pub mod http;
pub mod intercept;
pub mod lifecycle;
pub mod observability;

pub use config::ServerConfig;
pub use http::HttpServer;
pub use intercept::{on_headers, FieldValue, Head, Headers, InstallError, OnHeaders, ResponseHead};
pub use lifecycle::Shutdown;
