//! HTTP integration of the header-send interceptor.
//!
//! # Data Flow
//! ```text
//! request
//!     → middleware/on_headers.rs (build per-request listener)
//!     → handler produces Response
//!     → response.rs (PartsHead over the response parts)
//!     → intercept::OnHeaders fires the listener, commits the head
//!     → Send to client
//! ```

pub mod middleware;
pub mod response;
pub mod server;

pub use middleware::{OnHeadersLayer, OnHeadersService};
pub use response::{HeadError, PartsHead};
pub use server::HttpServer;
