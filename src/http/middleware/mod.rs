//! Response middleware built on the header-send interceptor.

pub mod listeners;
pub mod on_headers;

pub use listeners::{ResponseTime, StaticHeaders};
pub use on_headers::{write_head, BoxListener, OnHeadersLayer, OnHeadersService};
