//! Header-send interception.
//!
//! # Data Flow
//! ```text
//! caller → OnHeaders::write_head(head)
//!     → head.rs (status set, headers applied via set_header)
//!     → first call only: stacked listeners fire, innermost first
//!     → status re-read; a changed code drops the reason phrase
//!     → inner.write_head(status line only)
//! ```
//!
//! # Design Decisions
//! - Decorator over a capability trait instead of patching a method slot
//! - Listener receives the wrapped response as an explicit `&mut` argument
//! - Headers are consumed through `set_header` and never forwarded
//! - No locking: a response is driven from one task at a time

pub mod dispatch;
pub mod error;
pub mod head;
pub mod target;

pub use dispatch::{on_headers, Builder, OnHeaders};
pub use error::InstallError;
pub use head::{normalize, FieldValue, Head, Headers, Shape};
pub use target::ResponseHead;
