//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Signals (signals.rs):
//!     SIGINT → Shutdown::trigger
//!
//! Shutdown (shutdown.rs):
//!     trigger → server stops accepting → drains connections → exit
//! ```

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
