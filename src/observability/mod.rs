//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! intercept/ and http/ produce:
//!     → tracing events (listener fired, status reconciled, listener failed)
//!
//! Consumers:
//!     → logging.rs (stdout, pretty or JSON)
//! ```

pub mod logging;

pub use logging::init_logging;
