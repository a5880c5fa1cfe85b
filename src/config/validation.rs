//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Header names and values must be sendable
//! - Bind address must parse
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ServerConfig → Result<(), Vec<ValidationError>>

use std::net::SocketAddr;

use axum::http::{HeaderName, HeaderValue};
use thiserror::Error;

use crate::config::schema::ServerConfig;

/// Largest number of fractional digits accepted for the response time.
pub const MAX_RESPONSE_TIME_DIGITS: usize = 9;

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("invalid bind address {0:?}")]
    BindAddress(String),

    #[error("invalid header name {0:?}")]
    HeaderName(String),

    #[error("invalid value for header {0:?}")]
    HeaderValue(String),

    #[error("response_time_digits must be at most {MAX_RESPONSE_TIME_DIGITS}, got {0}")]
    Digits(usize),
}

/// Check a parsed configuration, collecting every problem found.
pub fn validate_config(config: &ServerConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::BindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    let headers = &config.headers;
    if !headers.response_time_header.is_empty()
        && HeaderName::from_bytes(headers.response_time_header.as_bytes()).is_err()
    {
        errors.push(ValidationError::HeaderName(
            headers.response_time_header.clone(),
        ));
    }
    if headers.response_time_digits > MAX_RESPONSE_TIME_DIGITS {
        errors.push(ValidationError::Digits(headers.response_time_digits));
    }

    for (name, value) in &headers.static_headers {
        // Empty names are skipped when applied.
        if name.is_empty() {
            continue;
        }
        if HeaderName::from_bytes(name.as_bytes()).is_err() {
            errors.push(ValidationError::HeaderName(name.clone()));
        }
        if HeaderValue::from_str(value).is_err() {
            errors.push(ValidationError::HeaderValue(name.clone()));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
