//! `ResponseHead` over the head of an `http::Response`.
//!
//! # Responsibilities
//! - Expose status and headers of `http::response::Parts` to listeners
//! - Commit the status line on `write_head`
//! - Carry a custom reason phrase to hyper via response extensions
//!
//! # Design Decisions
//! - `set_header` replaces every existing value of the name
//! - Invalid names/values surface as `HeadError`, never panic

use axum::http::{
    header::{InvalidHeaderName, InvalidHeaderValue},
    response::Parts,
    HeaderName, HeaderValue, Response, StatusCode,
};
use hyper::ext::ReasonPhrase;
use thiserror::Error;

use crate::intercept::{FieldValue, Head, ResponseHead};

/// Errors raised while editing a response head.
#[derive(Debug, Error)]
pub enum HeadError {
    #[error("invalid header name: {0}")]
    InvalidName(#[from] InvalidHeaderName),

    #[error("invalid value for header {name}: {source}")]
    InvalidValue {
        name: String,
        #[source]
        source: InvalidHeaderValue,
    },

    #[error("invalid reason phrase: {0:?}")]
    InvalidReason(String),
}

/// The head of a response that has not been sent yet.
#[derive(Debug)]
pub struct PartsHead {
    parts: Parts,
    writes: usize,
}

impl PartsHead {
    pub fn new(parts: Parts) -> Self {
        Self { parts, writes: 0 }
    }

    pub fn from_response<B>(response: Response<B>) -> (Self, B) {
        let (parts, body) = response.into_parts();
        (Self::new(parts), body)
    }

    pub fn parts(&self) -> &Parts {
        &self.parts
    }

    /// Number of times the head has been committed.
    pub fn writes(&self) -> usize {
        self.writes
    }

    /// The custom reason phrase currently carried by the response, if any.
    pub fn reason(&self) -> Option<&[u8]> {
        self.parts
            .extensions
            .get::<ReasonPhrase>()
            .map(ReasonPhrase::as_bytes)
    }

    pub fn into_response<B>(self, body: B) -> Response<B> {
        Response::from_parts(self.parts, body)
    }
}

impl ResponseHead for PartsHead {
    type Error = HeadError;

    fn status(&self) -> StatusCode {
        self.parts.status
    }

    fn set_status(&mut self, status: StatusCode) {
        self.parts.status = status;
    }

    fn set_header(&mut self, name: &str, value: FieldValue) -> Result<(), HeadError> {
        let name = HeaderName::from_bytes(name.as_bytes())?;
        let values = value
            .iter()
            .map(HeaderValue::from_str)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|source| HeadError::InvalidValue {
                name: name.as_str().to_string(),
                source,
            })?;

        self.parts.headers.remove(&name);
        for value in values {
            self.parts.headers.append(name.clone(), value);
        }
        Ok(())
    }

    fn write_head(&mut self, mut head: Head) -> Result<(), HeadError> {
        if let Some(headers) = head.take_headers() {
            headers.apply_to(self)?;
        }

        self.parts.status = head.status();
        match head.reason() {
            Some(reason) => {
                let phrase = ReasonPhrase::try_from(reason.to_string())
                    .map_err(|_| HeadError::InvalidReason(reason.to_string()))?;
                self.parts.extensions.insert(phrase);
            }
            None => {
                self.parts.extensions.remove::<ReasonPhrase>();
            }
        }

        self.writes += 1;
        Ok(())
    }
}
