//! Structured description of a `write_head` call.
//!
//! A call carries a status code, an optional reason phrase and an optional
//! set of headers. The headers are never forwarded to the underlying
//! response: [`normalize`] applies them through `set_header` and hands back
//! a head that only carries the status line.

use axum::http::StatusCode;
use indexmap::IndexMap;

use crate::intercept::target::ResponseHead;

/// A header value: a single line or several lines under the same name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    One(String),
    Many(Vec<String>),
}

impl FieldValue {
    /// Iterate over every value line.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        let values: &[String] = match self {
            FieldValue::One(value) => std::slice::from_ref(value),
            FieldValue::Many(values) => values,
        };
        values.iter().map(String::as_str)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::One(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::One(value)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(values: Vec<String>) -> Self {
        FieldValue::Many(values)
    }
}

impl From<Vec<&str>> for FieldValue {
    fn from(values: Vec<&str>) -> Self {
        FieldValue::Many(values.into_iter().map(str::to_string).collect())
    }
}

/// Headers passed along with a `write_head` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Headers {
    /// Ordered name/value pairs. Applied in order, so a later pair wins
    /// over an earlier one with the same name.
    Pairs(Vec<(String, FieldValue)>),
    /// Name to value mapping, applied in insertion order.
    /// Entries with an empty name are skipped.
    Map(IndexMap<String, FieldValue>),
}

impl Headers {
    pub fn pairs<I, N, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (N, V)>,
        N: Into<String>,
        V: Into<FieldValue>,
    {
        Headers::Pairs(
            pairs
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        )
    }

    pub fn map<I, N, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (N, V)>,
        N: Into<String>,
        V: Into<FieldValue>,
    {
        Headers::Map(
            entries
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        )
    }

    /// Apply every header onto `target` via `set_header`.
    pub fn apply_to<T>(self, target: &mut T) -> Result<(), T::Error>
    where
        T: ResponseHead + ?Sized,
    {
        match self {
            Headers::Pairs(pairs) => {
                for (name, value) in pairs {
                    tracing::trace!(header = %name, "applying header");
                    target.set_header(&name, value)?;
                }
            }
            Headers::Map(entries) => {
                for (name, value) in entries {
                    if name.is_empty() {
                        continue;
                    }
                    tracing::trace!(header = %name, "applying header");
                    target.set_header(&name, value)?;
                }
            }
        }
        Ok(())
    }
}

/// Which of the accepted call shapes a [`Head`] represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// `(code)`
    Status,
    /// `(code, reason)`
    StatusReason,
    /// `(code, headers)`
    StatusHeaders,
    /// `(code, reason, headers)`
    StatusReasonHeaders,
}

impl Shape {
    /// Position of the headers argument in the positional form of the call.
    /// Everything before it is forwarded, the headers never are.
    pub fn boundary_index(self) -> usize {
        match self {
            Shape::Status | Shape::StatusHeaders => 1,
            Shape::StatusReason | Shape::StatusReasonHeaders => 2,
        }
    }

    pub fn has_reason(self) -> bool {
        matches!(self, Shape::StatusReason | Shape::StatusReasonHeaders)
    }

    pub fn has_headers(self) -> bool {
        matches!(self, Shape::StatusHeaders | Shape::StatusReasonHeaders)
    }
}

/// A `write_head` call: status line plus optional headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Head {
    status: StatusCode,
    reason: Option<String>,
    headers: Option<Headers>,
}

impl Head {
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            reason: None,
            headers: None,
        }
    }

    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    pub fn with_headers(mut self, headers: Headers) -> Self {
        self.headers = Some(headers);
        self
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn reason(&self) -> Option<&str> {
        self.reason.as_deref()
    }

    pub fn headers(&self) -> Option<&Headers> {
        self.headers.as_ref()
    }

    pub fn shape(&self) -> Shape {
        match (self.reason.is_some(), self.headers.is_some()) {
            (false, false) => Shape::Status,
            (true, false) => Shape::StatusReason,
            (false, true) => Shape::StatusHeaders,
            (true, true) => Shape::StatusReasonHeaders,
        }
    }

    /// Split off the headers, leaving only the status line.
    pub fn take_headers(&mut self) -> Option<Headers> {
        self.headers.take()
    }
}

/// Apply a call's status and headers onto `target` and return the head
/// that should be forwarded (status and reason only).
///
/// The status is written on every call, before any listener gets to see it.
pub fn normalize<T>(target: &mut T, mut head: Head) -> Result<Head, T::Error>
where
    T: ResponseHead + ?Sized,
{
    let headers = head.take_headers();
    target.set_status(head.status());
    if let Some(headers) = headers {
        headers.apply_to(target)?;
    }
    Ok(head)
}
