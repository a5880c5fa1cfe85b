//! The response capability the interceptor wraps.

use axum::http::StatusCode;

use crate::intercept::head::{FieldValue, Head};

/// A response whose status line and headers have not left the process yet.
///
/// Implementors own the actual transmission; `write_head` is the moment
/// the head is committed. Errors are the implementor's own and are passed
/// through the interceptor untouched.
pub trait ResponseHead {
    type Error;

    fn status(&self) -> StatusCode;

    fn set_status(&mut self, status: StatusCode);

    /// Set a header, replacing every existing value under the same name.
    fn set_header(&mut self, name: &str, value: FieldValue) -> Result<(), Self::Error>;

    /// Commit the status line (and any headers carried by `head`).
    fn write_head(&mut self, head: Head) -> Result<(), Self::Error>;

    /// Run any one-shot listeners stacked beneath this response that have
    /// not fired yet, innermost first. Plain responses have none.
    fn fire_pending(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl<R> ResponseHead for &mut R
where
    R: ResponseHead + ?Sized,
{
    type Error = R::Error;

    fn status(&self) -> StatusCode {
        (**self).status()
    }

    fn set_status(&mut self, status: StatusCode) {
        (**self).set_status(status)
    }

    fn set_header(&mut self, name: &str, value: FieldValue) -> Result<(), Self::Error> {
        (**self).set_header(name, value)
    }

    fn write_head(&mut self, head: Head) -> Result<(), Self::Error> {
        (**self).write_head(head)
    }

    fn fire_pending(&mut self) -> Result<(), Self::Error> {
        (**self).fire_pending()
    }
}
