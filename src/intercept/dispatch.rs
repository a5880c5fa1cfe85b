//! One-shot listener fired right before a response writes its head.
//!
//! [`OnHeaders`] wraps any [`ResponseHead`] and implements it again by
//! delegation. The first `write_head` call runs the listener; every call
//! (first or not) still applies its status and headers and reaches the
//! wrapped response exactly once.
//!
//! Wrapping an `OnHeaders` in another `OnHeaders` stacks listeners. They
//! fire in the order they were attached: the innermost first.

use std::fmt;

use axum::http::StatusCode;

use crate::intercept::error::InstallError;
use crate::intercept::head::{normalize, FieldValue, Head};
use crate::intercept::target::ResponseHead;

/// Install `listener` on `target`.
pub fn on_headers<T, F>(target: T, listener: F) -> OnHeaders<T, F>
where
    T: ResponseHead,
    F: FnOnce(&mut T) -> Result<(), T::Error>,
{
    OnHeaders::new(target, listener)
}

/// A response decorated with a listener that fires once, just before the
/// head is written.
pub struct OnHeaders<T, F> {
    inner: T,
    /// `None` once the listener has fired.
    listener: Option<F>,
}

impl<T, F> OnHeaders<T, F>
where
    T: ResponseHead,
    F: FnOnce(&mut T) -> Result<(), T::Error>,
{
    pub fn new(inner: T, listener: F) -> Self {
        Self {
            inner,
            listener: Some(listener),
        }
    }

    /// Start an install whose arguments are checked at the end.
    pub fn builder() -> Builder<T, F> {
        Builder::default()
    }
}

impl<T, F> OnHeaders<T, F> {
    pub fn get_ref(&self) -> &T {
        &self.inner
    }

    pub fn into_inner(self) -> T {
        self.inner
    }

    pub fn has_fired(&self) -> bool {
        self.listener.is_none()
    }
}

impl<T, F> fmt::Debug for OnHeaders<T, F>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OnHeaders")
            .field("inner", &self.inner)
            .field("fired", &self.has_fired())
            .finish()
    }
}

impl<T, F> ResponseHead for OnHeaders<T, F>
where
    T: ResponseHead,
    F: FnOnce(&mut T) -> Result<(), T::Error>,
{
    type Error = T::Error;

    fn status(&self) -> StatusCode {
        self.inner.status()
    }

    fn set_status(&mut self, status: StatusCode) {
        self.inner.set_status(status)
    }

    fn set_header(&mut self, name: &str, value: FieldValue) -> Result<(), Self::Error> {
        self.inner.set_header(name, value)
    }

    fn write_head(&mut self, head: Head) -> Result<(), Self::Error> {
        let shape = head.shape();
        let mut forwarded = normalize(&mut self.inner, head)?;

        if !self.has_fired() {
            // An inner failure leaves this listener pending for the next call.
            self.inner.fire_pending()?;
        }

        // Taken before the call so a re-entrant write_head cannot fire it twice.
        if let Some(listener) = self.listener.take() {
            tracing::debug!(
                status = %forwarded.status(),
                shape = ?shape,
                "Firing on-headers listener"
            );
            listener(&mut self.inner)?;

            let status = self.inner.status();
            if status != forwarded.status() {
                tracing::debug!(
                    from = %forwarded.status(),
                    to = %status,
                    "Listener changed status code, dropping reason phrase"
                );
                forwarded = Head::new(status);
            }
        }

        self.inner.write_head(forwarded)
    }

    fn fire_pending(&mut self) -> Result<(), Self::Error> {
        self.inner.fire_pending()?;
        if let Some(listener) = self.listener.take() {
            tracing::debug!(status = %self.inner.status(), "Firing stacked on-headers listener");
            listener(&mut self.inner)?;
        }
        Ok(())
    }
}

/// Collects a target and a listener, rejecting the install if either is
/// missing. Nothing is wrapped until [`Builder::install`] succeeds.
pub struct Builder<T, F> {
    target: Option<T>,
    listener: Option<F>,
}

impl<T, F> Default for Builder<T, F> {
    fn default() -> Self {
        Self {
            target: None,
            listener: None,
        }
    }
}

impl<T, F> fmt::Debug for Builder<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Builder")
            .field("target", &self.target.is_some())
            .field("listener", &self.listener.is_some())
            .finish()
    }
}

impl<T, F> Builder<T, F>
where
    T: ResponseHead,
    F: FnOnce(&mut T) -> Result<(), T::Error>,
{
    pub fn target(mut self, target: T) -> Self {
        self.target = Some(target);
        self
    }

    pub fn listener(mut self, listener: F) -> Self {
        self.listener = Some(listener);
        self
    }

    /// Wrap the target. Fails without wrapping anything when either part
    /// is missing; an owned target is dropped with the builder, so pass
    /// `&mut` to keep it in every case.
    pub fn install(self) -> Result<OnHeaders<T, F>, InstallError> {
        let target = self.target.ok_or(InstallError::MissingTarget)?;
        let listener = self.listener.ok_or(InstallError::MissingListener)?;
        Ok(OnHeaders::new(target, listener))
    }
}
