//! Ready-made response head listeners.

use std::time::Instant;

use indexmap::IndexMap;

use crate::http::middleware::on_headers::BoxListener;
use crate::http::response::PartsHead;
use crate::intercept::{Headers, ResponseHead};

/// Stamps the time spent producing a response onto a header,
/// e.g. `X-Response-Time: 12.345ms`.
#[derive(Clone, Debug)]
pub struct ResponseTime {
    header: String,
    digits: usize,
}

impl ResponseTime {
    pub fn new(header: impl Into<String>, digits: usize) -> Self {
        Self {
            header: header.into(),
            digits,
        }
    }

    /// Start the clock. The returned listener measures up to the moment
    /// the head is written. A header already set by the handler is kept.
    pub fn start(&self) -> BoxListener {
        let started = Instant::now();
        let header = self.header.clone();
        let digits = self.digits;

        Box::new(move |res: &mut PartsHead| {
            if res.parts().headers.contains_key(header.as_str()) {
                return Ok(());
            }
            let elapsed = started.elapsed().as_secs_f64() * 1000.0;
            res.set_header(&header, format_millis(elapsed, digits).into())
        })
    }
}

impl Default for ResponseTime {
    fn default() -> Self {
        Self::new("X-Response-Time", 3)
    }
}

fn format_millis(millis: f64, digits: usize) -> String {
    format!("{millis:.digits$}ms")
}

/// Sets a fixed group of headers on every response.
#[derive(Clone, Debug, Default)]
pub struct StaticHeaders {
    headers: IndexMap<String, String>,
}

impl StaticHeaders {
    pub fn new(headers: IndexMap<String, String>) -> Self {
        Self { headers }
    }

    pub fn listener(&self) -> BoxListener {
        let headers = Headers::map(self.headers.clone());
        Box::new(move |res: &mut PartsHead| headers.apply_to(res))
    }
}
