use log::debug;
use reqwest::{blocking::Response, StatusCode};
use serde_json::Value;
use std::io::Read;

use crate::{Credentials, Error, Result};

/// Pagination parameters, sent as `page[offset]` and `page[limit]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub offset: usize,
    pub limit: usize,
}

/// The outcome of a single request.
///
/// Callers decide per case whether a missing or failed resource means "skip" or "abort".
#[derive(Debug)]
pub enum Fetched<T> {
    /// The request succeeded
    Data(T),

    /// The server answered 404
    NotFound,

    /// Any other non-success status, or a network error
    Failed(Error),
}

impl<T> Fetched<T> {
    /// Treat anything but data as an error
    pub fn into_result(self, route: &str) -> Result<T> {
        match self {
            Fetched::Data(d) => Ok(d),
            Fetched::NotFound => Err(Error::NotFound(route.to_string())),
            Fetched::Failed(e) => Err(e),
        }
    }

    /// Treat anything but data as "nothing here"
    pub fn data(self) -> Option<T> {
        match self {
            Fetched::Data(d) => Some(d),
            _ => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Fetched<U> {
        match self {
            Fetched::Data(d) => Fetched::Data(f(d)),
            Fetched::NotFound => Fetched::NotFound,
            Fetched::Failed(e) => Fetched::Failed(e),
        }
    }

    pub(crate) fn try_map<U>(self, f: impl FnOnce(T) -> Result<U>) -> Result<Fetched<U>> {
        Ok(match self {
            Fetched::Data(d) => Fetched::Data(f(d)?),
            Fetched::NotFound => Fetched::NotFound,
            Fetched::Failed(e) => Fetched::Failed(e),
        })
    }
}

/// Issues GET requests against API routes
pub trait Transport {
    /// Fetch a route and decode its JSON body.
    ///
    /// A successful response that isn't JSON is an error, not a [`Fetched::Failed`].
    fn get_json(&self, route: &str, page: Option<Page>) -> Result<Fetched<Value>>;

    /// Fetch a route, returning its body as a stream
    fn open(&self, route: &str) -> Fetched<Box<dyn Read>>;
}

/// Talks to the real API over HTTPS, with basic auth
pub struct HttpTransport {
    http: reqwest::blocking::Client,
    base: String,
    creds: Credentials,
}

impl HttpTransport {
    pub fn new(base: &str, creds: Credentials) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()?;

        Ok(Self {
            http,
            base: base.trim_end_matches('/').to_string(),
            creds,
        })
    }

    fn send(&self, route: &str, page: Option<Page>) -> Fetched<Response> {
        let url = format!("{}{}", self.base, route);
        let mut req = self
            .http
            .get(&url)
            .basic_auth(&self.creds.0, Some(self.creds.1.as_ref()));
        if let Some(page) = page {
            debug!("fetching {} (offset {}, limit {})", url, page.offset, page.limit);
            req = req.query(&[("page[offset]", page.offset), ("page[limit]", page.limit)]);
        } else {
            debug!("fetching {}", url);
        }

        match req.send() {
            Err(e) => Fetched::Failed(e.into()),
            Ok(resp) if resp.status() == StatusCode::NOT_FOUND => Fetched::NotFound,
            Ok(resp) if !resp.status().is_success() => Fetched::Failed(Error::Status {
                route: route.to_string(),
                status: resp.status().as_u16(),
            }),
            Ok(resp) => Fetched::Data(resp),
        }
    }
}

impl Transport for HttpTransport {
    fn get_json(&self, route: &str, page: Option<Page>) -> Result<Fetched<Value>> {
        let resp = match self.send(route, page) {
            Fetched::Data(r) => r,
            Fetched::NotFound => return Ok(Fetched::NotFound),
            Fetched::Failed(e) => return Ok(Fetched::Failed(e)),
        };

        let text = match resp.text() {
            Ok(t) => t,
            Err(e) => return Ok(Fetched::Failed(e.into())),
        };
        debug!("response: {}", text);

        Ok(Fetched::Data(serde_json::from_str(&text)?))
    }

    fn open(&self, route: &str) -> Fetched<Box<dyn Read>> {
        self.send(route, None)
            .map(|resp| Box::new(resp) as Box<dyn Read>)
    }
}
