mod auth;
pub mod course;
mod document;
pub mod files;
pub mod folders;
pub mod membership;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
pub mod semesters;
mod transport;
pub mod users;

pub use auth::{Credentials, Password};
pub use document::{Relationship, ResourceIdentifier};
pub use transport::{Fetched, HttpTransport, Page, Transport};

use document::Document;
use log::debug;
use serde::de::DeserializeOwned;
use std::io::Read;
use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

pub const STUDIP_API_BASE: &str = "https://studip.uni-osnabrueck.de/jsonapi.php/v1";

/// A client, for using the Stud.IP JSON API
pub struct Client<T = HttpTransport> {
    transport: T,
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("http error: {}", .0)]
    HTTPError(#[from] reqwest::Error),

    #[error("{} responded with status {}", .route, .status)]
    Status { route: String, status: u16 },

    #[error("{} does not exist or is not visible to us", .0)]
    NotFound(String),

    #[error("io error: {}", .0)]
    IOError(#[from] std::io::Error),

    #[error("serde error: {}", .0)]
    SerdeError(#[from] serde_json::Error),
}

impl Client {
    /// Create a client talking to the API at `base`, authenticating every request with `creds`
    pub fn connect(base: &str, creds: Credentials) -> Result<Self> {
        Ok(Self::new(HttpTransport::new(base, creds)?))
    }
}

impl<T: Transport> Client<T> {
    pub fn new(transport: T) -> Self {
        Client { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Fetch a single, unpaginated document and extract its `data`
    pub(crate) fn get<R: DeserializeOwned>(&self, route: &str) -> Result<Fetched<R>> {
        self.transport
            .get_json(route, None)?
            .try_map(|v| Ok(serde_json::from_value::<Document<R>>(v)?.data))
    }

    /// Fetch every entry of a paginated collection, `limit` entries at a time
    pub(crate) fn get_all<R: DeserializeOwned>(
        &self,
        route: &str,
        limit: usize,
    ) -> Result<Fetched<Vec<R>>> {
        let mut items = Vec::new();
        let mut offset = 0;
        loop {
            let doc = match self.transport.get_json(route, Some(Page { offset, limit }))? {
                Fetched::Data(v) => serde_json::from_value::<Document<Vec<R>>>(v)?,
                Fetched::NotFound => return Ok(Fetched::NotFound),
                Fetched::Failed(e) => return Ok(Fetched::Failed(e)),
            };

            let received = doc.data.len();
            items.extend(doc.data);
            offset += received;

            match doc.meta.and_then(|m| m.page) {
                Some(page) if received > 0 && offset < page.total => {
                    debug!("{}: have {} of {} entries", route, offset, page.total);
                }
                _ => break,
            }
        }

        Ok(Fetched::Data(items))
    }

    /// Open a binary content route for streaming
    pub(crate) fn open(&self, route: &str) -> Fetched<Box<dyn Read>> {
        self.transport.open(route)
    }
}
