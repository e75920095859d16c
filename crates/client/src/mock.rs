//! An in-memory [`Transport`], serving canned responses by route
use serde_json::{json, Value};
use std::{
    cell::RefCell,
    collections::HashMap,
    io::{Cursor, Read},
};

use crate::{Error, Fetched, Page, Result, Transport};

/// Serves registered JSON documents and file bodies; anything else is a 404.
///
/// Collections registered with [`MockTransport::with_data`] are sliced by the requested page,
/// and get a `meta.page.total` like the real API.
#[derive(Debug, Default)]
pub struct MockTransport {
    documents: HashMap<String, Value>,
    bodies: HashMap<String, String>,
    contents: HashMap<String, Vec<u8>>,
    statuses: HashMap<String, u16>,
    requests: RefCell<Vec<(String, Option<Page>)>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve a whole response document at `route`
    pub fn with_document(mut self, route: impl Into<String>, doc: Value) -> Self {
        self.documents.insert(route.into(), doc);
        self
    }

    /// Serve `{"data": data}` at `route`
    pub fn with_data(self, route: impl Into<String>, data: Value) -> Self {
        self.with_document(route, json!({ "data": data }))
    }

    /// Serve a raw body, which must still parse as JSON, at `route`
    pub fn with_body(mut self, route: impl Into<String>, body: impl Into<String>) -> Self {
        self.bodies.insert(route.into(), body.into());
        self
    }

    /// Serve a binary body at `route`
    pub fn with_content(mut self, route: impl Into<String>, body: impl Into<Vec<u8>>) -> Self {
        self.contents.insert(route.into(), body.into());
        self
    }

    /// Answer `route` with the given HTTP status
    pub fn with_status(mut self, route: impl Into<String>, status: u16) -> Self {
        self.statuses.insert(route.into(), status);
        self
    }

    /// Every request made so far, in order
    pub fn requests(&self) -> Vec<(String, Option<Page>)> {
        self.requests.borrow().clone()
    }
}

fn failed<T>(route: &str, status: u16) -> Fetched<T> {
    match status {
        404 => Fetched::NotFound,
        status => Fetched::Failed(Error::Status {
            route: route.to_string(),
            status,
        }),
    }
}

impl Transport for MockTransport {
    fn get_json(&self, route: &str, page: Option<Page>) -> Result<Fetched<Value>> {
        self.requests.borrow_mut().push((route.to_string(), page));
        if let Some(status) = self.statuses.get(route) {
            return Ok(failed(route, *status));
        }
        let mut doc = match (self.documents.get(route), self.bodies.get(route)) {
            (Some(doc), _) => doc.clone(),
            (None, Some(body)) => serde_json::from_str(body)?,
            (None, None) => return Ok(Fetched::NotFound),
        };

        let total = match (page, doc.get_mut("data")) {
            (Some(page), Some(Value::Array(items))) => {
                let total = items.len();
                *items = items
                    .iter()
                    .skip(page.offset)
                    .take(page.limit)
                    .cloned()
                    .collect();
                Some((page, total))
            }
            _ => None,
        };
        if let Some((page, total)) = total {
            doc["meta"] = json!({
                "page": { "offset": page.offset, "limit": page.limit, "total": total }
            });
        }

        Ok(Fetched::Data(doc))
    }

    fn open(&self, route: &str) -> Fetched<Box<dyn Read>> {
        self.requests.borrow_mut().push((route.to_string(), None));
        if let Some(status) = self.statuses.get(route) {
            return failed(route, *status);
        }

        match self.contents.get(route) {
            Some(body) => Fetched::Data(Box::new(Cursor::new(body.clone()))),
            None => Fetched::NotFound,
        }
    }
}
