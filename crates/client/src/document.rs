//! The JSON:API envelope every response comes wrapped in
use serde::Deserialize;

/// A top-level response document
#[derive(Debug, Deserialize)]
pub(crate) struct Document<T> {
    pub data: T,
    #[serde(default)]
    pub meta: Option<Meta>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Meta {
    #[serde(default)]
    pub page: Option<PageMeta>,
}

/// Pagination info attached to collection responses
#[derive(Debug, Deserialize)]
pub(crate) struct PageMeta {
    pub total: usize,
}

/// A to-one relationship, pointing at another resource
#[derive(Debug, Clone, Deserialize)]
pub struct Relationship {
    pub data: ResourceIdentifier,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResourceIdentifier {
    pub id: String,
}
