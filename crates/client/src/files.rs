use serde::Deserialize;
use std::io::Read;

use crate::{Client, Fetched, Result, Transport};

const FILE_REFS_PAGE: usize = 1000;

/// A named pointer to a file, living in one folder
#[derive(Debug, Clone, Deserialize)]
pub struct FileRef {
    pub id: String,
    pub attributes: FileRefAttributes,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct FileRefAttributes {
    pub name: String,
    pub filesize: Option<u64>,
    pub mime_type: Option<String>,
}

impl FileRef {
    pub fn name(&self) -> &str {
        &self.attributes.name
    }
}

impl<T: Transport> Client<T> {
    /// List the files directly inside a folder
    pub fn file_refs(&self, folder_id: &str) -> Result<Fetched<Vec<FileRef>>> {
        self.get_all(&format!("/folders/{}/file-refs", folder_id), FILE_REFS_PAGE)
    }

    /// Start downloading a file's content
    pub fn file_content(&self, file_ref_id: &str) -> Fetched<Box<dyn Read>> {
        self.open(&format!("/file-refs/{}/content", file_ref_id))
    }
}
