use log::{debug, info};
use serde::Deserialize;

use crate::{Client, Fetched, Result, Transport};

const COURSE_FOLDERS_PAGE: usize = 100;
const SUBFOLDERS_PAGE: usize = 1000;

#[derive(Debug, Clone, Deserialize)]
pub struct Folder {
    pub id: String,
    pub attributes: FolderAttributes,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct FolderAttributes {
    pub folder_type: FolderType,
    pub name: String,
}

/// What kind of folder this is. We only care about telling the root apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum FolderType {
    RootFolder,
    StandardFolder,
    #[serde(other)]
    Other,
}

impl Folder {
    pub fn name(&self) -> &str {
        &self.attributes.name
    }

    pub fn is_root(&self) -> bool {
        self.attributes.folder_type == FolderType::RootFolder
    }
}

impl<T: Transport> Client<T> {
    /// Find the top-level folder of a course's file area.
    ///
    /// Gives `None` if there isn't one, or we can't list the course's folders.
    pub fn root_folder(&self, course_id: &str) -> Result<Option<Folder>> {
        let route = format!("/courses/{}/folders", course_id);
        match self.get_all::<Folder>(&route, COURSE_FOLDERS_PAGE)? {
            Fetched::Data(folders) => Ok(folders.into_iter().find(Folder::is_root)),
            Fetched::NotFound => {
                debug!("course {} has no folders", course_id);
                Ok(None)
            }
            Fetched::Failed(e) => {
                info!("couldn't list folders of course {}: {}", course_id, e);
                Ok(None)
            }
        }
    }

    /// List the direct children of a folder
    pub fn subfolders(&self, folder_id: &str) -> Result<Fetched<Vec<Folder>>> {
        self.get_all(&format!("/folders/{}/folders", folder_id), SUBFOLDERS_PAGE)
    }
}
