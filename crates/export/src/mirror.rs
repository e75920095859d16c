//! Mirrors a course's folder tree to disk
use anyhow::{Context, Result};
use camino::{Utf8Component, Utf8Path, Utf8PathBuf};
use log::{debug, info, warn};
use std::{
    fmt,
    fs::File,
    io,
    ops::AddAssign,
};
use studip_client::{files::FileRef, folders::Folder, Client, Fetched, Transport};

/// Where a folder sits, relative to its course's root folder
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FolderPath(Vec<String>);

impl FolderPath {
    pub fn root() -> Self {
        Self::default()
    }

    /// The path of a child folder called `name`
    pub fn join(&self, name: &str) -> Self {
        let mut segments = self.0.clone();
        segments.push(name.to_string());
        Self(segments)
    }

    /// Resolve this path under `base`. The result never leaves `base`.
    pub fn under(&self, base: &Utf8Path) -> Utf8PathBuf {
        let mut path = base.to_owned();
        for segment in self.0.iter() {
            push_relative(&mut path, segment);
        }
        path
    }
}

/// Push `name` onto `path`, keeping only its plain components.
///
/// Names are used verbatim, so a `/` inside one still makes extra directories, but roots,
/// drive prefixes and `..` are dropped. Returns false if nothing was left to push.
fn push_relative(path: &mut Utf8PathBuf, name: &str) -> bool {
    let mut pushed = false;
    for component in Utf8Path::new(name).components() {
        if let Utf8Component::Normal(c) = component {
            path.push(c);
            pushed = true;
        }
    }
    pushed
}

impl fmt::Display for FolderPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}", self.0.join("/"))
    }
}

/// Make a semester or course title safe to use as a single directory name
pub fn sanitise(title: &str) -> String {
    title.replace('/', "_")
}

/// What happened while mirroring a course
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MirrorStats {
    pub files: usize,
    pub bytes: u64,
    /// Folders whose files or subfolders we couldn't list
    pub skipped_listings: usize,
    /// Files we couldn't download
    pub skipped_files: usize,
}

impl AddAssign for MirrorStats {
    fn add_assign(&mut self, other: Self) {
        self.files += other.files;
        self.bytes += other.bytes;
        self.skipped_listings += other.skipped_listings;
        self.skipped_files += other.skipped_files;
    }
}

/// Downloads every file of one course into `<output>/<semester>/<course>/`
pub struct Mirror<'a, T> {
    client: &'a Client<T>,
    dest: Utf8PathBuf,
    stats: MirrorStats,
}

impl<'a, T: Transport> Mirror<'a, T> {
    pub fn new(client: &'a Client<T>, output: &Utf8Path, semester: &str, course: &str) -> Self {
        Self {
            client,
            dest: output.join(sanitise(semester)).join(sanitise(course)),
            stats: MirrorStats::default(),
        }
    }

    /// Mirror the course with the given ID. Courses without a file area are skipped.
    pub fn run(mut self, course_id: &str) -> Result<MirrorStats> {
        let Some(root) = self.client.root_folder(course_id)? else {
            info!("course {} has no root folder, skipping", course_id);
            return Ok(self.stats);
        };

        self.folder(&root, FolderPath::root())?;

        Ok(self.stats)
    }

    fn folder(&mut self, folder: &Folder, path: FolderPath) -> Result<()> {
        match self.client.file_refs(&folder.id)? {
            Fetched::Data(refs) => {
                for file in refs.iter() {
                    self.file(file, &path)?;
                }
            }
            Fetched::NotFound => {
                debug!("can't list files in {} ({})", path, folder.id);
                self.stats.skipped_listings += 1;
            }
            Fetched::Failed(e) => {
                warn!("can't list files in {} ({}): {}", path, folder.id, e);
                self.stats.skipped_listings += 1;
            }
        }

        match self.client.subfolders(&folder.id)? {
            Fetched::Data(children) => {
                for child in children.iter() {
                    self.folder(child, path.join(child.name()))?;
                }
            }
            Fetched::NotFound => {
                debug!("can't list subfolders of {} ({})", path, folder.id);
                self.stats.skipped_listings += 1;
            }
            Fetched::Failed(e) => {
                warn!("can't list subfolders of {} ({}): {}", path, folder.id, e);
                self.stats.skipped_listings += 1;
            }
        }

        Ok(())
    }

    fn file(&mut self, file: &FileRef, path: &FolderPath) -> Result<()> {
        let dir = path.under(&self.dest);
        let mut dest = dir.clone();
        if !push_relative(&mut dest, file.name()) {
            warn!("{:?} in {} isn't a usable file name, skipping", file.name(), path);
            self.stats.skipped_files += 1;
            return Ok(());
        }

        let mut body = match self.client.file_content(&file.id) {
            Fetched::Data(b) => b,
            Fetched::NotFound => {
                warn!("{} in {} has no content, skipping", file.name(), path);
                self.stats.skipped_files += 1;
                return Ok(());
            }
            Fetched::Failed(e) => {
                warn!("couldn't download {} in {}: {}", file.name(), path, e);
                self.stats.skipped_files += 1;
                return Ok(());
            }
        };

        let parent = dest.parent().unwrap_or(dir.as_path());
        std::fs::create_dir_all(parent).with_context(|| format!("error creating {}", parent))?;

        let mut out = File::create(&dest).with_context(|| format!("error creating {}", dest))?;
        let bytes = io::copy(&mut body, &mut out).with_context(|| format!("error writing {}", dest))?;
        debug!("downloaded {} ({} bytes)", dest, bytes);

        self.stats.files += 1;
        self.stats.bytes += bytes;

        Ok(())
    }
}
