//! Uniform access to on-disk dataset sources.
//!
//! A [`DatasetInput`] hides whether region files live inside a zip archive
//! (the layout of the public dump exports) or sit unarchived in a plain
//! directory. Consumers ask for files by curated name, e.g. `CA.txt`.

use std::{
    collections::{BTreeMap, BTreeSet},
    fs::{self, File},
    io::Read,
    path::{Path, PathBuf},
};

use tempfile::NamedTempFile;
use tracing::debug;
use zip::ZipArchive;

use crate::error::{DatasetError, Result};

/// A set of named data files backed by a zip archive or a directory.
#[derive(Debug)]
pub struct DatasetInput {
    backend: Backend,
    // Keeps a downloaded archive alive for as long as this input reads it.
    _download: Option<NamedTempFile>,
}

#[derive(Debug)]
enum Backend {
    Archive {
        archive: ZipArchive<File>,
        entries: BTreeMap<String, usize>,
    },
    Directory {
        root: PathBuf,
        files: BTreeSet<String>,
    },
}

impl DatasetInput {
    /// Open a dataset at `path`: a directory is read as unarchived region
    /// files, a regular file as a zip archive.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.is_dir() {
            Self::from_directory(path)
        } else if path.is_file() {
            Self::from_archive_file(path)
        } else {
            Err(DatasetError::PathNotFound(path.to_path_buf()))
        }
    }

    /// Download a zip archive and open it, taking ownership of the backing
    /// temporary file.
    #[cfg(feature = "download_data")]
    pub fn from_url(url: &str) -> Result<Self> {
        Self::from_download(crate::fetch::fetch_archive(url)?)
    }

    /// Open an already-downloaded archive, keeping its temporary file alive
    /// for the lifetime of this input.
    #[cfg(feature = "download_data")]
    pub fn from_download(download: NamedTempFile) -> Result<Self> {
        let mut input = Self::from_archive_file(download.path())?;
        input._download = Some(download);
        Ok(input)
    }

    fn from_directory(root: &Path) -> Result<Self> {
        let mut files = BTreeSet::new();
        for dir_entry in fs::read_dir(root)? {
            let dir_entry = dir_entry?;
            if dir_entry.file_type()?.is_file() {
                files.insert(dir_entry.file_name().to_string_lossy().into_owned());
            }
        }
        debug!(root = ?root, files = files.len(), "Opened directory dataset");

        Ok(Self {
            backend: Backend::Directory {
                root: root.to_path_buf(),
                files,
            },
            _download: None,
        })
    }

    fn from_archive_file(path: &Path) -> Result<Self> {
        let mut archive = ZipArchive::new(File::open(path)?)?;

        let mut entries = BTreeMap::new();
        for index in 0..archive.len() {
            let entry = archive.by_index(index)?;
            if entry.is_dir() {
                continue;
            }
            let name = curate_entry_name(entry.name());
            if name.is_empty() {
                continue;
            }
            entries.entry(name).or_insert(index);
        }
        debug!(path = ?path, entries = entries.len(), "Opened archive dataset");

        Ok(Self {
            backend: Backend::Archive { archive, entries },
            _download: None,
        })
    }

    /// Curated names of the files this input can open, sorted.
    #[must_use]
    pub fn file_names(&self) -> Vec<&str> {
        match &self.backend {
            Backend::Archive { entries, .. } => entries.keys().map(String::as_str).collect(),
            Backend::Directory { files, .. } => files.iter().map(String::as_str).collect(),
        }
    }

    /// Whether `name` is one of this input's files.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        match &self.backend {
            Backend::Archive { entries, .. } => entries.contains_key(name),
            Backend::Directory { files, .. } => files.contains(name),
        }
    }

    /// A reader over the bytes of one named file.
    pub fn open(&mut self, name: &str) -> Result<Box<dyn Read + '_>> {
        match &mut self.backend {
            Backend::Archive { archive, entries } => {
                let index = *entries
                    .get(name)
                    .ok_or_else(|| DatasetError::FileNotFound(name.to_owned()))?;
                Ok(Box::new(archive.by_index(index)?))
            }
            Backend::Directory { root, files } => {
                if !files.contains(name) {
                    return Err(DatasetError::FileNotFound(name.to_owned()));
                }
                Ok(Box::new(File::open(root.join(name))?))
            }
        }
    }

    /// Read one named file fully into a string.
    pub fn read_to_string(&mut self, name: &str) -> Result<String> {
        let mut contents = String::new();
        self.open(name)?.read_to_string(&mut contents)?;
        Ok(contents)
    }
}

/// Strip any leading directory segment (up to the first `/`) so that nested
/// archive layouts and flat ones expose the same names.
fn curate_entry_name(raw: &str) -> String {
    let name = raw.find('/').map_or(raw, |slash| &raw[slash + 1..]);
    name.trim().to_owned()
}
