//! Staged File Tree
//!
//! In-memory overlay of file creations and edits over a workspace directory.
//! Reads consult the overlay first, then fall through to disk; nothing touches
//! disk until the single explicit [`StagedTree::commit`] at the end of a
//! successful run. A failed run drops the tree and leaves the directory
//! untouched.
//!
//! Paths are workspace-root-relative and `/`-normalized.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use tracing::debug;

use crate::types::{DocgenError, Result};

/// Collapse `.` and `..` segments and normalize separators to `/`.
pub fn normalize_path(path: &str) -> String {
    let mut segments: Vec<&str> = Vec::new();
    let normalized = path.replace('\\', "/");
    for segment in normalized.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            other => segments.push(other),
        }
    }
    segments.join("/")
}

#[derive(Debug, Clone)]
enum StagedEntry {
    Created(String),
    Overwritten(String),
}

impl StagedEntry {
    fn contents(&self) -> &str {
        match self {
            Self::Created(contents) | Self::Overwritten(contents) => contents,
        }
    }
}

/// Staged change-set over a root directory.
#[derive(Debug)]
pub struct StagedTree {
    root: PathBuf,
    staged: BTreeMap<String, StagedEntry>,
}

impl StagedTree {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            staged: BTreeMap::new(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Read a file, overlay first. Missing files surface as
    /// [`DocgenError::MissingFile`].
    pub fn read(&self, path: &str) -> Result<String> {
        let path = normalize_path(path);
        if let Some(entry) = self.staged.get(&path) {
            return Ok(entry.contents().to_string());
        }
        match fs::read_to_string(self.root.join(&path)) {
            Ok(contents) => Ok(contents),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                Err(DocgenError::MissingFile { path })
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Read a file that may legitimately be absent.
    pub fn read_optional(&self, path: &str) -> Result<Option<String>> {
        match self.read(path) {
            Ok(contents) => Ok(Some(contents)),
            Err(DocgenError::MissingFile { .. }) => Ok(None),
            Err(err) => Err(err),
        }
    }

    pub fn exists(&self, path: &str) -> bool {
        let path = normalize_path(path);
        self.staged.contains_key(&path) || self.root.join(&path).exists()
    }

    /// Stage a new file. Fails if the path already exists.
    pub fn create(&mut self, path: &str, contents: impl Into<String>) -> Result<()> {
        let path = normalize_path(path);
        if self.exists(&path) {
            return Err(DocgenError::PathExists { path });
        }
        self.staged.insert(path, StagedEntry::Created(contents.into()));
        Ok(())
    }

    /// Stage an edit to an existing file. Fails if the path is absent.
    pub fn overwrite(&mut self, path: &str, contents: impl Into<String>) -> Result<()> {
        let path = normalize_path(path);
        if !self.exists(&path) {
            return Err(DocgenError::MissingFile { path });
        }
        self.staged
            .insert(path, StagedEntry::Overwritten(contents.into()));
        Ok(())
    }

    /// Create-or-overwrite convenience.
    pub fn write(&mut self, path: &str, contents: impl Into<String>) -> Result<()> {
        let path = normalize_path(path);
        if self.exists(&path) {
            self.overwrite(&path, contents)
        } else {
            self.create(&path, contents)
        }
    }

    /// Every file under `dir`, merging disk and overlay, lexicographically
    /// sorted. An absent directory yields an empty list.
    pub fn visit(&self, dir: &str) -> Result<Vec<String>> {
        let dir = normalize_path(dir);
        let mut files: Vec<String> = Vec::new();

        let on_disk = self.root.join(&dir);
        if on_disk.is_dir() {
            let walker = WalkBuilder::new(&on_disk)
                .hidden(false)
                .git_ignore(false)
                .git_global(false)
                .git_exclude(false)
                .follow_links(false)
                .build();
            for entry in walker.filter_map(|e| e.ok()) {
                if !entry.path().is_file() {
                    continue;
                }
                if let Ok(relative) = entry.path().strip_prefix(&self.root) {
                    files.push(normalize_path(&relative.to_string_lossy()));
                }
            }
        }

        let prefix = format!("{}/", dir);
        for path in self.staged.keys() {
            if path.starts_with(&prefix) {
                files.push(path.clone());
            }
        }

        files.sort();
        files.dedup();
        Ok(files)
    }

    /// Relative paths currently staged, in sorted order.
    pub fn staged_paths(&self) -> Vec<&str> {
        self.staged.keys().map(String::as_str).collect()
    }

    /// Apply every staged entry to disk. Consumes the tree; this is the only
    /// operation that writes.
    pub fn commit(self) -> Result<()> {
        for (path, entry) in &self.staged {
            let target = self.root.join(path);
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            debug!(path = %path, "committing staged file");
            fs::write(&target, entry.contents())?;
        }
        Ok(())
    }
}
