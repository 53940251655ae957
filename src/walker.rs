//! Repository tree walker
//!
//! Builds a read-only, sorted view of every file and directory below a scan
//! root. Subtrees named in the [`IgnoreSet`] are never entered, and
//! subdirectories that cannot be read are skipped with a warning. Only
//! problems with the root itself are reported as errors.

use crate::error::{ScanError, ScanResult};
use ignore::WalkBuilder;
use std::collections::BTreeSet;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, warn};

/// Directory names excluded from every scan
pub const DEFAULT_IGNORED_DIRS: &[&str] = &[".git", "node_modules", "bin", "obj", "dist", "build", ".venv"];

/// Directory names whose subtrees the walker never enters.
///
/// Matching is by exact directory name at any depth, not by path substring:
/// `build/` is skipped but `buildscripts/` is not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IgnoreSet {
    names: BTreeSet<String>,
}

impl IgnoreSet {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, dir_name: &str) -> bool {
        self.names.contains(dir_name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl Default for IgnoreSet {
    fn default() -> Self {
        Self::new(DEFAULT_IGNORED_DIRS.iter().copied())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Dir,
}

/// One file or directory below the scan root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeEntry {
    /// Path relative to the root, `/`-separated
    pub rel_path: String,
    pub kind: EntryKind,
    /// 1 for direct children of the root
    pub depth: usize,
}

impl TreeEntry {
    /// Final path segment
    pub fn name(&self) -> &str {
        self.rel_path
            .rsplit_once('/')
            .map_or(self.rel_path.as_str(), |(_, name)| name)
    }

    /// Lower-cased extension of the final segment, if any
    pub fn extension(&self) -> Option<String> {
        let name = self.name();
        let (stem, ext) = name.rsplit_once('.')?;
        if stem.is_empty() {
            return None;
        }
        Some(ext.to_ascii_lowercase())
    }

    /// Final segment without its extension
    pub fn stem(&self) -> &str {
        let name = self.name();
        match name.rsplit_once('.') {
            Some((stem, _)) if !stem.is_empty() => stem,
            _ => name,
        }
    }

    /// Relative path of the parent directory ("" for root children)
    pub fn parent(&self) -> &str {
        self.rel_path.rsplit_once('/').map_or("", |(parent, _)| parent)
    }

    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Dir
    }
}

/// Walked view of a repository
#[derive(Debug, Clone)]
pub struct RepoTree {
    root: PathBuf,
    entries: Vec<TreeEntry>,
    skipped: Vec<PathBuf>,
}

impl RepoTree {
    /// Validate `root` and walk everything below it.
    ///
    /// The root is canonicalized first. A missing root, a root that is not a
    /// directory, or a root that cannot be listed is fatal.
    pub fn walk(root: &Path, ignore_set: &IgnoreSet) -> ScanResult<Self> {
        let root = validate_root(root)?;
        debug!("Walking {}", root.display());

        let filter_set = ignore_set.clone();
        let mut builder = WalkBuilder::new(&root);
        builder
            .standard_filters(false)
            .follow_links(false)
            .sort_by_file_name(|a, b| a.cmp(b))
            .filter_entry(move |entry| {
                if entry.depth() == 0 {
                    return true;
                }
                let is_dir = entry.file_type().is_some_and(|ft| ft.is_dir());
                !(is_dir && filter_set.contains(&entry.file_name().to_string_lossy()))
            });

        let mut entries = Vec::new();
        let mut skipped = Vec::new();

        for result in builder.build() {
            let entry = match result {
                Ok(entry) => entry,
                Err(err) => {
                    warn!("Skipping unreadable path: {}", err);
                    if let Some(path) = error_path(&err) {
                        skipped.push(path);
                    }
                    continue;
                }
            };
            if entry.depth() == 0 {
                continue;
            }
            let Some(kind) = entry_kind(&entry) else {
                continue;
            };
            let Ok(rel) = entry.path().strip_prefix(&root) else {
                continue;
            };
            entries.push(TreeEntry {
                rel_path: to_rel_string(rel),
                kind,
                depth: entry.depth(),
            });
        }

        debug!(
            "Walked {} entries under {} ({} skipped)",
            entries.len(),
            root.display(),
            skipped.len()
        );

        Ok(Self {
            root,
            entries,
            skipped,
        })
    }

    /// Canonical root the tree was walked from
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// All entries in sorted walk order
    pub fn entries(&self) -> &[TreeEntry] {
        &self.entries
    }

    pub fn files(&self) -> impl Iterator<Item = &TreeEntry> {
        self.entries.iter().filter(|e| e.is_file())
    }

    pub fn dirs(&self) -> impl Iterator<Item = &TreeEntry> {
        self.entries.iter().filter(|e| e.is_dir())
    }

    /// Files directly inside the root
    pub fn root_files(&self) -> impl Iterator<Item = &TreeEntry> {
        self.files().filter(|e| e.depth == 1)
    }

    /// Look up an entry by its exact relative path
    pub fn get(&self, rel_path: &str) -> Option<&TreeEntry> {
        self.entries.iter().find(|e| e.rel_path == rel_path)
    }

    /// Look up a file by its exact relative path
    pub fn file(&self, rel_path: &str) -> Option<&TreeEntry> {
        self.get(rel_path).filter(|e| e.is_file())
    }

    /// Absolute path of an entry
    pub fn abs_path(&self, entry: &TreeEntry) -> PathBuf {
        entry
            .rel_path
            .split('/')
            .fold(self.root.clone(), |acc, part| acc.join(part))
    }

    /// Subtrees that could not be read during the walk
    pub fn skipped(&self) -> &[PathBuf] {
        &self.skipped
    }
}

fn validate_root(root: &Path) -> ScanResult<PathBuf> {
    let canonical = root.canonicalize().map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            ScanError::RootNotFound {
                path: root.to_path_buf(),
            }
        } else {
            ScanError::RootUnreadable {
                path: root.to_path_buf(),
                source,
            }
        }
    })?;

    if !canonical.is_dir() {
        return Err(ScanError::NotADirectory { path: canonical });
    }

    if let Err(source) = std::fs::read_dir(&canonical) {
        return Err(ScanError::RootUnreadable {
            path: canonical,
            source,
        });
    }

    Ok(canonical)
}

/// Classify an entry, resolving symlinks without following them into the walk
fn entry_kind(entry: &ignore::DirEntry) -> Option<EntryKind> {
    let ft = entry.file_type()?;
    if ft.is_dir() {
        return Some(EntryKind::Dir);
    }
    if ft.is_file() {
        return Some(EntryKind::File);
    }
    if ft.is_symlink() {
        let meta = std::fs::metadata(entry.path()).ok()?;
        if meta.is_dir() {
            return Some(EntryKind::Dir);
        }
        if meta.is_file() {
            return Some(EntryKind::File);
        }
    }
    None
}

fn to_rel_string(rel: &Path) -> String {
    rel.components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

fn error_path(err: &ignore::Error) -> Option<PathBuf> {
    match err {
        ignore::Error::WithPath { path, .. } => Some(path.clone()),
        ignore::Error::WithDepth { err, .. } => error_path(err),
        ignore::Error::WithLineNumber { err, .. } => error_path(err),
        ignore::Error::Loop { child, .. } => Some(child.clone()),
        _ => None,
    }
}
