//! Directory listing, tree traversal, and connector layout.

pub(crate) mod layout;
pub(crate) mod walk;

use crate::error::TreeError;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub use walk::TreeWalker;

/// A single item returned by a directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Display name (filename component only).
    pub name: String,
    /// Full filesystem path.
    pub path: PathBuf,
    /// Whether this entry is a directory (never true for a symlink).
    pub is_dir: bool,
    /// Whether this entry is a symbolic link.
    pub is_symlink: bool,
}

impl Entry {
    /// Dotfiles are never rendered or counted.
    pub fn is_hidden(&self) -> bool {
        self.name.starts_with('.')
    }
}

/// Result of listing one directory: whatever entries could be read, plus
/// every error met along the way.
#[derive(Debug, Default)]
pub struct Listing {
    pub entries: Vec<Entry>,
    pub errors: Vec<TreeError>,
}

/// Configuration for a walk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TreeConfig {
    /// Maximum nesting depth below each root (`None` for unlimited).
    pub max_depth: Option<usize>,
}

impl TreeConfig {
    /// Map the `-L` flag value, where 0 means unlimited.
    pub fn with_level(level: usize) -> Self {
        Self {
            max_depth: (level > 0).then_some(level),
        }
    }

    /// Whether a directory rendered at `depth` should be descended into.
    pub fn descends_at(&self, depth: usize) -> bool {
        self.max_depth.map_or(true, |max| depth < max)
    }
}

/// Running totals for a whole run, shared across all roots.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counters {
    pub directories: usize,
    pub files: usize,
    /// Symlinks whose target could not be resolved. Counted as neither a
    /// directory nor a file.
    pub unresolved_links: usize,
}

/// Abstraction over the filesystem so traversal can be driven by a fake.
pub trait DirLister {
    /// List the immediate children of `dir` in the order the filesystem
    /// yields them. Failures are returned alongside any partial result.
    fn list(&self, dir: &Path) -> Listing;

    /// Read the raw target of a symlink without resolving it further.
    fn read_link(&self, path: &Path) -> io::Result<PathBuf>;

    /// Stat through links and report whether the final target is a directory.
    fn target_is_dir(&self, path: &Path) -> io::Result<bool>;
}

/// Default `DirLister` backed by a single-level, unsorted walkdir pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct WalkdirLister;

impl DirLister for WalkdirLister {
    fn list(&self, dir: &Path) -> Listing {
        let mut listing = Listing::default();
        let walker = WalkDir::new(dir).max_depth(1).follow_links(false);

        for entry_result in walker {
            match entry_result {
                Ok(entry) => {
                    if entry.depth() == 0 {
                        // walkdir yields a non-directory root as a lone entry
                        if !entry.file_type().is_dir() {
                            listing.errors.push(TreeError::Listing {
                                path: dir.to_path_buf(),
                                source: io::Error::new(io::ErrorKind::Other, "Not a directory"),
                            });
                        }
                        continue;
                    }
                    let file_type = entry.file_type();
                    listing.entries.push(Entry {
                        name: entry.file_name().to_string_lossy().to_string(),
                        path: entry.path().to_path_buf(),
                        is_dir: file_type.is_dir(),
                        is_symlink: file_type.is_symlink(),
                    });
                }
                Err(e) => {
                    let path = e.path().unwrap_or(dir).to_path_buf();
                    let message = e.to_string();
                    let source = e
                        .into_io_error()
                        .unwrap_or_else(|| io::Error::new(io::ErrorKind::Other, message));
                    listing.errors.push(TreeError::Listing { path, source });
                }
            }
        }

        listing
    }

    fn read_link(&self, path: &Path) -> io::Result<PathBuf> {
        std::fs::read_link(path)
    }

    fn target_is_dir(&self, path: &Path) -> io::Result<bool> {
        std::fs::metadata(path).map(|m| m.is_dir())
    }
}
