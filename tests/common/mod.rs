#![allow(dead_code)]

use plaintree::tree::{Counters, TreeConfig, TreeWalker, WalkdirLister};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Create a directory structure from a list of relative paths.
/// Paths ending with '/' create directories; others create empty files.
pub fn create_fixture(paths: &[&str]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    for p in paths {
        let full = tmp.path().join(p);
        if p.ends_with('/') {
            fs::create_dir_all(&full).unwrap();
        } else {
            if let Some(parent) = full.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::write(&full, "").unwrap();
        }
    }
    tmp
}

/// Output of a walk over the real filesystem.
pub struct Walked {
    pub stdout: String,
    pub stderr: String,
    pub counters: Counters,
}

impl Walked {
    /// Rendered lines, root lines included.
    pub fn lines(&self) -> Vec<&str> {
        self.stdout.lines().collect()
    }

    /// The line whose name (after the connector) is `name`.
    pub fn line_for(&self, name: &str) -> Option<&str> {
        self.stdout.lines().find(|l| entry_name(l) == name)
    }
}

/// Strip the connector glyphs and any symlink suffix from a rendered line.
pub fn entry_name(line: &str) -> &str {
    let name = line
        .rsplit_once("\u{2500}\u{2500} ")
        .map(|(_, n)| n)
        .unwrap_or(line);
    name.split(" -> ").next().unwrap_or(name)
}

/// Walk `roots` with the default lister, capturing both sinks.
pub fn walk<P: AsRef<Path>>(roots: &[P], config: TreeConfig) -> Walked {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let counters = TreeWalker::new(WalkdirLister, config, &mut out, &mut err)
        .run(roots)
        .unwrap();
    Walked {
        stdout: String::from_utf8(out).unwrap(),
        stderr: String::from_utf8(err).unwrap(),
        counters,
    }
}
