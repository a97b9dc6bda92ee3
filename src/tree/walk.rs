use std::io::{self, Write};
use std::path::Path;

use super::layout::prefix;
use super::{Counters, DirLister, Entry, TreeConfig};
use crate::error::TreeError;
use crate::render::{entry_line, sanitize_terminal_text};

/// Recursive tree renderer.
///
/// Lines go to `out` as they are produced; non-fatal errors go to `err`.
/// Counts accumulate across every root walked by the same instance.
pub struct TreeWalker<L, W, E> {
    lister: L,
    config: TreeConfig,
    out: W,
    err: E,
    counters: Counters,
}

impl<L: DirLister, W: Write, E: Write> TreeWalker<L, W, E> {
    pub fn new(lister: L, config: TreeConfig, out: W, err: E) -> Self {
        Self {
            lister,
            config,
            out,
            err,
            counters: Counters::default(),
        }
    }

    /// Totals gathered so far.
    pub fn counters(&self) -> Counters {
        self.counters
    }

    /// Walk every root in order, defaulting to `.` when none are given.
    ///
    /// Only a failure to write to the output sink aborts the run.
    pub fn run<P: AsRef<Path>>(&mut self, roots: &[P]) -> io::Result<Counters> {
        if roots.is_empty() {
            self.walk_root(Path::new("."))?;
        }
        for root in roots {
            self.walk_root(root.as_ref())?;
        }
        Ok(self.counters)
    }

    /// Emit the root line and the tree beneath it.
    pub fn walk_root(&mut self, root: &Path) -> io::Result<()> {
        writeln!(self.out, "{}", sanitize_terminal_text(&root.to_string_lossy()))?;
        self.walk_dir(root, &[])
    }

    fn walk_dir(&mut self, dir: &Path, ancestors: &[bool]) -> io::Result<()> {
        let listing = self.lister.list(dir);
        for error in &listing.errors {
            self.report(error);
        }

        let visible: Vec<Entry> = listing
            .entries
            .into_iter()
            .filter(|e| !e.is_hidden())
            .collect();
        let Some(last) = visible.len().checked_sub(1) else {
            return Ok(());
        };

        let mut lineage = Vec::with_capacity(ancestors.len() + 1);
        lineage.extend_from_slice(ancestors);
        lineage.push(false);
        let depth = lineage.len();

        for (i, entry) in visible.iter().enumerate() {
            lineage[depth - 1] = i == last;
            let connector = prefix(&lineage);

            if entry.is_symlink {
                self.visit_symlink(entry, &connector)?;
                continue;
            }

            writeln!(self.out, "{}", entry_line(&connector, &entry.name, None))?;
            if !entry.is_dir {
                self.counters.files += 1;
                continue;
            }

            self.counters.directories += 1;
            if self.config.descends_at(depth) {
                self.walk_dir(&entry.path, &lineage)?;
            }
        }

        Ok(())
    }

    /// Render a symlink with its raw target and classify it by what it
    /// resolves to. Links are never descended into.
    fn visit_symlink(&mut self, entry: &Entry, connector: &str) -> io::Result<()> {
        let target = match self.lister.read_link(&entry.path) {
            Ok(target) => target.to_string_lossy().to_string(),
            Err(source) => {
                self.report(&TreeError::LinkResolution {
                    path: entry.path.clone(),
                    source,
                });
                String::new()
            }
        };
        writeln!(
            self.out,
            "{}",
            entry_line(connector, &entry.name, Some(&target))
        )?;

        match self.lister.target_is_dir(&entry.path) {
            Ok(true) => self.counters.directories += 1,
            Ok(false) => self.counters.files += 1,
            Err(source) => {
                self.counters.unresolved_links += 1;
                self.report(&TreeError::LinkResolution {
                    path: entry.path.clone(),
                    source,
                });
            }
        }
        Ok(())
    }

    fn report(&mut self, error: &TreeError) {
        // A broken diagnostic sink must not stop the walk.
        let _ = writeln!(self.err, "plaintree: {error}");
    }
}
