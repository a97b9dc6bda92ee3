#![forbid(unsafe_code)]

use anyhow::{Context, Result};
use clap::Parser;
use plaintree::cli::Args;
use plaintree::render::summary_line;
use plaintree::tree::{TreeWalker, WalkdirLister};
use std::io::{self, BufWriter, Write};

fn main() {
    if let Err(e) = run_app() {
        eprintln!("plaintree: {e:#}");
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let args = Args::parse().validated();
    let config = args.tree_config();

    if args.verbose > 0 {
        let depth = match config.max_depth {
            Some(n) => n.to_string(),
            None => "unlimited".to_string(),
        };
        for root in &args.paths {
            eprintln!("plaintree: walking {} (max depth {depth})", root.display());
        }
    }

    let stdout = io::stdout();
    let stderr = io::stderr();
    let mut out = BufWriter::new(stdout.lock());
    let mut err = BufWriter::new(stderr.lock());

    let counters = TreeWalker::new(WalkdirLister, config, &mut out, &mut err)
        .run(&args.paths)
        .context("failed to write tree")?;

    // Diagnostics before the report so they stay near the lines they concern.
    err.flush().context("failed to flush diagnostics")?;
    writeln!(out, "\n{}", summary_line(&counters)).context("failed to write report")?;
    out.flush().context("failed to flush output")?;

    if args.verbose > 0 && counters.unresolved_links > 0 {
        eprintln!(
            "plaintree: {} symlink(s) could not be resolved and were not counted",
            counters.unresolved_links
        );
    }
    Ok(())
}
