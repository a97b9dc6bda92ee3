use crate::tree::TreeConfig;
use clap::Parser;
use std::path::PathBuf;

const EXAMPLES: &str = "\
Examples:
  plaintree                 List the current directory
  plaintree -L 2 src        List src, two levels deep
  plaintree docs tests      List several roots with one combined report";

#[derive(Parser, Debug, Clone)]
#[command(
    name = "plaintree",
    version,
    about = "List directory contents as an indented tree",
    after_help = EXAMPLES
)]
pub struct Args {
    /// Directories to list (default: current directory)
    #[arg(default_value = ".")]
    pub paths: Vec<PathBuf>,

    /// Descend only N directories deep (0 = unlimited)
    #[arg(short = 'L', long = "level", value_name = "N", default_value_t = 0)]
    pub level: usize,

    /// Print run details to stderr (repeatable)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Enforce invariants after parsing.
    pub fn validated(mut self) -> Self {
        if self.paths.is_empty() {
            self.paths.push(PathBuf::from("."));
        }
        self
    }

    pub fn tree_config(&self) -> TreeConfig {
        TreeConfig::with_level(self.level)
    }
}
