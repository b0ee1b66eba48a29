//! Command-line arguments and default resolution.

use anyhow::{Context, Result};
use clap::Parser;
use disktop_core::platform::SizeMode;
use disktop_core::scanner::{DEFAULT_MAX_TASKS, DEFAULT_TOP_N};
use disktop_core::ScanConfig;
use std::path::PathBuf;

/// Default `-d`. Whole drives are the usual root on Windows, so only the
/// top level is listed unless asked otherwise.
#[cfg(windows)]
pub const DEFAULT_DEPTH: i64 = 0;
#[cfg(not(windows))]
pub const DEFAULT_DEPTH: i64 = -1;

/// Scan a directory tree for totals and the largest files
#[derive(Parser, Debug, Clone)]
#[command(
    name = "disktop",
    version,
    about = "Scan a directory tree for totals and the largest files",
    after_help = "EXAMPLES:\n    \
        disktop -r /var -n 20\n    \
        disktop -r C:\\ -d 2\n    \
        disktop -d -1 --allocated"
)]
pub struct CliArgs {
    /// Root directory to begin walking (default: current working directory)
    #[arg(short = 'r', long = "root", value_name = "PATH")]
    pub root: Option<PathBuf>,

    /// Subdirectory levels to descend into; negative means unbounded
    #[arg(
        short = 'd',
        long = "depth",
        default_value_t = DEFAULT_DEPTH,
        allow_negative_numbers = true,
        value_name = "DEPTH"
    )]
    pub depth: i64,

    /// Number of largest files to track and print
    #[arg(short = 'n', long = "top", default_value_t = DEFAULT_TOP_N, value_name = "COUNT")]
    pub top: usize,

    /// Directory tasks allowed in flight at once
    #[arg(short = 'j', long = "max-tasks", default_value_t = DEFAULT_MAX_TASKS, value_name = "NUM")]
    pub max_tasks: usize,

    /// Worker threads (default: number of CPUs)
    #[arg(short = 't', long = "threads", value_name = "NUM")]
    pub threads: Option<usize>,

    /// Count space allocated on disk instead of logical file length
    #[arg(long)]
    pub allocated: bool,

    /// Enable debug logging
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

impl CliArgs {
    /// Depth limit as the library expects it.
    pub fn max_depth(&self) -> Option<usize> {
        usize::try_from(self.depth).ok()
    }

    pub fn size_mode(&self) -> SizeMode {
        if self.allocated {
            SizeMode::Allocated
        } else {
            SizeMode::Logical
        }
    }

    /// Build the scan configuration, falling back to the working directory
    /// when no root was given.
    pub fn to_config(&self) -> Result<ScanConfig> {
        let root = match &self.root {
            Some(root) => root.clone(),
            None => std::env::current_dir().context("can not resolve working directory")?,
        };

        let mut config = ScanConfig::new(root)
            .with_max_depth(self.max_depth())
            .with_top_n(self.top)
            .with_max_tasks(self.max_tasks)
            .with_size_mode(self.size_mode());
        if let Some(threads) = self.threads {
            config = config.with_threads(threads);
        }
        Ok(config)
    }
}
