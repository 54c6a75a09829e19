//! `tintlog` - write log lines from the shell.
//!
//! Usage:
//!   tintlog [OPTIONS] [MESSAGE]...
//!   echo "disk low" | tintlog --level warning

use clap::Parser;
use std::process::ExitCode;
use tintlog::cli::{Cli, run};

fn main() -> ExitCode {
    let cli = Cli::parse();
    run(&cli)
}
