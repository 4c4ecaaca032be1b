//! demoprogram Binary Entry Point
//!
//! Parses arguments, installs logging on stderr and writes the demo
//! transcript to stdout.

use std::io;
use std::process;

use clap::Parser;
use frameworks_demo::{init_logging, run_demo, DemoArgs};
use tracing::error;

fn main() {
    let args = match DemoArgs::try_parse() {
        Ok(args) => args,
        Err(e) => {
            // --help and --version are not failures
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            process::exit(code);
        }
    };

    if let Err(e) = init_logging(&args.log_level, args.log_format) {
        eprintln!("Error: Failed to initialize logging: {}", e);
        process::exit(1);
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = run_demo(&args, &mut out) {
        error!(%e, "failed to write demo output");
        process::exit(1);
    }
}
