mod cli;

use bath_logger::OutputTarget;
use clap::Parser;
use std::io::{self, Write};

use cli::Options;

fn main() {
    let options = Options::parse();
    std::process::exit(run(&options));
}

fn run(options: &Options) -> i32 {
    let logger = bath_logger::logger();
    if let Some(threshold) = options.threshold {
        logger.set_threshold(threshold);
    }
    if options.stderr {
        logger.set_output_target(OutputTarget::Stderr);
    }
    match logger.log_at(options.level, format_args!("{}", options.message())) {
        Ok(_) => 0,
        Err(e) => {
            // stderr can be the stream that failed, so don't panic like eprintln! would
            let _ = writeln!(
                io::stderr(),
                "ERROR: Unable to write log line to {}: {}",
                logger.output_target(),
                e
            );
            1
        }
    }
}
