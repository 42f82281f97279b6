//! Bubble sort workload for exercising instrumentation and coverage tools.
//!
//! Sorts a fixed reversed array, prints the elapsed time, and checks the
//! result. Takes no arguments.

use std::io::{self, Write};
use std::process::ExitCode;

use sort_bench::{ARRAY_LEN, BenchError};

fn main() -> ExitCode {
    env_logger::init();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match sort_bench::run(ARRAY_LEN, &mut out) {
        Ok(elapsed_ms) => {
            log::info!("sorted {} elements in {} ms", ARRAY_LEN, elapsed_ms);
            ExitCode::SUCCESS
        }
        // diagnostic already written to stdout
        Err(err @ BenchError::NotSorted(_)) => err.exit_code(),
        Err(err) => {
            drop(out);
            let _ = writeln!(io::stderr(), "{}", err);
            err.exit_code()
        }
    }
}
