//! Entrypoint for the `stackd` supervisor binary.
//!
//! Invoked with no arguments the binary starts the host service stack;
//! invoked with `stop` it terminates every sibling supervisor instance and
//! reclaims the shared runtime artifacts. Everything else is delegated to
//! [`stackd::run`].

use std::fmt::Display;
use std::io::{self, Write};
use std::process::ExitCode;

use stack_config::Config;

fn main() -> ExitCode {
    let config = Config::from_env();
    if let Err(error) = stackd::telemetry::initialise(&config) {
        return fail(&error);
    }
    let arguments: Vec<String> = std::env::args().skip(1).collect();
    match stackd::run(&arguments, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => fail(&error),
    }
}

/// Reports a fatal error on stderr. Telemetry may not be installed yet, so
/// the sink is the raw stream rather than a tracing event.
fn fail(error: &dyn Display) -> ExitCode {
    let _ = writeln!(io::stderr(), "stackd: {error}");
    ExitCode::FAILURE
}
