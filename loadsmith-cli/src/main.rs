//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use std::process::ExitCode;

fn main() -> ExitCode {
    match loadsmith_cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(loadsmith_cli::CliError::ArgumentParsing(err)) => {
            #[expect(
                clippy::let_underscore_must_use,
                reason = "nothing useful can be done if usage output cannot be written"
            )]
            let _ = err.print();
            if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(err) => {
            report(&err);
            ExitCode::FAILURE
        }
    }
}

#[expect(clippy::print_stderr, reason = "report fatal errors to the user")]
fn report(err: &loadsmith_cli::CliError) {
    eprintln!("loadsmith: {err}");
}
