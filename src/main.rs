use std::{io, process::ExitCode};

use git_pgm::{catalog::CommandCatalog, config::GlobalOptions, logging::init_tracing, run};

fn main() -> ExitCode {
    if let Err(err) = init_tracing() {
        eprintln!("warning: {err:#}");
    }

    let argv: Vec<String> = std::env::args().skip(1).collect();
    let catalog = CommandCatalog::builtin();
    let code = run(
        &catalog,
        GlobalOptions::from_env(),
        &argv,
        io::stdout().lock(),
        io::stderr().lock(),
    );

    ExitCode::from(u8::try_from(code).unwrap_or(1))
}
