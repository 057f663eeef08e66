//! Top-level error boundary: turns dispatch results into exit codes.

use std::io::Write;

use crate::{
    app::dispatcher::Dispatcher,
    catalog::CommandCatalog,
    config::GlobalOptions,
    error::{Fault, FaultKind},
    exit_codes,
};

/// Dispatch `argv` and report any error on `err`. Returns the exit code.
pub fn run<O: Write, E: Write>(
    catalog: &CommandCatalog,
    options: GlobalOptions,
    argv: &[String],
    out: O,
    err: E,
) -> i32 {
    let mut dispatcher = Dispatcher::new(catalog, options, out, err);
    let code = match dispatcher.execute(argv) {
        Ok(code) => code,
        Err(error) => {
            let show_stack_trace = dispatcher.options().show_stack_trace;
            report(&error, show_stack_trace, dispatcher.err_mut())
        }
    };
    let (mut out, mut err) = dispatcher.into_streams();
    let _ = out.flush();
    let _ = err.flush();
    code
}

/// Write `error` to `err` and return the matching exit code.
///
/// Faults are reported as a single `fatal:` line (plus the full chain when
/// `show_stack_trace` is set) and exit 128. A transport fault reports only
/// its cause unless the chain was requested. Anything else is unexpected and
/// is printed in full with exit code 1.
pub fn report(error: &anyhow::Error, show_stack_trace: bool, err: &mut dyn Write) -> i32 {
    let Some(fault) = error.downcast_ref::<Fault>() else {
        let _ = writeln!(err, "{error:?}");
        return exit_codes::FAILURE;
    };

    let cause = fault.cause_message().filter(|_| !show_stack_trace);
    let _ = match (fault.kind(), cause) {
        (FaultKind::Transport, Some(cause)) => writeln!(err, "fatal: {cause}"),
        _ => writeln!(err, "fatal: {error:#}"),
    };
    if show_stack_trace {
        let _ = writeln!(err, "{error:?}");
    }
    exit_codes::FATAL
}

#[cfg(test)]
mod tests {
    use std::{io, path::PathBuf};

    use anyhow::{Context, anyhow};
    use git2::Repository;

    use super::*;
    use crate::{catalog::CommandRef, commands::Command, test_support::args};

    fn report_to_string(error: &anyhow::Error, show_stack_trace: bool) -> (i32, String) {
        let mut err = Vec::new();
        let code = report(error, show_stack_trace, &mut err);
        (code, String::from_utf8(err).unwrap())
    }

    #[test]
    fn domain_fault_prints_single_fatal_line() {
        let error = anyhow::Error::from(Fault::die("not a valid object name"));
        let (code, text) = report_to_string(&error, false);
        assert_eq!(code, exit_codes::FATAL);
        assert_eq!(text, "fatal: not a valid object name\n");
    }

    #[test]
    fn domain_fault_with_stack_trace_prints_chain() {
        let error = Err::<(), _>(Fault::die("inner"))
            .context("outer")
            .unwrap_err();
        let (code, text) = report_to_string(&error, true);
        assert_eq!(code, exit_codes::FATAL);
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("fatal: outer: inner"));
        assert!(text.contains("Caused by:"), "{text}");
    }

    #[test]
    fn transport_fault_surfaces_cause_only() {
        let source = git2::Error::from_str("connection refused");
        let error = anyhow::Error::from(Fault::transport("could not read from remote", source));
        let (code, text) = report_to_string(&error, false);
        assert_eq!(code, exit_codes::FATAL);
        assert_eq!(text, "fatal: connection refused\n");
    }

    #[test]
    fn transport_fault_with_stack_trace_prints_full_message() {
        let source = git2::Error::from_str("connection refused");
        let error = anyhow::Error::from(Fault::transport("could not read from remote", source));
        let (code, text) = report_to_string(&error, true);
        assert_eq!(code, exit_codes::FATAL);
        assert!(text.starts_with("fatal: could not read from remote: "), "{text}");
    }

    #[test]
    fn repository_fault_is_fatal() {
        let error = anyhow::Error::from(Fault::from(git2::Error::from_str("bad object")));
        let (code, text) = report_to_string(&error, false);
        assert_eq!(code, exit_codes::FATAL);
        assert_eq!(text, "fatal: bad object\n");
    }

    #[test]
    fn unclassified_error_prints_everything_and_exits_one() {
        let error = anyhow!("disk on fire").context("while writing output");
        let (code, text) = report_to_string(&error, false);
        assert_eq!(code, exit_codes::FAILURE);
        assert!(!text.starts_with("fatal:"));
        assert!(text.contains("while writing output"));
        assert!(text.contains("disk on fire"));
    }

    struct Exploding;

    impl Command for Exploding {
        fn requires_repository(&self) -> bool {
            false
        }

        fn init(&mut self, _repository: Option<Repository>, _git_dir: PathBuf) {}

        fn execute(&mut self, _args: &[String], _out: &mut dyn Write) -> anyhow::Result<()> {
            Err(io::Error::other("pipe closed").into())
        }
    }

    #[test]
    fn run_maps_errors_to_exit_codes() {
        let catalog = CommandCatalog::new(vec![CommandRef::new("explode", "", |_| {
            Box::new(Exploding)
        })]);
        let mut err = Vec::new();
        let code = run(
            &catalog,
            GlobalOptions::default(),
            &args(&["explode"]),
            io::sink(),
            &mut err,
        );
        assert_eq!(code, exit_codes::FAILURE);
        assert!(String::from_utf8(err).unwrap().contains("pipe closed"));

        let code = run(&catalog, GlobalOptions::default(), &args(&[]), io::sink(), io::sink());
        assert_eq!(code, exit_codes::SUCCESS);
    }
}
