use std::{
    io::{self, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};
use tracing::debug;

use crate::{
    catalog::CommandCatalog,
    cli::{self, BuiltinAction},
    config::GlobalOptions,
    core::git::{find_repository_dir, open_repository},
    exit_codes,
    help::{write_help, write_listing},
};

/// Flushes the wrapped writer when dropped, including on early `?` returns.
struct FlushOnDrop<'w, W: Write> {
    inner: &'w mut W,
}

impl<W: Write> Write for FlushOnDrop<'_, W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

impl<W: Write> Drop for FlushOnDrop<'_, W> {
    fn drop(&mut self) {
        let _ = self.inner.flush();
    }
}

/// Routes an argument vector to a subcommand or to a built-in action.
pub struct Dispatcher<'c, O: Write, E: Write> {
    catalog: &'c CommandCatalog,
    options: GlobalOptions,
    out: O,
    err: E,
}

impl<'c, O: Write, E: Write> Dispatcher<'c, O, E> {
    pub const fn new(catalog: &'c CommandCatalog, options: GlobalOptions, out: O, err: E) -> Self {
        Self {
            catalog,
            options,
            out,
            err,
        }
    }

    #[must_use]
    pub const fn options(&self) -> &GlobalOptions {
        &self.options
    }

    pub const fn err_mut(&mut self) -> &mut E {
        &mut self.err
    }

    pub fn into_streams(self) -> (O, E) {
        (self.out, self.err)
    }

    /// Dispatch `argv` (program name excluded) and return the exit code.
    ///
    /// A first argument without a leading dash names a subcommand; anything
    /// else is parsed as global options.
    ///
    /// # Errors
    /// Returns errors raised by the subcommand, by opening the repository, or
    /// by writing to the output streams.
    pub fn execute(&mut self, argv: &[String]) -> Result<i32> {
        let Some((first, rest)) = argv.split_first() else {
            write_help(&mut self.out, self.catalog)?;
            return Ok(exit_codes::SUCCESS);
        };

        if !first.starts_with('-') {
            return self.run_subcommand(first, rest);
        }

        match cli::parse(&mut self.options, argv) {
            Ok(Some(action)) => self.perform(action)?,
            Ok(None) => {}
            Err(err) if err.is_fatal() => {
                writeln!(self.err, "fatal: {err}")?;
                return Ok(exit_codes::FAILURE);
            }
            Err(err) => debug!(error = %err, "ignoring option error without trailing arguments"),
        }
        Ok(exit_codes::SUCCESS)
    }

    fn perform(&mut self, action: BuiltinAction) -> io::Result<()> {
        match action {
            BuiltinAction::Help => write_help(&mut self.out, self.catalog),
            BuiltinAction::Complete => write_listing(&mut self.out, self.catalog.complete()),
            BuiltinAction::Incomplete => write_listing(&mut self.out, self.catalog.incomplete()),
        }
    }

    fn run_subcommand(&mut self, name: &str, args: &[String]) -> Result<i32> {
        let catalog = self.catalog;
        let Some(command_ref) = catalog.get(name) else {
            // Unknown names fall back to the help screen with a zero exit.
            debug!(command = name, "unknown command; showing help");
            write_help(&mut self.out, catalog)?;
            return Ok(exit_codes::SUCCESS);
        };

        let mut command = command_ref.create(catalog);
        if command.requires_repository() {
            let Some(git_dir) = self.resolve_git_dir()? else {
                writeln!(self.err, "error: can't find git directory")?;
                return Ok(exit_codes::FAILURE);
            };
            let repository = open_repository(&git_dir)
                .with_context(|| format!("failed to open repository at {}", git_dir.display()))?;
            debug!(command = name, git_dir = %git_dir.display(), "dispatching with repository");
            command.init(Some(repository), git_dir);
        } else {
            debug!(command = name, "dispatching without repository");
            command.init(None, PathBuf::new());
        }

        let mut out = FlushOnDrop {
            inner: &mut self.out,
        };
        command.execute(args, &mut out)?;
        Ok(exit_codes::SUCCESS)
    }

    /// Explicit git dir if set, otherwise the nearest `.git` above the
    /// current directory. Either way it must be an existing directory.
    fn resolve_git_dir(&self) -> Result<Option<PathBuf>> {
        let candidate = match &self.options.git_dir {
            Some(explicit) => Some(explicit.clone()),
            None => find_repository_dir(),
        };
        let Some(dir) = candidate.filter(|dir| dir.is_dir()) else {
            return Ok(None);
        };
        let dir = std::path::absolute(&dir)
            .with_context(|| format!("failed to resolve {}", dir.display()))?;
        Ok(Some(dir))
    }
}
